//! Option flags accepted by the option applier.

use super::curl_flags;

curl_flags! {
    /// A configuration knob, identified by its `CURLOPT_*` code.
    pub enum CurlOpt (unknown = "CURLOPT_UNKNOWN") {
        /// Upload size, read back when a body-read callback is installed.
        InFileSize = 14 => "CURLOPT_INFILESIZE",
        Timeout = 13 => "CURLOPT_TIMEOUT",
        Verbose = 41 => "CURLOPT_VERBOSE",
        /// Prepend the raw header blob to the delivered body.
        Header = 42 => "CURLOPT_HEADER",
        NoBody = 44 => "CURLOPT_NOBODY",
        FailOnError = 45 => "CURLOPT_FAILONERROR",
        Post = 47 => "CURLOPT_POST",
        FollowLocation = 52 => "CURLOPT_FOLLOWLOCATION",
        SslVerifyPeer = 64 => "CURLOPT_SSL_VERIFYPEER",
        MaxRedirs = 68 => "CURLOPT_MAXREDIRS",
        ConnectTimeout = 78 => "CURLOPT_CONNECTTIMEOUT",
        SslVerifyHost = 81 => "CURLOPT_SSL_VERIFYHOST",
        /// Output file sink.
        File = 10001 => "CURLOPT_FILE",
        Url = 10002 => "CURLOPT_URL",
        Proxy = 10004 => "CURLOPT_PROXY",
        UserPwd = 10005 => "CURLOPT_USERPWD",
        PostFields = 10015 => "CURLOPT_POSTFIELDS",
        Referer = 10016 => "CURLOPT_REFERER",
        UserAgent = 10018 => "CURLOPT_USERAGENT",
        Cookie = 10022 => "CURLOPT_COOKIE",
        HttpHeader = 10023 => "CURLOPT_HTTPHEADER",
        CustomRequest = 10036 => "CURLOPT_CUSTOMREQUEST",
        Encoding = 10102 => "CURLOPT_ENCODING",
        /// Return the body from the transfer instead of printing it.
        ReturnTransfer = 19913 => "CURLOPT_RETURNTRANSFER",
        WriteFunction = 20011 => "CURLOPT_WRITEFUNCTION",
        ReadFunction = 20012 => "CURLOPT_READFUNCTION",
        HeaderFunction = 20079 => "CURLOPT_HEADERFUNCTION",
    }
}
