//! Info flags and the info name table.

use super::curl_flags;

curl_flags! {
    /// A piece of transfer metadata, identified by its `CURLINFO_*` code.
    ///
    /// `All` (code 0) asks for every field in [`INFO_NAMES`] at once.
    pub enum CurlInfo (unknown = "CURLINFO_UNKNOWN") {
        All = 0 => "CURLINFO_ALL",
        /// Raw request header text; only recorded when header tracking is on.
        HeaderOut = 2 => "CURLINFO_HEADER_OUT",
        EffectiveUrl = 1048577 => "CURLINFO_EFFECTIVE_URL",
        ContentType = 1048594 => "CURLINFO_CONTENT_TYPE",
        Private = 1048597 => "CURLINFO_PRIVATE",
        RedirectUrl = 1048607 => "CURLINFO_REDIRECT_URL",
        PrimaryIp = 1048608 => "CURLINFO_PRIMARY_IP",
        HttpCode = 2097154 => "CURLINFO_HTTP_CODE",
        HeaderSize = 2097163 => "CURLINFO_HEADER_SIZE",
        RequestSize = 2097164 => "CURLINFO_REQUEST_SIZE",
        SslVerifyResult = 2097165 => "CURLINFO_SSL_VERIFYRESULT",
        FileTime = 2097166 => "CURLINFO_FILETIME",
        RedirectCount = 2097172 => "CURLINFO_REDIRECT_COUNT",
        TotalTime = 3145731 => "CURLINFO_TOTAL_TIME",
        NameLookupTime = 3145732 => "CURLINFO_NAMELOOKUP_TIME",
        ConnectTime = 3145733 => "CURLINFO_CONNECT_TIME",
        PreTransferTime = 3145734 => "CURLINFO_PRETRANSFER_TIME",
        SizeUpload = 3145735 => "CURLINFO_SIZE_UPLOAD",
        SizeDownload = 3145736 => "CURLINFO_SIZE_DOWNLOAD",
        SpeedDownload = 3145737 => "CURLINFO_SPEED_DOWNLOAD",
        SpeedUpload = 3145738 => "CURLINFO_SPEED_UPLOAD",
        ContentLengthDownload = 3145743 => "CURLINFO_CONTENT_LENGTH_DOWNLOAD",
        ContentLengthUpload = 3145744 => "CURLINFO_CONTENT_LENGTH_UPLOAD",
        StartTransferTime = 3145745 => "CURLINFO_STARTTRANSFER_TIME",
        RedirectTime = 3145747 => "CURLINFO_REDIRECT_TIME",
    }
}

/// Every info flag reported by the aggregate lookup, with its field name.
///
/// The order is the order of the aggregate report.
pub static INFO_NAMES: &[(CurlInfo, &str)] = &[
    (CurlInfo::HttpCode, "http_code"),
    (CurlInfo::EffectiveUrl, "url"),
    (CurlInfo::TotalTime, "total_time"),
    (CurlInfo::NameLookupTime, "namelookup_time"),
    (CurlInfo::ConnectTime, "connect_time"),
    (CurlInfo::PreTransferTime, "pretransfer_time"),
    (CurlInfo::StartTransferTime, "starttransfer_time"),
    (CurlInfo::RedirectCount, "redirect_count"),
    (CurlInfo::RedirectTime, "redirect_time"),
    (CurlInfo::SizeUpload, "size_upload"),
    (CurlInfo::SizeDownload, "size_download"),
    (CurlInfo::SpeedDownload, "speed_download"),
    (CurlInfo::SpeedUpload, "speed_upload"),
    (CurlInfo::HeaderSize, "header_size"),
    (CurlInfo::HeaderOut, "request_header"),
    (CurlInfo::FileTime, "filetime"),
    (CurlInfo::RequestSize, "request_size"),
    (CurlInfo::SslVerifyResult, "ssl_verify_result"),
    (CurlInfo::ContentLengthDownload, "download_content_length"),
    (CurlInfo::ContentLengthUpload, "upload_content_length"),
    (CurlInfo::ContentType, "content_type"),
];

/// Looks up the semantic field name of an info flag.
///
/// Returns `None` for flags outside the table, including `CurlInfo::All`.
pub fn field_name(info: CurlInfo) -> Option<&'static str> {
    INFO_NAMES
        .iter()
        .find(|(flag, _)| *flag == info)
        .map(|(_, name)| *name)
}
