//! Output dispatcher.

use crate::error::Result;
use crate::flags::CurlOpt;
use crate::handle::HandleId;
use crate::model::ResponseDescription;
use crate::options::CurlOptions;

use std::io::{self, Write};
use tracing::{debug, trace};

/// Delivers a response, writing the default sink to standard output.
///
/// See [`dispatch_to`].
pub fn dispatch<R>(response: &R, options: &CurlOptions, handle: HandleId) -> Result<Option<String>>
where
    R: ResponseDescription + ?Sized,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch_to(response, options, handle, &mut out)
}

/// Delivers a response to the sinks selected in `options`.
///
/// The header-delivery callback, when set, receives every line of the raw
/// header blob (split on `\n`, trailing empty lines included) before any
/// body routing happens. The body is prefixed with the raw header blob
/// when `CURLOPT_HEADER` is truthy, then goes to the first matching sink:
///
/// 1. the body-write callback,
/// 2. the return value, when `CURLOPT_RETURNTRANSFER` is truthy,
/// 3. the `CURLOPT_FILE` sink, flushed right after the write,
/// 4. `default_out`.
///
/// Returns `Some(body)` only in case 2.
///
/// # Errors
///
/// I/O failures of the file sink or `default_out` are propagated.
pub fn dispatch_to<R, W>(
    response: &R,
    options: &CurlOptions,
    handle: HandleId,
    default_out: &mut W,
) -> Result<Option<String>>
where
    R: ResponseDescription + ?Sized,
    W: Write + ?Sized,
{
    let raw_headers = response.raw_headers();

    if let Some(callback) = options.header_function() {
        for line in raw_headers.split('\n') {
            callback(handle, line);
        }
    }

    let mut body = response.body().into_owned();
    if options.is_truthy(CurlOpt::Header) {
        body.insert_str(0, &raw_headers);
    }

    if let Some(callback) = options.write_function() {
        trace!("Passing {} bytes to write callback", body.len());
        callback(handle, &body);
        return Ok(None);
    }

    if options.is_truthy(CurlOpt::ReturnTransfer) {
        trace!("Returning {} bytes", body.len());
        return Ok(Some(body));
    }

    if let Some(sink) = options.file() {
        debug!("Writing {} bytes to file sink", body.len());
        let mut file = sink
            .lock()
            .map_err(|_| io::Error::other("file sink lock poisoned"))?;
        file.write_all(body.as_bytes())?;
        file.flush()?;
        return Ok(None);
    }

    trace!("Writing {} bytes to default output", body.len());
    default_out.write_all(body.as_bytes())?;
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Response;
    use crate::options::value::{file, header_function, write_function};
    use std::sync::{Arc, Mutex};

    fn response() -> Response {
        Response::new(200, vec![("Content-Type", "text/plain")], "hello")
    }

    #[test]
    fn test_return_transfer_returns_body() {
        let mut options = CurlOptions::new();
        options.set(CurlOpt::ReturnTransfer, true);

        let mut out = Vec::<u8>::new();
        let result = dispatch_to(&response(), &options, HandleId::default(), &mut out).unwrap();
        assert_eq!(result.as_deref(), Some("hello"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_falsy_return_transfer_falls_through() {
        let mut options = CurlOptions::new();
        options.set(CurlOpt::ReturnTransfer, 0);

        let mut out = Vec::<u8>::new();
        let result = dispatch_to(&response(), &options, HandleId::default(), &mut out).unwrap();
        assert_eq!(result, None);
        assert_eq!(out, b"hello");
    }

    #[test]
    fn test_write_callback_wins_over_return_transfer() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&written);
        let mut options = CurlOptions::new();
        options.set(CurlOpt::ReturnTransfer, true);
        options.set(
            CurlOpt::WriteFunction,
            write_function(move |_, body| sink.lock().unwrap().push(body.to_string())),
        );

        let mut out = Vec::<u8>::new();
        let result = dispatch_to(&response(), &options, HandleId::default(), &mut out).unwrap();
        assert_eq!(result, None);
        assert_eq!(*written.lock().unwrap(), vec![String::from("hello")]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_file_sink_is_written() {
        let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
        let mut options = CurlOptions::new();
        options.set(CurlOpt::File, crate::options::OptionValue::File(buffer.clone()));

        let mut out = Vec::<u8>::new();
        dispatch_to(&response(), &options, HandleId::default(), &mut out).unwrap();
        assert_eq!(*buffer.lock().unwrap(), b"hello");
        assert!(out.is_empty());
    }

    #[test]
    fn test_return_transfer_wins_over_file_sink() {
        let mut options = CurlOptions::new();
        options.set(CurlOpt::File, file(Vec::<u8>::new()));
        options.set(CurlOpt::ReturnTransfer, true);

        let mut out = Vec::<u8>::new();
        let result = dispatch_to(&response(), &options, HandleId::default(), &mut out).unwrap();
        assert_eq!(result.as_deref(), Some("hello"));
    }

    #[test]
    fn test_header_flag_prepends_raw_headers() {
        let mut options = CurlOptions::new();
        options.set(CurlOpt::Header, true);

        let mut out = Vec::<u8>::new();
        dispatch_to(&response(), &options, HandleId::default(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello"
        );
    }

    #[test]
    fn test_header_callback_sees_every_line() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&lines);
        let handle = HandleId::next();
        let mut options = CurlOptions::new();
        options.set(
            CurlOpt::HeaderFunction,
            header_function(move |id, line| seen.lock().unwrap().push((id, line.to_string()))),
        );
        options.set(CurlOpt::ReturnTransfer, true);

        dispatch_to(&response(), &options, handle, &mut Vec::<u8>::new()).unwrap();
        let lines = lines.lock().unwrap();
        let text: Vec<&str> = lines.iter().map(|(_, line)| line.as_str()).collect();
        assert_eq!(
            text,
            vec!["HTTP/1.1 200 OK\r", "Content-Type: text/plain\r", "\r", ""]
        );
        assert!(lines.iter().all(|(id, _)| *id == handle));
    }

    #[test]
    fn test_default_output() {
        let mut out = Vec::<u8>::new();
        let result =
            dispatch_to(&response(), &CurlOptions::new(), HandleId::default(), &mut out).unwrap();
        assert_eq!(result, None);
        assert_eq!(out, b"hello");
    }
}
