//! Option applier.
//!
//! Translates one `(flag, value)` pair into a mutation of a request
//! description, reproducing how the emulated client library reacts to
//! the same call.

use super::value::OptionValue;
use crate::error::{Error, Result};
use crate::flags::CurlOpt;
use crate::handle::HandleId;
use crate::model::RequestDescription;

use std::io::Cursor;
use tracing::{debug, trace, warn};

/// Applies one option to a request.
///
/// Options are applied in caller order and later calls for the same field
/// win, with two exceptions: form fields accumulate across calls, and
/// `CURLOPT_POST` set to false leaves the method alone. Output options
/// (`HEADER`, `WRITEFUNCTION`, `HEADERFUNCTION`) have no effect here, they
/// are read from the configuration snapshot at dispatch time. `FILE` and
/// any other option without a structural counterpart is kept verbatim in
/// the request's side-channel bag.
///
/// A body-read callback is invoked immediately, once, to materialize the
/// outgoing body. `handle` is passed to it; `None` passes the detached id.
///
/// # Errors
///
/// [`Error::MissingConfiguration`] when `CURLOPT_READFUNCTION` is given a
/// callback before `CURLOPT_INFILESIZE` holds a usable size. Any size that
/// is not a positive integer counts as unset. The request is left
/// untouched in that case.
///
/// # Example
///
/// ```rust
/// use curl_shim::flags::CurlOpt;
/// use curl_shim::model::{Request, RequestDescription};
/// use curl_shim::options::apply;
///
/// # fn main() -> curl_shim::Result<()> {
/// let mut request = Request::default();
/// apply(&mut request, CurlOpt::Post, true.into(), None)?;
/// apply(&mut request, CurlOpt::CustomRequest, "PATCH".into(), None)?;
/// apply(&mut request, CurlOpt::HttpHeader, vec!["X-Foo: bar"].into(), None)?;
///
/// assert_eq!(request.method(), "PATCH");
/// assert_eq!(request.header("X-Foo"), Some("bar"));
/// # Ok(())
/// # }
/// ```
pub fn apply<Q>(
    request: &mut Q,
    opt: CurlOpt,
    value: OptionValue,
    handle: Option<HandleId>,
) -> Result<()>
where
    Q: RequestDescription + ?Sized,
{
    trace!("Applying {} = {:?}", opt, value);

    match opt.canonical() {
        CurlOpt::Url => match value.as_text() {
            Some(url) => request.set_url(&url),
            None => warn!("Ignoring non-scalar value for {}", opt),
        },
        CurlOpt::FollowLocation => request.set_redirects_disabled(!value.is_truthy()),
        CurlOpt::MaxRedirs => match value.as_long() {
            Some(max) => request.set_max_redirects(max),
            None => warn!("Ignoring non-numeric value for {}", opt),
        },
        CurlOpt::CustomRequest => match value.as_text() {
            Some(method) => request.set_method(&method),
            None => warn!("Ignoring non-scalar value for {}", opt),
        },
        CurlOpt::Post => {
            if value.is_truthy() {
                request.set_method("POST");
            }
        }
        CurlOpt::PostFields => match value {
            OptionValue::Fields(fields) => {
                for (name, field_value) in &fields {
                    request.set_post_field(name, field_value);
                }
                // An empty mapping always clears the content type, earlier fields or not.
                if fields.is_empty() {
                    request.remove_header("Content-Type");
                }
            }
            other => match other.as_text() {
                Some(body) => request.set_body(&body),
                None => warn!("Ignoring unsupported value for {}", opt),
            },
        },
        CurlOpt::HttpHeader => match value {
            OptionValue::List(lines) => {
                for line in &lines {
                    match line.split_once(": ") {
                        Some((name, header_value)) => request.set_header(name, header_value),
                        None => trace!("Skipping header line without value: {:?}", line),
                    }
                }
            }
            _ => warn!("Ignoring non-list value for {}", opt),
        },
        CurlOpt::Header | CurlOpt::WriteFunction | CurlOpt::HeaderFunction => {
            trace!("Deferring {} to output dispatch", opt);
        }
        CurlOpt::File => request.set_curl_option(opt.canonical(), value),
        CurlOpt::ReadFunction => match value {
            OptionValue::ReadFunction(callback) => {
                let size = request
                    .body_size_option()
                    .filter(|size| size.is_truthy())
                    .and_then(OptionValue::as_long)
                    .and_then(|size| u64::try_from(size).ok())
                    .ok_or_else(|| {
                        Error::MissingConfiguration(String::from(
                            "To set a CURLOPT_READFUNCTION, CURLOPT_INFILESIZE must be set to a valid size.",
                        ))
                    })?;
                debug!("Reading {} byte request body from callback", size);
                let mut stream = Cursor::new(Vec::new());
                let body = callback(handle.unwrap_or_default(), &mut stream, size);
                request.set_body(&body);
            }
            other => request.set_curl_option(opt.canonical(), other),
        },
        _ => request.set_curl_option(opt.canonical(), value),
    }

    Ok(())
}
