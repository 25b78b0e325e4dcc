//! Content length extraction utilities.
//!
//! Replayed responses carry no live byte counter, so the downloaded size
//! is taken from the recorded `Content-Length` header.

use crate::model::ResponseDescription;

/// Parse a `Content-Length` header value.
///
/// # Example
///
/// ```rust
/// use curl_shim::utils::parse_content_length;
///
/// assert_eq!(parse_content_length("1024"), Some(1024));
/// assert_eq!(parse_content_length("-1"), None);
/// ```
pub fn parse_content_length(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

/// Extract the content length declared by a response.
///
/// Returns `None` when the header is missing or not a valid length.
pub fn get_content_length<R>(response: &R) -> Option<u64>
where
    R: ResponseDescription + ?Sized,
{
    response
        .header("Content-Length")
        .and_then(parse_content_length)
}
