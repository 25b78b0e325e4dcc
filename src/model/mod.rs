//! Request and response descriptions.
//!
//! The option applier, info reader and output dispatcher only talk to the
//! request and response through the [`RequestDescription`] and
//! [`ResponseDescription`] traits, so any interception engine can plug
//! its own model in. [`Request`] and [`Response`] are the in-memory
//! implementations used by [`Handle`](crate::handle::Handle).
//!
//! # Examples
//!
//! ```rust
//! use curl_shim::model::{Request, RequestDescription, Response, ResponseDescription};
//!
//! let mut request = Request::new("http://example.com/items");
//! request.set_header("Accept", "application/json");
//! assert_eq!(request.header("accept"), Some("application/json"));
//!
//! let response = Response::new(200, vec![("Content-Length", "2")], "[]");
//! assert_eq!(response.status_code(), 200);
//! assert_eq!(response.header("content-length"), Some("2"));
//! ```

pub mod request;
pub mod response;

pub use request::Request;
pub use response::Response;

use crate::flags::{CurlInfo, CurlOpt};
use crate::info::InfoValue;
use crate::options::OptionValue;

use std::borrow::Cow;

/// Mutable view of an outgoing request.
pub trait RequestDescription {
    fn set_url(&mut self, url: &str);

    fn url(&self) -> &str;

    fn set_method(&mut self, method: &str);

    fn method(&self) -> &str;

    /// Sets a header, replacing every earlier value for the same name.
    fn set_header(&mut self, name: &str, value: &str);

    fn remove_header(&mut self, name: &str);

    fn header(&self, name: &str) -> Option<&str>;

    /// Adds or replaces one form field.
    fn set_post_field(&mut self, name: &str, value: &str);

    fn post_field_count(&self) -> usize;

    /// Sets a literal body. Fields and body are mutually exclusive.
    fn set_body(&mut self, body: &str);

    fn body(&self) -> Option<&str>;

    fn set_redirects_disabled(&mut self, disabled: bool);

    fn set_max_redirects(&mut self, max: i64);

    /// Reads an option from the side-channel bag.
    fn curl_option(&self, opt: CurlOpt) -> Option<&OptionValue>;

    /// Stores an option in the side-channel bag.
    fn set_curl_option(&mut self, opt: CurlOpt, value: OptionValue);

    /// Declared upload size, as set through `CURLOPT_INFILESIZE`.
    fn body_size_option(&self) -> Option<&OptionValue> {
        self.curl_option(CurlOpt::InFileSize)
    }
}

/// Read-only view of a completed response.
pub trait ResponseDescription {
    fn status_code(&self) -> u16;

    /// Status line and headers as sent on the wire, CRLF separated.
    fn raw_headers(&self) -> Cow<'_, str>;

    fn body(&self) -> Cow<'_, str>;

    fn header(&self, name: &str) -> Option<&str>;

    /// Recorded transfer metadata for one flag, `None` when unknown.
    fn info(&self, info: CurlInfo) -> Option<InfoValue>;
}
