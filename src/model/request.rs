//! In-memory request description.

use super::RequestDescription;
use crate::error::{Error, Result};
use crate::flags::CurlOpt;
use crate::options::{CurlOptions, OptionValue};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use tracing::warn;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// An outgoing request assembled option by option.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    url: String,
    method: String,
    headers: HeaderMap,
    fields: Vec<(String, String)>,
    body: Option<String>,
    redirects_disabled: bool,
    max_redirects: Option<i64>,
    curl_options: CurlOptions,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: String::from("GET"),
            headers: HeaderMap::new(),
            fields: Vec::new(),
            body: None,
            redirects_disabled: false,
            max_redirects: None,
            curl_options: CurlOptions::new(),
        }
    }
}

impl Request {
    /// Creates a `GET` request for `url`.
    pub fn new(url: &str) -> Self {
        Self {
            url: String::from(url),
            ..Self::default()
        }
    }

    /// Parses the request URL.
    pub fn parsed_url(&self) -> Result<Url> {
        Url::parse(&self.url).map_err(|e| Error::InvalidUrl(format!("{}: {}", self.url, e)))
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Form fields in the order they were first set.
    pub fn post_fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn post_field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Body as it would go on the wire: url-encoded fields when any are
    /// set, the literal body otherwise.
    pub fn encoded_body(&self) -> Option<String> {
        if self.fields.is_empty() {
            return self.body.clone();
        }
        Some(
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.fields)
                .finish(),
        )
    }

    pub fn redirects_disabled(&self) -> bool {
        self.redirects_disabled
    }

    pub fn max_redirects(&self) -> Option<i64> {
        self.max_redirects
    }

    /// Side-channel options that have no structural counterpart.
    pub fn curl_options(&self) -> &CurlOptions {
        &self.curl_options
    }
}

impl RequestDescription for Request {
    fn set_url(&mut self, url: &str) {
        self.url = String::from(url);
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn set_method(&mut self, method: &str) {
        self.method = String::from(method);
    }

    fn method(&self) -> &str {
        &self.method
    }

    fn set_header(&mut self, name: &str, value: &str) {
        let name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => name,
            Err(_) => {
                warn!("Dropping header with invalid name {:?}", name);
                return;
            }
        };
        let value = match HeaderValue::from_str(value) {
            Ok(value) => value,
            Err(_) => {
                warn!("Dropping header {} with invalid value {:?}", name, value);
                return;
            }
        };
        self.headers.insert(name, value);
    }

    fn remove_header(&mut self, name: &str) {
        self.headers.remove(name);
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    fn set_post_field(&mut self, name: &str, value: &str) {
        self.body = None;
        match self.fields.iter_mut().find(|(field, _)| field == name) {
            Some(field) => field.1 = String::from(value),
            None => self.fields.push((String::from(name), String::from(value))),
        }
        if !self.headers.contains_key(CONTENT_TYPE) {
            self.headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        }
    }

    fn post_field_count(&self) -> usize {
        self.fields.len()
    }

    fn set_body(&mut self, body: &str) {
        self.fields.clear();
        self.body = Some(String::from(body));
    }

    fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    fn set_redirects_disabled(&mut self, disabled: bool) {
        self.redirects_disabled = disabled;
    }

    fn set_max_redirects(&mut self, max: i64) {
        self.max_redirects = Some(max);
    }

    fn curl_option(&self, opt: CurlOpt) -> Option<&OptionValue> {
        self.curl_options.get(opt)
    }

    fn set_curl_option(&mut self, opt: CurlOpt, value: OptionValue) {
        self.curl_options.set(opt, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = Request::default();
        assert_eq!(request.method(), "GET");
        assert_eq!(request.url(), "");
        assert!(request.body().is_none());
        assert!(!request.redirects_disabled());
        assert!(request.max_redirects().is_none());
    }

    #[test]
    fn test_headers_are_case_insensitive_and_last_write_wins() {
        let mut request = Request::default();
        request.set_header("X-Foo", "one");
        request.set_header("x-foo", "two");
        assert_eq!(request.header("X-FOO"), Some("two"));
        assert_eq!(request.headers().len(), 1);

        request.remove_header("X-Foo");
        assert!(request.header("x-foo").is_none());
    }

    #[test]
    fn test_invalid_header_is_dropped() {
        let mut request = Request::default();
        request.set_header("Bad Name", "value");
        request.set_header("X-Ok", "line\nbreak");
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_post_field_sets_form_content_type() {
        let mut request = Request::default();
        request.set_post_field("a", "1");
        assert_eq!(request.header("Content-Type"), Some(FORM_CONTENT_TYPE));

        let mut request = Request::default();
        request.set_header("Content-Type", "multipart/form-data");
        request.set_post_field("a", "1");
        assert_eq!(request.header("Content-Type"), Some("multipart/form-data"));
    }

    #[test]
    fn test_fields_and_body_are_exclusive() {
        let mut request = Request::default();
        request.set_body("raw");
        request.set_post_field("a", "1");
        assert!(request.body().is_none());
        assert_eq!(request.post_field_count(), 1);

        request.set_body("raw");
        assert_eq!(request.post_field_count(), 0);
        assert_eq!(request.body(), Some("raw"));
    }

    #[test]
    fn test_post_field_replaces_same_name() {
        let mut request = Request::default();
        request.set_post_field("a", "1");
        request.set_post_field("b", "2");
        request.set_post_field("a", "3");
        assert_eq!(request.post_field_count(), 2);
        assert_eq!(request.post_field("a"), Some("3"));
    }

    #[test]
    fn test_encoded_body() {
        let mut request = Request::default();
        assert!(request.encoded_body().is_none());

        request.set_post_field("name", "John Doe");
        request.set_post_field("q", "a&b");
        assert_eq!(request.encoded_body().as_deref(), Some("name=John+Doe&q=a%26b"));
    }

    #[test]
    fn test_parsed_url() {
        let request = Request::new("https://example.com/path?x=1");
        assert_eq!(request.parsed_url().unwrap().host_str(), Some("example.com"));

        let request = Request::new("not a url");
        assert!(matches!(request.parsed_url(), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_body_size_option_reads_side_channel() {
        let mut request = Request::default();
        assert!(request.body_size_option().is_none());
        request.set_curl_option(CurlOpt::InFileSize, OptionValue::Long(12));
        assert_eq!(request.body_size_option(), Some(&OptionValue::Long(12)));
    }
}
