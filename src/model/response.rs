//! In-memory response description.

use super::ResponseDescription;
use crate::flags::CurlInfo;
use crate::info::InfoValue;

use reqwest::StatusCode;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A completed response, as produced by a playback engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
    info: BTreeMap<CurlInfo, InfoValue>,
}

impl Response {
    /// Creates a response from a status code, header pairs and a body.
    pub fn new<N, V>(status: u16, headers: Vec<(N, V)>, body: impl Into<String>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            status,
            headers: headers
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            body: body.into(),
            info: BTreeMap::new(),
        }
    }

    /// Records one piece of transfer metadata.
    pub fn with_info(mut self, info: CurlInfo, value: impl Into<InfoValue>) -> Self {
        self.info.insert(info.canonical(), value.into());
        self
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Reason phrase for the status code, empty when none is registered.
    pub fn reason(&self) -> &'static str {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("")
    }
}

impl ResponseDescription for Response {
    fn status_code(&self) -> u16 {
        self.status
    }

    fn raw_headers(&self) -> Cow<'_, str> {
        let mut raw = format!("HTTP/1.1 {} {}\r\n", self.status, self.reason());
        for (name, value) in &self.headers {
            raw.push_str(name);
            raw.push_str(": ");
            raw.push_str(value);
            raw.push_str("\r\n");
        }
        raw.push_str("\r\n");
        Cow::Owned(raw)
    }

    fn body(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.body)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn info(&self, info: CurlInfo) -> Option<InfoValue> {
        self.info.get(&info).cloned()
    }
}
