//! Post-transfer introspection.
//!
//! [`read`] answers `curl_getinfo`-style queries against a
//! [`ResponseDescription`](crate::model::ResponseDescription), either for
//! one flag or, with [`CurlInfo::All`](crate::flags::CurlInfo::All), for
//! every field in the info name table.
//!
//! # Examples
//!
//! ```rust
//! use curl_shim::flags::CurlInfo;
//! use curl_shim::info::{read, InfoValue};
//! use curl_shim::model::Response;
//!
//! # fn main() -> curl_shim::Result<()> {
//! let response = Response::new(201, vec![("Content-Length", "2")], "{}")
//!     .with_info(CurlInfo::TotalTime, 0.5);
//!
//! let status = read(&response, CurlInfo::HttpCode)?;
//! assert_eq!(status.as_single(), Some(&InfoValue::Long(201)));
//!
//! let all = read(&response, CurlInfo::All)?;
//! let all = all.as_all().expect("aggregate report");
//! assert_eq!(all.get("total_time"), Some(&InfoValue::Double(0.5)));
//! assert!(all.contains_key("connect_time"));
//! # Ok(())
//! # }
//! ```

pub mod reader;

pub use reader::read;

use std::fmt;

/// A single piece of transfer metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum InfoValue {
    Text(String),
    Long(i64),
    Double(f64),
}

impl InfoValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            InfoValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            InfoValue::Long(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric value, widening integers.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            InfoValue::Long(value) => Some(*value as f64),
            InfoValue::Double(value) => Some(*value),
            InfoValue::Text(_) => None,
        }
    }
}

impl fmt::Display for InfoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoValue::Text(value) => f.write_str(value),
            InfoValue::Long(value) => write!(f, "{}", value),
            InfoValue::Double(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for InfoValue {
    fn from(value: &str) -> Self {
        InfoValue::Text(String::from(value))
    }
}

impl From<String> for InfoValue {
    fn from(value: String) -> Self {
        InfoValue::Text(value)
    }
}

impl From<i64> for InfoValue {
    fn from(value: i64) -> Self {
        InfoValue::Long(value)
    }
}

impl From<i32> for InfoValue {
    fn from(value: i32) -> Self {
        InfoValue::Long(i64::from(value))
    }
}

impl From<f64> for InfoValue {
    fn from(value: f64) -> Self {
        InfoValue::Double(value)
    }
}

/// Every known field, in info name table order.
///
/// Fields the response could not provide are kept with no value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoMap {
    fields: Vec<(&'static str, Option<InfoValue>)>,
}

impl InfoMap {
    pub(crate) fn push(&mut self, name: &'static str, value: Option<InfoValue>) {
        self.fields.push((name, value));
    }

    /// Value of a field, `None` when the field is unknown or has no value.
    pub fn get(&self, name: &str) -> Option<&InfoValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .and_then(|(_, value)| value.as_ref())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.iter().any(|(field, _)| *field == name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(field, _)| *field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&InfoValue>)> + '_ {
        self.fields.iter().map(|(field, value)| (*field, value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Result of an info lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum InfoReport {
    /// Answer to a single-flag lookup.
    Single(InfoValue),
    /// Answer to a `CurlInfo::All` lookup.
    All(InfoMap),
}

impl InfoReport {
    pub fn as_single(&self) -> Option<&InfoValue> {
        match self {
            InfoReport::Single(value) => Some(value),
            InfoReport::All(_) => None,
        }
    }

    pub fn as_all(&self) -> Option<&InfoMap> {
        match self {
            InfoReport::All(map) => Some(map),
            InfoReport::Single(_) => None,
        }
    }

    pub fn into_single(self) -> Option<InfoValue> {
        match self {
            InfoReport::Single(value) => Some(value),
            InfoReport::All(_) => None,
        }
    }
}
