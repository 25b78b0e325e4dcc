//! Option values and callback types.
//!
//! # Examples
//!
//! ```rust
//! use curl_shim::options::{header_function, OptionValue};
//!
//! let value = OptionValue::from("https://example.com");
//! assert_eq!(value.as_text().as_deref(), Some("https://example.com"));
//!
//! let callback = header_function(|_handle, line| println!("{}", line));
//! assert!(callback.is_truthy());
//! ```

use crate::handle::HandleId;

use std::borrow::Cow;
use std::fmt;
use std::io::{Read, Write};
use std::sync::{Arc, Mutex};

/// Callback receiving one raw header line per call.
pub type HeaderCallback = Arc<dyn Fn(HandleId, &str) + Send + Sync>;

/// Callback receiving the delivered body.
pub type WriteCallback = Arc<dyn Fn(HandleId, &str) + Send + Sync>;

/// Callback producing the outgoing body from a stream and a declared size.
pub type ReadCallback = Arc<dyn Fn(HandleId, &mut dyn Read, u64) -> String + Send + Sync>;

/// Shared, flushable output sink.
pub type FileSink = Arc<Mutex<dyn Write + Send>>;

/// A value passed along with an option flag.
#[derive(Clone)]
pub enum OptionValue {
    /// Explicit null, as used to unset a callback.
    Null,
    Bool(bool),
    Long(i64),
    Text(String),
    /// Ordered list of strings, e.g. raw header lines.
    List(Vec<String>),
    /// Field name to field value pairs, e.g. a form body.
    Fields(Vec<(String, String)>),
    /// Opaque bytes.
    Blob(Vec<u8>),
    HeaderFunction(HeaderCallback),
    WriteFunction(WriteCallback),
    ReadFunction(ReadCallback),
    File(FileSink),
}

impl OptionValue {
    /// Loose truthiness of the emulated library's host language.
    ///
    /// Null, `false`, zero, empty strings, `"0"` and empty collections are
    /// false; callbacks and file sinks are always true.
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Null => false,
            OptionValue::Bool(value) => *value,
            OptionValue::Long(value) => *value != 0,
            OptionValue::Text(value) => !value.is_empty() && value != "0",
            OptionValue::List(values) => !values.is_empty(),
            OptionValue::Fields(fields) => !fields.is_empty(),
            OptionValue::Blob(bytes) => !bytes.is_empty(),
            OptionValue::HeaderFunction(_)
            | OptionValue::WriteFunction(_)
            | OptionValue::ReadFunction(_)
            | OptionValue::File(_) => true,
        }
    }

    /// Text form of a scalar value.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            OptionValue::Null => Some(Cow::Borrowed("")),
            OptionValue::Bool(true) => Some(Cow::Borrowed("1")),
            OptionValue::Bool(false) => Some(Cow::Borrowed("")),
            OptionValue::Long(value) => Some(Cow::Owned(value.to_string())),
            OptionValue::Text(value) => Some(Cow::Borrowed(value)),
            OptionValue::Blob(bytes) => Some(String::from_utf8_lossy(bytes)),
            _ => None,
        }
    }

    /// Integer form of a scalar value.
    pub fn as_long(&self) -> Option<i64> {
        match self {
            OptionValue::Bool(value) => Some(i64::from(*value)),
            OptionValue::Long(value) => Some(*value),
            OptionValue::Text(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }
}

impl fmt::Debug for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Null => f.write_str("Null"),
            OptionValue::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            OptionValue::Long(value) => f.debug_tuple("Long").field(value).finish(),
            OptionValue::Text(value) => f.debug_tuple("Text").field(value).finish(),
            OptionValue::List(values) => f.debug_tuple("List").field(values).finish(),
            OptionValue::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
            OptionValue::Blob(bytes) => write!(f, "Blob({} bytes)", bytes.len()),
            OptionValue::HeaderFunction(_) => f.write_str("HeaderFunction(..)"),
            OptionValue::WriteFunction(_) => f.write_str("WriteFunction(..)"),
            OptionValue::ReadFunction(_) => f.write_str("ReadFunction(..)"),
            OptionValue::File(_) => f.write_str("File(..)"),
        }
    }
}

impl PartialEq for OptionValue {
    /// Data variants compare by value, callbacks and sinks by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OptionValue::Null, OptionValue::Null) => true,
            (OptionValue::Bool(a), OptionValue::Bool(b)) => a == b,
            (OptionValue::Long(a), OptionValue::Long(b)) => a == b,
            (OptionValue::Text(a), OptionValue::Text(b)) => a == b,
            (OptionValue::List(a), OptionValue::List(b)) => a == b,
            (OptionValue::Fields(a), OptionValue::Fields(b)) => a == b,
            (OptionValue::Blob(a), OptionValue::Blob(b)) => a == b,
            (OptionValue::HeaderFunction(a), OptionValue::HeaderFunction(b)) => Arc::ptr_eq(a, b),
            (OptionValue::WriteFunction(a), OptionValue::WriteFunction(b)) => Arc::ptr_eq(a, b),
            (OptionValue::ReadFunction(a), OptionValue::ReadFunction(b)) => Arc::ptr_eq(a, b),
            (OptionValue::File(a), OptionValue::File(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Long(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Long(i64::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        OptionValue::List(values)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(values: Vec<&str>) -> Self {
        OptionValue::List(values.into_iter().map(String::from).collect())
    }
}

impl From<Vec<(&str, &str)>> for OptionValue {
    fn from(fields: Vec<(&str, &str)>) -> Self {
        OptionValue::Fields(
            fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }
}

/// Wraps a closure as a header-delivery callback value.
pub fn header_function<F>(callback: F) -> OptionValue
where
    F: Fn(HandleId, &str) + Send + Sync + 'static,
{
    OptionValue::HeaderFunction(Arc::new(callback))
}

/// Wraps a closure as a body-write callback value.
pub fn write_function<F>(callback: F) -> OptionValue
where
    F: Fn(HandleId, &str) + Send + Sync + 'static,
{
    OptionValue::WriteFunction(Arc::new(callback))
}

/// Wraps a closure as a body-read callback value.
pub fn read_function<F>(callback: F) -> OptionValue
where
    F: Fn(HandleId, &mut dyn Read, u64) -> String + Send + Sync + 'static,
{
    OptionValue::ReadFunction(Arc::new(callback))
}

/// Wraps a writer as a file sink value.
pub fn file<W>(writer: W) -> OptionValue
where
    W: Write + Send + 'static,
{
    OptionValue::File(Arc::new(Mutex::new(writer)))
}
