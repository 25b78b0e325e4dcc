//! Accumulated option values.
//!
//! [`CurlOptions`] serves two roles: the configuration snapshot a handle
//! keeps of every option set on it, and the side-channel bag a request
//! carries for options with no structural counterpart.
//!
//! # Examples
//!
//! ```rust
//! use curl_shim::flags::CurlOpt;
//! use curl_shim::options::CurlOptions;
//!
//! let mut options = CurlOptions::new();
//! options.set(CurlOpt::ReturnTransfer, true);
//! options.set(CurlOpt::Timeout, 30);
//!
//! assert!(options.is_truthy(CurlOpt::ReturnTransfer));
//! assert_eq!(options.get(CurlOpt::Timeout).and_then(|v| v.as_long()), Some(30));
//! ```

use super::value::{FileSink, HeaderCallback, OptionValue, WriteCallback};
use crate::flags::CurlOpt;

use std::collections::btree_map::{BTreeMap, Iter};

/// Ordered map from option flag to the last value set for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurlOptions {
    values: BTreeMap<CurlOpt, OptionValue>,
}

impl CurlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, replacing any earlier value for the same flag.
    pub fn set(&mut self, opt: CurlOpt, value: impl Into<OptionValue>) {
        self.values.insert(opt.canonical(), value.into());
    }

    pub fn get(&self, opt: CurlOpt) -> Option<&OptionValue> {
        self.values.get(&opt)
    }

    pub fn contains(&self, opt: CurlOpt) -> bool {
        self.values.contains_key(&opt)
    }

    pub fn remove(&mut self, opt: CurlOpt) -> Option<OptionValue> {
        self.values.remove(&opt)
    }

    /// Whether the flag is set to a truthy value.
    pub fn is_truthy(&self, opt: CurlOpt) -> bool {
        self.get(opt).is_some_and(OptionValue::is_truthy)
    }

    /// The configured header-delivery callback, if any.
    pub fn header_function(&self) -> Option<&HeaderCallback> {
        match self.get(CurlOpt::HeaderFunction) {
            Some(OptionValue::HeaderFunction(callback)) => Some(callback),
            _ => None,
        }
    }

    /// The configured body-write callback, if any.
    pub fn write_function(&self) -> Option<&WriteCallback> {
        match self.get(CurlOpt::WriteFunction) {
            Some(OptionValue::WriteFunction(callback)) => Some(callback),
            _ => None,
        }
    }

    /// The configured file sink, if any.
    pub fn file(&self) -> Option<&FileSink> {
        match self.get(CurlOpt::File) {
            Some(OptionValue::File(sink)) => Some(sink),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterates over the stored options in code order.
    pub fn iter(&self) -> Iter<'_, CurlOpt, OptionValue> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a CurlOptions {
    type Item = (&'a CurlOpt, &'a OptionValue);
    type IntoIter = Iter<'a, CurlOpt, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Into<OptionValue>> FromIterator<(CurlOpt, V)> for CurlOptions {
    fn from_iter<I: IntoIterator<Item = (CurlOpt, V)>>(iter: I) -> Self {
        let mut options = CurlOptions::new();
        for (opt, value) in iter {
            options.set(opt, value);
        }
        options
    }
}
