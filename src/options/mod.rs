//! Option values, the configuration snapshot and the option applier.
//!
//! # Overview
//!
//! - `value` - [`OptionValue`] and the callback types it carries
//! - `config` - [`CurlOptions`], the ordered flag to value map
//! - `apply` - [`apply`], which mutates a request for one option
//!
//! # Examples
//!
//! ```rust
//! use curl_shim::flags::CurlOpt;
//! use curl_shim::model::{Request, RequestDescription};
//! use curl_shim::options::{apply, OptionValue};
//!
//! # fn main() -> curl_shim::Result<()> {
//! let mut request = Request::default();
//! apply(&mut request, CurlOpt::PostFields, vec![("q", "rust")].into(), None)?;
//! apply(&mut request, CurlOpt::Timeout, OptionValue::Long(10), None)?;
//!
//! assert_eq!(request.post_field_count(), 1);
//! assert_eq!(request.curl_option(CurlOpt::Timeout), Some(&OptionValue::Long(10)));
//! # Ok(())
//! # }
//! ```

pub mod apply;
pub mod config;
pub mod value;

pub use apply::apply;
pub use config::CurlOptions;
pub use value::{
    file, header_function, read_function, write_function, FileSink, HeaderCallback,
    OptionValue, ReadCallback, WriteCallback,
};
