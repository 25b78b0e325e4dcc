//! Output routing for completed transfers.
//!
//! A finished response is delivered exactly once, to the sinks selected
//! by the options in the configuration snapshot. See [`dispatch_to`] for
//! the precedence rules.
//!
//! # Examples
//!
//! ```rust
//! use curl_shim::flags::CurlOpt;
//! use curl_shim::handle::HandleId;
//! use curl_shim::model::Response;
//! use curl_shim::options::CurlOptions;
//! use curl_shim::output::dispatch;
//!
//! # fn main() -> curl_shim::Result<()> {
//! let response = Response::new(200, vec![("Content-Length", "5")], "hello");
//! let mut options = CurlOptions::new();
//! options.set(CurlOpt::ReturnTransfer, true);
//!
//! let body = dispatch(&response, &options, HandleId::default())?;
//! assert_eq!(body.as_deref(), Some("hello"));
//! # Ok(())
//! # }
//! ```

pub mod dispatch;

pub use dispatch::{dispatch, dispatch_to};
