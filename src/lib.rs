//! curl-shim translates a curl-style, option-flag based client API into a
//! structured request/response model, so an interception layer (such as
//! a record/replay HTTP client for tests) can serve transfers without
//! any network I/O while callers keep their curl habits.
//!
//! # Quick Start
//!
//! ```rust
//! use curl_shim::{CurlInfo, CurlOpt, Handle, Request, Response};
//!
//! # fn main() -> curl_shim::Result<()> {
//! let mut handle = Handle::with_url("https://example.com/api");
//! handle.setopt(CurlOpt::Post, true)?;
//! handle.setopt(CurlOpt::PostFields, vec![("name", "ferris")])?;
//! handle.setopt(CurlOpt::HttpHeader, vec!["Accept: application/json"])?;
//! handle.setopt(CurlOpt::ReturnTransfer, true)?;
//!
//! let replay = |_: &Request| -> curl_shim::Result<Response> {
//!     Ok(Response::new(201, vec![("Content-Length", "2")], "{}"))
//! };
//! let body = handle.exec(&replay)?;
//!
//! assert_eq!(body.as_deref(), Some("{}"));
//! assert!(handle.getinfo(CurlInfo::All)?.as_all().is_some());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`flags`] - Option and info flag vocabularies, info name table
//! - [`options`] - Option values, configuration snapshot and option applier
//! - [`model`] - Request/response description traits and in-memory models
//! - [`info`] - Info reader for post-transfer metadata
//! - [`output`] - Output dispatcher routing bodies and headers to sinks
//! - [`handle`] - Easy-handle emulation on top of a playback engine
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Shared utility functions

pub mod error;
pub mod flags;
pub mod handle;
pub mod info;
pub mod model;
pub mod options;
pub mod output;
pub mod utils;

pub use error::{Error, Result};
pub use flags::{field_name, CurlInfo, CurlOpt, INFO_NAMES};
pub use handle::{Handle, HandleId, Playback};
pub use info::{read, InfoMap, InfoReport, InfoValue};
pub use model::{Request, RequestDescription, Response, ResponseDescription};
pub use options::{apply, CurlOptions, OptionValue};
pub use output::{dispatch, dispatch_to};
pub use utils::content_length::{get_content_length, parse_content_length};
