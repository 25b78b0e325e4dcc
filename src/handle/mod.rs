//! Easy-handle emulation.
//!
//! A [`Handle`] keeps what a curl easy handle keeps between calls: the
//! configuration snapshot, the request being assembled and the response
//! of the last transfer. Responses come from a [`Playback`]
//! implementation, so no network I/O ever happens here.
//!
//! # Examples
//!
//! ```rust
//! use curl_shim::flags::{CurlInfo, CurlOpt};
//! use curl_shim::handle::Handle;
//! use curl_shim::info::InfoValue;
//! use curl_shim::model::{Request, RequestDescription, Response};
//!
//! # fn main() -> curl_shim::Result<()> {
//! let mut handle = Handle::with_url("http://example.com/ping");
//! handle.setopt(CurlOpt::ReturnTransfer, true)?;
//!
//! let body = handle.exec(&|request: &Request| -> curl_shim::Result<Response> {
//!     assert_eq!(request.method(), "GET");
//!     Ok(Response::new(200, vec![("Content-Length", "4")], "pong"))
//! })?;
//!
//! assert_eq!(body.as_deref(), Some("pong"));
//! let status = handle.getinfo(CurlInfo::HttpCode)?;
//! assert_eq!(status.as_single(), Some(&InfoValue::Long(200)));
//! # Ok(())
//! # }
//! ```

pub mod handle;

pub use handle::{Handle, HandleId, Playback};
