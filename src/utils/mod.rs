//! Shared utility functions.
//!
//! # Overview
//!
//! - [`content_length`] - Content-Length extraction from response descriptions
//!
//! # Examples
//!
//! ```rust
//! use curl_shim::utils::parse_content_length;
//!
//! assert_eq!(parse_content_length(" 2048 "), Some(2048));
//! assert_eq!(parse_content_length("chunked"), None);
//! ```

pub mod content_length;

pub use content_length::{get_content_length, parse_content_length};
