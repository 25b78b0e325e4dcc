//! Error handling for the curl-shim library.
//!
//! Only two failures belong to the compatibility contract itself: asking
//! for transfer metadata the response cannot provide, and installing a
//! body-read callback before the body size is known. The remaining
//! variants cover the handle emulation and I/O on output sinks.

use std::io;
use thiserror::Error;

/// Errors that can happen when using curl-shim.
#[derive(Error, Debug)]
pub enum Error {
    /// A single info flag resolved to no value.
    ///
    /// Never raised for the aggregate form (`CURLINFO_ALL`), where missing
    /// fields are reported as `None` instead.
    #[error("Not implemented: {name} ({code})")]
    UnsupportedInfo {
        /// Canonical `CURLINFO_*` name of the flag.
        name: &'static str,
        /// Numeric value of the flag.
        code: i32,
    },

    /// An option was set before one of the options it depends on.
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    /// The request URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transfer metadata was requested from a handle that has not been executed.
    #[error("No response available, the handle has not been executed")]
    NoResponse,

    /// The playback engine could not produce a response.
    #[error("Playback error: {0}")]
    Playback(String),

    /// I/O Error.
    ///
    /// Raised when writing or flushing an output sink fails.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a curl-shim error.
pub type Result<T> = std::result::Result<T, Error>;
