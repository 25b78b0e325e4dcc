//! Handle state and the playback seam.

use crate::error::{Error, Result};
use crate::flags::{CurlInfo, CurlOpt};
use crate::info::{self, InfoReport};
use crate::model::{Request, RequestDescription, Response};
use crate::options::{apply, CurlOptions, OptionValue};
use crate::output;

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// Token identifying a handle in callbacks.
///
/// The default value (`0`) is the detached id, used when an option is
/// applied outside of any handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

impl HandleId {
    /// Allocates a process-unique id.
    pub fn next() -> Self {
        HandleId(NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_detached(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source of responses for executed handles, e.g. a cassette player.
pub trait Playback {
    fn playback(&self, request: &Request) -> Result<Response>;
}

impl<F> Playback for F
where
    F: Fn(&Request) -> Result<Response>,
{
    fn playback(&self, request: &Request) -> Result<Response> {
        self(request)
    }
}

/// An emulated easy handle.
#[derive(Debug)]
pub struct Handle {
    id: HandleId,
    options: CurlOptions,
    request: Request,
    response: Option<Response>,
}

impl Default for Handle {
    fn default() -> Self {
        Self::new()
    }
}

impl Handle {
    pub fn new() -> Self {
        Self {
            id: HandleId::next(),
            options: CurlOptions::new(),
            request: Request::default(),
            response: None,
        }
    }

    /// Creates a handle with `CURLOPT_URL` already set.
    pub fn with_url(url: &str) -> Self {
        let mut handle = Self::new();
        handle.options.set(CurlOpt::Url, url);
        handle.request.set_url(url);
        handle
    }

    pub fn id(&self) -> HandleId {
        self.id
    }

    /// Configuration snapshot of every option set so far.
    pub fn options(&self) -> &CurlOptions {
        &self.options
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Response of the last executed transfer.
    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    /// Sets one option.
    ///
    /// The value is applied to the request first and recorded in the
    /// snapshot only when that succeeds.
    pub fn setopt(&mut self, opt: CurlOpt, value: impl Into<OptionValue>) -> Result<()> {
        let value = value.into();
        apply(&mut self.request, opt, value.clone(), Some(self.id))?;
        self.options.set(opt, value);
        Ok(())
    }

    /// Sets several options in order, stopping at the first failure.
    pub fn setopt_array<I, V>(&mut self, options: I) -> Result<()>
    where
        I: IntoIterator<Item = (CurlOpt, V)>,
        V: Into<OptionValue>,
    {
        for (opt, value) in options {
            self.setopt(opt, value)?;
        }
        Ok(())
    }

    /// Runs the transfer, writing the default sink to standard output.
    ///
    /// See [`Handle::exec_to`].
    pub fn exec<P>(&mut self, playback: &P) -> Result<Option<String>>
    where
        P: Playback + ?Sized,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.exec_to(playback, &mut out)
    }

    /// Runs the transfer against `playback` and delivers the output.
    ///
    /// Returns the body when `CURLOPT_RETURNTRANSFER` selected it.
    pub fn exec_to<P, W>(&mut self, playback: &P, default_out: &mut W) -> Result<Option<String>>
    where
        P: Playback + ?Sized,
        W: Write + ?Sized,
    {
        debug!("Executing handle {} {} {}", self.id, self.request.method(), self.request.url());
        let response = playback.playback(&self.request)?;
        let output = output::dispatch_to(&response, &self.options, self.id, default_out)?;
        self.response = Some(response);
        Ok(output)
    }

    /// Reads transfer metadata from the last response.
    pub fn getinfo(&self, flag: CurlInfo) -> Result<InfoReport> {
        let response = self.response.as_ref().ok_or(Error::NoResponse)?;
        info::read(response, flag)
    }

    /// Drops all options and transfer state, keeping the id.
    pub fn reset(&mut self) {
        debug!("Resetting handle {}", self.id);
        self.options.clear();
        self.request = Request::default();
        self.response = None;
    }
}
