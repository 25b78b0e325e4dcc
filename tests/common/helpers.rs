#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use curl_shim::options::{header_function, write_function};
use curl_shim::{HandleId, OptionValue, Request, Response, Result};

// Common test constants
pub const TEST_URL: &str = "http://example.com/resource";
pub const TEST_BODY: &str = "hello";

static TRACING: Once = Once::new();

/// Installs a tracing subscriber honouring `RUST_LOG`, once per test binary
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Creates a response with body "hello" and a matching Content-Length
pub fn create_test_response() -> Response {
    Response::new(
        200,
        vec![("Content-Type", "text/plain"), ("Content-Length", "5")],
        TEST_BODY,
    )
}

/// Creates a response with custom status and body
pub fn create_response(status: u16, body: &str) -> Response {
    let length = body.len().to_string();
    Response::new(status, vec![("Content-Length", length)], body)
}

/// Shared log of everything a recording callback received
pub type CallLog = Arc<Mutex<Vec<(HandleId, String)>>>;

/// Creates a write callback that records every call
pub fn recording_write_function() -> (OptionValue, CallLog) {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let callback = write_function(move |handle, body| {
        sink.lock().unwrap().push((handle, body.to_string()));
    });
    (callback, log)
}

/// Creates a header callback that records every call
pub fn recording_header_function() -> (OptionValue, CallLog) {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let callback = header_function(move |handle, line| {
        sink.lock().unwrap().push((handle, line.to_string()));
    });
    (callback, log)
}

/// Extracts the recorded texts from a call log
pub fn logged_texts(log: &CallLog) -> Vec<String> {
    log.lock()
        .unwrap()
        .iter()
        .map(|(_, text)| text.clone())
        .collect()
}

/// Playback that echoes method, URL and body back in the response body
pub fn echo_playback(request: &Request) -> Result<Response> {
    use curl_shim::RequestDescription;

    let body = format!(
        "{} {} {}",
        request.method(),
        request.url(),
        request.encoded_body().unwrap_or_default()
    );
    Ok(create_response(200, &body))
}
