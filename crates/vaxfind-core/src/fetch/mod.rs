//! Perform the calendar GET and decode its body.
//!
//! Uses the curl crate (libcurl) with a single easy handle on the current
//! thread. The whole body is buffered before decoding. The HTTP status is
//! logged but not checked: an error page that happens to be valid JSON is
//! decoded like any other body.

mod classify;
mod error;

pub use classify::{classify_transfer_error, is_body_read_error};
pub use error::FetchError;

use crate::calendar::CalendarRequest;
use crate::model::{CalendarResponse, Center};

/// Raw outcome of the GET.
#[derive(Debug, Clone)]
pub struct FetchedBody {
    /// HTTP status of the final response (after redirects).
    pub status: u32,
    pub body: Vec<u8>,
}

/// Issue `request` and read the complete response body.
///
/// No timeout is set beyond libcurl's defaults, and nothing is retried.
pub fn fetch_calendar(request: &CalendarRequest) -> Result<FetchedBody, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(request.url().as_str())
        .map_err(FetchError::Transport)?;
    easy.get(true).map_err(FetchError::Transport)?;
    easy.follow_location(true).map_err(FetchError::Transport)?;

    let mut list = curl::easy::List::new();
    for line in request.header_lines() {
        list.append(&line).map_err(FetchError::Transport)?;
    }
    easy.http_headers(list).map_err(FetchError::Transport)?;

    tracing::debug!(url = %request.url(), "GET calendar");
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(FetchError::Transport)?;
        transfer.perform().map_err(classify_transfer_error)?;
    }

    let status = easy.response_code().map_err(FetchError::Transport)?;
    if !(200..300).contains(&status) {
        tracing::warn!(status, "calendar returned non-success status; decoding body anyway");
    }
    tracing::debug!(status, bytes = body.len(), "calendar response received");

    Ok(FetchedBody { status, body })
}

/// Decode a calendar body into its centers, in API order.
pub fn decode_centers(body: &[u8]) -> Result<Vec<Center>, FetchError> {
    let resp = CalendarResponse::from_slice(body)?;
    tracing::debug!(centers = resp.centers.len(), "decoded calendar");
    Ok(resp.centers)
}

/// Fetch and decode in one step.
pub fn fetch_centers(request: &CalendarRequest) -> Result<Vec<Center>, FetchError> {
    let fetched = fetch_calendar(request)?;
    decode_centers(&fetched.body)
}
