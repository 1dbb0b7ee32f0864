//! Byte-range streaming for mediacat
//!
//! Serving a file happens in two steps. [`plan_response`] turns the file
//! size and the optional `Range` header into a [`ResponsePlan`] (status,
//! length headers and byte window) without touching the file. [`emit`] then
//! opens the file and streams exactly that window.
//!
//! Range header policy:
//! - `bytes=<start>-<end>` and `bytes=<start>-` select `[start, end]`, the end
//!   being clamped to the last byte of the file
//! - `bytes=-<n>` selects the last `n` bytes
//! - anything unparseable (other units, non-numeric bounds, several ranges)
//!   is ignored and the whole file is sent with `200`
//! - a range starting past the end of the file, an inverted range, or any
//!   range over an empty file is rejected with `416`

use crate::error::{Error, Result};
use axum::{body::Body, response::Response};
use http::{StatusCode, header, response::Builder};
use log::debug;
use std::io::SeekFrom;
use std::path::Path;
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

/// A satisfiable single byte range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRequest {
    /// First byte, inclusive
    pub start: u64,
    /// Last byte, inclusive
    pub end: u64,
    /// Size of the file
    pub total: u64,
}

impl RangeRequest {
    /// Number of bytes in the range
    pub fn chunk_size(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Value of the `Content-Range` header
    pub fn content_range(&self) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, self.total)
    }
}

/// Outcome of parsing a `Range` header against a file size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedRange {
    /// The header is malformed and must be ignored
    Ignored,
    /// The header selects this range
    Satisfiable(RangeRequest),
    /// The header is well formed but selects nothing in the file
    Unsatisfiable,
}

/// The bytes of a file sent in a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteWindow {
    /// Offset of the first byte
    pub start: u64,
    /// Number of bytes
    pub length: u64,
}

impl ByteWindow {
    /// Offset of the last byte, if the window is not empty
    pub fn end(&self) -> Option<u64> {
        (self.length > 0).then(|| self.start + self.length - 1)
    }
}

/// Status, headers and byte window of a streaming response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePlan {
    /// `200` or `206`
    pub status: StatusCode,
    /// Value of `Content-Length`
    pub content_length: u64,
    /// Value of `Content-Range`, for partial responses
    pub content_range: Option<String>,
    /// Bytes of the file to send
    pub window: ByteWindow,
}

impl ResponsePlan {
    /// Plan sending the whole file
    pub fn full(file_size: u64) -> Self {
        Self {
            status: StatusCode::OK,
            content_length: file_size,
            content_range: None,
            window: ByteWindow {
                start: 0,
                length: file_size,
            },
        }
    }

    /// Plan sending one range of the file
    pub fn partial(range: RangeRequest) -> Self {
        Self {
            status: StatusCode::PARTIAL_CONTENT,
            content_length: range.chunk_size(),
            content_range: Some(range.content_range()),
            window: ByteWindow {
                start: range.start,
                length: range.chunk_size(),
            },
        }
    }

    /// Starts a response carrying the planned status and headers
    pub fn response_builder(&self, content_type: &str) -> Builder {
        let builder = Response::builder()
            .status(self.status)
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CONTENT_LENGTH, self.content_length)
            .header(header::ACCEPT_RANGES, "bytes");
        match &self.content_range {
            Some(content_range) => builder.header(header::CONTENT_RANGE, content_range),
            None => builder,
        }
    }
}

/// Parses a `Range` header value against a file size
///
/// # Arguments
/// * `range_header` - Raw header value, e.g. `bytes=0-499`
/// * `total` - Size of the file in bytes
pub fn parse_range(range_header: &str, total: u64) -> ParsedRange {
    let Some(ranges) = range_header.trim().strip_prefix("bytes=") else {
        return ParsedRange::Ignored;
    };
    if ranges.contains(',') {
        return ParsedRange::Ignored;
    }
    let Some((start, end)) = ranges.split_once('-') else {
        return ParsedRange::Ignored;
    };
    let (start, end) = (start.trim(), end.trim());

    let (start, end) = match (start.is_empty(), end.is_empty()) {
        (true, true) => return ParsedRange::Ignored,
        // bytes=-500 (last 500 bytes)
        (true, false) => {
            let Some(suffix) = parse_position(end) else {
                return ParsedRange::Ignored;
            };
            if suffix == 0 || total == 0 {
                return ParsedRange::Unsatisfiable;
            }
            (total.saturating_sub(suffix), total - 1)
        }
        // bytes=500- (from 500 to the end)
        (false, true) => {
            let Some(start) = parse_position(start) else {
                return ParsedRange::Ignored;
            };
            (start, total.saturating_sub(1))
        }
        (false, false) => {
            let (Some(start), Some(end)) = (parse_position(start), parse_position(end)) else {
                return ParsedRange::Ignored;
            };
            if start > end {
                return ParsedRange::Unsatisfiable;
            }
            (start, end.min(total.saturating_sub(1)))
        }
    };

    if start >= total {
        return ParsedRange::Unsatisfiable;
    }
    ParsedRange::Satisfiable(RangeRequest { start, end, total })
}

fn parse_position(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Computes the response for a file of `file_size` bytes
///
/// # Returns
/// Returns the plan, or `RangeNotSatisfiable` when the header selects
/// nothing in the file
pub fn plan_response(file_size: u64, range_header: Option<&str>) -> Result<ResponsePlan> {
    let Some(range_header) = range_header else {
        return Ok(ResponsePlan::full(file_size));
    };
    match parse_range(range_header, file_size) {
        ParsedRange::Satisfiable(range) => Ok(ResponsePlan::partial(range)),
        ParsedRange::Ignored => {
            debug!("Ignoring malformed range header '{range_header}'");
            Ok(ResponsePlan::full(file_size))
        }
        ParsedRange::Unsatisfiable => Err(Error::RangeNotSatisfiable {
            range: range_header.to_string(),
            size: file_size,
        }),
    }
}

/// Opens a file and streams the planned window as a response body
///
/// The file handle lives inside the body stream: it is closed when the last
/// byte is sent or when the body is dropped because the client went away.
pub async fn emit(path: &Path, plan: &ResponsePlan) -> Result<Body> {
    let mut file = File::open(path).await.map_err(|e| Error::storage(path, e))?;
    if plan.window.start > 0 {
        file.seek(SeekFrom::Start(plan.window.start))
            .await
            .map_err(|e| Error::storage(path, e))?;
    }
    let stream = ReaderStream::new(file.take(plan.window.length));
    Ok(Body::from_stream(stream))
}

/// Streams a file, honouring an optional `Range` header
///
/// Nothing is sent before the file has been statted and opened, so storage
/// failures surface as a plain error response.
pub async fn stream_media(
    path: &Path,
    range_header: Option<&str>,
    content_type: &str,
) -> Result<Response> {
    let metadata = fs::metadata(path)
        .await
        .map_err(|e| Error::storage(path, e))?;
    let plan = plan_response(metadata.len(), range_header)?;

    debug!(
        "Streaming {} ({} {:?})",
        path.display(),
        plan.status,
        plan.window
    );

    let body = emit(path, &plan).await?;
    Ok(plan.response_builder(content_type).body(body)?)
}
