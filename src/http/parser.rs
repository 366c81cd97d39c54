use std::collections::HashMap;

use thiserror::Error;
use tokio::io::AsyncRead;

use crate::http::request::{Request, RequestBuilder};
use crate::http::wire::WireReader;

/// Reasons a byte stream could not be turned into a [`Request`].
///
/// Every variant is fatal for the connection; no response is sent.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty request line")]
    EmptyRequestLine,
    #[error("malformed request line: {0:?}")]
    InvalidRequestLine(String),
    #[error("invalid Content-Length: {0:?}")]
    InvalidContentLength(String),
    #[error("i/o error while reading request: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// True for protocol violations, false for transport failures.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, ParseError::Io(_))
    }
}

/// Reads one request from the wire.
pub async fn parse_request<S: AsyncRead + Unpin>(
    wire: &mut WireReader<S>,
) -> Result<Request, ParseError> {
    // Request line
    let request_line = match wire.read_line().await? {
        Some(line) if !trim_ascii(&line).is_empty() => line,
        _ => return Err(ParseError::EmptyRequestLine),
    };

    let parts: Vec<&str> = request_line.split_ascii_whitespace().collect();
    let [method, target, version] = parts.as_slice() else {
        return Err(ParseError::InvalidRequestLine(request_line.clone()));
    };

    // Headers
    let headers = parse_headers(wire).await?;

    // Body
    let body = match content_length(&headers)? {
        Some(len) => wire.read_exact(len).await?,
        None => String::new(),
    };

    Ok(RequestBuilder::new(*method, *target)
        .version(*version)
        .headers(headers)
        .body(body)
        .build())
}

async fn parse_headers<S: AsyncRead + Unpin>(
    wire: &mut WireReader<S>,
) -> Result<HashMap<String, String>, ParseError> {
    let mut headers = HashMap::new();

    while let Some(line) = wire.read_line().await? {
        if line.is_empty() {
            break;
        }

        // Lines without a name before the first ':' are skipped.
        let Some((key, value)) = line.split_once(':') else {
            tracing::debug!(line = %line, "skipping header line without ':'");
            continue;
        };
        let key = trim_ascii(key);
        if key.is_empty() {
            tracing::debug!(line = %line, "skipping header line with empty name");
            continue;
        }

        // Last occurrence wins; values are never merged.
        headers.insert(key.to_string(), trim_ascii(value).to_string());
    }

    Ok(headers)
}

/// Body length to read, or `None` when there is no body.
fn content_length(headers: &HashMap<String, String>) -> Result<Option<usize>, ParseError> {
    let Some(raw) = headers.get("Content-Length") else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }

    let len: i64 = raw
        .parse()
        .map_err(|_| ParseError::InvalidContentLength(raw.clone()))?;

    if len <= 0 {
        return Ok(None);
    }

    usize::try_from(len)
        .map(Some)
        .map_err(|_| ParseError::InvalidContentLength(raw.clone()))
}

/// Header bytes are Latin-1 decoded, so only ASCII whitespace counts.
fn trim_ascii(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_whitespace())
}
