use thiserror::Error;

use crate::http::headers::HttpHeaders;

/// Limits applied while parsing a raw header block.
/// Built from [`ExtractorConfig`](crate::config::ExtractorConfig::parser_limits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserLimits {
    pub max_header_size: usize,
    pub max_header_count: usize,
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self {
            max_header_size: 8192,
            max_header_count: 100,
        }
    }
}

// Line numbers are 1-based, counted from the start of the block.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("header block exceeds {limit} bytes")]
    HeaderTooLarge { limit: usize },

    #[error("more than {limit} header lines")]
    TooManyHeaders { limit: usize },

    #[error("missing ':' separator on line {line}")]
    MissingColon { line: usize },

    #[error("empty header name on line {line}")]
    EmptyName { line: usize },

    #[error("invalid header name on line {line}")]
    InvalidName { line: usize },
}

/// Parses an HTTP/1.x header block (`Name: value` lines) into [`HttpHeaders`].
///
/// The block ends at the first empty line or at the end of input; anything
/// after the empty line (a body) is ignored. Repeated names are appended in
/// order, so first-value lookups see the earliest occurrence.
pub fn parse_headers(block: &str, limits: &ParserLimits) -> Result<HttpHeaders, ParserError> {
    let mut headers = HttpHeaders::new();
    let mut count = 0;
    let mut offset = 0;

    for (idx, raw_line) in block.split('\n').enumerate() {
        let line_no = idx + 1;
        let line_end = offset + raw_line.len();
        offset = line_end + 1;

        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if line.is_empty() {
            break;
        }

        if line_end > limits.max_header_size {
            tracing::debug!(size = line_end, limit = limits.max_header_size, "header block too large");
            return Err(ParserError::HeaderTooLarge {
                limit: limits.max_header_size,
            });
        }

        count += 1;
        if count > limits.max_header_count {
            tracing::debug!(limit = limits.max_header_count, "too many header lines");
            return Err(ParserError::TooManyHeaders {
                limit: limits.max_header_count,
            });
        }

        let (name, value) = line.split_once(':').ok_or_else(|| {
            tracing::debug!(line = line_no, "header line without separator");
            ParserError::MissingColon { line: line_no }
        })?;

        // Whitespace before the colon is not allowed (RFC 9112 section 5.1)
        if name.trim().is_empty() {
            return Err(ParserError::EmptyName { line: line_no });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ParserError::InvalidName { line: line_no });
        }

        let value = value.trim();
        tracing::trace!(name, value, "parsed header");
        headers.append(name, value);
    }

    Ok(headers)
}
