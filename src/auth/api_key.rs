//! API key extraction from the `Authorization` header.
//!
//! The expected wire format is `Authorization: ApiKey <token>`. Extraction only
//! yields a candidate key; deciding whether the key is valid is left to the
//! caller.

use thiserror::Error;

use crate::config::ExtractorConfig;
use crate::http::header_names::AUTHORIZATION;
use crate::http::headers::HttpHeaders;

pub const DEFAULT_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The header is absent, or present with an empty value.
    #[error("no authorization header included")]
    NoAuthHeader,

    /// The header does not decompose into exactly `<scheme> <token>`.
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Pulls the API key out of a header set.
///
/// Both the header name and the scheme keyword come from
/// [`ExtractorConfig`]; the scheme is compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyExtractor {
    header_name: String,
    scheme: String,
}

impl Default for ApiKeyExtractor {
    fn default() -> Self {
        Self {
            header_name: AUTHORIZATION.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

impl ApiKeyExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            header_name: config.header_name.clone(),
            scheme: config.scheme.clone(),
        }
    }

    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the token of the first `<scheme> <token>` header value.
    pub fn extract<'h>(&self, headers: &'h HttpHeaders) -> Result<&'h str, AuthError> {
        extract_token(headers, &self.header_name, &self.scheme)
    }
}

/// Extracts the key from `Authorization: ApiKey <token>`.
pub fn get_api_key(headers: &HttpHeaders) -> Result<&str, AuthError> {
    extract_token(headers, AUTHORIZATION, DEFAULT_SCHEME)
}

fn extract_token<'h>(
    headers: &'h HttpHeaders,
    header_name: &str,
    scheme: &str,
) -> Result<&'h str, AuthError> {
    let value = match headers.get(header_name) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AuthError::NoAuthHeader),
    };

    let mut fields = value.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(s), Some(token), None) if s == scheme => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}
