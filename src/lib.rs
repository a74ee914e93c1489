//! Extraction of API keys from HTTP `Authorization: ApiKey <token>` headers.
//!
//! - [`http::headers`] holds the case-insensitive header set the extractor reads.
//! - [`http::parser`] builds a header set from a raw HTTP/1.x header block.
//! - [`auth::api_key`] pulls the key out and classifies failures.
//! - [`config`] carries the header name, scheme and parser limits.
//!
//! ```
//! use apikey_header::auth::{AuthError, get_api_key};
//! use apikey_header::http::headers::HttpHeaders;
//!
//! let mut headers = HttpHeaders::new();
//! headers.append("authorization", "ApiKey test-api-key");
//! assert_eq!(get_api_key(&headers), Ok("test-api-key"));
//!
//! assert_eq!(get_api_key(&HttpHeaders::new()), Err(AuthError::NoAuthHeader));
//! ```

pub mod auth;
pub mod config;
pub mod http;
