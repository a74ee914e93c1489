pub mod api_key;

pub use api_key::{ApiKeyExtractor, AuthError, get_api_key};
