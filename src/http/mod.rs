pub mod headers;
pub mod parser;

/// Header names the crate looks up by default.
pub mod header_names {
    pub const AUTHORIZATION: &str = "Authorization";
}
