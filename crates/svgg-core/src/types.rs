//! Tokens, references and the fixed URL layout.

use serde::Serialize;
use std::fmt;

/// Path prefix of the read endpoint.
pub const READ_PATH: &str = "/oo/";
/// Path of the submission endpoint.
pub const CREATE_PATH: &str = "/svg/";
/// Path prefix of embedded static assets.
pub const STATIC_PATH: &str = "/static/";
/// File-type suffix appended to every token in a reference.
pub const SUFFIX: &str = ".svg";

/// URL-safe encoding of a compressed payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub(crate) fn new(inner: String) -> Self {
        Self(inner)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully-qualified link to the read endpoint for one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub href: String,
}

impl Reference {
    pub fn new(scheme: Scheme, host: &str, token: &Token) -> Self {
        Self {
            href: format!("{scheme}://{host}{READ_PATH}{token}{SUFFIX}"),
        }
    }
}

/// Extract the token from the last path segment of a read URL.
///
/// The `.svg` suffix is optional.
pub fn token_from_segment(segment: &str) -> &str {
    segment.strip_suffix(SUFFIX).unwrap_or(segment)
}
