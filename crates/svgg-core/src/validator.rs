//! Structural acceptance check for SVG markup.
//!
//! Accepts any input containing an `<svg ...>` opening tag followed later by
//! `</svg>`. This is not a sanitizer: scripts and event handlers pass through.

use regex::bytes::Regex;
use std::sync::LazyLock;

// ASCII word boundary, matches arbitrary (non UTF-8) bytes.
static RE_SVG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s-u)<svg\b[^>]*>(.*?)</svg>").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct SvgValidator;

impl SvgValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn is_acceptable(&self, text: &str) -> bool {
        self.is_acceptable_bytes(text.as_bytes())
    }

    pub fn is_acceptable_bytes(&self, bytes: &[u8]) -> bool {
        RE_SVG.is_match(bytes)
    }
}
