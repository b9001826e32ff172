//! Submit/resolve orchestration — validation around the codec.

use crate::codec;
use crate::config::LimitsConfig;
use crate::error::{Result, SvggError};
use crate::types::Token;
use crate::validator::SvgValidator;
use tracing::debug;

/// Validating front end to the codec.
#[derive(Debug, Clone)]
pub struct SvgPipeline {
    validator: SvgValidator,
    max_payload_bytes: usize,
}

impl SvgPipeline {
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            validator: SvgValidator::new(),
            max_payload_bytes: limits.max_payload_bytes,
        }
    }

    pub fn max_payload_bytes(&self) -> usize {
        self.max_payload_bytes
    }

    /// Validate submitted markup and encode it into a token.
    ///
    /// Surrounding `\r`/`\n` are trimmed first; the trimmed text is what the
    /// token reproduces.
    pub fn submit(&self, content: &str) -> Result<Token> {
        let content = content.trim_matches(|c| c == '\r' || c == '\n');
        if content.is_empty() {
            return Err(SvggError::EmptyPayload);
        }
        if content.len() > self.max_payload_bytes {
            return Err(SvggError::PayloadTooLarge { limit: self.max_payload_bytes });
        }
        if !self.validator.is_acceptable(content) {
            return Err(SvggError::InvalidSvg { content: content.to_string() });
        }
        debug!(bytes = content.len(), "content: {content}");
        codec::encode(content.as_bytes())
    }

    /// Decode a token and re-check that it still holds SVG markup.
    pub fn resolve(&self, token: &str) -> Result<Vec<u8>> {
        let payload = codec::decode_bounded(token, self.max_payload_bytes)?;
        if !self.validator.is_acceptable_bytes(&payload) {
            return Err(SvggError::InvalidSvg {
                content: String::from_utf8_lossy(&payload).into_owned(),
            });
        }
        Ok(payload)
    }
}

impl Default for SvgPipeline {
    fn default() -> Self {
        Self::new(&LimitsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<svg xmlns="x"><rect/></svg>"#;

    #[test]
    fn test_submit_then_resolve() {
        let p = SvgPipeline::default();
        let token = p.submit(SAMPLE).unwrap();
        assert_eq!(p.resolve(token.as_str()).unwrap(), SAMPLE.as_bytes());
    }

    #[test]
    fn test_submit_trims_line_breaks_only() {
        let p = SvgPipeline::default();
        let token = p.submit("\r\n\n<svg> </svg>\r\n").unwrap();
        assert_eq!(p.resolve(token.as_str()).unwrap(), b"<svg> </svg>");

        let token = p.submit("  <svg></svg>\t").unwrap();
        assert_eq!(p.resolve(token.as_str()).unwrap(), b"  <svg></svg>\t");
    }

    #[test]
    fn test_submit_empty() {
        let p = SvgPipeline::default();
        assert!(matches!(p.submit(""), Err(SvggError::EmptyPayload)));
        assert!(matches!(p.submit("\r\n\r\n"), Err(SvggError::EmptyPayload)));
    }

    #[test]
    fn test_submit_invalid_reports_content() {
        let err = SvgPipeline::default().submit("plain text, no svg tags").unwrap_err();
        assert!(err.is_client_fault());
        assert_eq!(err.to_string(), "invalid svg: plain text, no svg tags");
    }

    #[test]
    fn test_submit_too_large() {
        let p = SvgPipeline::new(&LimitsConfig { max_payload_bytes: 16 });
        let err = p.submit("<svg><rect/><rect/></svg>").unwrap_err();
        assert!(matches!(err, SvggError::PayloadTooLarge { limit: 16 }));
    }

    #[test]
    fn test_resolve_rejects_non_svg_token() {
        let token = codec::encode(b"just some bytes").unwrap();
        let err = SvgPipeline::default().resolve(token.as_str()).unwrap_err();
        match err {
            SvggError::InvalidSvg { content } => assert_eq!(content, "just some bytes"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        let p = SvgPipeline::default();
        assert!(matches!(p.resolve("not-valid-base64!!"), Err(SvggError::Decoding(_))));
        assert!(p.resolve("").is_err());
    }

    #[test]
    fn test_resolve_respects_limit() {
        let big = format!("<svg>{}</svg>", "a".repeat(100));
        let token = SvgPipeline::default().submit(&big).unwrap();
        let small = SvgPipeline::new(&LimitsConfig { max_payload_bytes: 50 });
        assert!(matches!(small.resolve(token.as_str()), Err(SvggError::PayloadTooLarge { .. })));
    }
}
