//! Reversible payload ⇄ token transform.
//!
//! `encode` zlib-compresses the payload and writes it with the URL-safe
//! base64 alphabet, padding included. `decode` is strict: only canonical,
//! padded base64 is accepted and the zlib checksum must verify.

use crate::error::{Result, SvggError};
use crate::types::Token;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Compress and encode a payload into a token.
pub fn encode(payload: &[u8]) -> Result<Token> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(payload.len() / 2), Compression::default());
    encoder.write_all(payload).map_err(SvggError::Encoding)?;
    let compressed = encoder.finish().map_err(SvggError::Encoding)?;
    Ok(Token::new(URL_SAFE.encode(compressed)))
}

/// Decode and decompress a token back into its payload.
pub fn decode(token: &str) -> Result<Vec<u8>> {
    decode_bounded(token, usize::MAX)
}

/// Like [`decode`], but fails once the payload would exceed `limit` bytes.
pub fn decode_bounded(token: &str, limit: usize) -> Result<Vec<u8>> {
    let compressed = URL_SAFE.decode(token)?;
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    let mut payload = Vec::new();
    ZlibDecoder::new(compressed.as_slice())
        .take(cap)
        .read_to_end(&mut payload)
        .map_err(SvggError::CompressionFormat)?;
    if payload.len() > limit {
        return Err(SvggError::PayloadTooLarge { limit });
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<svg xmlns="x"><rect/></svg>"#;

    fn is_url_safe(token: &str) -> bool {
        token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'=')
    }

    #[test]
    fn test_round_trip() {
        let token = encode(SAMPLE.as_bytes()).unwrap();
        assert_eq!(decode(token.as_str()).unwrap(), SAMPLE.as_bytes());
    }

    #[test]
    fn test_round_trip_multiline_unicode() {
        let svg = "<svg viewBox=\"0 0 10 10\">\r\n  <!-- légende\n ✓ -->\n  <text>日本語</text>\n</svg>";
        let token = encode(svg.as_bytes()).unwrap();
        assert_eq!(decode(token.as_str()).unwrap(), svg.as_bytes());
    }

    #[test]
    fn test_token_is_url_safe() {
        let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let token = encode(&payload).unwrap();
        assert!(is_url_safe(token.as_str()), "unexpected character in {token}");
        assert_eq!(token.as_str().len() % 4, 0);
    }

    #[test]
    fn test_encode_deterministic() {
        assert_eq!(encode(SAMPLE.as_bytes()).unwrap(), encode(SAMPLE.as_bytes()).unwrap());
    }

    #[test]
    fn test_decode_rejects_foreign_characters() {
        let err = decode("not-valid-base64!!").unwrap_err();
        assert!(matches!(err, SvggError::Decoding(_)));
    }

    #[test]
    fn test_decode_rejects_standard_alphabet() {
        let token = encode(SAMPLE.as_bytes()).unwrap();
        let std_alphabet = token.as_str().replace('-', "+").replace('_', "/");
        if std_alphabet != token.as_str() {
            assert!(matches!(decode(&std_alphabet), Err(SvggError::Decoding(_))));
        }
        assert!(matches!(decode("eJ+/"), Err(SvggError::Decoding(_))));
    }

    #[test]
    fn test_decode_rejects_missing_padding() {
        let token = encode(SAMPLE.as_bytes()).unwrap();
        let unpadded = token.as_str().trim_end_matches('=');
        if unpadded.len() != token.as_str().len() {
            assert!(matches!(decode(unpadded), Err(SvggError::Decoding(_))));
        }
        assert!(matches!(decode("eJw"), Err(SvggError::Decoding(_))));
    }

    #[test]
    fn test_decode_rejects_corrupt_stream() {
        let token = URL_SAFE.encode(b"definitely not a zlib stream");
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, SvggError::CompressionFormat(_)));
        assert!(err.is_client_fault());
    }

    #[test]
    fn test_decode_rejects_checksum_mismatch() {
        let token = encode(SAMPLE.as_bytes()).unwrap();
        let mut compressed = URL_SAFE.decode(token.as_str()).unwrap();
        let last = compressed.len() - 1;
        compressed[last] ^= 0x01;
        let err = decode(&URL_SAFE.encode(&compressed)).unwrap_err();
        assert!(matches!(err, SvggError::CompressionFormat(_)), "unexpected error: {err}");
    }

    #[test]
    fn test_decode_rejects_missing_checksum() {
        let token = encode(SAMPLE.as_bytes()).unwrap();
        let compressed = URL_SAFE.decode(token.as_str()).unwrap();
        let truncated = &compressed[..compressed.len() - 4];
        let err = decode(&URL_SAFE.encode(truncated)).unwrap_err();
        assert!(matches!(err, SvggError::CompressionFormat(_)), "unexpected error: {err}");
    }

    #[test]
    fn test_decode_rejects_trailing_bits() {
        // 'x' leaves non-zero bits after the second byte.
        assert!(matches!(decode("eJx="), Err(SvggError::Decoding(_))));
        assert!(URL_SAFE.decode("eJw=").is_ok());
    }

    #[test]
    fn test_decode_bounded_limit() {
        let payload = vec![b'a'; 10_000];
        let token = encode(&payload).unwrap();
        assert_eq!(decode_bounded(token.as_str(), 10_000).unwrap().len(), 10_000);
        let err = decode_bounded(token.as_str(), 9_999).unwrap_err();
        assert!(matches!(err, SvggError::PayloadTooLarge { limit: 9_999 }));
    }

    #[test]
    fn test_compression_shrinks_repetitive_markup() {
        let svg = format!("<svg>{}</svg>", "<rect width=\"1\" height=\"1\"/>".repeat(200));
        let token = encode(svg.as_bytes()).unwrap();
        assert!(token.as_str().len() < svg.len() / 4);
    }
}
