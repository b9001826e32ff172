//! Deciding whether a request reached us over HTTPS.

use axum::http::request::Parts;
use svgg_core::Scheme;

/// Request extension set by a TLS-terminating acceptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TlsConnection;

/// Policy mapping a request to the scheme used in generated references.
pub trait SchemePolicy: Send + Sync + 'static {
    fn scheme(&self, parts: &Parts) -> Scheme;
}

impl<F> SchemePolicy for F
where
    F: Fn(&Parts) -> Scheme + Send + Sync + 'static,
{
    fn scheme(&self, parts: &Parts) -> Scheme {
        self(parts)
    }
}

/// HTTPS when the connection is TLS or a trusted proxy says so.
#[derive(Debug, Clone, Copy)]
pub struct ForwardedProto {
    pub trust_forwarded_proto: bool,
}

impl ForwardedProto {
    pub const HEADER: &'static str = "x-forwarded-proto";

    pub fn new(trust_forwarded_proto: bool) -> Self {
        Self { trust_forwarded_proto }
    }
}

impl Default for ForwardedProto {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SchemePolicy for ForwardedProto {
    fn scheme(&self, parts: &Parts) -> Scheme {
        if parts.extensions.get::<TlsConnection>().is_some() {
            return Scheme::Https;
        }
        let forwarded_https = self.trust_forwarded_proto
            && parts
                .headers
                .get(Self::HEADER)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("https"));
        if forwarded_https {
            Scheme::Https
        } else {
            Scheme::Http
        }
    }
}
