//! svgg core — the stateless SVG pastebin pipeline.
//!
//! A submitted SVG document is compressed and encoded into a URL-safe
//! [`Token`]; the token alone is enough to reproduce the original bytes.
//!
//! - [`codec`]: zlib + URL-safe base64 transform and its strict inverse
//! - [`validator`]: permissive structural `<svg>...</svg>` check
//! - [`pipeline`]: submit/resolve orchestration, independent of HTTP

pub mod codec;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;
pub mod validator;

pub use config::{LimitsConfig, ServerConfig, SvggConfig};
pub use error::{Result, SvggError};
pub use pipeline::SvgPipeline;
pub use types::{Reference, Scheme, Token, CREATE_PATH, READ_PATH, STATIC_PATH, SUFFIX};
pub use validator::SvgValidator;
