use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvggError {
    #[error("empty payload")]
    EmptyPayload,
    #[error("invalid svg: {content}")]
    InvalidSvg { content: String },
    #[error("payload exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },
    #[error("error while encoding payload: {0}")]
    Encoding(#[source] std::io::Error),
    #[error("error while decoding string: {0}")]
    Decoding(#[from] base64::DecodeError),
    #[error("error while uncompressing payload: {0}")]
    CompressionFormat(#[source] std::io::Error),
}

impl SvggError {
    /// Whether the error was caused by the request rather than the server.
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, Self::Encoding(_))
    }
}

pub type Result<T> = std::result::Result<T, SvggError>;
