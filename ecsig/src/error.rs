use thiserror::Error;

/**
    Reasons a public key or signature could not be decoded.

    A signature that decodes cleanly but does not match is never one of
    these; verification reports it as `false`.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    // ── Text encoding ─────────────────────────────────────────────────
    #[error("invalid base64: {0}")]
    Encoding(String),

    // ── DER structure ─────────────────────────────────────────────────
    #[error("malformed record: {0}")]
    Structural(String),
    #[error("unexpected {0} trailing byte(s) after signature record")]
    TrailingData(usize),

    // ── Key algorithm / curve ─────────────────────────────────────────
    #[error("unsupported public key type: {0}")]
    UnsupportedKeyType(String),
    #[error("unsupported elliptic curve: {0}")]
    UnsupportedCurve(String),
}

impl DecodeError {
    pub(crate) fn structural(msg: impl Into<String>) -> Self {
        Self::Structural(msg.into())
    }
}

impl From<der::Error> for DecodeError {
    fn from(e: der::Error) -> Self {
        Self::Structural(e.to_string())
    }
}

/// Type alias for results that may return a [`DecodeError`].
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Error returned by `FromStr` implementations on enum types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}
