//! Error type for cache operations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the cache backend or value codec.
///
/// The façade logs and swallows these; callers of `get_or_compute`
/// never see them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CacheError {
    /// The backend rejected or failed the operation.
    Backend(String),
    /// A stored value could not be encoded or decoded.
    Codec(String),
}

impl Display for CacheError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(msg) => write!(f, "cache backend error: {msg}"),
            Self::Codec(msg) => write!(f, "cache codec error: {msg}"),
        }
    }
}

impl Error for CacheError {}

impl From<serde_json::Error> for CacheError {
    fn from(e: serde_json::Error) -> Self {
        Self::Codec(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_context() {
        let e = CacheError::Backend("connection refused".to_owned());
        assert!(e.to_string().contains("connection refused"));
    }

    #[test]
    fn json_error_maps_to_codec() {
        let bad: Result<u32, _> = serde_json::from_str("not json");
        let e: CacheError = bad.unwrap_err().into();
        assert!(matches!(e, CacheError::Codec(_)));
    }
}
