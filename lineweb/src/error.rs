//! Serve-path error types.
//!
//! Every variant here reaches the client as a 200 response with an
//! `Error: ...` plain-text body; only an unmatched route gets a non-200
//! status. Cursor problems are absent on purpose: a corrupt or missing
//! cursor self-heals to index 0 inside the store, and a failed cursor
//! write is logged after the response body is already decided.
//!
use lineproto::rc4::CipherError;
use thiserror::Error;

/// Failures that abort a request before the cursor advances
#[derive(Debug, Error)]
pub enum ServeError {
    /// The corpus file could not be opened or read
    #[error("cannot read {path}: {source}")]
    SourceUnavailable {
        /// Corpus file path as configured
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The corpus file opened fine but holds zero lines
    #[error("corpus file is empty")]
    SourceEmpty,

    /// Keystream initialization or encryption failed
    #[error("encryption failed: {0}")]
    Encryption(#[from] CipherError),
}
