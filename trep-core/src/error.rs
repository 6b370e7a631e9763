//! Error types for TREP.

use thiserror::Error;

use crate::message::SymbolValue;

/// TREP protocol errors.
#[derive(Debug, Error)]
pub enum TrepError {
    /// The OS randomness source could not supply the requested bytes.
    #[error("Entropy source unavailable: {0}")]
    SourceUnavailable(String),

    /// Sent and echoed messages differ in length.
    #[error("Length mismatch: sent {sent} symbols, echoed {echoed}")]
    LengthMismatch { sent: usize, echoed: usize },

    /// A position in the echo violated the conjugate mapping.
    #[error("Invalid conjugate at position {position}: {sent} echoed as {echoed}")]
    InvalidConjugate {
        position: usize,
        sent: SymbolValue,
        echoed: SymbolValue,
    },
}

/// Result type alias for TREP operations.
pub type TrepResult<T> = Result<T, TrepError>;
