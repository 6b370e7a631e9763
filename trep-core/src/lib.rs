//! # trep-core
//!
//! Core library for the Trinary Echo Relay Protocol (TREP).
//!
//! This crate provides the symbol and message model, channel entropy
//! measurement, the annotating encoder, the transmission work model, the
//! conjugate transformer, and the echo verifier.

pub mod encoder;
pub mod entropy;
pub mod error;
pub mod message;
pub mod transform;
pub mod verify;
pub mod work;

pub use encoder::Encoder;
pub use entropy::{measure_entropy, FixedNoiseSource, NoiseSource, OsNoiseSource, ENTROPY_WINDOW};
pub use error::{TrepError, TrepResult};
pub use message::{Message, Symbol, SymbolValue};
pub use transform::conjugate;
pub use verify::{is_conjugate, verify_echo};
pub use work::{
    compute_work, effective_bit_rate, work_parity, WorkParams, ENTROPY_COST_SCALE, THETA_DEGREES,
    WORK_TOLERANCE_JOULES,
};

/// Protocol version
pub const PROTOCOL_VERSION: &str = "0.1";
