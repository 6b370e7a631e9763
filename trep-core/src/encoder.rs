//! Message encoding with per-symbol entropy annotation.
//!
//! Walks a message and annotates it in place: uncertain symbols receive a
//! fresh entropy measurement, definite symbols a zero annotation.

use crate::entropy::{measure_entropy, NoiseSource, OsNoiseSource, ENTROPY_WINDOW};
use crate::error::TrepResult;
use crate::message::{Message, SymbolValue};

/// Encoder annotating messages from a noise source.
pub struct Encoder {
    source: Box<dyn NoiseSource>,
}

impl Encoder {
    /// Create an encoder backed by the OS randomness source.
    pub fn new() -> Self {
        Self {
            source: Box::new(OsNoiseSource),
        }
    }

    /// Create an encoder with a custom noise source.
    pub fn with_source(source: Box<dyn NoiseSource>) -> Self {
        Self { source }
    }

    /// Annotate `message` in place.
    ///
    /// Each `Maybe` position triggers one entropy measurement over an
    /// [`ENTROPY_WINDOW`]-byte sample; every other position is annotated with
    /// `0.0`. Annotations are applied only once all measurements have
    /// succeeded: if the noise source fails, the error propagates and the
    /// message stays unencoded.
    pub fn encode(&mut self, message: &mut Message) -> TrepResult<()> {
        let mut annotations = Vec::with_capacity(message.len());
        for symbol in message.symbols() {
            let entropy = match symbol.value() {
                SymbolValue::Maybe => measure_entropy(self.source.as_mut(), ENTROPY_WINDOW)?,
                SymbolValue::No | SymbolValue::Yes | SymbolValue::Clear => 0.0,
            };
            annotations.push(entropy);
        }
        message.apply_annotations(annotations);
        Ok(())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
