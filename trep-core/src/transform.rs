//! Conjugate transformation for TREP.
//!
//! Derives the echo of a message under the fixed mapping Yes ↔ No with Maybe
//! preserved.

use crate::message::{Message, Symbol, SymbolValue};

/// Derive the conjugate echo of `message`.
///
/// Values map `Yes → No`, `No → Yes`, `Maybe → Maybe` and `Clear → Clear`.
/// Entropy annotations and the encoding marker are carried over verbatim,
/// never remeasured. The echo owns freshly allocated storage, fully
/// independent of the source message.
pub fn conjugate(message: &Message) -> Message {
    let symbols = message
        .symbols()
        .iter()
        .map(|symbol| {
            let value = match symbol.value() {
                SymbolValue::Yes => SymbolValue::No,
                SymbolValue::No => SymbolValue::Yes,
                // MAYBE is sacred: uncertainty survives the transform.
                SymbolValue::Maybe => SymbolValue::Maybe,
                SymbolValue::Clear => SymbolValue::Clear,
            };
            Symbol::with_entropy(value, symbol.entropy())
        })
        .collect();

    Message::from_parts(symbols, message.is_encoded())
}
