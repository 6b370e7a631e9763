//! Echo verification for TREP.
//!
//! Checks, symbol by symbol, that an echoed message is a valid conjugate of
//! the sent one.

use crate::error::{TrepError, TrepResult};
use crate::message::{Message, SymbolValue};

/// Verify that `echoed` is a valid conjugate of `sent`.
///
/// Fails with [`TrepError::LengthMismatch`] when the messages differ in
/// length, and with [`TrepError::InvalidConjugate`] at the first position
/// violating the mapping (`Yes → No`, `No → Yes`, `Maybe → Maybe`; a sent
/// `Clear` never has a valid echo). Positions after a failure are not
/// inspected.
pub fn verify_echo(sent: &Message, echoed: &Message) -> TrepResult<()> {
    if sent.len() != echoed.len() {
        return Err(TrepError::LengthMismatch {
            sent: sent.len(),
            echoed: echoed.len(),
        });
    }

    for (position, (s, e)) in sent.symbols().iter().zip(echoed.symbols()).enumerate() {
        let valid = match s.value() {
            SymbolValue::Yes => e.value() == SymbolValue::No,
            SymbolValue::No => e.value() == SymbolValue::Yes,
            SymbolValue::Maybe => e.value() == SymbolValue::Maybe,
            SymbolValue::Clear => false,
        };

        if !valid {
            return Err(TrepError::InvalidConjugate {
                position,
                sent: s.value(),
                echoed: e.value(),
            });
        }
    }

    Ok(())
}

/// Decision-procedure form of [`verify_echo`]: true only if every position
/// passes its conjugate check.
pub fn is_conjugate(sent: &Message, echoed: &Message) -> bool {
    verify_echo(sent, echoed).is_ok()
}
