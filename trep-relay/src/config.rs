//! Relay session configuration.

use trep_core::{SymbolValue, WorkParams};

/// The canonical demo payload: YES, MAYBE, NO, MAYBE.
pub const DEMO_PAYLOAD: [SymbolValue; 4] = [
    SymbolValue::Yes,
    SymbolValue::Maybe,
    SymbolValue::No,
    SymbolValue::Maybe,
];

/// Relay session configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Symbol values to relay.
    pub payload: Vec<SymbolValue>,
    /// Physical parameters of the work model.
    pub work: WorkParams,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            payload: DEMO_PAYLOAD.to_vec(),
            work: WorkParams::default(),
        }
    }
}

impl RelayConfig {
    /// Set a custom payload.
    pub fn with_payload(mut self, payload: Vec<SymbolValue>) -> Self {
        self.payload = payload;
        self
    }

    /// Set custom work parameters.
    pub fn with_work(mut self, work: WorkParams) -> Self {
        self.work = work;
        self
    }
}
