//! Relay session pipeline.
//!
//! Drives one full exchange: encode the outbound message, cost it, derive the
//! conjugate echo, and verify the echo against the original.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use trep_core::{
    compute_work, conjugate, effective_bit_rate, verify_echo, work_parity, Encoder, Message,
    SymbolValue, TrepResult, PROTOCOL_VERSION,
};

use crate::config::RelayConfig;

/// A single relay session over one message.
pub struct RelaySession {
    config: RelayConfig,
    encoder: Encoder,
}

impl RelaySession {
    /// Create a session backed by the OS randomness source.
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            encoder: Encoder::new(),
        }
    }

    /// Create a session with a custom encoder.
    pub fn with_encoder(config: RelayConfig, encoder: Encoder) -> Self {
        Self { config, encoder }
    }

    /// Run the full pipeline and assemble the session report.
    ///
    /// Returns an error only when encoding fails because the noise source
    /// could not supply samples. A failed verification is part of the report,
    /// so the caller can present it and choose the process outcome.
    pub fn run(&mut self) -> TrepResult<RelayReport> {
        let session_id = Uuid::new_v4();
        tracing::info!("Relay session {} started", session_id);

        let mut message = Message::new(self.config.payload.iter().copied());
        self.encoder.encode(&mut message)?;
        tracing::debug!("Sparse matrix: {:?}", message.sparse_matrix());

        for (position, symbol) in message.symbols().iter().enumerate() {
            if symbol.value().is_uncertain() {
                tracing::debug!("θ[{}] entropy: {:.4} bits", position, symbol.entropy());
            }
        }

        let work_joules = compute_work(&message, &self.config.work);
        let echo = conjugate(&message);
        let echo_work_joules = compute_work(&echo, &self.config.work);

        let (verified, failure) = match verify_echo(&message, &echo) {
            Ok(()) => (true, None),
            Err(err) => {
                tracing::error!("Echo verification failed: {}", err);
                (false, Some(err.to_string()))
            }
        };

        let report = RelayReport {
            protocol_version: PROTOCOL_VERSION.to_string(),
            session_id,
            completed_at: Utc::now(),
            sent: message.values(),
            echoed: echo.values(),
            entropy_bits: message.entropy_bits().unwrap_or_default(),
            work_joules,
            echo_work_joules,
            work_parity: work_parity(&message, &echo, &self.config.work),
            bit_rate: effective_bit_rate(&message, work_joules),
            verified,
            failure,
        };

        tracing::info!("Relay session {} completed", session_id);
        Ok(report)
    }
}

/// Outcome of one relay session.
#[derive(Debug, Clone, Serialize)]
pub struct RelayReport {
    pub protocol_version: String,
    pub session_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub sent: Vec<SymbolValue>,
    pub echoed: Vec<SymbolValue>,
    pub entropy_bits: Vec<f64>,
    pub work_joules: f64,
    pub echo_work_joules: f64,
    pub work_parity: bool,
    pub bit_rate: f64,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl fmt::Display for RelayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== TREP Echo Relay ===")?;
        writeln!(f, "Sent:   {}", format_values(&self.sent))?;
        for (position, (value, bits)) in self.sent.iter().zip(&self.entropy_bits).enumerate() {
            if value.is_uncertain() {
                writeln!(f, "θ[{}] entropy: {:.4} bits", position, bits)?;
            }
        }
        writeln!(f, "Work Required: {:.4} Joules", self.work_joules)?;
        writeln!(f, "Echoed: {}", format_values(&self.echoed))?;
        writeln!(f, "Effective Bit Rate: {:.2} messages/Joule", self.bit_rate)?;
        match &self.failure {
            None => writeln!(f, "Echo verified: ✓ VERIFIED"),
            Some(reason) => writeln!(f, "Echo verified: ✗ FAILED ({})", reason),
        }
    }
}

fn format_values(values: &[SymbolValue]) -> String {
    let names: Vec<String> = values.iter().map(|value| value.to_string()).collect();
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trep_core::{FixedNoiseSource, THETA_DEGREES};

    fn deterministic_encoder() -> Encoder {
        // Every 64-byte window holds 64 distinct values: exactly 6 bits each.
        Encoder::with_source(Box::new(FixedNoiseSource::new(
            (0..=255).collect::<Vec<u8>>(),
        )))
    }

    #[test]
    fn demo_session_verifies() {
        let mut session =
            RelaySession::with_encoder(RelayConfig::default(), deterministic_encoder());
        let report = session.run().unwrap();

        assert!(report.verified);
        assert!(report.failure.is_none());
        assert_eq!(
            report.sent,
            vec![
                SymbolValue::Yes,
                SymbolValue::Maybe,
                SymbolValue::No,
                SymbolValue::Maybe
            ]
        );
        assert_eq!(
            report.echoed,
            vec![
                SymbolValue::No,
                SymbolValue::Maybe,
                SymbolValue::Yes,
                SymbolValue::Maybe
            ]
        );

        assert_eq!(report.entropy_bits.len(), 4);
        assert_eq!(report.entropy_bits[0], 0.0);
        assert!((report.entropy_bits[1] - 6.0).abs() < 1e-9);
        assert_eq!(report.entropy_bits[2], 0.0);
        assert!((report.entropy_bits[3] - 6.0).abs() < 1e-9);

        let base_work = 1.25 * 15.0 * THETA_DEGREES.to_radians().cos();
        assert!((report.work_joules - (base_work + 1.2)).abs() < 1e-9);
        assert_eq!(report.work_joules, report.echo_work_joules);
        assert!(report.work_parity);
        assert_eq!(report.protocol_version, "0.1");
    }

    #[test]
    fn clear_payload_fails_verification() {
        let config = RelayConfig::default()
            .with_payload(vec![SymbolValue::Yes, SymbolValue::Clear]);
        let mut session = RelaySession::with_encoder(config, deterministic_encoder());
        let report = session.run().unwrap();

        assert!(!report.verified);
        let reason = report.failure.unwrap();
        assert!(reason.contains("position 1"));
    }

    #[test]
    fn sampler_failure_aborts_the_session() {
        let encoder = Encoder::with_source(Box::new(FixedNoiseSource::new(Vec::new())));
        let mut session = RelaySession::with_encoder(RelayConfig::default(), encoder);
        assert!(session.run().is_err());
    }

    #[test]
    fn report_serializes_to_json() {
        let mut session =
            RelaySession::with_encoder(RelayConfig::default(), deterministic_encoder());
        let report = session.run().unwrap();

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"verified\":true"));
        assert!(json.contains("\"MAYBE\""));
        assert!(!json.contains("failure"));
    }

    #[test]
    fn report_display_shows_the_verdict() {
        let mut session =
            RelaySession::with_encoder(RelayConfig::default(), deterministic_encoder());
        let report = session.run().unwrap();

        let text = report.to_string();
        assert!(text.contains("Work Required:"));
        assert!(text.contains("θ[1] entropy:"));
        assert!(text.contains("✓ VERIFIED"));
    }
}
