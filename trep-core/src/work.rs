//! Transmission work computation for TREP.
//!
//! Implements the physics-flavored cost model W = F · d · cos θ plus a scaled
//! entropy surcharge for annotated uncertainty.

use crate::message::Message;

/// Fixed transmission angle of the model, in degrees.
pub const THETA_DEGREES: f64 = 30.0;

/// Scale factor applied to the summed entropy annotations.
pub const ENTROPY_COST_SCALE: f64 = 0.1;

/// Largest acceptable work difference between a message and its echo.
pub const WORK_TOLERANCE_JOULES: f64 = 0.5;

/// Physical parameters of the work model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkParams {
    /// Applied force in Newtons.
    pub force_newtons: f64,
    /// Transmission distance in meters.
    pub distance_meters: f64,
}

impl WorkParams {
    /// Create custom work parameters.
    pub fn new(force_newtons: f64, distance_meters: f64) -> Self {
        Self {
            force_newtons,
            distance_meters,
        }
    }
}

impl Default for WorkParams {
    fn default() -> Self {
        Self {
            force_newtons: 1.25,
            distance_meters: 15.0,
        }
    }
}

/// Compute the work required to transmit `message`, in Joules.
///
/// The base term is `force · distance · cos(30°)`; the angle is a fixed
/// constant of the model, not a parameter. Each entropy annotation then adds
/// a tenth of its value on top. An unencoded message has no annotation
/// sequence and contributes zero entropy cost. The computation reads only its
/// arguments, so identical inputs always give identical results.
pub fn compute_work(message: &Message, params: &WorkParams) -> f64 {
    let base_work =
        params.force_newtons * params.distance_meters * THETA_DEGREES.to_radians().cos();

    let entropy_cost = match message.entropy_bits() {
        Some(bits) => ENTROPY_COST_SCALE * bits.iter().sum::<f64>(),
        None => 0.0,
    };

    base_work + entropy_cost
}

/// Check that a message and its echo agree on work within the tolerance.
pub fn work_parity(sent: &Message, echoed: &Message, params: &WorkParams) -> bool {
    (compute_work(sent, params) - compute_work(echoed, params)).abs() < WORK_TOLERANCE_JOULES
}

/// Illustrative channel throughput in messages per Joule.
pub fn effective_bit_rate(message: &Message, work: f64) -> f64 {
    message.len() as f64 / (work / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Encoder;
    use crate::entropy::FixedNoiseSource;
    use crate::message::SymbolValue;
    use crate::transform::conjugate;

    fn base_work(params: &WorkParams) -> f64 {
        params.force_newtons * params.distance_meters * THETA_DEGREES.to_radians().cos()
    }

    #[test]
    fn unencoded_message_costs_base_work_only() {
        let message = Message::new([SymbolValue::Yes, SymbolValue::Maybe]);
        let params = WorkParams::default();

        let work = compute_work(&message, &params);
        assert!((work - base_work(&params)).abs() < 1e-12);
    }

    #[test]
    fn reference_parameters_cost_sixteen_joules() {
        // 1.25 N over 15 m at cos(30°).
        let message = Message::new([SymbolValue::Yes, SymbolValue::No]);
        let work = compute_work(&message, &WorkParams::default());
        assert!((work - 16.238).abs() < 0.001);
    }

    #[test]
    fn entropy_annotations_add_scaled_cost() {
        // Two Maybe positions, each measuring exactly 6 bits.
        let source = FixedNoiseSource::new((0..=255).collect::<Vec<u8>>());
        let mut encoder = Encoder::with_source(Box::new(source));
        let mut message = Message::new([SymbolValue::Maybe, SymbolValue::Maybe]);
        encoder.encode(&mut message).unwrap();

        let params = WorkParams::default();
        let work = compute_work(&message, &params);
        assert!((work - (base_work(&params) + 1.2)).abs() < 1e-9);
    }

    #[test]
    fn work_is_deterministic() {
        let source = FixedNoiseSource::new(vec![7, 7, 9, 9]);
        let mut encoder = Encoder::with_source(Box::new(source));
        let mut message = Message::new([SymbolValue::Maybe, SymbolValue::No]);
        encoder.encode(&mut message).unwrap();

        let params = WorkParams::new(2.0, 3.0);
        assert_eq!(compute_work(&message, &params), compute_work(&message, &params));
    }

    #[test]
    fn echo_work_matches_within_tolerance() {
        let source = FixedNoiseSource::new((0..=255).collect::<Vec<u8>>());
        let mut encoder = Encoder::with_source(Box::new(source));
        let mut message = Message::new([
            SymbolValue::Yes,
            SymbolValue::Maybe,
            SymbolValue::No,
        ]);
        encoder.encode(&mut message).unwrap();

        let echo = conjugate(&message);
        assert!(work_parity(&message, &echo, &WorkParams::default()));
    }

    #[test]
    fn bit_rate_scales_with_length() {
        let message = Message::new([SymbolValue::Yes; 4]);
        let rate = effective_bit_rate(&message, 20.0);
        assert!((rate - 2.0).abs() < 1e-12);
    }
}
