// ─────────────────────────────────────────────────────────────────────
// Methodica — Control
// Copyright (c) 2024–2026 The Methodica Developers
// License: MIT OR Apache-2.0
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Iteration budget and precision control shared by every iterative routine.
///
/// `decimals` drives both the convergence threshold (`10^-decimals`) and the
/// number of places kept when a result is reported (`decimals - 1`). An
/// iterative routine that exhausts its budget reports `max_iter - 1`
/// completed iterations, which callers can compare against to detect
/// non-convergence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IterControl {
    /// Iteration budget; the loop body runs at most `max_iter - 1` times
    /// (default: 100).
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    /// Convergence decimals; the threshold is `10^-decimals` (default: 6).
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

fn default_max_iter() -> usize {
    100
}
fn default_decimals() -> u32 {
    6
}

impl Default for IterControl {
    fn default() -> Self {
        IterControl {
            max_iter: default_max_iter(),
            decimals: default_decimals(),
        }
    }
}

impl IterControl {
    /// Absolute convergence threshold, `10^-decimals`.
    pub fn threshold(&self) -> f64 {
        1.0 / 10f64.powi(self.decimals as i32)
    }

    /// Decimal places kept when a result is reported.
    pub fn report_decimals(&self) -> u32 {
        self.decimals.saturating_sub(1)
    }

    /// Round `value` to this control's reporting precision.
    pub fn round(&self, value: f64) -> f64 {
        round_to(value, self.report_decimals())
    }
}

/// Round `value` to `decimals` decimal places (ties away from zero).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_control() {
        let control = IterControl::default();
        assert_eq!(control.max_iter, 100);
        assert_eq!(control.decimals, 6);
        assert!((control.threshold() - 1e-6).abs() < 1e-20);
        assert_eq!(control.report_decimals(), 5);
    }

    #[test]
    fn test_round_to_places() {
        assert!((round_to(1.0082654, 6) - 1.008265).abs() < 1e-12);
        assert!((round_to(0.4444449, 6) - 0.444445).abs() < 1e-12);
        assert!((round_to(-0.1177499, 4) + 0.1177).abs() < 1e-12);
        assert!((round_to(2.5, 0) - 3.0).abs() < 1e-12);
        assert!((round_to(-2.5, 0) + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_keeps_nonfinite() {
        assert!(round_to(f64::NAN, 5).is_nan());
        assert!(round_to(f64::INFINITY, 5).is_infinite());
    }

    #[test]
    fn test_round_to_slip_at_wide_scale() {
        // The scaled product sits at 6.2e13, where one ulp divided back
        // out is larger than 1e-12; the result lands just past half a
        // step from the input.
        let value = -620030.530199965;
        let diff = (round_to(value, 8) - value).abs();
        assert!(diff > 0.5e-8, "diff = {diff:e}");
        assert!(diff <= 0.5e-8 + 1e-15 * value.abs() + 1e-12, "diff = {diff:e}");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let control: IterControl = serde_json::from_str(r#"{"max_iter": 500}"#).unwrap();
        assert_eq!(control.max_iter, 500);
        assert_eq!(control.decimals, 6);

        let control: IterControl = serde_json::from_str(r#"{"decimals": 9}"#).unwrap();
        assert_eq!(control.max_iter, 100);
        assert_eq!(control.decimals, 9);

        let control: IterControl = serde_json::from_str("{}").unwrap();
        assert_eq!(control.max_iter, 100);
        assert_eq!(control.decimals, 6);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let control = IterControl {
            max_iter: 250,
            decimals: 8,
        };
        let json = serde_json::to_string(&control).unwrap();
        let back: IterControl = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_iter, control.max_iter);
        assert_eq!(back.decimals, control.decimals);
    }
}
