// ─────────────────────────────────────────────────────────────────────
// Methodica — Property-Based Tests (proptest) for methodica-types
// Copyright (c) 2024–2026 The Methodica Developers
// License: MIT OR Apache-2.0
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for methodica-types using proptest.
//!
//! Covers: IterControl threshold/rounding invariants, serde roundtrip,
//! HistorySink bookkeeping.

use methodica_types::control::{round_to, IterControl};
use methodica_types::trace::{HistorySink, IterationSink};
use proptest::prelude::*;

// ── IterControl Invariants ───────────────────────────────────────────

proptest! {
    /// The threshold is positive and shrinks by 10x per extra decimal.
    #[test]
    fn threshold_scales_with_decimals(decimals in 1u32..12) {
        let coarse = IterControl { max_iter: 100, decimals };
        let fine = IterControl { max_iter: 100, decimals: decimals + 1 };

        prop_assert!(coarse.threshold() > 0.0);
        let ratio = coarse.threshold() / fine.threshold();
        prop_assert!((ratio - 10.0).abs() < 1e-9,
            "threshold ratio for {} -> {} decimals = {}", decimals, decimals + 1, ratio);
    }

    /// Rounding never moves a value by more than half a unit in the last
    /// kept place, up to representation error in the scaled product.
    #[test]
    fn round_to_stays_within_half_step(value in -1e6f64..1e6, decimals in 0u32..9) {
        let rounded = round_to(value, decimals);
        let step = 1.0 / 10f64.powi(decimals as i32);
        // value * 10^decimals reaches 1e14 here; its ulp divided back out
        // can push the result past the ideal half-step bound.
        let slack = 1e-15 * value.abs() + 1e-12;
        prop_assert!((rounded - value).abs() <= step / 2.0 + slack,
            "round_to({}, {}) = {} moved more than {}", value, decimals, rounded, step / 2.0);
    }

    /// Rounding is idempotent.
    #[test]
    fn round_to_idempotent(value in -1e6f64..1e6, decimals in 0u32..9) {
        let once = round_to(value, decimals);
        let twice = round_to(once, decimals);
        prop_assert!((once - twice).abs() < 1e-12,
            "round_to not idempotent: {} -> {} -> {}", value, once, twice);
    }

    /// Serde roundtrip preserves both fields.
    #[test]
    fn control_roundtrip(max_iter in 1usize..10_000, decimals in 0u32..15) {
        let control = IterControl { max_iter, decimals };
        let json = serde_json::to_string(&control).unwrap();
        let back: IterControl = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.max_iter, control.max_iter);
        prop_assert_eq!(back.decimals, control.decimals);
    }
}

// ── HistorySink Bookkeeping ──────────────────────────────────────────

proptest! {
    /// The sink keeps one record per call, in order, with the data intact.
    #[test]
    fn history_keeps_every_record(count in 0usize..50, width in 1usize..6) {
        let mut sink = HistorySink::new();
        for iteration in 1..=count {
            let approx: Vec<f64> = (0..width).map(|i| (iteration * 10 + i) as f64).collect();
            sink.record(iteration, &approx);
        }

        prop_assert_eq!(sink.len(), count);
        for (idx, (iteration, approx)) in sink.records.iter().enumerate() {
            prop_assert_eq!(*iteration, idx + 1);
            prop_assert_eq!(approx.len(), width);
            prop_assert!((approx[0] - ((idx + 1) * 10) as f64).abs() < 1e-12);
        }
    }
}
