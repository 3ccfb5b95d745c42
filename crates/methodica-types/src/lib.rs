// ─────────────────────────────────────────────────────────────────────
// Methodica — Shared Types
// Copyright (c) 2024–2026 The Methodica Developers
// License: MIT OR Apache-2.0
// ─────────────────────────────────────────────────────────────────────
pub mod control;
pub mod error;
pub mod trace;
