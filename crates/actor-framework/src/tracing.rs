//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber used by every actor.
//!
//! - Level and per-module filters come from `RUST_LOG`.
//! - The module path is hidden (`with_target(false)`); actors log an `entity_type` field instead.
//! - Compact format, so spans show inline (e.g. `seed:load_seed_data:register_patient: ...`).
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and outcomes
//! RUST_LOG=debug cargo run    # plus full request payloads
//! ```
//!
//! With `RUST_LOG=info` a registration and a failed removal look like:
//!
//! ```text
//! INFO Created entity_type="Patient" id=14 size=3
//! WARN Not found entity_type="Appointment" id=12
//! ```

/// Installs the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
