//! # privatas-observability
//!
//! Tracing subscriber setup driven by [`ObservabilityConfig`] and structured
//! log events for the draft workflow. Events carry ids, modes and counts,
//! never document text.
//!
//! [`ObservabilityConfig`]: privatas_core::config::ObservabilityConfig

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter, LOG_ENV_VAR};
