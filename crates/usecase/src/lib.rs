//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement specific use cases:
//!
//! - [`orchestrator`]: scoped scans, keyword scans, counting and batches
//! - [`dto`]: annotated records and the response envelopes
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{CountOutcome, ScanEnvelope, ScanOutcome, ScanRequest, ScannedFile};
pub use orchestrator::ScanOrchestrator;
