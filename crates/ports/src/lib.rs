//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory traversal and accessibility probing
//! - [`root`]: where the configured project root lives
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod root;
