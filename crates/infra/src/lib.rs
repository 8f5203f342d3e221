//! # Infrastructure
//!
//! Adapters for the ports: a filesystem walker and an in-memory root store.

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod root_store;

pub use filesystem::FsDirectoryWalker;
pub use root_store::InMemoryRootStore;
