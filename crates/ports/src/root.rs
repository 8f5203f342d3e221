// crates/ports/src/root.rs
use std::path::PathBuf;

/// Holder of the configured project root.
///
/// Callers read the root once when they build a request and carry the value
/// from there; a later `set` never reaches a scan already under way.
pub trait RootStore: Send + Sync {
    fn get(&self) -> PathBuf;
    fn set(&self, root: PathBuf);
}
