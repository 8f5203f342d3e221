// crates/infra/src/root_store.rs
use std::{
    path::PathBuf,
    sync::{PoisonError, RwLock},
};

use sheet_scan_ports::root::RootStore;

/// Process-local [`RootStore`]; the value lives as long as the store.
#[derive(Debug)]
pub struct InMemoryRootStore {
    root: RwLock<PathBuf>,
}

impl InMemoryRootStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: RwLock::new(root.into()) }
    }
}

impl RootStore for InMemoryRootStore {
    fn get(&self) -> PathBuf {
        self.root.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, root: PathBuf) {
        *self.root.write().unwrap_or_else(PoisonError::into_inner) = root;
    }
}
