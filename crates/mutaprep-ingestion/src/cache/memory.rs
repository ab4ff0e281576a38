//! In-process artifact store, used by tests and dry runs.

use std::cell::RefCell;
use std::collections::HashMap;

use mutaprep_common::{CorpusError, Result};

use super::ArtifactStore;

#[derive(Debug, Default)]
pub struct MemoryArtifactStore<T> {
    artifacts: RefCell<HashMap<String, Vec<T>>>,
}

impl<T: Clone> MemoryArtifactStore<T> {
    pub fn new() -> Self {
        Self { artifacts: RefCell::new(HashMap::new()) }
    }

    /// Seed an artifact directly, bypassing any stage.
    pub fn insert(&self, name: &str, entries: Vec<T>) {
        self.artifacts.borrow_mut().insert(name.to_string(), entries);
    }
}

impl<T: Clone> ArtifactStore<T> for MemoryArtifactStore<T> {
    fn contains(&self, name: &str) -> bool {
        self.artifacts.borrow().contains_key(name)
    }

    fn save(&self, name: &str, entries: &[T]) -> Result<()> {
        self.insert(name, entries.to_vec());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Vec<T>> {
        self.artifacts
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| CorpusError::ArtifactNotFound(name.to_string()))
    }
}
