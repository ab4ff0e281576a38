//! Stage cache orchestration.
//!
//! Every expensive pass over a dataset is wrapped by [`run_stage`]: compute
//! once, persist under an artifact name, and always hand back what the store
//! reloads. Artifact identity is the name alone; an existing artifact is
//! reused as-is even if the input dataset has changed since it was written.

pub mod csv_store;
pub mod memory;

pub use csv_store::{CsvArtifactStore, CsvRow};
pub use memory::MemoryArtifactStore;

use mutaprep_common::{CorpusEntry, Result};
use tracing::{debug, info};

/// Persistence for named, fully materialised datasets.
pub trait ArtifactStore<T> {
    /// Whether an artifact with this name has already been written.
    fn contains(&self, name: &str) -> bool;

    /// Persist a whole dataset under `name`.
    fn save(&self, name: &str, entries: &[T]) -> Result<()>;

    /// Load the dataset stored under `name`.
    fn load(&self, name: &str) -> Result<Vec<T>>;
}

/// Load the named artifact, or compute it from `dataset` and persist it.
///
/// On a miss, `transform` is applied to the text of an owned copy of every
/// entry; the caller's slice is never touched. Both paths end with a reload
/// from `store`, so callers always receive freshly deserialised entries.
pub fn run_stage<T, S, F>(
    store: &S,
    artifact: &str,
    dataset: &[T],
    mut transform: F,
) -> Result<Vec<T>>
where
    T: CorpusEntry,
    S: ArtifactStore<T> + ?Sized,
    F: FnMut(&str) -> String,
{
    if store.contains(artifact) {
        info!(artifact, "Artifact cached, skipping stage");
    } else {
        info!(artifact, n_entries = dataset.len(), "Computing stage");
        let transformed: Vec<T> = dataset
            .iter()
            .cloned()
            .map(|entry| {
                let text = transform(entry.text());
                entry.with_text(text)
            })
            .collect();
        store.save(artifact, &transformed)?;
        debug!(artifact, "Artifact written");
    }
    store.load(artifact)
}
