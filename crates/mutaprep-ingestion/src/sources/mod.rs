//! Reference text sources.

pub mod wikipedia;

pub use wikipedia::WikipediaSource;

use async_trait::async_trait;

/// Common interface for gene reference text providers.
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    /// Fetch free text describing `gene`. An empty string means the source
    /// had nothing usable.
    async fn fetch(&self, gene: &str) -> anyhow::Result<String>;
}
