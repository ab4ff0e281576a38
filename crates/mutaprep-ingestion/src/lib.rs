//! mutaprep-ingestion: Corpus preparation pipeline.
//! Covers:
//! - Raw input extraction and loading
//! - Text normalisation (citations, figures, symbol padding)
//! - Mutation and number tokenisation
//! - Cached stages over named artifacts
//! - Gene reference texts
//! - Corpus statistics

pub mod archive;
pub mod cache;
pub mod normalise;
pub mod pipeline;
pub mod raw;
pub mod references;
pub mod sources;
pub mod stats;
pub mod vocabulary;

pub use cache::{run_stage, ArtifactStore, CsvArtifactStore, MemoryArtifactStore};
pub use pipeline::{CorpusPipeline, PreparedCorpus};
pub use sources::{ReferenceSource, WikipediaSource};
pub use stats::CorpusStats;
pub use vocabulary::Vocabulary;
