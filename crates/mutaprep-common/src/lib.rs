//! mutaprep-common: Shared types, errors, and configuration used across all mutaprep crates.

pub mod error;
pub mod config;
pub mod corpus;
pub mod sandbox;

// Re-export commonly used types
pub use config::{Config, InputsConfig, PathsConfig, ReferencesConfig};
pub use corpus::{CorpusEntry, Record, ReferenceText};
pub use error::{CorpusError, Result};
