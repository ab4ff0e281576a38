use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed input in {file}: {reason}")]
    MalformedInput { file: String, reason: String },

    #[error("Wrong ids in text and variant files: {text_id} != {variant_id}")]
    IdMismatch { text_id: String, variant_id: String },

    #[error("Record count mismatch: {text_rows} text rows, {variant_rows} variant rows")]
    CountMismatch { text_rows: usize, variant_rows: usize },

    #[error("Malformed artifact '{artifact}': {reason}")]
    MalformedArtifact { artifact: String, reason: String },

    #[error("Artifact not found: {0}")]
    ArtifactNotFound(String),

    #[error("Security error: {0}")]
    Security(String),
}

pub type Result<T> = std::result::Result<T, CorpusError>;
