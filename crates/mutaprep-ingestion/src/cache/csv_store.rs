//! Delimited-file artifact store.
//!
//! One file per artifact, named exactly after it, inside a single directory.
//! Rows are `;`-separated, `"`-quoted only when needed, without a header:
//!
//! - records: `id;text;gene;variation;class` (`class` is `None` when absent)
//! - references: `gene;text`

use std::fs;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use mutaprep_common::{CorpusError, Record, ReferenceText, Result};
use tracing::debug;

use super::ArtifactStore;

const DELIMITER: u8 = b';';
const QUOTE: u8 = b'"';
const NO_CLASS: &str = "None";

/// Conversion between an entry and one delimited row.
pub trait CsvRow: Sized {
    fn to_row(&self) -> Vec<String>;
    fn from_row(row: &StringRecord) -> std::result::Result<Self, String>;
}

impl CsvRow for Record {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.text.clone(),
            self.gene.clone(),
            self.variation.clone(),
            self.class.map_or_else(|| NO_CLASS.to_string(), |c| c.to_string()),
        ]
    }

    fn from_row(row: &StringRecord) -> std::result::Result<Self, String> {
        if row.len() != 5 {
            return Err(format!("expected 5 fields, found {}", row.len()));
        }
        let id = row[0]
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("invalid id '{}': {e}", &row[0]))?;
        // Anything that is not an integer reads back as unlabelled
        let class = row[4].trim().parse::<u32>().ok();
        Ok(Record::new(id, &row[1], &row[2], &row[3], class))
    }
}

impl CsvRow for ReferenceText {
    fn to_row(&self) -> Vec<String> {
        vec![self.gene.clone(), self.text.clone()]
    }

    fn from_row(row: &StringRecord) -> std::result::Result<Self, String> {
        if row.len() != 2 {
            return Err(format!("expected 2 fields, found {}", row.len()));
        }
        Ok(ReferenceText::new(&row[0], &row[1]))
    }
}

/// Artifact store backed by one delimited file per artifact.
#[derive(Debug, Clone)]
pub struct CsvArtifactStore {
    dir: PathBuf,
}

impl CsvArtifactStore {
    /// Open (creating if needed) an artifact directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl<T: CsvRow> ArtifactStore<T> for CsvArtifactStore {
    fn contains(&self, name: &str) -> bool {
        self.artifact_path(name).is_file()
    }

    fn save(&self, name: &str, entries: &[T]) -> Result<()> {
        let path = self.artifact_path(name);
        let tmp = self.dir.join(format!(".{name}.tmp"));
        {
            let mut writer = WriterBuilder::new()
                .delimiter(DELIMITER)
                .quote(QUOTE)
                .quote_style(QuoteStyle::Necessary)
                .has_headers(false)
                .flexible(true)
                .from_path(&tmp)?;
            for entry in entries {
                writer.write_record(entry.to_row())?;
            }
            writer.flush()?;
        }
        // A half-written file must never be mistaken for a finished artifact
        fs::rename(&tmp, &path)?;
        debug!(artifact = name, rows = entries.len(), path = %path.display(), "Saved artifact");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Vec<T>> {
        let path = self.artifact_path(name);
        if !path.is_file() {
            return Err(CorpusError::ArtifactNotFound(name.to_string()));
        }
        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .quote(QUOTE)
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;

        let mut entries = Vec::new();
        for (line, row) in reader.records().enumerate() {
            let row = row?;
            let entry = T::from_row(&row).map_err(|reason| CorpusError::MalformedArtifact {
                artifact: name.to_string(),
                reason: format!("row {}: {reason}", line + 1),
            })?;
            entries.push(entry);
        }
        Ok(entries)
    }
}
