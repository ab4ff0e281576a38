//! Per-gene reference text cache.
//!
//! Each gene's text lives in `<dir>/wikipedia_gen_<GENE>`. A present file
//! is authoritative, whatever it contains; otherwise the source is asked
//! once and its answer (or an empty text on failure) is written down.

use std::path::PathBuf;

use mutaprep_common::{ReferenceText, Result};
use tracing::{debug, info, warn};

use crate::sources::ReferenceSource;

const FILE_PREFIX: &str = "wikipedia_gen_";

#[derive(Debug, Clone)]
pub struct ReferenceLibrary {
    dir: PathBuf,
}

impl ReferenceLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn gene_path(&self, gene: &str) -> PathBuf {
        let file_name: String = gene
            .chars()
            .map(|c| if std::path::is_separator(c) { '_' } else { c })
            .collect();
        self.dir.join(format!("{FILE_PREFIX}{file_name}"))
    }

    /// Reference text for every gene, in the order given.
    pub async fn gather(
        &self,
        genes: &[String],
        source: &dyn ReferenceSource,
    ) -> Result<Vec<ReferenceText>> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let mut fetched = 0usize;
        let mut entries = Vec::with_capacity(genes.len());

        for gene in genes {
            let path = self.gene_path(gene);
            if !path.exists() {
                let text = match source.fetch(gene).await {
                    Ok(text) => text,
                    Err(e) => {
                        warn!(gene = %gene, error = %e, "Reference fetch failed, using empty text");
                        String::new()
                    }
                };
                tokio::fs::write(&path, &text).await?;
                fetched += 1;
                debug!(gene = %gene, bytes = text.len(), "Cached reference text");
            }
            let text = tokio::fs::read_to_string(&path).await?;
            entries.push(ReferenceText::new(gene.clone(), text));
        }

        info!(genes = genes.len(), fetched, "Reference texts ready");
        Ok(entries)
    }
}
