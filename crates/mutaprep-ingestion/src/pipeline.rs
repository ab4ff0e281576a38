//! End-to-end corpus preparation.
//!
//! Stage order:
//!   1. Extract missing raw inputs from their archives
//!   2. Load raw train/test sets
//!   3. Clean text (cached)
//!   4. Statistics, vocabulary and variation coverage check
//!   5. Mutation tokens (cached)
//!   6. Number tokens (cached)
//!   7. Reference texts per gene, then steps 3, 5 and 6 on them (cached)
//!
//! Every cached stage is keyed by a fixed artifact name; delete the artifact
//! to force recomputation.

use mutaprep_common::{Config, Record, ReferenceText, Result};
use tracing::{info, warn};

use crate::archive::extract_archives;
use crate::cache::{run_stage, ArtifactStore};
use crate::normalise::{normalize, rewrite_mutations, rewrite_numbers};
use crate::raw::load_raw_dataset;
use crate::references::ReferenceLibrary;
use crate::sources::ReferenceSource;
use crate::stats::CorpusStats;
use crate::vocabulary::Vocabulary;

// ── Artifact names ────────────────────────────────────────────────────────────

pub const TRAIN_TEXT_CLEAN: &str = "train_set_text_clean";
pub const TEST_TEXT_CLEAN: &str = "test_set_text_clean";
pub const TRAIN_MUTATIONS_PARSED: &str = "train_set_mutations_parsed";
pub const TEST_MUTATIONS_PARSED: &str = "test_set_mutations_parsed";
pub const TRAIN_NUMBERS_PARSED: &str = "train_set_numbers_parsed";
pub const TEST_NUMBERS_PARSED: &str = "test_set_numbers_parsed";
pub const REFERENCE_TEXT_CLEAN: &str = "wikipedia_text_clean";
pub const REFERENCE_MUTATIONS_PARSED: &str = "wikipedia_mutations_parsed";
pub const REFERENCE_NUMBERS_PARSED: &str = "wikipedia_numbers_parsed";

/// Output of a full pipeline run.
#[derive(Debug, Clone)]
pub struct PreparedCorpus {
    pub train: Vec<Record>,
    pub test: Vec<Record>,
    /// Empty when reference fetching was skipped.
    pub references: Vec<ReferenceText>,
    pub stats: CorpusStats,
    pub vocabulary: Vocabulary,
}

pub struct CorpusPipeline<S> {
    config: Config,
    store: S,
}

impl<S> CorpusPipeline<S>
where
    S: ArtifactStore<Record> + ArtifactStore<ReferenceText>,
{
    pub fn new(config: Config, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Extract archives if needed and load the raw train and test sets.
    pub fn load_raw(&self) -> Result<(Vec<Record>, Vec<Record>)> {
        let paths = &self.config.paths;
        let inputs = &self.config.inputs;
        extract_archives(&paths.archive_dir, &paths.data_dir, &inputs.all())?;

        let train = load_raw_dataset(
            &self.config.input_path(&inputs.train_text),
            &self.config.input_path(&inputs.train_variants),
        )?;
        let test = load_raw_dataset(
            &self.config.input_path(&inputs.test_text),
            &self.config.input_path(&inputs.test_variants),
        )?;
        Ok((train, test))
    }

    /// Load the cleaned train and test sets written by a previous run.
    pub fn load_clean(&self) -> Result<(Vec<Record>, Vec<Record>)> {
        let train = ArtifactStore::<Record>::load(&self.store, TRAIN_TEXT_CLEAN)?;
        let test = ArtifactStore::<Record>::load(&self.store, TEST_TEXT_CLEAN)?;
        Ok((train, test))
    }

    /// Run every stage. Reference texts are gathered only when a source is
    /// given and `references.enabled` is set.
    pub async fn run(&self, source: Option<&dyn ReferenceSource>) -> Result<PreparedCorpus> {
        let (train, test) = self.load_raw()?;

        let train = run_stage(&self.store, TRAIN_TEXT_CLEAN, &train, normalize)?;
        let test = run_stage(&self.store, TEST_TEXT_CLEAN, &test, normalize)?;

        let stats = CorpusStats::compute(&train, &test);
        info!(
            train_samples = stats.train_samples,
            test_samples = stats.test_samples,
            classes = stats.classes.len(),
            genes = stats.all_genes,
            "Corpus statistics"
        );

        let vocabulary = Vocabulary::from_datasets(&[&train[..], &test[..]]);
        let undetected = vocabulary.undetected_variations();
        if !undetected.is_empty() {
            warn!(
                count = undetected.len(),
                "Not all variations are detected as mutations: {}",
                undetected.join(", ")
            );
        }

        let genes = &vocabulary.genes;
        let train = run_stage(&self.store, TRAIN_MUTATIONS_PARSED, &train, |t| rewrite_mutations(t, genes))?;
        let test = run_stage(&self.store, TEST_MUTATIONS_PARSED, &test, |t| rewrite_mutations(t, genes))?;

        let train = run_stage(&self.store, TRAIN_NUMBERS_PARSED, &train, rewrite_numbers)?;
        let test = run_stage(&self.store, TEST_NUMBERS_PARSED, &test, rewrite_numbers)?;

        let references = match source {
            Some(source) if self.config.references.enabled => {
                self.prepare_references(&vocabulary, source).await?
            }
            _ => {
                info!("Reference texts skipped");
                Vec::new()
            }
        };

        Ok(PreparedCorpus { train, test, references, stats, vocabulary })
    }

    async fn prepare_references(
        &self,
        vocabulary: &Vocabulary,
        source: &dyn ReferenceSource,
    ) -> Result<Vec<ReferenceText>> {
        let library = ReferenceLibrary::new(&self.config.paths.reference_dir);
        let articles = library.gather(&vocabulary.sorted_genes(), source).await?;

        let articles = run_stage(&self.store, REFERENCE_TEXT_CLEAN, &articles, normalize)?;
        let genes = &vocabulary.genes;
        let articles = run_stage(&self.store, REFERENCE_MUTATIONS_PARSED, &articles, |t| {
            rewrite_mutations(t, genes)
        })?;
        run_stage(&self.store, REFERENCE_NUMBERS_PARSED, &articles, rewrite_numbers)
    }
}
