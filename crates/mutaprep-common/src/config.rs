//! Configuration loading for mutaprep.
//! Reads mutaprep.toml from the current directory or the path in the MUTAPREP_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CorpusError, Result};

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "mutaprep.toml";

/// Env var overriding the config file path.
pub const CONFIG_ENV_VAR: &str = "MUTAPREP_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub inputs: InputsConfig,
    #[serde(default)]
    pub references: ReferencesConfig,
}

// ── Paths ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the raw (extracted) input files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory holding `<input>.zip` archives.
    #[serde(default = "default_archive_dir")]
    pub archive_dir: PathBuf,
    /// Directory where cached artifacts are written.
    #[serde(default = "default_generated_dir")]
    pub generated_dir: PathBuf,
    /// Per-gene reference text cache.
    #[serde(default = "default_reference_dir")]
    pub reference_dir: PathBuf,
}

fn default_data_dir()      -> PathBuf { PathBuf::from("data") }
fn default_archive_dir()   -> PathBuf { PathBuf::from(".") }
fn default_generated_dir() -> PathBuf { PathBuf::from("data/generated") }

fn default_reference_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("mutaprep")
        .join("references")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            archive_dir: default_archive_dir(),
            generated_dir: default_generated_dir(),
            reference_dir: default_reference_dir(),
        }
    }
}

// ── Inputs ────────────────────────────────────────────────────────────────────

/// Raw input file names, relative to `paths.data_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsConfig {
    #[serde(default = "default_train_text")]
    pub train_text: String,
    #[serde(default = "default_train_variants")]
    pub train_variants: String,
    #[serde(default = "default_test_text")]
    pub test_text: String,
    #[serde(default = "default_test_variants")]
    pub test_variants: String,
}

fn default_train_text()     -> String { "training_text".to_string() }
fn default_train_variants() -> String { "training_variants".to_string() }
fn default_test_text()      -> String { "test_text".to_string() }
fn default_test_variants()  -> String { "test_variants".to_string() }

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            train_text: default_train_text(),
            train_variants: default_train_variants(),
            test_text: default_test_text(),
            test_variants: default_test_variants(),
        }
    }
}

impl InputsConfig {
    /// All input names, in extraction order.
    pub fn all(&self) -> [&str; 4] {
        [
            self.train_text.as_str(),
            self.train_variants.as_str(),
            self.test_text.as_str(),
            self.test_variants.as_str(),
        ]
    }
}

// ── Reference articles ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferencesConfig {
    #[serde(default = "bool_true")]
    pub enabled: bool,
    /// Article URL prefix; the gene symbol is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Paragraphs must be strictly longer than this many characters.
    #[serde(default = "default_min_chars")]
    pub min_paragraph_chars: usize,
    /// Paragraphs must have strictly more than this many words.
    #[serde(default = "default_min_words")]
    pub min_paragraph_words: usize,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn bool_true()         -> bool   { true }
fn default_base_url()  -> String { "https://en.wikipedia.org/wiki/".to_string() }
fn default_min_chars() -> usize  { 30 }
fn default_min_words() -> usize  { 10 }
fn default_timeout()   -> u64    { 30 }

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            enabled: bool_true(),
            base_url: default_base_url(),
            min_paragraph_chars: default_min_chars(),
            min_paragraph_words: default_min_words(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Resolution order: explicit `path`, then MUTAPREP_CONFIG, then
    /// `mutaprep.toml`. Only the implicit default may be absent, in which
    /// case built-in defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match explicit {
            Some(p) => {
                if !p.exists() {
                    return Err(CorpusError::Config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                Self::from_file(&p)
            }
            None => {
                let p = Path::new(DEFAULT_CONFIG_FILE);
                if p.exists() {
                    Self::from_file(p)
                } else {
                    tracing::info!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn input_path(&self, name: &str) -> PathBuf {
        self.paths.data_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.paths.data_dir, PathBuf::from("data"));
        assert_eq!(config.inputs.train_text, "training_text");
        assert_eq!(config.references.min_paragraph_chars, 30);
        assert_eq!(config.references.min_paragraph_words, 10);
        assert!(config.references.enabled);
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
            [paths]
            generated_dir = "/tmp/artifacts"

            [references]
            enabled = false
        "#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.paths.generated_dir, PathBuf::from("/tmp/artifacts"));
        assert_eq!(config.paths.data_dir, PathBuf::from("data"));
        assert!(!config.references.enabled);
        assert_eq!(config.references.base_url, "https://en.wikipedia.org/wiki/");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = Config::from_toml("[paths\ndata_dir = 3").unwrap_err();
        assert!(matches!(err, CorpusError::ConfigParse(_)));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, CorpusError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mutaprep.toml");
        std::fs::write(&path, "[inputs]\ntest_text = \"stage2_test_text\"\n").unwrap();
        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.inputs.test_text, "stage2_test_text");
        assert_eq!(config.inputs.all()[2], "stage2_test_text");
    }
}
