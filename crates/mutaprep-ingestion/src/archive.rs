//! Extraction of the zipped raw inputs.

use std::fs::File;
use std::path::Path;

use mutaprep_common::Result;
use tracing::{debug, info};

/// For every input `name` missing from `data_dir`, extract
/// `<archive_dir>/<name>.zip` into `data_dir`. Returns the names extracted.
pub fn extract_archives(archive_dir: &Path, data_dir: &Path, names: &[&str]) -> Result<Vec<String>> {
    std::fs::create_dir_all(data_dir)?;
    let mut extracted = Vec::new();
    for name in names {
        if data_dir.join(name).exists() {
            debug!(input = name, "Input already extracted");
            continue;
        }
        let archive_path = archive_dir.join(format!("{name}.zip"));
        info!(archive = %archive_path.display(), "Extracting input archive");
        let mut archive = zip::ZipArchive::new(File::open(&archive_path)?)?;
        archive.extract(data_dir)?;
        extracted.push(name.to_string());
    }
    Ok(extracted)
}
