//! Raw dataset loader.
//!
//! A dataset is split across two files sharing a header line and row order:
//!
//! ```text
//! training_text                     training_variants
//! ID,Text                           ID,Gene,Variation,Class
//! 0||Cyclin-dependent kinases ...   0,FAM58A,Truncating Mutations,1
//! ```
//!
//! The class column exists only when the variants header has four fields.

use std::fs;
use std::path::Path;

use mutaprep_common::{CorpusError, Record, Result};
use tracing::info;

const TEXT_SEPARATOR: &str = "||";
const VARIANT_SEPARATOR: char = ',';

/// Load and join a text file and a variants file into records.
pub fn load_raw_dataset(text_path: &Path, variants_path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(text_path)?;
    let variants = fs::read_to_string(variants_path)?;
    let records = parse_raw_dataset(
        &text,
        &variants,
        &text_path.display().to_string(),
        &variants_path.display().to_string(),
    )?;
    info!(
        text = %text_path.display(),
        n_records = records.len(),
        "Loaded raw dataset"
    );
    Ok(records)
}

/// Same as [`load_raw_dataset`] over in-memory contents. `text_name` and
/// `variants_name` only label errors.
pub fn parse_raw_dataset(
    text: &str,
    variants: &str,
    text_name: &str,
    variants_name: &str,
) -> Result<Vec<Record>> {
    let mut text_lines = text.lines();
    let mut variant_lines = variants.lines();

    // Headers
    text_lines.next();
    let labelled = variant_lines
        .next()
        .map(|h| h.split(VARIANT_SEPARATOR).count() == 4)
        .unwrap_or(false);

    let text_lines: Vec<&str> = text_lines.collect();
    let variant_lines: Vec<&str> = variant_lines.collect();
    if text_lines.len() != variant_lines.len() {
        return Err(CorpusError::CountMismatch {
            text_rows: text_lines.len(),
            variant_rows: variant_lines.len(),
        });
    }

    let mut records = Vec::with_capacity(text_lines.len());
    for (text_line, variant_line) in text_lines.into_iter().zip(variant_lines) {
        let text_fields: Vec<&str> = text_line.split(TEXT_SEPARATOR).collect();
        if text_fields.len() != 2 {
            return Err(malformed(text_name, format!("expected `id||text` in line: {text_line}")));
        }
        let variant_fields: Vec<&str> = variant_line.split(VARIANT_SEPARATOR).collect();
        if !(3..=4).contains(&variant_fields.len()) {
            return Err(malformed(
                variants_name,
                format!("expected 3 or 4 fields in line: {variant_line}"),
            ));
        }
        if text_fields[0] != variant_fields[0] {
            return Err(CorpusError::IdMismatch {
                text_id: text_fields[0].to_string(),
                variant_id: variant_fields[0].to_string(),
            });
        }

        let id = text_fields[0]
            .trim()
            .parse::<u64>()
            .map_err(|e| malformed(text_name, format!("invalid id '{}': {e}", text_fields[0])))?;
        let class = if labelled {
            let raw = variant_fields.get(3).copied().unwrap_or("");
            let class = raw
                .trim()
                .parse::<u32>()
                .map_err(|e| malformed(variants_name, format!("invalid class '{raw}' for id {id}: {e}")))?;
            Some(class)
        } else {
            None
        };

        records.push(Record::new(
            id,
            text_fields[1].trim(),
            variant_fields[1].trim(),
            variant_fields[2].trim(),
            class,
        ));
    }
    Ok(records)
}

fn malformed(file: &str, reason: String) -> CorpusError {
    CorpusError::MalformedInput { file: file.to_string(), reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "ID,Text\n0|| Cyclin kinases regulate \n1||BRAF V600E in melanoma\n";
    const VARIANTS: &str = "ID,Gene,Variation,Class\n0,CDK4,Truncating Mutations,1\n1,BRAF,V600E,7\n";

    fn parse(text: &str, variants: &str) -> Result<Vec<Record>> {
        parse_raw_dataset(text, variants, "text", "variants")
    }

    #[test]
    fn test_labelled_dataset() {
        let records = parse(TEXT, VARIANTS).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], Record::new(0, "Cyclin kinases regulate", "CDK4", "Truncating Mutations", Some(1)));
        assert_eq!(records[1].class, Some(7));
    }

    #[test]
    fn test_unlabelled_dataset() {
        let variants = "ID,Gene,Variation\n0,CDK4,Truncating Mutations\n1,BRAF,V600E\n";
        let records = parse(TEXT, variants).unwrap();
        assert!(records.iter().all(|r| r.class.is_none()));
    }

    #[test]
    fn test_id_mismatch() {
        let variants = "ID,Gene,Variation,Class\n0,CDK4,Truncating Mutations,1\n2,BRAF,V600E,7\n";
        let err = parse(TEXT, variants).unwrap_err();
        assert!(matches!(err, CorpusError::IdMismatch { ref text_id, ref variant_id } if text_id == "1" && variant_id == "2"));
    }

    #[test]
    fn test_count_mismatch() {
        let variants = "ID,Gene,Variation,Class\n0,CDK4,Truncating Mutations,1\n";
        let err = parse(TEXT, variants).unwrap_err();
        assert!(matches!(err, CorpusError::CountMismatch { text_rows: 2, variant_rows: 1 }));
    }

    #[test]
    fn test_text_line_without_separator() {
        let text = "ID,Text\n0 no separator\n";
        let variants = "ID,Gene,Variation\n0,CDK4,Amp\n";
        assert!(matches!(parse(text, variants), Err(CorpusError::MalformedInput { .. })));
    }

    #[test]
    fn test_too_many_variant_fields() {
        let text = "ID,Text\n0||text\n";
        let variants = "ID,Gene,Variation,Class\n0,CDK4,Amp,1,extra\n";
        assert!(matches!(parse(text, variants), Err(CorpusError::MalformedInput { .. })));
    }

    #[test]
    fn test_unparsable_class() {
        let text = "ID,Text\n0||text\n";
        let variants = "ID,Gene,Variation,Class\n0,CDK4,Amp,high\n";
        assert!(matches!(parse(text, variants), Err(CorpusError::MalformedInput { .. })));
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let text_path = dir.path().join("training_text");
        let variants_path = dir.path().join("training_variants");
        fs::write(&text_path, TEXT).unwrap();
        fs::write(&variants_path, VARIANTS).unwrap();
        let records = load_raw_dataset(&text_path, &variants_path).unwrap();
        assert_eq!(records[1].variation, "V600E");
    }
}
