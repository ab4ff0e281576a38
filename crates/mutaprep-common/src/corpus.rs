//! Corpus entry types.
//!
//! Every pipeline stage rewrites only the free-text field of an entry; the
//! labels travel untouched from the raw input to the last cached artifact.

use serde::{Deserialize, Serialize};

/// Anything whose free text is rewritten by the preparation stages.
pub trait CorpusEntry: Clone {
    /// Current free text.
    fn text(&self) -> &str;

    /// Consume the entry and return it with its text replaced.
    fn with_text(self, text: String) -> Self;
}

// ---------------------------------------------------------------------------
// Labelled record
// ---------------------------------------------------------------------------

/// One labelled literature snippet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Identifier, unique within a dataset.
    pub id: u64,
    pub text: String,
    /// Gene label, e.g. "BRAF"
    pub gene: String,
    /// Raw variation notation, e.g. "V600E"
    pub variation: String,
    /// Class label; `None` for unlabelled (test) records.
    pub class: Option<u32>,
}

impl Record {
    pub fn new(
        id: u64,
        text: impl Into<String>,
        gene: impl Into<String>,
        variation: impl Into<String>,
        class: Option<u32>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            gene: gene.into(),
            variation: variation.into(),
            class,
        }
    }
}

impl CorpusEntry for Record {
    fn text(&self) -> &str {
        &self.text
    }

    fn with_text(mut self, text: String) -> Self {
        self.text = text;
        self
    }
}

// ---------------------------------------------------------------------------
// Reference text
// ---------------------------------------------------------------------------

/// Reference article text gathered for one gene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceText {
    pub gene: String,
    pub text: String,
}

impl ReferenceText {
    pub fn new(gene: impl Into<String>, text: impl Into<String>) -> Self {
        Self { gene: gene.into(), text: text.into() }
    }
}

impl CorpusEntry for ReferenceText {
    fn text(&self) -> &str {
        &self.text
    }

    fn with_text(mut self, text: String) -> Self {
        self.text = text;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_text_keeps_labels() {
        let r = Record::new(7, "raw text", "BRAF", "V600E", Some(2));
        let r = r.with_text("clean text".to_string());
        assert_eq!(r.text(), "clean text");
        assert_eq!(r.gene, "BRAF");
        assert_eq!(r.variation, "V600E");
        assert_eq!(r.class, Some(2));
    }

    #[test]
    fn test_unlabelled_record() {
        let r = Record::new(1, "text", "TP53", "R175H", None);
        assert_eq!(r.class, None);
    }

    #[test]
    fn test_reference_with_text() {
        let entry = ReferenceText::new("KRAS", "").with_text("GTPase".to_string());
        assert_eq!(entry.gene, "KRAS");
        assert_eq!(entry.text(), "GTPase");
    }
}
