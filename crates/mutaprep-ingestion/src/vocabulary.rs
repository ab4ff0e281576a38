//! Gene and variation vocabularies built from the labelled datasets.

use std::collections::{BTreeSet, HashSet};

use mutaprep_common::Record;

use crate::normalise::is_mutation;

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Gene symbols; never classified as mutations.
    pub genes: HashSet<String>,
    pub variations: HashSet<String>,
}

impl Vocabulary {
    pub fn from_datasets(datasets: &[&[Record]]) -> Self {
        let mut vocabulary = Self::default();
        for record in datasets.iter().flat_map(|d| d.iter()) {
            vocabulary.genes.insert(record.gene.clone());
            vocabulary.variations.insert(record.variation.clone());
        }
        vocabulary
    }

    /// Genes in a stable order, for reproducible reference fetching.
    pub fn sorted_genes(&self) -> Vec<String> {
        let mut genes: Vec<String> = self.genes.iter().cloned().collect();
        genes.sort();
        genes
    }

    /// Variations the mutation classifier does not recognise, trimmed,
    /// sorted and de-duplicated.
    pub fn undetected_variations(&self) -> Vec<String> {
        self.variations
            .iter()
            .filter(|v| !is_mutation(v, &self.genes))
            .map(|v| v.trim().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_train_and_test() {
        let train = vec![
            Record::new(0, "", "BRAF", "V600E", Some(7)),
            Record::new(1, "", "KRAS", "G12D", Some(2)),
        ];
        let test = vec![Record::new(0, "", "BRAF", "Amplification", None)];
        let vocab = Vocabulary::from_datasets(&[&train[..], &test[..]]);
        assert_eq!(vocab.sorted_genes(), vec!["BRAF", "KRAS"]);
        assert_eq!(vocab.variations.len(), 3);
    }

    #[test]
    fn test_undetected_variations() {
        let train = vec![
            Record::new(0, "", "BRAF", "V600E", Some(7)),
            Record::new(1, "", "ALK", "Fusions", Some(2)),
            Record::new(2, "", "ERBB2", "Amplification", Some(2)),
            Record::new(3, "", "TP53", "TP53", Some(1)),
        ];
        let vocab = Vocabulary::from_datasets(&[&train[..]]);
        assert_eq!(vocab.undetected_variations(), vec!["Amplification", "Fusions", "TP53"]);
    }
}
