//! Summary statistics over the train and test sets.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use mutaprep_common::Record;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassCount {
    /// `None` counts unlabelled records.
    pub class: Option<u32>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub train_samples: usize,
    pub test_samples: usize,
    /// Training class histogram, ordered by class with unlabelled first.
    pub classes: Vec<ClassCount>,
    pub train_genes: usize,
    pub test_genes: usize,
    /// Distinct genes across both sets.
    pub all_genes: usize,
}

/// Count occurrences of each element, ordered by key.
pub fn group_count<K: Ord, I: IntoIterator<Item = K>>(elements: I) -> BTreeMap<K, usize> {
    let mut groups = BTreeMap::new();
    for element in elements {
        *groups.entry(element).or_insert(0) += 1;
    }
    groups
}

impl CorpusStats {
    pub fn compute(train: &[Record], test: &[Record]) -> Self {
        let classes = group_count(train.iter().map(|r| r.class))
            .into_iter()
            .map(|(class, count)| ClassCount { class, count })
            .collect();

        let train_genes: HashSet<&str> = train.iter().map(|r| r.gene.as_str()).collect();
        let test_genes: HashSet<&str> = test.iter().map(|r| r.gene.as_str()).collect();

        Self {
            train_samples: train.len(),
            test_samples: test.len(),
            classes,
            train_genes: train_genes.len(),
            test_genes: test_genes.len(),
            all_genes: train_genes.union(&test_genes).count(),
        }
    }
}

impl fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} samples in the training set", self.train_samples)?;
        writeln!(f, "{} samples in the test set", self.test_samples)?;
        let histogram: Vec<String> = self
            .classes
            .iter()
            .map(|c| match c.class {
                Some(class) => format!("{class}:{}", c.count),
                None => format!("None:{}", c.count),
            })
            .collect();
        writeln!(f, "{} different classes: {}", self.classes.len(), histogram.join(", "))?;
        writeln!(f, "{} genes in training set", self.train_genes)?;
        writeln!(f, "{} genes in test set", self.test_genes)?;
        write!(f, "{} genes in test and train set", self.all_genes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sets() -> (Vec<Record>, Vec<Record>) {
        let train = vec![
            Record::new(0, "", "BRAF", "V600E", Some(7)),
            Record::new(1, "", "KRAS", "G12D", Some(2)),
            Record::new(2, "", "KRAS", "G13D", Some(7)),
        ];
        let test = vec![
            Record::new(0, "", "KRAS", "Q61H", None),
            Record::new(1, "", "EGFR", "L858R", None),
        ];
        (train, test)
    }

    #[test]
    fn test_group_count() {
        let groups = group_count(vec!["b", "a", "b"]);
        assert_eq!(groups.into_iter().collect::<Vec<_>>(), vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn test_compute() {
        let (train, test) = sets();
        let stats = CorpusStats::compute(&train, &test);
        assert_eq!(stats.train_samples, 3);
        assert_eq!(stats.test_samples, 2);
        assert_eq!(
            stats.classes,
            vec![
                ClassCount { class: Some(2), count: 1 },
                ClassCount { class: Some(7), count: 2 },
            ]
        );
        assert_eq!((stats.train_genes, stats.test_genes, stats.all_genes), (2, 2, 3));
    }

    #[test]
    fn test_display() {
        let (train, test) = sets();
        let text = CorpusStats::compute(&train, &test).to_string();
        assert_eq!(
            text,
            "3 samples in the training set\n\
             2 samples in the test set\n\
             2 different classes: 2:1, 7:2\n\
             2 genes in training set\n\
             2 genes in test set\n\
             3 genes in test and train set"
        );
    }

    #[test]
    fn test_unlabelled_class_sorts_first() {
        let train = vec![
            Record::new(0, "", "BRAF", "V600E", Some(1)),
            Record::new(1, "", "BRAF", "V600K", None),
        ];
        let stats = CorpusStats::compute(&train, &[]);
        assert_eq!(stats.classes[0].class, None);
    }

    #[test]
    fn test_serializes_to_json() {
        let (train, test) = sets();
        let json = serde_json::to_value(CorpusStats::compute(&train, &test)).unwrap();
        assert_eq!(json["all_genes"], 3);
        assert_eq!(json["classes"][0]["class"], 2);
    }
}
