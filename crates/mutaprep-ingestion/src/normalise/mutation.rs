//! Mutation token detection and symbolic splitting.
//!
//! Free-text tokens that look like HGVS-style variant notation ("R132H",
//! "V600E", "exon19_del") are rewritten into a coarse symbol alphabet
//! (`>V >6 >0 >0 >E`) so that structurally similar mutations share symbols.
//!
//! # Example
//! ```
//! use std::collections::HashSet;
//! use mutaprep_ingestion::normalise::mutation::{is_mutation, split_mutation};
//!
//! let genes: HashSet<String> = ["TP53".to_string()].into_iter().collect();
//! assert!(is_mutation("R132H", &genes));
//! assert!(!is_mutation("TP53", &genes));
//! assert_eq!(split_mutation("V600E"), vec![">V", ">6", ">0", ">0", ">E"]);
//! ```

use std::collections::HashSet;

/// Prefix carried by every emitted symbol.
pub const MARKER: char = '>';

/// Effect keywords carved out as whole symbols, in replacement order.
pub const MUTATION_KEYWORDS: &[&str] = &[
    "del", "ins", "dup", "trunc", "splice", "fs", "null", "Fusion", "#", "+",
];

/// Character-class features of a candidate token (ASCII classes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenFeatures {
    pub has_underscore: bool,
    pub has_hyphen: bool,
    pub has_digit: bool,
    /// More than two digits.
    pub has_three_digits: bool,
    pub has_upper: bool,
    /// More than one uppercase letter.
    pub has_two_upper: bool,
    pub has_lower: bool,
    /// A character that is neither an ASCII letter nor an ASCII digit.
    pub has_symbol: bool,
}

impl TokenFeatures {
    pub fn of(token: &str) -> Self {
        let mut digits = 0usize;
        let mut uppers = 0usize;
        let mut f = TokenFeatures::default();
        for ch in token.chars() {
            match ch {
                '_' => f.has_underscore = true,
                '-' => f.has_hyphen = true,
                _ => {}
            }
            if ch.is_ascii_digit() { digits += 1; }
            if ch.is_ascii_uppercase() { uppers += 1; }
            if ch.is_ascii_lowercase() { f.has_lower = true; }
            if !ch.is_ascii_alphanumeric() { f.has_symbol = true; }
        }
        f.has_digit = digits > 0;
        f.has_three_digits = digits > 2;
        f.has_upper = uppers > 0;
        f.has_two_upper = uppers > 1;
        f
    }
}

type Rule = fn(&TokenFeatures) -> bool;

/// A token is a mutation if any rule fires. The table is tuned to the
/// training corpus; its misfires are part of what the downstream model saw.
const MUTATION_RULES: &[(&str, Rule)] = &[
    ("underscore",          |f: &TokenFeatures| f.has_underscore),
    ("digit+two_upper",     |f: &TokenFeatures| f.has_digit && f.has_two_upper),
    ("three_digits+upper",  |f: &TokenFeatures| f.has_three_digits && f.has_upper),
    ("digit+upper+symbol",  |f: &TokenFeatures| f.has_digit && f.has_upper && f.has_symbol),
    ("digit+lower",         |f: &TokenFeatures| f.has_digit && f.has_lower),
    ("hyphen+two_upper",    |f: &TokenFeatures| f.has_hyphen && f.has_two_upper),
    ("lower+two_upper",     |f: &TokenFeatures| f.has_lower && f.has_two_upper),
];

/// Name of the first rule that classifies `token` as a mutation, if any.
pub fn matching_rule(token: &str, genes: &HashSet<String>) -> Option<&'static str> {
    let token = token.trim();
    if token.len() < 3 || genes.contains(token) {
        return None;
    }
    let features = TokenFeatures::of(token);
    MUTATION_RULES
        .iter()
        .find(|(_, rule)| rule(&features))
        .map(|(name, _)| *name)
}

/// Whether a whitespace-delimited token denotes a mutation.
/// Gene names and tokens shorter than 3 bytes never do.
pub fn is_mutation(token: &str, genes: &HashSet<String>) -> bool {
    matching_rule(token, genes).is_some()
}

/// Split a mutation into marker-prefixed symbols.
///
/// Keywords (`del`, `ins`, …) become single symbols; every other
/// non-space character becomes its own symbol. A marker already present in
/// the token swallows the characters up to the next space.
pub fn split_mutation(token: &str) -> Vec<String> {
    let mut word = token.trim().to_string();
    for keyword in MUTATION_KEYWORDS {
        word = word.replace(keyword, &format!(" {MARKER}{keyword} "));
    }

    let mut symbols = Vec::new();
    let mut chars = word.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == MARKER {
            let mut symbol = String::from(MARKER);
            while let Some(&next) = chars.peek() {
                if next == ' ' {
                    break;
                }
                symbol.push(next);
                chars.next();
            }
            symbols.push(symbol);
        } else if ch != ' ' {
            symbols.push(format!("{MARKER}{ch}"));
        }
    }
    symbols
}

/// Token-level rewrite pass: every mutation token is replaced by its
/// symbols, everything else passes through. Tokens are split on ASCII
/// whitespace only and re-joined with single spaces.
pub fn rewrite_mutations(text: &str, genes: &HashSet<String>) -> String {
    let mut parsed: Vec<String> = Vec::new();
    for word in text.split_ascii_whitespace() {
        if is_mutation(word, genes) {
            parsed.extend(split_mutation(word));
        } else {
            parsed.push(word.to_string());
        }
    }
    parsed.join(" ")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn genes(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_tokens_never_mutations() {
        let g = genes(&[]);
        for t in ["", "A1", "_", "aB", "R1"] {
            assert!(!is_mutation(t, &g), "{t} should not be a mutation");
        }
    }

    #[test]
    fn test_classic_missense() {
        let g = genes(&[]);
        assert!(is_mutation("R132H", &g));
        assert!(is_mutation("V600E", &g));
        assert!(is_mutation("G12D", &g));
    }

    #[test]
    fn test_gene_names_excluded() {
        let g = genes(&["TP53", "BRCA1"]);
        assert!(!is_mutation("TP53", &g));
        assert!(!is_mutation("BRCA1", &g));
        // Not in the vocabulary, so the heuristic applies
        assert!(is_mutation("TP53", &genes(&[])));
    }

    #[test]
    fn test_plain_words_rejected() {
        let g = genes(&[]);
        assert!(!is_mutation("word", &g));
        assert!(!is_mutation("KRAS", &g));
        assert!(!is_mutation("2001", &g));
        assert!(!is_mutation("2.5", &g));
    }

    #[test]
    fn test_rule_table() {
        let g = genes(&[]);
        assert_eq!(matching_rule("exon19_del", &g), Some("underscore"));
        assert_eq!(matching_rule("G12D", &g), Some("digit+two_upper"));
        assert_eq!(matching_rule("E545K", &g), Some("digit+two_upper"));
        assert_eq!(matching_rule("p.R175", &g), Some("three_digits+upper"));
        assert_eq!(matching_rule("1-Q", &g), Some("digit+upper+symbol"));
        assert_eq!(matching_rule("exon19", &g), Some("digit+lower"));
        assert_eq!(matching_rule("BCR-ABL", &g), Some("hyphen+two_upper"));
        assert_eq!(matching_rule("MeCP", &g), Some("lower+two_upper"));
        assert_eq!(matching_rule("Tumor", &g), None);
    }

    #[test]
    fn test_known_false_positives_kept() {
        // Ordinary mixed-case words and units fire too
        let g = genes(&[]);
        assert!(is_mutation("mRNAs", &g));
        assert!(is_mutation("20mg", &g));
    }

    #[test]
    fn test_split_missense() {
        assert_eq!(split_mutation("V600E"), vec![">V", ">6", ">0", ">0", ">E"]);
    }

    #[test]
    fn test_split_keeps_keywords_whole() {
        assert_eq!(
            split_mutation("exon19_del"),
            vec![">e", ">x", ">o", ">n", ">1", ">9", ">_", ">del"]
        );
        assert_eq!(split_mutation("delins"), vec![">del", ">ins"]);
        assert_eq!(split_mutation("Q61fs"), vec![">Q", ">6", ">1", ">fs"]);
        assert_eq!(split_mutation("BCR-ABL1+"), vec![">B", ">C", ">R", ">-", ">A", ">B", ">L", ">1", ">+"]);
    }

    #[test]
    fn test_split_existing_marker_swallows_rest() {
        assert_eq!(split_mutation("c.35G>A"), vec![">c", ">.", ">3", ">5", ">G", ">A"]);
    }

    #[test]
    fn test_rewrite_mutations() {
        let g = genes(&["BRAF"]);
        assert_eq!(
            rewrite_mutations("BRAF V600E is common", &g),
            "BRAF >V >6 >0 >0 >E is common"
        );
    }

    #[test]
    fn test_rewrite_splits_on_ascii_whitespace_only() {
        let g = genes(&[]);
        assert_eq!(
            rewrite_mutations("V600E\u{a0}mutant", &g),
            ">V >6 >0 >0 >E >\u{a0} >m >u >t >a >n >t"
        );
    }

    #[test]
    fn test_rewrite_leaves_numbers_alone() {
        let g = genes(&[]);
        assert_eq!(rewrite_mutations("in 2.5 % of 1,000", &g), "in 2.5 % of 1,000");
    }
}
