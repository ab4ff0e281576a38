//! Numeric token bucketing.
//!
//! Numbers are replaced by one of ten ordinal symbols so that "2.5" and
//! "3.1" share a token. Buckets are half-open `[lower, upper)`:
//!
//! | Range             | Symbol         |
//! |-------------------|----------------|
//! | < 0.001           | `>number_0001` |
//! | [0.001, 0.01)     | `>number_001`  |
//! | [0.01, 0.1)       | `>number_01`   |
//! | [0.1, 1.0)        | `>number_1`    |
//! | [1.0, 10.0)       | `>number_10`   |
//! | [10.0, 25.0)      | `>number_25`   |
//! | [25.0, 50.0)      | `>number_50`   |
//! | [50.0, 75.0)      | `>number_75`   |
//! | [75.0, 100.0)     | `>number_100`  |
//! | >= 100.0 (or NaN) | `>number_1000` |

/// Exclusive upper bound → symbol, ascending.
const NUMBER_BUCKETS: &[(f64, &str)] = &[
    (0.001, ">number_0001"),
    (0.01,  ">number_001"),
    (0.1,   ">number_01"),
    (1.0,   ">number_1"),
    (10.0,  ">number_10"),
    (25.0,  ">number_25"),
    (50.0,  ">number_50"),
    (75.0,  ">number_75"),
    (100.0, ">number_100"),
];

/// Open-ended top bucket.
pub const TOP_BUCKET: &str = ">number_1000";

/// Encode a number as its bucket symbol.
pub fn encode_number(value: f64) -> &'static str {
    NUMBER_BUCKETS
        .iter()
        .find(|(upper, _)| value < *upper)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(TOP_BUCKET)
}

/// Parse a whole token as a floating-point literal.
pub fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}

/// Token-level rewrite pass: numeric tokens become bucket symbols.
/// Tokens are split on ASCII whitespace only.
pub fn rewrite_numbers(text: &str) -> String {
    text.split_ascii_whitespace()
        .map(|word| match parse_number(word) {
            Some(number) => encode_number(number),
            None => word,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
