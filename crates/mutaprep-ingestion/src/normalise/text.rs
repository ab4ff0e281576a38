//! Free-text cleaning.
//!
//! Strips citation, figure and table noise from literature snippets and pads
//! punctuation with spaces so that a plain whitespace split yields the tokens
//! the mutation and number passes expect.
//!
//! Passes run in a fixed order: citations → figures/tables → empty
//! parentheses → ellipses → symbol padding → whitespace collapse. Removal has
//! to happen before padding, otherwise `[12, 3]` would already be split into
//! lone `[` / `]` tokens that the citation patterns no longer match.
//!
//! All character classes are ASCII (`(?-u)`).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `[12, 3]`
    static ref RE_CITATION_BRACKET_DIGITS: Regex =
        Regex::new(r"(?-u)\s*\[[\d\s,]+\]\s*").unwrap();
    /// `(Smith et al. 2001; Jones 1999)`
    static ref RE_CITATION_PAREN_AUTHOR_YEAR: Regex =
        Regex::new(r"(?-u)\s*\(([a-zA-Z\s\.,]+\d{2,4}\s*;?)+\s*\)\s*").unwrap();
    /// `[Smith et al. 2001]`
    static ref RE_CITATION_BRACKET_AUTHOR_YEAR: Regex =
        Regex::new(r"(?-u)\s*\[([a-zA-Z\s\.,]+\d{2,4}\s*;?)+\s*\]\s*").unwrap();
    /// `(12, 3)`
    static ref RE_CITATION_PAREN_DIGITS: Regex =
        Regex::new(r"(?-u)\s*\([\d,\s]+\)\s*").unwrap();
    /// `Smith et al.,`
    static ref RE_CITATION_ET_AL: Regex =
        Regex::new(r"(?-u)\s*(\w+ et al\.,?)+").unwrap();

    static ref RE_FIGURES: Regex =
        Regex::new(r"(?-u)\s*(Fig(ure)?\.? [\w,]+)\s*").unwrap();
    static ref RE_TABLES: Regex =
        Regex::new(r"(?-u)\s*(Table\.? [\w,]+)\s*").unwrap();
    static ref RE_EMPTY_PARENTHESES: Regex =
        Regex::new(r"(?-u)\(\s*(and)?\s*\)").unwrap();
    static ref RE_WHITE_SPACES: Regex =
        Regex::new(r"(?-u)\s+").unwrap();
}

/// One entry of the padding list.
enum Padded {
    /// A literal symbol, padded wherever it occurs.
    Symbol(&'static str),
    /// Any character from U+2000..=U+2FFF (en/em dashes, curly quotes, …),
    /// i.e. every character whose UTF-8 encoding starts with byte 0xE2.
    GeneralPunctuation,
}

/// Padding order matters: `, ` and `. ` are only split off when followed by
/// a space, so `2.5` and `1,000` survive. `-` is listed twice.
const PADDED: &[Padded] = &[
    Padded::Symbol("("),
    Padded::Symbol(")"),
    Padded::Symbol("/"),
    Padded::Symbol("-"),
    Padded::GeneralPunctuation,
    Padded::Symbol("'"),
    Padded::Symbol("\""),
    Padded::Symbol("%"),
    Padded::Symbol(":"),
    Padded::Symbol("?"),
    Padded::Symbol(", "),
    Padded::Symbol(". "),
    Padded::Symbol("<"),
    Padded::Symbol(">"),
    Padded::Symbol("="),
    Padded::Symbol("-"),
    Padded::Symbol(";"),
    Padded::Symbol("!"),
    Padded::Symbol("°C"),
    Padded::Symbol("*"),
];

/// Clean a text: removes bibliographic references, figure and table
/// references, empty parentheses, and pads symbols with spaces.
pub fn normalize(text: &str) -> String {
    // Bibliographic references
    let text = RE_CITATION_BRACKET_DIGITS.replace_all(text, " ");
    let text = RE_CITATION_PAREN_AUTHOR_YEAR.replace_all(&text, " ");
    let text = RE_CITATION_BRACKET_AUTHOR_YEAR.replace_all(&text, " ");
    let text = RE_CITATION_PAREN_DIGITS.replace_all(&text, " ");
    let text = RE_CITATION_ET_AL.replace_all(&text, " ");

    // Figures and tables collapse into their neighbours
    let text = RE_FIGURES.replace_all(&text, "");
    let text = RE_TABLES.replace_all(&text, "");

    let text = RE_EMPTY_PARENTHESES.replace_all(&text, "");

    let mut text = text.replace("...", ".");
    for padded in PADDED {
        text = match padded {
            Padded::Symbol(symbol) => text.replace(symbol, &format!(" {symbol} ")),
            Padded::GeneralPunctuation => pad_general_punctuation(&text),
        };
    }

    RE_WHITE_SPACES.replace_all(&text, " ").into_owned()
}

fn is_general_punctuation(ch: char) -> bool {
    ('\u{2000}'..='\u{2FFF}').contains(&ch)
}

fn pad_general_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if is_general_punctuation(ch) {
            out.push(' ');
            out.push(ch);
            out.push(' ');
        } else {
            out.push(ch);
        }
    }
    out
}
