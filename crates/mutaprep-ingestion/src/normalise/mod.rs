//! Text normalisation passes.
//!
//! Three rewrites are applied, strictly in this order:
//! - `text::normalize`: citation/figure/table removal and symbol padding
//! - `mutation::rewrite_mutations`: mutation tokens → marker symbols
//! - `number::rewrite_numbers`: numeric tokens → bucket symbols
//!
//! Mutation splitting must precede number encoding so that digits inside
//! mutations are not captured as numbers.

pub mod mutation;
pub mod number;
pub mod text;

pub use mutation::{is_mutation, rewrite_mutations, split_mutation};
pub use number::{encode_number, rewrite_numbers};
pub use text::normalize;
