use chumsky::{
    error::Simple,
    primitive::{
        filter,
        filter_map,
    },
    Parser,
};

/// Parses one or more nucleotides, ignoring surrounding whitespace.
///
/// Each base is normalized to its uppercase ASCII byte.
#[must_use]
pub fn dna_sequence() -> impl Parser<char, Vec<u8>, Error = Simple<char>> {
    let whitespace = filter(|c: &char| c.is_whitespace()).repeated();
    let base = filter_map(|span, c: char| match c.to_ascii_uppercase() {
        upper @ ('A' | 'T' | 'G' | 'C') => Ok(upper as u8),
        _ => Err(Simple::custom(span, format!("'{c}' is not a nucleotide"))),
    });

    base.repeated().at_least(1).padded_by(whitespace)
}
