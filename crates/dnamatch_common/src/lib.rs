#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

mod error;
mod kmp;
mod lps;
mod matcher;
mod naive;
mod parsing;
mod rabin_karp;
mod sequence;

pub use error::{
    Error,
    Reason,
    SearchError,
};
pub use kmp::Kmp;
pub use lps::lps_table;
pub use matcher::{
    Algorithm,
    Match,
    Matcher,
};
pub use naive::Naive;
#[doc(hidden)]
pub use parsing::dna_sequence;
pub use rabin_karp::{
    HashParams,
    RabinKarp,
};
pub use sequence::{
    Sequence,
    StaticSequence,
};
