#![warn(clippy::pedantic)]

pub use dnamatch_common::{
    lps_table,
    Algorithm,
    Error,
    HashParams,
    Kmp,
    Match,
    Matcher,
    Naive,
    RabinKarp,
    Reason,
    SearchError,
    Sequence,
    StaticSequence,
};
pub use dnamatch_macros::dna;
