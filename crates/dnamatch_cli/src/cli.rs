//! CLI argument parsing with clap derive.

use anyhow::Context as _;
use clap::{
    Parser,
    ValueEnum,
};
use dnamatch::{
    Algorithm,
    HashParams,
};

/// Find every occurrence of a DNA pattern in a sequence
#[derive(Debug, Parser)]
#[command(name = "dnamatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Sequence to search, made of A, T, G, and C in any case
    #[arg(short, long, required_unless_present = "interactive")]
    pub sequence: Option<String>,

    /// Pattern to search for, made of A, T, G, and C in any case
    #[arg(short, long, required_unless_present = "interactive")]
    pub pattern: Option<String>,

    /// Matching algorithm to run
    #[arg(short, long, value_enum, default_value = "all")]
    pub algorithm: AlgorithmChoice,

    /// Base of the Rabin-Karp rolling hash
    #[arg(long, env = "DNAMATCH_BASE", default_value_t = HashParams::DEFAULT_BASE)]
    pub base: u32,

    /// Modulus of the Rabin-Karp rolling hash
    #[arg(long, env = "DNAMATCH_MODULUS", default_value_t = HashParams::DEFAULT_MODULUS)]
    pub modulus: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Prompt for the sequence and pattern, then choose algorithms from a menu
    #[arg(short, long, conflicts_with_all = ["sequence", "pattern"])]
    pub interactive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn hash_params(&self) -> anyhow::Result<HashParams> {
        HashParams::new(self.base, self.modulus).context("invalid Rabin-Karp parameters")
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AlgorithmChoice {
    Naive,
    RabinKarp,
    Kmp,
    All,
}

impl AlgorithmChoice {
    #[must_use]
    pub fn resolve(self, params: HashParams) -> Vec<Algorithm> {
        match self {
            Self::Naive => vec![Algorithm::Naive],
            Self::RabinKarp => vec![Algorithm::RabinKarp(params)],
            Self::Kmp => vec![Algorithm::Kmp],
            Self::All => vec![
                Algorithm::Naive,
                Algorithm::RabinKarp(params),
                Algorithm::Kmp,
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
