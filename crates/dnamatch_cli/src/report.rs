//! Renders search results for people (text) and tools (json).

use dnamatch::{
    Algorithm,
    Match,
    Sequence,
};
use serde::Serialize;
use std::fmt::{
    self,
    Display,
    Formatter,
};

const RULE: &str = "=======================================================";

/// The outcome of one algorithm run over a sequence and pattern.
pub struct Report<'a> {
    algorithm: Algorithm,
    sequence: &'a Sequence,
    pattern: &'a Sequence,
    matches: Vec<Match<'a>>,
}

impl<'a> Report<'a> {
    pub fn new(
        algorithm: Algorithm,
        sequence: &'a Sequence,
        pattern: &'a Sequence,
        matches: Vec<Match<'a>>,
    ) -> Self {
        Self {
            algorithm,
            sequence,
            pattern,
            matches,
        }
    }

    pub fn to_json(&self) -> JsonReport {
        JsonReport {
            algorithm: self.algorithm.name(),
            complexity: self.algorithm.complexity(),
            sequence: self.sequence.to_string(),
            pattern: self.pattern.to_string(),
            matches: self
                .matches
                .iter()
                .map(|x| JsonMatch {
                    start: x.start(),
                    end: x.end(),
                })
                .collect(),
        }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "               Algorithm: {}", self.algorithm.name())?;
        writeln!(f, "{RULE}")?;
        if self.matches.is_empty() {
            return writeln!(f, "No matching subsequences found.");
        }

        writeln!(f, "DNA Sequence:              {}", self.sequence)?;
        writeln!(f, "Pattern:                   {}", self.pattern)?;
        writeln!(f)?;
        writeln!(f, "Number of occurrences:     {}", self.matches.len())?;
        for (i, found) in self.matches.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "Instance {}:", i + 1)?;
            writeln!(f, "Starting Index:            {}", found.start())?;
            writeln!(f, "Ending Index:              {}", found.end())?;
        }
        writeln!(f)?;
        writeln!(f, "Time Complexity:           {}", self.algorithm.complexity())?;
        writeln!(f, "{RULE}")
    }
}

#[derive(Debug, Serialize)]
pub struct JsonReport {
    algorithm: &'static str,
    complexity: &'static str,
    sequence: String,
    pattern: String,
    matches: Vec<JsonMatch>,
}

#[derive(Debug, Serialize)]
struct JsonMatch {
    start: usize,
    end: usize,
}
