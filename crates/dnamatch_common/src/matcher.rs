use crate::{
    HashParams,
    Kmp,
    Naive,
    RabinKarp,
    SearchError,
};
use std::ops::RangeInclusive;

mod private {
    pub trait Sealed {}
}

pub(crate) use private::Sealed;

/// Represents an occurrence of a pattern found in a sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Match<'sequence> {
    start: usize,
    len: usize,
    sequence: &'sequence [u8],
}

impl<'sequence> Match<'sequence> {
    /// Callers guarantee `start + len <= sequence.len()` and `len > 0`.
    #[must_use]
    pub(crate) fn new(sequence: &'sequence [u8], start: usize, len: usize) -> Self {
        debug_assert!(len > 0 && start + len <= sequence.len());
        Self {
            start,
            len,
            sequence,
        }
    }

    /// The position of the first base in the occurrence, relative to the sequence.
    ///
    /// ```
    /// # use dnamatch_common::{Kmp, Matcher as _};
    /// let matcher = Kmp::new(b"TAC").unwrap();
    /// let found = matcher.find(b"GATTACA").unwrap();
    /// assert_eq!(found.start(), 3);
    /// ```
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The position of the last base in the occurrence, relative to the sequence.
    ///
    /// ```
    /// # use dnamatch_common::{Kmp, Matcher as _};
    /// let matcher = Kmp::new(b"TAC").unwrap();
    /// let found = matcher.find(b"GATTACA").unwrap();
    /// assert_eq!(found.end(), 5);
    /// ```
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len - 1
    }

    /// The inclusive range covered by the occurrence.
    #[must_use]
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start()..=self.end()
    }

    /// The matched bases, taken from the sequence.
    ///
    /// ```
    /// # use dnamatch_common::{Naive, Matcher as _};
    /// let matcher = Naive::new(b"TAC").unwrap();
    /// let found = matcher.find(b"GATTACA").unwrap();
    /// assert_eq!(found.as_bytes(), b"TAC");
    /// ```
    #[must_use]
    pub fn as_bytes(&self) -> &'sequence [u8] {
        &self.sequence[self.range()]
    }
}

/// The common interface for searching sequences with a pattern.
///
/// Every occurrence is reported in order of its start position, and occurrences may overlap.
///
/// ```
/// # use dnamatch_common::{RabinKarp, Matcher as _};
/// let matcher = RabinKarp::new(b"AA").unwrap();
/// let starts: Vec<_> = matcher.find_iter(b"AAAA").map(|x| x.start()).collect();
/// assert_eq!(starts, [0, 1, 2]);
/// ```
#[allow(clippy::len_without_is_empty)]
pub trait Matcher: Sealed {
    /// A convenience method for getting only the first occurrence.
    #[must_use]
    fn find<'sequence>(&self, sequence: &'sequence [u8]) -> Option<Match<'sequence>> {
        self.find_iter(sequence).next()
    }

    /// Collects every occurrence, in order.
    #[must_use]
    fn find_all<'sequence>(&self, sequence: &'sequence [u8]) -> Vec<Match<'sequence>> {
        self.find_iter(sequence).collect()
    }

    /// Finds all occurrences, iteratively.
    #[must_use]
    fn find_iter<'iter, 'matcher: 'iter, 'sequence: 'iter>(
        &'matcher self,
        sequence: &'sequence [u8],
    ) -> impl Iterator<Item = Match<'sequence>> + 'iter;

    /// The pattern being searched for.
    #[must_use]
    fn pattern(&self) -> &[u8];

    /// The algorithm this matcher implements.
    #[must_use]
    fn algorithm(&self) -> Algorithm;

    /// The length of the pattern, which is never zero.
    #[must_use]
    fn len(&self) -> usize {
        self.pattern().len()
    }
}

/// Selects which matcher performs a search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Algorithm {
    Naive,
    RabinKarp(HashParams),
    Kmp,
}

impl Algorithm {
    /// Every algorithm, with default hashing parameters.
    pub const ALL: [Self; 3] = [
        Self::Naive,
        Self::RabinKarp(HashParams::DEFAULT),
        Self::Kmp,
    ];

    /// A human readable name, for reporting.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Naive => "Naive Approach",
            Self::RabinKarp(_) => "Rabin-Karp Algorithm",
            Self::Kmp => "Knuth-Morris-Pratt (KMP) Algorithm",
        }
    }

    /// The asymptotic running time, for reporting.
    #[must_use]
    pub fn complexity(&self) -> &'static str {
        match self {
            Self::Naive => "O(n * m)",
            Self::RabinKarp(_) | Self::Kmp => "O(n + m)",
        }
    }

    /// Runs a single search with the selected algorithm.
    ///
    /// An empty result means the pattern does not occur; an error means the search could not be attempted.
    ///
    /// ```
    /// # use dnamatch_common::{Algorithm, SearchError};
    /// let found = Algorithm::Kmp.search(b"AAAA", b"AA").unwrap();
    /// assert_eq!(found.len(), 3);
    /// assert!(Algorithm::Naive.search(b"ATGC", b"GGGG").unwrap().is_empty());
    /// assert_eq!(Algorithm::Naive.search(b"ATGC", b"").unwrap_err(), SearchError::EmptyPattern);
    /// ```
    pub fn search<'sequence>(
        &self,
        sequence: &'sequence [u8],
        pattern: &[u8],
    ) -> Result<Vec<Match<'sequence>>, SearchError> {
        let matches = match *self {
            Self::Naive => Naive::new(pattern)?.find_all(sequence),
            Self::RabinKarp(params) => RabinKarp::with_params(pattern, params)?.find_all(sequence),
            Self::Kmp => Kmp::new(pattern)?.find_all(sequence),
        };
        tracing::debug!(
            algorithm = self.name(),
            sequence_len = sequence.len(),
            pattern_len = pattern.len(),
            matches = matches.len(),
            "search finished"
        );
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Algorithm,
        Matcher as _,
    };
    use crate::{
        HashParams,
        Kmp,
        Naive,
        RabinKarp,
        SearchError,
    };
    use proptest::prelude::*;
    use test_case::test_case;

    fn algorithms() -> [Algorithm; 5] {
        [
            Algorithm::Naive,
            Algorithm::RabinKarp(HashParams::DEFAULT),
            Algorithm::RabinKarp(HashParams::new(256, 3).unwrap()),
            Algorithm::RabinKarp(HashParams::new(4, 1).unwrap()),
            Algorithm::Kmp,
        ]
    }

    fn bounds(sequence: &[u8], pattern: &[u8], algorithm: Algorithm) -> Vec<(usize, usize)> {
        algorithm
            .search(sequence, pattern)
            .unwrap()
            .iter()
            .map(|x| (x.start(), x.end()))
            .collect()
    }

    // restarts one past every hit, so overlapping occurrences are kept
    fn oracle(sequence: &[u8], pattern: &[u8]) -> Vec<(usize, usize)> {
        let finder = memchr::memmem::Finder::new(pattern);
        let mut found = Vec::new();
        let mut offset = 0;
        while let Some(position) = sequence.get(offset..).and_then(|x| finder.find(x)) {
            let start = offset + position;
            found.push((start, start + pattern.len() - 1));
            offset = start + 1;
        }
        found
    }

    #[test_case(b"AAAA", b"AA", &[(0, 1), (1, 2), (2, 3)]; "overlapping")]
    #[test_case(b"ATGC", b"GGGG", &[]; "no match")]
    #[test_case(b"ATGC", b"ATGC", &[(0, 3)]; "exact")]
    #[test_case(b"ATG", b"ATGC", &[]; "pattern longer than sequence")]
    #[test_case(b"", b"A", &[]; "empty sequence")]
    #[test_case(b"GATTACAGATTACA", b"TACA", &[(3, 6), (10, 13)]; "repeated")]
    #[test_case(b"ATATATAT", b"ATAT", &[(0, 3), (2, 5), (4, 7)]; "periodic")]
    #[test_case(b"CCCCC", b"C", &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]; "single base")]
    #[test_case(b"atgcATGC", b"ATGC", &[(4, 7)]; "raw bytes are case sensitive")]
    fn test_known(sequence: &[u8], pattern: &[u8], expected: &[(usize, usize)]) {
        for algorithm in algorithms() {
            assert_eq!(
                bounds(sequence, pattern, algorithm),
                expected,
                "{algorithm:?}"
            );
        }
    }

    #[test]
    fn test_empty_pattern() {
        for algorithm in algorithms() {
            assert_eq!(
                algorithm.search(b"ATGC", b""),
                Err(SearchError::EmptyPattern)
            );
        }
        assert_eq!(Naive::new(b"").unwrap_err(), SearchError::EmptyPattern);
        assert_eq!(RabinKarp::new(b"").unwrap_err(), SearchError::EmptyPattern);
        assert_eq!(Kmp::new(b"").unwrap_err(), SearchError::EmptyPattern);
    }

    #[test]
    fn test_non_nucleotide_bytes() {
        let sequence = "héllo wörld, héllo".as_bytes();
        let pattern = "héllo".as_bytes();
        for algorithm in algorithms() {
            assert_eq!(
                bounds(sequence, pattern, algorithm),
                oracle(sequence, pattern)
            );
        }
        for algorithm in algorithms() {
            assert!(bounds(&[0xFF; 4], &[0xFF; 5], algorithm).is_empty());
        }
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = Algorithm::ALL
            .iter()
            .map(|x| (x.name(), x.complexity()))
            .collect();
        assert_eq!(
            labels,
            [
                ("Naive Approach", "O(n * m)"),
                ("Rabin-Karp Algorithm", "O(n + m)"),
                ("Knuth-Morris-Pratt (KMP) Algorithm", "O(n + m)"),
            ]
        );
        assert_eq!(Naive::new(b"A").unwrap().algorithm(), Algorithm::Naive);
        assert_eq!(Kmp::new(b"A").unwrap().algorithm(), Algorithm::Kmp);
        assert_eq!(
            RabinKarp::new(b"A").unwrap().algorithm(),
            Algorithm::RabinKarp(HashParams::DEFAULT)
        );
    }

    #[test]
    fn test_match_accessors() {
        let matcher = Kmp::new(b"GAT").unwrap();
        assert_eq!(matcher.len(), 3);
        assert_eq!(matcher.pattern(), b"GAT");

        let found = matcher.find(b"CCGATCC").unwrap();
        assert_eq!(found.start(), 2);
        assert_eq!(found.end(), 4);
        assert_eq!(found.range(), 2..=4);
        assert_eq!(found.as_bytes(), b"GAT");
        assert!(matcher.find(b"CCCC").is_none());
    }

    #[test]
    fn test_shared_across_threads() {
        let matcher = &Kmp::new(b"ACG").unwrap();
        let sequences = [&b"ACGACG"[..], b"TTACG", b"GGGG"];
        let counts: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = sequences
                .iter()
                .map(|&sequence| scope.spawn(move || matcher.find_iter(sequence).count()))
                .collect();
            handles.into_iter().map(|x| x.join().unwrap()).collect()
        });
        assert_eq!(counts, [2, 1, 0]);
    }

    proptest! {
        #[test]
        fn test_agreement(sequence in "[ATGC]{0,96}", pattern in "[ATGC]{1,6}") {
            let (sequence, pattern) = (sequence.as_bytes(), pattern.as_bytes());
            let expected = oracle(sequence, pattern);
            for algorithm in algorithms() {
                prop_assert_eq!(bounds(sequence, pattern, algorithm), expected.clone());
            }
        }

        #[test]
        fn test_match_validity(sequence in "[AT]{0,64}", pattern in "[AT]{1,4}") {
            let (sequence, pattern) = (sequence.as_bytes(), pattern.as_bytes());
            for algorithm in algorithms() {
                for found in algorithm.search(sequence, pattern).unwrap() {
                    prop_assert_eq!(found.end() - found.start() + 1, pattern.len());
                    prop_assert_eq!(&sequence[found.range()], pattern);
                    prop_assert_eq!(found.as_bytes(), pattern);
                }
            }
        }

        #[test]
        fn test_pattern_longer_than_sequence(sequence in "[ATGC]{0,8}", extra in "[ATGC]{1,8}") {
            let pattern = format!("{sequence}{extra}");
            for algorithm in algorithms() {
                prop_assert!(bounds(sequence.as_bytes(), pattern.as_bytes(), algorithm).is_empty());
            }
        }
    }
}
