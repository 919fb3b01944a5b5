use crate::{
    matcher::Sealed,
    Algorithm,
    Match,
    Matcher,
    SearchError,
};

/// Knuth-Morris-Pratt search, in `O(n + m)`.
///
/// The failure function is built once, when the matcher is constructed, and the sequence is never rescanned.
#[derive(Clone, Debug)]
pub struct Kmp {
    pattern: Box<[u8]>,
    lps: Box<[usize]>,
}

impl Kmp {
    pub fn new(pattern: &[u8]) -> Result<Self, SearchError> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }
        Ok(Self {
            pattern: pattern.into(),
            lps: crate::lps_table(pattern).into_boxed_slice(),
        })
    }

    /// The failure function of the pattern.
    ///
    /// ```
    /// # use dnamatch_common::Kmp;
    /// let matcher = Kmp::new(b"ATATG").unwrap();
    /// assert_eq!(matcher.lps(), [0, 0, 1, 2, 0]);
    /// ```
    #[must_use]
    pub fn lps(&self) -> &[usize] {
        &self.lps
    }
}

struct FindIter<'sequence, 'matcher> {
    sequence: &'sequence [u8],
    matcher: &'matcher Kmp,
    // cursor into the sequence
    i: usize,
    // length of the pattern prefix matched so far
    j: usize,
}

impl<'sequence> Iterator for FindIter<'sequence, '_> {
    type Item = Match<'sequence>;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = &self.matcher.pattern;
        let lps = &self.matcher.lps;
        while let Some(&base) = self.sequence.get(self.i) {
            if base == pattern[self.j] {
                self.i += 1;
                self.j += 1;
                if self.j == pattern.len() {
                    let start = self.i - self.j;
                    self.j = lps[self.j - 1];
                    return Some(Match::new(self.sequence, start, pattern.len()));
                }
            } else if self.j != 0 {
                self.j = lps[self.j - 1];
            } else {
                self.i += 1;
            }
        }
        None
    }
}

impl Sealed for Kmp {}

impl Matcher for Kmp {
    fn find_iter<'iter, 'matcher: 'iter, 'sequence: 'iter>(
        &'matcher self,
        sequence: &'sequence [u8],
    ) -> impl Iterator<Item = Match<'sequence>> + 'iter {
        FindIter {
            sequence,
            matcher: self,
            i: 0,
            j: 0,
        }
    }

    fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Kmp
    }
}
