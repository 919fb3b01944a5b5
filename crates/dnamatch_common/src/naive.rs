use crate::{
    matcher::Sealed,
    Algorithm,
    Match,
    Matcher,
    SearchError,
};

/// Compares the pattern against every offset of the sequence, in `O(n * m)`.
///
/// No preprocessing is done, which makes this the reference the other matchers are checked against.
#[derive(Clone, Debug)]
pub struct Naive {
    pattern: Box<[u8]>,
}

impl Naive {
    pub fn new(pattern: &[u8]) -> Result<Self, SearchError> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }
        Ok(Self {
            pattern: pattern.into(),
        })
    }
}

struct FindIter<'sequence, 'pattern> {
    sequence: &'sequence [u8],
    pattern: &'pattern [u8],
    offset: usize,
}

impl<'sequence> Iterator for FindIter<'sequence, '_> {
    type Item = Match<'sequence>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.pattern.len();
        while self.offset + len <= self.sequence.len() {
            let start = self.offset;
            self.offset += 1;
            let window = &self.sequence[start..start + len];
            if window.iter().zip(self.pattern).all(|(x, y)| x == y) {
                return Some(Match::new(self.sequence, start, len));
            }
        }
        None
    }
}

impl Sealed for Naive {}

impl Matcher for Naive {
    fn find_iter<'iter, 'matcher: 'iter, 'sequence: 'iter>(
        &'matcher self,
        sequence: &'sequence [u8],
    ) -> impl Iterator<Item = Match<'sequence>> + 'iter {
        FindIter {
            sequence,
            pattern: &self.pattern,
            offset: 0,
        }
    }

    fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Naive
    }
}
