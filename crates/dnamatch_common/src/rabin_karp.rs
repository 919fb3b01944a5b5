use crate::{
    matcher::Sealed,
    Algorithm,
    Match,
    Matcher,
    SearchError,
};

/// The polynomial used by [`RabinKarp`] to hash a window of bases.
///
/// Both values are reduced in `u64` arithmetic, so neither may exceed `u32::MAX`.
/// The modulus only affects how often hashes collide, never which matches are reported.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HashParams {
    base: u32,
    modulus: u32,
}

impl HashParams {
    /// One more than the largest byte value.
    pub const DEFAULT_BASE: u32 = 256;
    /// The largest prime below `2^30`.
    pub const DEFAULT_MODULUS: u32 = 1_073_741_789;

    pub const DEFAULT: Self = Self {
        base: Self::DEFAULT_BASE,
        modulus: Self::DEFAULT_MODULUS,
    };

    /// ```
    /// # use dnamatch_common::{HashParams, SearchError};
    /// assert!(HashParams::new(256, 101).is_ok());
    /// assert_eq!(HashParams::new(256, 0), Err(SearchError::ZeroModulus));
    /// ```
    pub const fn new(base: u32, modulus: u32) -> Result<Self, SearchError> {
        if modulus == 0 {
            Err(SearchError::ZeroModulus)
        } else {
            Ok(Self { base, modulus })
        }
    }

    #[must_use]
    pub const fn base(&self) -> u32 {
        self.base
    }

    #[must_use]
    pub const fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Horner's method, reduced after every step.
    #[must_use]
    pub(crate) fn hash_window(&self, bytes: &[u8]) -> u64 {
        let (base, modulus) = self.widened();
        bytes
            .iter()
            .fold(0, |hash, &byte| (hash * base + u64::from(byte)) % modulus)
    }

    /// `base ^ (len - 1) % modulus`, the weight of the leading byte of a window.
    #[must_use]
    pub(crate) fn leading_weight(&self, len: usize) -> u64 {
        let (base, modulus) = self.widened();
        (1..len).fold(1 % modulus, |weight, _| (weight * base) % modulus)
    }

    /// Slides a window one byte to the right, dropping `leaving` and appending `entering`.
    #[must_use]
    pub(crate) fn roll(&self, hash: u64, leaving: u8, entering: u8, leading_weight: u64) -> u64 {
        let (base, modulus) = self.widened();
        let leaving = (u64::from(leaving) * leading_weight) % modulus;
        let hash = (hash + modulus - leaving) % modulus;
        (hash * base % modulus + u64::from(entering)) % modulus
    }

    fn widened(self) -> (u64, u64) {
        (u64::from(self.base), u64::from(self.modulus))
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Compares rolling window hashes against the hash of the pattern, in `O(n + m)` expected time.
///
/// Every hash hit is verified byte by byte before being reported, so collisions only cost time.
#[derive(Clone, Debug)]
pub struct RabinKarp {
    pattern: Box<[u8]>,
    params: HashParams,
    pattern_hash: u64,
    leading_weight: u64,
}

impl RabinKarp {
    /// Constructs a matcher using [`HashParams::DEFAULT`].
    pub fn new(pattern: &[u8]) -> Result<Self, SearchError> {
        Self::with_params(pattern, HashParams::DEFAULT)
    }

    pub fn with_params(pattern: &[u8], params: HashParams) -> Result<Self, SearchError> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }
        Ok(Self {
            pattern: pattern.into(),
            params,
            pattern_hash: params.hash_window(pattern),
            leading_weight: params.leading_weight(pattern.len()),
        })
    }

    #[must_use]
    pub fn params(&self) -> HashParams {
        self.params
    }
}

struct FindIter<'sequence, 'matcher> {
    sequence: &'sequence [u8],
    matcher: &'matcher RabinKarp,
    window_hash: u64,
    offset: usize,
}

impl<'sequence> Iterator for FindIter<'sequence, '_> {
    type Item = Match<'sequence>;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = &self.matcher.pattern;
        let len = pattern.len();
        while self.offset + len <= self.sequence.len() {
            let start = self.offset;
            let candidate = self.window_hash == self.matcher.pattern_hash;

            if let Some(&entering) = self.sequence.get(start + len) {
                self.window_hash = self.matcher.params.roll(
                    self.window_hash,
                    self.sequence[start],
                    entering,
                    self.matcher.leading_weight,
                );
            }
            self.offset += 1;

            if candidate {
                if self.sequence[start..start + len] == pattern[..] {
                    return Some(Match::new(self.sequence, start, len));
                }
                tracing::trace!(offset = start, "rejected hash collision");
            }
        }
        None
    }
}

impl Sealed for RabinKarp {}

impl Matcher for RabinKarp {
    fn find_iter<'iter, 'matcher: 'iter, 'sequence: 'iter>(
        &'matcher self,
        sequence: &'sequence [u8],
    ) -> impl Iterator<Item = Match<'sequence>> + 'iter {
        let window_hash = sequence
            .get(..self.pattern.len())
            .map_or(0, |window| self.params.hash_window(window));
        FindIter {
            sequence,
            matcher: self,
            window_hash,
            offset: 0,
        }
    }

    fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::RabinKarp(self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        HashParams,
        RabinKarp,
    };
    use crate::{
        Matcher as _,
        Naive,
    };
    use proptest::prelude::*;

    fn starts(matcher: &impl crate::Matcher, sequence: &[u8]) -> Vec<usize> {
        matcher.find_iter(sequence).map(|x| x.start()).collect()
    }

    #[test]
    fn test_rolling_matches_direct_hash() {
        let params = HashParams::new(256, 101).unwrap();
        let sequence = b"GATTACAGATTACA";
        let len = 4;
        let weight = params.leading_weight(len);
        let mut hash = params.hash_window(&sequence[..len]);
        for start in 1..=sequence.len() - len {
            hash = params.roll(hash, sequence[start - 1], sequence[start + len - 1], weight);
            assert_eq!(hash, params.hash_window(&sequence[start..start + len]), "{start}");
        }
    }

    #[test]
    fn test_leading_weight() {
        let params = HashParams::new(10, 7).unwrap();
        assert_eq!(params.leading_weight(1), 1);
        assert_eq!(params.leading_weight(2), 3);
        assert_eq!(params.leading_weight(3), 2);
        assert_eq!(HashParams::new(10, 1).unwrap().leading_weight(1), 0);
    }

    #[test]
    fn test_collisions_are_rejected() {
        // 'A' (65) and 'G' (71) are congruent modulo 3
        let params = HashParams::new(256, 3).unwrap();
        assert_eq!(params.hash_window(b"A"), params.hash_window(b"G"));
        assert_eq!(params.hash_window(b"AT"), params.hash_window(b"GT"));

        let matcher = RabinKarp::with_params(b"AT", params).unwrap();
        assert!(matcher.find(b"GTGTGT").is_none());
        assert_eq!(starts(&matcher, b"GTATGT"), [2]);
    }

    #[test]
    fn test_every_window_collides() {
        let params = HashParams::new(256, 1).unwrap();
        let matcher = RabinKarp::with_params(b"GAT", params).unwrap();
        assert_eq!(params.hash_window(b"GAT"), params.hash_window(b"CCC"));
        assert_eq!(starts(&matcher, b"CCCGATCCGATGA"), [3, 8]);
    }

    #[test]
    fn test_extreme_params() {
        let params = HashParams::new(u32::MAX, u32::MAX).unwrap();
        let matcher = RabinKarp::with_params(b"ACGTACGT", params).unwrap();
        assert_eq!(starts(&matcher, b"ACGTACGTACGT"), [0, 4]);

        let params = HashParams::new(0, 2).unwrap();
        let matcher = RabinKarp::with_params(b"TTA", params).unwrap();
        assert_eq!(starts(&matcher, b"TTATTTA"), [0, 4]);
    }

    #[test]
    fn test_defaults() {
        let matcher = RabinKarp::new(b"A").unwrap();
        assert_eq!(matcher.params(), HashParams::default());
        assert_eq!(matcher.params().base(), 256);
        assert_eq!(matcher.params().modulus(), 1_073_741_789);
    }

    proptest! {
        #[test]
        fn test_small_moduli_agree_with_naive(
            sequence in "[ATGC]{0,64}",
            pattern in "[ATGC]{1,5}",
            base in 0u32..512,
            modulus in 1u32..16,
        ) {
            let params = HashParams::new(base, modulus).unwrap();
            let rabin_karp = RabinKarp::with_params(pattern.as_bytes(), params).unwrap();
            let naive = Naive::new(pattern.as_bytes()).unwrap();
            prop_assert_eq!(
                starts(&rabin_karp, sequence.as_bytes()),
                starts(&naive, sequence.as_bytes())
            );
        }
    }
}
