use crate::{
    Error,
    Reason,
};
use chumsky::{
    primitive::end,
    Parser as _,
};
use std::fmt::{
    self,
    Display,
    Formatter,
};

/// A validated run of nucleotides, normalized to uppercase.
///
/// ```
/// # use dnamatch_common::Sequence;
/// let sequence = Sequence::parse("gatTACA").unwrap();
/// assert_eq!(sequence.as_bytes(), b"GATTACA");
/// assert_eq!(sequence.len(), 7);
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Sequence {
    bases: Box<[u8]>,
}

impl Sequence {
    /// Validates `source`, which must contain only `A`, `T`, `G`, or `C` (in any case).
    ///
    /// Leading and trailing whitespace is ignored.
    ///
    /// ```
    /// # use dnamatch_common::Sequence;
    /// assert!(Sequence::parse(" ATGC ").is_ok());
    /// assert!(Sequence::parse("ATGU").is_err());
    /// assert!(Sequence::parse("").is_err());
    /// ```
    pub fn parse(source: &str) -> Result<Self, Error<'_>> {
        let parser = crate::dna_sequence().then_ignore(end());
        match parser.parse(source) {
            Ok(bases) => Ok(Self {
                bases: bases.into_boxed_slice(),
            }),
            Err(errors) => Err(match errors.first() {
                Some(error) => Error {
                    source,
                    span: error.span(),
                    reason: Reason::new(error.reason()),
                },
                None => Error {
                    source,
                    span: 0..source.chars().count(),
                    reason: Reason::Unexpected,
                },
            }),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_bases(&self.bases, f)
    }
}

/// The compile-time variant of a [`Sequence`].
///
/// You should never need to name this type directly. Please use the `dna!` macro to instantiate one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct StaticSequence<const N: usize> {
    bases: [u8; N],
}

impl<const N: usize> StaticSequence<N> {
    /// The bases have already been validated by the `dna!` macro.
    #[doc(hidden)]
    #[must_use]
    pub const fn new(bases: [u8; N]) -> Self {
        Self { bases }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[must_use]
    pub fn to_sequence(&self) -> Sequence {
        Sequence {
            bases: self.bases.into(),
        }
    }
}

impl<const N: usize> AsRef<[u8]> for StaticSequence<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bases
    }
}

impl<const N: usize> Display for StaticSequence<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_bases(&self.bases, f)
    }
}

fn fmt_bases(bases: &[u8], f: &mut Formatter<'_>) -> fmt::Result {
    for &base in bases {
        write!(f, "{}", char::from(base))?;
    }
    Ok(())
}
