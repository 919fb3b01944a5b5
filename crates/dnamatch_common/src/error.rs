use chumsky::error::SimpleReason;
use std::{
    fmt::{
        self,
        Display,
        Formatter,
    },
    ops::Range,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reason {
    Unexpected,
    Unclosed,
    Custom(String),
}

impl Reason {
    pub(crate) fn new<I, S>(reason: &SimpleReason<I, S>) -> Self {
        match reason {
            SimpleReason::Unexpected => Self::Unexpected,
            SimpleReason::Unclosed {
                span: _,
                delimiter: _,
            } => Self::Unclosed,
            SimpleReason::Custom(custom) => Self::Custom(custom.clone()),
        }
    }
}

impl Display for Reason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let what = match self {
            Self::Unexpected => "unexpected input",
            Self::Unclosed => "unclosed delimiter",
            Self::Custom(custom) => custom,
        };
        write!(f, "{what}")
    }
}

/// Describes errors encountered when validating a nucleotide sequence.
///
/// The span is measured in characters, not bytes.
#[derive(Clone, Debug)]
pub struct Error<'a> {
    pub(crate) source: &'a str,
    pub(crate) span: Range<usize>,
    pub(crate) reason: Reason,
}

impl<'a> Error<'a> {
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[must_use]
    pub fn reason(&self) -> &Reason {
        &self.reason
    }

    #[must_use]
    pub fn source_text(&self) -> &'a str {
        self.source
    }
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let reason = &self.reason;
        let start = self.span.start;
        let end = self.span.end;
        let sequence: String = self
            .source
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect();
        write!(
            f,
            "'{reason}' while parsing sequence \"{sequence}\" in range [{start}, {end})",
        )
    }
}

impl std::error::Error for Error<'_> {}

/// Describes why a matcher could not be constructed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchError {
    /// The pattern contains no bases, so every offset would trivially match.
    EmptyPattern,
    /// A rolling hash modulus of zero cannot reduce anything.
    ZeroModulus,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let what = match self {
            Self::EmptyPattern => "the pattern must contain at least one base",
            Self::ZeroModulus => "the rolling hash modulus must be non-zero",
        };
        write!(f, "{what}")
    }
}

impl std::error::Error for SearchError {}
