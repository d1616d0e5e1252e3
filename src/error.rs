//! Error types for dimension resolution.
//!
//! Every failure is local and immediate: a malformed string, an unknown
//! option label, or a number outside its declared domain. Nothing here
//! allocates, so errors are `Copy` and usable without `std`.

use core::fmt;

/// A `"W x H"` or `"a:b"` string could not be parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Wrong number of separator-delimited parts.
    TokenCount,
    /// A part was not a non-negative integer.
    NotANumber,
}

/// A key was not present in one of the fixed option sets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LookupError {
    /// Unknown ratio label, or a label with no multiplier (`Custom`).
    Ratio,
    /// Unknown model family.
    Model,
    /// Dimension string not in the selected preset table.
    Preset,
    /// Unknown preset table name.
    PresetTable,
    /// Unknown orientation label.
    Orientation,
    /// Unknown enforcement axis.
    Axis,
    /// Unknown node class name.
    Node,
}

/// A numeric input was outside its declared domain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RangeError {
    /// Scale multiplier not in `0.0..=10.0` (or NaN).
    Scale,
    /// Width above [`MAX_DIMENSION`](crate::MAX_DIMENSION).
    Width,
    /// Height above [`MAX_DIMENSION`](crate::MAX_DIMENSION).
    Height,
    /// Ratio term of zero.
    RatioTerm,
    /// Computed dimension does not fit in `u32`.
    Overflow,
}

/// Dimension resolution error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DimensionError {
    Parse(ParseError),
    Lookup(LookupError),
    Range(RangeError),
}

impl From<ParseError> for DimensionError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<LookupError> for DimensionError {
    fn from(e: LookupError) -> Self {
        Self::Lookup(e)
    }
}

impl From<RangeError> for DimensionError {
    fn from(e: RangeError) -> Self {
        Self::Range(e)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TokenCount => "wrong number of parts",
            Self::NotANumber => "part is not a non-negative integer",
        })
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ratio => "unknown ratio",
            Self::Model => "unknown model family",
            Self::Preset => "dimensions not in preset table",
            Self::PresetTable => "unknown preset table",
            Self::Orientation => "unknown orientation",
            Self::Axis => "unknown enforcement axis",
            Self::Node => "unknown node class",
        })
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scale => "scale must be within 0.0..=10.0",
            Self::Width => "width exceeds maximum dimension",
            Self::Height => "height exceeds maximum dimension",
            Self::RatioTerm => "ratio terms must be non-zero",
            Self::Overflow => "computed dimension overflows u32",
        })
    }
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Lookup(e) => write!(f, "lookup error: {e}"),
            Self::Range(e) => write!(f, "range error: {e}"),
        }
    }
}

impl core::error::Error for ParseError {}
impl core::error::Error for LookupError {}
impl core::error::Error for RangeError {}

impl core::error::Error for DimensionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Lookup(e) => Some(e),
            Self::Range(e) => Some(e),
        }
    }
}
