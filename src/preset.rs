//! Preset dimension tables and `"W x H"` parsing.
//!
//! Presets are pre-vetted literal sizes known to work well with a model
//! family. One lookup serves all tables; the table is just data.
//!
//! ```
//! use zendims::{Orientation, PresetTable, Size};
//!
//! let s = PresetTable::Wan.resolve("832 x 480", Orientation::Swapped).unwrap();
//! assert_eq!(s, Size::new(480, 832));
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::{DimensionError, LookupError, ParseError};
use crate::orientation::{Orientation, Size};

/// SDXL presets, roughly one megapixel each.
pub static SDXL_DIMENSIONS: [&str; 6] = [
    "1024 x 1024",
    "896 x 1152",
    "832 x 1216",
    "768 x 1344",
    "640 x 1536",
    "1216 x 832",
];

/// WAN presets, long edge at most 832.
pub static WAN_DIMENSIONS: [&str; 9] = [
    "480 x 832",
    "512 x 512",
    "496 x 640",
    "640 x 496",
    "832 x 480",
    "496 x 660",
    "660 x 496",
    "480 x 580",
    "580 x 480",
];

/// WAN presets scaled about 1.5× to a 1280 long edge, including 9:16.
pub static WAN_720_DIMENSIONS: [&str; 9] = [
    "720 x 1280",
    "768 x 768",
    "744 x 960",
    "960 x 744",
    "1280 x 720",
    "744 x 992",
    "992 x 744",
    "720 x 870",
    "870 x 720",
];

/// Which preset list to consult.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PresetTable {
    Sdxl,
    Wan,
    Wan720,
}

impl PresetTable {
    pub const ALL: [Self; 3] = [Self::Sdxl, Self::Wan, Self::Wan720];

    /// The literal entries, in host option order.
    pub fn entries(self) -> &'static [&'static str] {
        match self {
            Self::Sdxl => &SDXL_DIMENSIONS,
            Self::Wan => &WAN_DIMENSIONS,
            Self::Wan720 => &WAN_720_DIMENSIONS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sdxl => "sdxl",
            Self::Wan => "wan",
            Self::Wan720 => "wan720",
        }
    }

    pub fn contains(self, dimensions: &str) -> bool {
        self.entries().iter().any(|e| *e == dimensions)
    }

    /// Parse one of this table's entries and put it in the requested order.
    ///
    /// Malformed strings fail with a [`ParseError`]; well-formed strings not
    /// in the table fail with [`LookupError::Preset`].
    pub fn resolve(self, dimensions: &str, orientation: Orientation) -> Result<Size, DimensionError> {
        let size = parse_dimensions(dimensions)?;
        if !self.contains(dimensions) {
            tracing::debug!(table = self.name(), dimensions, "dimensions not in preset table");
            return Err(LookupError::Preset.into());
        }
        Ok(orientation.apply(size))
    }

    /// Iterate over the parsed entries in table order.
    pub fn sizes(self) -> impl Iterator<Item = Result<Size, ParseError>> {
        self.entries().iter().map(|s| parse_dimensions(s))
    }
}

impl FromStr for PresetTable {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or(LookupError::PresetTable)
    }
}

impl fmt::Display for PresetTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a `"W x H"` string.
///
/// Splits on `" x "`; exactly two parts, each a non-negative integer
/// (surrounding whitespace tolerated).
pub fn parse_dimensions(s: &str) -> Result<Size, ParseError> {
    let mut parts = s.split(" x ");
    let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::TokenCount);
    };
    let width = w.trim().parse::<u32>().map_err(|_| ParseError::NotANumber)?;
    let height = h.trim().parse::<u32>().map_err(|_| ParseError::NotANumber)?;
    Ok(Size::new(width, height))
}
