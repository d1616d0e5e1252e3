//! Aspect ratios, model families, and the per-model multiplier table.
//!
//! Each named ratio carries a base multiplier per model family: the number
//! of pixels one ratio unit expands to at scale 1.0. SDXL multipliers land
//! near one megapixel; SD 1.5 multipliers are roughly half of those on each
//! axis.
//!
//! ```
//! use zendims::{AspectRatio, ModelFamily};
//!
//! let r: AspectRatio = "9:16".parse().unwrap();
//! assert_eq!(r.multiplier(ModelFamily::Sdxl), Some(90.0));
//! assert_eq!(r.multiplier(ModelFamily::Sd15), Some(60.0));
//! assert_eq!(AspectRatio::Custom.multiplier(ModelFamily::Sdxl), None);
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::{DimensionError, LookupError, ParseError, RangeError};

/// An aspect ratio as two positive integers, `num:den` = width:height.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: u32,
    den: u32,
}

impl Ratio {
    /// Create a ratio. Both terms must be non-zero.
    pub const fn new(num: u32, den: u32) -> Result<Self, RangeError> {
        if num == 0 || den == 0 {
            return Err(RangeError::RatioTerm);
        }
        Ok(Self { num, den })
    }

    /// Unchecked constructor for the built-in table.
    const fn from_terms(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// Width term.
    pub const fn num(self) -> u32 {
        self.num
    }

    /// Height term.
    pub const fn den(self) -> u32 {
        self.den
    }

    /// The ratio with terms exchanged (portrait ↔ landscape).
    pub const fn inverse(self) -> Self {
        Self {
            num: self.den,
            den: self.num,
        }
    }
}

impl FromStr for Ratio {
    type Err = DimensionError;

    /// Parse `"a:b"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseError::TokenCount.into());
        };
        let num = parse_term(a)?;
        let den = parse_term(b)?;
        Ok(Self::new(num, den)?)
    }
}

fn parse_term(s: &str) -> Result<u32, ParseError> {
    s.trim().parse::<u32>().map_err(|_| ParseError::NotANumber)
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.num, self.den)
    }
}

/// Model family whose native resolution a multiplier targets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    #[default]
    Sdxl,
    Sd15,
}

impl ModelFamily {
    /// Every family, in host option order.
    pub const ALL: [Self; 2] = [Self::Sdxl, Self::Sd15];

    /// Host-facing option labels, in [`ALL`](Self::ALL) order.
    pub const LABELS: [&'static str; 2] = ["SDXL", "SD 1.5"];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sdxl => Self::LABELS[0],
            Self::Sd15 => Self::LABELS[1],
        }
    }
}

impl FromStr for ModelFamily {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or(LookupError::Model)
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Base multipliers for one ratio, one per model family.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Multipliers {
    pub sdxl: f64,
    pub sd15: f64,
}

impl Multipliers {
    /// SD 1.5 at half the SDXL multiplier.
    const fn halved(sdxl: f64) -> Self {
        Self {
            sdxl,
            sd15: sdxl / 2.0,
        }
    }

    pub const fn get(self, model: ModelFamily) -> f64 {
        match model {
            ModelFamily::Sdxl => self.sdxl,
            ModelFamily::Sd15 => self.sd15,
        }
    }
}

/// A named ratio from the host's option list.
///
/// `Custom` is the "no ratio" sentinel: it has no terms and no multipliers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    #[default]
    Custom,
    R1x1,
    R2x3,
    R4x5,
    R4x7,
    R5x12,
    R7x9,
    R9x16,
    R9x21,
    R13x19,
}

impl AspectRatio {
    /// Every label, in host option order.
    pub const ALL: [Self; 10] = [
        Self::Custom,
        Self::R1x1,
        Self::R2x3,
        Self::R4x5,
        Self::R4x7,
        Self::R5x12,
        Self::R7x9,
        Self::R9x16,
        Self::R9x21,
        Self::R13x19,
    ];

    /// Host-facing option labels, in [`ALL`](Self::ALL) order.
    pub const LABELS: [&'static str; 10] = [
        "Custom", "1:1", "2:3", "4:5", "4:7", "5:12", "7:9", "9:16", "9:21", "13:19",
    ];

    /// Labels that carry multipliers (everything but `Custom`).
    pub const SCALABLE_LABELS: [&'static str; 9] = [
        "1:1", "2:3", "4:5", "4:7", "5:12", "7:9", "9:16", "9:21", "13:19",
    ];

    pub const fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    /// Ratio terms, or `None` for `Custom`.
    pub const fn ratio(self) -> Option<Ratio> {
        let (num, den) = match self {
            Self::Custom => return None,
            Self::R1x1 => (1, 1),
            Self::R2x3 => (2, 3),
            Self::R4x5 => (4, 5),
            Self::R4x7 => (4, 7),
            Self::R5x12 => (5, 12),
            Self::R7x9 => (7, 9),
            Self::R9x16 => (9, 16),
            Self::R9x21 => (9, 21),
            Self::R13x19 => (13, 19),
        };
        Some(Ratio::from_terms(num, den))
    }

    /// Per-model multipliers, or `None` for `Custom`.
    pub const fn multipliers(self) -> Option<Multipliers> {
        Some(match self {
            Self::Custom => return None,
            Self::R1x1 => Multipliers::halved(1024.0),
            Self::R2x3 => Multipliers::halved(418.0),
            Self::R4x5 => Multipliers::halved(228.75),
            Self::R4x7 => Multipliers::halved(192.0),
            Self::R5x12 => Multipliers::halved(128.0),
            Self::R7x9 => Multipliers::halved(128.0),
            Self::R9x16 => Multipliers {
                sdxl: 90.0,
                sd15: 60.0,
            },
            Self::R9x21 => Multipliers::halved(670.0 / 9.0),
            Self::R13x19 => Multipliers {
                sdxl: 64.0,
                sd15: 32.0,
            },
        })
    }

    /// Multiplier for one model family, or `None` for `Custom`.
    pub const fn multiplier(self, model: ModelFamily) -> Option<f64> {
        match self.multipliers() {
            Some(m) => Some(m.get(model)),
            None => None,
        }
    }
}

impl FromStr for AspectRatio {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or(LookupError::Ratio)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
