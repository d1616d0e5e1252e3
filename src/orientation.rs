//! Output order, enforcement axis, and the `Size` pair they act on.

use core::fmt;
use core::str::FromStr;

use crate::error::LookupError;

/// Width × height dimensions in pixels.
///
/// Displays as `"W x H"`, the format used by the preset tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Swap width and height.
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// The pair as `(width, height)`.
    pub const fn to_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl From<Size> for (u32, u32) {
    fn from(s: Size) -> Self {
        s.to_tuple()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// Order in which a computed pair is returned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `(width, height)`.
    #[default]
    Default,
    /// `(height, width)`.
    Swapped,
}

impl Orientation {
    /// Every orientation, in host option order.
    pub const ALL: [Self; 2] = [Self::Default, Self::Swapped];

    /// Host-facing option labels, in [`ALL`](Self::ALL) order.
    pub const LABELS: [&'static str; 2] = ["default (width,height)", "swapped (height,width)"];

    /// From a boolean "swapped" flag.
    pub const fn from_swapped(swapped: bool) -> Self {
        if swapped { Self::Swapped } else { Self::Default }
    }

    /// Whether this orientation swaps axes.
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::Swapped)
    }

    /// Host-facing label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => Self::LABELS[0],
            Self::Swapped => Self::LABELS[1],
        }
    }

    /// Put a `(w, h)` pair into this output order.
    pub const fn transform_dimensions(self, w: u32, h: u32) -> Size {
        if self.swaps_axes() {
            Size::new(h, w)
        } else {
            Size::new(w, h)
        }
    }

    /// Apply to an existing size.
    pub const fn apply(self, size: Size) -> Size {
        self.transform_dimensions(size.width, size.height)
    }
}

impl FromStr for Orientation {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.label() == s)
            .ok_or(LookupError::Orientation)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which dimension is authoritative in a ratio fit; the other is derived.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    #[default]
    Width,
    Height,
}

impl Axis {
    /// Every axis, in host option order.
    pub const ALL: [Self; 2] = [Self::Width, Self::Height];

    /// Host-facing option labels, in [`ALL`](Self::ALL) order.
    pub const LABELS: [&'static str; 2] = ["width", "height"];

    /// Host-facing label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Width => Self::LABELS[0],
            Self::Height => Self::LABELS[1],
        }
    }
}

impl FromStr for Axis {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.label() == s)
            .ok_or(LookupError::Axis)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
