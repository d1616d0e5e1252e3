//! Dimension resolution: ratio fit, pure-ratio scaling, preset lookup,
//! and fixed-base expansion.
//!
//! Every operation is a single pure computation returning a [`Size`]
//! in the requested [`Orientation`].
//!
//! # Example
//!
//! ```
//! use zendims::{AspectRatio, Axis, Fit, ModelFamily, Orientation, Size, scale_ratio};
//!
//! // Width is authoritative: 1024 / 4 = 256 units, 256 × 5 = 1280.
//! let size = Fit::new(1024, 1024)
//!     .aspect(AspectRatio::R4x5)
//!     .enforce(Axis::Width)
//!     .compute()
//!     .unwrap();
//! assert_eq!(size, Size::new(1024, 1280));
//!
//! let size = scale_ratio(AspectRatio::R1x1, 1.0, ModelFamily::Sdxl, Orientation::Default).unwrap();
//! assert_eq!(size, Size::new(1024, 1024));
//! ```

use num_traits::Float;

use crate::error::{DimensionError, LookupError, RangeError};
use crate::orientation::{Axis, Orientation, Size};
use crate::preset::PresetTable;
use crate::ratio::{AspectRatio, ModelFamily, Ratio};

/// Pixel size of one ratio unit in [`expand_ratio`].
pub const PIXEL_BASE: u32 = 64;

/// Inputs to [`fit_ratio`] below this are raised to it.
pub const MIN_DIMENSION: u32 = 64;

/// Largest accepted input width or height.
pub const MAX_DIMENSION: u32 = 1 << 20;

/// Step the host uses for width/height inputs.
pub const DIMENSION_STEP: u32 = 2;

/// Largest accepted scale multiplier. The smallest is `0.0`.
pub const MAX_SCALE: f64 = 10.0;

/// Scale the host offers by default.
pub const DEFAULT_SCALE: f64 = 1.0;

// ============================================================================
// Ratio-constrained fit
// ============================================================================

/// Fit a width/height pair to a ratio, keeping one axis fixed.
///
/// Both inputs are raised to at least [`MIN_DIMENSION`]. This covers every
/// value from 0 to 63, so `32` becomes `64`; a host that only substitutes
/// zero keeps 1..=63 as given. With `ratio` of `None` (the `Custom` option)
/// the raised pair is returned as is.
/// Otherwise the authoritative axis is kept and the other becomes
/// `(authoritative / its term) * other term`, so the result matches the
/// ratio exactly only when the authoritative value is a multiple of its term.
pub fn fit_ratio(
    width: u32,
    height: u32,
    ratio: Option<Ratio>,
    enforce: Axis,
    orientation: Orientation,
) -> Result<Size, DimensionError> {
    if width > MAX_DIMENSION {
        tracing::debug!(width, "width above maximum");
        return Err(RangeError::Width.into());
    }
    if height > MAX_DIMENSION {
        tracing::debug!(height, "height above maximum");
        return Err(RangeError::Height.into());
    }
    let w = width.max(MIN_DIMENSION);
    let h = height.max(MIN_DIMENSION);

    let Some(ratio) = ratio else {
        return Ok(orientation.transform_dimensions(w, h));
    };

    let (w, h) = match enforce {
        Axis::Width => (w, scale_term(w / ratio.num(), ratio.den())?),
        Axis::Height => (scale_term(h / ratio.den(), ratio.num())?, h),
    };
    tracing::trace!(w, h, %ratio, ?enforce, "fit ratio");
    Ok(orientation.transform_dimensions(w, h))
}

fn scale_term(factor: u32, term: u32) -> Result<u32, RangeError> {
    factor.checked_mul(term).ok_or(RangeError::Overflow)
}

/// Builder for [`fit_ratio`].
///
/// Defaults: no ratio (`Custom`), width authoritative, default order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fit {
    pub width: u32,
    pub height: u32,
    pub ratio: Option<Ratio>,
    pub enforce: Axis,
    pub orientation: Orientation,
}

impl Fit {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ratio: None,
            enforce: Axis::Width,
            orientation: Orientation::Default,
        }
    }

    /// Use explicit ratio terms.
    pub fn ratio(mut self, ratio: Ratio) -> Self {
        self.ratio = Some(ratio);
        self
    }

    /// Use a named ratio. `Custom` clears the ratio.
    pub fn aspect(mut self, aspect: AspectRatio) -> Self {
        self.ratio = aspect.ratio();
        self
    }

    pub fn enforce(mut self, axis: Axis) -> Self {
        self.enforce = axis;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn compute(&self) -> Result<Size, DimensionError> {
        fit_ratio(
            self.width,
            self.height,
            self.ratio,
            self.enforce,
            self.orientation,
        )
    }
}

// ============================================================================
// Scaling
// ============================================================================

/// Scale a named ratio by its per-model multiplier.
///
/// Each axis is `ceil(term × multiplier × scale)`. `Custom` has no
/// multiplier and fails with [`LookupError::Ratio`].
pub fn scale_ratio(
    ratio: AspectRatio,
    scale: f64,
    model: ModelFamily,
    orientation: Orientation,
) -> Result<Size, DimensionError> {
    check_scale(scale)?;
    let (Some(terms), Some(multiplier)) = (ratio.ratio(), ratio.multiplier(model)) else {
        tracing::debug!(%ratio, "ratio has no multiplier");
        return Err(LookupError::Ratio.into());
    };
    let w = to_dimension(Float::ceil(f64::from(terms.num()) * multiplier * scale))?;
    let h = to_dimension(Float::ceil(f64::from(terms.den()) * multiplier * scale))?;
    tracing::trace!(w, h, %ratio, %model, scale, "scale ratio");
    Ok(orientation.transform_dimensions(w, h))
}

/// Expand ratio terms at [`PIXEL_BASE`] pixels per unit.
///
/// Each axis is `trunc(term × 64 × scale)`.
pub fn expand_ratio(
    ratio: Ratio,
    scale: f64,
    orientation: Orientation,
) -> Result<Size, DimensionError> {
    check_scale(scale)?;
    let base = f64::from(PIXEL_BASE);
    let w = to_dimension(f64::from(ratio.num()) * base * scale)?;
    let h = to_dimension(f64::from(ratio.den()) * base * scale)?;
    Ok(orientation.transform_dimensions(w, h))
}

fn check_scale(scale: f64) -> Result<(), RangeError> {
    if (0.0..=MAX_SCALE).contains(&scale) {
        Ok(())
    } else {
        tracing::debug!(scale, "scale outside 0.0..=10.0");
        Err(RangeError::Scale)
    }
}

/// Truncate a non-negative finite value to `u32`.
fn to_dimension(v: f64) -> Result<u32, RangeError> {
    if v.is_finite() && v >= 0.0 && v <= f64::from(u32::MAX) {
        Ok(v as u32)
    } else {
        Err(RangeError::Overflow)
    }
}

// ============================================================================
// Presets
// ============================================================================

/// Look up a preset string in `table` and return it in the requested order.
pub fn lookup_preset(
    table: PresetTable,
    dimensions: &str,
    orientation: Orientation,
) -> Result<Size, DimensionError> {
    table.resolve(dimensions, orientation)
}

impl AspectRatio {
    /// [`fit_ratio`] with this ratio.
    pub fn fit(
        self,
        width: u32,
        height: u32,
        enforce: Axis,
        orientation: Orientation,
    ) -> Result<Size, DimensionError> {
        fit_ratio(width, height, self.ratio(), enforce, orientation)
    }

    /// [`scale_ratio`] with this ratio.
    pub fn scale(
        self,
        scale: f64,
        model: ModelFamily,
        orientation: Orientation,
    ) -> Result<Size, DimensionError> {
        scale_ratio(self, scale, model, orientation)
    }
}
