//! Model-friendly image dimensions from aspect ratios, scale factors, and
//! preset tables.
//!
//! Pure arithmetic over static tables: no allocations, `no_std` compatible.
//!
//! # Modules
//!
//! - [`resolve`] — Ratio fit, pure-ratio scaling, fixed-base expansion, preset lookup
//! - [`ratio`] — Ratio terms, named ratios, model families, multiplier table
//! - [`preset`] — Preset dimension tables and `"W x H"` parsing
//! - [`orientation`] — Output order, enforcement axis, and [`Size`]
//! - [`node`] — Host registration metadata (class names, input widgets)
//! - [`error`] — Parse, lookup, and range errors

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod node;
pub mod orientation;
pub mod preset;
pub mod ratio;
pub mod resolve;

pub use error::{DimensionError, LookupError, ParseError, RangeError};
pub use node::{FloatDisplay, InputKind, InputSpec, NodeKind, REGISTRY};
pub use orientation::{Axis, Orientation, Size};
pub use preset::{PresetTable, parse_dimensions};
pub use ratio::{AspectRatio, ModelFamily, Multipliers, Ratio};
pub use resolve::{
    DEFAULT_SCALE, DIMENSION_STEP, Fit, MAX_DIMENSION, MAX_SCALE, MIN_DIMENSION, PIXEL_BASE,
    expand_ratio, fit_ratio, lookup_preset, scale_ratio,
};
