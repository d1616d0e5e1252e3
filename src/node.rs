//! Host registration metadata for the dimension nodes.
//!
//! The host builds its node menu and input widgets from this data. Class
//! and display names are the identifiers saved graphs refer to, so they must
//! not change. Executing nodes is the host's job; each node maps onto one
//! resolver operation.

use core::fmt;
use core::str::FromStr;

use crate::error::LookupError;
use crate::orientation::{Axis, Orientation};
use crate::preset::{PresetTable, SDXL_DIMENSIONS, WAN_720_DIMENSIONS, WAN_DIMENSIONS};
use crate::ratio::{AspectRatio, ModelFamily};
use crate::resolve::{DEFAULT_SCALE, DIMENSION_STEP, MAX_DIMENSION, MAX_SCALE, MIN_DIMENSION};

/// Menu category shared by every node.
pub const CATEGORY: &str = "BetterDimensions";

/// Output names, in output order. Both outputs are `INT`.
pub const RETURN_NAMES: [&str; 2] = ["width", "height"];

/// Output types, in output order.
pub const RETURN_TYPES: [&str; 2] = ["INT", "INT"];

/// Widget description for one node input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputKind {
    Int {
        default: u32,
        min: u32,
        max: u32,
        step: u32,
    },
    Float {
        default: f64,
        min: f64,
        max: f64,
        step: f64,
        round: f64,
        display: FloatDisplay,
    },
    /// Drop-down with fixed string options; the first is the default.
    Combo(&'static [&'static str]),
}

/// How the host renders a float widget.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FloatDisplay {
    /// Plain number entry.
    #[default]
    Number,
    /// Slider between `min` and `max`.
    Slider,
}

impl FloatDisplay {
    /// Host-facing attribute value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Slider => "slider",
        }
    }
}

/// A named node input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputSpec {
    pub name: &'static str,
    pub kind: InputKind,
}

impl InputSpec {
    const fn combo(name: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: InputKind::Combo(options),
        }
    }

    const fn dimension(name: &'static str) -> Self {
        Self {
            name,
            kind: InputKind::Int {
                default: 1024,
                min: MIN_DIMENSION,
                max: MAX_DIMENSION,
                step: DIMENSION_STEP,
            },
        }
    }
}

const ORDER: InputSpec = InputSpec::combo("order", &Orientation::LABELS);

static FIT_INPUTS: [InputSpec; 5] = [
    InputSpec::dimension("width"),
    InputSpec::dimension("height"),
    InputSpec::combo("ratio", &AspectRatio::LABELS),
    InputSpec::combo("enforce_dimension", &Axis::LABELS),
    ORDER,
];

static SCALE_INPUTS: [InputSpec; 4] = [
    InputSpec::combo("ratio", &AspectRatio::SCALABLE_LABELS),
    InputSpec {
        name: "adjust_scale",
        kind: InputKind::Float {
            default: DEFAULT_SCALE,
            min: 0.0,
            max: MAX_SCALE,
            step: 0.01,
            round: 0.001,
            display: FloatDisplay::Number,
        },
    },
    InputSpec::combo("model", &ModelFamily::LABELS),
    ORDER,
];

static SDXL_INPUTS: [InputSpec; 2] = [InputSpec::combo("dimensions", &SDXL_DIMENSIONS), ORDER];
static WAN_INPUTS: [InputSpec; 2] = [InputSpec::combo("dimensions", &WAN_DIMENSIONS), ORDER];
static WAN_720_INPUTS: [InputSpec; 2] =
    [InputSpec::combo("dimensions", &WAN_720_DIMENSIONS), ORDER];

/// A registered node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Explicit width/height fitted to a ratio.
    BetterImageDimensions,
    /// Named ratio scaled by model multiplier.
    PureRatio,
    /// SDXL preset list.
    SdxlDimensionsSimple,
    /// WAN preset list. Its class name is `SDXLDimensions` for saved-graph
    /// compatibility.
    WanDimensions,
    /// WAN 720 preset list.
    WanDimensions720,
}

/// Every node, in registration order.
pub const REGISTRY: [NodeKind; 5] = [
    NodeKind::BetterImageDimensions,
    NodeKind::PureRatio,
    NodeKind::SdxlDimensionsSimple,
    NodeKind::WanDimensions,
    NodeKind::WanDimensions720,
];

impl NodeKind {
    /// Registration key.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::BetterImageDimensions => "BetterImageDimensions",
            Self::PureRatio => "PureRatio",
            Self::SdxlDimensionsSimple => "SDXLDimensions_simple",
            Self::WanDimensions => "SDXLDimensions",
            Self::WanDimensions720 => "WANDimensions_720",
        }
    }

    /// Name shown in the host's menu.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BetterImageDimensions => "Better Image Dimensions",
            Self::PureRatio => "Dimensions by Ratio",
            Self::SdxlDimensionsSimple => "sdxl Dimensions",
            Self::WanDimensions => "wan Dimensions",
            Self::WanDimensions720 => "wan Dimensions 720",
        }
    }

    /// Required inputs, in widget order.
    pub fn inputs(self) -> &'static [InputSpec] {
        match self {
            Self::BetterImageDimensions => &FIT_INPUTS,
            Self::PureRatio => &SCALE_INPUTS,
            Self::SdxlDimensionsSimple => &SDXL_INPUTS,
            Self::WanDimensions => &WAN_INPUTS,
            Self::WanDimensions720 => &WAN_720_INPUTS,
        }
    }

    pub fn input(self, name: &str) -> Option<&'static InputSpec> {
        self.inputs().iter().find(|i| i.name == name)
    }

    /// The preset table behind a preset node.
    pub const fn preset_table(self) -> Option<PresetTable> {
        match self {
            Self::SdxlDimensionsSimple => Some(PresetTable::Sdxl),
            Self::WanDimensions => Some(PresetTable::Wan),
            Self::WanDimensions720 => Some(PresetTable::Wan720),
            Self::BetterImageDimensions | Self::PureRatio => None,
        }
    }
}

impl FromStr for NodeKind {
    type Err = LookupError;

    /// Look up by class name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .into_iter()
            .find(|n| n.class_name() == s)
            .ok_or(LookupError::Node)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
