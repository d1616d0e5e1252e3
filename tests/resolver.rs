//! End-to-end checks of every resolver operation against the host's
//! option lists.
//!
//! Expected values for pure-ratio scaling come from the multiplier table:
//! `ceil(term × multiplier × scale)` per axis.

use zendims::*;

// ============================================================
// Pure-ratio scaling: full table at scale 1.0
// ============================================================

/// (label, SDXL size, SD 1.5 size)
const SCALE_TABLE: [(&str, (u32, u32), (u32, u32)); 9] = [
    ("1:1", (1024, 1024), (512, 512)),
    ("2:3", (836, 1254), (418, 627)),
    ("4:5", (915, 1144), (458, 572)),
    ("4:7", (768, 1344), (384, 672)),
    ("5:12", (640, 1536), (320, 768)),
    ("7:9", (896, 1152), (448, 576)),
    ("9:16", (810, 1440), (540, 960)),
    ("9:21", (670, 1564), (335, 782)),
    ("13:19", (832, 1216), (416, 608)),
];

#[test]
fn scale_table_at_unit_scale() {
    for (label, sdxl, sd15) in SCALE_TABLE {
        let ratio: AspectRatio = label.parse().unwrap();
        assert_eq!(
            scale_ratio(ratio, 1.0, ModelFamily::Sdxl, Orientation::Default).map(Size::to_tuple),
            Ok(sdxl),
            "{label} SDXL"
        );
        assert_eq!(
            scale_ratio(ratio, 1.0, ModelFamily::Sd15, Orientation::Default).map(Size::to_tuple),
            Ok(sd15),
            "{label} SD 1.5"
        );
    }
}

#[test]
fn scale_table_covers_every_scalable_label() {
    let labels: Vec<&str> = SCALE_TABLE.iter().map(|(l, _, _)| *l).collect();
    assert_eq!(labels, AspectRatio::SCALABLE_LABELS);
}

#[test]
fn sdxl_scaled_ratios_hit_sdxl_presets() {
    // Ratios whose SDXL multiplier reproduces a preset exactly.
    for label in ["1:1", "7:9", "13:19", "4:7", "5:12"] {
        let ratio: AspectRatio = label.parse().unwrap();
        let size = ratio
            .scale(1.0, ModelFamily::Sdxl, Orientation::Default)
            .unwrap();
        assert!(
            PresetTable::Sdxl.contains(&size.to_string()),
            "{label} → {size} not an SDXL preset"
        );
    }
}

#[test]
fn scale_from_host_strings() {
    let ratio: AspectRatio = "9:16".parse().unwrap();
    let model: ModelFamily = "SD 1.5".parse().unwrap();
    let order: Orientation = "swapped (height,width)".parse().unwrap();
    assert_eq!(
        scale_ratio(ratio, 1.5, model, order),
        Ok(Size::new(1440, 810))
    );
}

// ============================================================
// Ratio-constrained fit
// ============================================================

#[test]
fn fit_example() {
    assert_eq!(
        Fit::new(1024, 1024)
            .aspect("4:5".parse().unwrap())
            .enforce("width".parse().unwrap())
            .orientation("default (width,height)".parse().unwrap())
            .compute(),
        Ok(Size::new(1024, 1280))
    );
}

#[test]
fn fit_every_label_both_axes() {
    for aspect in AspectRatio::ALL {
        let by_width = aspect
            .fit(1000, 700, Axis::Width, Orientation::Default)
            .unwrap();
        let by_height = aspect
            .fit(1000, 700, Axis::Height, Orientation::Default)
            .unwrap();
        match aspect.ratio() {
            None => {
                assert_eq!(by_width, Size::new(1000, 700));
                assert_eq!(by_height, Size::new(1000, 700));
            }
            Some(r) => {
                assert_eq!(by_width.width, 1000);
                assert_eq!(by_width.height, 1000 / r.num() * r.den(), "{aspect}");
                assert_eq!(by_height.height, 700);
                assert_eq!(by_height.width, 700 / r.den() * r.num(), "{aspect}");
            }
        }
    }
}

#[test]
fn fit_exact_when_multiple_of_term() {
    // 1248 = 13 × 96, so the dependent axis is exact.
    let size = AspectRatio::R13x19
        .fit(1248, 64, Axis::Width, Orientation::Default)
        .unwrap();
    assert_eq!(size, Size::new(1248, 1824));
    assert_eq!(
        u64::from(size.width) * 19,
        u64::from(size.height) * 13
    );
}

#[test]
fn fit_with_parsed_ratio() {
    let r: Ratio = "16:9".parse().unwrap();
    assert_eq!(
        fit_ratio(1920, 64, Some(r), Axis::Width, Orientation::Default),
        Ok(Size::new(1920, 1080))
    );
    assert_eq!(
        fit_ratio(1920, 64, Some(r.inverse()), Axis::Width, Orientation::Default),
        Ok(Size::new(1920, 3408))
    );
}

// ============================================================
// Presets
// ============================================================

#[test]
fn preset_example() {
    assert_eq!(
        lookup_preset(PresetTable::Wan, "832 x 480", Orientation::Default),
        Ok(Size::new(832, 480))
    );
    assert_eq!(
        lookup_preset(PresetTable::Wan, "832 x 480", Orientation::Swapped),
        Ok(Size::new(480, 832))
    );
}

#[test]
fn every_preset_resolves_in_both_orders() {
    for table in PresetTable::ALL {
        for entry in table.entries() {
            let size = lookup_preset(table, entry, Orientation::Default).unwrap();
            let swapped = lookup_preset(table, entry, Orientation::Swapped).unwrap();
            assert_eq!(size.to_string(), *entry);
            assert_eq!(swapped, size.transposed());
        }
    }
}

#[test]
fn preset_errors() {
    assert_eq!(
        lookup_preset(PresetTable::Sdxl, "1024 x 1023", Orientation::Default),
        Err(DimensionError::Lookup(LookupError::Preset))
    );
    assert_eq!(
        lookup_preset(PresetTable::Wan, "832x480", Orientation::Default),
        Err(DimensionError::Parse(ParseError::TokenCount))
    );
    assert_eq!(
        lookup_preset(PresetTable::Wan, "832 x abc", Orientation::Swapped),
        Err(DimensionError::Parse(ParseError::NotANumber))
    );
    assert_eq!(
        parse_dimensions("1024 by 1024"),
        Err(ParseError::TokenCount)
    );
    assert_eq!(
        parse_dimensions("1024 x big"),
        Err(ParseError::NotANumber)
    );
}

// ============================================================
// Fixed-base expansion
// ============================================================

#[test]
fn expansion_at_base_unit() {
    for (ratio, expected) in [("13:19", "832 x 1216"), ("7:9", "448 x 576"), ("4:7", "256 x 448")] {
        let r: Ratio = ratio.parse().unwrap();
        assert_eq!(
            expand_ratio(r, 1.0, Orientation::Default).map(|s| s.to_string()),
            Ok(expected.to_string())
        );
    }
    let r: Ratio = "7:9".parse().unwrap();
    assert_eq!(
        expand_ratio(r, 2.0, Orientation::Default),
        Ok(Size::new(896, 1152))
    );
}

// ============================================================
// Registration
// ============================================================

#[test]
fn registry_names() {
    let names: Vec<(&str, &str)> = REGISTRY
        .iter()
        .map(|n| (n.class_name(), n.display_name()))
        .collect();
    assert_eq!(
        names,
        [
            ("BetterImageDimensions", "Better Image Dimensions"),
            ("PureRatio", "Dimensions by Ratio"),
            ("SDXLDimensions_simple", "sdxl Dimensions"),
            ("SDXLDimensions", "wan Dimensions"),
            ("WANDimensions_720", "wan Dimensions 720"),
        ]
    );
    assert_eq!(zendims::node::CATEGORY, "BetterDimensions");
    assert_eq!(zendims::node::RETURN_NAMES, ["width", "height"]);
}

#[test]
fn every_combo_option_parses() {
    for node in REGISTRY {
        for input in node.inputs() {
            let InputKind::Combo(options) = input.kind else {
                continue;
            };
            for option in options {
                let ok = match input.name {
                    "ratio" => option.parse::<AspectRatio>().is_ok(),
                    "enforce_dimension" => option.parse::<Axis>().is_ok(),
                    "model" => option.parse::<ModelFamily>().is_ok(),
                    "order" => option.parse::<Orientation>().is_ok(),
                    "dimensions" => node
                        .preset_table()
                        .is_some_and(|t| t.resolve(option, Orientation::Default).is_ok()),
                    other => panic!("unexpected combo input {other}"),
                };
                assert!(ok, "{node}: {} option {option:?}", input.name);
            }
        }
    }
}
