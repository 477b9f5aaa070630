//! Property-based invariant tests for the customization blob.
//!
//! 1. Any valid settings survive encode/decode unchanged.
//! 2. Decoding never panics on arbitrary input.

use proptest::prelude::*;
use webstar_layout::{AspectTag, LayoutMode, LayoutSettings, MAX_RADIUS_PX};
use webstar_web::customization::{from_json, to_json};

fn settings() -> impl Strategy<Value = LayoutSettings> {
    (
        1u16..=12,
        0.0f64..64.0,
        0.0f64..=MAX_RADIUS_PX,
        prop::bool::ANY,
        0usize..AspectTag::ALL.len(),
        "[a-z]{1,12}",
    )
        .prop_map(|(columns, gap, radius, uniform, aspect, theme)| {
            let mode = if uniform { LayoutMode::Uniform } else { LayoutMode::Masonry };
            LayoutSettings::new()
                .columns(columns)
                .gap(gap)
                .radius(radius)
                .mode(mode)
                .global_aspect(AspectTag::ALL[aspect])
                .theme(theme)
        })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Valid settings round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn valid_settings_round_trip(s in settings()) {
        let json = to_json(&s).unwrap();
        prop_assert_eq!(from_json(&json).unwrap(), s);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. No panics on arbitrary input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_input_never_panics(s in ".{0,80}") {
        let _ = from_json(&s);
    }
}
