use stylistic_scroll::{generate, generate_scoped, to_translucent, ScrollbarColors, StyleOptions};

const HEX_SAMPLES: &[(&str, (u8, u8, u8))] = &[
    ("#000000", (0, 0, 0)),
    ("#ffffff", (255, 255, 255)),
    ("#6366f1", (99, 102, 241)),
    ("#0a0B0c", (10, 11, 12)),
    ("#f00", (255, 0, 0)),
    ("#1a2", (17, 170, 34)),
    ("e5e7eb", (229, 231, 235)),
    ("9cf", (153, 204, 255)),
];

#[test]
fn hex_channels_are_exact_for_every_sample() {
    for &(hex, (r, g, b)) in HEX_SAMPLES {
        for opacity in [0.0, 0.1, 0.5, 0.75, 0.99] {
            assert_eq!(
                to_translucent(hex, opacity),
                format!("rgba({r}, {g}, {b}, {opacity})"),
                "{hex} @ {opacity}"
            );
        }
    }
}

#[test]
fn named_colors_are_a_documented_passthrough() {
    for name in ["red", "rebeccapurple", "currentColor"] {
        assert_eq!(to_translucent(name, 0.4), name);
    }
}

#[test]
fn options_from_json_feed_generation() {
    let opts = StyleOptions::from_json(
        r##"{"color": "#6366f1", "trackBackground": "#e5e7eb", "trackOpacity": 0.5}"##,
    )
    .unwrap();
    let css = generate(&opts);
    assert!(css.contains("scrollbar-color: rgba(99, 102, 241, 0.6) rgba(229, 231, 235, 0.5);"));
}

#[test]
fn hide_with_every_other_field_set() {
    let opts = StyleOptions::from_json(
        r##"{
            "hideScrollbar": true,
            "color": "#abcdef",
            "width": "20px",
            "thumbRadius": "4px",
            "trackBackground": "#010203",
            "thumbOpacity": 0.2,
            "thumbHoverOpacity": 0.3,
            "trackOpacity": 0.4
        }"##,
    )
    .unwrap();
    let css = generate(&opts);

    assert!(css.contains("scrollbar-width: none"));
    assert!(css.contains("-ms-overflow-style: none"));
    assert!(css.contains("*::-webkit-scrollbar {\n  display: none;"));
    for leaked in ["#abcdef", "20px", "4px", "#010203", "rgba(", "border-radius"] {
        assert!(!css.contains(leaked), "hide block leaked {leaked}");
    }
}

#[test]
fn opaque_thumb_and_translucent_hover() {
    let opts = StyleOptions {
        color: "#ff0000".into(),
        thumb_opacity: 1.0,
        ..Default::default()
    };
    assert_eq!(
        ScrollbarColors::derive(&opts),
        ScrollbarColors {
            thumb: "#ff0000".into(),
            thumb_hover: "rgba(255, 0, 0, 0.9)".into(),
            track: "transparent".into(),
        }
    );
}

#[test]
fn equal_opacity_hover_falls_back_to_raw_color() {
    let opts = StyleOptions {
        color: "#112233".into(),
        thumb_opacity: 0.5,
        thumb_hover_opacity: 0.5,
        ..Default::default()
    };
    let css = generate(&opts);
    assert!(css.contains("*::-webkit-scrollbar-thumb {\n  background: rgba(17, 34, 51, 0.5);"));
    assert!(css.contains("*::-webkit-scrollbar-thumb:hover {\n  background: #112233;\n}"));
}

#[test]
fn global_and_scoped_forms_differ_only_in_selector() {
    let opts = StyleOptions {
        color: "rgb(10, 20, 30)".into(),
        width: "6px".into(),
        ..Default::default()
    };
    let global = generate(&opts);
    let scoped = generate_scoped(&opts, "feed");
    let rescoped = global
        .replace("*::", ".feed::")
        .replace("\n* {", "\n.feed {");
    assert_eq!(rescoped, scoped);
}
