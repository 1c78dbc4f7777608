// Copyright 2026 the Typecase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end resolution of host-shaped style records, mirroring the
//! behavior of the reference platform's face lookup.

use serde_json::{json, Value};
use typecase::{Catalog, TextStyle};

fn find_face(style: Value) -> String {
    let catalog = Catalog::builtin();
    let style = TextStyle::from_json(&style).expect("style record should deserialize");
    catalog.resolve(&style).face.name().to_owned()
}

/// Asserts that a face is a system face of the given variant with the given
/// suffix. System face names are provider-owned and have drifted across
/// platform revisions, so this checks structure instead of full literals.
fn assert_system_face(face: &str, variant: &str, suffix: Option<&str>) {
    assert!(face.starts_with('.'), "system face expected, got {face}");
    let (base, face_suffix) = match face[1..].find('-') {
        Some(i) => (&face[..i + 1], Some(&face[i + 2..])),
        None => (face, None),
    };
    assert!(base.contains(variant), "wanted {variant} variant, got {face}");
    match (suffix, face_suffix) {
        (Some(want), Some(got)) => assert_eq!(got, want, "suffix of {face}"),
        (None, None) => {}
        // Some platform revisions spell the default face with an explicit
        // Regular suffix.
        (None, Some("Regular")) => {}
        _ => panic!("wanted suffix {suffix:?}, got {face}"),
    }
}

#[test]
fn regular_fonts_resolve_by_name() {
    assert_eq!(find_face(json!({ "fontFamily": "Impact" })), "Impact");
    assert_eq!(
        find_face(json!({ "fontFamily": "Impact", "fontStyle": "italic" })),
        "Impact"
    );
}

#[test]
fn families_with_variants_pick_the_right_face() {
    assert_eq!(
        find_face(json!({ "fontFamily": "Helvetica", "fontWeight": "bold" })),
        "Helvetica-Bold"
    );
    assert_eq!(
        find_face(json!({ "fontFamily": "Helvetica", "fontStyle": "italic" })),
        "Helvetica-Oblique"
    );
    assert_eq!(
        find_face(json!({ "fontFamily": "Helvetica", "fontStyle": "oblique" })),
        "Helvetica-Oblique"
    );
    assert_eq!(
        find_face(json!({ "fontFamily": "Helvetica", "fontWeight": "300" })),
        "Helvetica-Light"
    );
    assert_eq!(
        find_face(json!({ "fontFamily": "Helvetica", "fontWeight": "300", "fontStyle": "italic" })),
        "Helvetica-LightOblique"
    );
}

#[test]
fn missing_weights_use_the_next_available() {
    for weight in ["900", "600", "500"] {
        assert_eq!(
            find_face(json!({ "fontFamily": "Helvetica", "fontWeight": weight })),
            "Helvetica-Bold",
            "weight {weight}"
        );
    }
    assert_eq!(
        find_face(json!({ "fontFamily": "Helvetica", "fontWeight": "200" })),
        "Helvetica-Light"
    );
}

#[test]
fn system_font_uses_the_text_variant() {
    for style in [
        json!({ "fontFamily": ".AppleSystemUIFont" }),
        json!({ "fontFamily": "System" }),
        json!({ "fontFamily": "System", "fontSize": 12 }),
    ] {
        assert_system_face(&find_face(style), "Text", None);
    }
    assert_system_face(
        &find_face(json!({ "fontFamily": "System", "fontWeight": "bold" })),
        "Text",
        Some("Bold"),
    );
    assert_system_face(
        &find_face(json!({ "fontFamily": "System", "fontStyle": "italic" })),
        "Text",
        Some("Italic"),
    );
    assert_system_face(
        &find_face(json!({ "fontFamily": "System", "fontWeight": "bold", "fontStyle": "italic" })),
        "Text",
        Some("BoldItalic"),
    );
    assert_system_face(
        &find_face(json!({ "fontFamily": "System", "fontStyle": "oblique" })),
        "Text",
        Some("Italic"),
    );
}

#[test]
fn large_sizes_switch_to_the_display_variant() {
    for style in [
        json!({ "fontFamily": ".AppleSystemUIFont", "fontSize": 20 }),
        json!({ "fontFamily": "System", "fontSize": 20 }),
    ] {
        assert_system_face(&find_face(style), "Display", None);
    }
}

#[test]
fn missing_fonts_default_to_the_system_font() {
    assert_system_face(&find_face(json!({ "fontFamily": "MissingFont" })), "Text", None);
    assert_system_face(
        &find_face(json!({ "fontFamily": "MissingFont", "fontSize": 20 })),
        "Display",
        None,
    );
}

#[test]
fn missing_and_blank_families_default_to_the_system_font() {
    assert_system_face(&find_face(json!({})), "Text", None);
    assert_system_face(&find_face(json!({ "fontFamily": "" })), "Text", None);
}

#[test]
fn numeric_weight_is_a_contract_violation() {
    let err = TextStyle::from_json(&json!({ "fontWeight": 300 })).unwrap_err();
    assert!(err.to_string().contains("fontWeight"), "{err}");
}

#[test]
fn invalid_keywords_degrade_to_the_regular_face() {
    assert_eq!(
        find_face(json!({ "fontFamily": "Helvetica", "fontWeight": "bolder" })),
        "Helvetica"
    );
    assert_eq!(
        find_face(json!({ "fontFamily": "Helvetica", "fontStyle": "happy" })),
        "Helvetica"
    );
}
