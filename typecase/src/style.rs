// Copyright 2026 the Typecase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The text style record handed across the host boundary.

use crate::attributes::{FontStyle, FontWeight, TextAlign};
use crate::error::StyleError;
use core::fmt;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// Font size used when a style does not specify one.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Symbolic description of how a run of text should look.
///
/// The host hands these across as untyped camelCase JSON records; the
/// [`Deserialize`] impl applies the defaults and keyword fallbacks below.
/// Unrecognized `fontWeight` keywords degrade to [`FontWeight::NORMAL`] and
/// unrecognized `fontStyle` values to upright, but a `fontWeight` that is
/// not a string at all is rejected outright (see [`StyleError`]).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextStyle {
    /// Requested family name. Missing, empty and whitespace-only values all
    /// resolve to the system font.
    pub font_family: Option<String>,
    /// Requested weight class.
    #[serde(deserialize_with = "deserialize_weight")]
    pub font_weight: FontWeight,
    /// Requested slope.
    #[serde(deserialize_with = "deserialize_style")]
    pub font_style: FontStyle,
    /// Font size in layout units.
    pub font_size: f32,
    /// Per-line height override. When absent, line height is derived from
    /// the metrics provider and is not pixel-exact across families.
    pub line_height: Option<f32>,
    /// Extra advance added to every character (not per gap).
    pub letter_spacing: f32,
    /// Render-time alignment. Never affects measurement.
    #[serde(deserialize_with = "deserialize_align")]
    pub text_align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
            font_size: DEFAULT_FONT_SIZE,
            line_height: None,
            letter_spacing: 0.0,
            text_align: TextAlign::Left,
        }
    }
}

impl TextStyle {
    /// Constructs a style from a host JSON record.
    ///
    /// ```
    /// use serde_json::json;
    /// use typecase::{FontWeight, TextStyle};
    ///
    /// let style = TextStyle::from_json(&json!({
    ///     "fontFamily": "Helvetica",
    ///     "fontWeight": "bold",
    ///     "fontSize": 24,
    /// }))
    /// .unwrap();
    /// assert_eq!(style.font_weight, FontWeight::BOLD);
    ///
    /// // A numeric weight is a contract violation, not a fallback case.
    /// assert!(TextStyle::from_json(&json!({ "fontWeight": 300 })).is_err());
    /// ```
    pub fn from_json(value: &serde_json::Value) -> Result<Self, StyleError> {
        Self::deserialize(value).map_err(|e| StyleError::InvalidArgument(e.to_string()))
    }
}

fn deserialize_weight<'de, D>(deserializer: D) -> Result<FontWeight, D::Error>
where
    D: Deserializer<'de>,
{
    struct WeightVisitor;

    impl Visitor<'_> for WeightVisitor {
        type Value = FontWeight;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a font weight string such as \"bold\" or \"500\"")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<FontWeight, E> {
            // Unknown keywords ("bolder") fall back to the regular weight.
            Ok(FontWeight::parse(s).unwrap_or_default())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<FontWeight, E> {
            Err(E::custom(format!(
                "fontWeight must be a string, got the number {v}"
            )))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<FontWeight, E> {
            Err(E::custom(format!(
                "fontWeight must be a string, got the number {v}"
            )))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<FontWeight, E> {
            Err(E::custom(format!(
                "fontWeight must be a string, got the number {v}"
            )))
        }
    }

    deserializer.deserialize_any(WeightVisitor)
}

fn deserialize_style<'de, D>(deserializer: D) -> Result<FontStyle, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    // Unknown values ("happy") request the upright face.
    Ok(FontStyle::parse(&s).unwrap_or_default())
}

fn deserialize_align<'de, D>(deserializer: D) -> Result<TextAlign, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(TextAlign::parse(&s).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{TextStyle, DEFAULT_FONT_SIZE};
    use crate::attributes::{FontStyle, FontWeight, TextAlign};
    use serde_json::json;

    #[test]
    fn empty_record_yields_defaults() {
        let style = TextStyle::from_json(&json!({})).unwrap();
        assert_eq!(style, TextStyle::default());
        assert_eq!(style.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(style.letter_spacing, 0.0);
    }

    #[test]
    fn camel_case_fields_deserialize() {
        let style = TextStyle::from_json(&json!({
            "fontFamily": "Georgia",
            "fontWeight": "700",
            "fontStyle": "italic",
            "fontSize": 24,
            "lineHeight": 29,
            "letterSpacing": 1.5,
            "textAlign": "center",
        }))
        .unwrap();
        assert_eq!(style.font_family.as_deref(), Some("Georgia"));
        assert_eq!(style.font_weight, FontWeight::BOLD);
        assert_eq!(style.font_style, FontStyle::Italic);
        assert_eq!(style.font_size, 24.0);
        assert_eq!(style.line_height, Some(29.0));
        assert_eq!(style.letter_spacing, 1.5);
        assert_eq!(style.text_align, TextAlign::Center);
    }

    #[test]
    fn numeric_weight_is_rejected() {
        let err = TextStyle::from_json(&json!({ "fontWeight": 300 })).unwrap_err();
        assert!(err.to_string().contains("must be a string"), "{err}");
    }

    #[test]
    fn unknown_weight_keyword_degrades_to_normal() {
        let style = TextStyle::from_json(&json!({ "fontWeight": "bolder" })).unwrap();
        assert_eq!(style.font_weight, FontWeight::NORMAL);
    }

    #[test]
    fn unknown_style_keyword_degrades_to_upright() {
        let style = TextStyle::from_json(&json!({ "fontStyle": "happy" })).unwrap();
        assert_eq!(style.font_style, FontStyle::Normal);
    }
}
