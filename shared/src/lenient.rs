//! Forgiving serde helpers for documents whose shape is only loosely enforced.
//!
//! Stored documents are edited by hand as often as through the dashboard, so a
//! field may be missing, `null`, or of the wrong JSON type. Each helper maps
//! whatever it finds onto a usable value instead of failing the whole record.
//! Pair them with `#[serde(default)]` so absent fields take the same path.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Score used when a document carries no usable score.
pub const DEFAULT_SCORE: u8 = 50;

/// Any scalar becomes its string form; `null`, arrays and objects become "".
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// A list of strings.
///
/// A lone string is promoted to a one-element list. Non-string array entries
/// other than numbers are dropped. Anything else yields an empty list.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}

/// A trimmed category/type label. Blank or non-string values mean "no label".
pub fn optional_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    })
}

/// A 0..=100 rating. Numeric strings are accepted; out-of-range values are clamped.
pub fn score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(raw
        .filter(|v| v.is_finite())
        .map(clamp_score)
        .unwrap_or(DEFAULT_SCORE))
}

pub fn default_score() -> u8 {
    DEFAULT_SCORE
}

pub fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "string")]
        text: String,
        #[serde(default, deserialize_with = "string_list")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "optional_label")]
        label: Option<String>,
        #[serde(default = "default_score", deserialize_with = "score")]
        score: u8,
    }

    fn parse(value: serde_json::Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let p = parse(json!({}));
        assert_eq!(p.text, "");
        assert!(p.tags.is_empty());
        assert_eq!(p.label, None);
        assert_eq!(p.score, DEFAULT_SCORE);
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let p = parse(json!({"text": null, "tags": null, "label": null, "score": null}));
        assert_eq!(p.text, "");
        assert!(p.tags.is_empty());
        assert_eq!(p.label, None);
        assert_eq!(p.score, DEFAULT_SCORE);
    }

    #[test]
    fn test_string_list_shapes() {
        assert_eq!(parse(json!({"tags": ["Rust", "Go"]})).tags, vec!["Rust", "Go"]);
        assert_eq!(parse(json!({"tags": "Rust"})).tags, vec!["Rust"]);
        assert!(parse(json!({"tags": "   "})).tags.is_empty());
        assert!(parse(json!({"tags": {"a": 1}})).tags.is_empty());
        assert_eq!(parse(json!({"tags": ["a", null, 3, {"x": 1}]})).tags, vec!["a", "3"]);
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(parse(json!({"text": 2024})).text, "2024");
        assert_eq!(parse(json!({"text": true})).text, "true");
        assert_eq!(parse(json!({"text": ["x"]})).text, "");
    }

    #[test]
    fn test_blank_label_is_none() {
        assert_eq!(parse(json!({"label": ""})).label, None);
        assert_eq!(parse(json!({"label": 7})).label, None);
        assert_eq!(parse(json!({"label": "Photography"})).label.as_deref(), Some("Photography"));
        assert_eq!(parse(json!({"label": "  Web Development "})).label.as_deref(), Some("Web Development"));
    }

    #[test]
    fn test_score_parsing_and_clamping() {
        assert_eq!(parse(json!({"score": 85})).score, 85);
        assert_eq!(parse(json!({"score": "70"})).score, 70);
        assert_eq!(parse(json!({"score": 140})).score, 100);
        assert_eq!(parse(json!({"score": -3})).score, 0);
        assert_eq!(parse(json!({"score": 49.6})).score, 50);
        assert_eq!(parse(json!({"score": "lots"})).score, DEFAULT_SCORE);
    }
}
