use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A scalar field as the API sends it.
///
/// The dataset behind the API was assembled from spreadsheets, so numeric
/// columns (`mahc`, `dan_so`, `dientich_km2`, coordinates) show up either as
/// JSON numbers or as strings, sometimes with junk like `"abc"` or `""`.
/// The value is kept as received and only interpreted on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Strict numeric view of the value.
    ///
    /// Strings are trimmed and parsed; empty, non-numeric and non-finite
    /// values yield `None` rather than zero.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }

    /// String form used for identifier comparison (`"1"` matches `1`).
    pub fn as_key(&self) -> String {
        match self {
            FieldValue::Number(_) => self.to_string(),
            FieldValue::Text(s) => s.trim().to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Whatever the API put in a field, decoded without ever failing.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
    Flag(bool),
    Other(IgnoredAny),
}

/// Lenient decoder for scalar fields: `null`, booleans, objects and arrays
/// become `None` instead of failing the surrounding record.
pub fn lenient_field<'de, D>(deserializer: D) -> Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(n)) => Some(FieldValue::Number(n)),
        Some(Loose::Text(s)) => Some(FieldValue::Text(s)),
        Some(Loose::Flag(_)) | Some(Loose::Other(_)) | None => None,
    })
}

/// Lenient decoder for text fields: numbers and booleans are kept as their
/// text, `null` and structured values become `None`.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(n)) => Some(FieldValue::Number(n).to_string()),
        Some(Loose::Text(s)) => Some(s),
        Some(Loose::Flag(b)) => Some(b.to_string()),
        Some(Loose::Other(_)) | None => None,
    })
}

/// Like `lenient_text`, with a missing value read as the empty string.
pub fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// Ordering used by table columns.
///
/// Missing values come first, numeric pairs compare numerically and
/// everything else falls back to case-insensitive text.
pub fn compare_fields(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => compare_text(&a.to_string(), &b.to_string()),
        },
    }
}

/// Case-insensitive comparison for free-text columns.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
