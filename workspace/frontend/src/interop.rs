//! Passing Rust values to the global JS widget libraries.

use serde::Serialize;
use wasm_bindgen::JsValue;

/// Serializes into plain JS objects and arrays.
///
/// The default serializer turns maps into ES `Map`s, which Plotly and
/// Leaflet ignore.
pub fn to_js<T>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error>
where
    T: Serialize + ?Sized,
{
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Escapes text for APIs that take an HTML string, such as Leaflet popups.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
