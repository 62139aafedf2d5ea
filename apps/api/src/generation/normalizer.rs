//! Template Normalizer — converts raw provider text into a complete
//! `FlyerTemplate`.
//!
//! Flow: brace-span extraction → JSON parse → field-by-field default fill.
//! Total: callers always receive either a fully-populated record or a typed
//! error, never a partial template.

use serde_json::Value;
use thiserror::Error;

use crate::errors::AppError;
use crate::models::template::{
    FlyerTemplate, StoreInfo, DEFAULT_CATCH_COPY, DEFAULT_COLOR_THEME, DEFAULT_DESCRIPTION,
    DEFAULT_IMAGE_AREA,
};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("no JSON object found in provider output")]
    NoJsonObject,

    #[error("failed to parse generated JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<NormalizeError> for AppError {
    fn from(e: NormalizeError) -> Self {
        match e {
            NormalizeError::NoJsonObject => AppError::GenerationFormat,
            NormalizeError::Parse(err) => AppError::GenerationParse(err.to_string()),
        }
    }
}

/// Extracts the substring from the first `{` to the last `}` in `raw`.
///
/// Providers routinely wrap the JSON object in prose or code fences; the
/// greedy span tolerates both. When the text contains multiple brace-delimited
/// spans the match deliberately covers all of them — best-effort acceptance
/// over strict scanning.
pub fn extract_json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Normalizes raw provider output into a complete `FlyerTemplate`.
///
/// A field is replaced by its default when it is absent, an empty string, or
/// not a string at all. `storeInfo` may be missing entirely; its sub-fields
/// then all default to empty strings. Present, well-typed fields pass through
/// unchanged — including `imageArea`/`colorTheme` values outside the known
/// palette.
pub fn normalize_template(raw: &str) -> Result<FlyerTemplate, NormalizeError> {
    let span = extract_json_span(raw).ok_or(NormalizeError::NoJsonObject)?;
    let parsed: Value = serde_json::from_str(span)?;

    let store = parsed.get("storeInfo");

    Ok(FlyerTemplate {
        image_area: string_or(&parsed, "imageArea", DEFAULT_IMAGE_AREA),
        catch_copy: string_or(&parsed, "catchCopy", DEFAULT_CATCH_COPY),
        description: string_or(&parsed, "description", DEFAULT_DESCRIPTION),
        store_info: StoreInfo {
            name: nested_string_or_empty(store, "name"),
            address: nested_string_or_empty(store, "address"),
            hours: nested_string_or_empty(store, "hours"),
            tel: nested_string_or_empty(store, "tel"),
            access: nested_string_or_empty(store, "access"),
        },
        color_theme: string_or(&parsed, "colorTheme", DEFAULT_COLOR_THEME),
    })
}

fn string_or(value: &Value, key: &str, default: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => default.to_string(),
    }
}

fn nested_string_or_empty(value: Option<&Value>, key: &str) -> String {
    match value.and_then(|v| v.get(key)) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}
