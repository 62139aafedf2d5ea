use serde::{Deserialize, Serialize};

/// Image placements the prompt instructs the provider to choose from.
/// The normalizer does NOT enforce membership — an out-of-set value emitted
/// by the provider passes through unchanged.
pub const IMAGE_AREAS: [&str; 4] = ["top-half", "full-bleed", "left-half", "right-half"];

pub const DEFAULT_IMAGE_AREA: &str = "top-half";
pub const DEFAULT_CATCH_COPY: &str = "キャッチコピー";
pub const DEFAULT_DESCRIPTION: &str = "説明文";
pub const DEFAULT_COLOR_THEME: &str = "#3B82F6";

/// The normalized flyer record handed to the presentation layer.
///
/// Every field is always present and string-typed after normalization —
/// a partially-populated template is never surfaced. The record is ephemeral
/// UI-local state: built once per generation request, edited client-side,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyerTemplate {
    pub image_area: String,
    pub catch_copy: String,
    pub description: String,
    pub store_info: StoreInfo,
    pub color_theme: String,
}

/// Store contact block. Sub-fields default to empty strings when the user's
/// request did not mention them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    pub address: String,
    pub hours: String,
    pub tel: String,
    pub access: String,
}

impl Default for FlyerTemplate {
    fn default() -> Self {
        Self {
            image_area: DEFAULT_IMAGE_AREA.to_string(),
            catch_copy: DEFAULT_CATCH_COPY.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            store_info: StoreInfo::default(),
            color_theme: DEFAULT_COLOR_THEME.to_string(),
        }
    }
}
