// Wire types for the directory service.
//
// Property records are deliberately loose: beyond `images`, whatever the
// service sends is carried through untouched so the display layer can pick
// up new fields without a client release.

use serde::{Deserialize, Serialize};

/// A single content item as returned by the directory service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Image URLs in display order.
    #[serde(default)]
    pub images: Vec<String>,

    /// Every other field of the record, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response envelope of `GET /properties`.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertiesResponse {
    pub properties: Vec<PropertyRecord>,
}

/// Response of `GET /configuration`.
///
/// All fields are optional -- the service only sends what differs from the
/// display's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationResponse {
    pub branch_id: Option<u64>,
    pub tv_id: Option<String>,
    pub name: Option<String>,
    /// Dwell time per property, in seconds.
    pub duration: Option<u64>,
    /// Resync period, in seconds.
    pub refresh: Option<u64>,
}
