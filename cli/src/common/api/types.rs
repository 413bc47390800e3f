//! # NameGen API Payload Types
//!
//! File: cli/src/common/api/types.rs
//!
//! Request and response bodies of the NameGen REST API. Optional fields the
//! backend may omit are `Option` or `#[serde(default)]`, so older and newer
//! backends both decode.
//!
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateNamesPayload {
    pub description: String,
    pub count: u32,
    pub cultural_style: String,
    pub gender: String,
    pub age: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_api: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cache: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedName {
    pub id: String,
    pub name: String,
    pub meaning: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub features: Option<Map<String, Value>>,
    #[serde(default)]
    pub created_at: Option<f64>,
}

/// Response of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateNamesResponse {
    pub success: bool,
    #[serde(default)]
    pub names: Vec<GeneratedName>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub api_name: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub total_generated: Option<u64>,
    #[serde(default)]
    pub successfully_processed: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub generated_at: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendOptions {
    #[serde(default)]
    pub cultural_styles: Vec<String>,
    #[serde(default)]
    pub genders: Vec<String>,
    #[serde(default)]
    pub ages: Vec<String>,
    #[serde(default)]
    pub apis: Vec<String>,
}

/// `GET /options`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub success: bool,
    #[serde(default)]
    pub options: BackendOptions,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(default)]
    pub stats: Map<String, Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A saved favorite. An empty `id` asks the backend to assign one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoriteItem {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// `GET /favorites`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritesResponse {
    pub success: bool,
    #[serde(default)]
    pub items: Vec<FavoriteItem>,
}

/// `POST /favorites`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddFavoriteResponse {
    pub success: bool,
    pub item: FavoriteItem,
}

/// `DELETE /favorites`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteFavoritesResponse {
    pub success: bool,
    #[serde(default)]
    pub deleted: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub names: Vec<String>,
}

/// Query of `GET /history/list`; unset fields use the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub q: Option<String>,
}

impl HistoryQuery {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    /// `(name, value)` pairs with defaults applied.
    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            ("page", self.page.unwrap_or(Self::DEFAULT_PAGE).to_string()),
            (
                "page_size",
                self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE).to_string(),
            ),
            ("q", self.q.clone().unwrap_or_default()),
        ]
    }
}

/// Response of `GET /history/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub success: bool,
    #[serde(default)]
    pub items: Vec<HistoryItem>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
}
