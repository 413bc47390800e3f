//! # NameGen REST Client (`common::api`)
//!
//! File: cli/src/common/api/mod.rs
//!
//! ## Overview
//!
//! Typed wrappers over the NameGen backend's endpoints. Every call prefixes
//! the path with the resolver's *current* base address at the moment it is
//! sent, so an address adopted by discovery or a manual override applies to
//! the very next request.
//!
//! Failures come back from `common::network::http::request_json` already
//! classified. In particular a wrong or dead address shows up as
//! `NameGenError::NetworkUnavailable`; the API layer reports it and does not
//! start a new discovery on its own.
//!
//! | Method | Path            | Function            |
//! |--------|-----------------|---------------------|
//! | GET    | `/health`       | `fetch_health`      |
//! | GET    | `/options`      | `fetch_options`     |
//! | POST   | `/generate`     | `generate_names`    |
//! | GET    | `/stats`        | `fetch_stats`       |
//! | GET    | `/favorites`    | `get_favorites`     |
//! | POST   | `/favorites`    | `add_favorite`      |
//! | DELETE | `/favorites`    | `delete_favorites`  |
//! | GET    | `/history/list` | `get_history_list`  |
//!
use crate::common::network::http;
use crate::core::error::Result;
use crate::core::resolver::Resolver;
use anyhow::Context;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub mod types;

use types::*;

/// Client for the NameGen REST API.
#[derive(Clone)]
pub struct NameGenApi {
    client: Client,
    resolver: Arc<Resolver>,
    timeout: Duration,
}

impl NameGenApi {
    pub fn new(client: Client, resolver: Arc<Resolver>, timeout: Duration) -> Self {
        Self {
            client,
            resolver,
            timeout,
        }
    }

    pub fn resolver(&self) -> &Arc<Resolver> {
        &self.resolver
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolver.api_base_url(), path)
    }

    async fn call<T: DeserializeOwned>(&self, method: Method, url: &str, body: Option<Value>) -> Result<T> {
        debug!("API {} {}", method, url);
        let response = http::request_json(&self.client, method, url, body.as_ref(), self.timeout).await?;
        response.into_typed(url)
    }

    pub async fn fetch_health(&self) -> Result<HealthResponse> {
        self.call(Method::GET, &self.url("/health"), None).await
    }

    pub async fn fetch_options(&self) -> Result<OptionsResponse> {
        self.call(Method::GET, &self.url("/options"), None).await
    }

    pub async fn generate_names(&self, payload: &GenerateNamesPayload) -> Result<GenerateNamesResponse> {
        let body = serde_json::to_value(payload).context("Failed to encode generate request")?;
        self.call(Method::POST, &self.url("/generate"), Some(body)).await
    }

    pub async fn fetch_stats(&self) -> Result<StatsResponse> {
        self.call(Method::GET, &self.url("/stats"), None).await
    }

    pub async fn get_favorites(&self) -> Result<FavoritesResponse> {
        self.call(Method::GET, &self.url("/favorites"), None).await
    }

    pub async fn add_favorite(&self, item: &FavoriteItem) -> Result<AddFavoriteResponse> {
        let body = serde_json::to_value(item).context("Failed to encode favorite")?;
        self.call(Method::POST, &self.url("/favorites"), Some(body)).await
    }

    /// Deletes the given favorites in one request.
    pub async fn delete_favorites<S: AsRef<str>>(&self, ids: &[S]) -> Result<DeleteFavoritesResponse> {
        let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
        self.call(Method::DELETE, &self.url("/favorites"), Some(json!({ "ids": ids })))
            .await
    }

    pub async fn get_history_list(&self, query: &HistoryQuery) -> Result<HistoryPage> {
        let base = self.url("/history/list");
        let url = Url::parse_with_params(&base, query.params())
            .with_context(|| format!("Invalid history URL: {}", base))?;
        self.call(Method::GET, url.as_str(), None).await
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::network::candidates::CandidateSettings;
    use crate::common::network::discovery::{testing::ScriptedProbe, Discovery};
    use crate::common::storage::{MemoryStore, ServerPreference};
    use crate::common::system::{FixedPlatform, Platform};
    use crate::core::error::NameGenError;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// An API client whose resolver already points at `address`.
    async fn api_for(address: &str) -> NameGenApi {
        let resolver = Resolver::new(Discovery::new(
            Arc::new(ScriptedProbe::new().reachable(address)),
            ServerPreference::new(Arc::new(MemoryStore::new())),
            Arc::new(FixedPlatform(Platform::Other)),
            CandidateSettings::new(5000, Vec::new()),
        ));
        assert!(resolver.set_server_url(address).await);
        NameGenApi::new(
            http::build_client().unwrap(),
            Arc::new(resolver),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_fetch_health() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy",
                "timestamp": "2024-05-01T10:00:00",
                "version": "1.0.0"
            })))
            .mount(&mock)
            .await;

        let health = api_for(&mock.uri()).await.fetch_health().await.unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version.as_deref(), Some("1.0.0"));
    }

    #[tokio::test]
    async fn test_generate_names_posts_payload() {
        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate"))
            .and(body_json(json!({
                "description": "a calm scholar",
                "count": 2,
                "cultural_style": "chinese_traditional",
                "gender": "female",
                "age": "adult"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "names": [
                    {"id": "n1", "name": "林清", "meaning": "clear woods"},
                    {"id": "n2", "name": "沈默", "meaning": "quiet depth", "source": "corpus"}
                ],
                "api_name": "mock",
                "total_generated": 2
            })))
            .expect(1)
            .mount(&mock)
            .await;

        let payload = GenerateNamesPayload {
            description: "a calm scholar".into(),
            count: 2,
            cultural_style: "chinese_traditional".into(),
            gender: "female".into(),
            age: "adult".into(),
            preferred_api: None,
            use_cache: None,
        };
        let response = api_for(&mock.uri()).await.generate_names(&payload).await.unwrap();
        assert!(response.success);
        assert_eq!(response.names.len(), 2);
        assert_eq!(response.names[1].source.as_deref(), Some("corpus"));
        assert_eq!(response.total_generated, Some(2));
    }

    #[tokio::test]
    async fn test_options_error_surfaces_server_message() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/options"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"success": false, "error": "options unavailable"})),
            )
            .mount(&mock)
            .await;

        let err = api_for(&mock.uri()).await.fetch_options().await.unwrap_err();
        assert_eq!(err.to_string(), "options unavailable");
    }

    #[tokio::test]
    async fn test_delete_favorites_sends_id_list() {
        let mock = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/favorites"))
            .and(body_json(json!({"ids": ["f_1", "f_2"]})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "deleted": ["f_1", "f_2"]})),
            )
            .expect(1)
            .mount(&mock)
            .await;

        let response = api_for(&mock.uri())
            .await
            .delete_favorites(&["f_1", "f_2"])
            .await
            .unwrap();
        assert_eq!(response.deleted, vec!["f_1", "f_2"]);
    }

    #[tokio::test]
    async fn test_history_list_applies_defaults_and_encodes_query() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/history/list"))
            .and(query_param("page", "1"))
            .and(query_param("page_size", "10"))
            .and(query_param("q", "山 水"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "page": 1,
                "page_size": 10,
                "total": 1,
                "items": [{"id": "h1", "description": "山 水", "count": 3, "time": "t", "names": ["a"]}]
            })))
            .expect(1)
            .mount(&mock)
            .await;

        let query = HistoryQuery {
            q: Some("山 水".into()),
            ..Default::default()
        };
        let page = api_for(&mock.uri()).await.get_history_list(&query).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].names, vec!["a"]);
    }

    #[tokio::test]
    async fn test_dead_backend_is_network_unavailable() {
        // Bind then drop a listener to get a port nothing is listening on.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let api = api_for(&format!("http://127.0.0.1:{}", port)).await;

        let err = api.fetch_stats().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NameGenError>(),
            Some(NameGenError::NetworkUnavailable(_))
        ));
    }
}
