//! # NameGen HTTP Request Primitive
//!
//! File: cli/src/common/network/http.rs
//!
//! ## Overview
//!
//! The one generic "send a request, parse JSON, classify the status" helper
//! that both the health prober and the REST surface sit on. Each call carries
//! its own timeout, so the prober can use a short one and ordinary API calls
//! a long one while sharing a single `reqwest::Client`.
//!
//! Classification:
//! - transport failure or timeout → `NameGenError::NetworkUnavailable`
//! - non-2xx status → `NameGenError::HttpStatus`, with the message taken from
//!   the body's `error` field when present, else `Request failed (<status>)`
//! - 2xx with a body that is not JSON → `NameGenError::Decode`
//! - 2xx with JSON (or an empty body, read as `null`) → `JsonResponse`
//!
use crate::core::error::{NameGenError, Result};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

/// A successful (2xx) response with its parsed JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResponse {
    pub status: u16,
    pub body: Value,
}

impl JsonResponse {
    /// Deserializes the body into a typed payload.
    pub fn into_typed<T: DeserializeOwned>(self, url: &str) -> Result<T> {
        serde_json::from_value(self.body).map_err(|e| {
            NameGenError::Decode {
                url: url.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Builds the shared HTTP client. Timeouts are applied per request.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(concat!("namegen/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Sends one request and classifies the outcome.
pub async fn request_json(
    client: &Client,
    method: Method,
    url: &str,
    body: Option<&Value>,
    timeout: Duration,
) -> Result<JsonResponse> {
    trace!("{} {} (timeout {:?})", method, url, timeout);
    let mut request = client.request(method.clone(), url).timeout(timeout);
    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request.send().await.map_err(|e| {
        debug!("{} {} failed: {}", method, url, e);
        NameGenError::NetworkUnavailable(e.to_string())
    })?;
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| NameGenError::NetworkUnavailable(e.to_string()))?;

    let parsed: std::result::Result<Value, _> = if bytes.is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_slice(&bytes)
    };

    if !status.is_success() {
        let message = parsed
            .ok()
            .as_ref()
            .and_then(|v| v.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()));
        debug!("{} {} -> {}: {}", method, url, status, message);
        return Err(NameGenError::HttpStatus {
            status: status.as_u16(),
            message,
        }
        .into());
    }

    let body = parsed.map_err(|e| NameGenError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    Ok(JsonResponse {
        status: status.as_u16(),
        body,
    })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_success_returns_json_body() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&mock)
            .await;

        let client = build_client().unwrap();
        let url = format!("{}/stats", mock.uri());
        let response = request_json(&client, Method::GET, &url, None, TIMEOUT)
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, json!({"success": true}));
    }

    #[tokio::test]
    async fn test_posts_json_body() {
        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/favorites"))
            .and(body_json(json!({"id": "1"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&mock)
            .await;

        let client = build_client().unwrap();
        let url = format!("{}/favorites", mock.uri());
        let response = request_json(&client, Method::POST, &url, Some(&json!({"id": "1"})), TIMEOUT)
            .await
            .unwrap();
        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn test_error_status_uses_server_message() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/options"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"success": false, "error": "bad input"})),
            )
            .mount(&mock)
            .await;

        let client = build_client().unwrap();
        let url = format!("{}/options", mock.uri());
        let err = request_json(&client, Method::GET, &url, None, TIMEOUT)
            .await
            .unwrap_err();
        match err.downcast_ref::<NameGenError>() {
            Some(NameGenError::HttpStatus { status, message }) => {
                assert_eq!(*status, 400);
                assert_eq!(message, "bad input");
            }
            other => panic!("Expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_status_without_message() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&mock)
            .await;

        let client = build_client().unwrap();
        let err = request_json(&client, Method::GET, &mock.uri(), None, TIMEOUT)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Request failed (502)");
    }

    #[tokio::test]
    async fn test_non_json_success_is_decode_error() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("welcome to the portal"))
            .mount(&mock)
            .await;

        let client = build_client().unwrap();
        let err = request_json(&client, Method::GET, &mock.uri(), None, TIMEOUT)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NameGenError>(),
            Some(NameGenError::Decode { .. })
        ));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_unavailable() {
        // Bind then drop a listener to get a port nothing is listening on.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = build_client().unwrap();
        let url = format!("http://127.0.0.1:{}/health", port);
        let err = request_json(&client, Method::GET, &url, None, TIMEOUT)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NameGenError>(),
            Some(NameGenError::NetworkUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_timeout_is_network_unavailable() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "healthy"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock)
            .await;

        let client = build_client().unwrap();
        let err = request_json(&client, Method::GET, &mock.uri(), None, Duration::from_millis(50))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NameGenError>(),
            Some(NameGenError::NetworkUnavailable(_))
        ));
    }
}
