//! Client for the retrieval-augmented answer service.
//!
//! The service exposes `POST /rag` and `GET /health`. Native builds talk to it
//! through reqwest; wasm builds go through gloo-net so that an empty base url
//! resolves against the page origin.

use anyhow::{anyhow, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::message::Source;

/// Body of `POST /rag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RagRequest {
    pub message: String,
    pub context_k: u32,
}

/// Body returned by `POST /rag`.
///
/// Only JSON-parseability is required; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RagResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub context_used: Option<Vec<Source>>,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub processing_time_ms: Option<f64>,
}

/// Body returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub services_initialized: Option<bool>,
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Checking,
    Online,
    Degraded,
    Offline,
}

impl Health {
    pub fn label(self) -> &'static str {
        match self {
            Health::Checking => "Checking…",
            Health::Online => "Online",
            Health::Degraded => "Degraded",
            Health::Offline => "Offline",
        }
    }

    pub fn from_probe(probe: &anyhow::Result<HealthReport>) -> Self {
        match probe {
            Ok(report) => report.health(),
            Err(_) => Health::Offline,
        }
    }
}

impl HealthReport {
    /// One-line description for the badge tooltip, e.g. `Docs Bot 1.0.0 (healthy)`.
    pub fn summary(&self) -> String {
        let name = match (&self.app_name, &self.version) {
            (Some(name), Some(version)) => format!("{name} {version}"),
            (Some(name), None) => name.clone(),
            (None, Some(version)) => format!("version {version}"),
            (None, None) => "service".to_string(),
        };
        format!("{name} ({})", self.status)
    }

    pub fn health(&self) -> Health {
        // older servers omit the flag; a healthy status alone counts
        let initialized = self.services_initialized.unwrap_or(true);
        if self.status == "healthy" && initialized {
            Health::Online
        } else {
            Health::Degraded
        }
    }
}

#[async_trait(?Send)]
pub trait RagService {
    async fn ask(&self, request: &RagRequest) -> anyhow::Result<RagResponse>;
    async fn health(&self) -> anyhow::Result<HealthReport>;
}

/// HTTP implementation of [`RagService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RagClient {
    api_base: String,
}

impl RagClient {
    /// `api_base` may be empty in the browser, meaning the page origin.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

#[async_trait(?Send)]
impl RagService for RagClient {
    async fn ask(&self, request: &RagRequest) -> anyhow::Result<RagResponse> {
        post_json(&self.url("/rag"), request).await
    }

    async fn health(&self) -> anyhow::Result<HealthReport> {
        get_json(&self.url("/health")).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_json<T: Serialize + ?Sized, R: DeserializeOwned>(
    url: &str,
    body: &T,
) -> anyhow::Result<R> {
    let res = reqwest::Client::new()
        .post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .send()
        .await?;
    let status = res.status();
    if !status.is_success() {
        bail!("POST {url} returned {status}");
    }
    res.json::<R>().await.map_err(|e| anyhow!("{e:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn get_json<R: DeserializeOwned>(url: &str) -> anyhow::Result<R> {
    let res = reqwest::Client::new().get(url).send().await?;
    let status = res.status();
    if !status.is_success() {
        bail!("GET {url} returned {status}");
    }
    res.json::<R>().await.map_err(|e| anyhow!("{e:?}"))
}

#[cfg(target_arch = "wasm32")]
async fn post_json<T: Serialize + ?Sized, R: DeserializeOwned>(
    url: &str,
    body: &T,
) -> anyhow::Result<R> {
    use gloo_net::http::Request;

    let res = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| anyhow!("{e:?}"))?
        .send()
        .await
        .map_err(|e| anyhow!("{e:?}"))?;
    if !res.ok() {
        bail!("POST {url} returned {}", res.status());
    }
    res.json::<R>().await.map_err(|e| anyhow!("{e:?}"))
}

#[cfg(target_arch = "wasm32")]
async fn get_json<R: DeserializeOwned>(url: &str) -> anyhow::Result<R> {
    use gloo_net::http::Request;

    let res = Request::get(url)
        .send()
        .await
        .map_err(|e| anyhow!("{e:?}"))?;
    if !res.ok() {
        bail!("GET {url} returned {}", res.status());
    }
    res.json::<R>().await.map_err(|e| anyhow!("{e:?}"))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    /// Serves exactly one canned HTTP response and hands back the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = sock.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw);
                if let Some(end) = text.find("\r\n\r\n") {
                    let len = text[..end]
                        .lines()
                        .find_map(|l| {
                            let (k, v) = l.split_once(':')?;
                            k.eq_ignore_ascii_case("content-length")
                                .then(|| v.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if raw.len() >= end + 4 + len {
                        break;
                    }
                }
            }
            let reply = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(reply.as_bytes()).await.unwrap();
            sock.shutdown().await.ok();
            String::from_utf8_lossy(&raw).to_string()
        });
        (base, handle)
    }

    #[test]
    fn test_url_joins_base_and_path() {
        assert_eq!(RagClient::new("").url("/rag"), "/rag");
        assert_eq!(
            RagClient::new("http://localhost:8000/").url("/rag"),
            "http://localhost:8000/rag"
        );
    }

    #[test]
    fn test_request_wire_shape() {
        let req = RagRequest {
            message: "What is the capital of France?".into(),
            context_k: 5,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"message": "What is the capital of France?", "context_k": 5})
        );
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let r: RagResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(r, RagResponse::default());

        let r: RagResponse =
            serde_json::from_str(r#"{"response": "hi", "context_used": null}"#).unwrap();
        assert_eq!(r.response.as_deref(), Some("hi"));
        assert!(r.context_used.is_none());
    }

    #[test]
    fn test_response_with_metadata() {
        let r: RagResponse = serde_json::from_value(json!({
            "response": "Paris is the capital.",
            "context_used": [{"title": "Geo", "url": "https://x", "content": "France..."}],
            "conversation_id": "c-1",
            "processing_time_ms": 12.5
        }))
        .unwrap();
        assert_eq!(r.conversation_id.as_deref(), Some("c-1"));
        assert_eq!(r.processing_time_ms, Some(12.5));
        assert_eq!(r.context_used.unwrap().len(), 1);
    }

    #[test]
    fn test_response_wrong_shape_is_an_error() {
        assert!(serde_json::from_str::<RagResponse>(r#"{"context_used": "nope"}"#).is_err());
    }

    #[test]
    fn test_health_mapping() {
        let report = |status: &str, init: Option<bool>| HealthReport {
            status: status.into(),
            services_initialized: init,
            app_name: None,
            version: None,
        };
        assert_eq!(report("healthy", Some(true)).health(), Health::Online);
        assert_eq!(report("healthy", None).health(), Health::Online);
        assert_eq!(report("healthy", Some(false)).health(), Health::Degraded);
        assert_eq!(report("starting", Some(true)).health(), Health::Degraded);
        assert_eq!(
            Health::from_probe(&Err(anyhow!("connection refused"))),
            Health::Offline
        );
    }

    #[test]
    fn test_health_summary() {
        let report: HealthReport = serde_json::from_value(json!({
            "status": "healthy",
            "app_name": "Docs Bot",
            "version": "1.0.0",
            "services_initialized": true
        }))
        .unwrap();
        assert_eq!(report.summary(), "Docs Bot 1.0.0 (healthy)");

        let bare: HealthReport = serde_json::from_value(json!({"status": "starting"})).unwrap();
        assert_eq!(bare.summary(), "service (starting)");
    }

    #[tokio::test]
    async fn test_ask_posts_json() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"response": "Paris is the capital.", "context_used": [{"title": "Geo", "url": "https://x"}]}"#,
        )
        .await;
        let client = RagClient::new(base);
        let res = client
            .ask(&RagRequest {
                message: "capital of france".into(),
                context_k: 8,
            })
            .await
            .unwrap();
        assert_eq!(res.response.as_deref(), Some("Paris is the capital."));

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /rag HTTP/1.1"));
        assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(raw.ends_with(r#"{"message":"capital of france","context_k":8}"#));
    }

    #[tokio::test]
    async fn test_ask_non_success_status_fails() {
        let (base, server) =
            serve_once("500 Internal Server Error", r#"{"detail": "RAG failed"}"#).await;
        let res = RagClient::new(base)
            .ask(&RagRequest {
                message: "q".into(),
                context_k: 5,
            })
            .await;
        assert!(res.is_err());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_ask_non_json_body_fails() {
        let (base, server) = serve_once("200 OK", "<html>oops</html>").await;
        let res = RagClient::new(base)
            .ask(&RagRequest {
                message: "q".into(),
                context_k: 5,
            })
            .await;
        assert!(res.is_err());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_health_probe() {
        let (base, server) =
            serve_once("200 OK", r#"{"status": "healthy", "services_initialized": true}"#).await;
        let probe = RagClient::new(base).health().await;
        assert_eq!(Health::from_probe(&probe), Health::Online);
        let raw = server.await.unwrap();
        assert!(raw.starts_with("GET /health HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_health_unreachable_is_offline() {
        // bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let probe = RagClient::new(base).health().await;
        assert_eq!(Health::from_probe(&probe), Health::Offline);
    }
}
