use std::net::SocketAddr;
use std::sync::Arc;

use generator::ArchiveBuilder;
use reqwest::Client;
use reqwest::header::HeaderMap;
use serde_json::Value;

use server::config::AppConfig;
use server::state::AppState;
use server::store::{GenerationStore, MemoryGenerationStore, UnavailableGenerationStore};

pub mod routes {
    pub const ROOT: &str = "/";
    pub const DIAGNOSTICS: &str = "/test";
    pub const GENERATE: &str = "/api/generate";
    pub const HISTORY: &str = "/api/history";

    pub fn download(id: &str) -> String {
        format!("/api/download/{id}")
    }

    pub fn history_with_limit(limit: u64) -> String {
        format!("/api/history?limit={limit}")
    }
}

/// A running test server.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

/// Binary HTTP response, for archive downloads.
pub struct BinaryResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub bytes: Vec<u8>,
}

impl BinaryResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    /// Spawn a server backed by a fresh in-memory store.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(MemoryGenerationStore::new())).await
    }

    /// Spawn a server whose storage was never reachable.
    pub async fn spawn_unavailable() -> Self {
        Self::spawn_with_store(Arc::new(UnavailableGenerationStore::new(
            "connection refused",
        )))
        .await
    }

    pub async fn spawn_with_store(store: Arc<dyn GenerationStore>) -> Self {
        let state = AppState {
            store,
            builder: Arc::new(ArchiveBuilder::new().expect("Failed to build templates")),
            config: AppConfig::in_memory(),
        };

        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn get_bytes(&self, path: &str) -> BinaryResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        let status = res.status().as_u16();
        let headers = res.headers().clone();
        let bytes = res
            .bytes()
            .await
            .expect("Failed to read response body")
            .to_vec();

        BinaryResponse {
            status,
            headers,
            bytes,
        }
    }

    /// Generate a plugin via the API and return its `id`.
    pub async fn generate(&self, plugin_name: &str, package_name: &str) -> String {
        let res = self
            .post(
                routes::GENERATE,
                &serde_json::json!({
                    "plugin_name": plugin_name,
                    "package_name": package_name,
                    "commands": [{"name": "hello", "description": "Say hello"}],
                }),
            )
            .await;
        assert_eq!(res.status, 200, "generate failed: {}", res.text);
        res.id()
    }
}

impl TestResponse {
    async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.expect("Failed to read response body");
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    /// Extract the string `id` field from the JSON body.
    pub fn id(&self) -> String {
        self.body["id"]
            .as_str()
            .unwrap_or_else(|| panic!("Expected string 'id' in response: {}", self.text))
            .to_string()
    }

    /// Extract the error `code` field from the JSON body.
    pub fn code(&self) -> &str {
        self.body["code"].as_str().unwrap_or_default()
    }
}
