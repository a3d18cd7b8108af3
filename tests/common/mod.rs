#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use contact_intake::config::{Config, StorageBackend};
use contact_intake::db::{MemoryUserStore, StoreError, UserStore};
use contact_intake::models::UserRecord;

/// A running test server backed by an in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryUserStore>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a JSON body, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/SubmitUser"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit form-urlencoded data, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/SubmitUser"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a raw body with an explicit content type.
    pub async fn submit_raw(&self, content_type: &str, body: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/SubmitUser"))
            .header("content-type", content_type)
            .body(body.to_string())
            .send()
            .await
            .expect("submit raw failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: None,
        storage: StorageBackend::Memory,
        db_max_connections: 1,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 65_536,
        trusted_proxies: vec![],
        cors_origins: vec![],
        rate_limit: 0,
        rate_limit_window_secs: 60,
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app with a fresh in-memory store.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_config(test_config()).await
}

pub async fn spawn_app_with_config(config: Config) -> TestApp {
    let store = Arc::new(MemoryUserStore::new());
    let addr = serve(store.clone(), config).await;

    TestApp {
        addr,
        client: Client::new(),
        store,
    }
}

/// Spawn the router around an arbitrary store and return its address.
pub async fn serve(store: Arc<dyn UserStore>, config: Config) -> SocketAddr {
    let (app, _state) = contact_intake::build_app(store, config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    addr
}

/// A store whose every write fails.
pub struct FailingStore;

pub const FAILING_STORE_DETAIL: &str = "connection reset by peer (secret-host:5432)";

#[async_trait]
impl UserStore for FailingStore {
    async fn create(&self, _record: &UserRecord) -> Result<UserRecord, StoreError> {
        Err(StoreError::Unavailable(FAILING_STORE_DETAIL.to_string()))
    }
}
