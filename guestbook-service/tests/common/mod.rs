#![allow(dead_code)]

use async_trait::async_trait;
use guestbook_service::config::{GuestbookConfig, MongoConfig, StoreBackend, StoreConfig};
use guestbook_service::models::NameRecord;
use guestbook_service::services::{InMemoryNameStore, NameStore};
use guestbook_service::startup::Application;
use reqwest::{Client, Response};
use secrecy::Secret;
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<dyn NameStore>,
    pub client: Client,
}

pub fn test_config(backend: StoreBackend) -> GuestbookConfig {
    GuestbookConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port for testing
            ..CoreConfig::default()
        },
        mongodb: MongoConfig {
            uri: Secret::new("mongodb://localhost:27017".to_string()),
            database: "guestbook_test".to_string(),
            collection: "names".to_string(),
        },
        store: StoreConfig { backend },
    }
}

impl TestApp {
    /// Spawn the service backed by a fresh in-memory store.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(InMemoryNameStore::new())).await
    }

    pub async fn spawn_with_store(store: Arc<dyn NameStore>) -> Self {
        let app = Application::build_with_store(test_config(StoreBackend::Memory), store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let store = app.store();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = Client::new();
        let health_url = format!("{}/api/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
            client,
        }
    }

    pub async fn add_name(&self, name: &str) -> Response {
        self.client
            .post(format!("{}/api/names", self.address))
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_names(&self) -> Response {
        self.client
            .get(format!("{}/api/names", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Current guestbook contents as seen through the API.
    pub async fn names(&self) -> Vec<String> {
        let response = self.get_names().await;
        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.expect("Failed to parse JSON");
        serde_json::from_value(body["names"].clone()).expect("names is not a string array")
    }
}

/// Store whose every operation fails as if the database were unreachable.
pub struct UnreachableStore;

#[async_trait]
impl NameStore for UnreachableStore {
    async fn insert(&self, _record: NameRecord) -> Result<(), AppError> {
        Err(AppError::StoreError(anyhow::anyhow!(
            "connection refused: mongodb://admin:password123@db:27017"
        )))
    }

    async fn list(&self) -> Result<Vec<NameRecord>, AppError> {
        Err(AppError::StoreError(anyhow::anyhow!(
            "server selection timeout"
        )))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::StoreError(anyhow::anyhow!(
            "server selection timeout"
        )))
    }

    async fn shutdown(&self) {}
}
