//! Shared setup for the API integration tests.
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use reqwest::Response;
use serde_json::Value;
use tokio::net::TcpListener;
use vinova_waitlist::{model::ModelManager, App, AppState};

/// Trying to bind port 0 will trigger an OS scan for an available port
/// which will then be bound to the application.
const TEST_SOCK_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

pub struct TestApp {
    pub addr: SocketAddr,
    pub mm: ModelManager,
    pub http_client: reqwest::Client,
}

impl TestApp {
    /// Serves the app with its own empty store on a random port in a separate task.
    pub async fn spawn() -> Result<Self> {
        if std::env::var("TEST_LOG").is_ok() {
            vinova_waitlist::init_dbg_tracing();
        }

        let mm = ModelManager::new();
        let app_state = AppState::new(mm.clone());

        let listener = TcpListener::bind(TEST_SOCK_ADDR).await?;
        let addr = listener.local_addr()?;

        tokio::spawn(vinova_waitlist::serve(App::new(app_state, listener)));

        Ok(TestApp {
            addr,
            mm,
            http_client: reqwest::Client::new(),
        })
    }

    pub fn waitlist_url(&self) -> String {
        format!("http://{}/api/waitlist", self.addr)
    }

    pub async fn post_waitlist(&self, body: &Value) -> Result<Response> {
        let res = self
            .http_client
            .post(self.waitlist_url())
            .json(body)
            .send()
            .await?;
        Ok(res)
    }

    pub async fn post_waitlist_email(&self, email: &str) -> Result<Response> {
        self.post_waitlist(&serde_json::json!({ "email": email }))
            .await
    }

    pub async fn get_waitlist(&self) -> Result<Response> {
        let res = self.http_client.get(self.waitlist_url()).send().await?;
        Ok(res)
    }

    /// GETs the waitlist and returns the parsed JSON array.
    pub async fn waitlist_entries(&self) -> Result<Vec<Value>> {
        let res = self.get_waitlist().await?;
        anyhow::ensure!(
            res.status().is_success(),
            "GET /api/waitlist failed: {}",
            res.status()
        );
        Ok(res.json().await?)
    }
}
