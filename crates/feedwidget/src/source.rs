use anyhow::{Context, Result};
use reqwest::Client;

/// フィードプロキシのパス
pub const FEED_PATH: &str = "/api/instagram";

/// プロキシから返ってきた生のレスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyReply {
    pub status: u16,
    pub body: String,
}

impl ProxyReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait::async_trait]
pub trait FeedSource: Send + Sync + 'static {
    async fn fetch_feed(&self) -> Result<ProxyReply>;
}

pub struct HttpFeedSource {
    client: Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(client: Client, site_url: &str) -> Self {
        Self {
            client,
            url: format!("{}{}", site_url.trim_end_matches('/'), FEED_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_feed(&self) -> Result<ProxyReply> {
        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to send feed request")?;

        let status = res.status().as_u16();
        let body = res.text().await.context("Failed to read feed response")?;

        Ok(ProxyReply { status, body })
    }
}
