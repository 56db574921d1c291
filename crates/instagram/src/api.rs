use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use site_core::{MediaItem, MediaType};

pub const DEFAULT_API_URL: &str = "https://graph.instagram.com";

/// `/me/media` に要求するフィールド
pub const MEDIA_FIELDS: &str = "id,media_type,media_url,permalink,timestamp,caption";

/// 上流がエラー内容を返さなかったときのメッセージ
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch Instagram posts";

/// 上流の 1 ページ分。項目は後で 1 件ずつ読む
#[derive(Debug, Deserialize)]
pub struct MediaPage {
    pub data: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    error: Option<GraphError>,
}

#[derive(Debug, Deserialize)]
struct GraphError {
    message: Option<String>,
}

#[async_trait::async_trait]
pub trait MediaFetcher: Send + Sync {
    /// 認証済みアカウントの投稿を新しい順に最大 `limit` 件取得する
    async fn fetch_media(&self, access_token: &str, limit: usize) -> Result<Vec<MediaItem>>;
}

pub struct GraphApiFetcher {
    client: Client,
    base_url: String,
}

impl GraphApiFetcher {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl MediaFetcher for GraphApiFetcher {
    async fn fetch_media(&self, access_token: &str, limit: usize) -> Result<Vec<MediaItem>> {
        let url = format!("{}/me/media", self.base_url);

        let res = self
            .client
            .get(&url)
            .query(&[
                ("fields", MEDIA_FIELDS),
                ("access_token", access_token),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await
            .context("Failed to reach Instagram API")?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            tracing::warn!("Instagram API returned {}: {}", status, text);
            anyhow::bail!("{}", upstream_error_message(&text));
        }

        let body = res
            .text()
            .await
            .context("Failed to read Instagram response")?;
        let items = parse_media_page(&body)?;
        tracing::debug!("Fetched {} media items from Instagram", items.len());

        Ok(items)
    }
}

/// `/me/media` のレスポンスボディを投稿のリストにする
///
/// 読めない項目は、表示対象の種別でなければ捨てる。表示対象なら失敗とする。
pub fn parse_media_page(body: &str) -> Result<Vec<MediaItem>> {
    let page: MediaPage =
        serde_json::from_str(body).context("Failed to parse Instagram response")?;

    let mut items = Vec::with_capacity(page.data.len());
    for raw in page.data {
        let displayable = serde_json::from_value::<MediaType>(raw["media_type"].clone())
            .map(|t| t.is_displayable())
            .unwrap_or(false);

        match serde_json::from_value::<MediaItem>(raw) {
            Ok(item) => items.push(item),
            Err(e) if displayable => {
                return Err(e).context("Failed to parse Instagram response");
            }
            Err(e) => tracing::debug!("Skipping unreadable media item: {}", e),
        }
    }
    Ok(items)
}

/// Graph API のエラーボディから `error.message` を取り出す
///
/// 取り出せなければ汎用メッセージを返す。
pub fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<GraphErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_string())
}
