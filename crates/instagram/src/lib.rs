pub mod api;
pub mod cache;
pub mod logic;

use crate::api::GraphApiFetcher;
use crate::cache::FeedCache;
use crate::logic::FeedOptions;
use anyhow::Result;
use reqwest::Client;
use site_core::FeedResponse;

pub use api::{MediaFetcher, DEFAULT_API_URL};

/// Instagram から最新の表示可能な投稿を取得し、`/api/instagram` のレスポンス形に整える
pub async fn get_feed(
    client: &Client,
    api_url: &str,
    access_token: &str,
    options: &FeedOptions,
    cache: Option<&FeedCache>,
) -> Result<FeedResponse> {
    let fetcher = GraphApiFetcher::new(client.clone(), api_url);
    let posts = logic::fetch_latest_posts(&fetcher, access_token, options, cache).await?;

    Ok(FeedResponse { posts })
}
