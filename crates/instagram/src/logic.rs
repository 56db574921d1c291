use crate::api::MediaFetcher;
use crate::cache::FeedCache;
use anyhow::Result;
use site_core::MediaItem;

/// 上流から 1 回で取得する件数
///
/// 動画を除外した後でも表示件数を満たせるよう、表示件数より多めに取る。
pub const UPSTREAM_PAGE_SIZE: usize = 12;

/// クライアントへ返す最大件数
pub const MAX_POSTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedOptions {
    pub page_size: usize,
    pub max_posts: usize,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            page_size: UPSTREAM_PAGE_SIZE,
            max_posts: MAX_POSTS,
        }
    }
}

/// IMAGE / CAROUSEL_ALBUM だけを残し、先頭から `max_posts` 件に切り詰める
///
/// 並び順は上流のまま (新しい順)。件数が足りなくても埋め合わせはしない。
pub fn select_posts(items: Vec<MediaItem>, max_posts: usize) -> Vec<MediaItem> {
    items
        .into_iter()
        .filter(|item| item.media_type.is_displayable())
        .take(max_posts)
        .collect()
}

pub async fn fetch_latest_posts<F: MediaFetcher + ?Sized>(
    fetcher: &F,
    access_token: &str,
    options: &FeedOptions,
    cache: Option<&FeedCache>,
) -> Result<Vec<MediaItem>> {
    if let Some(store) = cache {
        if let Some(posts) = store.get().await {
            tracing::debug!("[cache] Instagram feed hit ({} posts)", posts.len());
            return Ok(posts);
        }
        tracing::debug!("[cache] Instagram feed miss");
    }

    let items = fetcher.fetch_media(access_token, options.page_size).await?;
    let fetched = items.len();
    let posts = select_posts(items, options.max_posts);

    tracing::info!(
        "Instagram feed: {} fetched, {} returned after filtering",
        fetched,
        posts.len()
    );

    if let Some(store) = cache {
        store.set(posts.clone()).await;
    }

    Ok(posts)
}
