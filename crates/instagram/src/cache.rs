//! フィード結果のメモリキャッシュ
//!
//! サイト全体でフィードは 1 つしかないため、キーは持たず最新の結果を 1 件だけ保持する。
//! - 失効判定: 取得時に `expires_at > 現在時刻` を確認（古いデータは透過的に無視）
//! - 成功した結果のみ保存する。失敗は保存しない

use site_core::MediaItem;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

struct CachedFeed {
    posts: Vec<MediaItem>,
    expires_at: Instant,
}

pub struct FeedCache {
    ttl: Duration,
    entry: RwLock<Option<CachedFeed>>,
}

impl FeedCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// 有効期限内の結果があれば返す
    pub async fn get(&self) -> Option<Vec<MediaItem>> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|cached| cached.expires_at > Instant::now())
            .map(|cached| cached.posts.clone())
    }

    /// 結果を保存する (TTL: 生成時に指定した時間)
    pub async fn set(&self, posts: Vec<MediaItem>) {
        let mut entry = self.entry.write().await;
        *entry = Some(CachedFeed {
            posts,
            expires_at: Instant::now() + self.ttl,
        });
    }
}
