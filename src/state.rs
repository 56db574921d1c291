use instagram::cache::FeedCache;
use instagram::logic::FeedOptions;
use std::sync::Arc;
use std::time::Duration;

pub type SharedState = AppState;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub instagram_access_token: Option<String>,
    pub instagram_api_url: String,
    pub feed: FeedOptions,
    /// 0 ならキャッシュしない
    pub cache_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            instagram_access_token: None,
            instagram_api_url: instagram::DEFAULT_API_URL.to_string(),
            feed: FeedOptions::default(),
            cache_ttl: Duration::ZERO,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// 環境変数の代わりに任意の取得関数から設定を組み立てる
    pub fn from_vars<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cache_ttl = match get("INSTAGRAM_CACHE_TTL_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    tracing::warn!(
                        "Ignoring invalid INSTAGRAM_CACHE_TTL_SECS={:?}; cache disabled",
                        raw
                    );
                    Duration::ZERO
                }
            },
            None => Duration::ZERO,
        };

        Self {
            instagram_access_token: get("INSTAGRAM_ACCESS_TOKEN"),
            instagram_api_url: get("INSTAGRAM_API_URL").unwrap_or(defaults.instagram_api_url),
            feed: defaults.feed,
            cache_ttl,
        }
    }

    /// 空文字のトークンは未設定として扱う
    pub fn access_token(&self) -> Option<&str> {
        self.instagram_access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http_client: reqwest::Client,
    pub feed_cache: Option<Arc<FeedCache>>,
}

impl AppState {
    pub fn new(config: AppConfig, http_client: reqwest::Client) -> Self {
        let feed_cache = if config.cache_ttl.is_zero() {
            None
        } else {
            Some(Arc::new(FeedCache::new(config.cache_ttl)))
        };

        Self {
            config,
            http_client,
            feed_cache,
        }
    }
}
