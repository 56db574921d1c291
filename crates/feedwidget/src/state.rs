use crate::placeholder::placeholder_posts;
use crate::source::ProxyReply;
use site_core::{ErrorResponse, FeedResponse, MediaItem};

/// 取得に失敗したときの振る舞い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// 固定のプレースホルダー投稿を表示する
    #[default]
    Placeholder,
    /// セクションごと表示しない
    Hide,
}

impl FallbackPolicy {
    pub fn fallback_state(&self) -> FeedState {
        match self {
            Self::Placeholder => FeedState::Placeholder(placeholder_posts()),
            Self::Hide => FeedState::Hidden,
        }
    }
}

/// ウィジェットの状態
///
/// 本物の投稿とプレースホルダーは別のバリアントなので、同じ描画に混ざることはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    Loading,
    Live(Vec<MediaItem>),
    Placeholder(&'static [MediaItem]),
    Hidden,
}

impl FeedState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// セクション自体を描画するか
    pub fn is_shown(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn posts(&self) -> &[MediaItem] {
        match self {
            Self::Live(posts) => posts,
            Self::Placeholder(posts) => posts,
            Self::Loading | Self::Hidden => &[],
        }
    }
}

/// 失敗の種類。描画には影響せず、ログにだけ残す
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureKind {
    #[error("feed is not configured")]
    NotConfigured,
    #[error("feed proxy returned {status}: {message}")]
    Proxy { status: u16, message: String },
    #[error("malformed feed response: {0}")]
    Malformed(String),
    #[error("feed request failed: {0}")]
    Transport(String),
}

/// プロキシのレスポンスを解釈する
///
/// 2xx なら `posts` を (空でも) そのまま採用する。`posts` が無いか null なら空扱い。
pub fn interpret(reply: &ProxyReply) -> Result<Vec<MediaItem>, FailureKind> {
    if reply.is_success() {
        let feed: FeedResponse = serde_json::from_str(&reply.body)
            .map_err(|e| FailureKind::Malformed(e.to_string()))?;
        return Ok(feed.posts);
    }

    match serde_json::from_str::<ErrorResponse>(&reply.body) {
        Ok(err) if err.is_not_configured() => Err(FailureKind::NotConfigured),
        Ok(err) => Err(FailureKind::Proxy {
            status: reply.status,
            message: err.error,
        }),
        Err(e) => Err(FailureKind::Malformed(format!(
            "status {} with unreadable body: {}",
            reply.status, e
        ))),
    }
}

/// 1 回の取得結果から最終状態を決める
///
/// どの失敗も同じフォールバックに収束する。違いはログレベルのみ。
pub fn settle(outcome: anyhow::Result<ProxyReply>, policy: FallbackPolicy) -> FeedState {
    let result = outcome
        .map_err(|e| FailureKind::Transport(format!("{:#}", e)))
        .and_then(|reply| interpret(&reply));

    match result {
        Ok(posts) => {
            tracing::debug!("Instagram feed loaded ({} posts)", posts.len());
            FeedState::Live(posts)
        }
        Err(FailureKind::NotConfigured) => {
            tracing::info!("Instagram feed not configured, using {:?} fallback", policy);
            policy.fallback_state()
        }
        Err(kind) => {
            tracing::warn!("Error fetching Instagram posts: {}", kind);
            policy.fallback_state()
        }
    }
}
