//! Instagram フィード表示ウィジェット
//!
//! マウント時に `/api/instagram` を 1 回だけ呼び、結果に応じて
//! 本物の投稿・プレースホルダー・非表示のいずれかに落ち着く。

pub mod card;
pub mod placeholder;
pub mod source;
pub mod state;
pub mod visibility;
pub mod widget;

pub use card::PostCard;
pub use source::{FeedSource, HttpFeedSource, ProxyReply};
pub use state::{FailureKind, FallbackPolicy, FeedState};
pub use visibility::VisibilityLatch;
pub use widget::FeedWidget;
