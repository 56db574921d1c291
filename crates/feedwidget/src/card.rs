use chrono::{DateTime, Utc};
use site_core::MediaItem;

/// 一度に並べるカードの最大数
pub const DISPLAY_LIMIT: usize = 4;

/// 読み込み中に表示するスケルトンの数
pub const SKELETON_SLOTS: usize = 4;

pub const CAPTION_MAX_CHARS: usize = 150;

const DEFAULT_ALT: &str = "Instagram post";

/// 1 投稿分の表示用データ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub key: String,
    pub href: String,
    pub image_src: String,
    pub alt: String,
    pub caption: String,
    pub date: String,
}

impl From<&MediaItem> for PostCard {
    fn from(item: &MediaItem) -> Self {
        let caption = item.caption.as_deref().unwrap_or_default();
        Self {
            key: item.id.clone(),
            href: item.permalink.clone(),
            image_src: item.media_url.clone(),
            alt: if caption.is_empty() {
                DEFAULT_ALT.to_string()
            } else {
                caption.to_string()
            },
            caption: truncate_caption(caption, CAPTION_MAX_CHARS),
            date: format_date(&item.timestamp),
        }
    }
}

pub fn cards(posts: &[MediaItem]) -> Vec<PostCard> {
    posts.iter().take(DISPLAY_LIMIT).map(PostCard::from).collect()
}

/// `max_chars` 文字を超えるキャプションを切り詰めて "..." を付ける
pub fn truncate_caption(caption: &str, max_chars: usize) -> String {
    match caption.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &caption[..cut]),
        None => caption.to_string(),
    }
}

/// ISO-8601 のタイムスタンプを "May 1, 2024" 形式にする
///
/// Graph API は `+0000` 形式のオフセットを返すので RFC 3339 以外も受け付ける。
/// 解釈できなければ元の文字列をそのまま返す。
pub fn format_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .or_else(|_| DateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%z"))
        .map(|dt| dt.with_timezone(&Utc).format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}
