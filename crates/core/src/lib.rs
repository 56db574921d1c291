use serde::{Deserialize, Deserializer, Serialize};

/// 設定漏れを示すエラーメッセージに必ず含まれる文字列
///
/// フィードウィジェット側はこの部分文字列でフォールバックの理由を判別する。
pub const NOT_CONFIGURED_MARKER: &str = "not configured";

/// Instagram の投稿種別
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Image,
    CarouselAlbum,
    Video,
    /// Reels など、上流が将来追加する未知の種別
    #[default]
    #[serde(other)]
    Other,
}

impl MediaType {
    /// サイト上に表示してよい種別か (IMAGE / CAROUSEL_ALBUM のみ)
    pub fn is_displayable(&self) -> bool {
        matches!(self, Self::Image | Self::CarouselAlbum)
    }
}

/// 上流 API から受け取り、そのままクライアントへ渡す投稿 1 件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_type: MediaType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub permalink: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// `/api/instagram` の成功レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub posts: Vec<MediaItem>,
}

/// `null` をキー欠落と同じく既定値として読む
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 失敗時のレスポンス `{ "error": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn is_not_configured(&self) -> bool {
        self.error.contains(NOT_CONFIGURED_MARKER)
    }
}
