use crate::error::AppError;
use crate::state::SharedState;
use axum::{extract::State, response::Json};
use site_core::FeedResponse;

const ACCESS_TOKEN_NAME: &str = "Instagram access token";

/// GET /api/instagram
///
/// 最新の IMAGE / CAROUSEL_ALBUM 投稿を最大 3 件返す。
/// トークン未設定や上流の失敗はすべて 500 + `{ "error": ... }` に正規化する。
pub async fn get_instagram_feed(
    State(state): State<SharedState>,
) -> Result<Json<FeedResponse>, AppError> {
    let token = state
        .config
        .access_token()
        .ok_or(AppError::NotConfigured(ACCESS_TOKEN_NAME))?;

    let feed = instagram::get_feed(
        &state.http_client,
        &state.config.instagram_api_url,
        token,
        &state.config.feed,
        state.feed_cache.as_deref(),
    )
    .await?;

    Ok(Json(feed))
}
