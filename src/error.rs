use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use site_core::{ErrorResponse, NOT_CONFIGURED_MARKER};
use tracing::{error, warn};

#[derive(Debug)]
pub enum AppError {
    /// 必要な設定値が無い。値の名前を持つ
    NotConfigured(&'static str),
    /// 上流 API の呼び出しに失敗した
    Upstream(anyhow::Error),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotConfigured(what) => {
                warn!("{} is not set; serving configuration error", what);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{} {}", what, NOT_CONFIGURED_MARKER),
                )
            }
            AppError::Upstream(err) => {
                error!("Error fetching Instagram posts: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

// Anyhow conversion
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Upstream(err)
    }
}
