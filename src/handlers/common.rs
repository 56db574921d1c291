use crate::error::AppError;

pub async fn root() -> &'static str {
    "Foundation site feed service. Instagram feed is served at /api/instagram"
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
