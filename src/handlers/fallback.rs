use actix_web::{HttpRequest, HttpResponse};

use crate::core::errors::AppError;

/// 매칭되는 라우트가 없을 때의 응답
pub const INVALID_URL_MESSAGE: &str = "Invalid URL";

pub async fn invalid_url(req: HttpRequest) -> Result<HttpResponse, AppError> {
    log::debug!("매칭되지 않는 경로: {} {}", req.method(), req.path());
    Err(AppError::NotFound(INVALID_URL_MESSAGE.to_string()))
}
