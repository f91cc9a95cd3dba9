//! # Application Error Handling System
//!
//! Mesto 백엔드 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 에러를 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 실패를 `{ "message": ... }` 형태의 JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 단순 입력값 검증 실패 |
//! | `RequestValidation` | 400 Bad Request | 요청 스키마 검증 실패 (source/keys 포함) |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 없음, 만료, 잘못된 자격 증명 |
//! | `AuthorizationError` | 403 Forbidden | 다른 사용자의 카드 삭제 시도 |
//! | `NotFound` | 404 Not Found | 리소스 없음, 잘못된 URL |
//! | `ConflictError` | 409 Conflict | 이메일 중복 |
//! | `TooManyRequests` | 429 Too Many Requests | 요청 빈도 제한 초과 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 5xx 에러는 내부 메시지를 클라이언트에 노출하지 않고
//! [`SERVER_ERROR_MESSAGE`]로 대체합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn find_card(id: &ObjectId) -> Result<Card, AppError> {
//!     card_repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("Card not found".to_string()))
//! }
//! ```

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// 5xx 응답에 사용되는 클라이언트용 메시지
pub const SERVER_ERROR_MESSAGE: &str = "An error occurred on the server";

/// 검증 실패가 발생한 요청 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestSource {
    /// JSON 본문
    Body,
    /// 경로 파라미터
    Params,
}

/// 구조화된 요청 검증 실패 정보
///
/// 어느 위치(`source`)의 어떤 필드(`keys`)가 잘못되었는지를 담습니다.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationFailure {
    pub source: RequestSource,
    pub keys: Vec<String>,
    #[serde(skip)]
    pub message: String,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 클라이언트에 노출되는 변형은 메시지만 그대로 표시하고,
/// 서버 내부 변형은 로그용 접두사를 포함합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    #[error("{0}")]
    ValidationError(String),

    /// 요청 스키마 검증 에러 (400)
    #[error("{0}")]
    RequestValidation(ValidationFailure),

    /// 리소스 찾을 수 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 충돌/중복 (409)
    #[error("{0}")]
    ConflictError(String),

    /// 인증 실패 (401)
    #[error("{0}")]
    AuthenticationError(String),

    /// 권한 부족 (403)
    #[error("{0}")]
    AuthorizationError(String),

    /// 요청 빈도 제한 초과 (429)
    #[error("{0}")]
    TooManyRequests(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 구조화된 요청 검증 에러를 생성합니다.
    pub fn request_validation(
        source: RequestSource,
        keys: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        AppError::RequestValidation(ValidationFailure {
            source,
            keys,
            message: message.into(),
        })
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::RequestValidation(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 응답은 최소한 `message` 필드를 가지며,
    /// 요청 검증 실패는 `validation` 객체를 추가로 포함합니다.
    ///
    /// ```json
    /// {
    ///   "message": "\"email\" must be a valid email",
    ///   "validation": { "source": "body", "keys": ["email"] }
    /// }
    /// ```
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            return message_response(status, SERVER_ERROR_MESSAGE);
        }

        match self {
            AppError::RequestValidation(failure) => HttpResponse::build(status).json(json!({
                "message": failure.message,
                "validation": failure,
            })),
            _ => message_response(status, &self.to_string()),
        }
    }
}

/// `{ "message": ... }` 형태의 JSON 응답을 생성합니다.
pub fn message_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "message": message }))
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

/// MongoDB 에러를 AppError로 변환합니다.
impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}
