//! # HTTP Middlewares
//!
//! 요청 파이프라인을 구성하는 미들웨어입니다. 조립 순서는 `app::create_app`에 있습니다.
//!
//! - [`auth_middleware`] - 인증 게이트 (토큰 검증 / 고정 식별자)
//! - [`rate_limit`] - 주소별 요청 빈도 제한
//! - [`cors`] - Origin 허용 목록, preflight 204 응답
//! - [`security_headers`] - 보안 응답 헤더
//! - [`error_handler`] - 종단 에러 처리기

pub mod auth_middleware;
mod auth_inner;
pub mod cors;
pub mod error_handler;
pub mod rate_limit;
pub mod security_headers;

pub use auth_inner::AUTH_COOKIE;
pub use auth_middleware::{AuthGate, AuthMiddleware};
pub use cors::{cors, PreflightNoContent};
pub use error_handler::ErrorResponder;
pub use rate_limit::{RateLimit, RateLimiter};
pub use security_headers::security_headers;
