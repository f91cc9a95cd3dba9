//! # HTTP Handlers
//!
//! 요청 본문/경로를 검증하고 서비스 계층을 호출한 뒤 JSON 응답을 만듭니다.

pub mod auth;
pub mod cards;
pub mod fallback;
pub mod users;
