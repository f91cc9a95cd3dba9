//! # Domain Models
//!
//! 저장되지 않고 요청 처리 중에만 존재하는 값 객체입니다.
//!
//! - [`auth::CurrentUser`] - 인증 게이트가 요청에 붙이는 식별자
//! - [`token::TokenClaims`] - JWT 페이로드

pub mod auth;
pub mod token;

pub use auth::CurrentUser;
pub use token::TokenClaims;
