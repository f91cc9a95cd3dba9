//! # Domain Layer
//!
//! Mesto의 도메인 타입을 모아 둔 계층입니다.
//!
//! ```text
//! domain/
//! ├── entities/   MongoDB 문서 (User, Card)
//! ├── dto/        요청/응답 본문
//! └── models/     요청 식별자, 토큰 클레임
//! ```
//!
//! 엔티티는 저장 형태를, DTO는 HTTP 형태를 표현합니다.
//! 두 형태 사이의 변환은 `From` 구현으로만 수행합니다.

pub mod dto;
pub mod entities;
pub mod models;

pub use entities::{Card, ProfileUpdate, User};
pub use models::{CurrentUser, TokenClaims};
