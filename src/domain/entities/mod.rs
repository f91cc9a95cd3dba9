//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 핵심 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (User, Card)
//! ├── models/       ← 요청 식별자, 토큰 클레임
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! 모든 엔티티는 `_id` 필드를 `Option<ObjectId>`로 가지며,
//! 저장 전에는 `None`, 저장 후에는 드라이버가 할당한 값을 가집니다.

pub mod cards;
pub mod users;

pub use cards::*;
pub use users::*;
