//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 에러 타입과 요청 검증 포매터를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현, `{ "message": ... }` 응답
//! - **ErrorContext**: 외부 에러를 `AppError`로 변환하는 확장 trait
//!
//! ### [`validation`] - 요청 검증
//! - `validator` 검증 결과를 구조화된 400 응답으로 변환
//! - JSON 본문 파싱 실패 처리 (`JsonConfig`)
//! - 경로 파라미터 ObjectId 검증

pub mod errors;
pub mod validation;

pub use errors::*;
