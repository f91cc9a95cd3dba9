//! # Data Transfer Objects
//!
//! HTTP 요청 본문과 응답 본문의 형태를 정의합니다.
//! 요청 DTO는 `validator`로 형식만 검사하고, 응답 DTO는 엔티티에서
//! 클라이언트에 노출할 필드만 골라 변환합니다.

pub mod cards;
pub mod users;

pub use cards::{CardResponse, CreateCardRequest};
pub use users::{
    SigninRequest, SigninResponse, SignupRequest, UpdateAvatarRequest, UpdateProfileRequest,
    UserResponse,
};
