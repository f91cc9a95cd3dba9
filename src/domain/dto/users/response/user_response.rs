//! 사용자 응답 DTO
//!
//! 엔티티에서 비밀번호 해시를 제거한 공개 표현입니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 클라이언트에 반환되는 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            about,
            avatar,
            email,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            about,
            avatar,
            email,
        }
    }
}

/// 로그인 성공 응답
///
/// 같은 토큰이 `jwt` 쿠키로도 설정됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninResponse {
    pub token: String,
}
