//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.
//! 프로필 필드(`name`, `about`, `avatar`)는 회원가입 시 생략하면 기본값으로 채워집니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 기본 사용자 이름
pub const DEFAULT_NAME: &str = "Jacques-Yves Cousteau";
/// 기본 자기소개
pub const DEFAULT_ABOUT: &str = "Explorer";
/// 기본 아바타 이미지
pub const DEFAULT_AVATAR: &str =
    "https://pictures.s3.yandex.net/resources/jacques-cousteau_1604399756.png";

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub about: String,
    pub avatar: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시. 클라이언트 응답에는 절대 포함하지 않습니다
    pub password: String,
}

impl User {
    /// 새 사용자를 생성합니다. 비어 있는 프로필 필드는 기본값을 사용합니다.
    pub fn new(
        name: Option<String>,
        about: Option<String>,
        avatar: Option<String>,
        email: String,
        password_hash: String,
    ) -> Self {
        Self {
            id: None,
            name: name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            about: about.unwrap_or_else(|| DEFAULT_ABOUT.to_string()),
            avatar: avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            email,
            password: password_hash,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

/// 사용자 프로필 부분 변경
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileUpdate {
    /// 이름과 자기소개 변경
    Info { name: String, about: String },
    /// 아바타 URL 변경
    Avatar(String),
}
