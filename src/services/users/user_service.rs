//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인, 프로필 조회/변경을 담당합니다.
//!
//! ```text
//! handlers::auth / handlers::users
//!            │
//!            ▼
//!      UserService ──► TokenService (로그인 시 JWT 발급)
//!            │
//!            ▼
//!    Arc<dyn UserStore> (MongoDB 또는 인메모리)
//! ```
//!
//! 비밀번호는 bcrypt로 해싱하며 cost는 [`AuthConfig::bcrypt_cost`]를 따릅니다.
//! 로그인 실패 시 이메일 존재 여부를 노출하지 않도록 항상 같은 메시지를 반환합니다.
//!
//! [`AuthConfig::bcrypt_cost`]: crate::config::AuthConfig

use std::sync::Arc;

use bcrypt::hash;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::users::{SigninRequest, SignupRequest, UserResponse};
use crate::domain::entities::users::{ProfileUpdate, User};
use crate::repositories::users::UserStore;
use crate::services::auth::TokenService;

/// 잘못된 자격 증명 메시지
pub const BAD_CREDENTIALS_MESSAGE: &str = "Incorrect email or password";

/// 사용자 없음 메시지
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

pub struct UserService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    /// 새 사용자를 등록합니다.
    pub async fn signup(&self, request: SignupRequest) -> AppResult<UserResponse> {
        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(
            request.name,
            request.about,
            request.avatar,
            request.email,
            password_hash,
        );

        let created = self.users.create(user).await?;
        log::info!("👤 새 사용자 등록: {}", created.id_string().unwrap_or_default());

        Ok(UserResponse::from(created))
    }

    /// 자격 증명을 확인하고 JWT를 발급합니다.
    pub async fn signin(&self, request: SigninRequest) -> AppResult<String> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(BAD_CREDENTIALS_MESSAGE.to_string()))?;

        let is_valid =
            bcrypt::verify(&request.password, &user.password).context("비밀번호 검증 실패")?;

        if !is_valid {
            log::warn!("🔒 로그인 실패: 비밀번호 불일치");
            return Err(AppError::AuthenticationError(BAD_CREDENTIALS_MESSAGE.to_string()));
        }

        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        self.tokens.issue(&user_id)
    }

    pub async fn list(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get(&self, id: &ObjectId) -> AppResult<UserResponse> {
        self.users
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))
    }

    /// 이름과 자기소개 또는 아바타를 변경합니다.
    pub async fn update_profile(&self, id: &ObjectId, update: ProfileUpdate) -> AppResult<UserResponse> {
        self.users
            .update_profile(id, update)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))
    }
}
