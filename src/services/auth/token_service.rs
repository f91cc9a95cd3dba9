//! JWT 토큰 관리 서비스 구현
//!
//! 로그인 시 HS256 토큰을 발급하고, 인증 게이트에서 토큰을 검증합니다.
//! 검증 실패 사유(만료, 서명 불일치, 형식 오류)는 로그에만 남기고
//! 클라이언트에는 모두 401 `Authorization required`로 응답합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::AuthConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::token::TokenClaims;

/// 인증 실패 시 클라이언트 메시지
pub const AUTH_REQUIRED_MESSAGE: &str = "Authorization required";

/// JWT 발급/검증 서비스
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, Duration::days(config.token_ttl_days))
    }

    /// 토큰 유효 기간
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// 사용자 ID로 토큰을 발급합니다.
    pub fn issue(&self, user_id: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            id: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::warn!("🔒 토큰 검증 실패: {:?}", e.kind());
                AppError::AuthenticationError(AUTH_REQUIRED_MESSAGE.to_string())
            })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 추출합니다.
    pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
