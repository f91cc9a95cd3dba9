//! # Authentication Configuration
//!
//! 인증 게이트 모드와 JWT 토큰 발급 설정을 정의합니다.
//!
//! ## 인증 모드
//!
//! | 모드 | `AUTH_MODE` | 동작 |
//! |------|-------------|------|
//! | [`AuthMode::Token`] | `token` (기본값) | `jwt` 쿠키 또는 Bearer 헤더의 JWT를 검증 |
//! | [`AuthMode::Stub`] | `stub` | 자격 증명과 무관하게 고정된 사용자 ID를 주입 |
//!
//! `stub` 모드는 인증을 사실상 끄는 테스트용 구성입니다. 운영 환경에서 사용하지 마세요.
//!
//! ## 환경 변수
//!
//! ```bash
//! export AUTH_MODE="token"
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_DAYS="7"
//! export STUB_USER_ID="5d8b8592978f8bd833ca8a75"
//! ```

/// 고정 사용자 주입 모드에서 사용하는 기본 사용자 ID
pub const DEFAULT_STUB_USER_ID: &str = "5d8b8592978f8bd833ca8a75";

/// 개발용 기본 JWT 서명 키
pub const DEFAULT_JWT_SECRET: &str = "dev-secret";

/// 인증 게이트 동작 모드
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// JWT 토큰 검증
    Token,
    /// 고정 사용자 주입
    Stub,
}

impl AuthMode {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "token" | "jwt" => Ok(AuthMode::Token),
            "stub" | "fixed" => Ok(AuthMode::Stub),
            _ => Err(format!("Unsupported auth mode: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Token => "token",
            AuthMode::Stub => "stub",
        }
    }
}

/// 인증 관련 설정 묶음
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub mode: AuthMode,
    /// `stub` 모드에서 주입할 사용자 ID
    pub stub_user_id: String,
    pub jwt_secret: String,
    /// 토큰 및 `jwt` 쿠키 유효 기간 (일)
    pub token_ttl_days: i64,
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// 허용되는 토큰 유효 기간 (1일 ~ 365일)
    pub const TOKEN_TTL_DAYS_RANGE: std::ops::RangeInclusive<i64> = 1..=365;

    pub fn accepts_ttl_days(days: i64) -> bool {
        Self::TOKEN_TTL_DAYS_RANGE.contains(&days)
    }
}
