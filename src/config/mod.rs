//! # Configuration Module
//!
//! 백엔드 서비스의 설정을 하나의 [`AppConfig`] 구조체로 모아 관리합니다.
//! 프로세스 시작 시 한 번만 환경 변수에서 채워지고, 이후에는 읽기 전용으로
//! 애플리케이션 팩토리에 전달됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스 설정
//! - [`auth_config`] - 인증 게이트 모드, JWT 설정
//! - [`http_config`] - CORS, Rate Limiting 설정
//!
//! ## 환경 변수 및 기본값
//!
//! | 변수 | 기본값 |
//! |------|--------|
//! | `PORT` | `4000` |
//! | `HOST` | `0.0.0.0` |
//! | `MONGODB_URI` | `mongodb://localhost:27017/mestodb` |
//! | `DB_AUTO_INDEX` | `true` |
//! | `ENVIRONMENT` | `production` |
//! | `AUTH_MODE` | `token` |
//! | `STUB_USER_ID` | `5d8b8592978f8bd833ca8a75` |
//! | `JWT_SECRET` | `dev-secret` (경고 로그 출력) |
//! | `JWT_EXPIRATION_DAYS` | `7` |
//! | `BCRYPT_COST` | 환경별 (dev/test 4, staging 10, production 12) |
//! | `CORS_ORIGINS` | `http://localhost:3000`, `http(s)://sigma696.students.nomoredomains.club` |
//! | `RATE_LIMIT_WINDOW_SECS` | `900` |
//! | `RATE_LIMIT_MAX` | `100` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! println!("Server will bind to {}:{}", config.server.host, config.server.port);
//! ```

pub mod auth_config;
pub mod data_config;
pub mod http_config;

pub use auth_config::*;
pub use data_config::*;
pub use http_config::*;

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

/// 기본 리스닝 포트
pub const DEFAULT_PORT: u16 = 4000;

/// 기본 MongoDB 연결 URI
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/mestodb";

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub rate_limit: RateLimitConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let environment = Environment::Production;
        let bcrypt_cost = PasswordConfig::bcrypt_cost_for_env(&environment);

        Self {
            environment,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            database: DatabaseConfig {
                uri: DEFAULT_MONGODB_URI.to_string(),
                auto_index: true,
            },
            auth: AuthConfig {
                mode: AuthMode::Token,
                stub_user_id: DEFAULT_STUB_USER_ID.to_string(),
                jwt_secret: DEFAULT_JWT_SECRET.to_string(),
                token_ttl_days: 7,
                bcrypt_cost,
            },
            cors: CorsConfig {
                allowed_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            },
            rate_limit: RateLimitConfig {
                window: Duration::from_secs(15 * 60),
                max_requests: 100,
            },
        }
    }
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 조회 함수로부터 설정을 구성합니다.
    ///
    /// 값이 없으면 [`Default`]의 값을, 파싱에 실패하면 경고 로그와 함께
    /// 기본값을 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let environment = lookup("ENVIRONMENT")
            .map(|value| Environment::from_str(&value))
            .unwrap_or(defaults.environment);

        let bcrypt_cost = match lookup("BCRYPT_COST").and_then(|v| v.parse::<u32>().ok()) {
            Some(cost) if PasswordConfig::accepts(cost) => cost,
            Some(cost) => {
                log::warn!("BCRYPT_COST {} 는 허용 범위(4-15)를 벗어납니다. 환경별 기본값 사용", cost);
                PasswordConfig::bcrypt_cost_for_env(&environment)
            }
            None => PasswordConfig::bcrypt_cost_for_env(&environment),
        };

        let mode = match lookup("AUTH_MODE") {
            Some(raw) => AuthMode::from_str(&raw).unwrap_or_else(|e| {
                log::error!("{}. 기본값 token 사용", e);
                AuthMode::Token
            }),
            None => defaults.auth.mode,
        };

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            defaults.auth.jwt_secret.clone()
        });

        let token_ttl_days = match parse_or(&lookup, "JWT_EXPIRATION_DAYS", defaults.auth.token_ttl_days) {
            days if AuthConfig::accepts_ttl_days(days) => days,
            days => {
                log::warn!(
                    "JWT_EXPIRATION_DAYS {} 는 허용 범위(1-365)를 벗어납니다. 기본값 {} 사용",
                    days,
                    defaults.auth.token_ttl_days
                );
                defaults.auth.token_ttl_days
            }
        };

        let allowed_origins = lookup("CORS_ORIGINS")
            .map(|raw| CorsConfig::parse_origins(&raw))
            .unwrap_or(defaults.cors.allowed_origins);

        let window_secs = parse_or(
            &lookup,
            "RATE_LIMIT_WINDOW_SECS",
            defaults.rate_limit.window.as_secs(),
        );

        Self {
            environment,
            server: ServerConfig {
                host: lookup("HOST").unwrap_or(defaults.server.host),
                port: parse_or(&lookup, "PORT", defaults.server.port),
            },
            database: DatabaseConfig {
                uri: lookup("MONGODB_URI").unwrap_or(defaults.database.uri),
                auto_index: parse_or(&lookup, "DB_AUTO_INDEX", defaults.database.auto_index),
            },
            auth: AuthConfig {
                mode,
                stub_user_id: lookup("STUB_USER_ID").unwrap_or(defaults.auth.stub_user_id),
                jwt_secret,
                token_ttl_days,
                bcrypt_cost,
            },
            cors: CorsConfig { allowed_origins },
            rate_limit: RateLimitConfig {
                window: Duration::from_secs(window_secs),
                max_requests: parse_or(&lookup, "RATE_LIMIT_MAX", defaults.rate_limit.max_requests),
            },
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}
