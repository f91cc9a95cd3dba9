//! CORS 및 Rate Limiting 설정

use std::time::Duration;

/// 기본 CORS 허용 Origin 목록
pub const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://sigma696.students.nomoredomains.club",
    "https://sigma696.students.nomoredomains.club",
];

/// CORS 정책 설정
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// 쉼표로 구분된 Origin 목록을 파싱합니다.
    ///
    /// 빈 항목과 와일드카드(`*`)는 무시합니다. 자격 증명을 허용하는 정책에서
    /// 와일드카드 Origin은 사용할 수 없습니다.
    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter(|origin| {
                if *origin == "*" {
                    log::warn!("CORS_ORIGINS의 와일드카드(*)는 무시됩니다");
                    false
                } else {
                    true
                }
            })
            .map(str::to_string)
            .collect()
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// 슬라이딩 윈도우 길이
    pub window: Duration,
    /// 윈도우당 주소별 최대 요청 수
    pub max_requests: u32,
}
