//! # 요청 빈도 제한 (Rate Limiting)
//!
//! 주소별 슬라이딩 로그 방식의 제한기입니다. 윈도우(기본 15분) 안의 요청 시각을
//! 주소마다 기록하고, 최대 요청 수(기본 100)를 넘으면 429로 거부합니다.
//!
//! 통과/거부와 관계없이 응답에 다음 헤더를 붙입니다.
//!
//! | 헤더 | 값 |
//! |------|----|
//! | `RateLimit-Limit` | 윈도우당 최대 요청 수 |
//! | `RateLimit-Remaining` | 남은 요청 수 |
//! | `RateLimit-Reset` | 가장 오래된 기록이 만료되기까지 남은 초 |
//! | `RateLimit-Policy` | `100;w=900` 형식 |
//!
//! 제한기 상태는 `main`에서 한 번 생성되어 모든 워커가 공유합니다.

use std::collections::{HashMap, VecDeque};
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue, RETRY_AFTER};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;

use crate::config::RateLimitConfig;
use crate::core::AppError;

/// 거부 시 클라이언트 메시지
pub const RATE_LIMIT_MESSAGE: &str = "Too many requests, please try again later";

/// 만료된 주소 기록을 정리하는 주기
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

const RATELIMIT_LIMIT: &str = "ratelimit-limit";
const RATELIMIT_REMAINING: &str = "ratelimit-remaining";
const RATELIMIT_RESET: &str = "ratelimit-reset";
const RATELIMIT_POLICY: &str = "ratelimit-policy";

/// 한 요청에 대한 판정 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    /// 윈도우가 한 칸 비워지기까지 남은 시간
    pub reset_after: Duration,
}

struct Buckets {
    logs: HashMap<String, VecDeque<Instant>>,
    last_sweep: Instant,
}

/// 주소별 요청 기록
pub struct RateLimiter {
    window: Duration,
    max_requests: u32,
    buckets: Mutex<Buckets>,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            window: config.window,
            max_requests: config.max_requests,
            buckets: Mutex::new(Buckets {
                logs: HashMap::new(),
                last_sweep: Instant::now(),
            }),
        }
    }

    /// 현재 시각 기준으로 요청을 판정하고 기록합니다.
    pub fn check(&self, key: &str) -> RateLimitDecision {
        self.check_at(key, Instant::now())
    }

    /// 주어진 시각 기준으로 요청을 판정하고, 허용되면 기록합니다.
    pub fn check_at(&self, key: &str, now: Instant) -> RateLimitDecision {
        let mut buckets = match self.buckets.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let window = self.window;
        let expired = |ts: &Instant| now.saturating_duration_since(*ts) >= window;

        if now.saturating_duration_since(buckets.last_sweep) >= SWEEP_INTERVAL {
            buckets.logs.retain(|_, log| {
                log.retain(|ts| !expired(ts));
                !log.is_empty()
            });
            buckets.last_sweep = now;
        }

        let log = buckets.logs.entry(key.to_string()).or_default();
        while log.front().is_some_and(expired) {
            log.pop_front();
        }

        let allowed = (log.len() as u64) < u64::from(self.max_requests);
        if allowed {
            log.push_back(now);
        }

        let used = log.len() as u32;
        let reset_after = log
            .front()
            .map(|oldest| window.saturating_sub(now.saturating_duration_since(*oldest)))
            .unwrap_or(window);

        RateLimitDecision {
            allowed,
            limit: self.max_requests,
            remaining: self.max_requests.saturating_sub(used),
            reset_after,
        }
    }

    /// `RateLimit-*` 헤더를 응답에 기록합니다.
    fn write_headers(&self, headers: &mut HeaderMap, decision: &RateLimitDecision) {
        let reset_secs = ceil_secs(decision.reset_after);
        let policy = format!("{};w={}", decision.limit, self.window.as_secs());

        headers.insert(
            HeaderName::from_static(RATELIMIT_LIMIT),
            HeaderValue::from(decision.limit),
        );
        headers.insert(
            HeaderName::from_static(RATELIMIT_REMAINING),
            HeaderValue::from(decision.remaining),
        );
        headers.insert(
            HeaderName::from_static(RATELIMIT_RESET),
            HeaderValue::from(reset_secs),
        );
        if let Ok(value) = HeaderValue::from_str(&policy) {
            headers.insert(HeaderName::from_static(RATELIMIT_POLICY), value);
        }
        if !decision.allowed {
            headers.insert(RETRY_AFTER, HeaderValue::from(reset_secs));
        }
    }
}

fn ceil_secs(duration: Duration) -> u64 {
    let secs = duration.as_secs();
    if duration.subsec_nanos() > 0 { secs + 1 } else { secs }
}

/// Rate Limiting 미들웨어
pub struct RateLimit {
    limiter: Arc<RateLimiter>,
}

impl RateLimit {
    pub fn new(limiter: Arc<RateLimiter>) -> Self {
        Self { limiter }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RateLimitService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitService {
            service: Rc::new(service),
            limiter: self.limiter.clone(),
        }))
    }
}

pub struct RateLimitService<S> {
    service: Rc<S>,
    limiter: Arc<RateLimiter>,
}

impl<S, B> Service<ServiceRequest> for RateLimitService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let limiter = self.limiter.clone();

        Box::pin(async move {
            let key = client_key(&req);
            let decision = limiter.check(&key);

            if !decision.allowed {
                log::warn!("⏳ 요청 빈도 초과: {} {}", key, req.path());
                let mut res = req
                    .error_response(AppError::TooManyRequests(RATE_LIMIT_MESSAGE.to_string()))
                    .map_into_right_body();
                limiter.write_headers(res.headers_mut(), &decision);
                return Ok(res);
            }

            let mut res = service.call(req).await?.map_into_left_body();
            limiter.write_headers(res.headers_mut(), &decision);
            Ok(res)
        })
    }
}

/// 요청 주체 주소. 프록시 헤더는 신뢰하지 않습니다.
fn client_key(req: &ServiceRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
