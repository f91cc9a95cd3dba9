//! # Application Factory
//!
//! 요청 파이프라인을 한 곳에서 조립합니다. `main`은 설정과 저장소를 만들어
//! [`AppState`]로 넘기고, 각 워커는 [`create_app`]으로 같은 파이프라인을 구성합니다.
//!
//! ## 파이프라인 순서 (바깥 → 안쪽)
//!
//! ```text
//! Logger
//!  └─ 종단 에러 처리기 (모든 실패를 { message } JSON으로)
//!      └─ Preflight 204 변환
//!          └─ CORS 허용 목록
//!              └─ Rate Limiting (RateLimit-* 헤더)
//!                  └─ 보안 헤더
//!                      └─ 경로 정규화, JSON 본문 파싱
//!                          ├─ 공개 라우트: POST /signin, POST /signup
//!                          └─ 인증 게이트
//!                              ├─ /users
//!                              ├─ /cards
//!                              └─ catch-all 404 "Invalid URL"
//! ```
//!
//! actix-web에서는 마지막에 `wrap`한 미들웨어가 가장 바깥에 위치합니다.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, Error};

use crate::config::AppConfig;
use crate::core::validation::json_config;
use crate::handlers;
use crate::middlewares::{
    cors, security_headers, AuthGate, AuthMiddleware, ErrorResponder, PreflightNoContent,
    RateLimit, RateLimiter,
};
use crate::repositories::{CardStore, UserStore};
use crate::routes;
use crate::services::{CardService, TokenService, UserService};

/// 요청 파이프라인 단계 (바깥 → 안쪽)
pub const PIPELINE: [&str; 12] = [
    "access log",
    "error handler",
    "preflight",
    "cors",
    "rate limit",
    "security headers",
    "normalize path",
    "json body",
    "public routes",
    "auth gate",
    "protected routes",
    "catch-all",
];

/// 워커 간에 공유되는 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<UserService>,
    pub cards: Arc<CardService>,
    pub tokens: Arc<TokenService>,
    pub limiter: Arc<RateLimiter>,
}

impl AppState {
    /// 설정과 저장소로부터 서비스 그래프를 구성합니다.
    pub fn new(config: AppConfig, users: Arc<dyn UserStore>, cards: Arc<dyn CardStore>) -> Self {
        let tokens = Arc::new(TokenService::from_config(&config.auth));
        let limiter = Arc::new(RateLimiter::new(&config.rate_limit));

        Self {
            users: Arc::new(UserService::new(users, tokens.clone(), config.auth.bcrypt_cost)),
            cards: Arc::new(CardService::new(cards)),
            tokens,
            limiter,
            config: Arc::new(config),
        }
    }
}

/// 애플리케이션을 조립합니다.
pub fn create_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    assemble(state, routes::configure_public_routes)
}

/// 공개 라우트 구성을 받아 전체 파이프라인을 조립합니다.
fn assemble<F>(
    state: AppState,
    public_routes: F,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    F: FnOnce(&mut web::ServiceConfig),
{
    let gate = AuthGate::from_config(&state.config.auth, state.tokens.clone());
    let cors = cors(&state.config.cors);
    let limiter = state.limiter.clone();

    // 빈 접두사 스코프가 나머지 모든 경로를 받으며, 중첩 스코프는 이 기본 서비스를 물려받습니다
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .configure(public_routes)
        .service(
            web::scope("")
                .wrap(AuthMiddleware::new(gate))
                .configure(routes::configure_protected_routes)
                .default_service(web::to(handlers::fallback::invalid_url)),
        )
        .wrap(NormalizePath::trim())
        .wrap(security_headers())
        .wrap(RateLimit::new(limiter))
        .wrap(cors)
        .wrap(PreflightNoContent)
        .wrap(ErrorResponder)
        .wrap(Logger::default())
}
