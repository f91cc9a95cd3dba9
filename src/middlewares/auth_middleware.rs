//! # 인증 게이트 미들웨어
//!
//! 보호 라우트(`/users`, `/cards`) 앞에서 요청 식별자를 확정합니다.
//!
//! - [`AuthGate::Token`]: `jwt` 쿠키 또는 `Authorization: Bearer` 헤더의 토큰을 검증합니다.
//!   실패하면 401 `{ "message": "Authorization required" }`로 즉시 응답합니다.
//! - [`AuthGate::Fixed`]: 자격 증명과 무관하게 고정된 식별자를 붙입니다.
//!
//! 성공 시 [`CurrentUser`]가 request extensions에 저장되고,
//! 핸들러는 extractor로 이를 꺼냅니다.
//!
//! ```rust,ignore
//! web::scope("")
//!     .wrap(AuthMiddleware::new(AuthGate::Token(tokens.clone())))
//!     .configure(routes::configure_protected_routes)
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::config::{AuthConfig, AuthMode};
use crate::domain::models::auth::CurrentUser;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// 인증 게이트 동작 방식
#[derive(Clone)]
pub enum AuthGate {
    /// JWT 검증
    Token(Arc<TokenService>),
    /// 고정 식별자 주입
    Fixed(CurrentUser),
}

impl AuthGate {
    /// 설정에 따라 게이트를 선택합니다.
    pub fn from_config(config: &AuthConfig, tokens: Arc<TokenService>) -> Self {
        match config.mode {
            AuthMode::Token => AuthGate::Token(tokens),
            AuthMode::Stub => AuthGate::Fixed(CurrentUser::new(config.stub_user_id.clone())),
        }
    }
}

pub struct AuthMiddleware {
    gate: AuthGate,
}

impl AuthMiddleware {
    pub fn new(gate: AuthGate) -> Self {
        Self { gate }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            gate: self.gate.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App, HttpResponse};
    use chrono::Duration;

    async fn whoami(user: CurrentUser) -> HttpResponse {
        HttpResponse::Ok().json(user)
    }

    fn tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new("test-secret", Duration::days(7)))
    }

    #[actix_web::test]
    async fn test_token_gate_accepts_cookie() {
        let tokens = tokens();
        let token = tokens.issue("5d8b8592978f8bd833ca8a75").unwrap();
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(AuthGate::Token(tokens)))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new("jwt", token))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["_id"], "5d8b8592978f8bd833ca8a75");
    }

    #[actix_web::test]
    async fn test_token_gate_accepts_bearer_header() {
        let tokens = tokens();
        let token = tokens.issue("5d8b8592978f8bd833ca8a75").unwrap();
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(AuthGate::Token(tokens)))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_token_gate_rejects_missing_token() {
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(AuthGate::Token(tokens())))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Authorization required");
    }

    #[actix_web::test]
    async fn test_fixed_gate_ignores_credentials() {
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(AuthGate::Fixed(CurrentUser::new(
                    "5d8b8592978f8bd833ca8a75",
                ))))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, "Bearer forged.token.value"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["_id"], "5d8b8592978f8bd833ca8a75");
    }
}
