use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::core::AppError;
use crate::domain::models::auth::CurrentUser;
use crate::middlewares::auth_middleware::AuthGate;
use crate::services::auth::token_service::AUTH_REQUIRED_MESSAGE;
use crate::services::auth::TokenService;

/// 인증 토큰이 담기는 쿠키 이름
pub const AUTH_COOKIE: &str = "jwt";

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub gate: AuthGate,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let gate = self.gate.clone();

        Box::pin(async move {
            let identity = match &gate {
                AuthGate::Fixed(user) => Ok(user.clone()),
                AuthGate::Token(tokens) => identify(&req, tokens),
            };

            match identity {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.id);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패 ({}): {}", req.path(), err);
                    return Ok(req.error_response(err).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 쿠키를 먼저, 없으면 Authorization 헤더를 확인합니다.
fn identify(req: &ServiceRequest, tokens: &TokenService) -> Result<CurrentUser, AppError> {
    let from_cookie = req
        .request()
        .cookie(AUTH_COOKIE)
        .map(|cookie| cookie.value().to_string());

    let from_header = || {
        req.headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(TokenService::extract_bearer_token)
            .map(str::to_string)
    };

    let token = from_cookie
        .or_else(from_header)
        .ok_or_else(|| AppError::AuthenticationError(AUTH_REQUIRED_MESSAGE.to_string()))?;

    let claims = tokens.verify(&token)?;

    Ok(CurrentUser::new(claims.id))
}
