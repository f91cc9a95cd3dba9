//! # CORS 정책
//!
//! 허용 목록에 있는 Origin만 교차 출처 요청을 할 수 있습니다.
//! 목록에 없는 Origin의 요청은 라우터에 도달하기 전에 400으로 거부됩니다.
//!
//! `actix-cors`는 preflight(OPTIONS) 요청에 200으로 응답하므로,
//! 바깥에 [`PreflightNoContent`]를 두어 본문 없는 204로 바꿉니다.

use std::future::{ready, Ready};

use actix_cors::Cors;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{header, Method, StatusCode};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;

use crate::config::CorsConfig;

/// 허용 메서드
pub const ALLOWED_METHODS: [&str; 6] = ["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"];

/// preflight 결과 캐시 시간 (초)
const PREFLIGHT_MAX_AGE: usize = 3600;

/// 설정으로부터 CORS 미들웨어를 생성합니다.
pub fn cors(config: &CorsConfig) -> Cors {
    let cors = config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(ALLOWED_METHODS)
        .allowed_headers([
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
        ])
        .supports_credentials()
        .block_on_origin_mismatch(true)
        .max_age(PREFLIGHT_MAX_AGE)
}

/// preflight 성공 응답을 204로 바꾸는 미들웨어
pub struct PreflightNoContent;

impl<S, B> Transform<S, ServiceRequest> for PreflightNoContent
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = PreflightNoContentService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PreflightNoContentService { service }))
    }
}

pub struct PreflightNoContentService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for PreflightNoContentService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let is_preflight = req.method() == Method::OPTIONS
            && req
                .headers()
                .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            if is_preflight && res.status() == StatusCode::OK {
                *res.response_mut().status_mut() = StatusCode::NO_CONTENT;
            }
            Ok(res)
        })
    }
}
