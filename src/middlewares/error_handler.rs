//! # 종단 에러 처리기
//!
//! 파이프라인의 가장 바깥에서 모든 실패를 `{ "message": ... }` JSON으로 정규화합니다.
//!
//! - 응답에 에러가 붙어 있는 경우 (핸들러의 `AppError`, CORS 거부, 추출기 실패 등)
//! - JSON이 아닌 4xx/5xx 응답
//! - 내부 서비스가 `Err`를 반환한 경우: 응답 매퍼를 붙여 그대로 전파하고,
//!   서버가 응답을 만들 때 같은 형식으로 렌더링됩니다
//!
//! 5xx는 원인을 로그에 남기고 클라이언트에는 일반 메시지만 보냅니다.
//! 다른 미들웨어가 붙인 헤더(CORS, RateLimit, 보안 헤더)는 유지됩니다.
//!
//! 내부 서비스가 실행되는 동안 `HttpRequest`를 복제해 두면 안쪽의 `NormalizePath`가
//! 요청 헤드를 수정할 수 없으므로, 요청은 내부 서비스로 그대로 넘깁니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderMap, CONTENT_LENGTH, CONTENT_TYPE};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::{message_response, AppError, SERVER_ERROR_MESSAGE};

pub struct ErrorResponder;

impl<S, B> Transform<S, ServiceRequest> for ErrorResponder
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ErrorResponderService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorResponderService {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorResponderService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorResponderService<S>
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

        Box::pin(async move {
            let res = match service.call(req).await {
                Ok(res) => res,
                Err(mut err) => {
                    let message = client_message(&err);
                    err.add_response_mapper(move |res| normalize_response(res, &message));
                    return Err(err);
                }
            };

            if let Some(err) = res.response().error() {
                let rendered = render_error(err);
                return Ok(replace_body(res, rendered));
            }

            let status = res.status();
            if (status.is_client_error() || status.is_server_error()) && !is_json(res.headers()) {
                if status.is_server_error() {
                    log::error!("💥 {} {} -> {}", res.request().method(), res.request().path(), status);
                }
                let rendered = message_response(status, fallback_message(status));
                return Ok(replace_body(res, rendered));
            }

            Ok(res.map_into_left_body())
        })
    }
}

/// 에러를 JSON 응답으로 렌더링합니다.
fn render_error(err: &Error) -> HttpResponse {
    if let Some(app_error) = err.as_error::<AppError>() {
        if app_error.status_code().is_server_error() {
            log::error!("💥 {}", app_error);
        }
        return app_error.error_response();
    }

    message_response(err.as_response_error().status_code(), &client_message(err))
}

/// 클라이언트에 보낼 메시지. 5xx는 로그만 남기고 일반 메시지로 바꿉니다.
fn client_message(err: &Error) -> String {
    if err.as_response_error().status_code().is_server_error() {
        log::error!("💥 처리되지 않은 에러: {}", err);
        SERVER_ERROR_MESSAGE.to_string()
    } else {
        err.to_string()
    }
}

/// 전파되는 에러의 응답을 `{ message }` JSON으로 맞춥니다. 이미 JSON이면 그대로 둡니다.
fn normalize_response(res: HttpResponse, message: &str) -> HttpResponse {
    if is_json(res.headers()) {
        return res;
    }

    let mut rendered = message_response(res.status(), message);
    copy_headers(res.headers(), &mut rendered);
    rendered
}

fn fallback_message(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        SERVER_ERROR_MESSAGE
    } else {
        status.canonical_reason().unwrap_or("Request failed")
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

/// 원래 응답의 헤더를 유지하면서 본문을 교체합니다.
fn replace_body<B>(res: ServiceResponse<B>, mut rendered: HttpResponse) -> ServiceResponse<EitherBody<B>> {
    let (req, original) = res.into_parts();
    copy_headers(original.headers(), &mut rendered);
    ServiceResponse::new(req, rendered).map_into_right_body()
}

fn copy_headers(from: &HeaderMap, to: &mut HttpResponse) {
    for (name, value) in from {
        if name != CONTENT_TYPE && name != CONTENT_LENGTH {
            to.headers_mut().append(name.clone(), value.clone());
        }
    }
}
