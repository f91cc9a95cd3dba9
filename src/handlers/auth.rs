//! Authentication HTTP Handlers
//!
//! 인증 게이트 앞에 등록되는 공개 엔드포인트입니다.
//!
//! - `POST /signup` - 회원가입
//! - `POST /signin` - 로그인, `jwt` 쿠키 설정

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{post, web, HttpResponse};

use crate::app::AppState;
use crate::core::errors::AppError;
use crate::core::validation::validate_body;
use crate::domain::dto::users::{SigninRequest, SigninResponse, SignupRequest};
use crate::middlewares::AUTH_COOKIE;

#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    validate_body(&*payload)?;

    let user = state.users.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

/// 로그인
///
/// 토큰을 본문과 HttpOnly 쿠키 양쪽으로 돌려줍니다.
#[post("/signin")]
pub async fn signin(
    state: web::Data<AppState>,
    payload: web::Json<SigninRequest>,
) -> Result<HttpResponse, AppError> {
    validate_body(&*payload)?;

    let token = state.users.signin(payload.into_inner()).await?;
    let max_age = CookieDuration::seconds(state.tokens.ttl().num_seconds());

    let cookie = Cookie::build(AUTH_COOKIE, token.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(max_age)
        .finish();

    log::info!("🔑 로그인 성공");

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(SigninResponse { token }))
}
