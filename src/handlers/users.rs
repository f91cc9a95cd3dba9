//! User HTTP Handlers
//!
//! `/users` 스코프 핸들러입니다. 모두 인증 게이트 뒤에서 실행되며
//! `/me` 경로는 `/{user_id}`보다 먼저 등록되어야 합니다.

use actix_web::{patch, route, web, HttpResponse};

use crate::app::AppState;
use crate::core::errors::AppError;
use crate::core::validation::{parse_object_id, validate_body};
use crate::domain::dto::users::{UpdateAvatarRequest, UpdateProfileRequest};
use crate::domain::models::auth::CurrentUser;

#[route("", method = "GET", method = "HEAD")]
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = state.users.list().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[route("/me", method = "GET", method = "HEAD")]
pub async fn get_current_user(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let user = state.users.get(&user.object_id()?).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[patch("/me")]
pub async fn update_profile(
    state: web::Data<AppState>,
    user: CurrentUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    validate_body(&*payload)?;

    let updated = state
        .users
        .update_profile(&user.object_id()?, payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[patch("/me/avatar")]
pub async fn update_avatar(
    state: web::Data<AppState>,
    user: CurrentUser,
    payload: web::Json<UpdateAvatarRequest>,
) -> Result<HttpResponse, AppError> {
    validate_body(&*payload)?;

    let updated = state
        .users
        .update_profile(&user.object_id()?, payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[route("/{user_id}", method = "GET", method = "HEAD")]
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = parse_object_id(&path, "userId")?;
    let user = state.users.get(&user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}
