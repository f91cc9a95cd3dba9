//! Card HTTP Handlers

use actix_web::{delete, post, put, route, web, HttpResponse};

use crate::app::AppState;
use crate::core::errors::AppError;
use crate::core::validation::{parse_object_id, validate_body};
use crate::domain::dto::cards::CreateCardRequest;
use crate::domain::models::auth::CurrentUser;

#[route("", method = "GET", method = "HEAD")]
pub async fn list_cards(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let cards = state.cards.list().await?;
    Ok(HttpResponse::Ok().json(cards))
}

#[post("")]
pub async fn create_card(
    state: web::Data<AppState>,
    user: CurrentUser,
    payload: web::Json<CreateCardRequest>,
) -> Result<HttpResponse, AppError> {
    validate_body(&*payload)?;

    let card = state
        .cards
        .create(user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(card))
}

/// 카드 삭제. 작성자만 가능합니다.
#[delete("/{card_id}")]
pub async fn delete_card(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let card_id = parse_object_id(&path, "cardId")?;
    let card = state.cards.delete(&card_id, &user.object_id()?).await?;
    Ok(HttpResponse::Ok().json(card))
}

#[put("/{card_id}/likes")]
pub async fn like_card(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let card_id = parse_object_id(&path, "cardId")?;
    let card = state.cards.like(&card_id, &user.object_id()?).await?;
    Ok(HttpResponse::Ok().json(card))
}

#[delete("/{card_id}/likes")]
pub async fn unlike_card(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let card_id = parse_object_id(&path, "cardId")?;
    let card = state.cards.unlike(&card_id, &user.object_id()?).await?;
    Ok(HttpResponse::Ok().json(card))
}
