//! # 카드 서비스 구현
//!
//! 카드 생성, 삭제(작성자 확인), 좋아요/좋아요 취소를 담당합니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::cards::{CardResponse, CreateCardRequest};
use crate::domain::entities::cards::Card;
use crate::repositories::cards::CardStore;

pub const CARD_NOT_FOUND_MESSAGE: &str = "Card not found";

pub const NOT_CARD_OWNER_MESSAGE: &str = "You can only delete your own cards";

pub struct CardService {
    cards: Arc<dyn CardStore>,
}

impl CardService {
    pub fn new(cards: Arc<dyn CardStore>) -> Self {
        Self { cards }
    }

    pub async fn list(&self) -> AppResult<Vec<CardResponse>> {
        let cards = self.cards.find_all().await?;
        Ok(cards.into_iter().map(CardResponse::from).collect())
    }

    /// 호출자를 작성자로 하는 카드를 생성합니다.
    pub async fn create(&self, owner: ObjectId, request: CreateCardRequest) -> AppResult<CardResponse> {
        let card = self
            .cards
            .create(Card::new(request.name, request.link, owner))
            .await?;

        Ok(CardResponse::from(card))
    }

    /// 카드를 삭제합니다.
    ///
    /// 작성자가 아니면 403, 카드가 없으면 404를 반환합니다.
    pub async fn delete(&self, card_id: &ObjectId, caller: &ObjectId) -> AppResult<CardResponse> {
        let card = self
            .cards
            .find_by_id(card_id)
            .await?
            .ok_or_else(not_found)?;

        if !card.is_owned_by(caller) {
            log::warn!("🚫 카드 {} 삭제 거부: 작성자가 아닌 사용자 {}", card_id, caller);
            return Err(AppError::AuthorizationError(NOT_CARD_OWNER_MESSAGE.to_string()));
        }

        // 확인 후 다른 요청이 먼저 삭제한 경우
        if !self.cards.delete(card_id).await? {
            return Err(not_found());
        }

        Ok(CardResponse::from(card))
    }

    pub async fn like(&self, card_id: &ObjectId, caller: &ObjectId) -> AppResult<CardResponse> {
        self.cards
            .add_like(card_id, caller)
            .await?
            .map(CardResponse::from)
            .ok_or_else(not_found)
    }

    pub async fn unlike(&self, card_id: &ObjectId, caller: &ObjectId) -> AppResult<CardResponse> {
        self.cards
            .remove_like(card_id, caller)
            .await?
            .map(CardResponse::from)
            .ok_or_else(not_found)
    }
}

fn not_found() -> AppError {
    AppError::NotFound(CARD_NOT_FOUND_MESSAGE.to_string())
}
