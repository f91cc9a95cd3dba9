//! # 카드 리포지토리 구현
//!
//! 좋아요 변경은 `$addToSet` / `$pull`로 원자적으로 처리하므로
//! 같은 사용자가 여러 번 요청해도 `likes`는 집합으로 유지됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::cards::Card;

/// `cards` 컬렉션 이름
pub const CARDS_COLLECTION: &str = "cards";

/// 카드 저장소 추상화
#[async_trait]
pub trait CardStore: Send + Sync {
    async fn create(&self, card: Card) -> AppResult<Card>;

    /// 모든 카드를 최신순으로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<Card>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Card>>;

    /// 카드를 삭제합니다. 삭제된 문서가 있으면 `true`.
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;

    async fn add_like(&self, id: &ObjectId, user_id: &ObjectId) -> AppResult<Option<Card>>;

    async fn remove_like(&self, id: &ObjectId, user_id: &ObjectId) -> AppResult<Option<Card>>;
}

/// MongoDB 기반 카드 리포지토리
#[derive(Clone)]
pub struct CardRepository {
    collection: Collection<Card>,
}

impl CardRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<Card>(CARDS_COLLECTION),
        }
    }

    /// 생성일 내림차순 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(created_at_index).await?;

        log::info!("📇 cards 인덱스 생성 완료");
        Ok(())
    }

    async fn update_likes(&self, id: &ObjectId, update: Document) -> AppResult<Option<Card>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, update)
            .with_options(options)
            .await?;

        Ok(updated)
    }
}

#[async_trait]
impl CardStore for CardRepository {
    async fn create(&self, mut card: Card) -> AppResult<Card> {
        let result = self.collection.insert_one(&card).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("inserted_id is not an ObjectId".to_string()))?;
        card.id = Some(id);

        Ok(card)
    }

    async fn find_all(&self) -> AppResult<Vec<Card>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Card>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn add_like(&self, id: &ObjectId, user_id: &ObjectId) -> AppResult<Option<Card>> {
        self.update_likes(id, doc! { "$addToSet": { "likes": user_id } })
            .await
    }

    async fn remove_like(&self, id: &ObjectId, user_id: &ObjectId) -> AppResult<Option<Card>> {
        self.update_likes(id, doc! { "$pull": { "likes": user_id } })
            .await
    }
}
