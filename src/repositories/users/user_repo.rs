//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! 서비스 계층은 [`UserStore`] trait에만 의존하고, 운영 환경에서는
//! MongoDB 구현인 [`UserRepository`]가 주입됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::{ProfileUpdate, User};

/// `users` 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// 이메일 중복 시 반환하는 메시지
pub const DUPLICATE_EMAIL_MESSAGE: &str = "User with this email already exists";

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 저장소 추상화
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자를 저장하고 `_id`가 채워진 엔티티를 반환합니다.
    ///
    /// 이메일이 이미 존재하면 [`AppError::ConflictError`]를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 프로필을 변경하고 변경된 문서를 반환합니다. 대상이 없으면 `None`.
    async fn update_profile(&self, id: &ObjectId, update: ProfileUpdate) -> AppResult<Option<User>>;
}

/// MongoDB 기반 사용자 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<User>(USERS_COLLECTION),
        }
    }

    /// 이메일 유니크 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(email_index).await?;

        log::info!("📇 users 인덱스 생성 완료");
        Ok(())
    }
}

fn update_document(update: &ProfileUpdate) -> Document {
    match update {
        ProfileUpdate::Info { name, about } => doc! { "$set": { "name": name, "about": about } },
        ProfileUpdate::Avatar(avatar) => doc! { "$set": { "avatar": avatar } },
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }

        // 사전 확인과 저장 사이의 경쟁은 유니크 인덱스가 막습니다
        let result = self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError(DUPLICATE_EMAIL_MESSAGE.to_string())
            } else {
                AppError::from(e)
            }
        })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("inserted_id is not an ObjectId".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    async fn update_profile(&self, id: &ObjectId, update: ProfileUpdate) -> AppResult<Option<User>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, update_document(&update))
            .with_options(options)
            .await?;

        Ok(updated)
    }
}
