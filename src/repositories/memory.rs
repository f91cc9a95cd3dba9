//! 테스트용 인메모리 저장소
//!
//! MongoDB 없이 전체 파이프라인을 검증하기 위해 [`UserStore`]와 [`CardStore`]를
//! `Mutex<Vec<_>>`로 구현합니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::cards::Card;
use crate::domain::entities::users::{ProfileUpdate, User};
use crate::repositories::cards::CardStore;
use crate::repositories::users::user_repo::DUPLICATE_EMAIL_MESSAGE;
use crate::repositories::users::UserStore;

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    /// 미리 채워진 저장소를 생성합니다. `_id`가 없는 사용자에게는 새 ID를 할당합니다.
    pub fn with_users(users: Vec<User>) -> Self {
        let users = users
            .into_iter()
            .map(|mut user| {
                user.id.get_or_insert_with(ObjectId::new);
                user
            })
            .collect();
        Self {
            users: Mutex::new(users),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn update_profile(&self, id: &ObjectId, update: ProfileUpdate) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        Ok(users
            .iter_mut()
            .find(|u| u.id.as_ref() == Some(id))
            .map(|user| {
                match &update {
                    ProfileUpdate::Info { name, about } => {
                        user.name = name.clone();
                        user.about = about.clone();
                    }
                    ProfileUpdate::Avatar(avatar) => user.avatar = avatar.clone(),
                }
                user.clone()
            }))
    }
}

#[derive(Default)]
pub struct MemoryCardStore {
    cards: Mutex<Vec<Card>>,
}

impl MemoryCardStore {
    fn modify<F>(&self, id: &ObjectId, f: F) -> Option<Card>
    where
        F: FnOnce(&mut Card),
    {
        let mut cards = self.cards.lock().unwrap();
        cards.iter_mut().find(|c| c.id.as_ref() == Some(id)).map(|card| {
            f(card);
            card.clone()
        })
    }
}

#[async_trait]
impl CardStore for MemoryCardStore {
    async fn create(&self, mut card: Card) -> AppResult<Card> {
        card.id = Some(ObjectId::new());
        self.cards.lock().unwrap().push(card.clone());
        Ok(card)
    }

    async fn find_all(&self) -> AppResult<Vec<Card>> {
        // 같은 밀리초에 생성된 카드는 나중에 저장된 것이 먼저 옵니다
        let mut cards: Vec<Card> = self.cards.lock().unwrap().iter().rev().cloned().collect();
        cards.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(cards)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Card>> {
        let cards = self.cards.lock().unwrap();
        Ok(cards.iter().find(|c| c.id.as_ref() == Some(id)).cloned())
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut cards = self.cards.lock().unwrap();
        let before = cards.len();
        cards.retain(|c| c.id.as_ref() != Some(id));
        Ok(cards.len() != before)
    }

    async fn add_like(&self, id: &ObjectId, user_id: &ObjectId) -> AppResult<Option<Card>> {
        // $addToSet
        Ok(self.modify(id, |card| {
            if !card.likes.contains(user_id) {
                card.likes.push(*user_id);
            }
        }))
    }

    async fn remove_like(&self, id: &ObjectId, user_id: &ObjectId) -> AppResult<Option<Card>> {
        // $pull
        Ok(self.modify(id, |card| card.likes.retain(|liked| liked != user_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_likes_behave_as_a_set() {
        let store = MemoryCardStore::default();
        let owner = ObjectId::new();
        let fan = ObjectId::new();
        let card = store
            .create(Card::new("Baikal".into(), "https://example.com/b.jpg".into(), owner))
            .await
            .unwrap();
        let id = card.id.unwrap();

        store.add_like(&id, &fan).await.unwrap();
        let liked = store.add_like(&id, &fan).await.unwrap().unwrap();
        assert_eq!(liked.likes, vec![fan]);

        let unliked = store.remove_like(&id, &fan).await.unwrap().unwrap();
        assert!(unliked.likes.is_empty());
        assert!(store.add_like(&ObjectId::new(), &fan).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_profile_updates_are_applied() {
        let store = MemoryUserStore::with_users(vec![User::new(
            Some("Jane".into()),
            None,
            None,
            "a@b.io".into(),
            "hash".into(),
        )]);
        let id = store.find_by_email("a@b.io").await.unwrap().unwrap().id.unwrap();

        store
            .update_profile(
                &id,
                ProfileUpdate::Info {
                    name: "Marie".into(),
                    about: "Chemist".into(),
                },
            )
            .await
            .unwrap();
        let user = store
            .update_profile(&id, ProfileUpdate::Avatar("https://example.com/m.png".into()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.name, "Marie");
        assert_eq!(user.about, "Chemist");
        assert_eq!(user.avatar, "https://example.com/m.png");
    }
}
