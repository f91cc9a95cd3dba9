//! Card Entity Implementation
//!
//! `cards` 컬렉션에 저장되는 사진 카드 문서입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 카드 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 이미지 URL
    pub link: String,
    /// 작성자 사용자 ID
    pub owner: ObjectId,
    /// 좋아요를 누른 사용자 ID 집합
    #[serde(default)]
    pub likes: Vec<ObjectId>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
}

impl Card {
    pub fn new(name: String, link: String, owner: ObjectId) -> Self {
        Self {
            id: None,
            name,
            link,
            owner,
            likes: Vec::new(),
            created_at: DateTime::now(),
        }
    }

    /// 주어진 사용자가 작성자인지 확인
    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        &self.owner == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership() {
        let owner = ObjectId::new();
        let card = Card::new("Baikal".into(), "https://example.com/b.jpg".into(), owner);

        assert!(card.likes.is_empty());
        assert!(card.is_owned_by(&owner));
        assert!(!card.is_owned_by(&ObjectId::new()));
    }
}
