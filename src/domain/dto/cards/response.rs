//! 카드 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::cards::Card;

/// 클라이언트에 반환되는 카드
///
/// ```json
/// {
///   "_id": "5d8b8592978f8bd833ca8a76",
///   "name": "Baikal",
///   "link": "https://pictures.example/baikal.jpg",
///   "owner": "5d8b8592978f8bd833ca8a75",
///   "likes": [],
///   "createdAt": "2024-03-01T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub link: String,
    pub owner: String,
    pub likes: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        let created_at = card
            .created_at
            .try_to_rfc3339_string()
            .unwrap_or_else(|_| card.created_at.timestamp_millis().to_string());

        Self {
            id: card.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: card.name,
            link: card.link,
            owner: card.owner.to_hex(),
            likes: card.likes.iter().map(|id| id.to_hex()).collect(),
            created_at,
        }
    }
}
