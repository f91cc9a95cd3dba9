use serde::{Deserialize, Serialize};

/// JWT 페이로드
///
/// `_id`는 사용자 ObjectId의 16진 문자열입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "_id")]
    pub id: String,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}
