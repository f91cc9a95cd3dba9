//! 요청 식별자 (Request Identity)
//!
//! 인증 게이트가 요청 extensions에 붙이는 `{ _id }` 값과,
//! 핸들러에서 이를 꺼내는 extractor를 정의합니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! async fn current(user: CurrentUser, state: web::Data<AppState>) -> AppResult<HttpResponse> {
//!     let id = user.object_id()?;
//!     ...
//! }
//! ```

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};

/// 인증된 요청 주체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "_id")]
    pub id: String,
}

impl CurrentUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// 식별자를 ObjectId로 변환합니다.
    ///
    /// 게이트가 붙인 값이 ObjectId 형식이 아니면 인증 실패로 처리합니다.
    pub fn object_id(&self) -> AppResult<ObjectId> {
        ObjectId::parse_str(&self.id)
            .map_err(|_| AppError::AuthenticationError("Authorization required".to_string()))
    }
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<CurrentUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Authorization required".to_string(),
            )
            .into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_identity_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut()
            .insert(CurrentUser::new("5d8b8592978f8bd833ca8a75"));

        let user = CurrentUser::extract(&req).await.unwrap();
        assert_eq!(user.id, "5d8b8592978f8bd833ca8a75");
        assert!(user.object_id().is_ok());
    }

    #[actix_web::test]
    async fn test_missing_identity_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let error = CurrentUser::extract(&req).await.unwrap_err();

        assert_eq!(
            error.as_response_error().status_code(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_malformed_identity_is_rejected() {
        assert!(CurrentUser::new("not-an-id").object_id().is_err());
    }
}
