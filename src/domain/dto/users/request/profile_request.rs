//! 프로필 변경 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::users::ProfileUpdate;

/// `PATCH /users/me` 본문
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 30, message = "\"name\" length must be between 2 and 30 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 30, message = "\"about\" length must be between 2 and 30 characters"))]
    pub about: String,
}

/// `PATCH /users/me/avatar` 본문
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAvatarRequest {
    #[validate(url(message = "\"avatar\" must be a valid uri"))]
    pub avatar: String,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate::Info {
            name: request.name,
            about: request.about,
        }
    }
}

impl From<UpdateAvatarRequest> for ProfileUpdate {
    fn from(request: UpdateAvatarRequest) -> Self {
        ProfileUpdate::Avatar(request.avatar)
    }
}
