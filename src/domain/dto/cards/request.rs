use serde::Deserialize;
use validator::Validate;

/// `POST /cards` 본문
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCardRequest {
    #[validate(length(min = 2, max = 30, message = "\"name\" length must be between 2 and 30 characters"))]
    pub name: String,

    #[validate(url(message = "\"link\" must be a valid uri"))]
    pub link: String,
}
