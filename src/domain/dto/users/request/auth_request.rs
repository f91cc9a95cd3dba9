//! 인증 요청 DTO
//!
//! 공개 라우트 `POST /signup`, `POST /signin`의 본문입니다.

use serde::Deserialize;
use validator::Validate;

/// 회원가입 요청
///
/// 프로필 필드는 선택 사항이며, 생략하면 엔티티 기본값이 적용됩니다.
///
/// ```json
/// {
///   "email": "cousteau@mesto.io",
///   "password": "calypso",
///   "name": "Jacques-Yves Cousteau"
/// }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 30, message = "\"name\" length must be between 2 and 30 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 2, max = 30, message = "\"about\" length must be between 2 and 30 characters"))]
    pub about: Option<String>,

    #[validate(url(message = "\"avatar\" must be a valid uri"))]
    pub avatar: Option<String>,

    #[validate(email(message = "\"email\" must be a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "\"password\" is not allowed to be empty"))]
    pub password: String,
}

/// 로그인 요청
#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email(message = "\"email\" must be a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "\"password\" is not allowed to be empty"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_profile_fields_are_optional() {
        let request: SignupRequest =
            serde_json::from_str(r#"{"email":"a@mesto.io","password":"secret"}"#).unwrap();

        assert!(request.validate().is_ok());
        assert!(request.name.is_none());
    }

    #[test]
    fn test_signup_rejects_short_name_and_bad_avatar() {
        let request = SignupRequest {
            name: Some("J".into()),
            about: None,
            avatar: Some("not a url".into()),
            email: "a@mesto.io".into(),
            password: "secret".into(),
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("avatar"));
    }

    #[test]
    fn test_signin_requires_valid_email() {
        let request = SigninRequest {
            email: "nope".into(),
            password: "secret".into(),
        };
        assert!(request.validate().is_err());
    }
}
