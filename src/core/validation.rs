//! 요청 검증 포매터
//!
//! `validator` 크레이트의 검증 결과, JSON 본문 파싱 실패, 잘못된 경로 파라미터를
//! 모두 [`AppError::RequestValidation`]으로 변환하여 동일한 400 응답 형식을 보장합니다.

use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest};
use mongodb::bson::oid::ObjectId;
use validator::{Validate, ValidationErrors};

use crate::core::errors::{AppError, AppResult, RequestSource};

/// JSON 본문 최대 크기 (100 KiB)
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// 요청 본문 DTO를 검증합니다.
///
/// ```rust,ignore
/// validate_body(&payload)?;
/// ```
pub fn validate_body<T: Validate>(payload: &T) -> AppResult<()> {
    payload
        .validate()
        .map_err(|errors| from_validation_errors(RequestSource::Body, &errors))
}

/// 경로 파라미터를 MongoDB ObjectId로 파싱합니다.
///
/// 24자리 16진수 문자열이 아니면 `params` 검증 에러를 반환합니다.
pub fn parse_object_id(raw: &str, key: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| {
        AppError::request_validation(
            RequestSource::Params,
            vec![key.to_string()],
            format!("\"{}\" must be a valid id", key),
        )
    })
}

fn from_validation_errors(source: RequestSource, errors: &ValidationErrors) -> AppError {
    let mut fields: Vec<(String, Option<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let message = field_errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()));
            (field.to_string(), message)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let message = match fields.first() {
        Some((_, Some(message))) => message.clone(),
        Some((field, None)) => format!("\"{}\" is invalid", field),
        None => "Validation failed".to_string(),
    };
    let keys = fields.into_iter().map(|(field, _)| field).collect();

    AppError::request_validation(source, keys, message)
}

/// JSON 본문 파싱 단계 설정
///
/// 파싱 실패를 검증 에러로 변환하여 에러 처리 계층으로 전달합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패 ({}): {}", req.path(), err);

    let message = match &err {
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {}", e),
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "Request body is too large".to_string()
        }
        _ => "Invalid request body".to_string(),
    };

    AppError::request_validation(RequestSource::Body, Vec::new(), message).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[validate(length(min = 2, max = 30, message = "\"name\" length must be 2-30"))]
        name: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn test_validate_body_collects_sorted_keys() {
        let sample = Sample {
            name: "x".to_string(),
            email: "not-an-email".to_string(),
        };

        match validate_body(&sample) {
            Err(AppError::RequestValidation(failure)) => {
                assert_eq!(failure.source, RequestSource::Body);
                assert_eq!(failure.keys, vec!["email".to_string(), "name".to_string()]);
                assert_eq!(failure.message, "\"email\" is invalid");
            }
            other => panic!("Expected RequestValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_body_uses_field_message() {
        let sample = Sample {
            name: "x".to_string(),
            email: "cousteau@example.com".to_string(),
        };

        match validate_body(&sample) {
            Err(AppError::RequestValidation(failure)) => {
                assert_eq!(failure.keys, vec!["name".to_string()]);
                assert_eq!(failure.message, "\"name\" length must be 2-30");
            }
            other => panic!("Expected RequestValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_object_id() {
        assert!(parse_object_id("5d8b8592978f8bd833ca8a75", "userId").is_ok());

        match parse_object_id("123", "userId") {
            Err(AppError::RequestValidation(failure)) => {
                assert_eq!(failure.source, RequestSource::Params);
                assert_eq!(failure.keys, vec!["userId".to_string()]);
            }
            other => panic!("Expected RequestValidation, got {:?}", other),
        }
    }
}
