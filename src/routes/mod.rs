//! # Route Configuration
//!
//! 공개 라우트와 보호 라우트를 나누어 등록합니다.
//! 보호 라우트는 `app::create_app`에서 인증 게이트로 감싸집니다.
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | POST | `/signup` | - |
//! | POST | `/signin` | - |
//! | GET, HEAD | `/users` | ✓ |
//! | GET, HEAD | `/users/me` | ✓ |
//! | PATCH | `/users/me` | ✓ |
//! | PATCH | `/users/me/avatar` | ✓ |
//! | GET, HEAD | `/users/{userId}` | ✓ |
//! | GET, HEAD | `/cards` | ✓ |
//! | POST | `/cards` | ✓ |
//! | DELETE | `/cards/{cardId}` | ✓ |
//! | PUT | `/cards/{cardId}/likes` | ✓ |
//! | DELETE | `/cards/{cardId}/likes` | ✓ |

use actix_web::web;

use crate::handlers;

/// 인증 없이 접근 가능한 라우트
pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::signin)
        .service(handlers::auth::signup);
}

/// 인증 게이트 뒤의 라우트 (users, cards 순)
pub fn configure_protected_routes(cfg: &mut web::ServiceConfig) {
    configure_user_routes(cfg);
    configure_card_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // `/me` 경로가 `/{user_id}`에 먼저 매칭되지 않도록 순서를 유지합니다
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::get_current_user)
            .service(handlers::users::update_profile)
            .service(handlers::users::update_avatar)
            .service(handlers::users::get_user),
    );
}

fn configure_card_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cards")
            .service(handlers::cards::list_cards)
            .service(handlers::cards::create_card)
            .service(handlers::cards::delete_card)
            .service(handlers::cards::like_card)
            .service(handlers::cards::unlike_card),
    );
}
