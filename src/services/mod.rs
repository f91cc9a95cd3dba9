//! # Service Layer
//!
//! 핸들러와 리포지토리 사이의 비즈니스 로직입니다.
//! 모든 서비스는 생성자로 의존성을 주입받고 `AppState`에 `Arc`로 보관됩니다.

pub mod auth;
pub mod cards;
pub mod users;

pub use auth::TokenService;
pub use cards::CardService;
pub use users::UserService;
