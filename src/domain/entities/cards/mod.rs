//! 카드 엔티티 모듈

pub mod card;

pub use card::Card;
