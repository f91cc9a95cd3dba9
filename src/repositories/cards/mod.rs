//! 카드 데이터 액세스 계층

pub mod card_repo;

pub use card_repo::{CardRepository, CardStore};
