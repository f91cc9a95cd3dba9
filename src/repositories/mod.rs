//! # Repository Layer
//!
//! 컬렉션별 데이터 액세스 trait과 MongoDB 구현입니다.
//! 리포지토리는 `main`에서 한 번 생성되어 서비스에 `Arc<dyn ...>`로 주입됩니다.

pub mod cards;
pub mod users;

#[cfg(test)]
pub mod memory;

pub use cards::{CardRepository, CardStore};
pub use users::{UserRepository, UserStore};
