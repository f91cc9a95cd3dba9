//! 카드 관련 DTO

pub mod request;
pub mod response;

pub use request::CreateCardRequest;
pub use response::CardResponse;
