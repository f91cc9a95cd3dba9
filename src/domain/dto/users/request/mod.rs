pub mod auth_request;
pub mod profile_request;

pub use auth_request::{SigninRequest, SignupRequest};
pub use profile_request::{UpdateAvatarRequest, UpdateProfileRequest};
