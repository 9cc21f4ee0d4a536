pub mod auth;
pub mod json;

pub use auth::AuthAdmin;
pub use json::JsonBody;
