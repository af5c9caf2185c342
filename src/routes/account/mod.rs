pub mod auth;

pub use auth::{signin, signup, user_session};
