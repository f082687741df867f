//! Domain model for the user list.

mod user;
mod validation;

pub use user::{User, MAX_USER_ID};
pub use validation::{is_valid_email, is_valid_name};
