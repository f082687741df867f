pub mod input;
pub mod mvi;
pub mod render;
pub mod users;
