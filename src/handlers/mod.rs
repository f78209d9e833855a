pub mod auth;
pub mod portal;
pub mod views;
