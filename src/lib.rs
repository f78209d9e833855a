pub mod config;
pub mod error;
pub mod guard;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod upstream;
