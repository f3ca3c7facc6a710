pub mod auth;
pub mod coords;
