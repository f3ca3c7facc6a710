pub mod cat;
pub mod user;
