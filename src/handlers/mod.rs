pub mod cats;
pub mod login;
pub mod users;
