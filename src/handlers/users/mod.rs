mod account;
mod query;

pub use account::{user_delete_current, user_post, user_put_current};
pub use query::{check_token, user_get, user_list};
