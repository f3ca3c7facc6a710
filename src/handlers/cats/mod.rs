mod admin;
mod mutate;
mod query;

pub use admin::{cat_delete_admin, cat_put_admin};
pub use mutate::{cat_delete, cat_post, cat_put};
pub use query::{cat_get, cat_get_by_area, cat_get_by_owner, cat_list};
