//! Store operations for the `users` collection.
//!
//! Every query that leaves this module selects the public projection only;
//! the full row (with the password hash) is exposed solely to the login path.

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DbError;
use crate::database::models::user::{User, UserPublic, UserUpdate};

const PUBLIC_COLUMNS: &str = "id, user_name, email";

pub async fn find_public(pool: &PgPool, id: Uuid) -> Result<Option<UserPublic>, DbError> {
    let user = sqlx::query_as::<_, UserPublic>(&format!(
        "SELECT {} FROM users WHERE id = $1",
        PUBLIC_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn list_public(pool: &PgPool) -> Result<Vec<UserPublic>, DbError> {
    let users = sqlx::query_as::<_, UserPublic>(&format!(
        "SELECT {} FROM users ORDER BY user_name",
        PUBLIC_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Full row lookup for credential verification. Login only.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, DbError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, user_name, email, password, role FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Insert a new user. `password_hash` must already be hashed; the role
/// falls back to the column default (`user`).
pub async fn create(
    pool: &PgPool,
    user_name: Option<&str>,
    email: &str,
    password_hash: &str,
) -> Result<UserPublic, DbError> {
    let user = sqlx::query_as::<_, UserPublic>(&format!(
        "INSERT INTO users (user_name, email, password) VALUES ($1, $2, $3) RETURNING {}",
        PUBLIC_COLUMNS
    ))
    .bind(user_name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Update the given user's profile fields. Returns the updated id, or
/// `None` when no row matched.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    changes: &UserUpdate,
) -> Result<Option<Uuid>, DbError> {
    let updated = sqlx::query_scalar::<_, Uuid>(
        "UPDATE users SET \
             user_name = COALESCE($2, user_name), \
             email = COALESCE($3, email) \
         WHERE id = $1 RETURNING id",
    )
    .bind(id)
    .bind(changes.user_name.as_deref())
    .bind(changes.email.as_deref())
    .fetch_optional(pool)
    .await?;

    Ok(updated)
}

/// Delete a user, returning the removed row's public attributes.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<Option<UserPublic>, DbError> {
    let user = sqlx::query_as::<_, UserPublic>(&format!(
        "DELETE FROM users WHERE id = $1 RETURNING {}",
        PUBLIC_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
