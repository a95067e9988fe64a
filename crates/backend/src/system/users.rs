use anyhow::{Context, Result};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

/// Учётная запись пользователя системы
#[derive(Debug, Clone)]
pub struct SysUser {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub password_hash: String,
}

/// Hash a password with argon2 and a random salt
pub fn hash_password(password: &str) -> Result<String> {
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
    use argon2::Argon2;

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;
    Ok(hash.to_string())
}

/// Constant-time verification against a stored argon2 hash
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};
    use argon2::Argon2;

    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

pub async fn count_users() -> Result<i64> {
    let conn = get_connection();
    let row = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS cnt FROM sys_users".to_string(),
        ))
        .await?;
    match row {
        Some(row) => Ok(row.try_get("", "cnt")?),
        None => Ok(0),
    }
}

pub async fn get_by_username(username: &str) -> Result<Option<SysUser>> {
    let conn = get_connection();
    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, username, full_name, password_hash FROM sys_users WHERE username = ?",
            [username.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(SysUser {
            id: row.try_get("", "id")?,
            username: row.try_get("", "username")?,
            full_name: row.try_get("", "full_name")?,
            password_hash: row.try_get("", "password_hash")?,
        })),
        None => Ok(None),
    }
}

pub async fn get_by_id(id: &str) -> Result<Option<SysUser>> {
    let conn = get_connection();
    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, username, full_name, password_hash FROM sys_users WHERE id = ?",
            [id.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(SysUser {
            id: row.try_get("", "id")?,
            username: row.try_get("", "username")?,
            full_name: row.try_get("", "full_name")?,
            password_hash: row.try_get("", "password_hash")?,
        })),
        None => Ok(None),
    }
}

pub async fn insert(user: &SysUser) -> Result<()> {
    let conn = get_connection();
    let now = chrono::Utc::now().to_rfc3339();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_users (id, username, full_name, password_hash, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)",
        [
            user.id.clone().into(),
            user.username.clone().into(),
            user.full_name.clone().into(),
            user.password_hash.clone().into(),
            now.clone().into(),
            now.into(),
        ],
    ))
    .await
    .context("Failed to insert user")?;

    Ok(())
}

/// Verify username/password; None when the pair does not match
pub async fn verify_credentials(username: &str, password: &str) -> Result<Option<SysUser>> {
    let user = match get_by_username(username).await? {
        Some(user) => user,
        None => return Ok(None),
    };

    if verify_password(password, &user.password_hash) {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}
