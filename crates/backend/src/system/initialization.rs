use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;
use crate::system::users;

/// Ensure system tables (settings, users) exist
pub async fn apply_auth_migration() -> Result<()> {
    let conn = get_connection();

    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS sys_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            description TEXT,
            created_at TEXT,
            updated_at TEXT
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sys_users (
            id TEXT PRIMARY KEY NOT NULL,
            username TEXT NOT NULL UNIQUE,
            full_name TEXT,
            password_hash TEXT NOT NULL,
            created_at TEXT,
            updated_at TEXT
        );
        "#,
    ];

    for sql in statements {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    tracing::info!("Auth system migration applied successfully");

    Ok(())
}

/// Ensure admin user exists (create if table is empty)
pub async fn ensure_admin_user_exists() -> Result<()> {
    let count = users::count_users().await?;

    if count == 0 {
        tracing::info!("No users found. Creating default admin user...");

        let password_hash = users::hash_password("admin")?;
        let admin = users::SysUser {
            id: uuid::Uuid::new_v4().to_string(),
            username: "admin".to_string(),
            full_name: Some("Администратор".to_string()),
            password_hash,
        };
        users::insert(&admin).await?;

        tracing::warn!("Default admin user created (admin/admin). Change the password.");
    }

    Ok(())
}
