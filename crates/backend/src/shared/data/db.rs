use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/app.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Create the table if sqlite_master has no entry with this name yet
async fn ensure_table(
    conn: &DatabaseConnection,
    table: &str,
    create_sql: &str,
) -> anyhow::Result<()> {
    let check = format!(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
        table
    );
    let existing = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, check))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating {} table", table);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}

/// Minimal schema bootstrap: ensure all business tables exist
async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    ensure_table(
        conn,
        "a001_currency",
        r#"
        CREATE TABLE a001_currency (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            comment TEXT,
            code TEXT NOT NULL,
            symbol TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .await?;

    ensure_table(
        conn,
        "a002_unit",
        r#"
        CREATE TABLE a002_unit (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            comment TEXT,
            symbol TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .await?;

    ensure_table(
        conn,
        "a003_company",
        r#"
        CREATE TABLE a003_company (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            comment TEXT,
            full_name TEXT NOT NULL,
            inn TEXT NOT NULL DEFAULT '',
            kpp TEXT NOT NULL DEFAULT '',
            address TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .await?;

    ensure_table(
        conn,
        "a004_purchaser",
        r#"
        CREATE TABLE a004_purchaser (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            comment TEXT,
            contact_person TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .await?;

    ensure_table(
        conn,
        "a005_product",
        r#"
        CREATE TABLE a005_product (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            comment TEXT,
            sku TEXT NOT NULL DEFAULT '',
            unit_id TEXT NOT NULL,
            price REAL NOT NULL DEFAULT 0,
            quantity REAL NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .await?;

    ensure_table(
        conn,
        "a006_project",
        r#"
        CREATE TABLE a006_project (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            comment TEXT,
            purchaser_id TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .await?;

    ensure_table(
        conn,
        "a007_contract",
        r#"
        CREATE TABLE a007_contract (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            comment TEXT,
            number TEXT NOT NULL,
            project_id TEXT NOT NULL,
            company_id TEXT NOT NULL,
            purchaser_id TEXT NOT NULL,
            currency_id TEXT NOT NULL,
            amount REAL NOT NULL DEFAULT 0,
            signed_at TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .await?;

    ensure_table(
        conn,
        "a008_payment",
        r#"
        CREATE TABLE a008_payment (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            comment TEXT,
            contract_id TEXT NOT NULL,
            amount REAL NOT NULL DEFAULT 0,
            paid_at TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .await?;

    ensure_table(
        conn,
        "a009_attachment",
        r#"
        CREATE TABLE a009_attachment (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            comment TEXT,
            contract_id TEXT,
            file_name TEXT NOT NULL,
            content_type TEXT NOT NULL DEFAULT 'application/octet-stream',
            size_bytes INTEGER NOT NULL DEFAULT 0,
            stored_path TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .await?;

    Ok(())
}
