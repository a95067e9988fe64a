use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

static ATTACHMENTS_DIR: OnceCell<PathBuf> = OnceCell::new();

/// Подготовить каталог файловых вложений
pub fn initialize_storage(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;
    ATTACHMENTS_DIR
        .set(dir.to_path_buf())
        .map_err(|_| anyhow::anyhow!("Failed to set ATTACHMENTS_DIR"))?;
    Ok(())
}

pub fn attachments_dir() -> &'static Path {
    ATTACHMENTS_DIR
        .get()
        .expect("Attachment storage has not been initialized")
}
