//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database is touched.

use tracing::{info, warn};

/// Ensure the parent directory of a file-backed SQLite database exists.
/// Other URL schemes are left alone.
pub async fn ensure_sqlite_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(rest) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    let path = rest.trim_start_matches("//");
    let path = path.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        warn!("using an in-memory sqlite database; data is lost on shutdown");
        return Ok(());
    }
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
            info!(dir = %parent.display(), "sqlite data directory ready");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_sqlite_dir;

    #[tokio::test]
    async fn non_sqlite_urls_are_ignored() {
        ensure_sqlite_dir("postgres://u:p@localhost/db").await.unwrap();
    }

    #[tokio::test]
    async fn memory_database_needs_no_directory() {
        ensure_sqlite_dir("sqlite::memory:").await.unwrap();
    }
}
