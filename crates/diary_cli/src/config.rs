//! Runtime configuration resolved from flags and environment.

use std::path::{Path, PathBuf};

const DEFAULT_DB_FILE_NAME: &str = "diary.sqlite3";

/// Resolves the database path, falling back to the temp directory.
pub fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME))
}

/// Makes `dir` absolute against the current directory.
///
/// Core logging only accepts absolute directories.
pub fn absolute_log_dir(dir: &Path) -> anyhow::Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(dir))
}

#[cfg(test)]
mod tests {
    use super::{absolute_log_dir, resolve_db_path};
    use std::path::{Path, PathBuf};

    #[test]
    fn db_path_defaults_to_temp_dir() {
        let path = resolve_db_path(None);
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("diary.sqlite3"));
        assert_eq!(resolve_db_path(Some(PathBuf::new())), path);
    }

    #[test]
    fn db_path_flag_wins() {
        assert_eq!(
            resolve_db_path(Some(PathBuf::from("/data/my.db"))),
            PathBuf::from("/data/my.db")
        );
    }

    #[test]
    fn relative_log_dir_becomes_absolute() {
        let resolved = absolute_log_dir(Path::new("logs")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("logs"));
    }
}
