use crate::error::{LedgerError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "cardsift";
const LEDGER_FILENAME: &str = "processed.log";

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(LedgerError::InvalidDataPath(path));
        }
        return Ok(path.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or(LedgerError::MissingHomeDir)?;
    Ok(home.join(".local").join("share").join(APP_DIR))
}

pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    restrict_dir_permissions(&dir)?;
    Ok(dir)
}

pub fn ledger_path() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join(LEDGER_FILENAME))
}

pub fn ledger_path_in(dir: &Path) -> PathBuf {
    dir.join(LEDGER_FILENAME)
}

/// Resolves the ledger path, preferring an explicit override over the
/// XDG data directory default.
pub fn resolve_ledger_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(LedgerError::InvalidDataPath(path));
            }
            Ok(path)
        }
        None => ledger_path(),
    }
}

#[cfg(unix)]
fn restrict_dir_permissions(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o700);
    fs::set_permissions(dir, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_dir: &Path) -> Result<()> {
    Ok(())
}
