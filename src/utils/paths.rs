//! Cross-Platform Path Utilities
//!
//! Functions for resolving the application data directory
//! (~/.prompt-helper/).

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the Prompt Helper directory (~/.prompt-helper/)
pub fn prompt_helper_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".prompt-helper"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the Prompt Helper directory, creating if it doesn't exist
pub fn ensure_prompt_helper_dir() -> AppResult<PathBuf> {
    let path = prompt_helper_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}
