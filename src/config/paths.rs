//! Default locations and tilde (`~`) expansion.

use std::path::{Path, PathBuf};

/// Home directory, falling back to `$HOME` and then the current directory.
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
    })
}

/// `~/.swiperate`, where the preference summary lives by default.
pub fn data_dir() -> PathBuf {
    home_dir().join(".swiperate")
}

/// `<config_dir>/swiperate/config.toml`.
pub fn config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| home_dir().join(".config"))
        .join("swiperate/config.toml")
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home_dir().join(rest),
        Err(_) => path.to_path_buf(),
    }
}
