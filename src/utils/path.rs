//! Path utilities: expand ~, resolve export directories.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Directory where export files land: the given one, or the working dir.
pub fn resolve_output_dir(dir: Option<&str>) -> std::io::Result<PathBuf> {
    match dir {
        Some(d) => Ok(expand_tilde(d)),
        None => std::env::current_dir(),
    }
}
