// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Ask on stdout whether `path` may be replaced, reading the answer from `input`.
fn confirm_overwrite<R: BufRead>(path: &Path, input: &mut R) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

/// A missing file or `force` means go ahead; an existing file needs an
/// explicit yes on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    if confirm_overwrite(path, &mut io::stdin().lock())? {
        info(format!("'{}' will be overwritten.", path.display()));
        return Ok(());
    }

    Err(AppError::Export(format!(
        "existing file '{}' not overwritten",
        path.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        let path = Path::new("hours.csv");

        assert!(confirm_overwrite(path, &mut "Y\n".as_bytes()).unwrap());
        assert!(confirm_overwrite(path, &mut " yes \n".as_bytes()).unwrap());
        assert!(!confirm_overwrite(path, &mut "\n".as_bytes()).unwrap());
        assert!(!confirm_overwrite(path, &mut "nope\n".as_bytes()).unwrap());
    }
}
