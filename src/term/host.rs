//! Filesystem and process requests raised by scripts.

use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Write `contents` to `path`, creating parent folders and overwriting.
pub fn save(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)
}

/// Create a folder with its parents. False when it already existed.
pub fn create_dir(path: &Path) -> io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::create_dir_all(path)?;
    Ok(true)
}

/// Run a command line through the platform shell with inherited stdio.
pub fn shell(command: &str) -> io::Result<ExitStatus> {
    if cfg!(windows) {
        Command::new("cmd").arg("/C").arg(command).status()
    } else {
        Command::new("sh").arg("-c").arg(command).status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.txt");
        save(&path, "abc").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "abc");
        save(&path, "x").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }

    #[test]
    fn test_create_dir_reports_new_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new").join("nested");
        assert!(create_dir(&path).unwrap());
        assert!(path.is_dir());
        assert!(!create_dir(&path).unwrap());
    }
}
