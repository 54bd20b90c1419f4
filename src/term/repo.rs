use crate::error;
use crate::lang::Error;
use std::fs;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, Error>;

/// Starter text written by `!new`.
pub const TEMPLATE: &str = "\
Chp main
Print {Welcome to the program!}
Print Nline {This is your new script.}
Input $name - {Enter your name:}
Print {Hello, } $name {!}
Wait 2
End Chp
";

/// Sample written when the scripts folder is created.
pub const SAMPLE: &str = "\
Chp main
Print {ZeroShell test script}
Print Nline {Showing what it can do}
Print Col green {Green text}
Print Nline Col red {Red text on a new line}
Input $name - {Enter your name:}
Print {Hello, } $name {!}
Wait 1
Print Nline {Thanks for using ZeroShell!}
End Chp
";

/// ## Script files on disk
///
/// Scripts are `.txt` files in one folder. Each script gets a project folder
/// `projects/<stem>` below it, used as `here` by `save`.

#[derive(Debug, Clone)]
pub struct ScriptRepository {
    dir: PathBuf,
}

/// A loaded script.
#[derive(Debug)]
pub struct Script {
    pub path: PathBuf,
    pub text: String,
    pub project_dir: PathBuf,
}

impl ScriptRepository {
    pub fn new<P: Into<PathBuf>>(dir: P) -> ScriptRepository {
        ScriptRepository { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.dir.join("projects")
    }

    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// Create the scripts and projects folders. A freshly created scripts
    /// folder receives `test.txt`. Returns true when the folder was new.
    pub fn ensure_layout(&self) -> Result<bool> {
        let created = !self.dir.exists();
        if created {
            fs::create_dir_all(&self.dir)?;
            fs::write(self.dir.join("test.txt"), SAMPLE)?;
        }
        fs::create_dir_all(self.projects_dir())?;
        Ok(created)
    }

    /// Path of an existing script, trying `<name>.txt` when `name` is missing.
    pub fn find(&self, name: &str) -> Result<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return Err(error!(BadFileName));
        }
        let path = self.dir.join(name);
        if path.is_file() {
            return Ok(path);
        }
        if !has_txt_extension(name) {
            let path = self.dir.join(format!("{}.txt", name));
            if path.is_file() {
                return Ok(path);
            }
        }
        Err(error!(FileNotFound; &format!("{} IN {}", name, self.dir.display())))
    }

    /// Read a script and create its project folder.
    pub fn load(&self, name: &str) -> Result<Script> {
        let path = self.find(name)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let project_dir = self.projects_dir().join(stem);
        fs::create_dir_all(&project_dir)?;
        let text = fs::read_to_string(&path)?;
        Ok(Script {
            path,
            text,
            project_dir,
        })
    }

    /// `.txt` files with their sizes, sorted by name.
    pub fn list(&self) -> Result<Vec<(String, u64)>> {
        let mut scripts = vec![];
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".txt") {
                let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                scripts.push((name, size));
            }
        }
        scripts.sort();
        Ok(scripts)
    }

    pub fn project_count(&self) -> usize {
        match fs::read_dir(self.projects_dir()) {
            Ok(entries) => entries.count(),
            Err(_) => 0,
        }
    }

    /// Write the starter template under a new name; never overwrites.
    pub fn create(&self, name: &str) -> Result<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return Err(error!(BadFileName));
        }
        let path = self.dir.join(with_txt_extension(name));
        if path.exists() {
            return Err(error!(FileAlreadyExists; &path.display().to_string()));
        }
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, TEMPLATE)?;
        Ok(path)
    }

    /// Path and text of a script for `!edit`.
    pub fn read(&self, name: &str) -> Result<(PathBuf, String)> {
        let name = name.trim();
        if name.is_empty() {
            return Err(error!(BadFileName));
        }
        let path = self.dir.join(with_txt_extension(name));
        if !path.is_file() {
            return Err(error!(FileNotFound; &path.display().to_string()));
        }
        let text = fs::read_to_string(&path)?;
        Ok((path, text))
    }
}

fn has_txt_extension(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".txt")
}

fn with_txt_extension(name: &str) -> String {
    if name.ends_with(".txt") {
        name.to_string()
    } else {
        format!("{}.txt", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn repo() -> (tempfile::TempDir, ScriptRepository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = ScriptRepository::new(dir.path().join("Scripts"));
        (dir, repo)
    }

    #[test]
    fn test_layout_writes_sample_once() {
        let (_dir, repo) = repo();
        assert!(repo.ensure_layout().unwrap());
        assert!(repo.projects_dir().is_dir());
        assert!(!repo.ensure_layout().unwrap());
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_load_appends_txt() {
        let (_dir, repo) = repo();
        repo.ensure_layout().unwrap();
        fs::write(repo.dir().join("calc.txt"), "print {hi}").unwrap();
        let script = repo.load("calc").unwrap();
        assert_eq!(script.text, "print {hi}");
        assert_eq!(script.project_dir, repo.projects_dir().join("calc"));
        assert!(script.project_dir.is_dir());
        assert!(repo.load("calc.txt").is_ok());
        assert!(repo.load("nope").unwrap_err().is(ErrorCode::FileNotFound));
    }

    #[test]
    fn test_create_refuses_overwrite() {
        let (_dir, repo) = repo();
        let path = repo.create("demo").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATE);
        assert!(repo.create("demo.txt").unwrap_err().is(ErrorCode::FileAlreadyExists));
        let (_, text) = repo.read("demo").unwrap();
        assert_eq!(text, TEMPLATE);
        let sizes = repo.list().unwrap();
        assert_eq!(sizes, vec![("demo.txt".to_string(), TEMPLATE.len() as u64)]);
    }
}
