mod common;
use common::*;
use std::fs;
use std::path::PathBuf;
use zerobasics::mach::{Event, Runtime};
use zerobasics::term::host;
use zerobasics::term::ScriptRepository;

/// Fulfil file events the way the shell does, returning what was printed.
fn fulfil(runtime: &mut Runtime) -> Vec<String> {
    let mut out = vec![];
    for event in events(runtime) {
        match event {
            Event::Save { path, contents } => {
                host::save(&path, &contents).unwrap();
                out.push(format!("Saved: {}", path.display()));
            }
            Event::CreateDir(path) => {
                if host::create_dir(&path).unwrap() {
                    out.push(format!("Created folder: {}", path.display()));
                }
            }
            Event::Print(text, _) => out.push(text),
            _ => {}
        }
    }
    out
}

#[test]
fn test_save_here() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("projects").join("demo");
    let mut r = Runtime::default();
    r.load("$content = abc\nsave $content in here - out.txt", Some(project.clone()));
    r.run().unwrap();
    let path = project.join("out.txt");
    assert_eq!(fulfil(&mut r), vec![format!("Saved: {}", path.display())]);
    assert_eq!(fs::read_to_string(&path).unwrap(), "abc");
}

#[test]
fn test_save_literal_folder() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("notes");
    let text = format!(
        "$name = list\n$v = one two\nsave $v in {} - {{$name.txt}}",
        folder.display()
    );
    let mut r = script(&text);
    fulfil(&mut r);
    assert_eq!(fs::read_to_string(folder.join("list.txt")).unwrap(), "one two");
}

#[test]
fn test_save_without_project() {
    let mut r = script("$v = x\nsave $v in HERE - {a b.txt}");
    assert_eq!(
        events(&mut r),
        vec![Event::Save {
            path: PathBuf::from("a b.txt"),
            contents: "x".to_string(),
        }]
    );
}

#[test]
fn test_save_shape() {
    let mut r = script("$v = x\nsave $v here - out.txt\nsave $v in here out.txt\nsave $v in");
    assert!(events(&mut r).is_empty());
}

#[test]
fn test_create_folder_once() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("backup");
    let text = format!(
        "if not found create {0}\nif not found create {0}",
        folder.display()
    );
    let mut r = script(&text);
    assert_eq!(
        fulfil(&mut r),
        vec![format!("Created folder: {}", folder.display())]
    );
    assert!(folder.is_dir());
}

#[test]
fn test_repository_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let repo = ScriptRepository::new(dir.path().join("Scripts"));
    repo.ensure_layout().unwrap();
    fs::write(
        repo.dir().join("notes.txt"),
        "$content = abc\nsave $content in here - out.txt\n",
    )
    .unwrap();
    let script = repo.load("notes").unwrap();
    let mut r = Runtime::default();
    r.load(&script.text, Some(script.project_dir.clone()));
    r.run().unwrap();
    fulfil(&mut r);
    let saved = repo.projects_dir().join("notes").join("out.txt");
    assert_eq!(fs::read_to_string(saved).unwrap(), "abc");
}
