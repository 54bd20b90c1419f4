use crate::lang::Line;
use std::rc::Rc;

/// Name of the chapter holding lines written before any `chp` header.
pub const IMPLICIT_CHAPTER: &str = "main";

#[derive(Debug, Clone)]
pub struct Chapter {
    name: Rc<str>,
    lines: Rc<[Line]>,
}

impl Chapter {
    pub fn new(name: &str) -> Chapter {
        Chapter {
            name: name.into(),
            lines: Rc::from(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_rc(&self) -> Rc<str> {
        self.name.clone()
    }

    /// Shared view of the lines; a running chapter keeps its own copy even
    /// if the chapter is replaced while it runs.
    pub fn lines(&self) -> Rc<[Line]> {
        self.lines.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// ## The chapter table of one script, in the order chapters were created
#[derive(Debug, Clone, Default)]
pub struct Listing {
    chapters: Vec<Chapter>,
}

impl Listing {
    /// Split script text into chapters.
    ///
    /// Lines before the first `chp` land in `main`. Lines after an `end chp`
    /// with no new header are appended to the most recently created chapter.
    pub fn load(text: &str) -> Listing {
        let mut builder: Vec<(String, Vec<Line>)> = vec![];
        let mut current: Option<usize> = None;
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(name) = chapter_header(line) {
                current = Some(match builder.iter().position(|(n, _)| n == name) {
                    Some(index) => {
                        builder[index].1.clear();
                        index
                    }
                    None => {
                        builder.push((name.to_string(), vec![]));
                        builder.len() - 1
                    }
                });
            } else if line.eq_ignore_ascii_case("end chp") {
                current = None;
            } else if let Some(index) = current {
                builder[index].1.push(Line::new(line));
            } else if builder.is_empty() {
                builder.push((IMPLICIT_CHAPTER.to_string(), vec![Line::new(line)]));
                current = Some(0);
            } else if let Some((_, lines)) = builder.last_mut() {
                lines.push(Line::new(line));
            }
        }
        Listing {
            chapters: builder
                .into_iter()
                .map(|(name, lines)| Chapter {
                    name: name.as_str().into(),
                    lines: Rc::from(lines),
                })
                .collect(),
        }
    }

    pub fn clear(&mut self) {
        self.chapters.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn first(&self) -> Option<&Chapter> {
        self.chapters.first()
    }

    pub fn get(&self, name: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.name() == name)
    }

    pub fn chapters(&self) -> std::slice::Iter<'_, Chapter> {
        self.chapters.iter()
    }

    /// Runtime `chp`: the chapter becomes empty, keeping its position.
    pub fn open(&mut self, name: &str) {
        match self.chapters.iter_mut().find(|c| c.name() == name) {
            Some(chapter) => *chapter = Chapter::new(name),
            None => self.chapters.push(Chapter::new(name)),
        }
    }
}

fn chapter_header(line: &str) -> Option<&str> {
    let keyword = line.get(..4)?;
    if keyword.eq_ignore_ascii_case("chp ") {
        Some(line[4..].trim())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(listing: &Listing, name: &str) -> Vec<String> {
        listing
            .get(name)
            .map(|c| c.lines().iter().map(|l| l.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_implicit_main() {
        let listing = Listing::load("print {a}\n\n# note\nprint {b}\n");
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.first().map(|c| c.name()), Some("main"));
        assert_eq!(sources(&listing, "main"), vec!["print {a}", "print {b}"]);
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let listing = Listing::load("CHP Intro\nprint {hi}\nEnd Chp\nchp Outro\nexit\n");
        let names: Vec<&str> = listing.chapters().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Intro", "Outro"]);
        assert_eq!(sources(&listing, "Intro"), vec!["print {hi}"]);
    }

    #[test]
    fn test_orphan_lines_join_last_chapter() {
        let listing = Listing::load("chp b\nprint 1\nend chp\nchp a\nend chp\nprint 2\n");
        assert_eq!(sources(&listing, "a"), vec!["print 2"]);
        assert_eq!(sources(&listing, "b"), vec!["print 1"]);
    }

    #[test]
    fn test_reopened_chapter_is_emptied_in_place() {
        let listing = Listing::load("chp a\nprint 1\nchp b\nprint 2\nchp a\nprint 3\n");
        let names: Vec<&str> = listing.chapters().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(sources(&listing, "a"), vec!["print 3"]);
    }

    #[test]
    fn test_chp_without_name_is_a_command() {
        let listing = Listing::load("chp\nprint x\n");
        assert_eq!(sources(&listing, "main"), vec!["chp", "print x"]);
    }

    #[test]
    fn test_open() {
        let mut listing = Listing::load("chp a\nprint 1\nchp b\nprint 2\n");
        listing.open("a");
        listing.open("z");
        assert!(listing.get("a").map(|c| c.is_empty()).unwrap_or(false));
        let names: Vec<&str> = listing.chapters().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a", "b", "z"]);
    }
}
