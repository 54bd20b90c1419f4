use super::ast::*;
use super::lex::strip_comment;
use super::parse::*;
use std::rc::Rc;

/// A script line: its source text and the command it classifies to.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    source: Rc<str>,
    command: Rc<Command>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let source = s.trim();
        Line {
            source: source.into(),
            command: Rc::new(parse(source)),
        }
    }

    pub fn command(&self) -> Rc<Command> {
        self.command.clone()
    }

    /// True when only whitespace or a comment remains.
    pub fn is_empty(&self) -> bool {
        strip_comment(&self.source).is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
