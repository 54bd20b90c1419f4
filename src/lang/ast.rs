use super::Column;
use std::rc::Rc;

/// One classified command line.
///
/// Text carried by a variant is the raw source text; interpolation happens
/// when the command executes because it depends on the live variables.
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    /// Blank lines, unknown verbs and shapes that did not match.
    Nop,
    Print(Vec<Printer>),
    Input {
        var: Rc<str>,
        prompt: Option<String>,
        limit: Option<usize>,
    },
    Chapter(Rc<str>),
    EndChapter,
    Let {
        var: Rc<str>,
        value: String,
    },
    If {
        var: Rc<str>,
        value: String,
        then: Rc<Command>,
    },
    IfPressed {
        key: String,
        /// Command text after the dash, echoed before it runs.
        command: String,
        then: Rc<Command>,
    },
    IfNotFoundCreate(String),
    Calc {
        expr: String,
        var: Rc<str>,
    },
    Rpl {
        count: Operand,
        body: Rc<Command>,
    },
    Wait(Operand),
    Exit,
    Random {
        choices: String,
        var: Rc<str>,
    },
    Save {
        var: Rc<str>,
        location: Location,
        filename: String,
    },
    Con(String),
    Run(Rc<str>),
    /// Nested `if`/`rpl` bodies deeper than the classifier accepts.
    TooDeep,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Printer {
    Text(String),
    Newline,
    Colour(String),
}

/// A number written literally or read from a variable.
#[derive(Debug, PartialEq, Clone)]
pub enum Operand {
    Literal(String),
    Var(Rc<str>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Location {
    Here,
    Path(String),
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Integer(Column, i64),
    Decimal(Column, f64),
    Negation(Column, Box<Expression>),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn column(&self) -> Column {
        use Expression::*;
        match self {
            Integer(col, _) | Decimal(col, _) | Negation(col, _) => col.clone(),
            Multiply(col, _, _) | Divide(col, _, _) | Add(col, _, _) | Subtract(col, _, _) => {
                col.clone()
            }
        }
    }
}

impl Command {
    /// Commands that re-enter the dispatcher.
    pub fn body(&self) -> Option<&Command> {
        match self {
            Command::If { then, .. } | Command::IfPressed { then, .. } => Some(then),
            Command::Rpl { body, .. } => Some(body),
            _ => None,
        }
    }
}
