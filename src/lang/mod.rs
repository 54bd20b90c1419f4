/*!
# Rust Language Module

This Rust module provides lexical analysis and classification of ZeroBasics
command lines, and parsing of the arithmetic handed to `CALC`.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::lex_arithmetic;
pub use lex::strip_comment;
pub use line::Line;
pub use parse::parse;
pub use parse::parse_expression;
pub use parse::MAX_NESTING;
pub use token::{Literal, Operator, Token};

pub mod ast;

pub type Column = std::ops::Range<usize>;
