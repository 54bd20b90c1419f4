/*!
## Rust Machine Module

This Rust module runs classified ZeroBasics commands. The runtime is a
machine with an explicit frame stack which the front-end drives with
`execute` and answers with `enter`.

*/

mod listing;
mod operation;
mod resolve;
mod runtime;
mod stack;
mod val;
mod var;

pub use listing::Chapter;
pub use listing::Listing;
pub use listing::IMPLICIT_CHAPTER;
pub use operation::Operation;
pub use resolve::resolve_text;
pub use resolve::resolve_value;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;
