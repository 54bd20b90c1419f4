//! # ZeroShell
//!
//! An interpreter for ZeroBasics, a small line-oriented scripting language
//! for text adventures, quizzes and little tools.
//!
//! Install with `cargo install zero-basics` and run `zeroshell`. The first
//! start creates a `Scripts` folder with a sample script. If you get the
//! following, you have achieved success.
//! ```text
//! ============================================================
//! ZeroShell 0.10 - ZeroBasics interpreter
//! ============================================================
//! Type !help for help
//! ------------------------------------------------------------
//! ZB[1 scripts]> █
//! ```
//!
//! Run the sample with `!run test` or straight from the command line with
//! `zeroshell test`.
//!
//! The interpreter is usable as a library as well. A
//! [`Runtime`](mach::Runtime) loads a script and hands out
//! [`Event`](mach::Event)s for whatever front-end drives it.
//! ```
//! use zerobasics::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.load("$who = World\nprint {Hello,} $who", None);
//! runtime.run().unwrap();
//! assert_eq!(
//!     runtime.execute(100),
//!     Event::Print("Hello, World".to_string(), None)
//! );
//! assert_eq!(runtime.execute(100), Event::Stopped);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

#[path = "doc/appendix_c.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_C;

pub mod config;
pub mod lang;
pub mod mach;
pub mod term;
