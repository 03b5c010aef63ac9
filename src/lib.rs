//! A small interpreter for the eight-instruction tape language.
//!
//! Programs run on a tape of 30,000 byte cells with a single data pointer.
//!
//! Features and behaviors:
//! - Memory tape initialized to 0; the pointer wraps at both ends of the tape.
//! - Cell arithmetic wraps modulo 256.
//! - Output `.` prints the current cell as the character with that code point.
//! - Input `,` reads one UTF-8 character and stores its code point modulo 256.
//!   At end of input the run either halts cleanly or stores 0 and carries on,
//!   depending on [`Config::halt_on_input_eof`].
//! - Loops `[]` are matched before execution; unmatched brackets are reported
//!   with the byte index of the offending bracket.
//! - Every other character is a comment.
//! - If anything was printed and the last character was not a newline, one is
//!   added when the run ends.
//!
//! Quick start:
//!
//! ```no_run
//! use bfi::{Config, Program};
//!
//! let code = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
//! let program = Program::build(code).expect("brackets should match");
//! bfi::run(&program, Config::default()).expect("program should run");
//! ```

pub mod cli_util;
mod error;
pub mod input;
pub mod interpreter;
mod program;
pub mod tape;
pub mod theme;

pub use error::{BracketKind, Error};
pub use interpreter::{Config, Instruction, Process, run, run_with_io};
pub use program::Program;
