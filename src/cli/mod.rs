//! A small command-line argument parser.
//!
//! # Method
//! Options are declared one at a time and resolved as soon as they are declared, so the value
//! returned from [`ArgParser::flag`] or [`ArgParser::option`] is final. Matching is deliberately
//! simple: an option matches a token that is exactly equal to one of its aliases, and consumes
//! the fixed number of tokens that follow it. There is no `--name=value` syntax, no bundling of
//! short flags and no `--` terminator.
//!
//! Bad input never panics. When an option can't be resolved it falls back to its defaults and the
//! problem is recorded as a [`ParseError`], leaving the decision about what to do to the caller.
//! Declaring two options with the same alias is a mistake in the program rather than its input,
//! so that does panic (or returns a [`RegistrationError`] from the `try_` methods).
//!
//! ```
//! use toolkit::cli::{ArgParser, OptionDecl};
//!
//! let mut parser = ArgParser::new(["prog", "--n", "21", "42", "73"], "Demo", "1.0");
//! let verbose = parser.flag(["-v", "--verbose"], "Print more");
//! let n = parser.option(
//!     OptionDecl::new(["--n"]).slot("i", 0).slot("j", 0).slot("k", 0).required(true)
//! );
//!
//! assert!(!verbose);
//! assert_eq!(n.to_vec_of::<i64>(), Ok(vec![21, 42, 73]));
//! assert!(parser.errors().is_empty());
//! ```

mod decl;
mod error;
mod help;
mod parser;

mod tests;

pub use decl::{OptionDecl, Slot};
pub use error::*;
pub use parser::ArgParser;
