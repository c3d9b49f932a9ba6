//! A small toolkit of independent utilities, built around a command-line argument parser.
//!
//! # Purpose
//! Each module here stands on its own: a [`cli`] argument parser, a closed set of scalar
//! [`value`]s that the parser binds arguments to, some [`strings`] helpers for laying out text and
//! a [`sync`] writer for printing from several threads at once. None of them need much state,
//! and none of them interact beyond the parser using the other two.
//!
//! # Error Handling
//! Errors caused by input, such as a malformed command line or reading a value as the wrong kind,
//! are always reported as values: either recorded for later inspection or returned in a
//! [`Result`]. Errors are strongly typed, using enums for static dispatch, with small structs
//! implementing [`Error`](std::error::Error) via `derive_more`.
//!
//! Panics are reserved for mistakes in the calling program itself, like registering two options
//! under the same alias. Where that happens, a `try_` variant returning a [`Result`] is available
//! too.
//!
//! # Logging
//! The parser reports what it resolves through the [`log`] facade, under the `cli` target. No
//! logger is installed by the library.
//!
//! # Features
//! Every module sits behind a feature of the same name. `cli` enables `value` and `strings`,
//! and the default features are `cli` and `sync`.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "strings")]
pub mod strings;
#[cfg(feature = "sync")]
pub mod sync;
#[cfg(feature = "value")]
pub mod value;

#[cfg_attr(not(feature = "cli"), allow(dead_code, unused_imports))]
pub(crate) mod util;
