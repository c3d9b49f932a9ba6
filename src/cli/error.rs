use derive_more::{Display, Error, From, IsVariant};

use crate::value::Kind;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("missing required option {option}")]
pub struct MissingRequiredOptionError {
    pub option: String,
    pub aliases: Vec<String>,
}

/// Why the tokens following an option couldn't be used as its arguments.
#[derive(Debug, Display, Clone, PartialEq, Eq, IsVariant)]
pub enum InvalidReason {
    #[display("expected {expected} arguments but found {found}")]
    Missing { expected: usize, found: usize },
    #[display("expected a value of kind {kind} for <{slot}> but found {token:?}")]
    Unconvertible { slot: String, token: String, kind: Kind },
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("invalid arguments for option {alias} at position {position}: {reason}")]
pub struct InvalidArgumentsError {
    pub alias: String,
    /// The index of the matched alias in the raw arguments.
    pub position: usize,
    pub reason: InvalidReason,
}

/// A problem with the command line itself. These are recorded by the parser rather than returned.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum ParseError {
    MissingRequiredOption(MissingRequiredOptionError),
    InvalidArguments(InvalidArgumentsError),
}

impl ParseError {
    /// The option name (or matched alias) the error is about.
    pub fn option(&self) -> &str {
        match self {
            ParseError::MissingRequiredOption(e) => &e.option,
            ParseError::InvalidArguments(e) => &e.alias,
        }
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("option alias {alias:?} is already registered")]
pub struct DuplicateAliasError {
    pub alias: String,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("an option needs at least one alias")]
pub struct NoAliasesError;

/// A mistake in how options were declared, as opposed to a problem with the command line.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum RegistrationError {
    DuplicateAlias(DuplicateAliasError),
    NoAliases(NoAliasesError),
}
