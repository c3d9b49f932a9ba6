use std::env;
use std::path::Path;

use super::{
    DuplicateAliasError, InvalidArgumentsError, InvalidReason, MissingRequiredOptionError,
    NoAliasesError, OptionDecl, ParseError, RegistrationError,
};
use crate::util::result::ResultExtension;
use crate::value::{Value, Values};

/// Resolves declared options against a program's raw arguments.
///
/// The first argument is the program path. It's never matched against options and only its file
/// name is used, when rendering usage and version text.
///
/// # Repeated Options
/// If an alias appears more than once, the first occurrence wins. Later occurrences are ignored
/// entirely, including any errors their arguments would have produced.
#[derive(Debug, Clone)]
pub struct ArgParser {
    args: Vec<String>,
    program: String,
    description: String,
    version: String,
    options: Vec<OptionDecl>,
    errors: Vec<ParseError>,
}

impl ArgParser {
    pub fn new<I, S>(
        args: I,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> ArgParser
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let program = args.first().map_or_else(String::new, |path| {
            Path::new(path)
                .file_name()
                .map_or_else(|| path.clone(), |name| name.to_string_lossy().into_owned())
        });

        ArgParser {
            args,
            program,
            description: description.into(),
            version: version.into(),
            options: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Creates a parser over the current process' arguments. Arguments which aren't valid unicode
    /// are converted lossily rather than causing a panic.
    pub fn from_env(description: impl Into<String>, version: impl Into<String>) -> ArgParser {
        ArgParser::new(
            env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
            description,
            version,
        )
    }

    /// Registers a boolean option, returning whether any of its aliases were passed.
    ///
    /// # Panics
    /// Panics if `aliases` is empty or contains an alias which is already registered.
    pub fn flag<I, S>(&mut self, aliases: I, description: impl Into<String>) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.try_flag(aliases, description).throw()
    }

    /// Registers a boolean option, like [`ArgParser::flag`], except that invalid aliases are
    /// returned as an error and nothing is registered.
    pub fn try_flag<I, S>(
        &mut self,
        aliases: I,
        description: impl Into<String>,
    ) -> Result<bool, RegistrationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let decl = OptionDecl::new(aliases).describe(description);
        self.check(&decl)?;

        let present = self.find(&decl).is_some();
        log::debug!(target: "cli", "resolved flag {} to {}", decl.name(), present);

        self.options.push(decl);
        Ok(present)
    }

    /// Registers an option and resolves its values. If the option can't be resolved, its defaults
    /// are returned and the problem is recorded in [`ArgParser::errors`].
    ///
    /// # Panics
    /// Panics if the declaration has no aliases or reuses an alias which is already registered.
    pub fn option(&mut self, decl: OptionDecl) -> Values {
        self.try_option(decl).throw()
    }

    /// Registers an option, like [`ArgParser::option`], except that invalid aliases are returned
    /// as an error and nothing is registered.
    pub fn try_option(&mut self, decl: OptionDecl) -> Result<Values, RegistrationError> {
        self.check(&decl)?;

        let values = match self.resolve(&decl) {
            Ok(values) => values,
            Err(error) => {
                log::warn!(target: "cli", "{}", error);
                self.errors.push(error);
                decl.defaults()
            },
        };
        log::debug!(target: "cli", "resolved option {} to [{}]", decl.name(), values);

        self.options.push(decl);
        Ok(values)
    }

    fn check(&self, decl: &OptionDecl) -> Result<(), RegistrationError> {
        if decl.aliases.is_empty() {
            Err(NoAliasesError)?
        }

        for (index, alias) in decl.aliases.iter().enumerate() {
            let taken = decl.aliases[..index].contains(alias)
                || self.options.iter().any(|option| option.matches(alias));

            if taken {
                Err(DuplicateAliasError {
                    alias: alias.clone(),
                })?
            }
        }

        Ok(())
    }

    /// Finds the first argument matching one of the option's aliases, skipping the program path.
    fn find(&self, decl: &OptionDecl) -> Option<(usize, &str)> {
        self.args
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, arg)| decl.matches(arg))
            .map(|(position, arg)| (position, arg.as_str()))
    }

    fn resolve(&self, decl: &OptionDecl) -> Result<Values, ParseError> {
        let Some((position, alias)) = self.find(decl) else {
            if decl.required {
                Err(MissingRequiredOptionError {
                    option: decl.name().to_owned(),
                    aliases: decl.aliases.clone(),
                })?
            }
            return Ok(decl.defaults());
        };

        let following = &self.args[position + 1..];
        let invalid = |reason| InvalidArgumentsError {
            alias: alias.to_owned(),
            position,
            reason,
        };

        if following.len() < decl.arity() {
            Err(invalid(InvalidReason::Missing {
                expected: decl.arity(),
                found: following.len(),
            }))?
        }

        decl.slots
            .iter()
            .zip(following)
            .map(|(slot, token)| {
                Value::parse(slot.kind(), token).map_err(|error| {
                    ParseError::from(invalid(InvalidReason::Unconvertible {
                        slot: slot.name().to_owned(),
                        token: error.token,
                        kind: error.kind,
                    }))
                })
            })
            .collect()
    }

    /// The arguments exactly as they were passed in, including the program path.
    pub fn raw_args(&self) -> &[String] {
        &self.args
    }

    /// Every problem found so far, in the order the offending options were registered. There is at
    /// most one error per option.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The registered options, in registration order.
    pub fn options(&self) -> &[OptionDecl] {
        &self.options
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version_info(&self) -> &str {
        &self.version
    }
}
