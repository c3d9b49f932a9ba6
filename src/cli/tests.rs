#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;
use crate::value::{Kind, Value, Values};

fn three_ints() -> OptionDecl {
    OptionDecl::new(["--n"])
        .slot("i", 0)
        .slot("j", 0)
        .slot("k", 0)
        .describe("Three integers")
        .required(true)
}

#[test]
fn test_flags() {
    let mut parser = ArgParser::new(["prog", "--opt0", "--option1", "--opt3"], "", "");

    assert!(parser.flag(["--opt0"], "Option 0"));
    assert!(
        parser.flag(["--opt1", "--option1"], "Option 1"),
        "Any alias should match."
    );
    assert!(!parser.flag(["--opt2"], "Option 2"));
    assert!(parser.flag(["--opt3"], "Option 3"));
    assert!(!parser.flag(["--opt4"], "Option 4"));

    assert!(parser.errors().is_empty(), "Flags never produce errors.");
    assert_eq!(parser.options().len(), 5);
}

#[test]
fn test_program_path_is_not_matched() {
    let mut parser = ArgParser::new(["--opt0"], "", "");
    assert!(
        !parser.flag(["--opt0"], ""),
        "The first argument is the program path, not an option."
    );

    let mut parser = ArgParser::new(Vec::<String>::new(), "", "");
    assert!(!parser.flag(["--opt0"], ""));
    let x = parser.option(OptionDecl::new(["--x"]).slot("x", 1));
    assert_eq!(x.to_vec_of::<i64>(), Ok(vec![1_i64]));
    assert!(parser.raw_args().is_empty());
}

#[test]
fn test_valued_option() {
    let mut parser = ArgParser::new(["prog", "--n", "21", "42", "73"], "", "");
    let n = parser.option(three_ints());

    assert_eq!(n.to_vec_of::<i64>(), Ok(vec![21, 42, 73]));
    assert!(parser.errors().is_empty());
}

#[test]
fn test_mixed_kinds() {
    let mut parser = ArgParser::new(["prog", "--mix", "2.5", ";", "out", "-1"], "", "");
    let mix = parser.option(
        OptionDecl::new(["--mix"])
            .slot("ratio", 0.5)
            .slot("sep", ',')
            .slot("name", "none")
            .slot("offset", 0),
    );

    assert_eq!(
        mix,
        Values::from(vec![
            Value::Float(2.5),
            Value::Char(';'),
            Value::from("out"),
            Value::Int(-1),
        ])
    );
    assert!(parser.errors().is_empty());
}

#[test]
fn test_missing_arguments() {
    let mut parser = ArgParser::new(["prog", "--n"], "", "");
    let n = parser.option(three_ints());

    assert_eq!(n.to_vec_of::<i64>(), Ok(vec![0, 0, 0]), "Defaults should be used.");
    assert_eq!(
        parser.errors(),
        [ParseError::InvalidArguments(InvalidArgumentsError {
            alias: String::from("--n"),
            position: 1,
            reason: InvalidReason::Missing {
                expected: 3,
                found: 0,
            },
        })]
    );

    let mut parser = ArgParser::new(["prog", "--n", "1", "2"], "", "");
    let n = parser.option(three_ints());
    assert_eq!(
        n.len(),
        3,
        "A partial match should never produce a partial result."
    );
    assert_eq!(n.to_vec_of::<i64>(), Ok(vec![0, 0, 0]));
    assert_eq!(parser.errors().len(), 1);
}

#[test]
fn test_unconvertible_arguments() {
    let mut parser = ArgParser::new(["prog", "-v", "--n", "21", "x", "73"], "", "");
    let n = parser.option(three_ints());

    assert_eq!(n, three_ints().defaults());
    assert_eq!(parser.errors().len(), 1);

    let ParseError::InvalidArguments(error) = &parser.errors()[0] else {
        panic!("expected an invalid arguments error");
    };
    assert_eq!(error.position, 2, "Position should index into the raw arguments.");
    assert_eq!(
        error.reason,
        InvalidReason::Unconvertible {
            slot: String::from("j"),
            token: String::from("x"),
            kind: Kind::Int,
        }
    );
}

#[test]
fn test_absent_options() {
    let mut parser = ArgParser::new(["prog"], "", "");

    let optional = parser.option(OptionDecl::new(["--ratio"]).slot("r", 1.5));
    assert_eq!(optional.get_as::<f64>(0), Ok(1.5));
    assert!(
        parser.errors().is_empty(),
        "Absent optional options shouldn't be errors."
    );

    let required = parser.option(three_ints());
    assert_eq!(required, three_ints().defaults());
    assert_eq!(
        parser.errors(),
        [ParseError::MissingRequiredOption(MissingRequiredOptionError {
            option: String::from("--n"),
            aliases: vec![String::from("--n")],
        })]
    );
    assert_eq!(parser.errors()[0].option(), "--n");
    assert!(parser.has_errors());
}

#[test]
fn test_first_occurrence_wins() {
    let mut parser = ArgParser::new(["prog", "--name", "a", "--name", "b"], "", "");
    let name = parser.option(OptionDecl::new(["--name"]).slot("name", ""));
    assert_eq!(name.get_as::<String>(0), Ok(String::from("a")));

    let mut parser = ArgParser::new(["prog", "--n", "1", "2", "3", "--n"], "", "");
    let n = parser.option(three_ints());
    assert_eq!(n.to_vec_of::<i64>(), Ok(vec![1, 2, 3]));
    assert!(
        parser.errors().is_empty(),
        "Later occurrences should be ignored, even when malformed."
    );
}

#[test]
fn test_options_scan_independently() {
    let mut parser = ArgParser::new(["prog", "--out", "--verbose"], "", "");
    let out = parser.option(OptionDecl::new(["--out"]).slot("path", "a.out"));
    let verbose = parser.flag(["--verbose"], "");

    assert_eq!(out.get_as::<String>(0), Ok(String::from("--verbose")));
    assert!(verbose, "Tokens consumed as arguments can still match other options.");
}

#[test]
fn test_error_order() {
    let mut parser = ArgParser::new(["prog", "--a", "x"], "", "");
    parser.option(OptionDecl::new(["--b"]).slot("b", 0).required(true));
    parser.option(OptionDecl::new(["--a"]).slot("a", 0));

    let errors = parser.errors();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].is_missing_required_option());
    assert!(errors[1].is_invalid_arguments());
    assert_eq!(
        errors[1].to_string(),
        concat!(
            "invalid arguments for option --a at position 1: ",
            "expected a value of kind int for <a> but found \"x\"",
        )
    );
}

#[test]
fn test_raw_args_untouched() {
    let args = ["prog", "--n", "21", "42", "73", "--flag", "rest"];
    let mut parser = ArgParser::new(args, "", "");
    parser.option(three_ints());
    parser.flag(["--flag"], "");

    assert_eq!(parser.raw_args(), args);
}

#[test]
fn test_idempotence() {
    let parse = || {
        let mut parser = ArgParser::new(["prog", "--n", "1", "--b", "b"], "", "");
        let values = vec![
            parser.option(three_ints()),
            parser.option(OptionDecl::new(["--b"]).slot("b", 'z')),
            parser.option(OptionDecl::new(["--c"]).slot("c", 0).required(true)),
        ];
        (values, parser.errors().to_vec())
    };

    let (first_values, first_errors) = parse();
    let (second_values, second_errors) = parse();
    assert_eq!(first_values, second_values);
    assert_eq!(first_errors, second_errors);
    assert_eq!(first_errors.len(), 2);
}

#[test]
fn test_duplicate_aliases() {
    let mut parser = ArgParser::new(["prog", "--a"], "", "");
    assert_eq!(parser.try_flag(["--a"], ""), Ok(true));

    assert_eq!(
        parser.try_flag(["--b", "--a"], ""),
        Err(RegistrationError::DuplicateAlias(DuplicateAliasError {
            alias: String::from("--a"),
        }))
    );
    assert!(
        parser
            .try_option(OptionDecl::new(["--c", "--c"]).slot("c", 0))
            .unwrap_err()
            .is_duplicate_alias(),
        "Repeating an alias within one declaration should also be rejected."
    );
    assert!(parser.try_flag(Vec::<&str>::new(), "").unwrap_err().is_no_aliases());
    assert_eq!(
        parser.options().len(),
        1,
        "Rejected declarations shouldn't be registered."
    );

    assert!(parser.try_flag(["--b"], "").is_ok(), "--b was never registered.");

    assert_panics!({
        let mut parser = ArgParser::new(["prog"], "", "");
        parser.flag(["--a"], "");
        parser.flag(["--a"], "");
    }, contains "option alias \"--a\" is already registered");
    assert_panics!({
        let mut parser = ArgParser::new(["prog"], "", "");
        parser.flag(["-n"], "");
        parser.option(OptionDecl::new(["--n", "-n"]).slot("n", 0));
    });
}

#[test]
fn test_usage_and_version() {
    let mut parser = ArgParser::new(["/usr/local/bin/prog", "-v"], "Demo program", "1.2.3");
    parser.flag(["-v", "--verbose"], "Print more output");
    parser.option(three_ints());

    assert_eq!(parser.program(), "prog");
    assert_eq!(parser.usage(), "Usage: prog [-v] --n <i> <j> <k>");
    assert_eq!(parser.version(), "prog 1.2.3");

    let parser = ArgParser::new(Vec::<&str>::new(), "", "1.0");
    assert_eq!(parser.version(), "1.0");
    assert_eq!(parser.usage(), "Usage: ");
}

#[test]
fn test_help() {
    let mut parser = ArgParser::new(["prog"], "Demo program", "1.2.3");
    parser.flag(["-v", "--verbose"], "Print more output");
    parser.option(three_ints());

    let expected = "\
Demo program

Usage: prog [-v] --n <i> <j> <k>

Options:
  -v, --verbose    Print more output
  --n <i> <j> <k>  Three integers [default: 0 0 0] [required]
";
    assert_eq!(parser.help(), expected);
    assert_eq!(parser.to_string(), expected, "Display should render the help text.");
}

#[test]
fn test_help_wraps_descriptions() {
    let mut parser = ArgParser::new(["prog"], "", "");
    parser.flag(["--long"], "word ".repeat(40));
    parser.flag(["--bare"], "");

    let help = parser.help();
    assert!(help.starts_with("Usage: prog [--long] [--bare]\n\nOptions:\n"));

    let lines: Vec<&str> = help.lines().skip(3).collect();
    assert!(lines.len() > 2, "A long description should wrap onto several lines.");
    assert!(lines[0].starts_with("  --long  word"));
    assert!(lines.iter().all(|line| line.chars().count() <= 80));
    assert!(lines[1].starts_with("          word"), "Continuation lines should be aligned.");
    assert_eq!(*lines.last().expect("there should be lines"), "  --bare");
}
