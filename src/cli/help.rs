use std::fmt::{self, Display, Formatter, Write};

use super::{ArgParser, OptionDecl};
use crate::strings;

const INDENT: &str = "  ";
const LINE_WIDTH: usize = 80;
const MIN_DESCRIPTION_WIDTH: usize = 24;

impl ArgParser {
    /// A single line listing every option in registration order. Optional options are shown in
    /// brackets.
    pub fn usage(&self) -> String {
        let mut usage = format!("Usage: {}", self.program());

        for option in self.options() {
            let mut entry = String::from(option.name());
            for slot in option.slots() {
                let _ = write!(entry, " <{}>", slot.name());
            }

            let _ = if option.is_required() {
                write!(usage, " {entry}")
            } else {
                write!(usage, " [{entry}]")
            };
        }

        usage
    }

    /// The full help text: description, usage and a table of options with their descriptions,
    /// defaults and whether they're required.
    pub fn help(&self) -> String {
        let mut help = String::new();

        if !self.description().is_empty() {
            help.push_str(self.description());
            help.push_str("\n\n");
        }
        help.push_str(&self.usage());
        help.push('\n');

        if self.options().is_empty() {
            return help;
        }

        let labels: Vec<String> = self.options().iter().map(label).collect();
        let column = labels.iter().map(|label| label.chars().count()).max().unwrap_or(0) + 2;
        let width = LINE_WIDTH
            .saturating_sub(INDENT.len() + column)
            .max(MIN_DESCRIPTION_WIDTH);

        help.push_str("\nOptions:\n");
        for (option, label) in self.options().iter().zip(labels) {
            let lines = strings::wrap(&details(option), width);
            let mut lines = lines.iter();

            // Writing to a String can't fail.
            let _ = match lines.next() {
                Some(first) => {
                    writeln!(help, "{INDENT}{}{first}", strings::pad_right(&label, column))
                },
                None => writeln!(help, "{INDENT}{label}"),
            };
            for line in lines {
                let _ = writeln!(help, "{INDENT}{}{line}", strings::pad_right("", column));
            }
        }

        help
    }

    pub fn version(&self) -> String {
        if self.program().is_empty() {
            self.version_info().to_owned()
        } else {
            format!("{} {}", self.program(), self.version_info())
        }
    }
}

impl Display for ArgParser {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.help())
    }
}

fn label(option: &OptionDecl) -> String {
    let mut label = option.aliases().join(", ");
    for slot in option.slots() {
        let _ = write!(label, " <{}>", slot.name());
    }
    label
}

fn details(option: &OptionDecl) -> String {
    let mut details = String::from(option.description());

    if !option.is_flag() {
        let _ = write!(details, " [default: {}]", option.defaults());
    }
    if option.is_required() {
        details.push_str(" [required]");
    }

    details
}
