use crate::value::{Kind, Value, Values};

/// One named, typed argument of a valued option. The slot's kind is the kind of its default.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    name: String,
    default: Value,
}

impl Slot {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn kind(&self) -> Kind {
        self.default.kind()
    }

    pub const fn default(&self) -> &Value {
        &self.default
    }
}

/// The declaration of an option, built up before being passed to
/// [`ArgParser::option`](super::ArgParser::option).
///
/// An option without any slots is a flag. Each slot is declared along with its default, so there
/// is always exactly one default per slot.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDecl {
    pub(crate) aliases: Vec<String>,
    pub(crate) slots: Vec<Slot>,
    pub(crate) description: String,
    pub(crate) required: bool,
}

impl OptionDecl {
    pub fn new<I, S>(aliases: I) -> OptionDecl
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OptionDecl {
            aliases: aliases.into_iter().map(Into::into).collect(),
            slots: Vec::new(),
            description: String::new(),
            required: false,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> OptionDecl {
        self.description = description.into();
        self
    }

    /// Appends a slot, which accepts values of the same kind as `default`.
    pub fn slot(mut self, name: impl Into<String>, default: impl Into<Value>) -> OptionDecl {
        self.slots.push(Slot {
            name: name.into(),
            default: default.into(),
        });
        self
    }

    pub fn required(mut self, value: bool) -> OptionDecl {
        self.required = value;
        self
    }

    /// The name used to refer to this option in messages: its first alias.
    pub fn name(&self) -> &str {
        self.aliases.first().map_or("", String::as_str)
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_flag(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    pub fn defaults(&self) -> Values {
        self.slots.iter().map(|slot| slot.default.clone()).collect()
    }

    pub(crate) fn matches(&self, token: &str) -> bool {
        self.aliases.iter().any(|alias| alias == token)
    }
}
