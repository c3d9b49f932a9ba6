use derive_more::{Display, From, IsVariant, TryInto};

use super::{ConversionError, Kind};

/// A single scalar value. Conversions out of a value are available through [`TryFrom`], or
/// through [`Values::get_as`](super::Values::get_as) when reading from a sequence.
#[derive(Debug, Display, Clone, PartialEq, From, TryInto, IsVariant)]
pub enum Value {
    #[display("{_0}")]
    Int(i64),
    #[display("{_0}")]
    Float(f64),
    #[display("{_0}")]
    Char(char),
    #[display("{_0}")]
    Str(String),
}

impl Value {
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Char(_) => Kind::Char,
            Value::Str(_) => Kind::Str,
        }
    }

    /// Parses a token as a value of the provided kind.
    ///
    /// Integers and floats follow the grammar of [`str::parse`], a char must be exactly one
    /// character long and strings always succeed.
    pub fn parse(kind: Kind, token: &str) -> Result<Value, ConversionError> {
        let parsed = match kind {
            Kind::Int => token.parse().ok().map(Value::Int),
            Kind::Float => token.parse().ok().map(Value::Float),
            Kind::Char => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(Value::Char(ch)),
                    _ => None,
                }
            },
            Kind::Str => Some(Value::Str(token.to_owned())),
        };

        parsed.ok_or_else(|| ConversionError {
            token: token.to_owned(),
            kind,
        })
    }
}

// Integer literals default to i32, so this keeps `Value::from(0)` working.
impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}
