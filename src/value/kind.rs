use derive_more::{Display, IsVariant};

/// The kind of a [`Value`](super::Value), used to declare what an argument slot accepts.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Kind {
    #[display("int")]
    Int,
    #[display("float")]
    Float,
    #[display("char")]
    Char,
    #[display("string")]
    Str,
}
