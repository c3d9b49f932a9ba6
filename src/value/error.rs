use derive_more::{Display, Error, From, IsVariant};

use super::Kind;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("unable to convert {token:?} to a value of kind {kind}")]
pub struct ConversionError {
    pub token: String,
    pub kind: Kind,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("index {index} out of bounds for {len} values")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("expected a value of kind {expected} but found {found}")]
pub struct KindMismatch {
    pub expected: Kind,
    pub found: Kind,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum ValueError {
    IndexOutOfBounds(IndexOutOfBounds),
    KindMismatch(KindMismatch),
}
