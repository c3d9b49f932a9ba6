use super::{Kind, Value};

/// A Rust type which corresponds to exactly one [`Kind`] of [`Value`].
pub trait Scalar: Sized + Into<Value> {
    const KIND: Kind;

    /// Reads the value if it is of this type's kind, without consuming it.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_scalar {
    ($ty:ty, $variant:ident) => {
        impl Scalar for $ty {
            const KIND: Kind = Kind::$variant;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(inner) => Some(inner.to_owned()),
                    _ => None,
                }
            }
        }
    };
}

impl_scalar!(i64, Int);
impl_scalar!(f64, Float);
impl_scalar!(char, Char);
impl_scalar!(String, Str);
