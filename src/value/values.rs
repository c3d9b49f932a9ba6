use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::slice;
use std::vec;

use derive_more::From;

use super::{IndexOutOfBounds, KindMismatch, Scalar, Value, ValueError};

/// An ordered sequence of [`Value`]s, as resolved for a valued option. Dereferences to a slice,
/// which provides indexing, iteration and length.
#[derive(Debug, Clone, PartialEq, Default, From)]
pub struct Values {
    inner: Vec<Value>,
}

impl Values {
    pub const fn new() -> Values {
        Values {
            inner: Vec::new(),
        }
    }

    /// Reads the value at `index` as `T`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if there is no value at `index` and [`KindMismatch`] if the
    /// value there isn't of `T`'s kind.
    pub fn get_as<T: Scalar>(&self, index: usize) -> Result<T, ValueError> {
        let value = self.inner.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.inner.len(),
        })?;

        Ok(T::from_value(value).ok_or(KindMismatch {
            expected: T::KIND,
            found: value.kind(),
        })?)
    }

    /// Reads every value as `T`, failing on the first one of another kind.
    pub fn to_vec_of<T: Scalar>(&self) -> Result<Vec<T>, ValueError> {
        (0..self.inner.len()).map(|index| self.get_as(index)).collect()
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.inner
    }
}

impl Deref for Values {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromIterator<Value> for Values {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Values {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Values {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl Display for Values {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.inner.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
