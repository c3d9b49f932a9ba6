//! A closed set of scalar values, standing in for a type-erased "any" container.
//!
//! Rather than storing arbitrary types and switching on them at runtime, every value is one of a
//! handful of [`Kind`]s. This is all the argument parser needs, and it keeps every conversion
//! checked and visible in the types.

mod error;
mod kind;
mod scalar;
mod value;
mod values;


pub use error::*;
pub use kind::Kind;
pub use scalar::Scalar;
pub use value::Value;
pub use values::Values;
