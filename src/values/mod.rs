//! Runtime argument values.
//!
//! A `Value` stands in for whatever a caller passed at a positional slot,
//! tagged with its runtime type so it can be compared against the
//! declared scalar type.

pub mod value;
