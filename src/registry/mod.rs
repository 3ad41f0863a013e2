//! Scalar type alias registry.
//!
//! Maps the type tokens developers write in `@param` tags, synonyms
//! included, onto the four canonical scalar type names.

pub mod aliases;
