//! Argument validation entry point.
//!
//! Given an explicit call context, looks up the method's documentation and
//! formal parameters through a metadata provider, extracts the declared
//! scalar types and reports the first argument whose runtime type differs.
//!
//! Any missing context, metadata or documentation skips validation
//! silently. Only a real type mismatch is returned as an error.

pub mod validator;

#[cfg(test)]
mod tests;
