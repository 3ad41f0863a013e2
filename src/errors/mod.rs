//! Error types and error handling for argument validation.
//!
//! This module defines the errors surfaced by the crate. It includes:
//!
//! - An error structure carrying the call site it was raised for
//! - The parameter type mismatch raised by validation
//! - The "not found" condition metadata providers report
//! - Helpful suggestions for display

pub mod errors;
