//! Utility macros for validation.
//!
//! This module defines helper macros used by code that validates its own
//! arguments:
//!
//! - `MK_CALL_CONTEXT!` - Creates a CallContext from a class, method and arguments
//! - `VALIDATE_ARGUMENTS!` - Builds the context and validates it in one step

/// Creates a CallContext instance.
///
/// Each argument is converted with `Value::from`.
///
/// # Arguments
///
/// * `$class` - The class name
/// * `$method` - The method name
/// * `$arg` - The actual arguments, in call order
///
/// # Example
///
/// ```ignore
/// let context = MK_CALL_CONTEXT!("UserService", "register", name, age);
/// ```
#[macro_export]
macro_rules! MK_CALL_CONTEXT {
    ($class:expr, $method:expr $(, $arg:expr)* $(,)?) => {
        $crate::validator::validator::CallContext::new(
            $class,
            $method,
            vec![$($crate::values::value::Value::from($arg)),*],
        )
    };
}

/// Validates the enclosing method's arguments against a metadata provider.
///
/// Evaluates to `Result<(), Error>`.
///
/// # Example
///
/// ```ignore
/// VALIDATE_ARGUMENTS!(&registry, "UserService", "register", name, age)?;
/// ```
#[macro_export]
macro_rules! VALIDATE_ARGUMENTS {
    ($provider:expr, $class:expr, $method:expr $(, $arg:expr)* $(,)?) => {
        $crate::validator::validator::validate_arguments(
            &$crate::MK_CALL_CONTEXT!($class, $method $(, $arg)*),
            $provider,
        )
    };
}
