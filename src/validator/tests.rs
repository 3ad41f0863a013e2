//! Unit tests for the validator.
//!
//! Covers the silent skip conditions, first-violation reporting and the
//! in-memory metadata registry.

use super::validator::{
    find_violation, validate_arguments, validate_declared, CallContext, MethodInfo,
    MethodMetadataProvider, MethodRegistry, ValidationViolation,
};
use crate::errors::errors::{Error, ErrorImpl};
use crate::extractor::extractor::DeclaredParamInfo;
use crate::values::value::Value;
use crate::CallSite;

struct FailingProvider;

impl MethodMetadataProvider for FailingProvider {
    fn method_info(&self, class: &str, method: &str) -> Result<MethodInfo, Error> {
        Err(Error::new(
            ErrorImpl::MethodNotFound {
                class: class.to_string(),
                method: method.to_string(),
            },
            CallSite::new(class, method),
        ))
    }
}

fn info(name: &str, expected: &str, actual: &str) -> DeclaredParamInfo {
    DeclaredParamInfo {
        name: name.to_string(),
        expected_type: expected.to_string(),
        actual_type: actual.to_string(),
    }
}

fn params(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_find_violation_first_only() {
    let declared = vec![
        info("a", "string", "string"),
        info("b", "integer", "string"),
        info("c", "boolean", "double"),
    ];

    assert_eq!(
        find_violation(&declared),
        Some(ValidationViolation {
            parameter_name: "b".to_string(),
            expected_type: "integer".to_string(),
            actual_type: "string".to_string(),
        })
    );
}

#[test]
fn test_find_violation_none() {
    let declared = vec![info("a", "string", "string"), info("b", "double", "double")];
    assert_eq!(find_violation(&declared), None);
    assert_eq!(find_violation(&[]), None);
}

#[test]
fn test_validate_declared_mismatch() {
    let context = CallContext::new("Person", "setAge", vec![Value::from("42")]);
    let error = validate_declared(&context, "@param int $age", &params(&["age"])).unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ParameterTypeMismatch {
            parameter: "age".to_string(),
            expected: "integer".to_string(),
            received: "string".to_string(),
        }
    );
    assert_eq!(error.get_call_site(), &CallSite::new("Person", "setAge"));
}

#[test]
fn test_validate_declared_passes() {
    let context = CallContext::new("Person", "setRate", vec![Value::from(3.14)]);
    assert!(validate_declared(&context, "@param float $rate", &params(&["rate"])).is_ok());
}

#[test]
fn test_validate_declared_non_scalar_argument_mismatch() {
    let context = CallContext::new("Person", "setName", vec![Value::Null]);
    let error = validate_declared(&context, "@param string $name", &params(&["name"])).unwrap_err();

    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::ParameterTypeMismatch { received, .. } if received == "NULL"
    ));
}

#[test]
fn test_validate_skips_without_call_site() {
    let registry = MethodRegistry::new();
    let context = CallContext {
        class_name: None,
        method_name: Some("run".to_string()),
        args: vec![Value::from(1)],
    };

    assert!(validate_arguments(&context, &registry).is_ok());
    assert!(validate_declared(&context, "@param string $a", &params(&["a"])).is_ok());
}

#[test]
fn test_validate_skips_without_arguments() {
    let mut registry = MethodRegistry::new();
    registry.register("A", "run", Some("@param string $a"), &["a"]);

    let context = CallContext::new("A", "run", vec![]);
    assert!(validate_arguments(&context, &registry).is_ok());
}

#[test]
fn test_validate_skips_when_provider_fails() {
    let context = CallContext::new("A", "run", vec![Value::from(1)]);
    assert!(validate_arguments(&context, &FailingProvider).is_ok());
}

#[test]
fn test_validate_skips_unknown_method() {
    let registry = MethodRegistry::new();
    let context = CallContext::new("A", "missing", vec![Value::from(1)]);
    assert!(validate_arguments(&context, &registry).is_ok());
}

#[test]
fn test_validate_skips_without_documentation() {
    let mut registry = MethodRegistry::new();
    registry.register("A", "run", None, &["a"]);
    registry.register("A", "empty", Some(""), &["a"]);

    assert!(validate_arguments(&CallContext::new("A", "run", vec![Value::from(1)]), &registry).is_ok());
    assert!(validate_arguments(&CallContext::new("A", "empty", vec![Value::from(1)]), &registry).is_ok());
}

#[test]
fn test_validate_skips_without_formal_params() {
    let mut registry = MethodRegistry::new();
    registry.register("A", "run", Some("@param string $a"), &[]);

    let context = CallContext::new("A", "run", vec![Value::from(1)]);
    assert!(validate_arguments(&context, &registry).is_ok());
}

#[test]
fn test_registry_lookup() {
    let mut registry = MethodRegistry::new();
    assert!(registry.is_empty());

    registry.register("A", "run", Some("@param int $a"), &["a"]);
    assert_eq!(registry.len(), 1);

    let info = registry.method_info("A", "run").unwrap();
    assert_eq!(info.doc_comment.as_deref(), Some("@param int $a"));
    assert_eq!(info.params, vec!["a".to_string()]);

    let error = registry.method_info("A", "walk").unwrap_err();
    assert_eq!(error.get_error_name(), "MethodNotFound");
}

#[test]
fn test_call_context_macro() {
    let context = crate::MK_CALL_CONTEXT!("A", "run", "x", 1, 2.5, true);

    assert_eq!(context.class_name.as_deref(), Some("A"));
    assert_eq!(context.method_name.as_deref(), Some("run"));
    assert_eq!(
        context.args,
        vec![
            Value::from("x"),
            Value::Integer(1),
            Value::Double(2.5),
            Value::Boolean(true)
        ]
    );
}

#[test]
fn test_validate_arguments_macro() {
    let mut registry = MethodRegistry::new();
    registry.register("A", "run", Some("@param bool $flag"), &["flag"]);

    assert!(crate::VALIDATE_ARGUMENTS!(&registry, "A", "run", true).is_ok());
    assert!(crate::VALIDATE_ARGUMENTS!(&registry, "A", "run", 1).is_err());
}
