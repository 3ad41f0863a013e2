use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    extractor::extractor::{extract, DeclaredParamInfo},
    values::value::Value,
    CallSite,
};

/// The method under inspection: who it is and what it was called with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallContext {
    pub class_name: Option<String>,
    pub method_name: Option<String>,
    pub args: Vec<Value>,
}

impl CallContext {
    pub fn new(class_name: &str, method_name: &str, args: Vec<Value>) -> Self {
        CallContext {
            class_name: Some(class_name.to_string()),
            method_name: Some(method_name.to_string()),
            args,
        }
    }

    pub fn call_site(&self) -> Option<CallSite> {
        match (&self.class_name, &self.method_name) {
            (Some(class), Some(method)) => Some(CallSite::new(class, method)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodInfo {
    pub doc_comment: Option<String>,
    pub params: Vec<String>,
}

pub trait MethodMetadataProvider {
    fn method_info(&self, class: &str, method: &str) -> Result<MethodInfo, Error>;
}

/// In-memory metadata keyed by class and method name.
#[derive(Debug, Clone, Default)]
pub struct MethodRegistry {
    methods: HashMap<(String, String), MethodInfo>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        MethodRegistry {
            methods: HashMap::new(),
        }
    }

    pub fn register(&mut self, class: &str, method: &str, doc_comment: Option<&str>, params: &[&str]) {
        self.methods.insert(
            (class.to_string(), method.to_string()),
            MethodInfo {
                doc_comment: doc_comment.map(String::from),
                params: params.iter().map(|param| param.to_string()).collect(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl MethodMetadataProvider for MethodRegistry {
    fn method_info(&self, class: &str, method: &str) -> Result<MethodInfo, Error> {
        match self.methods.get(&(class.to_string(), method.to_string())) {
            Some(info) => Ok(info.clone()),
            None => Err(Error::new(
                ErrorImpl::MethodNotFound {
                    class: class.to_string(),
                    method: method.to_string(),
                },
                CallSite::new(class, method),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolation {
    pub parameter_name: String,
    pub expected_type: String,
    pub actual_type: String,
}

/// First declared parameter whose runtime type differs, in extraction order.
pub fn find_violation(declared: &[DeclaredParamInfo]) -> Option<ValidationViolation> {
    declared
        .iter()
        .find(|info| info.expected_type != info.actual_type)
        .map(|info| ValidationViolation {
            parameter_name: info.name.clone(),
            expected_type: info.expected_type.clone(),
            actual_type: info.actual_type.clone(),
        })
}

pub fn validate_arguments(
    context: &CallContext,
    provider: &dyn MethodMetadataProvider,
) -> Result<(), Error> {
    let call_site = match context.call_site() {
        Some(call_site) => call_site,
        None => {
            log::debug!("no calling class or method, skipping validation");
            return Ok(());
        }
    };

    if context.args.is_empty() {
        log::debug!("{} called without arguments, skipping validation", call_site);
        return Ok(());
    }

    let info = match provider.method_info(&call_site.class, &call_site.method) {
        Ok(info) => info,
        Err(error) => {
            log::debug!("no metadata for {}: {}", call_site, error);
            return Ok(());
        }
    };

    match info.doc_comment.as_deref() {
        Some(doc_comment) => validate_declared(context, doc_comment, &info.params),
        None => {
            log::debug!("{} has no documentation, skipping validation", call_site);
            Ok(())
        }
    }
}

pub fn validate_declared(
    context: &CallContext,
    doc_comment: &str,
    params: &[String],
) -> Result<(), Error> {
    let call_site = match context.call_site() {
        Some(call_site) => call_site,
        None => return Ok(()),
    };

    if doc_comment.is_empty() || params.is_empty() || context.args.is_empty() {
        log::debug!("{} has nothing to validate", call_site);
        return Ok(());
    }

    let declared = extract(doc_comment, params, &context.args);
    if declared.is_empty() {
        log::debug!("{} declares no scalar parameters", call_site);
        return Ok(());
    }

    match find_violation(&declared) {
        Some(violation) => Err(Error::new(
            ErrorImpl::ParameterTypeMismatch {
                parameter: violation.parameter_name,
                expected: violation.expected_type,
                received: violation.actual_type,
            },
            call_site,
        )),
        None => Ok(()),
    }
}
