use std::fmt::Display;

use thiserror::Error;

use crate::CallSite;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    call_site: CallSite,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, call_site: CallSite) -> Self {
        Error {
            internal_error: error_impl,
            call_site,
        }
    }

    pub fn get_call_site(&self) -> &CallSite {
        &self.call_site
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ParameterTypeMismatch { .. } => "ParameterTypeMismatch",
            ErrorImpl::MethodNotFound { .. } => "MethodNotFound",
            ErrorImpl::InvalidArguments { .. } => "InvalidArguments",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ParameterTypeMismatch {
                parameter,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Parameter `${}` expects type `{}`, `{}` given",
                parameter, expected, received
            )),
            ErrorImpl::MethodNotFound { .. } => ErrorTip::None,
            ErrorImpl::InvalidArguments { message } => ErrorTip::Suggestion(message.clone()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {}", self.internal_error, self.call_site)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("parameter {parameter:?} type mismatch: expected {expected:?}, received {received:?}")]
    ParameterTypeMismatch {
        parameter: String,
        expected: String,
        received: String,
    },
    #[error("method {class}::{method} not found")]
    MethodNotFound { class: String, method: String },
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },
}
