#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod extractor;
pub mod macros;
pub mod registry;
pub mod validator;
pub mod values;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub class: String,
    pub method: String,
}

impl CallSite {
    pub fn new(class: &str, method: &str) -> Self {
        CallSite {
            class: class.to_string(),
            method: method.to_string(),
        }
    }
}

impl Display for CallSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.class, self.method)
    }
}

pub fn format_error(error: &Error) -> String {
    /*
        Error: ParameterTypeMismatch (Parameter `$age` expects type `integer`, `string` given)
        -> UserService::register
    */

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n-> {}", header, error.get_call_site())
}

pub fn display_error(error: &Error) {
    println!("{}", format_error(error));
}
