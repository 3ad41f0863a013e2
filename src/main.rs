use std::{env, fs::read_to_string, process::exit};

use docparam::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    validator::validator::{validate_arguments, CallContext, MethodRegistry},
    values::value::Value,
    CallSite,
};
use flexi_logger::Logger;

const USAGE: &str = "usage: docparam <doc-file> <Class::method> <param1,param2,...> [args...]";

fn main() {
    let _logger = match Logger::try_with_env_or_str("warn").and_then(|logger| logger.start()) {
        Ok(handle) => Some(handle),
        Err(error) => {
            eprintln!("Failed to start logger: {}", error);
            None
        }
    };

    let args: Vec<String> = env::args().collect();

    match run(&args[1..]) {
        Ok(()) => println!("OK"),
        Err(error) => {
            display_error(&error);
            match error.get_internal_error() {
                ErrorImpl::ParameterTypeMismatch { .. } => exit(1),
                _ => exit(2),
            }
        }
    }
}

fn run(args: &[String]) -> Result<(), Error> {
    if args.len() < 3 {
        return Err(invalid(USAGE.to_string(), CallSite::new("docparam", "main")));
    }

    let call_site = parse_call_site(&args[1])?;

    let doc_comment = read_to_string(&args[0]).map_err(|error| {
        invalid(
            format!("Failed to read `{}`: {}", args[0], error),
            call_site.clone(),
        )
    })?;

    let params = args[2]
        .split(',')
        .map(str::trim)
        .filter(|param| !param.is_empty())
        .map(|param| param.trim_start_matches('$'))
        .collect::<Vec<&str>>();

    let values = args[3..]
        .iter()
        .map(|literal| Value::parse_literal(literal))
        .collect::<Vec<Value>>();

    log::debug!(
        "validating {} with {} parameters and {} arguments",
        call_site,
        params.len(),
        values.len()
    );

    let mut registry = MethodRegistry::new();
    registry.register(&call_site.class, &call_site.method, Some(doc_comment.as_str()), &params);

    validate_arguments(
        &CallContext::new(&call_site.class, &call_site.method, values),
        &registry,
    )
}

fn parse_call_site(target: &str) -> Result<CallSite, Error> {
    match target.split_once("::") {
        Some((class, method)) if !class.is_empty() && !method.is_empty() => {
            Ok(CallSite::new(class, method))
        }
        _ => Err(invalid(
            format!("Expected `Class::method`, received `{}`", target),
            CallSite::new("docparam", "main"),
        )),
    }
}

fn invalid(message: String, call_site: CallSite) -> Error {
    Error::new(ErrorImpl::InvalidArguments { message }, call_site)
}
