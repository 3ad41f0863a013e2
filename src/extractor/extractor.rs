use regex::Regex;

use crate::{
    registry::aliases::{alias_tokens, canonicalize},
    values::value::Value,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredParamInfo {
    pub name: String,
    pub expected_type: String,
    pub actual_type: String,
}

/// A compiled `@param <type> $<name>` matcher for one formal parameter list.
#[derive(Debug, Clone)]
pub struct ParamPattern {
    regex: Regex,
}

impl ParamPattern {
    pub fn new(formal_params: &[String]) -> Option<ParamPattern> {
        let mut names = formal_params
            .iter()
            .filter(|name| !name.is_empty())
            .map(|name| regex::escape(name))
            .collect::<Vec<String>>();

        if names.is_empty() {
            return None;
        }

        names.sort_by(|a, b| b.len().cmp(&a.len()));
        names.dedup();

        let types = alias_tokens()
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<String>>();

        let pattern = format!(
            r"@param\s+(?P<type>{})\s+\$(?P<name>{})\b",
            types.join("|"),
            names.join("|")
        );

        // Every piece is escaped, so the pattern always compiles.
        Regex::new(&pattern).ok().map(|regex| ParamPattern { regex })
    }

    /// Raw `(type token, name)` pairs in document order.
    pub fn declared_tags(&self, doc_text: &str) -> Vec<(String, String)> {
        self.regex
            .captures_iter(doc_text)
            .map(|captures| {
                (
                    captures["type"].to_string(),
                    captures["name"].to_string(),
                )
            })
            .collect()
    }
}

pub fn extract(
    doc_text: &str,
    formal_params: &[String],
    actual_args: &[Value],
) -> Vec<DeclaredParamInfo> {
    if doc_text.is_empty() || formal_params.is_empty() {
        return vec![];
    }

    let pattern = match ParamPattern::new(formal_params) {
        Some(pattern) => pattern,
        None => return vec![],
    };

    let mut declared = vec![];

    for (type_token, name) in pattern.declared_tags(doc_text) {
        let index = match formal_params.iter().position(|param| *param == name) {
            Some(index) => index,
            None => continue,
        };

        let actual = match actual_args.get(index) {
            Some(actual) => actual,
            None => {
                log::trace!("skipping `${}`: no argument at position {}", name, index);
                continue;
            }
        };

        log::trace!("declared `{} ${}` at position {}", type_token, name, index);

        declared.push(DeclaredParamInfo {
            name,
            expected_type: canonicalize(&type_token),
            actual_type: actual.runtime_type().to_string(),
        });
    }

    declared
}
