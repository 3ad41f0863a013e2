use lazy_static::lazy_static;
use std::collections::HashMap;

pub const STRING: &str = "string";
pub const DOUBLE: &str = "double";
pub const INTEGER: &str = "integer";
pub const BOOLEAN: &str = "boolean";

lazy_static! {
    pub static ref TYPE_ALIASES: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("string", STRING);
        map.insert("double", DOUBLE);
        map.insert("float", DOUBLE);
        map.insert("integer", INTEGER);
        map.insert("int", INTEGER);
        map.insert("boolean", BOOLEAN);
        map.insert("bool", BOOLEAN);
        map
    };
}

/// Resolves `token` to its canonical type name. Unknown tokens pass through.
pub fn canonicalize(token: &str) -> String {
    match TYPE_ALIASES.get(token) {
        Some(canonical) => canonical.to_string(),
        None => token.to_string(),
    }
}

pub fn is_scalar_alias(token: &str) -> bool {
    TYPE_ALIASES.contains_key(token)
}

/// All alias tokens, longest first so `integer` wins over `int` in an alternation.
pub fn alias_tokens() -> Vec<&'static str> {
    let mut tokens = TYPE_ALIASES.keys().copied().collect::<Vec<&'static str>>();
    tokens.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    tokens
}
