//! Documentation parameter extraction.
//!
//! This module scans free-form documentation text for `@param` tags and
//! correlates them with a method's formal parameters and actual arguments:
//!
//! - Builds a regex from the registry's alias tokens and the formal names
//! - Matches type tokens and parameter names as whole tokens only
//! - Emits declared pairs in the order their tags appear in the text
//! - Tags the actual argument at each matched position with its runtime type
//!
//! Nothing here fails. Tags that cannot be correlated are dropped.

pub mod extractor;
