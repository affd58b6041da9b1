//! Regular-expression checks for `pattern` and `patternProperties`
//!
//! JSON Schema patterns use the ECMA-262 dialect. Escapes outside that
//! dialect are rejected up front, then the pattern must compile with the
//! `regex` crate.
//!
//! Copyright (c) 2025 Metaschema Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::ValidationContext;
use crate::validation::error::{ErrorKind, ValidationResult};
use regex::Regex;

/// Letters that begin a valid ECMA-262 escape sequence
const ECMA_ESCAPE_LETTERS: &str = "bBcdDfknpPrsStuvwWx";

/// Punctuation that may be escaped to match itself
const ECMA_SYNTAX_CHARACTERS: &str = "^$\\.*+?()[]{}|/-";

/// Find the first escape sequence that ECMA-262 does not define
fn check_escapes(pattern: &str) -> Result<(), String> {
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            continue;
        }
        match chars.next() {
            None => return Err("pattern ends with a lone backslash".to_string()),
            Some(e)
                if ECMA_ESCAPE_LETTERS.contains(e)
                    || ECMA_SYNTAX_CHARACTERS.contains(e)
                    || e.is_ascii_digit() => {}
            Some(e) => return Err(format!("'\\{}' is not a valid escape", e)),
        }
    }
    Ok(())
}

/// Compile a pattern, returning a description of why it is invalid
pub fn compile(pattern: &str) -> Result<Regex, String> {
    check_escapes(pattern)?;
    Regex::new(pattern).map_err(|e| e.to_string())
}

/// Check that `pattern` is a valid regular expression for `keyword`
pub fn check_pattern(pattern: &str, keyword: &str, context: &ValidationContext) -> ValidationResult<()> {
    match compile(pattern) {
        Ok(_) => Ok(()),
        Err(reason) => Err(context.violation(
            ErrorKind::InvalidPattern,
            format!("{} contains an invalid regular expression {:?}: {}", keyword, pattern, reason),
            keyword,
            "valid ECMA-262 regular expression",
            pattern,
        )),
    }
}
