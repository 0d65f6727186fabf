//! Substitution engine: scan, resolve, rebuild.

use crate::error::Result;
use crate::record::{lookup_field, lookup_path, stringify, Record};
use crate::scan::scan;
use crate::token::{Token, TokenKind};

/// Template engine rendering markup against a data record.
pub struct Engine;

impl Engine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Render markup, replacing every `{{ ... }}` placeholder.
    ///
    /// Tokens are substituted in source order. The output is rebuilt from
    /// verbatim segments and replacement text, so an earlier substitution
    /// can never shift the position of a later one. Replacement text is
    /// never re-scanned.
    pub fn render(&self, markup: &str, record: &Record) -> Result<String> {
        let tokens = scan(markup)?;
        let mut output = String::with_capacity(markup.len());
        let mut cursor = 0;

        for token in &tokens {
            output.push_str(&markup[cursor..token.start]);
            output.push_str(&resolve_token(token, record));
            cursor = token.end;
        }
        output.push_str(&markup[cursor..]);

        Ok(output)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to render markup against a record.
pub fn render(markup: &str, record: &Record) -> Result<String> {
    Engine::new().render(markup, record)
}

/// Compute a token's replacement text.
///
/// Infallible: missing data resolves to the empty string, and the inert
/// `if`/`endif` markers re-emit their keyword as literal text.
fn resolve_token(token: &Token, record: &Record) -> String {
    match token.kind {
        TokenKind::Var => resolve_var(&token.expression, record),
        TokenKind::NestedVar => resolve_nested_var(&token.expression, record),
        TokenKind::If => "if".to_string(),
        TokenKind::EndIf => "endif".to_string(),
    }
}

/// Resolve a direct key against the record.
fn resolve_var(expression: &str, record: &Record) -> String {
    lookup_field(record.data(), expression)
        .map(stringify)
        .unwrap_or_default()
}

/// Resolve a dotted path against the record.
fn resolve_nested_var(expression: &str, record: &Record) -> String {
    lookup_path(record.data(), expression)
        .map(stringify)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests;
