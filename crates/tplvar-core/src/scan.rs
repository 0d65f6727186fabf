//! Token scanner for `{{ ... }}` placeholders.

use crate::error::{Result, TemplateError};
use crate::token::{Token, TokenKind};

/// Scan markup for placeholder tokens, in source order.
///
/// The cursor always resumes just past the previous token, so the returned
/// tokens are strictly ordered by `start` and never overlap. An opening
/// `{{` without a closing `}}` anywhere after it fails the whole scan; no
/// partial token list is returned.
pub fn scan(markup: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(token) = next_token(markup, cursor)? {
        cursor = token.end;
        tokens.push(token);
    }

    Ok(tokens)
}

/// Find the next token at or after `from`.
///
/// Returns `Ok(None)` when no `{{` remains. The closing search starts just
/// past the opening delimiter, so braces inside the expression are kept as
/// expression text until the first `}}`.
fn next_token(markup: &str, from: usize) -> Result<Option<Token>> {
    let start = match markup[from..].find("{{") {
        Some(pos) => from + pos,
        None => return Ok(None),
    };

    let body = start + 2;
    let close = markup[body..]
        .find("}}")
        .ok_or(TemplateError::MalformedExpression { offset: start })?;

    let end = body + close + 2;
    let expression = markup[body..body + close].trim().to_string();
    let kind = TokenKind::classify(&expression);

    Ok(Some(Token {
        kind,
        expression,
        start,
        end,
    }))
}
