//! Placeholder tokens and their classification.

/// Classification of one `{{ ... }}` expression.
///
/// Closed set: every expression falls into exactly one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Direct key lookup: `{{ name }}`
    Var,

    /// Dotted-path lookup: `{{ address.city }}`
    NestedVar,

    /// Conditional-block opener: `{{ if ... }}` (recognized, not evaluated)
    If,

    /// Conditional-block closer: `{{ endif }}` (recognized, not evaluated)
    EndIf,
}

impl TokenKind {
    /// Classify a trimmed expression.
    ///
    /// Rules apply in order, first match wins. The ordering is load-bearing:
    /// the `if` prefix takes priority over the dot rule, so `if.foo` is
    /// [`TokenKind::If`], not [`TokenKind::NestedVar`].
    ///
    /// 1. starts with `if` → [`TokenKind::If`]
    /// 2. equals `endif` exactly → [`TokenKind::EndIf`]
    /// 3. contains `.` → [`TokenKind::NestedVar`]
    /// 4. anything else → [`TokenKind::Var`]
    pub fn classify(expression: &str) -> Self {
        if expression.starts_with("if") {
            TokenKind::If
        } else if expression == "endif" {
            TokenKind::EndIf
        } else if expression.contains('.') {
            TokenKind::NestedVar
        } else {
            TokenKind::Var
        }
    }
}

/// A single `{{ ... }}` occurrence in the source markup.
///
/// Offsets are byte positions into the original markup string and include
/// the delimiters: `start` points at the first `{`, `end` just past the
/// last `}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// Trimmed text between the delimiters (may be empty)
    pub expression: String,
    /// Byte offset of the opening `{{`
    pub start: usize,
    /// Byte offset immediately past the closing `}}`
    pub end: usize,
}

impl Token {
    /// Width consumed in the original markup, delimiters included.
    pub fn span(&self) -> usize {
        self.end - self.start
    }
}
