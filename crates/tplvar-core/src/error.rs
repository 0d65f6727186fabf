use thiserror::Error;

/// Errors surfaced by the template engine.
///
/// Missing data is deliberately not represented here: absent keys and broken
/// paths resolve to the empty string instead of failing (see [`crate::record`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// An opening `{{` has no matching `}}` anywhere after it.
    ///
    /// Fatal for the whole scan: no partial token list is produced.
    #[error("MALFORMED_EXPRESSION: expression opened at byte {offset} is not closed with '}}}}'")]
    MalformedExpression {
        /// Byte offset of the unmatched `{{` in the source markup
        offset: usize,
    },
}

pub type Result<T> = std::result::Result<T, TemplateError>;
