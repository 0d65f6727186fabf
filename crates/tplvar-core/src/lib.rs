//! Minimal template-expression engine for `{{ ... }}` placeholders in markup.
//!
//! Scans a markup string for `{{ expression }}` tokens, classifies each one,
//! resolves values against a read-only JSON data record, and rebuilds the
//! markup with the resolved text substituted.
//!
//! ## Philosophy
//!
//! - **Pure text substitution**: no expression language, no evaluation; the
//!   engine never parses the surrounding markup
//! - **Missing data is not an error**: absent keys and broken paths render
//!   as the empty string
//! - **One pass**: tokens are substituted left to right against original
//!   offsets; replacement text is never re-scanned
//!
//! ## Syntax
//!
//! - Direct variables: `{{name}}` or `{{ name }}` (spaces optional)
//! - Nested access: `{{address.city}}` or `{{ address.city }}`
//! - Conditional markers: `{{ if ... }}` / `{{ endif }}` are recognized
//!   syntactically but not evaluated; they render as literal `if` / `endif`
//!
//! ## Example
//!
//! ```
//! use tplvar_core::{render, Record};
//! use serde_json::json;
//!
//! let record = Record::new(json!({
//!     "name": "Ann",
//!     "address": { "city": "Oslo" }
//! }));
//! let html = render("<p>{{ name }} lives in {{ address.city }}</p>", &record).unwrap();
//! assert_eq!(html, "<p>Ann lives in Oslo</p>");
//! ```

// Core modules
pub mod engine;
pub mod error;
pub mod record;
pub mod scan;
pub mod token;

// Re-export commonly used types
pub use engine::{render, Engine};
pub use error::{Result, TemplateError};
pub use record::Record;
pub use scan::scan;
pub use token::{Token, TokenKind};
