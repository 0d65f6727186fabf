//! Tests for the substitution engine
//!
//! Organized into focused submodules: plain substitution, nested-path
//! resolution, conditional markers, and error cases.

use super::*;

// Test helper functions
mod helpers;

mod render_markers;
