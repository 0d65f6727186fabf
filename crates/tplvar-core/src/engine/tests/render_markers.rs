//! Conditional-marker rendering tests
//!
//! `if`/`endif` markers are recognized syntactically but not evaluated:
//! each one re-emits its keyword as literal text.

use super::helpers::simple_record;
use super::*;

#[test]
fn test_render_if_marker_is_inert() {
    let record = simple_record();
    let result = render("{{ if active }}Hello{{ endif }}", &record).unwrap();
    assert_eq!(result, "ifHelloendif");
}

#[test]
fn test_render_if_condition_is_discarded() {
    // Whatever follows the keyword is not evaluated or kept.
    let record = simple_record();
    let result = render("[{{ if user.admin }}]", &record).unwrap();
    assert_eq!(result, "[if]");
}

#[test]
fn test_render_bare_if() {
    let record = simple_record();
    let result = render("[{{ if }}]", &record).unwrap();
    assert_eq!(result, "[if]");
}

#[test]
fn test_render_endif_exact() {
    let record = simple_record();
    let result = render("[{{ endif }}]", &record).unwrap();
    assert_eq!(result, "[endif]");
}

#[test]
fn test_render_if_dot_classifies_as_if() {
    // Prefix rule wins over the dot rule, so this is a marker and not a
    // nested lookup.
    let record = simple_record();
    let result = render("[{{ if.foo }}]", &record).unwrap();
    assert_eq!(result, "[if]");
}

#[test]
fn test_render_if_prefix_word() {
    let record = simple_record();
    let result = render("[{{ iffy }}]", &record).unwrap();
    assert_eq!(result, "[if]");
}

#[test]
fn test_render_endif_near_miss_is_var() {
    // "endif2" is not the exact keyword, so it is a plain (absent) variable.
    let record = simple_record();
    let result = render("[{{ endif2 }}]", &record).unwrap();
    assert_eq!(result, "[]");
}

#[test]
fn test_render_markers_between_substitutions() {
    let record = simple_record();
    let result = render("{{ if active }}{{ name }}{{ endif }}!", &record).unwrap();
    assert_eq!(result, "ifAnnendif!");
}
