// SPDX-License-Identifier: PMPL-1.0-or-later

//! Placeholder substitution for message templates.
//!
//! Templates carry `{name}` placeholders that are replaced with the caller's
//! input values. A placeholder with no matching input stays in the output
//! verbatim, so a missing parameter degrades visibly instead of producing an
//! empty hole.

use crate::inputs::MessageInputs;
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"))
}

/// Render `template` with `inputs` substituted into its placeholders.
///
/// # Examples
///
/// ```
/// use driplo_messages::inputs::MessageInputs;
/// use driplo_messages::template::render;
/// let inputs = MessageInputs::new().with("count", 4);
/// assert_eq!(render("{count} stars", &inputs), "4 stars");
/// assert_eq!(render("{count} of {total}", &inputs), "4 of {total}");
/// ```
pub fn render(template: &str, inputs: &MessageInputs) -> String {
    // Hot path: the vast majority of catalog entries have no placeholders.
    if !template.contains('{') {
        return template.to_string();
    }
    placeholder_pattern()
        .replace_all(template, |caps: &Captures<'_>| match inputs.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Placeholder names used by a template, for parity checking between locale
/// variants and resource files.
pub fn placeholders(template: &str) -> BTreeSet<String> {
    placeholder_pattern()
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}
