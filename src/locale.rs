// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale identifiers for the compiled catalog.
//!
//! The catalog ships a closed two-locale world: English (`en`, the primary
//! source language every message is authored in) and Bulgarian (`bg`). The
//! enum is the only locale representation the runtime works with; raw tags
//! from cookies or URL segments pass through [`Locale::from_tag`] at the
//! application boundary.
//!
//! ## Adding a new locale
//!
//! 1. Add a variant to [`Locale`]
//! 2. Add a `Locale::Xx => "xx"` arm to `Locale::code()`
//! 3. Add a `"xx" => Some(Locale::Xx)` arm to `Locale::from_code()`
//! 4. Extend `Locale::all()`, `language_name()` and `native_name()`
//! 5. Add the locale to the catalog declaration in `messages.rs` and a
//!    variant column to every entry

use serde::{Deserialize, Serialize};

/// Supported locales for message resolution.
///
/// Each variant maps to an ISO 639-1 two-letter code. Declaration order here
/// matches the catalog's declared locale order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Bg,
}

/// Site-path aliases observed in production: the UK storefront serves the
/// English catalog.
const TAG_ALIASES: &[(&str, &str)] = &[("uk", "en")];

impl Locale {
    /// ISO 639-1 two-letter code for this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Bg => "bg",
        }
    }

    /// Parse an exact ISO 639-1 code into a supported locale.
    ///
    /// Returns `None` for anything that is not a lowercase supported code.
    /// This is the strict form used by per-call locale overrides; see
    /// [`Locale::from_tag`] for the forgiving application-boundary parse.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "bg" => Some(Locale::Bg),
            _ => None,
        }
    }

    /// Parse a raw language tag (`"EN"`, `"en-US"`, `"bg_BG"`, `"uk"`) into
    /// a supported locale.
    ///
    /// Lowercases, strips a region suffix, and applies the site aliases.
    /// Returns `None` for tags outside the supported set.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        let mapped = TAG_ALIASES
            .iter()
            .find(|(alias, _)| *alias == base)
            .map(|(_, target)| *target)
            .unwrap_or(base);
        Locale::from_code(mapped)
    }

    /// All supported locales, in catalog declaration order.
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Bg]
    }

    /// English name of the locale's language.
    pub fn language_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Bg => "Bulgarian",
        }
    }

    /// Name of the locale's language in that language, as shown in the
    /// language picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Bg => "Български",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
