// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-locale message resource files and parity checking.
//!
//! The compiled catalog is built from flat `<locale>.json` / `<locale>.yaml`
//! maps of message identifier → template. The runtime never touches these
//! files; this module exists for the maintenance tool, which diffs them
//! against the compiled tables so a missing key or a drifted placeholder is
//! caught before it ships.

use crate::catalog::{self, Catalog};
use crate::locale::Locale;
use crate::template;
use anyhow::{anyhow, Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One loaded resource file: a locale and its identifier → template map.
#[derive(Debug, Clone)]
pub struct ResourceFile {
    pub locale: Locale,
    pub path: PathBuf,
    pub messages: BTreeMap<String, String>,
}

impl ResourceFile {
    /// Load a resource file, deriving the locale from the file stem.
    ///
    /// Extension-based dispatch is explicit to avoid ambiguous parsing
    /// behavior.
    pub fn load(path: &Path) -> Result<Self> {
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        let locale = Locale::from_tag(stem).ok_or_else(|| {
            anyhow!(
                "resource file {} does not name a supported locale",
                path.display()
            )
        })?;
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading message resource {}", path.display()))?;
        let messages = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json message resource {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml message resource {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported message resource extension for {}",
                    path.display()
                ))
            }
        };
        Ok(Self {
            locale,
            path: path.to_path_buf(),
            messages,
        })
    }
}

/// Find and load every resource file under `dir`.
///
/// A resource file is any `json`/`yaml`/`yml` file whose stem names a
/// supported locale; other files are ignored. Results are sorted by locale
/// code for stable reporting.
pub fn discover(dir: &Path) -> Result<Vec<ResourceFile>> {
    if !dir.exists() {
        return Err(anyhow!("resource directory not found: {}", dir.display()));
    }

    let mut resources = Vec::new();
    for entry in WalkDir::new(dir).into_iter().filter_map(|entry| entry.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let supported_ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext, "json" | "yaml" | "yml"))
            .unwrap_or(false);
        let named_locale = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(Locale::from_tag)
            .is_some();
        if supported_ext && named_locale {
            resources.push(ResourceFile::load(path)?);
        }
    }

    resources.sort_by(|a, b| a.locale.code().cmp(b.locale.code()));
    Ok(resources)
}

/// Flatten one locale of the compiled catalog back into a resource map.
pub fn dump(catalog: &Catalog, locale: Locale) -> BTreeMap<String, String> {
    catalog
        .entries
        .iter()
        .map(|entry| {
            (
                entry.id.to_string(),
                catalog.template(entry, locale).to_string(),
            )
        })
        .collect()
}

/// One difference between a resource file and the compiled catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParityIssue {
    /// Compiled entry with no key in the resource file.
    MissingKey { locale: Locale, key: String },
    /// Resource key that no compiled entry carries.
    UnknownKey { locale: Locale, key: String },
    /// Resource text whose placeholders differ from the compiled variant.
    PlaceholderDrift { locale: Locale, key: String },
    /// Resource text that differs from the compiled variant.
    TextDrift { locale: Locale, key: String },
}

impl std::fmt::Display for ParityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParityIssue::MissingKey { locale, key } => {
                write!(f, "{locale}: `{key}` missing from resources")
            }
            ParityIssue::UnknownKey { locale, key } => {
                write!(f, "{locale}: `{key}` not in the compiled catalog")
            }
            ParityIssue::PlaceholderDrift { locale, key } => {
                write!(f, "{locale}: `{key}` placeholders drifted from the compiled variant")
            }
            ParityIssue::TextDrift { locale, key } => {
                write!(f, "{locale}: `{key}` text drifted from the compiled variant")
            }
        }
    }
}

/// Diff resource files against the compiled catalog.
///
/// Text drift means the compiled tables are stale (recompile); placeholder
/// drift is reported separately because it breaks substitution rather than
/// wording.
pub fn compare(catalog: &Catalog, resources: &[ResourceFile]) -> Vec<ParityIssue> {
    let mut issues = Vec::new();

    for resource in resources {
        for entry in catalog.entries {
            let Some(compiled) = entry.variant(resource.locale) else {
                // A missing compiled variant is a catalog issue, not parity.
                continue;
            };
            match resource.messages.get(entry.id) {
                None => issues.push(ParityIssue::MissingKey {
                    locale: resource.locale,
                    key: entry.id.to_string(),
                }),
                Some(text) if template::placeholders(text) != template::placeholders(compiled) => {
                    issues.push(ParityIssue::PlaceholderDrift {
                        locale: resource.locale,
                        key: entry.id.to_string(),
                    })
                }
                Some(text) if text != compiled => issues.push(ParityIssue::TextDrift {
                    locale: resource.locale,
                    key: entry.id.to_string(),
                }),
                Some(_) => {}
            }
        }

        for key in resource.messages.keys() {
            if catalog.entry(key).is_none() {
                issues.push(ParityIssue::UnknownKey {
                    locale: resource.locale,
                    key: key.clone(),
                });
            }
        }
    }

    issues
}

/// Content digest over resource files, canonicalized the same way as
/// [`Catalog::fingerprint`] so equal content yields equal digests.
pub fn fingerprint(resources: &[ResourceFile]) -> blake3::Hash {
    let rows = resources
        .iter()
        .flat_map(|resource| {
            resource
                .messages
                .iter()
                .map(|(key, text)| (key.as_str(), resource.locale.code(), text.as_str()))
        })
        .collect();
    catalog::content_digest(rows)
}
