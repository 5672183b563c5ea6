// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog data model: the compiled message tables the runtime dispatches
//! over.
//!
//! A [`Catalog`] is fixed at build time and immutable at runtime. Entry
//! lookup is O(n) on the entry list, which is fine for the few hundred
//! messages a storefront catalog carries: one scan per resolution, not a
//! hot loop, and the table stays in static memory with no hashing setup at
//! load.

use crate::locale::Locale;
use crate::template;
use anyhow::{anyhow, Result};
use std::collections::BTreeSet;

/// One compiled message: a stable identifier, the name it is exported
/// under, and one template per locale in catalog locale order.
///
/// `export` equals `id` unless the compiler bound the accessor to a
/// different name (observed in the source resources, e.g. the add-favorite
/// accessor compiled from the `addfavorite1` identifier). Language-invariant
/// messages may share a single template value across locales.
#[derive(Debug, Clone, Copy)]
pub struct MessageEntry {
    pub id: &'static str,
    pub export: &'static str,
    pub variants: &'static [(Locale, &'static str)],
}

impl MessageEntry {
    /// Template authored for this entry under `locale`, if one exists.
    pub fn variant(&self, locale: Locale) -> Option<&'static str> {
        self.variants
            .iter()
            .find(|(candidate, _)| *candidate == locale)
            .map(|(_, text)| *text)
    }

    /// Whether the exported accessor name differs from the identifier.
    pub fn is_aliased(&self) -> bool {
        self.id != self.export
    }
}

/// The compiled catalog: declared locales plus every message entry.
///
/// `primary` is the source language every message is authored in; `fallback`
/// is the locale an unrecognized per-call override degrades to (the final
/// branch of the generated dispatch order). `locales` is the declared order
/// and doubles as the fallback walk order.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub name: &'static str,
    pub primary: Locale,
    pub fallback: Locale,
    pub locales: &'static [Locale],
    pub entries: &'static [MessageEntry],
}

impl Catalog {
    /// Look up an entry by its internal identifier.
    pub fn entry(&self, id: &str) -> Option<&MessageEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Look up an entry by its exported accessor name.
    pub fn entry_by_export(&self, export: &str) -> Option<&MessageEntry> {
        self.entries.iter().find(|entry| entry.export == export)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Template for `entry` under the declared fallback walk.
    ///
    /// A supported target missing its own variant falls back to the primary
    /// locale's variant (the source language always has one); an entry with
    /// no usable variant at all fails open to its identifier. Neither case
    /// occurs in a catalog that passes [`Catalog::verify`].
    pub fn template(&self, entry: &MessageEntry, target: Locale) -> &'static str {
        entry
            .variant(target)
            .or_else(|| entry.variant(self.primary))
            .or_else(|| entry.variants.first().map(|(_, text)| *text))
            .unwrap_or(entry.id)
    }

    /// Content digest over the canonicalized catalog: sorted
    /// `(id, locale, text)` rows, so the same digest is computable from
    /// per-locale resource files and compared for drift.
    pub fn fingerprint(&self) -> blake3::Hash {
        let rows = self
            .entries
            .iter()
            .flat_map(|entry| {
                entry
                    .variants
                    .iter()
                    .map(|(locale, text)| (entry.id, locale.code(), *text))
            })
            .collect();
        content_digest(rows)
    }

    /// Integrity problems in the compiled tables.
    ///
    /// Checks the catalog invariants: unique identifiers, unique exports,
    /// a variant for every declared locale, and identical placeholder sets
    /// across each entry's variants.
    pub fn issues(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut ids = BTreeSet::new();
        let mut exports = BTreeSet::new();

        for entry in self.entries {
            if !ids.insert(entry.id) {
                issues.push(CatalogIssue::DuplicateId {
                    id: entry.id.to_string(),
                });
            }
            if !exports.insert(entry.export) {
                issues.push(CatalogIssue::DuplicateExport {
                    export: entry.export.to_string(),
                });
            }

            let reference = entry
                .variant(self.primary)
                .map(template::placeholders)
                .unwrap_or_default();
            for locale in self.locales {
                match entry.variant(*locale) {
                    None => issues.push(CatalogIssue::MissingVariant {
                        id: entry.id.to_string(),
                        locale: *locale,
                    }),
                    Some(text) if *locale != self.primary => {
                        if template::placeholders(text) != reference {
                            issues.push(CatalogIssue::PlaceholderDrift {
                                id: entry.id.to_string(),
                                locale: *locale,
                                expected: join(&reference),
                                found: join(&template::placeholders(text)),
                            });
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        issues
    }

    /// [`Catalog::issues`] as a hard failure for loaders and CI.
    pub fn verify(&self) -> Result<()> {
        let issues = self.issues();
        if issues.is_empty() {
            return Ok(());
        }
        let listing = issues
            .iter()
            .map(CatalogIssue::to_string)
            .collect::<Vec<_>>()
            .join("\n  ");
        Err(anyhow!(
            "catalog `{}` failed verification ({} issue(s)):\n  {}",
            self.name,
            issues.len(),
            listing
        ))
    }
}

/// One integrity problem found by [`Catalog::issues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateId {
        id: String,
    },
    DuplicateExport {
        export: String,
    },
    MissingVariant {
        id: String,
        locale: Locale,
    },
    PlaceholderDrift {
        id: String,
        locale: Locale,
        expected: String,
        found: String,
    },
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogIssue::DuplicateId { id } => write!(f, "duplicate identifier `{id}`"),
            CatalogIssue::DuplicateExport { export } => {
                write!(f, "duplicate export `{export}`")
            }
            CatalogIssue::MissingVariant { id, locale } => {
                write!(f, "`{id}` has no {locale} variant")
            }
            CatalogIssue::PlaceholderDrift {
                id,
                locale,
                expected,
                found,
            } => write!(
                f,
                "`{id}` {locale} placeholders [{found}] differ from primary [{expected}]"
            ),
        }
    }
}

/// Digest of sorted `(id, locale code, text)` rows. Shared between the
/// compiled catalog and resource-file fingerprints so the two line up.
pub(crate) fn content_digest(mut rows: Vec<(&str, &str, &str)>) -> blake3::Hash {
    rows.sort_unstable();
    let mut hasher = blake3::Hasher::new();
    for (id, code, text) in rows {
        hasher.update(id.as_bytes());
        hasher.update(&[0]);
        hasher.update(code.as_bytes());
        hasher.update(&[0]);
        hasher.update(text.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize()
}

fn join(names: &BTreeSet<String>) -> String {
    names.iter().cloned().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCALES: &[Locale] = &[Locale::En, Locale::Bg];

    fn catalog(entries: &'static [MessageEntry]) -> Catalog {
        Catalog {
            name: "test",
            primary: Locale::En,
            fallback: Locale::Bg,
            locales: LOCALES,
            entries,
        }
    }

    #[test]
    fn lookup_by_id_and_export() {
        static ENTRIES: &[MessageEntry] = &[MessageEntry {
            id: "addfavorite1",
            export: "add_favorite",
            variants: &[(Locale::En, "Add to favorites"), (Locale::Bg, "Добави в любими")],
        }];
        let catalog = catalog(ENTRIES);
        assert!(catalog.entry("addfavorite1").is_some());
        assert!(catalog.entry("add_favorite").is_none());
        let entry = catalog.entry_by_export("add_favorite").expect("export lookup");
        assert_eq!(entry.id, "addfavorite1");
        assert!(entry.is_aliased());
    }

    #[test]
    fn missing_variant_falls_back_to_primary() {
        static ENTRIES: &[MessageEntry] = &[MessageEntry {
            id: "partial",
            export: "partial",
            variants: &[(Locale::En, "Only english")],
        }];
        let catalog = catalog(ENTRIES);
        let entry = catalog.entry("partial").expect("entry");
        assert_eq!(catalog.template(entry, Locale::Bg), "Only english");
        assert_eq!(
            catalog.issues(),
            vec![CatalogIssue::MissingVariant {
                id: "partial".to_string(),
                locale: Locale::Bg,
            }]
        );
    }

    #[test]
    fn duplicate_ids_and_exports_detected() {
        static ENTRIES: &[MessageEntry] = &[
            MessageEntry {
                id: "twice",
                export: "twice",
                variants: &[(Locale::En, "a"), (Locale::Bg, "b")],
            },
            MessageEntry {
                id: "twice",
                export: "twice",
                variants: &[(Locale::En, "a"), (Locale::Bg, "b")],
            },
        ];
        let issues = catalog(ENTRIES).issues();
        assert!(issues.contains(&CatalogIssue::DuplicateId {
            id: "twice".to_string()
        }));
        assert!(issues.contains(&CatalogIssue::DuplicateExport {
            export: "twice".to_string()
        }));
    }

    #[test]
    fn placeholder_drift_detected() {
        static ENTRIES: &[MessageEntry] = &[MessageEntry {
            id: "stars",
            export: "stars",
            variants: &[(Locale::En, "{count} stars"), (Locale::Bg, "{n} звезди")],
        }];
        let issues = catalog(ENTRIES).issues();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0],
            CatalogIssue::PlaceholderDrift { id, .. } if id == "stars"
        ));
        assert!(catalog(ENTRIES).verify().is_err());
    }

    #[test]
    fn fingerprint_is_order_independent() {
        static FORWARD: &[MessageEntry] = &[
            MessageEntry {
                id: "a",
                export: "a",
                variants: &[(Locale::En, "A"), (Locale::Bg, "А")],
            },
            MessageEntry {
                id: "b",
                export: "b",
                variants: &[(Locale::En, "B"), (Locale::Bg, "Б")],
            },
        ];
        static REVERSED: &[MessageEntry] = &[
            MessageEntry {
                id: "b",
                export: "b",
                variants: &[(Locale::En, "B"), (Locale::Bg, "Б")],
            },
            MessageEntry {
                id: "a",
                export: "a",
                variants: &[(Locale::En, "A"), (Locale::Bg, "А")],
            },
        ];
        assert_eq!(
            catalog(FORWARD).fingerprint(),
            catalog(REVERSED).fingerprint()
        );
    }
}
