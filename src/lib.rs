// SPDX-License-Identifier: PMPL-1.0-or-later

//! Driplo Messages — compiled localization catalog and dispatch runtime.
//!
//! This crate is the compiled form of the marketplace's translatable
//! strings plus the small runtime every generated accessor delegates to.
//!
//! RUNTIME PILLARS:
//! 1. **Catalog**: static per-message tables (identifier, export name, one
//!    template per locale), fixed at build time and immutable after.
//! 2. **Dispatch**: one routine resolving any message, covering locale
//!    overrides, current-locale state, per-call usage tracking, and the
//!    catalog fallback walk for unrecognized locales.
//! 3. **Split delivery**: an optional client mode where resolution is
//!    delegated to a server-materialized bridge registry instead of the
//!    local tables, keeping the client bundle at one locale's strings.
//!
//! The `driplo-messages` binary is the catalog maintenance tool: listing,
//! one-off resolution, integrity/parity checks against the per-locale
//! resource files, and resource export.

pub mod catalog;
pub mod inputs;
pub mod locale;
pub mod messages;
pub mod resource;
pub mod runtime;
pub mod template;
