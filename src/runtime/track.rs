// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-call resolution tracking.
//!
//! Every local (non-delegated) resolution reports its message identifier
//! and resolved locale here. The events feed usage analytics and the
//! dead-message sweep; they never influence the resolved string.

use crate::locale::Locale;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

/// Sink for resolution events.
///
/// Implementations must be non-blocking and should not panic; the dispatch
/// routine isolates panics regardless, so a broken sink can never corrupt
/// message output.
pub trait MessageTracker: Send + Sync {
    fn record(&self, message: &str, locale: Locale);
}

/// Discards every event. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracker;

impl MessageTracker for NoopTracker {
    fn record(&self, _message: &str, _locale: Locale) {}
}

/// Aggregated usage of one `(message, locale)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageUsage {
    pub message: String,
    pub locale: Locale,
    pub hits: u64,
    pub last_resolved: DateTime<Utc>,
}

/// In-memory usage aggregation.
///
/// Counts hits per `(message, locale)` pair with the last resolution time.
/// [`UsageTracker::snapshot`] serializes for the external analytics sink;
/// a message identifier absent from every snapshot over a release cycle is
/// a dead-message candidate.
#[derive(Debug, Default)]
pub struct UsageTracker {
    seen: Mutex<HashMap<(String, Locale), (u64, DateTime<Utc>)>>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded hits for one pair.
    pub fn hits(&self, message: &str, locale: Locale) -> u64 {
        self.lock()
            .get(&(message.to_string(), locale))
            .map(|(hits, _)| *hits)
            .unwrap_or(0)
    }

    /// All recorded usage, sorted by message then locale.
    pub fn snapshot(&self) -> Vec<MessageUsage> {
        let mut usage: Vec<MessageUsage> = self
            .lock()
            .iter()
            .map(|((message, locale), (hits, last_resolved))| MessageUsage {
                message: message.clone(),
                locale: *locale,
                hits: *hits,
                last_resolved: *last_resolved,
            })
            .collect();
        usage.sort_by(|a, b| {
            a.message
                .cmp(&b.message)
                .then_with(|| a.locale.code().cmp(b.locale.code()))
        });
        usage
    }

    // A poisoned mutex only means another recording panicked mid-update;
    // counts stay usable.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<(String, Locale), (u64, DateTime<Utc>)>> {
        match self.seen.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl MessageTracker for UsageTracker {
    fn record(&self, message: &str, locale: Locale) {
        let mut seen = self.lock();
        let slot = seen
            .entry((message.to_string(), locale))
            .or_insert((0, Utc::now()));
        slot.0 += 1;
        slot.1 = Utc::now();
    }
}
