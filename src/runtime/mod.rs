// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale resolution and message dispatch.
//!
//! This is the one piece of the crate with control flow: everything else is
//! static string tables. Every generated accessor delegates to
//! [`MessageRuntime::resolve`], which
//!
//! 1. hands the call to the split-delivery bridge when delegation is active
//!    (split delivery on, client-side execution), with no tracking and no
//!    local lookup;
//! 2. otherwise picks the target locale: a recognized per-call override, the
//!    declared fallback locale for an unrecognized override, or the current
//!    locale state;
//! 3. reports the resolution to the [`MessageTracker`];
//! 4. renders the entry's template under the catalog fallback walk.
//!
//! The resolution strategy is fixed at construction from [`RuntimeFlags`],
//! so call sites never branch on the execution mode, and all ambient state
//! (current locale, mode flags) lives in the runtime value callers thread
//! through, not in globals. Resolution is total: every call returns a
//! string.

mod bridge;
mod track;

pub use bridge::{BridgeFn, BridgeRegistry};
pub use track::{MessageTracker, MessageUsage, NoopTracker, UsageTracker};

use crate::catalog::Catalog;
use crate::inputs::MessageInputs;
use crate::locale::Locale;
use crate::template;
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, RwLock};

/// Where the code is running: server-side rendering or the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Server,
    Client,
}

/// Execution mode plus the split-delivery build toggle.
///
/// Delegation to the bridge triggers only for `split_delivery` on the
/// client: server rendering always resolves locally because it must be
/// self-contained before any client registry exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeFlags {
    pub mode: ExecutionMode,
    pub split_delivery: bool,
}

impl RuntimeFlags {
    pub fn server() -> Self {
        Self {
            mode: ExecutionMode::Server,
            split_delivery: false,
        }
    }

    pub fn client() -> Self {
        Self {
            mode: ExecutionMode::Client,
            split_delivery: false,
        }
    }

    pub fn with_split_delivery(mut self) -> Self {
        self.split_delivery = true;
        self
    }

    /// Whether resolution is delegated to the bridge registry.
    pub fn delegates(&self) -> bool {
        self.split_delivery && self.mode == ExecutionMode::Client
    }
}

/// Request- or session-scoped current locale.
///
/// The getter is total: a poisoned lock yields the last written value, so
/// resolution never fails for want of a locale.
#[derive(Debug)]
pub struct LocaleState {
    current: RwLock<Locale>,
}

impl LocaleState {
    pub fn new(initial: Locale) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub fn current(&self) -> Locale {
        match self.current.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn set(&self, locale: Locale) {
        match self.current.write() {
            Ok(mut guard) => *guard = locale,
            Err(poisoned) => *poisoned.into_inner() = locale,
        }
    }
}

/// Per-call resolution options: an optional locale override.
///
/// The override carries a raw tag rather than a parsed [`Locale`] because an
/// unrecognized value must degrade to the catalog's declared fallback locale
/// instead of being rejected at the call boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOptions {
    pub locale: Option<String>,
}

impl MessageOptions {
    pub fn with_locale(code: impl Into<String>) -> Self {
        Self {
            locale: Some(code.into()),
        }
    }
}

/// Resolution strategy, fixed at construction.
enum Strategy {
    Local,
    Bridge(Arc<BridgeRegistry>),
}

/// The shared runtime every generated accessor is called with.
pub struct MessageRuntime {
    catalog: &'static Catalog,
    flags: RuntimeFlags,
    state: LocaleState,
    tracker: Box<dyn MessageTracker>,
    strategy: Strategy,
}

impl MessageRuntime {
    /// Runtime over `catalog` with a no-op tracker.
    ///
    /// When `flags` delegate, the bridge registry starts empty; resolution
    /// will surface the missing-renderer configuration error until the
    /// bootstrap installs one via [`MessageRuntime::with_bridge`].
    pub fn new(catalog: &'static Catalog, flags: RuntimeFlags) -> Self {
        let strategy = if flags.delegates() {
            Strategy::Bridge(Arc::new(BridgeRegistry::new()))
        } else {
            Strategy::Local
        };
        Self {
            catalog,
            flags,
            state: LocaleState::new(catalog.primary),
            tracker: Box::new(NoopTracker),
            strategy,
        }
    }

    pub fn with_tracker(mut self, tracker: impl MessageTracker + 'static) -> Self {
        self.tracker = Box::new(tracker);
        self
    }

    /// Install the bootstrap-populated bridge registry.
    ///
    /// Only consulted when the flags delegate; a server-side runtime keeps
    /// resolving locally no matter what is installed here.
    pub fn with_bridge(mut self, registry: Arc<BridgeRegistry>) -> Self {
        if self.flags.delegates() {
            self.strategy = Strategy::Bridge(registry);
        }
        self
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn flags(&self) -> RuntimeFlags {
        self.flags
    }

    pub fn current_locale(&self) -> Locale {
        self.state.current()
    }

    pub fn set_locale(&self, locale: Locale) {
        self.state.set(locale);
    }

    /// The dispatch routine (see the module docs for the exact steps).
    pub fn resolve(&self, id: &str, inputs: &MessageInputs, options: &MessageOptions) -> String {
        match &self.strategy {
            Strategy::Bridge(registry) => registry.render(id, inputs),
            Strategy::Local => self.resolve_local(id, inputs, options),
        }
    }

    fn resolve_local(&self, id: &str, inputs: &MessageInputs, options: &MessageOptions) -> String {
        let target = self.target_locale(options);
        self.track(id, target);
        let Some(entry) = self.catalog.entry(id) else {
            // Unknown identifiers fail open: the id itself is the output.
            return id.to_string();
        };
        template::render(self.catalog.template(entry, target), inputs)
    }

    fn target_locale(&self, options: &MessageOptions) -> Locale {
        match options.locale.as_deref() {
            Some(code) => Locale::from_code(code).unwrap_or(self.catalog.fallback),
            None => self.state.current(),
        }
    }

    // Instrumentation must never affect the resolved string.
    fn track(&self, id: &str, locale: Locale) {
        let tracker = &self.tracker;
        let _ = panic::catch_unwind(AssertUnwindSafe(|| tracker.record(id, locale)));
    }
}

impl std::fmt::Debug for MessageRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageRuntime")
            .field("catalog", &self.catalog.name)
            .field("flags", &self.flags)
            .field("locale", &self.state.current())
            .field(
                "strategy",
                match &self.strategy {
                    Strategy::Local => &"local",
                    Strategy::Bridge(_) => &"bridge",
                },
            )
            .finish()
    }
}
