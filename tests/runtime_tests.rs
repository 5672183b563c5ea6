// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dispatch behavior of the message runtime: locale selection, fallback,
//! split-delivery delegation, tracking, and the generated accessor surface.

use std::sync::Arc;

use driplo_messages::inputs::MessageInputs;
use driplo_messages::locale::Locale;
use driplo_messages::messages::{self, CATALOG};
use driplo_messages::runtime::{
    BridgeRegistry, MessageOptions, MessageRuntime, MessageTracker, RuntimeFlags, UsageTracker,
};

fn server_runtime() -> MessageRuntime {
    MessageRuntime::new(&CATALOG, RuntimeFlags::server())
}

fn no_inputs() -> MessageInputs {
    MessageInputs::new()
}

#[test]
fn explicit_locale_returns_authored_text_verbatim() {
    let runtime = server_runtime();
    for entry in CATALOG.entries {
        for locale in CATALOG.locales {
            let authored = entry.variant(*locale).expect("authored variant");
            let resolved = runtime.resolve(
                entry.id,
                &no_inputs(),
                &MessageOptions::with_locale(locale.code()),
            );
            // With no inputs, placeholders stay verbatim, so even
            // parameterized entries must echo their authored template.
            assert_eq!(
                resolved, authored,
                "`{}` should resolve verbatim for {}",
                entry.id, locale
            );
        }
    }
}

#[test]
fn no_override_matches_current_locale_override() {
    let runtime = server_runtime();
    for current in CATALOG.locales {
        runtime.set_locale(*current);
        for id in ["hello", "welcome", "checkout_total", "addfavorite1"] {
            let ambient = runtime.resolve(id, &no_inputs(), &MessageOptions::default());
            let explicit = runtime.resolve(
                id,
                &no_inputs(),
                &MessageOptions::with_locale(runtime.current_locale().code()),
            );
            assert_eq!(ambient, explicit, "`{id}` under {current}");
        }
    }
}

#[test]
fn resolution_is_idempotent() {
    let runtime = server_runtime();
    let inputs = MessageInputs::new().with("count", 4);
    let options = MessageOptions::with_locale("bg");
    let first = runtime.resolve("pdp_stars", &inputs, &options);
    for _ in 0..3 {
        assert_eq!(runtime.resolve("pdp_stars", &inputs, &options), first);
    }
}

#[test]
fn unrecognized_locale_degrades_to_declared_fallback() {
    let runtime = server_runtime();
    runtime.set_locale(Locale::En);
    for bad in ["de", "xx", "EN", "en-US", ""] {
        let degraded = runtime.resolve("hello", &no_inputs(), &MessageOptions::with_locale(bad));
        let fallback = runtime.resolve(
            "hello",
            &no_inputs(),
            &MessageOptions::with_locale(CATALOG.fallback.code()),
        );
        assert_eq!(degraded, fallback, "override `{bad}` should degrade");
        assert_eq!(degraded, "Здравей");
    }
}

#[test]
fn unknown_identifier_fails_open_to_itself() {
    let runtime = server_runtime();
    assert_eq!(
        runtime.resolve("not_a_message", &no_inputs(), &MessageOptions::default()),
        "not_a_message"
    );
}

#[test]
fn hello_examples_from_both_locales() {
    let runtime = server_runtime();
    runtime.set_locale(Locale::En);
    assert_eq!(
        messages::hello(&runtime, &no_inputs(), &MessageOptions::default()),
        "Hello"
    );
    runtime.set_locale(Locale::Bg);
    assert_eq!(
        messages::hello(&runtime, &no_inputs(), &MessageOptions::default()),
        "Здравей"
    );
}

#[test]
fn pdp_stars_substitutes_count_in_both_locales() {
    let runtime = server_runtime();
    let inputs = MessageInputs::new().with("count", 4);
    assert_eq!(
        messages::pdp_stars(&runtime, &inputs, &MessageOptions::with_locale("en")),
        "4 stars"
    );
    assert_eq!(
        messages::pdp_stars(&runtime, &inputs, &MessageOptions::with_locale("bg")),
        "4 звезди"
    );
}

#[test]
fn aliased_accessor_matches_direct_resolution() {
    let runtime = server_runtime();
    for locale in CATALOG.locales {
        let via_accessor = messages::add_favorite(
            &runtime,
            &no_inputs(),
            &MessageOptions::with_locale(locale.code()),
        );
        let via_id = runtime.resolve(
            "addfavorite1",
            &no_inputs(),
            &MessageOptions::with_locale(locale.code()),
        );
        assert_eq!(via_accessor, via_id);
    }
}

#[test]
fn language_invariant_messages_read_the_same_in_both_locales() {
    let runtime = server_runtime();
    for id in ["profile_instagram", "profile_tiktok", "banner_welcomeToDriplo"] {
        let en = runtime.resolve(id, &no_inputs(), &MessageOptions::with_locale("en"));
        let bg = runtime.resolve(id, &no_inputs(), &MessageOptions::with_locale("bg"));
        assert_eq!(en, bg, "`{id}` should be language-invariant");
    }
}

#[test]
fn delegation_routes_through_bridge_and_skips_tracking() {
    let tracker = Arc::new(UsageTracker::new());
    let bridge = Arc::new(BridgeRegistry::materialize(&CATALOG, Locale::En));
    let runtime = MessageRuntime::new(&CATALOG, RuntimeFlags::client().with_split_delivery())
        .with_tracker(SharedTracker(tracker.clone()))
        .with_bridge(bridge.clone());

    let resolved = runtime.resolve("hello", &no_inputs(), &MessageOptions::default());
    assert_eq!(resolved, bridge.render("hello", &no_inputs()));
    assert_eq!(resolved, "Hello");

    // Even an explicit override goes to the bridge untouched.
    let overridden = runtime.resolve("hello", &no_inputs(), &MessageOptions::with_locale("bg"));
    assert_eq!(overridden, "Hello");

    assert!(
        tracker.snapshot().is_empty(),
        "delegated resolutions must not be tracked"
    );
}

#[test]
fn bridge_renderers_can_disagree_with_local_tables() {
    let mut bridge = BridgeRegistry::new();
    bridge.insert("hello", |_: &MessageInputs| "bridged".to_string());
    let runtime = MessageRuntime::new(&CATALOG, RuntimeFlags::client().with_split_delivery())
        .with_bridge(Arc::new(bridge));

    // The accessor has no idea which strategy runs underneath.
    assert_eq!(
        messages::hello(&runtime, &no_inputs(), &MessageOptions::default()),
        "bridged"
    );
}

#[test]
#[should_panic(expected = "no renderer")]
fn delegation_without_bootstrap_surfaces_the_configuration_error() {
    let runtime = MessageRuntime::new(&CATALOG, RuntimeFlags::client().with_split_delivery());
    runtime.resolve("hello", &no_inputs(), &MessageOptions::default());
}

#[test]
fn client_without_split_delivery_resolves_locally() {
    let tracker = Arc::new(UsageTracker::new());
    let runtime = MessageRuntime::new(&CATALOG, RuntimeFlags::client())
        .with_tracker(SharedTracker(tracker.clone()));
    assert_eq!(
        runtime.resolve("hello", &no_inputs(), &MessageOptions::default()),
        "Hello"
    );
    assert_eq!(tracker.hits("hello", Locale::En), 1);
}

#[test]
fn server_with_split_delivery_still_resolves_locally() {
    let runtime = MessageRuntime::new(&CATALOG, RuntimeFlags::server().with_split_delivery());
    runtime.set_locale(Locale::Bg);
    assert_eq!(
        runtime.resolve("hello", &no_inputs(), &MessageOptions::default()),
        "Здравей"
    );
}

#[test]
fn local_resolutions_record_identifier_and_resolved_locale() {
    let tracker = Arc::new(UsageTracker::new());
    let runtime = server_runtime().with_tracker(SharedTracker(tracker.clone()));

    runtime.set_locale(Locale::Bg);
    runtime.resolve("hello", &no_inputs(), &MessageOptions::default());
    runtime.resolve("hello", &no_inputs(), &MessageOptions::default());
    runtime.resolve("hello", &no_inputs(), &MessageOptions::with_locale("en"));
    // Aliased accessors track under the internal identifier.
    messages::add_favorite(&runtime, &no_inputs(), &MessageOptions::default());
    // Unrecognized overrides track the degraded locale.
    runtime.resolve("hello", &no_inputs(), &MessageOptions::with_locale("xx"));

    assert_eq!(tracker.hits("hello", Locale::Bg), 3);
    assert_eq!(tracker.hits("hello", Locale::En), 1);
    assert_eq!(tracker.hits("addfavorite1", Locale::Bg), 1);
    assert_eq!(tracker.hits("add_favorite", Locale::Bg), 0);
}

#[test]
fn panicking_tracker_never_corrupts_output() {
    struct ExplodingTracker;
    impl MessageTracker for ExplodingTracker {
        fn record(&self, _: &str, _: Locale) {
            panic!("analytics sink fell over");
        }
    }

    let runtime = server_runtime().with_tracker(ExplodingTracker);
    assert_eq!(
        runtime.resolve("hello", &no_inputs(), &MessageOptions::default()),
        "Hello"
    );
}

/// Shares one [`UsageTracker`] between the runtime and test assertions.
struct SharedTracker(Arc<UsageTracker>);

impl MessageTracker for SharedTracker {
    fn record(&self, message: &str, locale: Locale) {
        self.0.record(message, locale);
    }
}
