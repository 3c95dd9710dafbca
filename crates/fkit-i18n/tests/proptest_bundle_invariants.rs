//! Property-based invariant tests for bundles and resolution.
//!
//! 1. Every built-in footer bundle has exactly {selectAll, deselectAll, close}
//! 2. Unknown keys fail for every built-in bundle
//! 3. Resolution with a default never fails for any requested tag
//! 4. Resolution without a default fails exactly for unregistered tags
//! 5. Fallback is whole-bundle: a resolved bundle is always one registered bundle
//! 6. LocaleTag::parse never panics and accepted tags round-trip

use fkit_i18n::resources::multiselect_footer::{self, NAME};
use fkit_i18n::{BundleRegistry, LocaleTag, builtin};
use proptest::prelude::*;

fn footer_registry(default: Option<&str>) -> BundleRegistry {
    let mut registry = BundleRegistry::new(default.map(|d| LocaleTag::parse(d).unwrap()));
    multiselect_footer::register(&mut registry).unwrap();
    registry
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Key set invariants over the built-in data
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn every_builtin_bundle_has_exact_key_set() {
    let registry = builtin();
    let locales = registry.locales(NAME);
    assert_eq!(locales.len(), 16);
    for locale in locales {
        let bundle = registry.resolve(NAME, locale).unwrap();
        let keys: Vec<&str> = bundle.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["close", "deselectAll", "selectAll"], "{locale}");
    }
}

#[test]
fn builtin_scenarios() {
    let registry = builtin();
    assert_eq!(registry.default_locale().map(LocaleTag::as_str), Some("en_GB"));
    assert_eq!(
        registry.resolve(NAME, "fr_FR").unwrap().get("close").unwrap(),
        "Fermer"
    );
    assert_eq!(
        registry.resolve(NAME, "xx_XX").unwrap().get("close").unwrap(),
        "Close"
    );
    assert!(registry.coverage().without_default().is_empty());
}

proptest! {
    #[test]
    fn unknown_key_fails_for_every_bundle(key in "[a-zA-Z]{1,12}") {
        prop_assume!(!multiselect_footer::KEYS.contains(&key.as_str()));
        let registry = builtin();
        for locale in registry.locales(NAME) {
            let bundle = registry.resolve(NAME, locale).unwrap();
            let err = bundle.get(&key).unwrap_err();
            prop_assert_eq!(&err.key, &key);
            prop_assert_eq!(err.locale.as_str(), locale);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–5. Resolution totality and fallback shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolve_with_default_is_total(tag in "\\PC{0,12}") {
        let registry = footer_registry(Some("en_GB"));
        let bundle = registry.resolve(NAME, &tag).unwrap();
        if registry.contains(NAME, &tag) {
            prop_assert_eq!(bundle.locale().as_str(), tag.as_str());
        } else {
            prop_assert_eq!(bundle.locale().as_str(), "en_GB");
        }
    }

    #[test]
    fn resolve_without_default_fails_for_unregistered(tag in "[a-z]{2}_[A-Z]{2}") {
        let registry = footer_registry(None);
        let result = registry.resolve(NAME, &tag);
        prop_assert_eq!(result.is_ok(), registry.contains(NAME, &tag));
        if let Err(err) = result {
            prop_assert_eq!(err.requested, tag);
            prop_assert_eq!(err.default, None);
        }
    }

    #[test]
    fn fallback_returns_a_registered_bundle(tag in "[a-z]{2}_[A-Z]{2}") {
        let registry = footer_registry(Some("en_GB"));
        let bundle = registry.resolve(NAME, &tag).unwrap();
        prop_assert!(registry.contains(NAME, bundle.locale().as_str()));
        prop_assert_eq!(bundle.len(), 3);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. LocaleTag parsing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn locale_parse_never_panics(s in "\\PC{0,16}") {
        let _ = LocaleTag::parse(&s);
    }

    #[test]
    fn well_formed_tags_round_trip(lang in "[a-z]{2,3}", region in "[A-Z]{2}") {
        let raw = format!("{lang}_{region}");
        let tag = LocaleTag::parse(&raw).unwrap();
        prop_assert_eq!(tag.as_str(), raw.as_str());
        prop_assert_eq!(tag.language(), lang.as_str());
        prop_assert_eq!(tag.region(), Some(region.as_str()));
    }
}
