#![forbid(unsafe_code)]

//! Locale context provider for runtime-wide internationalization.
//!
//! The [`LocaleContext`] owns the current locale and exposes scoped overrides
//! for widget subtrees. Locale changes are versioned so the runtime can
//! re-resolve bundles when the active locale changes.
//!
//! Tags use the bundle registry's form (`fr_FR`), so values read from the
//! environment are cleaned up before they are stored.

use std::cell::{Cell, RefCell};
use std::env;
use std::ops::Deref;
use std::rc::Rc;
use std::sync::Arc;

use fkit_i18n::{BundleRegistry, DEFAULT_LOCALE, MissingResourceError, ResourceBundle};
use tracing::debug;

use crate::reactive::{Binding, Observable, Subscription};

#[derive(Debug, Default)]
struct OverrideStack {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, String)>>,
}

/// Runtime locale context with scoped overrides.
#[derive(Clone, Debug)]
pub struct LocaleContext {
    current: Observable<String>,
    overrides: Rc<OverrideStack>,
}

impl LocaleContext {
    /// Create a new locale context with the provided locale.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        let locale = normalize_locale(locale.into());
        Self {
            current: Observable::new(locale),
            overrides: Rc::new(OverrideStack::default()),
        }
    }

    /// Create a locale context initialized from system locale detection.
    #[must_use]
    pub fn system() -> Self {
        Self::new(detect_system_locale())
    }

    /// Get the active locale, honoring the newest live override.
    #[must_use]
    pub fn current_locale(&self) -> String {
        if let Some((_, locale)) = self.overrides.entries.borrow().last() {
            locale.clone()
        } else {
            self.current.get()
        }
    }

    /// Get the base locale without considering overrides.
    #[must_use]
    pub fn base_locale(&self) -> String {
        self.current.get()
    }

    /// Set the base locale.
    pub fn set_locale(&self, locale: impl Into<String>) {
        let locale = normalize_locale(locale.into());
        debug!(locale = %locale, "base locale set");
        self.current.set(locale);
    }

    /// Subscribe to base locale changes.
    pub fn subscribe(&self, callback: impl Fn(&String) + 'static) -> Subscription {
        self.current.subscribe(callback)
    }

    /// Push a scoped locale override.
    ///
    /// Dropping the guard removes this override only; guards may be dropped
    /// in any order.
    #[must_use = "dropping this guard clears the locale override"]
    pub fn push_override(&self, locale: impl Into<String>) -> LocaleOverride {
        let locale = normalize_locale(locale.into());
        let id = self.overrides.next_id.get();
        self.overrides.next_id.set(id + 1);
        self.overrides.entries.borrow_mut().push((id, locale));
        LocaleOverride {
            stack: Rc::clone(&self.overrides),
            id,
        }
    }

    /// Current version counter for the base locale.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.current.version()
    }

    /// Bind the bundle `name` to this context's active locale.
    ///
    /// Each read resolves against the locale active at that moment, so a
    /// locale switch or override is picked up without rebuilding the binding.
    /// `registry` is any owning handle: `&'static` (e.g.
    /// [`fkit_i18n::builtin`]) or `Arc<BundleRegistry>`.
    pub fn bundle<R>(
        &self,
        registry: R,
        name: impl Into<String>,
    ) -> Binding<Result<Arc<ResourceBundle>, MissingResourceError>>
    where
        R: Deref<Target = BundleRegistry> + 'static,
    {
        let ctx = self.clone();
        let name = name.into();
        Binding::new(move || registry.resolve(&name, &ctx.current_locale()))
    }
}

/// RAII guard for a scoped locale override.
#[must_use = "dropping this guard clears the locale override"]
pub struct LocaleOverride {
    stack: Rc<OverrideStack>,
    id: u64,
}

impl Drop for LocaleOverride {
    fn drop(&mut self) {
        let mut entries = self.stack.entries.borrow_mut();
        if let Some(pos) = entries.iter().rposition(|(id, _)| *id == self.id) {
            entries.remove(pos);
        }
    }
}

/// Detect the system locale from environment variables.
///
/// Preference order: `LC_ALL`, then `LANG`. Falls back to
/// [`DEFAULT_LOCALE`] when unknown.
#[must_use]
pub fn detect_system_locale() -> String {
    let lc_all = env::var("LC_ALL").ok();
    let lang = env::var("LANG").ok();
    detect_system_locale_from(lc_all.as_deref(), lang.as_deref())
}

fn normalize_locale(locale: String) -> String {
    normalize_locale_raw(&locale).unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

fn detect_system_locale_from(lc_all: Option<&str>, lang: Option<&str>) -> String {
    lc_all
        .and_then(normalize_locale_raw)
        .or_else(|| lang.and_then(normalize_locale_raw))
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

fn normalize_locale_raw(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw);
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("c") || raw.eq_ignore_ascii_case("posix") {
        return None;
    }
    Some(raw.replace('-', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_system_locale_prefers_lc_all() {
        let locale = detect_system_locale_from(Some("fr_FR.UTF-8"), Some("en_US.UTF-8"));
        assert_eq!(locale, "fr_FR");
    }

    #[test]
    fn detect_system_locale_uses_lang_when_lc_all_missing() {
        let locale = detect_system_locale_from(None, Some("de_DE.UTF-8@euro"));
        assert_eq!(locale, "de_DE");
    }

    #[test]
    fn detect_system_locale_skips_posix() {
        assert_eq!(detect_system_locale_from(Some("C"), Some("ja_JP")), "ja_JP");
        assert_eq!(detect_system_locale_from(Some("POSIX"), None), DEFAULT_LOCALE);
        assert_eq!(detect_system_locale_from(None, None), DEFAULT_LOCALE);
    }

    #[test]
    fn hyphenated_tags_become_underscored() {
        assert_eq!(LocaleContext::new("pt-BR").current_locale(), "pt_BR");
        assert_eq!(LocaleContext::new("  ").current_locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn locale_context_switching_updates_version() {
        let ctx = LocaleContext::new("en_GB");
        let v0 = ctx.version();
        ctx.set_locale("en_GB");
        assert_eq!(ctx.version(), v0);
        ctx.set_locale("es_ES");
        assert!(ctx.version() > v0);
        assert_eq!(ctx.current_locale(), "es_ES");
    }

    #[test]
    fn locale_override_is_lifo() {
        let ctx = LocaleContext::new("en_GB");
        let _outer = ctx.push_override("fr_FR");
        assert_eq!(ctx.current_locale(), "fr_FR");
        {
            let _inner = ctx.push_override("es_ES");
            assert_eq!(ctx.current_locale(), "es_ES");
        }
        assert_eq!(ctx.current_locale(), "fr_FR");
        assert_eq!(ctx.base_locale(), "en_GB");
    }

    #[test]
    fn overrides_dropped_out_of_order() {
        let ctx = LocaleContext::new("en_GB");
        let outer = ctx.push_override("fr_FR");
        let inner = ctx.push_override("de_DE");
        drop(outer);
        assert_eq!(ctx.current_locale(), "de_DE");
        drop(inner);
        assert_eq!(ctx.current_locale(), "en_GB");

        let a = ctx.push_override("es_ES");
        let b = ctx.push_override("it_IT");
        let c = ctx.push_override("nl_NL");
        drop(b);
        assert_eq!(ctx.current_locale(), "nl_NL");
        drop(c);
        assert_eq!(ctx.current_locale(), "es_ES");
        drop(a);
        assert_eq!(ctx.current_locale(), "en_GB");
    }

    #[test]
    fn subscribers_see_base_changes_only() {
        let ctx = LocaleContext::new("en_GB");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let _sub = ctx.subscribe(move |l| log.borrow_mut().push(l.clone()));

        ctx.set_locale("fr-FR");
        {
            let _scoped = ctx.push_override("ja_JP");
        }
        ctx.set_locale("fr_FR");
        assert_eq!(*seen.borrow(), vec!["fr_FR".to_string()]);
    }

    #[test]
    fn system_context_uses_detected_locale() {
        assert_eq!(LocaleContext::system().current_locale(), detect_system_locale());
    }

    #[test]
    fn bundle_binding_over_shared_registry() {
        let mut registry = BundleRegistry::with_default(fkit_i18n::LocaleTag::default_locale());
        fkit_i18n::resources::multiselect_footer::register(&mut registry).unwrap();
        let registry = Arc::new(registry);

        let ctx = LocaleContext::new("it_IT");
        let footer = ctx.bundle(Arc::clone(&registry), "multiselect.footer");
        assert_eq!(footer.get().unwrap().get("close"), Ok("Chiudi"));
        ctx.set_locale("xx_XX");
        assert_eq!(footer.get().unwrap().locale().as_str(), "en_GB");
        assert_eq!(Arc::strong_count(&registry), 2);
    }

    #[test]
    fn bundle_binding_follows_locale() {
        let ctx = LocaleContext::new("fr_FR");
        let footer = ctx.bundle(fkit_i18n::builtin(), "multiselect.footer");
        let close = footer.clone().then(|b| b.map(|b| b.get("close").map(str::to_string)));
        assert_eq!(close.get(), Ok(Ok("Fermer".to_string())));

        ctx.set_locale("de_DE");
        assert_eq!(close.get(), Ok(Ok("Schließen".to_string())));

        {
            let _scoped = ctx.push_override("xx_XX");
            assert_eq!(footer.get().unwrap().locale().as_str(), "en_GB");
        }
        assert_eq!(footer.get().unwrap().locale().as_str(), "de_DE");
    }

    #[test]
    fn unknown_bundle_name_is_missing() {
        let ctx = LocaleContext::new("en_GB");
        let header = ctx.bundle(fkit_i18n::builtin(), "multiselect.header");
        assert!(header.get().is_err());
    }
}
