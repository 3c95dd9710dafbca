//! Bundle registry with default-locale fallback.
//!
//! # Invariants
//!
//! 1. **Fallback terminates**: [`BundleRegistry::resolve`] tries the exact
//!    requested tag, then the default locale, then fails. It never walks
//!    further and never merges two bundles.
//!
//! 2. **One key set per name**: every bundle registered under a logical
//!    name has exactly the key set given to [`BundleRegistry::define`].
//!
//! 3. **Write once**: a (name, locale) pair is registered at most once;
//!    later registrations are rejected rather than replacing the bundle.
//!
//! 4. **Thread safety**: `BundleRegistry` is `Send + Sync`; once built it
//!    is shared behind `Arc` or a `static` and only read.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unregistered locale | No bundle for the exact tag | Default locale bundle |
//! | No default | Unregistered locale, no default configured | `MissingResourceError` |
//! | Default lacks bundle | Default configured but not registered for name | `MissingResourceError` |
//! | Unknown key | Key outside the name's key set | `UnknownKeyError` |
//! | Partial bundle | Registered bundle misses or adds keys | `I18nError::KeySetMismatch` |

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::bundle::{KeySet, ResourceBundle};
use crate::error::{I18nError, MissingResourceError, ResourceError};
use crate::locale::LocaleTag;

#[derive(Debug, Clone, Default)]
struct Family {
    keys: KeySet,
    bundles: HashMap<String, Arc<ResourceBundle>>,
}

/// Registry of resource bundles keyed by logical name and locale.
///
/// # Example
///
/// ```
/// use fkit_i18n::{BundleRegistry, KeySet, LocaleTag, ResourceBundle};
///
/// let keys = KeySet::new(["close"]);
/// let mut registry = BundleRegistry::with_default(LocaleTag::parse("en_GB").unwrap());
/// registry.define("footer", keys.clone()).unwrap();
///
/// for (tag, close) in [("en_GB", "Close"), ("fr_FR", "Fermer")] {
///     let locale = LocaleTag::parse(tag).unwrap();
///     let bundle = ResourceBundle::new("footer", locale, &keys, [("close", close)]).unwrap();
///     registry.register(bundle).unwrap();
/// }
///
/// assert_eq!(registry.resolve("footer", "fr_FR").unwrap().get("close").unwrap(), "Fermer");
/// // Unregistered locale falls back to the default bundle.
/// assert_eq!(registry.resolve("footer", "xx_XX").unwrap().get("close").unwrap(), "Close");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BundleRegistry {
    families: HashMap<String, Family>,
    default_locale: Option<LocaleTag>,
}

impl BundleRegistry {
    /// Create an empty registry, optionally with a default locale.
    #[must_use]
    pub fn new(default_locale: Option<LocaleTag>) -> Self {
        Self {
            families: HashMap::new(),
            default_locale,
        }
    }

    /// Create an empty registry that falls back to `default_locale`.
    #[must_use]
    pub fn with_default(default_locale: LocaleTag) -> Self {
        Self::new(Some(default_locale))
    }

    /// Replace (or clear) the default locale.
    pub fn set_default_locale(&mut self, locale: Option<LocaleTag>) {
        self.default_locale = locale;
    }

    #[must_use]
    pub fn default_locale(&self) -> Option<&LocaleTag> {
        self.default_locale.as_ref()
    }

    /// Declare a logical name and its fixed key set.
    ///
    /// Redefining a name with the same key set is a no-op; a different key
    /// set fails with [`I18nError::SchemaConflict`].
    pub fn define(&mut self, name: impl Into<String>, keys: KeySet) -> Result<(), I18nError> {
        let name = name.into();
        match self.families.get(&name) {
            Some(family) if family.keys == keys => Ok(()),
            Some(_) => Err(I18nError::SchemaConflict(name)),
            None => {
                debug!(bundle = %name, keys = keys.len(), "bundle key set defined");
                self.families.insert(
                    name,
                    Family {
                        keys,
                        bundles: HashMap::new(),
                    },
                );
                Ok(())
            }
        }
    }

    /// Register a bundle under its logical name.
    pub fn register(&mut self, bundle: ResourceBundle) -> Result<(), I18nError> {
        let family = self
            .families
            .get_mut(bundle.name())
            .ok_or_else(|| I18nError::UndefinedBundle(bundle.name().to_string()))?;

        let keys = bundle.keys();
        if keys != family.keys {
            return Err(I18nError::KeySetMismatch {
                name: bundle.name().to_string(),
                locale: bundle.locale().to_string(),
                missing: family
                    .keys
                    .iter()
                    .filter(|k| !keys.contains(k))
                    .map(str::to_string)
                    .collect(),
                extra: keys
                    .iter()
                    .filter(|k| !family.keys.contains(k))
                    .map(str::to_string)
                    .collect(),
            });
        }

        let locale = bundle.locale().to_string();
        if family.bundles.contains_key(&locale) {
            return Err(I18nError::DuplicateBundle {
                name: bundle.name().to_string(),
                locale,
            });
        }

        debug!(bundle = bundle.name(), locale = %locale, keys = keys.len(), "bundle registered");
        family.bundles.insert(locale, Arc::new(bundle));
        Ok(())
    }

    /// Resolve the bundle to use for `name` in `requested` locale.
    ///
    /// Tries the exact (case-sensitive) tag, then the default locale.
    pub fn resolve(
        &self,
        name: &str,
        requested: &str,
    ) -> Result<Arc<ResourceBundle>, MissingResourceError> {
        let family = self.families.get(name);

        if let Some(bundle) = family.and_then(|f| f.bundles.get(requested)) {
            return Ok(Arc::clone(bundle));
        }

        if let Some(default) = &self.default_locale
            && let Some(bundle) = family.and_then(|f| f.bundles.get(default.as_str()))
        {
            debug!(
                bundle = name,
                requested,
                fallback = default.as_str(),
                "bundle resolved via default locale"
            );
            return Ok(Arc::clone(bundle));
        }

        warn!(
            bundle = name,
            requested,
            default = self.default_locale.as_ref().map(LocaleTag::as_str),
            "no bundle for requested or default locale"
        );
        Err(MissingResourceError {
            name: name.to_string(),
            requested: requested.to_string(),
            default: self.default_locale.as_ref().map(ToString::to_string),
        })
    }

    /// Resolve a bundle and look up one key in it.
    pub fn get(&self, name: &str, locale: &str, key: &str) -> Result<String, ResourceError> {
        let bundle = self.resolve(name, locale)?;
        Ok(bundle.get(key)?.to_string())
    }

    /// Key set declared for `name`.
    #[must_use]
    pub fn key_set(&self, name: &str) -> Option<&KeySet> {
        self.families.get(name).map(|f| &f.keys)
    }

    /// Whether a bundle is registered for the exact (name, locale).
    #[must_use]
    pub fn contains(&self, name: &str, locale: &str) -> bool {
        self.families
            .get(name)
            .is_some_and(|f| f.bundles.contains_key(locale))
    }

    /// Registered locales for `name`, sorted.
    #[must_use]
    pub fn locales(&self, name: &str) -> Vec<&str> {
        let mut locales: Vec<&str> = self
            .families
            .get(name)
            .map(|f| f.bundles.keys().map(String::as_str).collect())
            .unwrap_or_default();
        locales.sort_unstable();
        locales
    }

    /// Defined logical names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.families.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Locale coverage per logical name.
    #[must_use]
    pub fn coverage(&self) -> CoverageReport {
        let default = self.default_locale.as_ref().map(LocaleTag::as_str);
        let bundles = self
            .names()
            .into_iter()
            .map(|name| BundleCoverage {
                name: name.to_string(),
                locales: self.locales(name).into_iter().map(str::to_string).collect(),
                has_default: default.is_some_and(|d| self.contains(name, d)),
            })
            .collect();
        CoverageReport { bundles }
    }
}

/// Which locales are registered for each logical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub bundles: Vec<BundleCoverage>,
}

impl CoverageReport {
    /// Logical names that cannot fall back because the default is missing.
    #[must_use]
    pub fn without_default(&self) -> Vec<&str> {
        self.bundles
            .iter()
            .filter(|b| !b.has_default)
            .map(|b| b.name.as_str())
            .collect()
    }
}

/// Coverage for one logical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleCoverage {
    pub name: String,
    /// Registered locales, sorted.
    pub locales: Vec<String>,
    /// Whether the registry's default locale has a bundle for this name.
    pub has_default: bool,
}
