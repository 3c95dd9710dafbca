//! Immutable per-locale resource bundles.
//!
//! # Invariants
//!
//! 1. **Exact key set**: a [`ResourceBundle`] holds a value for every key in
//!    its [`KeySet`] and nothing else. Construction fails otherwise, so a
//!    partial bundle never exists.
//!
//! 2. **Immutability**: there is no mutating API after construction.
//!    Bundles are shared as `Arc<ResourceBundle>` and are `Send + Sync`.
//!
//! 3. **Fail-fast lookup**: [`ResourceBundle::get`] returns
//!    [`UnknownKeyError`] for a key outside the key set instead of an
//!    empty string.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{I18nError, UnknownKeyError};
use crate::locale::LocaleTag;

/// The fixed set of keys shared by every bundle of one logical name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeySet {
    keys: BTreeSet<String>,
}

impl KeySet {
    #[must_use]
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys of `self` absent from `other`.
    fn missing_from<'a>(&'a self, other: &'a BTreeMap<String, String>) -> Vec<String> {
        self.keys
            .iter()
            .filter(|k| !other.contains_key(k.as_str()))
            .cloned()
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Display strings for one (logical name, locale) pair.
///
/// # Example
///
/// ```
/// use fkit_i18n::{KeySet, LocaleTag, ResourceBundle};
///
/// let keys = KeySet::new(["ok", "cancel"]);
/// let bundle = ResourceBundle::new(
///     "dialog.buttons",
///     LocaleTag::parse("fr_FR").unwrap(),
///     &keys,
///     [("ok", "Valider"), ("cancel", "Annuler")],
/// )
/// .unwrap();
///
/// assert_eq!(bundle.get("cancel").unwrap(), "Annuler");
/// assert!(bundle.get("apply").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    name: String,
    locale: LocaleTag,
    strings: BTreeMap<String, String>,
}

impl ResourceBundle {
    /// Build a bundle, checking `entries` against `keys`.
    ///
    /// Fails with [`I18nError::DuplicateKey`] when `entries` repeat a key,
    /// and with [`I18nError::KeySetMismatch`] when any key is missing or any
    /// entry is not part of the key set.
    pub fn new<I, K, V>(
        name: impl Into<String>,
        locale: LocaleTag,
        keys: &KeySet,
        entries: I,
    ) -> Result<Self, I18nError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let mut strings: BTreeMap<String, String> = BTreeMap::new();
        for (key, value) in entries {
            let key: String = key.into();
            if strings.contains_key(&key) {
                return Err(I18nError::DuplicateKey {
                    name,
                    locale: locale.to_string(),
                    key,
                });
            }
            strings.insert(key, value.into());
        }

        let missing = keys.missing_from(&strings);
        let extra: Vec<String> = strings
            .keys()
            .filter(|k| !keys.contains(k))
            .cloned()
            .collect();
        if !missing.is_empty() || !extra.is_empty() {
            return Err(I18nError::KeySetMismatch {
                name,
                locale: locale.to_string(),
                missing,
                extra,
            });
        }

        Ok(Self {
            name,
            locale,
            strings,
        })
    }

    /// Look up a display string.
    pub fn get(&self, key: &str) -> Result<&str, UnknownKeyError> {
        self.strings
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| UnknownKeyError {
                name: self.name.clone(),
                locale: self.locale.to_string(),
                key: key.to_string(),
            })
    }

    /// Logical name this bundle belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    /// The bundle's key set, rebuilt from its entries.
    #[must_use]
    pub fn keys(&self) -> KeySet {
        self.strings.keys().cloned().collect()
    }

    /// `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.strings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footer_keys() -> KeySet {
        KeySet::new(["selectAll", "deselectAll", "close"])
    }

    fn locale(tag: &str) -> LocaleTag {
        LocaleTag::parse(tag).unwrap()
    }

    #[test]
    fn key_set_dedups_and_sorts() {
        let keys = KeySet::new(["b", "a", "b"]);
        assert_eq!(keys.len(), 2);
        assert_eq!(keys.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn complete_bundle_builds() {
        let bundle = ResourceBundle::new(
            "footer",
            locale("en_GB"),
            &footer_keys(),
            [
                ("selectAll", "Select All"),
                ("deselectAll", "Deselect All"),
                ("close", "Close"),
            ],
        )
        .unwrap();
        assert_eq!(bundle.len(), 3);
        assert_eq!(bundle.get("close"), Ok("Close"));
        assert_eq!(bundle.keys(), footer_keys());
        assert_eq!(bundle.name(), "footer");
        assert_eq!(bundle.locale().as_str(), "en_GB");
    }

    #[test]
    fn partial_bundle_is_rejected() {
        let err = ResourceBundle::new(
            "footer",
            locale("de_DE"),
            &footer_keys(),
            [("selectAll", "Alle auswählen"), ("close", "Schließen")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            I18nError::KeySetMismatch {
                name: "footer".into(),
                locale: "de_DE".into(),
                missing: vec!["deselectAll".into()],
                extra: vec![],
            }
        );
    }

    #[test]
    fn extra_key_is_rejected() {
        let err = ResourceBundle::new(
            "footer",
            locale("en_GB"),
            &footer_keys(),
            [
                ("selectAll", "Select All"),
                ("deselectAll", "Deselect All"),
                ("close", "Close"),
                ("open", "Open"),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, I18nError::KeySetMismatch { extra, .. } if extra == ["open"]));
    }

    #[test]
    fn repeated_key_is_rejected() {
        let keys = KeySet::new(["close"]);
        let err = ResourceBundle::new(
            "footer",
            locale("fr_FR"),
            &keys,
            [("close", "Fermer"), ("close", "Quitter")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            I18nError::DuplicateKey {
                name: "footer".into(),
                locale: "fr_FR".into(),
                key: "close".into(),
            }
        );
    }

    #[test]
    fn unknown_key_fails_fast() {
        let keys = KeySet::new(["close"]);
        let bundle =
            ResourceBundle::new("footer", locale("fr_FR"), &keys, [("close", "Fermer")]).unwrap();
        let err = bundle.get("Close").unwrap_err();
        assert_eq!(err.key, "Close");
        assert_eq!(err.locale, "fr_FR");
    }

    #[test]
    fn bundle_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResourceBundle>();
        assert_send_sync::<KeySet>();
    }
}
