//! Error types for bundle registration and resolution.
//!
//! Two errors are raised at lookup time and are expected to reach widget
//! code: [`MissingResourceError`] (no bundle for the requested locale and
//! none for the default either) and [`UnknownKeyError`] (a key outside the
//! bundle's fixed key set). Everything else is an [`I18nError`], raised
//! while bundles are being built or registered.

use std::fmt;

/// Neither the requested locale nor the default locale has a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingResourceError {
    /// Logical bundle name that was requested.
    pub name: String,
    /// Locale tag that was requested.
    pub requested: String,
    /// Default locale configured at the time of the lookup, if any.
    pub default: Option<String>,
}

impl fmt::Display for MissingResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.default {
            Some(default) => write!(
                f,
                "no bundle '{}' for locale '{}' or default locale '{default}'",
                self.name, self.requested
            ),
            None => write!(
                f,
                "no bundle '{}' for locale '{}' and no default locale configured",
                self.name, self.requested
            ),
        }
    }
}

impl std::error::Error for MissingResourceError {}

/// A key outside the bundle's fixed key set was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyError {
    /// Logical bundle name.
    pub name: String,
    /// Locale of the bundle that was queried.
    pub locale: String,
    /// The offending key.
    pub key: String,
}

impl fmt::Display for UnknownKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown key '{}' in bundle '{}' ({})",
            self.key, self.name, self.locale
        )
    }
}

impl std::error::Error for UnknownKeyError {}

/// Lookup failure: either the bundle or the key is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    MissingResource(MissingResourceError),
    UnknownKey(UnknownKeyError),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingResource(e) => e.fmt(f),
            Self::UnknownKey(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingResource(e) => Some(e),
            Self::UnknownKey(e) => Some(e),
        }
    }
}

impl From<MissingResourceError> for ResourceError {
    fn from(e: MissingResourceError) -> Self {
        Self::MissingResource(e)
    }
}

impl From<UnknownKeyError> for ResourceError {
    fn from(e: UnknownKeyError) -> Self {
        Self::UnknownKey(e)
    }
}

/// Errors from building or registering bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A locale tag was malformed.
    InvalidLocale(String),
    /// A bundle's keys differ from its logical name's key set.
    KeySetMismatch {
        name: String,
        locale: String,
        missing: Vec<String>,
        extra: Vec<String>,
    },
    /// A bundle's entries list the same key twice.
    DuplicateKey {
        name: String,
        locale: String,
        key: String,
    },
    /// A bundle for the same (name, locale) is already registered.
    DuplicateBundle { name: String, locale: String },
    /// A bundle was registered before its logical name was defined.
    UndefinedBundle(String),
    /// A logical name was redefined with a different key set.
    SchemaConflict(String),
    /// Bundle definitions could not be loaded.
    #[cfg(feature = "bundle-config")]
    Config(String),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLocale(l) => write!(f, "invalid locale: {l}"),
            Self::KeySetMismatch {
                name,
                locale,
                missing,
                extra,
            } => write!(
                f,
                "bundle '{name}' ({locale}) key set mismatch: missing {missing:?}, extra {extra:?}"
            ),
            Self::DuplicateKey { name, locale, key } => {
                write!(f, "bundle '{name}' ({locale}) lists key '{key}' twice")
            }
            Self::DuplicateBundle { name, locale } => {
                write!(f, "bundle '{name}' already registered for locale '{locale}'")
            }
            Self::UndefinedBundle(name) => write!(f, "bundle '{name}' has no key set defined"),
            Self::SchemaConflict(name) => {
                write!(f, "bundle '{name}' redefined with a different key set")
            }
            #[cfg(feature = "bundle-config")]
            Self::Config(msg) => write!(f, "bundle config error: {msg}"),
        }
    }
}

impl std::error::Error for I18nError {}
