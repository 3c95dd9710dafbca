//! Bundle definitions as data.
//!
//! Lets an application ship its own bundles in a TOML or JSON file and load
//! them once at startup into a [`BundleRegistry`].
//!
//! ```toml
//! default_locale = "en_GB"
//!
//! [[bundles]]
//! name = "dialog.buttons"
//! keys = ["ok", "cancel"]
//!
//! [bundles.locales.en_GB]
//! ok = "OK"
//! cancel = "Cancel"
//!
//! [bundles.locales.fr_FR]
//! ok = "Valider"
//! cancel = "Annuler"
//! ```
//!
//! ```rust,ignore
//! let registry = BundleConfig::from_toml_file("bundles.toml")?.into_registry()?;
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bundle::{KeySet, ResourceBundle};
use crate::error::I18nError;
use crate::locale::LocaleTag;
use crate::registry::BundleRegistry;

/// Top-level bundle file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Locale used when a requested locale has no bundle.
    pub default_locale: Option<String>,
    pub bundles: Vec<BundleSpec>,
}

/// One logical name with its key set and per-locale strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSpec {
    pub name: String,
    pub keys: Vec<String>,
    #[serde(default)]
    pub locales: BTreeMap<String, BTreeMap<String, String>>,
}

impl BundleConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, BundleConfigError> {
        toml::from_str(s).map_err(BundleConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, BundleConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(BundleConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, BundleConfigError> {
        serde_json::from_str(s).map_err(BundleConfigError::Json)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, BundleConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(BundleConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Build a registry, validating every tag and key set.
    pub fn into_registry(self) -> Result<BundleRegistry, I18nError> {
        let default = self
            .default_locale
            .as_deref()
            .map(LocaleTag::parse)
            .transpose()?;
        let mut registry = BundleRegistry::new(default);
        self.register_into(&mut registry)?;
        Ok(registry)
    }

    /// Add this file's bundles to an existing registry.
    ///
    /// All-or-nothing: if any bundle is rejected, `registry` is left exactly
    /// as it was.
    pub fn register_into(self, registry: &mut BundleRegistry) -> Result<(), I18nError> {
        let mut staged = registry.clone();
        for spec in self.bundles {
            let keys = KeySet::new(spec.keys);
            staged.define(spec.name.clone(), keys.clone())?;
            for (tag, strings) in spec.locales {
                let locale = LocaleTag::parse(&tag)?;
                let bundle = ResourceBundle::new(spec.name.clone(), locale, &keys, strings)?;
                staged.register(bundle)?;
            }
        }
        *registry = staged;
        Ok(())
    }
}

/// Errors from reading a bundle file.
#[derive(Debug)]
pub enum BundleConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
}

impl fmt::Display for BundleConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for BundleConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<BundleConfigError> for I18nError {
    fn from(err: BundleConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
