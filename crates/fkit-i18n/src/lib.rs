#![forbid(unsafe_code)]

//! Locale resource bundles for Formkit.
//!
//! Provides immutable per-locale string bundles with a fixed key set per
//! logical name, and a registry that resolves a bundle by exact locale tag
//! with whole-bundle fallback to a default locale.
//!
//! # Role in Formkit
//! `fkit-i18n` isolates localized UI strings so widgets resolve their labels
//! through one contract instead of carrying string tables of their own. It
//! does not depend on the reactive runtime or on widgets.
//!
//! # Quick start
//!
//! ```
//! let footer = fkit_i18n::builtin().resolve("multiselect.footer", "fr_FR").unwrap();
//! assert_eq!(footer.get("close").unwrap(), "Fermer");
//!
//! let fallback = fkit_i18n::builtin().resolve("multiselect.footer", "xx_XX").unwrap();
//! assert_eq!(fallback.get("close").unwrap(), "Close");
//! ```

pub mod bundle;
#[cfg(feature = "bundle-config")]
pub mod config;
pub mod error;
pub mod locale;
pub mod registry;
pub mod resources;

pub use bundle::{KeySet, ResourceBundle};
#[cfg(feature = "bundle-config")]
pub use config::{BundleConfig, BundleConfigError, BundleSpec};
pub use error::{I18nError, MissingResourceError, ResourceError, UnknownKeyError};
pub use locale::{DEFAULT_LOCALE, LocaleTag};
pub use registry::{BundleCoverage, BundleRegistry, CoverageReport};
pub use resources::builtin;
