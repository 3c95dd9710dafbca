#![forbid(unsafe_code)]

//! Registry mapping short widget names to implementations.
//!
//! Each entry records the implementation identifier the host framework
//! reports for a name (e.g. `"CheckBox"` ->
//! `"fkit_widgets::check_box::CheckBox"`) and the factory that builds it.
//! Lookup is by name only; identifiers are informational and never used to
//! locate code.
//!
//! # Invariants
//!
//! 1. Each name maps to at most one entry; re-registering a name fails.
//! 2. [`WidgetRegistry::create`] calls the factory exactly once per call and
//!    returns its error unchanged.
//!
//! # Example
//!
//! ```
//! use fkit_widgets::{WidgetContext, WidgetRegistry};
//!
//! let registry = WidgetRegistry::standard();
//! let footer = registry
//!     .create("MultiSelectFooter", &WidgetContext::builtin("fr_FR"))
//!     .unwrap();
//! assert_eq!(
//!     footer.render_to_string(),
//!     "[Tout sélectionner] [Tout désélectionner] [Fermer]"
//! );
//! ```

use std::fmt;

use ahash::AHashMap;
use fkit_i18n::ResourceError;

use crate::{CheckBox, MultiSelectFooter, TextInput, Widget, WidgetContext};

/// Builds a widget for a context.
pub type WidgetFactory = fn(&WidgetContext<'_>) -> Result<Box<dyn Widget>, WidgetError>;

/// Errors from the widget registry and factories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// No widget is registered under this name.
    UnknownWidget(String),
    /// The name is already registered.
    DuplicateWidget(String),
    /// A factory could not resolve its localized resources.
    Resource(ResourceError),
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWidget(name) => write!(f, "unknown widget: {name}"),
            Self::DuplicateWidget(name) => write!(f, "widget already registered: {name}"),
            Self::Resource(e) => write!(f, "widget resources unavailable: {e}"),
        }
    }
}

impl std::error::Error for WidgetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resource(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ResourceError> for WidgetError {
    fn from(e: ResourceError) -> Self {
        Self::Resource(e)
    }
}

impl From<fkit_i18n::MissingResourceError> for WidgetError {
    fn from(e: fkit_i18n::MissingResourceError) -> Self {
        Self::Resource(e.into())
    }
}

impl From<fkit_i18n::UnknownKeyError> for WidgetError {
    fn from(e: fkit_i18n::UnknownKeyError) -> Self {
        Self::Resource(e.into())
    }
}

#[derive(Clone, Copy)]
struct Entry {
    implementation: &'static str,
    factory: WidgetFactory,
}

/// Name -> (implementation id, factory) table.
#[derive(Clone, Default)]
pub struct WidgetRegistry {
    entries: AHashMap<String, Entry>,
}

impl WidgetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard widget library.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (name, implementation, factory) in STANDARD_LIBRARY {
            // Names in the table are distinct, so registration cannot fail.
            let _ = registry.register(name, implementation, factory);
        }
        registry
    }

    /// Register a widget under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        implementation: &'static str,
        factory: WidgetFactory,
    ) -> Result<(), WidgetError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(WidgetError::DuplicateWidget(name));
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(widget = %name, implementation, "widget registered");
        self.entries.insert(
            name,
            Entry {
                implementation,
                factory,
            },
        );
        Ok(())
    }

    /// Implementation identifier registered for `name`.
    #[must_use]
    pub fn implementation(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).map(|e| e.implementation)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Build the widget registered under `name`.
    pub fn create(
        &self,
        name: &str,
        ctx: &WidgetContext<'_>,
    ) -> Result<Box<dyn Widget>, WidgetError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| WidgetError::UnknownWidget(name.to_string()))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(widget = name, locale = %ctx.locale, "creating widget");
        (entry.factory)(ctx)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.names()
                    .into_iter()
                    .filter_map(|n| self.implementation(n).map(|i| (n, i))),
            )
            .finish()
    }
}

const STANDARD_LIBRARY: [(&str, &str, WidgetFactory); 3] = [
    (
        "CheckBox",
        "fkit_widgets::check_box::CheckBox",
        CheckBox::factory,
    ),
    (
        "MultiSelectFooter",
        "fkit_widgets::multiselect_footer::MultiSelectFooter",
        MultiSelectFooter::factory,
    ),
    (
        "TextInput",
        "fkit_widgets::text_input::TextInput",
        TextInput::factory,
    ),
];
