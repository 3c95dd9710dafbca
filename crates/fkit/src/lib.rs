#![forbid(unsafe_code)]

//! Formkit public facade crate.
//!
//! Re-exports the bundle registry, the binding runtime and the widget
//! library, and offers a prelude for day-to-day usage.
//!
//! ```
//! use fkit::prelude::*;
//!
//! let registry = WidgetRegistry::standard();
//! let footer = registry.create("MultiSelectFooter", &WidgetContext::builtin("de_DE"))?;
//! assert!(footer.render_to_string().ends_with("[Schließen]"));
//! # Ok::<(), fkit::Error>(())
//! ```

use std::fmt;

pub use fkit_i18n as i18n;
pub use fkit_runtime as runtime;
pub use fkit_widgets as widgets;

// --- i18n re-exports -------------------------------------------------------

pub use fkit_i18n::{
    BundleRegistry, DEFAULT_LOCALE, I18nError, KeySet, LocaleTag, MissingResourceError,
    ResourceBundle, ResourceError, UnknownKeyError,
};

// --- Runtime re-exports ----------------------------------------------------

pub use fkit_runtime::{
    BaseValidator, Binding, BindingScope, FnTransform, FnValidator, Identity, LocaleContext, Not,
    NullableNot, Observable, Subscription, TransformBinding, ValidationResult, Validator,
    ValidatorChain, ValueTransform,
};

// --- Widget re-exports -----------------------------------------------------

pub use fkit_widgets::{
    CheckBox, MultiSelectFooter, TextInput, Widget, WidgetContext, WidgetError, WidgetFactory,
    WidgetRegistry,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Formkit apps.
#[derive(Debug)]
pub enum Error {
    /// Bundle lookup failed.
    Resource(ResourceError),
    /// Registry setup failed.
    I18n(I18nError),
    /// Widget lookup or construction failed.
    Widget(WidgetError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource(err) => write!(f, "{err}"),
            Self::I18n(err) => write!(f, "{err}"),
            Self::Widget(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resource(err) => Some(err),
            Self::I18n(err) => Some(err),
            Self::Widget(err) => Some(err),
        }
    }
}

impl From<ResourceError> for Error {
    fn from(err: ResourceError) -> Self {
        Self::Resource(err)
    }
}

impl From<MissingResourceError> for Error {
    fn from(err: MissingResourceError) -> Self {
        Self::Resource(err.into())
    }
}

impl From<UnknownKeyError> for Error {
    fn from(err: UnknownKeyError) -> Self {
        Self::Resource(err.into())
    }
}

impl From<I18nError> for Error {
    fn from(err: I18nError) -> Self {
        Self::I18n(err)
    }
}

impl From<WidgetError> for Error {
    fn from(err: WidgetError) -> Self {
        Self::Widget(err)
    }
}

/// Standard result type for Formkit APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Common imports.
pub mod prelude {
    pub use crate::{
        BundleRegistry, CheckBox, Error, LocaleContext, MultiSelectFooter, Not, Observable, Result,
        TextInput, ValidationResult, Validator, ValueTransform, Widget, WidgetContext,
        WidgetRegistry,
    };
}
