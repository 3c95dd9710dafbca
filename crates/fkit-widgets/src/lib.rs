#![forbid(unsafe_code)]

//! Widget registry and standard widgets for Formkit.

pub mod check_box;
pub mod multiselect_footer;
pub mod registry;
pub mod text_input;

pub use check_box::CheckBox;
pub use multiselect_footer::MultiSelectFooter;
pub use registry::{WidgetError, WidgetFactory, WidgetRegistry};
pub use text_input::TextInput;

use std::fmt;

use fkit_i18n::BundleRegistry;
use fkit_runtime::LocaleContext;

/// A `Widget` is something the host framework can render.
///
/// Rendering here is a plain-text description of the widget's current
/// state; layout and drawing belong to the host.
pub trait Widget: fmt::Debug {
    /// Registry name of the widget (e.g. `"CheckBox"`).
    fn widget_name(&self) -> &'static str;

    /// Write the widget's text rendering into `out`.
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Render into a fresh `String`.
    fn render_to_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render(&mut out);
        out
    }
}

/// What a factory needs to build a widget.
#[derive(Debug, Clone)]
pub struct WidgetContext<'a> {
    /// Registry used to resolve localized labels.
    pub bundles: &'a BundleRegistry,
    /// Locale tag the widget is rendered for.
    pub locale: String,
}

impl<'a> WidgetContext<'a> {
    #[must_use]
    pub fn new(bundles: &'a BundleRegistry, locale: impl Into<String>) -> Self {
        Self {
            bundles,
            locale: locale.into(),
        }
    }

    /// Context for the locale currently active in `locale`, overrides
    /// included.
    #[must_use]
    pub fn from_locale(bundles: &'a BundleRegistry, locale: &LocaleContext) -> Self {
        Self::new(bundles, locale.current_locale())
    }

    /// Context over the built-in bundles.
    #[must_use]
    pub fn builtin(locale: impl Into<String>) -> WidgetContext<'static> {
        WidgetContext::new(fkit_i18n::builtin(), locale)
    }
}
