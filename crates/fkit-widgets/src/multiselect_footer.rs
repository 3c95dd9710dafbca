#![forbid(unsafe_code)]

//! Footer row of the multiselect dropdown.
//!
//! Labels are resolved once, at construction, from the
//! `multiselect.footer` bundle for the requested locale (falling back to
//! the registry's default locale).

use std::fmt;

use fkit_i18n::resources::multiselect_footer::{CLOSE, DESELECT_ALL, NAME, SELECT_ALL};
use fkit_i18n::{BundleRegistry, LocaleTag, ResourceError};

use crate::{Widget, WidgetContext, WidgetError};

/// "Select all" / "Deselect all" / "Close" buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectFooter {
    locale: LocaleTag,
    select_all: String,
    deselect_all: String,
    close: String,
}

impl MultiSelectFooter {
    /// Resolve labels for `locale` from `bundles`.
    pub fn new(bundles: &BundleRegistry, locale: &str) -> Result<Self, ResourceError> {
        let bundle = bundles.resolve(NAME, locale)?;
        Ok(Self {
            locale: bundle.locale().clone(),
            select_all: bundle.get(SELECT_ALL)?.to_string(),
            deselect_all: bundle.get(DESELECT_ALL)?.to_string(),
            close: bundle.get(CLOSE)?.to_string(),
        })
    }

    pub(crate) fn factory(ctx: &WidgetContext<'_>) -> Result<Box<dyn Widget>, WidgetError> {
        Ok(Box::new(Self::new(ctx.bundles, &ctx.locale)?))
    }

    /// Locale of the bundle the labels came from.
    #[must_use]
    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    #[must_use]
    pub fn select_all_label(&self) -> &str {
        &self.select_all
    }

    #[must_use]
    pub fn deselect_all_label(&self) -> &str {
        &self.deselect_all
    }

    #[must_use]
    pub fn close_label(&self) -> &str {
        &self.close
    }
}

impl Widget for MultiSelectFooter {
    fn widget_name(&self) -> &'static str {
        "MultiSelectFooter"
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            "[{}] [{}] [{}]",
            self.select_all, self.deselect_all, self.close
        )
    }
}
