//! Bundles shipped with the library.

pub mod multiselect_footer;

use std::sync::OnceLock;

use tracing::error;

use crate::locale::LocaleTag;
use crate::registry::BundleRegistry;

static BUILTIN: OnceLock<BundleRegistry> = OnceLock::new();

/// Process-wide registry holding every built-in bundle.
///
/// Built once on first access with [`DEFAULT_LOCALE`](crate::DEFAULT_LOCALE)
/// as its default. A built-in bundle that fails validation is logged and
/// left out.
pub fn builtin() -> &'static BundleRegistry {
    BUILTIN.get_or_init(|| {
        let mut registry = BundleRegistry::with_default(LocaleTag::default_locale());
        if let Err(err) = multiselect_footer::register(&mut registry) {
            error!(bundle = multiselect_footer::NAME, error = %err, "built-in bundle rejected");
        }
        registry
    })
}
