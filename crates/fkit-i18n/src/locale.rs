//! Locale tags of the form `language` or `language_REGION`.
//!
//! Tags are case-sensitive and underscore-separated: `fr_FR` and `fr_fr`
//! are different tags, and `fr-FR` is rejected. Parsing never normalizes;
//! callers that read tags from the environment should clean them up first
//! (see `fkit_runtime::locale::detect_system_locale`).

use std::fmt;

use crate::error::I18nError;

/// Locale used when a requested locale has no bundle.
pub const DEFAULT_LOCALE: &str = "en_GB";

/// A validated locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Parse and validate a tag.
    ///
    /// The language part is 2 or 3 lowercase ASCII letters. The optional
    /// region part is 2 uppercase ASCII letters or 3 ASCII digits.
    pub fn parse(tag: &str) -> Result<Self, I18nError> {
        let (language, region) = match tag.split_once('_') {
            Some((lang, region)) => (lang, Some(region)),
            None => (tag, None),
        };
        let language_ok =
            (2..=3).contains(&language.len()) && language.bytes().all(|b| b.is_ascii_lowercase());
        let region_ok = region.is_none_or(|r| {
            (r.len() == 2 && r.bytes().all(|b| b.is_ascii_uppercase()))
                || (r.len() == 3 && r.bytes().all(|b| b.is_ascii_digit()))
        });
        if language_ok && region_ok {
            Ok(Self(tag.to_string()))
        } else {
            Err(I18nError::InvalidLocale(tag.to_string()))
        }
    }

    /// The built-in default locale.
    #[must_use]
    pub fn default_locale() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language subtag (`"fr"` for `fr_FR`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('_').next().unwrap_or(&self.0)
    }

    /// Region subtag (`Some("FR")` for `fr_FR`).
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.0.split_once('_').map(|(_, region)| region)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for LocaleTag {
    type Error = I18nError;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        Self::parse(tag)
    }
}

impl std::str::FromStr for LocaleTag {
    type Err = I18nError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::parse(tag)
    }
}
