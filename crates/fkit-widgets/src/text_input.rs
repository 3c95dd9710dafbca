#![forbid(unsafe_code)]

//! Single-line text input with validation.

use std::fmt;

use fkit_runtime::{
    BindingScope, Observable, ValidationResult, Validator, ValidatorChain, ValueTransform,
};

use crate::{Widget, WidgetContext, WidgetError};

/// A text field whose value is checked by a [`ValidatorChain`].
///
/// ```
/// use fkit_runtime::{FnValidator, ValidationResult};
/// use fkit_widgets::{TextInput, Widget};
///
/// let input = TextInput::new().with_validator(FnValidator::new(|v: &str| {
///     if v.is_empty() {
///         ValidationResult::fail("required")
///     } else {
///         ValidationResult::ok()
///     }
/// }));
/// assert_eq!(input.render_to_string(), " ! required");
///
/// input.set_value("ada");
/// assert!(input.validate().is_valid());
/// ```
#[derive(Debug)]
pub struct TextInput {
    value: Observable<String>,
    validators: ValidatorChain<str>,
    scope: BindingScope,
}

impl TextInput {
    /// An empty input with no validators.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Observable::new(String::new()),
            validators: ValidatorChain::new(),
            scope: BindingScope::new(),
        }
    }

    pub(crate) fn factory(_ctx: &WidgetContext<'_>) -> Result<Box<dyn Widget>, WidgetError> {
        Ok(Box::new(Self::new()))
    }

    #[must_use]
    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.value.set(value.into());
        self
    }

    /// Append a validator; validators run in insertion order.
    #[must_use]
    pub fn with_validator(mut self, validator: impl Validator<str> + 'static) -> Self {
        self.validators.push(validator);
        self
    }

    /// Bind the text to `domain` through `transform`.
    #[must_use]
    pub fn bind<X>(mut self, domain: &Observable<X::Domain>, transform: X) -> Self
    where
        X: ValueTransform<Widget = String> + 'static,
        X::Domain: Clone + PartialEq + 'static,
    {
        self.scope.bind_transform(domain, &self.value, transform);
        self
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.value.get()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.value.set(value.into());
    }

    /// Run the validators against the current value.
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        self.value.with(|v| self.validators.validate(v.as_str()))
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextInput {
    fn widget_name(&self) -> &'static str {
        "TextInput"
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        let value = self.value();
        out.write_str(&value)?;
        let result = self.validate();
        if !result.is_valid() {
            let message = result
                .message
                .or(result.code)
                .unwrap_or_else(|| "invalid".to_string());
            write!(out, " ! {message}")?;
        }
        Ok(())
    }
}
