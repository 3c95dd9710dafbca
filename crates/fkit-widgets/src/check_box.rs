#![forbid(unsafe_code)]

//! Two-state check box bound to model state.
//!
//! The box owns a widget-side `Observable<bool>`. Binding it to a domain
//! observable goes through a [`ValueTransform`], so a model field such as
//! `disabled` can drive an "Enabled" box with [`Not`](fkit_runtime::Not).

use std::fmt;

use fkit_runtime::{BindingScope, Observable, ValueTransform};

use crate::{Widget, WidgetContext, WidgetError};

#[derive(Debug)]
pub struct CheckBox {
    label: String,
    checked: Observable<bool>,
    scope: BindingScope,
}

impl CheckBox {
    /// An unchecked, unbound box.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: Observable::new(false),
            scope: BindingScope::new(),
        }
    }

    pub(crate) fn factory(_ctx: &WidgetContext<'_>) -> Result<Box<dyn Widget>, WidgetError> {
        Ok(Box::new(Self::new("")))
    }

    /// Bind the checked state to `domain` through `transform`.
    ///
    /// The box immediately shows `transform.to_widget(domain)`. Any earlier
    /// binding stays active; call [`unbind`](Self::unbind) first to replace it.
    #[must_use]
    pub fn bind<X>(mut self, domain: &Observable<X::Domain>, transform: X) -> Self
    where
        X: ValueTransform<Widget = bool> + 'static,
        X::Domain: Clone + PartialEq + 'static,
    {
        self.scope.bind_transform(domain, &self.checked, transform);
        self
    }

    /// Disconnect from every bound model.
    pub fn unbind(&mut self) {
        self.scope.clear();
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Set the checked state; bound models are updated through their transform.
    pub fn set_checked(&self, checked: bool) {
        self.checked.set(checked);
    }

    pub fn toggle(&self) {
        self.checked.update(|c| *c = !*c);
    }

    /// Widget-side observable, for hosts that subscribe to changes.
    #[must_use]
    pub fn checked(&self) -> &Observable<bool> {
        &self.checked
    }
}

impl Widget for CheckBox {
    fn widget_name(&self) -> &'static str {
        "CheckBox"
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        let mark = if self.is_checked() { 'x' } else { ' ' };
        if self.label.is_empty() {
            write!(out, "[{mark}]")
        } else {
            write!(out, "[{mark}] {}", self.label)
        }
    }
}
