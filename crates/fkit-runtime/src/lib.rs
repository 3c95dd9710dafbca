#![forbid(unsafe_code)]

//! Data-binding runtime for Formkit widgets.
//!
//! # Role in Formkit
//! `fkit-runtime` connects model state to widgets: observables and bindings
//! carry values, [`reactive::ValueTransform`]s convert them between domain
//! and widget shapes, [`validation::Validator`]s check them, and
//! [`locale::LocaleContext`] tracks which locale's bundles widgets should
//! resolve.
//!
//! # How it fits in the system
//! It sits between `fkit-i18n` (bundles) and `fkit-widgets` (widget
//! registry and standard widgets). Nothing here renders.

pub mod locale;
pub mod reactive;
pub mod validation;

pub use locale::{LocaleContext, LocaleOverride, detect_system_locale};
pub use reactive::{
    Binding, BindingScope, FnTransform, Identity, Not, NullableNot, Observable, Subscription,
    TransformBinding, ValueTransform,
};
pub use validation::{BaseValidator, FnValidator, ValidationResult, Validator, ValidatorChain};
