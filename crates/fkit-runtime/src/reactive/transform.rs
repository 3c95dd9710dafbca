#![forbid(unsafe_code)]

//! Bidirectional value transforms between domain and widget values.
//!
//! A [`ValueTransform`] converts a value from the shape the data model holds
//! into the shape a widget control displays, and back. Transforms carry no
//! state, so one instance can be shared by every binding that uses it.
//!
//! # Coercion
//!
//! Inputs are typed, so there is no implicit truthiness. [`Not`] accepts
//! only `bool`. A domain value that may be absent uses [`NullableNot`],
//! which treats `None` as `false` before negating.
//!
//! # Invariants
//!
//! 1. `Not` is its own inverse: `to_widget(to_widget(x)) == x` and
//!    `to_widget(from_widget(x)) == x` for every `bool`.
//! 2. Transforms are total over their declared types; they never panic.

use std::fmt;
use std::marker::PhantomData;

/// A stateless converter between a domain value and a widget value.
pub trait ValueTransform {
    /// Type held by the data model.
    type Domain;
    /// Type shown by the widget.
    type Widget;

    /// Domain value to widget value.
    fn to_widget(&self, value: &Self::Domain) -> Self::Widget;

    /// Widget value back to domain value.
    fn from_widget(&self, value: &Self::Widget) -> Self::Domain;
}

impl<T: ValueTransform + ?Sized> ValueTransform for &T {
    type Domain = T::Domain;
    type Widget = T::Widget;

    fn to_widget(&self, value: &Self::Domain) -> Self::Widget {
        (**self).to_widget(value)
    }

    fn from_widget(&self, value: &Self::Widget) -> Self::Domain {
        (**self).from_widget(value)
    }
}

/// Boolean negation in both directions.
///
/// ```
/// use fkit_runtime::reactive::{Not, ValueTransform};
///
/// assert!(!Not.to_widget(&true));
/// assert!(Not.from_widget(&false));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Not;

impl ValueTransform for Not {
    type Domain = bool;
    type Widget = bool;

    fn to_widget(&self, value: &bool) -> bool {
        !*value
    }

    fn from_widget(&self, value: &bool) -> bool {
        !*value
    }
}

/// Boolean negation over an optional domain value.
///
/// `None` coerces to `false`, so it shows as `true`. Writing back always
/// yields `Some`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullableNot;

impl ValueTransform for NullableNot {
    type Domain = Option<bool>;
    type Widget = bool;

    fn to_widget(&self, value: &Option<bool>) -> bool {
        !value.unwrap_or(false)
    }

    fn from_widget(&self, value: &bool) -> Option<bool> {
        Some(!*value)
    }
}

/// Passes values through unchanged.
pub struct Identity<T>(PhantomData<fn(T) -> T>);

impl<T> Identity<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identity<T> {}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

impl<T: Clone> ValueTransform for Identity<T> {
    type Domain = T;
    type Widget = T;

    fn to_widget(&self, value: &T) -> T {
        value.clone()
    }

    fn from_widget(&self, value: &T) -> T {
        value.clone()
    }
}

/// A transform built from a pair of functions.
///
/// ```
/// use fkit_runtime::reactive::{FnTransform, ValueTransform};
///
/// let percent = FnTransform::new(|v: &f64| v * 100.0, |w: &f64| w / 100.0);
/// assert_eq!(percent.to_widget(&0.25), 25.0);
/// assert_eq!(percent.from_widget(&50.0), 0.5);
/// ```
pub struct FnTransform<D, W, F, G> {
    to: F,
    from: G,
    _types: PhantomData<fn(D, W)>,
}

impl<D, W, F, G> FnTransform<D, W, F, G>
where
    F: Fn(&D) -> W,
    G: Fn(&W) -> D,
{
    pub fn new(to_widget: F, from_widget: G) -> Self {
        Self {
            to: to_widget,
            from: from_widget,
            _types: PhantomData,
        }
    }
}

impl<D, W, F, G> ValueTransform for FnTransform<D, W, F, G>
where
    F: Fn(&D) -> W,
    G: Fn(&W) -> D,
{
    type Domain = D;
    type Widget = W;

    fn to_widget(&self, value: &D) -> W {
        (self.to)(value)
    }

    fn from_widget(&self, value: &W) -> D {
        (self.from)(value)
    }
}

impl<D, W, F, G> fmt::Debug for FnTransform<D, W, F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransform").finish_non_exhaustive()
    }
}
