#![forbid(unsafe_code)]

//! Bindings between observable domain state and widget-facing values.
//!
//! A [`Binding<T>`] reads an observable source through an optional mapping.
//! A [`TransformBinding`] keeps a domain observable and a widget observable
//! in sync in both directions through a [`ValueTransform`].
//!
//! # Usage
//!
//! ```
//! use fkit_runtime::reactive::{Not, Observable, TransformBinding, bind_transformed};
//!
//! // The model stores "disabled"; the check box shows "enabled".
//! let disabled = Observable::new(false);
//! let enabled = Observable::new(false);
//! let _binding = TransformBinding::new(&disabled, &enabled, Not);
//! assert!(enabled.get());
//!
//! enabled.set(false);
//! assert!(disabled.get());
//!
//! let label = bind_transformed(&disabled, Not).then(|on| if on { "on" } else { "off" });
//! assert_eq!(label.get(), "off");
//! ```
//!
//! # Invariants
//!
//! 1. `Binding::get()` always returns the current (not stale) value.
//! 2. A binding's mapping is applied on every `get()` call (no caching).
//! 3. `TransformBinding` prevents update cycles with a re-entrancy guard.
//! 4. Dropping a `TransformBinding` unsubscribes both directions.
//! 5. Bindings are `Clone` and share their source.
//!
//! # Failure Modes
//!
//! - Mapping panic: propagates to the caller of `get()`.
//! - Source dropped while binding alive: binding still works (Rc keeps the
//!   inner state alive).

use std::cell::Cell;
use std::rc::Rc;

use tracing::trace;

use super::observable::{Observable, Subscription};
use super::transform::ValueTransform;

// ---------------------------------------------------------------------------
// Binding<T>: one-way read binding
// ---------------------------------------------------------------------------

/// A read-only view of observable state.
pub struct Binding<T> {
    eval: Rc<dyn Fn() -> T>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            eval: Rc::clone(&self.eval),
        }
    }
}

impl<T: std::fmt::Debug + 'static> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.get())
            .finish()
    }
}

impl<T: 'static> Binding<T> {
    /// Create a binding that evaluates `f` on each `get()` call.
    pub fn new(f: impl Fn() -> T + 'static) -> Self {
        Self { eval: Rc::new(f) }
    }

    /// Get the current bound value.
    #[must_use]
    pub fn get(&self) -> T {
        (self.eval)()
    }

    /// Apply a further mapping, returning a new `Binding`.
    pub fn then<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Binding<U> {
        Binding {
            eval: Rc::new(move || f((self.eval)())),
        }
    }
}

/// Create a direct binding to an observable.
pub fn bind_observable<T: Clone + PartialEq + 'static>(source: &Observable<T>) -> Binding<T> {
    let src = source.clone();
    Binding {
        eval: Rc::new(move || src.get()),
    }
}

/// Create a mapped binding: `source` value passed through `map`.
pub fn bind_mapped<S: Clone + PartialEq + 'static, T: 'static>(
    source: &Observable<S>,
    map: impl Fn(&S) -> T + 'static,
) -> Binding<T> {
    let src = source.clone();
    Binding {
        eval: Rc::new(move || src.with(|v| map(v))),
    }
}

/// Create a one-way binding showing `source` through `transform.to_widget`.
pub fn bind_transformed<X>(source: &Observable<X::Domain>, transform: X) -> Binding<X::Widget>
where
    X: ValueTransform + 'static,
    X::Domain: Clone + PartialEq + 'static,
    X::Widget: 'static,
{
    let src = source.clone();
    Binding {
        eval: Rc::new(move || src.with(|v| transform.to_widget(v))),
    }
}

// ---------------------------------------------------------------------------
// TransformBinding: bidirectional sync through a transform
// ---------------------------------------------------------------------------

/// Two-way binding between a domain observable and a widget observable.
///
/// On creation the widget side takes `to_widget(domain)`. Afterwards a
/// domain change writes `to_widget` to the widget side and a widget change
/// writes `from_widget` to the domain side.
///
/// Drop the `TransformBinding` to disconnect both directions.
pub struct TransformBinding {
    _domain_to_widget: Subscription,
    _widget_to_domain: Subscription,
}

impl TransformBinding {
    pub fn new<X>(
        domain: &Observable<X::Domain>,
        widget: &Observable<X::Widget>,
        transform: X,
    ) -> Self
    where
        X: ValueTransform + 'static,
        X::Domain: Clone + PartialEq + 'static,
        X::Widget: Clone + PartialEq + 'static,
    {
        let transform = Rc::new(transform);
        widget.set(domain.with(|v| transform.to_widget(v)));

        let syncing = Rc::new(Cell::new(false));

        let widget_handle = widget.clone();
        let guard = Rc::clone(&syncing);
        let forward = Rc::clone(&transform);
        let domain_to_widget = domain.subscribe(move |val| {
            if guard.replace(true) {
                return;
            }
            trace!(direction = "to_widget", "transform binding sync");
            widget_handle.set(forward.to_widget(val));
            guard.set(false);
        });

        let domain_handle = domain.clone();
        let guard = Rc::clone(&syncing);
        let backward = transform;
        let widget_to_domain = widget.subscribe(move |val| {
            if guard.replace(true) {
                return;
            }
            trace!(direction = "from_widget", "transform binding sync");
            domain_handle.set(backward.from_widget(val));
            guard.set(false);
        });

        Self {
            _domain_to_widget: domain_to_widget,
            _widget_to_domain: widget_to_domain,
        }
    }
}

impl std::fmt::Debug for TransformBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformBinding").finish()
    }
}

// ---------------------------------------------------------------------------
// Macros
// ---------------------------------------------------------------------------

/// Create a direct [`Binding`] to an observable.
#[macro_export]
macro_rules! bind {
    ($obs:expr) => {
        $crate::reactive::binding::bind_observable(&$obs)
    };
}

/// Create a mapped [`Binding`] from an observable and a mapping function.
#[macro_export]
macro_rules! bind_map {
    ($obs:expr, $f:expr) => {
        $crate::reactive::binding::bind_mapped(&$obs, $f)
    };
}

// ---------------------------------------------------------------------------
// BindingScope: lifecycle management
// ---------------------------------------------------------------------------

/// Collects subscriptions and transform bindings for one widget.
///
/// When the scope is dropped, everything it holds is released, cleanly
/// disconnecting the widget from its model.
///
/// # Invariants
///
/// 1. After drop, no callbacks from this scope fire.
/// 2. `clear()` releases everything immediately; the scope is reusable.
/// 3. `binding_count()` is always accurate.
#[derive(Default)]
pub struct BindingScope {
    subscriptions: Vec<Subscription>,
    bindings: Vec<TransformBinding>,
}

impl BindingScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a subscription alive until the scope is dropped or cleared.
    pub fn hold(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }

    /// Subscribe to an observable within this scope.
    pub fn subscribe<T: Clone + PartialEq + 'static>(
        &mut self,
        source: &Observable<T>,
        callback: impl Fn(&T) + 'static,
    ) -> &mut Self {
        self.subscriptions.push(source.subscribe(callback));
        self
    }

    /// Create a [`TransformBinding`] owned by this scope.
    pub fn bind_transform<X>(
        &mut self,
        domain: &Observable<X::Domain>,
        widget: &Observable<X::Widget>,
        transform: X,
    ) -> &mut Self
    where
        X: ValueTransform + 'static,
        X::Domain: Clone + PartialEq + 'static,
        X::Widget: Clone + PartialEq + 'static,
    {
        self.bindings
            .push(TransformBinding::new(domain, widget, transform));
        self
    }

    /// Number of subscriptions and transform bindings held.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.subscriptions.len() + self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.binding_count() == 0
    }

    /// Release everything immediately.
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.subscriptions.clear();
    }
}

impl std::fmt::Debug for BindingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingScope")
            .field("binding_count", &self.binding_count())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
