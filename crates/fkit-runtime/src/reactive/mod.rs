#![forbid(unsafe_code)]

//! Reactive data bindings for Formkit widgets.
//!
//! - [`Observable`]: a shared, version-tracked value with change
//!   notification via subscriber callbacks.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//! - [`ValueTransform`]: stateless two-way conversion between a domain
//!   value and the value a widget shows.
//! - [`Binding`] / [`TransformBinding`]: one-way views and two-way sync
//!   through a transform.
//! - [`BindingScope`]: owns a widget's subscriptions and bindings.
//!
//! # Architecture
//!
//! `Observable<T>` uses `Rc<RefCell<..>>` for single-threaded shared
//! ownership. Subscribers are stored as `Weak` function pointers and cleaned
//! up lazily during notification. Transforms are plain values with no
//! interior state and may be shared across threads.

pub mod binding;
pub mod observable;
pub mod transform;

pub use binding::{
    Binding, BindingScope, TransformBinding, bind_mapped, bind_observable, bind_transformed,
};
pub use observable::{Observable, Subscription};
pub use transform::{FnTransform, Identity, Not, NullableNot, ValueTransform};
