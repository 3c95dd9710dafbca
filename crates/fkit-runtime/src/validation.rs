#![forbid(unsafe_code)]

//! Validator contract and an early-exit validator chain.
//!
//! A [`Validator`] checks one value and reports a [`ValidationResult`]. The
//! provided `validate` reports the value as invalid, so a validator that
//! forgets to implement its check can never let a value through.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | `validate` not overridden | Invalid, code `validator.unimplemented` |
//! | Empty chain | Valid (nothing to check) |
//! | Several failing validators | First failure in order is returned |

use std::fmt;

/// Error code reported by the provided [`Validator::validate`].
pub const UNIMPLEMENTED_CODE: &str = "validator.unimplemented";

/// Outcome of a validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// Human-readable diagnostic for a failure.
    pub message: Option<String>,
    /// Machine-readable diagnostic code.
    pub code: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
            code: None,
        }
    }

    /// A failing result with a message.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
            code: None,
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.valid, &self.message, &self.code) {
            (true, _, _) => f.write_str("valid"),
            (false, Some(msg), Some(code)) => write!(f, "invalid [{code}]: {msg}"),
            (false, Some(msg), None) => write!(f, "invalid: {msg}"),
            (false, None, Some(code)) => write!(f, "invalid [{code}]"),
            (false, None, None) => f.write_str("invalid"),
        }
    }
}

/// A pluggable validation strategy.
///
/// Implementors override [`validate`](Validator::validate). The provided
/// implementation always fails.
///
/// ```
/// use fkit_runtime::validation::{ValidationResult, Validator};
///
/// struct NonEmpty;
///
/// impl Validator<str> for NonEmpty {
///     fn validate(&self, value: &str) -> ValidationResult {
///         if value.is_empty() {
///             ValidationResult::fail("required").with_code("required")
///         } else {
///             ValidationResult::ok()
///         }
///     }
/// }
///
/// assert!(NonEmpty.validate("x").is_valid());
/// assert!(!NonEmpty.validate("").is_valid());
/// ```
pub trait Validator<T: ?Sized> {
    fn validate(&self, _value: &T) -> ValidationResult {
        ValidationResult::fail("no validation implemented").with_code(UNIMPLEMENTED_CODE)
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for Box<V> {
    fn validate(&self, value: &T) -> ValidationResult {
        (**self).validate(value)
    }
}

/// The base validator: keeps the always-failing default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseValidator;

impl<T: ?Sized> Validator<T> for BaseValidator {}

/// A validator backed by a closure.
pub struct FnValidator<F>(F);

impl<F> FnValidator<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T: ?Sized, F: Fn(&T) -> ValidationResult> Validator<T> for FnValidator<F> {
    fn validate(&self, value: &T) -> ValidationResult {
        (self.0)(value)
    }
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

/// Validators run in order, stopping at the first failure.
pub struct ValidatorChain<T: ?Sized> {
    validators: Vec<Box<dyn Validator<T>>>,
}

impl<T: ?Sized> Default for ValidatorChain<T> {
    fn default() -> Self {
        Self {
            validators: Vec::new(),
        }
    }
}

impl<T: ?Sized> ValidatorChain<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator.
    #[must_use]
    pub fn with(mut self, validator: impl Validator<T> + 'static) -> Self {
        self.push(validator);
        self
    }

    pub fn push(&mut self, validator: impl Validator<T> + 'static) {
        self.validators.push(Box::new(validator));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<T: ?Sized> Validator<T> for ValidatorChain<T> {
    fn validate(&self, value: &T) -> ValidationResult {
        self.validators
            .iter()
            .map(|v| v.validate(value))
            .find(|r| !r.is_valid())
            .unwrap_or_else(ValidationResult::ok)
    }
}

impl<T: ?Sized> fmt::Debug for ValidatorChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorChain")
            .field("len", &self.validators.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn max_len(n: usize) -> FnValidator<impl Fn(&str) -> ValidationResult> {
        FnValidator::new(move |v: &str| {
            if v.chars().count() <= n {
                ValidationResult::ok()
            } else {
                ValidationResult::fail(format!("at most {n} characters")).with_code("max_len")
            }
        })
    }

    #[test]
    fn base_validator_always_fails() {
        let result = Validator::<str>::validate(&BaseValidator, "anything");
        assert!(!result.is_valid());
        assert_eq!(result.code.as_deref(), Some(UNIMPLEMENTED_CODE));
        assert!(!Validator::<i32>::validate(&BaseValidator, &0).is_valid());
    }

    #[test]
    fn unimplemented_custom_validator_fails() {
        struct Forgetful;
        impl Validator<u8> for Forgetful {}
        assert!(!Forgetful.validate(&1).is_valid());
    }

    #[test]
    fn fn_validator_delegates() {
        let v = max_len(3);
        assert!(v.validate("abc").is_valid());
        let fail = v.validate("abcd");
        assert_eq!(fail.code.as_deref(), Some("max_len"));
        assert_eq!(fail.to_string(), "invalid [max_len]: at most 3 characters");
    }

    #[test]
    fn empty_chain_is_valid() {
        let chain: ValidatorChain<str> = ValidatorChain::new();
        assert!(chain.is_empty());
        assert!(chain.validate("").is_valid());
    }

    #[test]
    fn chain_stops_at_first_failure() {
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let chain = ValidatorChain::<str>::new()
            .with(max_len(2))
            .with(FnValidator::new(move |_: &str| {
                c.set(c.get() + 1);
                ValidationResult::fail("second")
            }));
        assert_eq!(chain.len(), 2);

        let r = chain.validate("long");
        assert_eq!(r.code.as_deref(), Some("max_len"));
        assert_eq!(calls.get(), 0, "second validator skipped after failure");

        let r = chain.validate("ok");
        assert_eq!(r.message.as_deref(), Some("second"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn chain_with_base_validator_never_passes() {
        let chain = ValidatorChain::<str>::new().with(max_len(10)).with(BaseValidator);
        assert!(!chain.validate("short").is_valid());
    }

    #[test]
    fn display_forms() {
        assert_eq!(ValidationResult::ok().to_string(), "valid");
        assert_eq!(ValidationResult::fail("bad").to_string(), "invalid: bad");
    }
}
