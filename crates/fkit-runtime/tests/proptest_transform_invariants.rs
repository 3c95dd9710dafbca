//! Property-based invariant tests for transforms, bindings and validators.
//!
//! 1. Not: to_widget(x) == !x and from_widget(x) == !x
//! 2. Not is an involution in every composition order
//! 3. NullableNot round-trips every widget value
//! 4. After any sequence of writes on either side, a TransformBinding
//!    leaves widget == to_widget(domain)
//! 5. BaseValidator rejects every value
//! 6. A chain's verdict equals the conjunction of its validators

use fkit_runtime::reactive::{Not, NullableNot, Observable, TransformBinding, ValueTransform};
use fkit_runtime::validation::{
    BaseValidator, FnValidator, ValidationResult, Validator, ValidatorChain,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn not_negates(x in any::<bool>()) {
        prop_assert_eq!(Not.to_widget(&x), !x);
        prop_assert_eq!(Not.from_widget(&x), !x);
    }

    #[test]
    fn not_is_involution(x in any::<bool>()) {
        prop_assert_eq!(Not.to_widget(&Not.to_widget(&x)), x);
        prop_assert_eq!(Not.to_widget(&Not.from_widget(&x)), x);
        prop_assert_eq!(Not.from_widget(&Not.to_widget(&x)), x);
    }

    #[test]
    fn nullable_not_round_trips_widget(w in any::<bool>()) {
        prop_assert_eq!(NullableNot.to_widget(&NullableNot.from_widget(&w)), w);
    }

    #[test]
    fn nullable_not_matches_not_when_present(x in any::<bool>()) {
        prop_assert_eq!(NullableNot.to_widget(&Some(x)), Not.to_widget(&x));
    }
}

proptest! {
    #[test]
    fn transform_binding_stays_consistent(
        start in any::<bool>(),
        writes in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..32),
    ) {
        let domain = Observable::new(start);
        let widget = Observable::new(false);
        let _binding = TransformBinding::new(&domain, &widget, Not);
        prop_assert_eq!(widget.get(), !domain.get());

        for (to_widget_side, value) in writes {
            if to_widget_side {
                widget.set(value);
            } else {
                domain.set(value);
            }
            prop_assert_eq!(widget.get(), !domain.get());
        }
    }
}

proptest! {
    #[test]
    fn base_validator_rejects_everything(s in "\\PC{0,32}", n in any::<i64>()) {
        prop_assert!(!Validator::<str>::validate(&BaseValidator, s.as_str()).is_valid());
        prop_assert!(!Validator::<i64>::validate(&BaseValidator, &n).is_valid());
    }

    #[test]
    fn chain_is_conjunction(n in any::<i32>(), lo in -100i32..100, hi in -100i32..100) {
        let chain = ValidatorChain::<i32>::new()
            .with(FnValidator::new(move |v: &i32| {
                if *v >= lo { ValidationResult::ok() } else { ValidationResult::fail("low") }
            }))
            .with(FnValidator::new(move |v: &i32| {
                if *v <= hi { ValidationResult::ok() } else { ValidationResult::fail("high") }
            }));
        prop_assert_eq!(chain.validate(&n).is_valid(), n >= lo && n <= hi);
    }
}
