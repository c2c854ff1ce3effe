#![cfg(feature = "fault")]
//! Property-based tests for the fault-logging wrapper.
//!
//! ## Laws
//! - **Transparency**: a successful target's value passes through unchanged
//! - **Containment**: a failing or panicking target yields `Err`, never a panic
//! - **Repeatability**: the same successful call yields the same value twice

use proptest::prelude::*;
use wrapkit::Invoke;
use wrapkit::fault::{Fault, catch_faults_with, total};
use wrapkit::sink::Transcript;

fn checked_divide(numerator: i64, denominator: i64) -> Result<i64, Fault> {
    numerator.checked_div(denominator).ok_or(Fault::ZeroDivision)
}

proptest! {
    /// Transparency: Ok(v) from the target is Ok(v) from the wrapper.
    #[test]
    fn prop_success_is_transparent(numerator in any::<i64>(), denominator in any::<i64>()) {
        prop_assume!(denominator != 0);
        prop_assume!(!(numerator == i64::MIN && denominator == -1));

        let transcript = Transcript::new();
        let wrapped = catch_faults_with(checked_divide, transcript.clone());

        prop_assert_eq!(wrapped.invoke((numerator, denominator)), checked_divide(numerator, denominator));
        prop_assert!(transcript.is_empty());
    }

    /// Containment: every zero denominator is contained and reported once.
    #[test]
    fn prop_failure_is_contained(numerator in any::<i64>()) {
        let transcript = Transcript::new();
        let wrapped = catch_faults_with(checked_divide, transcript.clone());

        prop_assert_eq!(wrapped.invoke((numerator, 0)), Err(Fault::ZeroDivision));
        prop_assert_eq!(transcript.lines().len(), 1);
    }

    /// Containment holds for panics too.
    #[test]
    fn prop_panic_is_contained(index in 3usize..1000) {
        let items = [1, 2, 3];
        let wrapped = catch_faults_with(total(move |position: usize| items[position]), Transcript::new());

        prop_assert!(wrapped.invoke((index,)).is_err());
    }

    /// Repeatability: no hidden state accumulates between calls.
    #[test]
    fn prop_repeated_calls_agree(text in "[a-z]{0,16}", count in 0usize..8) {
        let wrapped = catch_faults_with(
            |value: &str, times: usize| -> Result<String, Fault> { Ok(value.repeat(times)) },
            Transcript::new(),
        );

        let first = wrapped.invoke((text.as_str(), count));
        let second = wrapped.invoke((text.as_str(), count));

        prop_assert_eq!(first, second);
    }
}
