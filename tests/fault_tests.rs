//! Integration tests for the fault-logging wrapper.

#![cfg(feature = "fault")]

use std::cell::RefCell;

use rstest::rstest;
use wrapkit::Invoke;
use wrapkit::fault::{Fault, catch_faults, catch_faults_with, total};
use wrapkit::sink::Transcript;

fn unwrapped_divide(numerator: i64, denominator: i64) -> Result<i64, Fault> {
    numerator.checked_div(denominator).ok_or(Fault::ZeroDivision)
}

fn file_reader(path: &str) -> Result<String, Fault> {
    Ok(std::fs::read_to_string(path)?)
}

// =============================================================================
// Division scenario
// =============================================================================

#[rstest]
fn divide_by_zero_is_reported_not_raised() {
    let transcript = Transcript::new();
    let wrapped_divide = catch_faults_with(unwrapped_divide, transcript.clone());

    let result = wrapped_divide.invoke((2, 0));

    assert_eq!(result, Err(Fault::ZeroDivision));
    assert_eq!(
        transcript.lines(),
        vec!["unable to execute: ZeroDivision raised"]
    );
}

#[rstest]
fn panicking_division_is_reported_as_zero_division() {
    let transcript = Transcript::new();
    let wrapped_divide = catch_faults_with(
        total(|numerator: i32, denominator: i32| numerator / denominator),
        transcript.clone(),
    );

    assert_eq!(wrapped_divide.invoke((2, 0)), Err(Fault::ZeroDivision));
    assert!(transcript.contains("ZeroDivision"));
}

#[rstest]
fn remainder_by_zero_is_zero_division() {
    let wrapped = catch_faults_with(
        total(|numerator: i32, denominator: i32| numerator % denominator),
        Transcript::new(),
    );

    assert_eq!(wrapped.invoke((7, 0)), Err(Fault::ZeroDivision));
}

#[rstest]
fn console_wrapper_returns_value() {
    let wrapped_divide = catch_faults(unwrapped_divide);

    assert_eq!(wrapped_divide.invoke((10, 5)), Ok(2));
}

// =============================================================================
// File reading scenario
// =============================================================================

#[rstest]
fn missing_file_is_reported_as_not_found() {
    let transcript = Transcript::new();
    let wrapped_reader = catch_faults_with(file_reader, transcript.clone());

    let result = wrapped_reader.invoke(("nonexistent_file.txt",));

    assert!(matches!(
        result,
        Err(Fault::Io(ref error)) if error.kind() == std::io::ErrorKind::NotFound
    ));
    assert_eq!(
        transcript.lines(),
        vec!["unable to execute: NotFound raised"]
    );
}

#[rstest]
fn existing_file_is_read() {
    let transcript = Transcript::new();
    let wrapped_reader = catch_faults_with(file_reader, transcript.clone());

    let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
    let contents = wrapped_reader.invoke((manifest,)).unwrap();

    assert!(contents.contains("[package]"));
    assert!(transcript.is_empty());
}

// =============================================================================
// Argument forwarding
// =============================================================================

#[rstest]
fn arguments_are_forwarded_in_order() {
    let seen = RefCell::new(Vec::new());
    let record = |a: &str, b: u8, c: char| -> Result<(), Fault> {
        seen.borrow_mut().push(format!("{a}{b}{c}"));
        Ok(())
    };
    let wrapped = catch_faults_with(record, Transcript::new());

    wrapped.invoke(("x", 1, 'y')).unwrap();
    wrapped.invoke(("z", 2, 'w')).unwrap();

    assert_eq!(*seen.borrow(), vec!["x1y", "z2w"]);
}

#[rstest]
fn zero_argument_target() {
    let finish = || -> Result<&str, Fault> { Ok("done") };
    let wrapped = catch_faults_with(finish, Transcript::new());

    assert_eq!(wrapped.invoke(()), Ok("done"));
}

#[rstest]
fn parse_errors_convert_into_faults() {
    let transcript = Transcript::new();
    let parse = |text: &str| -> Result<i32, std::num::ParseIntError> { text.parse() };
    let wrapped = catch_faults_with(parse, transcript.clone());

    assert_eq!(wrapped.invoke(("42",)), Ok(42));
    assert!(wrapped.invoke(("forty-two",)).is_err());
    assert_eq!(transcript.lines(), vec!["unable to execute: ParseInt raised"]);
}

#[rstest]
fn custom_fault_kind_is_reported() {
    let transcript = Transcript::new();
    let reject = |_: u32| -> Result<u32, Fault> { Err(Fault::custom("Overdraft", "too much")) };
    let wrapped = catch_faults_with(reject, transcript.clone());

    assert!(wrapped.invoke((5,)).is_err());
    assert_eq!(transcript.lines(), vec!["unable to execute: Overdraft raised"]);
}
