//! Attribute macros for wrapkit call wrappers.
//!
//! # Available Attribute Macros
//!
//! - [`macro@catch_faults`]: Routes every call of a free function through a
//!   fault-logging wrapper
//!
//! # Example
//!
//! ```rust,ignore
//! use wrapkit::catch_faults;
//! use wrapkit::fault::Fault;
//!
//! #[catch_faults]
//! fn divider(numerator: i32, denominator: i32) -> i32 {
//!     numerator / denominator
//! }
//!
//! assert_eq!(divider(8, 2), Ok(4));
//! assert_eq!(divider(2, 0), Err(Fault::ZeroDivision));
//! // prints: unable to execute: ZeroDivision raised
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod catch_faults;

use proc_macro::TokenStream;

/// Wraps a free function in `wrapkit::fault::FaultLogging`.
///
/// `#[catch_faults] fn f(..) -> R { .. }` is the attribute form of
/// `let f = catch_faults(f);`. The function keeps its parameters, and its
/// return type becomes `Result<T, wrapkit::fault::Fault>`:
///
/// - if `R` is a path ending in `Result` (`Result<T, E>`, `io::Result<T>`),
///   `T` is its first type argument and `E` must convert into `Fault`
/// - otherwise `T` is `R`, and only panics are reported
///
/// Faults are written to the console as `unable to execute: <Kind> raised`.
/// The wrapper lives in a `static` evaluated at compile time, so every call
/// goes through the same instance.
///
/// # Restrictions
///
/// Methods (`self` receivers), generic functions, `impl Trait` parameters,
/// `async`, `const`, `unsafe` and `extern` functions are rejected.
///
/// # Generated Code
///
/// ```rust,ignore
/// fn divider(numerator: i32, denominator: i32) -> Result<i32, Fault> {
///     fn __wrapkit_target(numerator: i32, denominator: i32) -> i32 {
///         numerator / denominator
///     }
///     static __WRAPKIT_WRAPPED: FaultLogging<Total<fn(i32, i32) -> i32>, Console> =
///         FaultLogging::new(Total::new(__wrapkit_target as fn(i32, i32) -> i32), Console);
///     Invoke::invoke(&__WRAPKIT_WRAPPED, (numerator, denominator))
/// }
/// ```
#[proc_macro_attribute]
pub fn catch_faults(attribute: TokenStream, item: TokenStream) -> TokenStream {
    catch_faults::catch_faults_impl(attribute, item)
}
