//! # wrapkit
//!
//! Call wrappers for Rust: take a callable, return a replacement callable that
//! layers extra behavior around every invocation of the original.
//!
//! ## Overview
//!
//! - **Invocation**: [`Invoke`] and [`InvokeOn`] describe "anything callable"
//!   with a tuple of positional arguments, for free functions and methods.
//! - **Fault logging**: `fault::catch_faults` turns failures and panics of the
//!   wrapped target into a logged `Err(Fault)` instead of an unwinding panic.
//! - **Credential gate**: `gate::gate` prompts for a password before letting a
//!   method run against its receiver.
//! - **Account**: a small bank account whose operations are reachable only
//!   through credential gates.
//!
//! ## Feature Flags
//!
//! - `fault`: Fault-logging wrapper
//! - `gate`: Credential-gated wrapper
//! - `terminal`: Hidden password entry on an interactive terminal
//! - `account`: Bank account guarded by credential gates
//! - `derive`: `#[catch_faults]` attribute
//! - `cli`: Demo binary and its environment configuration
//! - `serde`: Serialization of account receipts
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use wrapkit::Invoke;
//! use wrapkit::fault::{Fault, catch_faults_with};
//! use wrapkit::sink::Transcript;
//!
//! fn divide(numerator: i64, denominator: i64) -> Result<i64, Fault> {
//!     numerator.checked_div(denominator).ok_or(Fault::ZeroDivision)
//! }
//!
//! let transcript = Transcript::new();
//! let wrapped_divide = catch_faults_with(divide, transcript.clone());
//!
//! assert_eq!(wrapped_divide.invoke((6, 3)), Ok(2));
//! assert!(wrapped_divide.invoke((2, 0)).is_err());
//! assert_eq!(transcript.lines(), vec!["unable to execute: ZeroDivision raised"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use wrapkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::invoke::{Invoke, InvokeOn};
    pub use crate::sink::{Console, Sink, Transcript};

    #[cfg(feature = "fault")]
    pub use crate::fault::*;

    #[cfg(feature = "gate")]
    pub use crate::gate::*;

    #[cfg(feature = "account")]
    pub use crate::account::*;

    #[cfg(feature = "derive")]
    pub use wrapkit_derive::catch_faults;
}

pub mod invoke;
pub mod sink;

#[cfg(feature = "fault")]
pub mod fault;

#[cfg(feature = "gate")]
pub mod gate;

#[cfg(feature = "account")]
pub mod account;

#[cfg(feature = "cli")]
pub mod config;

pub use invoke::{Invoke, InvokeOn};

#[cfg(feature = "derive")]
pub use wrapkit_derive::catch_faults;
