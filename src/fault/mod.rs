//! Fault-logging wrapper.
//!
//! [`catch_faults`] takes a fallible target and returns a [`FaultLogging`]
//! wrapper with the same call signature. Invoking the wrapper:
//!
//! 1. invokes the target with the original arguments,
//! 2. returns `Ok(value)` unchanged when the target succeeds,
//! 3. otherwise writes `unable to execute: <Kind> raised` to the sink and
//!    returns `Err(Fault)`.
//!
//! Panics raised inside the target are intercepted as well, so nothing
//! unwinds past the wrapper. Targets that cannot fail are adapted with
//! [`total`].
//!
//! # Examples
//!
//! ```rust
//! use wrapkit::Invoke;
//! use wrapkit::fault::{Fault, catch_faults_with, total};
//! use wrapkit::sink::Transcript;
//!
//! let transcript = Transcript::new();
//!
//! // Integer division by zero panics; the wrapper reports it instead.
//! let wrapped_divide = catch_faults_with(total(|n: i32, d: i32| n / d), transcript.clone());
//!
//! assert_eq!(wrapped_divide.invoke((8, 2)), Ok(4));
//! assert_eq!(wrapped_divide.invoke((2, 0)), Err(Fault::ZeroDivision));
//! assert_eq!(transcript.lines(), vec!["unable to execute: ZeroDivision raised"]);
//! ```
//!
//! # Laws
//!
//! - **Transparency**: if `target.invoke(a) == Ok(v)` then
//!   `catch_faults(target).invoke(a) == Ok(v)`, with nothing emitted.
//! - **Containment**: if the target fails or panics, the wrapper returns
//!   `Err(_)` and does not panic.

mod error;

pub use error::Fault;

use std::any::Any;
use std::convert::Infallible;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::invoke::Invoke;
use crate::sink::{Console, Sink};

/// Wraps `target` so that its faults are reported on the console.
///
/// Equivalent to `catch_faults_with(target, Console)`.
pub const fn catch_faults<F>(target: F) -> FaultLogging<F, Console> {
    FaultLogging::new(target, Console)
}

/// Wraps `target` so that its faults are reported to `sink`.
pub const fn catch_faults_with<F, S>(target: F, sink: S) -> FaultLogging<F, S> {
    FaultLogging::new(target, sink)
}

/// Lifts an infallible target into one returning `Result<_, Infallible>`.
///
/// Only panics can then be reported by [`FaultLogging`].
pub const fn total<F>(target: F) -> Total<F> {
    Total::new(target)
}

/// A callable whose failures are logged and returned instead of propagated.
///
/// The target is fixed at construction. Built by [`catch_faults`] or
/// [`catch_faults_with`].
#[derive(Debug, Clone, Copy)]
pub struct FaultLogging<F, S> {
    target: F,
    sink: S,
}

impl<F, S> FaultLogging<F, S> {
    /// Creates the wrapper. Usable in `static` items.
    pub const fn new(target: F, sink: S) -> Self {
        Self { target, sink }
    }

    /// Returns the wrapped target.
    pub const fn target(&self) -> &F {
        &self.target
    }

    /// Returns the sink faults are reported to.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Unwraps into the original target.
    pub fn into_target(self) -> F {
        self.target
    }
}

impl<F, S, Args, Value, Error> Invoke<Args> for FaultLogging<F, S>
where
    F: Invoke<Args, Output = Result<Value, Error>>,
    Error: Into<Fault>,
    S: Sink,
{
    type Output = Result<Value, Fault>;

    fn invoke(&self, args: Args) -> Result<Value, Fault> {
        let outcome = catch_unwind(AssertUnwindSafe(|| self.target.invoke(args)));

        let fault = match outcome {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(error)) => error.into(),
            Err(payload) => Fault::from_panic(&panic_message(payload.as_ref())),
        };

        tracing::warn!(kind = %fault.kind_name(), error = %fault, "call failed, fault intercepted");
        self.sink.emit(&format!("unable to execute: {} raised", fault.kind_name()));
        Err(fault)
    }
}

/// An infallible target presented as a fallible one. Built by [`total`].
#[derive(Debug, Clone, Copy)]
pub struct Total<F> {
    target: F,
}

impl<F> Total<F> {
    /// Creates the adapter. Usable in `static` items.
    pub const fn new(target: F) -> Self {
        Self { target }
    }
}

impl<F, Args> Invoke<Args> for Total<F>
where
    F: Invoke<Args>,
{
    type Output = Result<F::Output, Infallible>;

    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        Ok(self.target.invoke(args))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unknown panic".to_string()
    }
}

static_assertions::assert_impl_all!(FaultLogging<fn(i32) -> Result<i32, Fault>, Console>: Send, Sync);
static_assertions::assert_impl_all!(FaultLogging<Total<fn(i32) -> i32>, Console>: Send, Sync);
