//! The fault taxonomy reported by the fault-logging wrapper.

use std::borrow::Cow;
use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Message of the panic Rust raises on integer division by zero.
const DIVIDE_BY_ZERO: &str = "attempt to divide by zero";
/// Message of the panic Rust raises on integer remainder by zero.
const REMAINDER_BY_ZERO: &str = "attempt to calculate the remainder with a divisor of zero";

/// A failure intercepted at a wrapper boundary.
///
/// Every variant has a category name, returned by [`Fault::kind_name`], which
/// is what the diagnostic line reports.
///
/// # Examples
///
/// ```rust
/// use wrapkit::fault::Fault;
///
/// let missing = std::fs::read_to_string("/definitely/not/here").unwrap_err();
/// assert_eq!(Fault::from(missing).kind_name(), "NotFound");
///
/// let custom = Fault::custom("Overdraft", "balance would go negative");
/// assert_eq!(custom.kind_name(), "Overdraft");
/// ```
#[derive(Debug, Error)]
pub enum Fault {
    /// A division or remainder with a zero divisor.
    #[error("division by zero")]
    ZeroDivision,

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A string could not be parsed as an integer.
    #[error("invalid integer: {0}")]
    ParseInt(#[from] ParseIntError),

    /// The target panicked with the given message.
    #[error("panicked: {0}")]
    Panic(String),

    /// A caller-defined fault category.
    #[error("{kind}: {message}")]
    Custom {
        /// Category name reported in diagnostics.
        kind: Cow<'static, str>,
        /// Human readable detail.
        message: String,
    },
}

impl Fault {
    /// Creates a caller-defined fault.
    pub fn custom(kind: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::Custom {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Classifies a panic message.
    ///
    /// Rust's own integer division and remainder panics map to
    /// [`Fault::ZeroDivision`]; anything else is a [`Fault::Panic`].
    #[must_use]
    pub fn from_panic(message: &str) -> Self {
        if message.starts_with(DIVIDE_BY_ZERO) || message.starts_with(REMAINDER_BY_ZERO) {
            Self::ZeroDivision
        } else {
            Self::Panic(message.to_string())
        }
    }

    /// The category name used in `unable to execute: <kind> raised`.
    #[must_use]
    pub fn kind_name(&self) -> Cow<'static, str> {
        match self {
            Self::ZeroDivision => Cow::Borrowed("ZeroDivision"),
            Self::Io(error) => Cow::Owned(format!("{:?}", error.kind())),
            Self::ParseInt(_) => Cow::Borrowed("ParseInt"),
            Self::Panic(_) => Cow::Borrowed("Panic"),
            Self::Custom { kind, .. } => kind.clone(),
        }
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ZeroDivision, Self::ZeroDivision) => true,
            (Self::Io(left), Self::Io(right)) => left.kind() == right.kind(),
            (Self::ParseInt(left), Self::ParseInt(right)) => left == right,
            (Self::Panic(left), Self::Panic(right)) => left == right,
            (
                Self::Custom {
                    kind: left_kind,
                    message: left_message,
                },
                Self::Custom {
                    kind: right_kind,
                    message: right_message,
                },
            ) => left_kind == right_kind && left_message == right_message,
            _ => false,
        }
    }
}

impl From<std::convert::Infallible> for Fault {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
