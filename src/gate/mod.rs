//! Credential-gated wrapper.
//!
//! [`gate`] takes a method-like target (anything implementing
//! [`InvokeOn`]) and returns a [`CredentialGate`]. Every call through the gate
//! starts over in the same state:
//!
//! ```text
//! AwaitingCredential ──match──▶ Authorized ──▶ Executed   (Accepted(value))
//!         │
//!         └──mismatch──▶ Denied ──▶ Rejected              (Denied)
//! ```
//!
//! Nothing about an attempt is remembered: no lockout, no retry counter.
//!
//! # Examples
//!
//! ```rust
//! use wrapkit::gate::{Authorization, Credential, Guarded, ScriptedPrompt, gate};
//! use wrapkit::sink::Transcript;
//!
//! struct Vault {
//!     credential: Credential,
//!     contents: Vec<String>,
//! }
//!
//! impl Guarded for Vault {
//!     fn credential(&self) -> &Credential {
//!         &self.credential
//!     }
//! }
//!
//! fn store(vault: &mut Vault, item: &str) -> usize {
//!     vault.contents.push(item.to_string());
//!     vault.contents.len()
//! }
//!
//! let mut vault = Vault { credential: "open sesame".into(), contents: Vec::new() };
//! let gated_store = gate(store);
//! let transcript = Transcript::new();
//! let mut prompt = ScriptedPrompt::new(["open sesame", "guess"]);
//!
//! let accepted = gated_store.invoke_on(&mut prompt, &transcript, &mut vault, ("gold",));
//! let denied = gated_store.invoke_on(&mut prompt, &transcript, &mut vault, ("lead",));
//!
//! assert_eq!(accepted.unwrap(), Authorization::Accepted(1));
//! assert_eq!(denied.unwrap(), Authorization::Denied);
//! assert_eq!(vault.contents, vec!["gold"]);
//! ```

mod credential;
mod prompt;

pub use credential::{Credential, Guarded};
pub use prompt::{LinePrompt, Prompt, ScriptedPrompt};
#[cfg(feature = "terminal")]
pub use prompt::TerminalPrompt;

use std::borrow::Cow;
use std::io;

use thiserror::Error;

use crate::invoke::InvokeOn;
use crate::sink::Sink;

/// Prompt text shown when none is configured.
pub const DEFAULT_PROMPT_TEXT: &str = "Enter Password: ";

/// Line emitted when the credential matches.
pub const ACCEPTED_LINE: &str = "password accepted";

/// Line emitted when the credential does not match.
pub const DENIED_LINE: &str = "incorrect password, request denied";

/// Wraps `target` behind a credential prompt.
pub const fn gate<F>(target: F) -> CredentialGate<F> {
    CredentialGate::new(target)
}

/// How a gated call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authorization<T> {
    /// The credential matched and the target produced this value.
    Accepted(T),
    /// The credential did not match; the target was not invoked.
    Denied,
}

impl<T> Authorization<T> {
    /// Returns `true` for [`Authorization::Accepted`].
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Returns `true` for [`Authorization::Denied`].
    pub const fn is_denied(&self) -> bool {
        matches!(self, Self::Denied)
    }

    /// Converts into the accepted value, if any.
    pub fn accepted(self) -> Option<T> {
        match self {
            Self::Accepted(value) => Some(value),
            Self::Denied => None,
        }
    }

    /// Maps the accepted value.
    pub fn map<U, F: FnOnce(T) -> U>(self, function: F) -> Authorization<U> {
        match self {
            Self::Accepted(value) => Authorization::Accepted(function(value)),
            Self::Denied => Authorization::Denied,
        }
    }
}

/// The credential prompt could not be answered.
#[derive(Debug, Error)]
pub enum GateError {
    /// Reading from the prompt channel failed or the channel was closed.
    #[error("failed to read credential: {0}")]
    Prompt(#[from] io::Error),
}

/// A method-like callable that runs only after a matching credential.
///
/// The target is fixed at construction. Built by [`gate`].
#[derive(Debug, Clone)]
pub struct CredentialGate<F> {
    target: F,
    prompt_text: Cow<'static, str>,
}

impl<F> CredentialGate<F> {
    /// Creates the gate with [`DEFAULT_PROMPT_TEXT`].
    pub const fn new(target: F) -> Self {
        Self {
            target,
            prompt_text: Cow::Borrowed(DEFAULT_PROMPT_TEXT),
        }
    }

    /// Replaces the text shown when prompting.
    #[must_use]
    pub fn with_prompt_text(mut self, prompt_text: impl Into<Cow<'static, str>>) -> Self {
        self.prompt_text = prompt_text.into();
        self
    }

    /// The text shown when prompting.
    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    /// Prompts once, then runs the target against `receiver` only if the
    /// answer matches the receiver's credential.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Prompt`] if no answer could be read. The target is
    /// not invoked in that case.
    pub fn invoke_on<R, Args, P, S>(
        &self,
        prompt: &mut P,
        sink: &S,
        receiver: &mut R,
        args: Args,
    ) -> Result<Authorization<F::Output>, GateError>
    where
        F: InvokeOn<R, Args>,
        R: Guarded + ?Sized,
        P: Prompt + ?Sized,
        S: Sink + ?Sized,
    {
        let attempt = prompt.read_credential(&self.prompt_text)?;

        if receiver.credential().matches(&attempt) {
            tracing::info!("credential accepted");
            sink.emit(ACCEPTED_LINE);
            Ok(Authorization::Accepted(self.target.invoke_on(receiver, args)))
        } else {
            tracing::warn!("credential rejected, target not invoked");
            sink.emit(DENIED_LINE);
            Ok(Authorization::Denied)
        }
    }
}
