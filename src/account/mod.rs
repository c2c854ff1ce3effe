//! A toy bank account guarded by credential gates.
//!
//! The operations themselves ([`withdraw`], [`deposit`], [`transfer`]) are
//! plain functions over `&mut BankAccount` returning a [`Receipt`]. They are
//! crate-private; the public way to run them is a [`Teller`], which puts
//! each one behind its own [`CredentialGate`](crate::gate::CredentialGate).
//!
//! # Examples
//!
//! ```rust
//! use wrapkit::account::{BankAccount, Teller};
//! use wrapkit::gate::{Authorization, ScriptedPrompt};
//! use wrapkit::sink::Transcript;
//!
//! let mut account = BankAccount::new("alice", "hunter2");
//! let transcript = Transcript::new();
//! let mut teller = Teller::new(ScriptedPrompt::new(["hunter2"]), transcript.clone());
//!
//! let outcome = teller.withdraw(&mut account, 50).unwrap();
//!
//! assert!(outcome.is_accepted());
//! assert_eq!(account.balance(), 50);
//! assert_eq!(
//!     transcript.lines(),
//!     vec!["password accepted", "50 withdrawn.", "Current balance is: 50"]
//! );
//! ```

mod receipt;
mod teller;

pub use receipt::{Movement, Receipt};
pub use teller::Teller;

use crate::gate::{Credential, Guarded};

/// Balance a new account opens with.
pub const DEFAULT_OPENING_BALANCE: u64 = 100;

/// An account holder's balance and password.
///
/// Amounts and balances are `u64`, so a negative withdrawal cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    name: String,
    credential: Credential,
    balance: u64,
}

impl BankAccount {
    /// Opens an account with [`DEFAULT_OPENING_BALANCE`].
    pub fn new(name: impl Into<String>, password: impl Into<Credential>) -> Self {
        Self::with_balance(name, password, DEFAULT_OPENING_BALANCE)
    }

    /// Opens an account with an explicit balance.
    pub fn with_balance(
        name: impl Into<String>,
        password: impl Into<Credential>,
        balance: u64,
    ) -> Self {
        Self {
            name: name.into(),
            credential: password.into(),
            balance,
        }
    }

    /// The account holder's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current balance.
    pub const fn balance(&self) -> u64 {
        self.balance
    }
}

impl Guarded for BankAccount {
    fn credential(&self) -> &Credential {
        &self.credential
    }
}

/// Takes `amount` out if the balance covers it.
pub(crate) fn withdraw(account: &mut BankAccount, amount: u64) -> Receipt {
    let movement = match account.balance.checked_sub(amount) {
        Some(remaining) => {
            account.balance = remaining;
            Movement::Withdrawn(amount)
        }
        None => Movement::InsufficientFunds { requested: amount },
    };
    tracing::debug!(account = %account.name, %movement, balance = account.balance, "withdraw");

    Receipt {
        movement,
        balance: account.balance,
    }
}

/// Adds `amount` to the balance.
pub(crate) fn deposit(account: &mut BankAccount, amount: u64) -> Receipt {
    let movement = match account.balance.checked_add(amount) {
        Some(total) => {
            account.balance = total;
            Movement::Deposited(amount)
        }
        None => Movement::Overflow { requested: amount },
    };
    tracing::debug!(account = %account.name, %movement, balance = account.balance, "deposit");

    Receipt {
        movement,
        balance: account.balance,
    }
}

/// Debits `amount` towards `recipient` if the balance covers it.
///
/// Only the sending side is modelled: no account named `recipient` is
/// credited. The receipt carries the recipient so a caller holding both
/// accounts can settle it.
pub(crate) fn transfer(account: &mut BankAccount, amount: u64, recipient: String) -> Receipt {
    let movement = match account.balance.checked_sub(amount) {
        Some(remaining) => {
            account.balance = remaining;
            Movement::Transferred { amount, recipient }
        }
        None => Movement::InsufficientFunds { requested: amount },
    };
    tracing::debug!(account = %account.name, %movement, balance = account.balance, "transfer");

    Receipt {
        movement,
        balance: account.balance,
    }
}
