use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What an account operation did to the balance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Movement {
    /// `amount` left the account.
    Withdrawn(u64),
    /// `amount` entered the account.
    Deposited(u64),
    /// `amount` left the account towards `recipient`.
    Transferred {
        /// Amount debited.
        amount: u64,
        /// Identity the transfer was addressed to.
        recipient: String,
    },
    /// The balance could not cover `requested`; nothing changed.
    InsufficientFunds {
        /// Amount asked for.
        requested: u64,
    },
    /// Adding `requested` would exceed the largest representable balance;
    /// nothing changed.
    Overflow {
        /// Amount asked for.
        requested: u64,
    },
}

impl fmt::Display for Movement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Withdrawn(amount) => write!(formatter, "{amount} withdrawn."),
            Self::Deposited(amount) => write!(formatter, "{amount} deposited."),
            Self::Transferred { amount, recipient } => {
                write!(formatter, "{amount} transfered to {recipient}")
            }
            Self::InsufficientFunds { .. } => formatter.write_str("denied, insufficient funds."),
            Self::Overflow { .. } => formatter.write_str("denied, balance limit reached."),
        }
    }
}

/// The outcome of one account operation and the balance afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Receipt {
    /// What happened.
    pub movement: Movement,
    /// Balance after the operation.
    pub balance: u64,
}

impl Receipt {
    /// Returns `true` if the balance changed.
    pub const fn is_applied(&self) -> bool {
        !matches!(
            self.movement,
            Movement::InsufficientFunds { .. } | Movement::Overflow { .. }
        )
    }

    /// The console lines reporting this receipt.
    pub fn lines(&self) -> [String; 2] {
        [
            self.movement.to_string(),
            format!("Current balance is: {}", self.balance),
        ]
    }
}
