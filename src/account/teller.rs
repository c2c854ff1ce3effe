use crate::gate::{Authorization, CredentialGate, GateError, Prompt};
use crate::sink::Sink;

use super::{BankAccount, Receipt, deposit, transfer, withdraw};

type AmountOperation = fn(&mut BankAccount, u64) -> Receipt;
type TransferOperation = fn(&mut BankAccount, u64, String) -> Receipt;

/// The only public way to move money in or out of a [`BankAccount`].
///
/// Holds one credential gate per operation, built once at construction, plus
/// the prompt answers are read from and the sink receipts are written to.
/// Every call prompts; nothing carries over between calls.
#[derive(Debug)]
pub struct Teller<P, S> {
    prompt: P,
    sink: S,
    withdraw: CredentialGate<AmountOperation>,
    deposit: CredentialGate<AmountOperation>,
    transfer: CredentialGate<TransferOperation>,
}

impl<P: Prompt, S: Sink> Teller<P, S> {
    /// Creates a teller reading credentials from `prompt` and reporting to
    /// `sink`.
    pub fn new(prompt: P, sink: S) -> Self {
        Self {
            prompt,
            sink,
            withdraw: CredentialGate::new(withdraw as AmountOperation),
            deposit: CredentialGate::new(deposit as AmountOperation),
            transfer: CredentialGate::new(transfer as TransferOperation),
        }
    }

    /// Uses `prompt_text` instead of the default password prompt.
    #[must_use]
    pub fn with_prompt_text(self, prompt_text: impl Into<String>) -> Self {
        let prompt_text = prompt_text.into();
        Self {
            withdraw: self.withdraw.with_prompt_text(prompt_text.clone()),
            deposit: self.deposit.with_prompt_text(prompt_text.clone()),
            transfer: self.transfer.with_prompt_text(prompt_text),
            ..self
        }
    }

    /// Withdraws `amount` after a matching password.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] if the password could not be read.
    pub fn withdraw(
        &mut self,
        account: &mut BankAccount,
        amount: u64,
    ) -> Result<Authorization<Receipt>, GateError> {
        let outcome = self
            .withdraw
            .invoke_on(&mut self.prompt, &self.sink, account, (amount,))?;
        Ok(self.report(outcome))
    }

    /// Deposits `amount` after a matching password.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] if the password could not be read.
    pub fn deposit(
        &mut self,
        account: &mut BankAccount,
        amount: u64,
    ) -> Result<Authorization<Receipt>, GateError> {
        let outcome = self
            .deposit
            .invoke_on(&mut self.prompt, &self.sink, account, (amount,))?;
        Ok(self.report(outcome))
    }

    /// Transfers `amount` to `recipient` after a matching password.
    ///
    /// Only `account` is debited; see [`Movement::Transferred`](super::Movement).
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] if the password could not be read.
    pub fn transfer(
        &mut self,
        account: &mut BankAccount,
        amount: u64,
        recipient: impl Into<String>,
    ) -> Result<Authorization<Receipt>, GateError> {
        let outcome = self.transfer.invoke_on(
            &mut self.prompt,
            &self.sink,
            account,
            (amount, recipient.into()),
        )?;
        Ok(self.report(outcome))
    }

    /// The prompt credentials are read from.
    pub const fn prompt(&self) -> &P {
        &self.prompt
    }

    /// The sink receipts are written to.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    fn report(&self, outcome: Authorization<Receipt>) -> Authorization<Receipt> {
        if let Authorization::Accepted(receipt) = &outcome {
            for line in receipt.lines() {
                self.sink.emit(&line);
            }
        }
        outcome
    }
}
