//! wrapkit demo
//!
//! Walks through both wrappers: a division by zero and a read of a missing
//! file are reported by the fault-logging wrapper, then a withdraw, deposit
//! and transfer each ask for the account password (hidden input on a terminal,
//! one line per answer when stdin is piped).
//!
//! Each intercepted fault prints a single `unable to execute` line. Set
//! `RUST_LOG=wrapkit=debug` to also see the tracing events behind it.

use std::io::IsTerminal;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wrapkit::Invoke;
use wrapkit::account::{BankAccount, Teller};
use wrapkit::config::DemoConfig;
use wrapkit::fault::{Fault, catch_faults};
use wrapkit::gate::{LinePrompt, Prompt, TerminalPrompt};
use wrapkit::sink::Console;

#[derive(Debug, Parser)]
#[command(name = "wrapkit", about = "Fault-logging and credential-gated call wrappers")]
struct Cli {
    /// Account holder name (overrides WRAPKIT_ACCOUNT_NAME)
    #[arg(long)]
    name: Option<String>,

    /// Opening balance (overrides WRAPKIT_OPENING_BALANCE)
    #[arg(long)]
    opening_balance: Option<u64>,

    /// Amount to withdraw
    #[arg(long, default_value_t = 50)]
    withdraw: u64,

    /// Amount to deposit
    #[arg(long, default_value_t = 25)]
    deposit: u64,

    /// Amount to transfer
    #[arg(long, default_value_t = 30)]
    transfer: u64,

    /// Transfer recipient
    #[arg(long, default_value = "bob")]
    recipient: String,

    /// File the fault-logging walkthrough tries to read
    #[arg(long, default_value = "nonexistent_file.txt")]
    file: String,

    /// Only run the fault-logging walkthrough
    #[arg(long)]
    skip_account: bool,
}

fn divide(numerator: i64, denominator: i64) -> Result<i64, Fault> {
    numerator.checked_div(denominator).ok_or(Fault::ZeroDivision)
}

fn read_file(path: &str) -> Result<String, Fault> {
    Ok(std::fs::read_to_string(Path::new(path))?)
}

#[wrapkit::catch_faults]
fn divider(numerator: i64, denominator: i64) -> i64 {
    numerator / denominator
}

/// Runs `walkthrough` with the process panic hook replaced by a tracing
/// event, so faults the wrappers intercept do not also print a panic report.
fn with_quiet_panics<T>(walkthrough: impl FnOnce() -> T) -> T {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|info| {
        tracing::debug!(%info, "panic raised inside a wrapped call");
    }));
    let outcome = walkthrough();
    std::panic::set_hook(default_hook);
    outcome
}

fn fault_walkthrough(file: &str) {
    let wrapped_divide = catch_faults(divide);
    if let Ok(quotient) = wrapped_divide.invoke((10, 4)) {
        println!("10 / 4 = {quotient}");
    }
    if let Err(fault) = wrapped_divide.invoke((2, 0)) {
        tracing::debug!(%fault, "checked division refused");
    }
    if let Err(fault) = divider(2, 0) {
        tracing::debug!(%fault, "attributed division refused");
    }

    let wrapped_read = catch_faults(read_file);
    match wrapped_read.invoke((file,)) {
        Ok(contents) => println!("{} bytes read from {file}", contents.len()),
        Err(fault) => tracing::debug!(%fault, file, "read refused"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    with_quiet_panics(|| fault_walkthrough(&cli.file));

    if cli.skip_account {
        return Ok(());
    }

    let config = DemoConfig::from_env().context("account walkthrough needs a password")?;
    tracing::info!(?config, "configuration loaded");

    let mut account = BankAccount::with_balance(
        cli.name.unwrap_or(config.account_name),
        config.password,
        cli.opening_balance.unwrap_or(config.opening_balance),
    );
    let prompt: Box<dyn Prompt> = if std::io::stdin().is_terminal() {
        Box::new(TerminalPrompt)
    } else {
        Box::new(LinePrompt::stdio())
    };
    let mut teller = Teller::new(prompt, Console).with_prompt_text(config.prompt_text);

    teller.withdraw(&mut account, cli.withdraw)?;
    teller.deposit(&mut account, cli.deposit)?;
    teller.transfer(&mut account, cli.transfer, cli.recipient)?;

    tracing::info!(account = account.name(), balance = account.balance(), "session finished");
    Ok(())
}
