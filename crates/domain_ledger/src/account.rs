//! Account types for the investment ledger
//!
//! This module defines the account entity and the closed set of account
//! classifications offered when one is created.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{AccountId, OwnerId};

use crate::action::TxnAction;
use crate::error::LedgerError;
use crate::transaction::Transaction;

/// Classification of an investment account
///
/// `NRA` is a plain non-registered account; the remaining kinds are Canadian
/// registered plans, which restrict cash movements to Canadian dollars
/// (see [`Account::accepts`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    /// Non-registered account
    NRA,
    /// Tax-Free Savings Account
    TFSA,
    /// Registered Retirement Savings Plan
    RRSP,
    /// First Home Savings Account
    FHSA,
}

impl AccountKind {
    /// The account kinds offered at creation, in the order they are offered
    pub const ALL: [AccountKind; 4] = [
        AccountKind::NRA,
        AccountKind::TFSA,
        AccountKind::RRSP,
        AccountKind::FHSA,
    ];

    /// Returns the canonical token
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::NRA => "NRA",
            AccountKind::TFSA => "TFSA",
            AccountKind::RRSP => "RRSP",
            AccountKind::FHSA => "FHSA",
        }
    }

    /// Returns true for the Canadian registered plans
    pub fn is_registered(&self) -> bool {
        matches!(
            self,
            AccountKind::TFSA | AccountKind::RRSP | AccountKind::FHSA
        )
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NRA" => Ok(AccountKind::NRA),
            "TFSA" => Ok(AccountKind::TFSA),
            "RRSP" => Ok(AccountKind::RRSP),
            "FHSA" => Ok(AccountKind::FHSA),
            _ => Err(LedgerError::UnknownAccountKind(s.to_string())),
        }
    }
}

/// An investment account
///
/// Accounts are referenced by [`Transaction`]s through their id; the model
/// does not own the transactions themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned externally
    pub id: AccountId,
    /// Display name, validated at construction
    pub name: String,
    /// Short label, may be empty
    pub alias: String,
    /// Identifier of the owning party
    pub owner: OwnerId,
    /// Account classification
    pub kind: AccountKind,
}

impl Account {
    /// Creates a new account
    ///
    /// The name must contain at least one non-whitespace character; the
    /// alias starts empty and may stay empty.
    pub fn new(
        id: AccountId,
        name: impl Into<String>,
        owner: OwnerId,
        kind: AccountKind,
    ) -> Result<Self, LedgerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::EmptyAccountName);
        }

        Ok(Self {
            id,
            name,
            alias: String::new(),
            owner,
            kind,
        })
    }

    /// Sets the alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Checks whether this account can record the given transaction
    ///
    /// The transaction must reference this account. Registered plans only
    /// accept deposits and withdrawals denominated in `cash:CAD`; trades and
    /// legacy interest records are not restricted.
    pub fn accepts(&self, transaction: &Transaction) -> Result<(), LedgerError> {
        if transaction.account != self.id {
            return Err(LedgerError::AccountMismatch {
                expected: self.id,
                target: transaction.account,
            });
        }

        if self.kind.is_registered() {
            let (unit, operation) = match &transaction.action {
                TxnAction::Deposit(deposit) => (deposit.value.unit(), "deposit"),
                TxnAction::Withdrawal(withdrawal) => {
                    (withdrawal.value.unit(), "withdrawal")
                }
                _ => return Ok(()),
            };

            if !unit.is_cash("CAD") {
                return Err(LedgerError::RegisteredPlanCurrency {
                    kind: self.kind,
                    operation: operation.to_string(),
                });
            }
        }

        Ok(())
    }
}
