//! Ledger domain errors

use thiserror::Error;

use core_kernel::AccountId;

use crate::account::AccountKind;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Account name is empty or all whitespace
    #[error("Account name must not be empty")]
    EmptyAccountName,

    /// Token is not one of the account kinds
    #[error("Unknown account kind: {0}")]
    UnknownAccountKind(String),

    /// Token is not one of the action tags
    #[error("Unknown action type: {0}")]
    UnknownActionType(String),

    /// Transaction references a different account
    #[error("Transaction targets account {target}, expected {expected}")]
    AccountMismatch {
        expected: AccountId,
        target: AccountId,
    },

    /// Registered plans only move Canadian dollars on cash entries
    #[error("{kind} account can only {operation} CAD")]
    RegisteredPlanCurrency {
        kind: AccountKind,
        operation: String,
    },
}
