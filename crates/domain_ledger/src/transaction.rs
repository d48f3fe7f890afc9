//! Ledger transactions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, TransactionId};

use crate::action::{ActionType, TxnAction};

/// A dated ledger entry against a single account
///
/// The `account` field is a reference by id; the account itself is owned
/// elsewhere. Entries are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned externally
    pub id: TransactionId,
    /// Account this entry belongs to
    pub account: AccountId,
    /// Date the entry takes effect
    pub date: NaiveDate,
    /// What the entry records
    pub action: TxnAction,
}

impl Transaction {
    /// Creates a new transaction
    pub fn new(
        id: TransactionId,
        account: AccountId,
        date: NaiveDate,
        action: TxnAction,
    ) -> Self {
        Self {
            id,
            account,
            date,
            action,
        }
    }

    /// Returns the discriminant tag of the recorded action
    pub fn action_type(&self) -> ActionType {
        self.action.action_type()
    }
}
