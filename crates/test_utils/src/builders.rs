//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{AccountId, OwnerId, TransactionId};
use domain_ledger::{Account, AccountKind, Transaction, TxnAction};

use crate::fixtures::{ActionFixtures, IdFixtures, TemporalFixtures};

/// Builder for constructing test accounts
pub struct TestAccountBuilder {
    id: AccountId,
    name: String,
    alias: String,
    owner: OwnerId,
    kind: AccountKind,
}

impl Default for TestAccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAccountBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: IdFixtures::account_id(),
            name: "Test account".to_string(),
            alias: String::new(),
            owner: IdFixtures::owner_id(),
            kind: AccountKind::NRA,
        }
    }

    /// Sets the account ID
    pub fn with_id(mut self, id: AccountId) -> Self {
        self.id = id;
        self
    }

    /// Sets the account name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Sets the owner ID
    pub fn with_owner(mut self, owner: OwnerId) -> Self {
        self.owner = owner;
        self
    }

    /// Sets the account kind
    pub fn with_kind(mut self, kind: AccountKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builds the account
    pub fn build(self) -> Account {
        Account::new(self.id, self.name, self.owner, self.kind)
            .expect("builder defaults produce a valid account")
            .with_alias(self.alias)
    }
}

/// Builder for constructing test transactions
pub struct TestTransactionBuilder {
    id: TransactionId,
    account: AccountId,
    date: NaiveDate,
    action: TxnAction,
}

impl Default for TestTransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTransactionBuilder {
    /// Creates a new builder with default values (a USD deposit)
    pub fn new() -> Self {
        Self {
            id: IdFixtures::transaction_id(),
            account: IdFixtures::account_id(),
            date: TemporalFixtures::entry_date(),
            action: ActionFixtures::deposit_usd_100(),
        }
    }

    /// Sets the transaction ID
    pub fn with_id(mut self, id: TransactionId) -> Self {
        self.id = id;
        self
    }

    /// Sets the account reference
    pub fn with_account(mut self, account: AccountId) -> Self {
        self.account = account;
        self
    }

    /// Sets the entry date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the recorded action
    pub fn with_action(mut self, action: TxnAction) -> Self {
        self.action = action;
        self
    }

    /// Builds the transaction
    pub fn build(self) -> Transaction {
        Transaction::new(self.id, self.account, self.date, self.action)
    }
}
