//! Ledger Domain - Typed Ledger Entries with Safe Polymorphic Actions
//!
//! This crate implements the data model of a personal investment ledger:
//! accounts, dated transactions, and a closed set of transaction actions
//! discriminated by a `"type"` tag.
//!
//! # Action Shapes
//!
//! Each action tag fixes the payload fields that travel with it:
//! - **Deposit / Withdrawal**: a `value` and a `fee`
//! - **Buy / Sell**: an `asset` leg, a `cash` leg, and a `fee`
//! - **Interest**: a `value` and a `fee` (legacy records only)
//!
//! Accessing a field that belongs to a different tag is a compile error, and
//! wire records carrying fields from the wrong shape fail deserialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{Account, AccountKind, Transaction, TxnAction};
//!
//! let account = Account::new(account_id, "Broker CAD", owner_id, AccountKind::TFSA)?;
//!
//! let txn = Transaction::new(
//!     txn_id,
//!     account.id,
//!     date,
//!     TxnAction::deposit(value, fee),
//! );
//!
//! account.accepts(&txn)?;
//! ```

pub mod account;
pub mod transaction;
pub mod action;
pub mod error;

pub use account::{Account, AccountKind};
pub use transaction::Transaction;
pub use action::{ActionType, Buy, Deposit, Interest, Sell, TxnAction, Withdrawal};
pub use error::LedgerError;
