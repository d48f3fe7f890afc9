//! Transaction action types
//!
//! The action is the polymorphic part of a ledger entry: a closed set of
//! payload shapes discriminated by the `"type"` tag. Cash movements carry a
//! value and a fee; trades carry an asset leg, a cash leg, and a fee. Which
//! fields exist is fully determined by the tag, and records that mix fields
//! from another shape are rejected during deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::UnitValue;

use crate::error::LedgerError;

/// What a ledger entry records
///
/// Serializes with the discriminant inline as a `"type"` field next to the
/// payload fields, e.g.
/// `{"type":"Deposit","value":[100,"cash:USD"],"fee":[0,"cash:USD"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TxnAction {
    /// Cash moved into the account
    Deposit(Deposit),
    /// Cash moved out of the account
    Withdrawal(Withdrawal),
    /// An asset bought with cash
    Buy(Buy),
    /// An asset sold for cash
    Sell(Sell),
    /// Interest earned on idle cash
    ///
    /// Legacy records only; kept readable so persisted entries survive, but
    /// not offered for new entries (see [`ActionType::SELECTABLE`]).
    Interest(Interest),
}

/// Payload of a [`TxnAction::Deposit`] entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Deposit {
    /// Amount moved in
    pub value: UnitValue,
    /// Fee charged for the movement
    pub fee: UnitValue,
}

/// Payload of a [`TxnAction::Withdrawal`] entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Withdrawal {
    /// Amount moved out
    pub value: UnitValue,
    /// Fee charged for the movement
    pub fee: UnitValue,
}

/// Payload of a [`TxnAction::Buy`] entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Buy {
    /// Quantity of the asset acquired
    pub asset: UnitValue,
    /// Cash paid for it
    pub cash: UnitValue,
    /// Fee charged for the trade
    pub fee: UnitValue,
}

/// Payload of a [`TxnAction::Sell`] entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sell {
    /// Quantity of the asset disposed
    pub asset: UnitValue,
    /// Cash received for it
    pub cash: UnitValue,
    /// Fee charged for the trade
    pub fee: UnitValue,
}

/// Payload of a legacy [`TxnAction::Interest`] entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interest {
    /// Interest earned
    pub value: UnitValue,
    /// Fee charged, usually zero
    pub fee: UnitValue,
}

impl TxnAction {
    /// Records cash moved into an account
    pub fn deposit(value: UnitValue, fee: UnitValue) -> Self {
        TxnAction::Deposit(Deposit { value, fee })
    }

    /// Records cash moved out of an account
    pub fn withdrawal(value: UnitValue, fee: UnitValue) -> Self {
        TxnAction::Withdrawal(Withdrawal { value, fee })
    }

    /// Records an asset purchase
    pub fn buy(asset: UnitValue, cash: UnitValue, fee: UnitValue) -> Self {
        TxnAction::Buy(Buy { asset, cash, fee })
    }

    /// Records an asset sale
    pub fn sell(asset: UnitValue, cash: UnitValue, fee: UnitValue) -> Self {
        TxnAction::Sell(Sell { asset, cash, fee })
    }

    /// Returns the discriminant tag of this action
    pub fn action_type(&self) -> ActionType {
        match self {
            TxnAction::Deposit(_) => ActionType::Deposit,
            TxnAction::Withdrawal(_) => ActionType::Withdrawal,
            TxnAction::Buy(_) => ActionType::Buy,
            TxnAction::Sell(_) => ActionType::Sell,
            TxnAction::Interest(_) => ActionType::Interest,
        }
    }

    /// Returns the fee attached to this entry
    pub fn fee(&self) -> &UnitValue {
        match self {
            TxnAction::Deposit(a) => &a.fee,
            TxnAction::Withdrawal(a) => &a.fee,
            TxnAction::Buy(a) => &a.fee,
            TxnAction::Sell(a) => &a.fee,
            TxnAction::Interest(a) => &a.fee,
        }
    }
}

/// One-line summary of the entry, denominated in display units
///
/// Total over every tag, legacy included. Amounts print with the symbol
/// segment of their unit descriptor, never the full `category:symbol` token.
impl fmt::Display for TxnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxnAction::Deposit(a) => write!(f, "Deposit {}", a.value),
            TxnAction::Withdrawal(a) => write!(f, "Withdrawal {}", a.value),
            TxnAction::Buy(a) => write!(f, "Buy {} for {}", a.asset, a.cash),
            TxnAction::Sell(a) => write!(f, "Sell {} for {}", a.asset, a.cash),
            TxnAction::Interest(a) => write!(f, "Earn {} interest", a.value),
        }
    }
}

/// Discriminant-only view of [`TxnAction`]
///
/// Used wherever a tag is needed without a payload: choice lists,
/// classification, token parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Deposit,
    Withdrawal,
    Buy,
    Sell,
    /// Legacy tag, readable but not selectable
    Interest,
}

impl ActionType {
    /// The action types offered for new entries, in the order they are
    /// offered. `Interest` is deliberately absent.
    pub const SELECTABLE: [ActionType; 4] = [
        ActionType::Deposit,
        ActionType::Withdrawal,
        ActionType::Buy,
        ActionType::Sell,
    ];

    /// Returns the serde tag token
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Deposit => "Deposit",
            ActionType::Withdrawal => "Withdrawal",
            ActionType::Buy => "Buy",
            ActionType::Sell => "Sell",
            ActionType::Interest => "Interest",
        }
    }

    /// Returns true for tags that persisted records may carry but new
    /// entries may not
    pub fn is_legacy(&self) -> bool {
        matches!(self, ActionType::Interest)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Deposit" => Ok(ActionType::Deposit),
            "Withdrawal" => Ok(ActionType::Withdrawal),
            "Buy" => Ok(ActionType::Buy),
            "Sell" => Ok(ActionType::Sell),
            "Interest" => Ok(ActionType::Interest),
            _ => Err(LedgerError::UnknownActionType(s.to_string())),
        }
    }
}
