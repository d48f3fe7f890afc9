//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common ledger entities. These fixtures
//! are designed to be consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{AccountId, OwnerId, TransactionId, UnitId, UnitValue};
use domain_ledger::{Account, AccountKind, Interest, TxnAction};
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for unit descriptor test data
pub struct UnitFixtures;

impl UnitFixtures {
    /// US dollar cash unit
    pub fn cash_usd() -> UnitId {
        UnitId::cash("USD").unwrap()
    }

    /// Canadian dollar cash unit
    pub fn cash_cad() -> UnitId {
        UnitId::cash("CAD").unwrap()
    }

    /// A listed equity unit
    pub fn equity_aapl() -> UnitId {
        UnitId::equity("AAPL").unwrap()
    }

    /// An index fund equity unit
    pub fn equity_voo() -> UnitId {
        UnitId::equity("VOO").unwrap()
    }

    /// A crypto currency unit
    pub fn crypto_btc() -> UnitId {
        UnitId::crypto("BTC").unwrap()
    }
}

/// Fixture for denominated amount test data
pub struct ValueFixtures;

impl ValueFixtures {
    /// A standard USD deposit amount
    pub fn usd_100() -> UnitValue {
        UnitValue::new(dec!(100), UnitFixtures::cash_usd())
    }

    /// A standard CAD deposit amount
    pub fn cad_500() -> UnitValue {
        UnitValue::new(dec!(500), UnitFixtures::cash_cad())
    }

    /// The cash leg of a standard trade
    pub fn usd_1500() -> UnitValue {
        UnitValue::new(dec!(1500), UnitFixtures::cash_usd())
    }

    /// A zero USD fee
    pub fn usd_zero() -> UnitValue {
        UnitValue::new(dec!(0), UnitFixtures::cash_usd())
    }

    /// A zero CAD fee
    pub fn cad_zero() -> UnitValue {
        UnitValue::new(dec!(0), UnitFixtures::cash_cad())
    }

    /// A small USD trading fee
    pub fn usd_fee() -> UnitValue {
        UnitValue::new(dec!(1), UnitFixtures::cash_usd())
    }

    /// The asset leg of a standard trade
    pub fn aapl_10() -> UnitValue {
        UnitValue::new(dec!(10), UnitFixtures::equity_aapl())
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard entry date
    pub fn entry_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic account ID for testing
    pub fn account_id() -> AccountId {
        AccountId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a second deterministic account ID for mismatch tests
    pub fn other_account_id() -> AccountId {
        AccountId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a deterministic transaction ID for testing
    pub fn transaction_id() -> TransactionId {
        TransactionId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }

    /// Creates a deterministic owner ID for testing
    pub fn owner_id() -> OwnerId {
        OwnerId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440004").unwrap())
    }
}

/// Fixture for account test data
pub struct AccountFixtures;

impl AccountFixtures {
    /// A non-registered account
    pub fn nra() -> Account {
        Account::new(
            IdFixtures::account_id(),
            "Margin account",
            IdFixtures::owner_id(),
            AccountKind::NRA,
        )
        .unwrap()
    }

    /// A registered TFSA account
    pub fn tfsa() -> Account {
        Account::new(
            IdFixtures::account_id(),
            "Tax-free savings",
            IdFixtures::owner_id(),
            AccountKind::TFSA,
        )
        .unwrap()
        .with_alias("TFSA")
    }
}

/// Fixture for transaction action test data
pub struct ActionFixtures;

impl ActionFixtures {
    /// A USD deposit with no fee
    pub fn deposit_usd_100() -> TxnAction {
        TxnAction::deposit(ValueFixtures::usd_100(), ValueFixtures::usd_zero())
    }

    /// A CAD deposit with no fee, valid for registered plans
    pub fn deposit_cad_500() -> TxnAction {
        TxnAction::deposit(ValueFixtures::cad_500(), ValueFixtures::cad_zero())
    }

    /// A USD withdrawal with no fee
    pub fn withdrawal_usd_100() -> TxnAction {
        TxnAction::withdrawal(ValueFixtures::usd_100(), ValueFixtures::usd_zero())
    }

    /// A standard equity purchase
    pub fn buy_aapl() -> TxnAction {
        TxnAction::buy(
            ValueFixtures::aapl_10(),
            ValueFixtures::usd_1500(),
            ValueFixtures::usd_fee(),
        )
    }

    /// A standard equity sale
    pub fn sell_aapl() -> TxnAction {
        TxnAction::sell(
            ValueFixtures::aapl_10(),
            ValueFixtures::usd_1500(),
            ValueFixtures::usd_fee(),
        )
    }

    /// A legacy interest record, as persisted entries carry it
    pub fn legacy_interest() -> TxnAction {
        TxnAction::Interest(Interest {
            value: ValueFixtures::usd_100(),
            fee: ValueFixtures::usd_zero(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_fixtures_are_deterministic() {
        let id1 = IdFixtures::account_id();
        let id2 = IdFixtures::account_id();
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_account_ids_are_distinct() {
        assert_ne!(IdFixtures::account_id(), IdFixtures::other_account_id());
    }

    #[test]
    fn test_account_fixtures_use_canonical_ids() {
        let account = AccountFixtures::tfsa();
        assert_eq!(account.id, IdFixtures::account_id());
        assert_eq!(account.owner, IdFixtures::owner_id());
    }

    #[test]
    fn test_cad_deposit_targets_cad() {
        let action = ActionFixtures::deposit_cad_500();
        assert_eq!(action.to_string(), "Deposit 500 CAD");
    }
}
