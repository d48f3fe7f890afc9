//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Days, NaiveDate};
use core_kernel::{AccountId, OwnerId, TransactionId, UnitId, UnitValue};
use domain_ledger::{Account, AccountKind, ActionType, Interest, Transaction, TxnAction};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid AccountKind values
pub fn account_kind_strategy() -> impl Strategy<Value = AccountKind> {
    prop_oneof![
        Just(AccountKind::NRA),
        Just(AccountKind::TFSA),
        Just(AccountKind::RRSP),
        Just(AccountKind::FHSA),
    ]
}

/// Strategy for generating selectable action types (no legacy tags)
pub fn selectable_action_type_strategy() -> impl Strategy<Value = ActionType> {
    prop_oneof![
        Just(ActionType::Deposit),
        Just(ActionType::Withdrawal),
        Just(ActionType::Buy),
        Just(ActionType::Sell),
    ]
}

/// Strategy for generating fiat currency symbols
pub fn currency_symbol_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("USD".to_string()),
        Just("CAD".to_string()),
        Just("EUR".to_string()),
        Just("GBP".to_string()),
        Just("JPY".to_string()),
    ]
}

/// Strategy for generating equity ticker symbols
pub fn ticker_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{1,5}"
}

/// Strategy for generating cash units
pub fn cash_unit_strategy() -> impl Strategy<Value = UnitId> {
    currency_symbol_strategy()
        .prop_map(|symbol| UnitId::cash(symbol).expect("currency symbols are well-formed"))
}

/// Strategy for generating equity units
pub fn equity_unit_strategy() -> impl Strategy<Value = UnitId> {
    ticker_strategy()
        .prop_map(|ticker| UnitId::equity(ticker).expect("tickers are well-formed"))
}

/// Strategy for generating units across all categories
pub fn unit_id_strategy() -> impl Strategy<Value = UnitId> {
    prop_oneof![
        cash_unit_strategy(),
        equity_unit_strategy(),
        ticker_strategy()
            .prop_map(|ticker| UnitId::crypto(ticker).expect("tickers are well-formed")),
    ]
}

/// Strategy for generating positive Decimal amounts
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64, 0u32..4u32).prop_map(|(m, s)| Decimal::new(m, s))
}

/// Strategy for generating fee amounts (zero allowed)
pub fn fee_amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000i64, 0u32..2u32).prop_map(|(m, s)| Decimal::new(m, s))
}

/// Strategy for generating cash legs of an entry
pub fn cash_value_strategy() -> impl Strategy<Value = UnitValue> {
    (positive_amount_strategy(), cash_unit_strategy())
        .prop_map(|(amount, unit)| UnitValue::new(amount, unit))
}

/// Strategy for generating fees denominated in cash
pub fn fee_value_strategy() -> impl Strategy<Value = UnitValue> {
    (fee_amount_strategy(), cash_unit_strategy())
        .prop_map(|(amount, unit)| UnitValue::new(amount, unit))
}

/// Strategy for generating asset legs of a trade
pub fn asset_value_strategy() -> impl Strategy<Value = UnitValue> {
    (positive_amount_strategy(), equity_unit_strategy())
        .prop_map(|(amount, unit)| UnitValue::new(amount, unit))
}

/// Strategy for generating any valid action, legacy interest included
pub fn txn_action_strategy() -> impl Strategy<Value = TxnAction> {
    prop_oneof![
        (cash_value_strategy(), fee_value_strategy())
            .prop_map(|(value, fee)| TxnAction::deposit(value, fee)),
        (cash_value_strategy(), fee_value_strategy())
            .prop_map(|(value, fee)| TxnAction::withdrawal(value, fee)),
        (asset_value_strategy(), cash_value_strategy(), fee_value_strategy())
            .prop_map(|(asset, cash, fee)| TxnAction::buy(asset, cash, fee)),
        (asset_value_strategy(), cash_value_strategy(), fee_value_strategy())
            .prop_map(|(asset, cash, fee)| TxnAction::sell(asset, cash, fee)),
        (cash_value_strategy(), fee_value_strategy())
            .prop_map(|(value, fee)| TxnAction::Interest(Interest { value, fee })),
    ]
}

/// Strategy for generating entry dates within a year
pub fn entry_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..365u64).prop_map(|days| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(days)
    })
}

/// Strategy for generating AccountId
pub fn account_id_strategy() -> impl Strategy<Value = AccountId> {
    any::<[u8; 16]>().prop_map(|bytes| AccountId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating TransactionId
pub fn transaction_id_strategy() -> impl Strategy<Value = TransactionId> {
    any::<[u8; 16]>().prop_map(|bytes| TransactionId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating OwnerId
pub fn owner_id_strategy() -> impl Strategy<Value = OwnerId> {
    any::<[u8; 16]>().prop_map(|bytes| OwnerId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating account names (never blank)
pub fn account_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{3,12}( [A-Za-z]{3,12})?"
}

/// Strategy for generating valid accounts
pub fn account_strategy() -> impl Strategy<Value = Account> {
    (
        account_id_strategy(),
        account_name_strategy(),
        owner_id_strategy(),
        account_kind_strategy(),
    )
        .prop_map(|(id, name, owner, kind)| {
            Account::new(id, name, owner, kind).expect("generated names are never blank")
        })
}

/// Strategy for generating valid transactions
pub fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (
        transaction_id_strategy(),
        account_id_strategy(),
        entry_date_strategy(),
        txn_action_strategy(),
    )
        .prop_map(|(id, account, date, action)| Transaction::new(id, account, date, action))
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_kinds_are_selectable(kind in account_kind_strategy()) {
            prop_assert!(AccountKind::ALL.contains(&kind));
        }

        #[test]
        fn selectable_action_types_exclude_legacy(action_type in selectable_action_type_strategy()) {
            prop_assert!(!action_type.is_legacy());
        }

        #[test]
        fn generated_names_are_never_blank(name in account_name_strategy()) {
            prop_assert!(!name.trim().is_empty());
        }

        #[test]
        fn generated_units_round_trip(unit in unit_id_strategy()) {
            let parsed: UnitId = unit.to_string().parse().unwrap();
            prop_assert_eq!(parsed, unit);
        }

        #[test]
        fn fee_amounts_are_never_negative(fee in fee_value_strategy()) {
            prop_assert!(fee.amount() >= Decimal::ZERO);
        }
    }
}
