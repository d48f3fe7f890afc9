//! Comprehensive unit tests for the Identifiers module
//!
//! Tests cover all identifier types, their creation, parsing,
//! conversion, and display formatting.

use core_kernel::{AccountId, OwnerId, TransactionId};
use uuid::Uuid;

mod account_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = AccountId::new();
        let id2 = AccountId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = AccountId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_display_format() {
        let id = AccountId::new();
        let display = id.to_string();
        assert!(display.starts_with("ACC-"));
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = AccountId::new();
        let string = original.to_string();
        let parsed: AccountId = string.parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let id: AccountId = uuid.into();
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }

    #[test]
    fn test_json_serialization() {
        let id = AccountId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

mod transaction_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = TransactionId::new();
        let id2 = TransactionId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = TransactionId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = TransactionId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_display_format() {
        let id = TransactionId::new();
        let display = id.to_string();
        assert!(display.starts_with("TXN-"));
    }

    #[test]
    fn test_roundtrip() {
        let original = TransactionId::new();
        let string = original.to_string();
        let parsed: TransactionId = string.parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_json_is_bare_uuid() {
        let uuid = Uuid::new_v4();
        let id = TransactionId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));
    }
}

mod owner_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = OwnerId::new();
        let id2 = OwnerId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_display_format() {
        let id = OwnerId::new();
        let display = id.to_string();
        assert!(display.starts_with("OWN-"));
    }

    #[test]
    fn test_from_str_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: OwnerId = uuid.to_string().parse().unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }
}

mod cross_type_tests {
    use super::*;

    #[test]
    fn test_different_id_types_are_distinct() {
        // Same UUID should create different identifier instances
        // that are type-safe (can't mix AccountId with TransactionId)
        let uuid = Uuid::new_v4();
        let account_id = AccountId::from_uuid(uuid);
        let transaction_id = TransactionId::from_uuid(uuid);

        // They contain the same UUID but are different types
        assert_eq!(*account_id.as_uuid(), *transaction_id.as_uuid());
    }

    #[test]
    fn test_wrong_prefix_is_not_stripped() {
        let id = AccountId::new();
        let reinterpreted = id.to_string().parse::<TransactionId>();
        assert!(reinterpreted.is_err());
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn test_nil_uuid() {
        let nil_uuid = Uuid::nil();
        let id = AccountId::from_uuid(nil_uuid);
        assert!(id.as_uuid().is_nil());
    }

    #[test]
    fn test_max_uuid() {
        let max_uuid = Uuid::max();
        let id = AccountId::from_uuid(max_uuid);
        assert_eq!(*id.as_uuid(), max_uuid);
    }

    #[test]
    fn test_invalid_string_fails() {
        assert!("not-a-uuid".parse::<AccountId>().is_err());
        assert!("".parse::<AccountId>().is_err());
    }
}
