//! Core Kernel - Foundational types for the ledger model
//!
//! This crate provides the fundamental building blocks used across the domain
//! modules:
//! - Unit descriptors and denominated amounts with precise decimal arithmetic
//! - Strongly-typed identifiers for ledger entities

pub mod identifiers;
pub mod unit;

pub use identifiers::{AccountId, OwnerId, TransactionId};
pub use unit::{UnitError, UnitId, UnitValue};
