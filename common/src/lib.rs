//! Common types and utilities for the bank
//!
//! This library contains the domain models shared by the bank registry and its
//! callers: customers, savings and checking accounts, the account-number
//! sequence, and a unified error type.

pub mod error;
pub mod model;
pub mod sequence;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use model::account::{Account, AccountKind, AccountNumber};
pub use model::customer::{Customer, CustomerId};
pub use sequence::AccountNumberGenerator;
