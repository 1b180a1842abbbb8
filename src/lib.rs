//! In-memory bank: customers, savings and checking accounts, and the registry
//! that ties them together.
//!
//! This is a metapackage re-exporting the workspace members so callers and the
//! cross-crate tests in `tests/` can depend on a single crate.

pub use bank_service::{Bank, BankConfig};
pub use common::{Account, AccountKind, AccountNumber, AccountNumberGenerator, Customer, CustomerId, Error, ErrorExt, Result};
