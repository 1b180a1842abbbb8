//! Account number sequence
//!
//! Account numbers come from a single monotonically increasing counter shared
//! by every account variant. The process-wide instance starts at
//! [`DEFAULT_FIRST_ACCOUNT_NUMBER`]; isolated generators can be built and
//! injected where a deterministic sequence is needed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// First number handed out by the process-wide generator
pub const DEFAULT_FIRST_ACCOUNT_NUMBER: u64 = 1000;

lazy_static::lazy_static! {
    static ref GLOBAL: Arc<AccountNumberGenerator> =
        Arc::new(AccountNumberGenerator::starting_at(DEFAULT_FIRST_ACCOUNT_NUMBER));
}

/// Atomically incrementing source of account numbers
#[derive(Debug)]
pub struct AccountNumberGenerator {
    next: AtomicU64,
}

impl AccountNumberGenerator {
    /// Create a generator whose first number is `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// The process-wide generator, starting at 1000
    pub fn global() -> Arc<AccountNumberGenerator> {
        Arc::clone(&GLOBAL)
    }

    /// Draw the next number. Distinct and strictly increasing across threads.
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// The number the next call to [`next`](Self::next) would return
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for AccountNumberGenerator {
    fn default() -> Self {
        Self::starting_at(DEFAULT_FIRST_ACCOUNT_NUMBER)
    }
}
