//! Error types for the bank
//!
//! This module provides the unified error type for customers, accounts and the
//! bank registry. Every failure is surfaced to the caller immediately; no
//! operation retries internally and no failed operation leaves a partial
//! mutation behind.

use std::fmt::Display;
use thiserror::Error;

use crate::model::account::AccountNumber;

/// Bank error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed input: empty names, non-positive amounts, negative rates or
    /// limits, or a customer that is not registered with the bank
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A withdrawal exceeded what the account allows
    #[error("Insufficient funds in account {account_number}. Available: {available}, Requested: {requested}")]
    InsufficientFunds {
        /// Account the withdrawal was attempted on
        account_number: AccountNumber,
        /// Ceiling for this withdrawal (balance, plus overdraft for checking)
        available: f64,
        /// Amount that was requested
        requested: f64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl Error {
    /// Shorthand for building an `InvalidArgument` error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Error::InsufficientFunds { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::InvalidArgument(msg) => Error::InvalidArgument(format!("{}: {}", context, msg)),
                Error::ConfigurationError(msg) => Error::ConfigurationError(format!("{}: {}", context, msg)),
                // Structured payload, callers build their own message from it
                e @ Error::InsufficientFunds { .. } => e,
            }
        })
    }
}
