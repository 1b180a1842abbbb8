//! Configuration for the bank

use std::env;

use common::error::{Error, Result};
use common::sequence::DEFAULT_FIRST_ACCOUNT_NUMBER;

/// Environment variable holding the first account number
pub const FIRST_ACCOUNT_NUMBER_VAR: &str = "BANK_FIRST_ACCOUNT_NUMBER";

/// Configuration for the bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    /// First number handed out by this bank's account-number sequence
    pub first_account_number: u64,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            first_account_number: env::var(FIRST_ACCOUNT_NUMBER_VAR)
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_FIRST_ACCOUNT_NUMBER),
        }
    }
}

impl BankConfig {
    /// Create a configuration from the environment (and a `.env` file, if any).
    ///
    /// Unlike [`Default`], an unparsable value is reported instead of ignored.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        match env::var(FIRST_ACCOUNT_NUMBER_VAR) {
            Ok(value) => Self::parse_first_account_number(&value).map(Self::new),
            Err(env::VarError::NotPresent) => Ok(Self::new(DEFAULT_FIRST_ACCOUNT_NUMBER)),
            Err(e) => Err(Error::ConfigurationError(format!("{}: {}", FIRST_ACCOUNT_NUMBER_VAR, e))),
        }
    }

    /// Create a new configuration with custom values
    pub fn new(first_account_number: u64) -> Self {
        Self { first_account_number }
    }

    fn parse_first_account_number(value: &str) -> Result<u64> {
        value.trim().parse().map_err(|e| {
            Error::ConfigurationError(format!(
                "{} must be a non-negative integer, got '{}': {}",
                FIRST_ACCOUNT_NUMBER_VAR, value, e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert_eq!(BankConfig::new(5000).first_account_number, 5000);
    }

    #[test]
    fn test_parse_first_account_number() {
        assert_eq!(BankConfig::parse_first_account_number("2000").unwrap(), 2000);
        assert_eq!(BankConfig::parse_first_account_number(" 42 ").unwrap(), 42);

        let err = BankConfig::parse_first_account_number("-1").unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));
        assert!(BankConfig::parse_first_account_number("abc").is_err());
    }
}
