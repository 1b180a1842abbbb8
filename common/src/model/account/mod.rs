//! Account models and related types

use std::fmt;
use std::mem;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::customer::{Customer, CustomerId};
use crate::sequence::AccountNumberGenerator;

/// Sequential account number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u64);

impl AccountNumber {
    pub fn new(number: u64) -> Self {
        Self(number)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Account variant with its variant-specific parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountKind {
    /// Balance never drops below zero; earns interest on demand
    Savings {
        /// Fraction of the balance credited per application, e.g. 0.01
        interest_rate: f64,
    },
    /// Balance may go negative down to `-overdraft_limit`
    Checking {
        overdraft_limit: f64,
    },
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings { .. } => "Savings",
            AccountKind::Checking { .. } => "Checking",
        }
    }

    /// Lowest balance this variant may hold
    pub fn balance_floor(&self) -> f64 {
        match *self {
            AccountKind::Savings { .. } => 0.0,
            AccountKind::Checking { overdraft_limit } => -overdraft_limit,
        }
    }

    fn validate(&self) -> Result<()> {
        let (value, label) = match *self {
            AccountKind::Savings { interest_rate } => (interest_rate, "Interest rate"),
            AccountKind::Checking { overdraft_limit } => (overdraft_limit, "Overdraft limit"),
        };
        if !value.is_finite() {
            return Err(Error::invalid_argument(format!("{} must be a finite number.", label)));
        }
        if value < 0.0 {
            return Err(Error::invalid_argument(format!("{} cannot be negative.", label)));
        }
        Ok(())
    }
}

/// Account model
///
/// Deserialization goes through [`AccountRecord`] so a stored account is held
/// to the same rules as a freshly opened one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "AccountRecord")]
pub struct Account {
    /// Unique account number
    account_number: AccountNumber,
    /// Owning customer. Resolved through the bank, never copied.
    owner: CustomerId,
    /// Variant and its parameter
    kind: AccountKind,
    /// Current balance
    balance: f64,
    /// Account creation timestamp
    created_at: DateTime<Utc>,
    /// Last balance change timestamp
    updated_at: DateTime<Utc>,
}

/// Unvalidated wire form of an [`Account`]
#[derive(Debug, Deserialize)]
pub struct AccountRecord {
    account_number: AccountNumber,
    owner: CustomerId,
    kind: AccountKind,
    balance: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRecord> for Account {
    type Error = Error;

    fn try_from(record: AccountRecord) -> Result<Self> {
        record.kind.validate()?;
        if !record.balance.is_finite() || record.balance < record.kind.balance_floor() {
            return Err(Error::invalid_argument(format!(
                "Balance {} is out of range for {} account {}.",
                record.balance,
                record.kind.as_str(),
                record.account_number
            )));
        }

        Ok(Self {
            account_number: record.account_number,
            owner: record.owner,
            kind: record.kind,
            balance: record.balance,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl Account {
    /// Create a savings account drawing its number from `numbers`
    pub fn savings(
        owner: &Customer,
        initial_deposit: f64,
        interest_rate: f64,
        numbers: &AccountNumberGenerator,
    ) -> Result<Self> {
        Self::open(owner, initial_deposit, AccountKind::Savings { interest_rate }, numbers)
    }

    /// Create a checking account drawing its number from `numbers`
    pub fn checking(
        owner: &Customer,
        initial_deposit: f64,
        overdraft_limit: f64,
        numbers: &AccountNumberGenerator,
    ) -> Result<Self> {
        Self::open(owner, initial_deposit, AccountKind::Checking { overdraft_limit }, numbers)
    }

    fn open(
        owner: &Customer,
        initial_deposit: f64,
        kind: AccountKind,
        numbers: &AccountNumberGenerator,
    ) -> Result<Self> {
        kind.validate()?;
        if !(initial_deposit >= 0.0) {
            return Err(Error::invalid_argument("Initial deposit cannot be negative."));
        }
        if initial_deposit.is_infinite() {
            return Err(Error::invalid_argument("Initial deposit must be a finite number."));
        }

        // Draw the number last so rejected constructions leave no gaps
        let now = Utc::now();
        Ok(Self {
            account_number: AccountNumber::new(numbers.next()),
            owner: *owner.id(),
            kind,
            balance: initial_deposit,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn owner(&self) -> &CustomerId {
        &self.owner
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_savings(&self) -> bool {
        matches!(self.kind, AccountKind::Savings { .. })
    }

    pub fn is_checking(&self) -> bool {
        matches!(self.kind, AccountKind::Checking { .. })
    }

    /// Interest rate, for savings accounts only
    pub fn interest_rate(&self) -> Option<f64> {
        match self.kind {
            AccountKind::Savings { interest_rate } => Some(interest_rate),
            AccountKind::Checking { .. } => None,
        }
    }

    /// Overdraft limit, for checking accounts only
    pub fn overdraft_limit(&self) -> Option<f64> {
        match self.kind {
            AccountKind::Checking { overdraft_limit } => Some(overdraft_limit),
            AccountKind::Savings { .. } => None,
        }
    }

    /// Largest amount a single withdrawal may take right now
    pub fn available_to_withdraw(&self) -> f64 {
        match self.kind {
            AccountKind::Savings { .. } => self.balance,
            AccountKind::Checking { overdraft_limit } => self.balance + overdraft_limit,
        }
    }

    /// Add funds to the balance
    pub fn deposit(&mut self, amount: f64) -> Result<()> {
        if !(amount > 0.0) {
            return Err(Error::invalid_argument("Deposit amount must be positive."));
        }

        self.balance += amount;
        self.updated_at = Utc::now();
        debug!("Deposited {} to account {}. New balance: {}", amount, self.account_number, self.balance);
        Ok(())
    }

    /// Remove funds from the balance, subject to the variant's sufficiency rule
    pub fn withdraw(&mut self, amount: f64) -> Result<()> {
        if !(amount > 0.0) {
            return Err(Error::invalid_argument("Withdrawal amount must be positive."));
        }

        let available = self.available_to_withdraw();
        if available < amount {
            warn!(
                "Rejected withdrawal of {} from {} account {}: available {}",
                amount,
                self.kind.as_str(),
                self.account_number,
                available
            );
            return Err(Error::InsufficientFunds {
                account_number: self.account_number,
                available,
                requested: amount,
            });
        }

        self.balance -= amount;
        self.updated_at = Utc::now();
        debug!(
            "Withdrew {} from {} account {}. New balance: {}",
            amount,
            self.kind.as_str(),
            self.account_number,
            self.balance
        );
        Ok(())
    }

    /// Credit one period of interest (`balance * interest_rate`) to a savings
    /// account and return the amount credited.
    ///
    /// A zero balance or zero rate credits nothing and returns `Ok(0.0)`.
    /// Checking accounts do not earn interest.
    pub fn apply_interest(&mut self) -> Result<f64> {
        let interest_rate = match self.kind {
            AccountKind::Savings { interest_rate } => interest_rate,
            AccountKind::Checking { .. } => {
                return Err(Error::invalid_argument(format!(
                    "Account {} is not a savings account.",
                    self.account_number
                )));
            }
        };

        let interest = self.balance * interest_rate;
        if interest == 0.0 {
            debug!("No interest accrued on account {}", self.account_number);
            return Ok(0.0);
        }

        self.deposit(interest)?;
        debug!("Applied interest {} to account {}. New balance: {}", interest, self.account_number, self.balance);
        Ok(interest)
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.account_number == other.account_number
            && mem::discriminant(&self.kind) == mem::discriminant(&other.kind)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AccountKind::Savings { interest_rate } => write!(
                f,
                "SavingsAccount{{accountNumber='{}', owner={}, balance={}, interestRate={}}}",
                self.account_number, self.owner, self.balance, interest_rate
            ),
            AccountKind::Checking { overdraft_limit } => write!(
                f,
                "CheckingAccount{{accountNumber='{}', owner={}, balance={}, overdraftLimit={}}}",
                self.account_number, self.owner, self.balance, overdraft_limit
            ),
        }
    }
}
