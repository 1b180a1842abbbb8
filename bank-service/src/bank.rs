//! Bank registry implementation

use std::sync::Arc;

use common::error::{Error, ErrorExt, Result};
use common::model::account::Account;
use common::model::customer::Customer;
use common::sequence::AccountNumberGenerator;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::BankConfig;

const UNKNOWN_CUSTOMER: &str = "Customer does not exist in this bank.";

/// Registry owning the bank's customers and accounts.
///
/// Both collections are append-only and keep insertion order. Accounts refer
/// to their owner by id, so a customer renamed through
/// [`find_customer_mut`](Bank::find_customer_mut) is seen under the new name
/// by every account via [`owner_of`](Bank::owner_of).
#[derive(Debug, Serialize)]
pub struct Bank {
    /// Registered customers, in registration order
    customers: Vec<Customer>,
    /// Opened accounts, in opening order
    accounts: Vec<Account>,
    /// Source of account numbers
    #[serde(skip)]
    numbers: Arc<AccountNumberGenerator>,
}

impl Bank {
    /// Create a bank numbering its accounts from the process-wide sequence
    pub fn new() -> Self {
        Self::with_generator(AccountNumberGenerator::global())
    }

    /// Create a bank with its own sequence, starting where the config says
    pub fn with_config(config: &BankConfig) -> Self {
        info!("Creating bank with first account number {}", config.first_account_number);
        Self::with_generator(Arc::new(AccountNumberGenerator::starting_at(config.first_account_number)))
    }

    /// Create a bank drawing account numbers from `numbers`
    pub fn with_generator(numbers: Arc<AccountNumberGenerator>) -> Self {
        Self {
            customers: Vec::new(),
            accounts: Vec::new(),
            numbers,
        }
    }

    /// Register a new customer
    pub fn add_customer(&mut self, name: impl Into<String>) -> Result<&Customer> {
        let customer = Customer::new(name)?;
        info!("Added customer: {}", customer);

        self.customers.push(customer);
        Ok(&self.customers[self.customers.len() - 1])
    }

    /// Open a savings account for a registered customer
    pub fn open_savings_account(
        &mut self,
        owner: &Customer,
        initial_deposit: f64,
        interest_rate: f64,
    ) -> Result<&mut Account> {
        self.ensure_registered(owner)?;

        let account = Account::savings(owner, initial_deposit, interest_rate, &self.numbers)
            .with_context(|| format!("Cannot open savings account for customer {}", owner.id()))?;
        info!("Opened savings account: {}", account);

        Ok(self.push_account(account))
    }

    /// Open a checking account for a registered customer
    pub fn open_checking_account(
        &mut self,
        owner: &Customer,
        initial_deposit: f64,
        overdraft_limit: f64,
    ) -> Result<&mut Account> {
        self.ensure_registered(owner)?;

        let account = Account::checking(owner, initial_deposit, overdraft_limit, &self.numbers)
            .with_context(|| format!("Cannot open checking account for customer {}", owner.id()))?;
        info!("Opened checking account: {}", account);

        Ok(self.push_account(account))
    }

    /// Find an account by the exact string form of its number
    pub fn find_account(&self, account_number: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|acc| acc.account_number().to_string() == account_number)
    }

    /// Find an account by number for deposit, withdrawal or interest
    pub fn find_account_mut(&mut self, account_number: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|acc| acc.account_number().to_string() == account_number)
    }

    /// Find a customer by the exact string form of their id
    pub fn find_customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|cust| cust.id().to_string() == customer_id)
    }

    /// Find a customer by id, e.g. to rename them
    pub fn find_customer_mut(&mut self, customer_id: &str) -> Option<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|cust| cust.id().to_string() == customer_id)
    }

    /// Resolve the registered customer owning `account`
    pub fn owner_of(&self, account: &Account) -> Option<&Customer> {
        self.customers.iter().find(|cust| cust.id() == account.owner())
    }

    /// All accounts owned by a registered customer, in the order they were opened
    pub fn get_accounts_for_customer(&self, customer: &Customer) -> Result<Vec<&Account>> {
        self.ensure_registered(customer)?;

        let accounts: Vec<&Account> = self
            .accounts
            .iter()
            .filter(|acc| acc.owner() == customer.id())
            .collect();
        debug!("Found {} accounts for customer {}", accounts.len(), customer.id());

        Ok(accounts)
    }

    pub fn get_all_customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn get_all_accounts(&self) -> &[Account] {
        &self.accounts
    }

    fn ensure_registered(&self, customer: &Customer) -> Result<()> {
        if !self.customers.contains(customer) {
            return Err(Error::invalid_argument(UNKNOWN_CUSTOMER));
        }
        Ok(())
    }

    fn push_account(&mut self, account: Account) -> &mut Account {
        self.accounts.push(account);
        let last = self.accounts.len() - 1;
        &mut self.accounts[last]
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
