//! Bank registry for customers and their savings and checking accounts

pub mod bank;
pub mod config;

pub use bank::Bank;
pub use config::BankConfig;
