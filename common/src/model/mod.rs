//! Domain models for the bank

pub mod customer;
pub mod account;
