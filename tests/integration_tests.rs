// File: tests/integration_tests.rs


use simple_bank::{AccountKind, Customer, Error};
use test_helpers::{assert_close, new_bank, register};

#[test]
fn test_checking_overdraft_withdrawal() {
    let mut bank = new_bank();
    let alice = register(&mut bank, "Alice");

    let checking = bank.open_checking_account(&alice, 100.0, 50.0).unwrap();
    checking.withdraw(130.0).unwrap();

    assert_close(checking.balance(), -30.0);
}

#[test]
fn test_checking_withdrawal_beyond_overdraft() {
    let mut bank = new_bank();
    let alice = register(&mut bank, "Alice");

    let checking = bank.open_checking_account(&alice, 100.0, 50.0).unwrap();
    let number = checking.account_number();
    let err = checking.withdraw(150.1).unwrap_err();

    assert_eq!(
        err,
        Error::InsufficientFunds {
            account_number: number,
            available: 150.0,
            requested: 150.1,
        }
    );
    assert_eq!(checking.balance(), 100.0);
}

#[test]
fn test_savings_interest() {
    let mut bank = new_bank();
    let alice = register(&mut bank, "Alice");

    let savings = bank.open_savings_account(&alice, 100.0, 0.01).unwrap();
    savings.apply_interest().unwrap();

    assert_close(savings.balance(), 101.0);
    assert_eq!(savings.kind(), &AccountKind::Savings { interest_rate: 0.01 });
}

#[test]
fn test_accounts_per_customer() {
    let mut bank = new_bank();
    let alice = register(&mut bank, "Alice");
    let bob = register(&mut bank, "Bob");

    let alice_savings = bank.open_savings_account(&alice, 100.0, 0.01).unwrap().account_number();
    let alice_checking = bank.open_checking_account(&alice, 200.0, 50.0).unwrap().account_number();
    let bob_checking = bank.open_checking_account(&bob, 500.0, 100.0).unwrap().account_number();

    let alice_numbers: Vec<_> = bank
        .get_accounts_for_customer(&alice)
        .unwrap()
        .iter()
        .map(|acc| acc.account_number())
        .collect();
    assert_eq!(alice_numbers, vec![alice_savings, alice_checking]);

    let bob_numbers: Vec<_> = bank
        .get_accounts_for_customer(&bob)
        .unwrap()
        .iter()
        .map(|acc| acc.account_number())
        .collect();
    assert_eq!(bob_numbers, vec![bob_checking]);
}

#[test]
fn test_open_account_for_unregistered_customer() {
    let mut bank = new_bank();
    register(&mut bank, "Alice");
    let rogue = Customer::new("Rogue").unwrap();

    let err = bank.open_savings_account(&rogue, 100.0, 0.01).unwrap_err();

    assert_eq!(err, Error::InvalidArgument("Customer does not exist in this bank.".to_string()));
    assert!(bank.get_all_accounts().is_empty());
}

#[test]
fn test_rename_is_seen_by_every_account() {
    let mut bank = new_bank();
    let alice = register(&mut bank, "Alice");
    bank.open_savings_account(&alice, 10.0, 0.0).unwrap();
    bank.open_checking_account(&alice, 10.0, 0.0).unwrap();

    bank.find_customer_mut(&alice.id().to_string())
        .unwrap()
        .rename("Alicia")
        .unwrap();

    for account in bank.get_all_accounts() {
        assert_eq!(bank.owner_of(account).unwrap().name(), "Alicia");
    }
}

#[test]
fn test_failed_operations_leave_state_unchanged() {
    let mut bank = new_bank();
    let alice = register(&mut bank, "Alice");
    let number = bank
        .open_savings_account(&alice, 100.0, 0.02)
        .unwrap()
        .account_number()
        .to_string();

    let savings = bank.find_account_mut(&number).unwrap();
    assert!(savings.deposit(0.0).unwrap_err().is_invalid_argument());
    assert!(savings.withdraw(-1.0).unwrap_err().is_invalid_argument());
    assert!(savings.withdraw(100.5).unwrap_err().is_insufficient_funds());
    assert_eq!(savings.balance(), 100.0);

    assert!(bank.add_customer("").unwrap_err().is_invalid_argument());
    assert!(bank.open_savings_account(&alice, 10.0, -0.5).unwrap_err().is_invalid_argument());
    assert_eq!(bank.get_all_customers().len(), 1);
    assert_eq!(bank.get_all_accounts().len(), 1);
}

#[test]
fn test_registry_snapshot_serializes() {
    let mut bank = new_bank();
    let alice = register(&mut bank, "Alice");
    bank.open_savings_account(&alice, 100.0, 0.01).unwrap();

    let json = serde_json::to_string(&bank).unwrap();
    assert!(json.contains("\"name\":\"Alice\""));
    assert!(json.contains("\"account_number\":1000"));
}
