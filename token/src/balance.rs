use crate::errors::TokenError;
use crate::storage::{get_total_supply, set_total_supply};
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::bump_persistent;
use utils::math_errors::MathError;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Balance(Address),
}

fn write_balance(e: &Env, addr: Address, amount: i128) {
    let key = DataKey::Balance(addr);
    e.storage().persistent().set(&key, &amount);
    bump_persistent(e, &key);
}

pub fn read_balance(e: &Env, addr: Address) -> i128 {
    let key = DataKey::Balance(addr);
    match e.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            bump_persistent(e, &key);
            balance
        }
        None => 0,
    }
}

pub fn receive_balance(e: &Env, addr: Address, amount: i128) {
    let balance = read_balance(e, addr.clone());
    let new_balance = match balance.checked_add(amount) {
        Some(v) => v,
        None => panic_with_error!(e, MathError::NumberOverflow),
    };
    write_balance(e, addr, new_balance);
}

pub fn spend_balance(e: &Env, addr: Address, amount: i128) {
    let balance = read_balance(e, addr.clone());
    if balance < amount {
        panic_with_error!(e, TokenError::InsufficientBalance);
    }
    write_balance(e, addr, balance - amount);
}

pub fn read_total_supply(e: &Env) -> i128 {
    get_total_supply(e)
}

pub fn write_total_supply(e: &Env, amount: i128) {
    set_total_supply(e, &amount);
}

// balance of the burner is checked before, supply can't go below zero
pub fn decrease_total_supply(e: &Env, amount: i128) {
    let supply = read_total_supply(e);
    let new_supply = match supply.checked_sub(amount) {
        Some(v) => v,
        None => panic_with_error!(e, MathError::NumberOverflow),
    };
    write_total_supply(e, new_supply);
}
