use crate::errors::TokenError;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::bump_persistent;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Allowance(AllowanceDataKey),
}

#[derive(Clone)]
#[contracttype]
struct AllowanceDataKey {
    from: Address,
    spender: Address,
}

pub fn read_allowance(e: &Env, from: Address, spender: Address) -> i128 {
    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    match e.storage().persistent().get::<DataKey, i128>(&key) {
        Some(allowance) => {
            bump_persistent(e, &key);
            allowance
        }
        None => 0,
    }
}

// overwrites the previous value, zero drops the entry
pub fn write_allowance(e: &Env, from: Address, spender: Address, amount: i128) {
    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    if amount == 0 {
        e.storage().persistent().remove(&key);
        return;
    }

    e.storage().persistent().set(&key, &amount);
    bump_persistent(e, &key);
}

pub fn spend_allowance(e: &Env, from: Address, spender: Address, amount: i128) {
    let allowance = read_allowance(e, from.clone(), spender.clone());
    if allowance < amount {
        panic_with_error!(e, TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(e, from, spender, allowance - amount);
    }
}
