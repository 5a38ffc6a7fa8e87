use soroban_sdk::{Address, Env, String};

pub trait TokenInterface {
    fn name(e: Env) -> String;

    fn symbol(e: Env) -> String;

    fn decimals(e: Env) -> u32;

    fn total_supply(e: Env) -> i128;

    fn balance_of(e: Env, id: Address) -> i128;

    fn allowance(e: Env, from: Address, spender: Address) -> i128;

    fn owner(e: Env) -> Address;

    fn transfer(e: Env, from: Address, to: Address, amount: i128) -> bool;

    // Overwrites the current allowance of `spender` over `from` funds
    fn approve(e: Env, from: Address, spender: Address, amount: i128) -> bool;

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) -> bool;

    fn burn(e: Env, from: Address, amount: i128);

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128);
}

pub trait PausableInterface {
    // Stop transfers, owner only
    fn pause(e: Env, owner: Address);

    // Resume transfers, owner only
    fn unpause(e: Env, owner: Address);

    fn is_paused(e: Env) -> bool;
}
