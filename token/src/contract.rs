//! MonoCoin: a fungible token with a single owner who can pause transfers.
use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{
    decrease_total_supply, read_balance, read_total_supply, receive_balance, spend_balance,
    write_total_supply,
};
use crate::constants::{TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL, TOKEN_UNIT};
use crate::errors::TokenError;
use crate::events::TokenEvents;
use crate::interface::{PausableInterface, TokenInterface};
use crate::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use crate::storage::{get_is_paused, set_is_paused};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::interface::TransferableContract;
use access_control::role::Role;
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::require_owner;
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;
use utils::bump::bump_instance;
use utils::math_errors::MathError;

fn check_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, TokenError::NegativeNotAllowed);
    }
}

fn check_not_paused(e: &Env) {
    if get_is_paused(e) {
        panic_with_error!(e, TokenError::Paused);
    }
}

#[contract]
pub struct MonoCoin;

#[contractimpl]
impl MonoCoin {
    // Deploys the token.
    //
    // # Arguments
    //
    // * `owner` - The deployer, receives the whole supply and the owner role.
    // * `initial_supply` - Supply in whole tokens, scaled by 10^decimals.
    pub fn __constructor(e: Env, owner: Address, initial_supply: i128) {
        if initial_supply < 0 {
            panic_with_error!(&e, TokenError::InvalidSupply);
        }
        let supply = match initial_supply.checked_mul(TOKEN_UNIT) {
            Some(v) => v,
            None => panic_with_error!(&e, MathError::NumberOverflow),
        };

        AccessControl::new(&e).set_role_address(&Role::Owner, &owner);
        set_is_paused(&e, &false);
        write_metadata(
            &e,
            TokenMetadata {
                decimal: TOKEN_DECIMALS,
                name: String::from_str(&e, TOKEN_NAME),
                symbol: String::from_str(&e, TOKEN_SYMBOL),
            },
        );

        write_total_supply(&e, supply);
        receive_balance(&e, owner.clone(), supply);
        TokenEvents::new(&e).mint(owner.clone(), owner.clone(), supply);
        log!(&e, "token deployed", owner, supply);
    }
}

#[contractimpl]
impl TokenInterface for MonoCoin {
    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }

    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    fn total_supply(e: Env) -> i128 {
        read_total_supply(&e)
    }

    fn balance_of(e: Env, id: Address) -> i128 {
        bump_instance(&e);
        read_balance(&e, id)
    }

    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&e);
        read_allowance(&e, from, spender)
    }

    fn owner(e: Env) -> Address {
        AccessControl::new(&e).get_role(&Role::Owner)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) -> bool {
        from.require_auth();

        check_nonnegative_amount(&e, amount);
        check_not_paused(&e);

        bump_instance(&e);

        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        TokenEvents::new(&e).transfer(from, to, amount);
        true
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128) -> bool {
        from.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        write_allowance(&e, from.clone(), spender.clone(), amount);
        TokenEvents::new(&e).approve(from, spender, amount);
        true
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) -> bool {
        spender.require_auth();

        check_nonnegative_amount(&e, amount);
        check_not_paused(&e);

        bump_instance(&e);

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        TokenEvents::new(&e).transfer(from, to, amount);
        true
    }

    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_balance(&e, from.clone(), amount);
        decrease_total_supply(&e, amount);
        TokenEvents::new(&e).burn(from, amount);
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        decrease_total_supply(&e, amount);
        TokenEvents::new(&e).burn(from, amount);
    }
}

#[contractimpl]
impl PausableInterface for MonoCoin {
    // Stops transfers instantly. Approvals and burns stay available.
    //
    // # Arguments
    //
    // * `owner` - The address of the owner.
    fn pause(e: Env, owner: Address) {
        owner.require_auth();
        require_owner(&e, &owner);

        set_is_paused(&e, &true);
        TokenEvents::new(&e).pause(owner.clone());
        log!(&e, "transfers paused", owner);
    }

    // Resumes transfers.
    //
    // # Arguments
    //
    // * `owner` - The address of the owner.
    fn unpause(e: Env, owner: Address) {
        owner.require_auth();
        require_owner(&e, &owner);

        set_is_paused(&e, &false);
        TokenEvents::new(&e).unpause(owner.clone());
        log!(&e, "transfers resumed", owner);
    }

    fn is_paused(e: Env) -> bool {
        get_is_paused(&e)
    }
}

#[contractimpl]
impl TransferableContract for MonoCoin {
    fn commit_transfer_ownership(e: Env, owner: Address, new_owner: Address) {
        owner.require_auth();
        require_owner(&e, &owner);

        AccessControl::new(&e).commit_transfer_ownership(&new_owner);
        AccessControlEvents::new(&e).commit_transfer_ownership(Role::Owner, new_owner);
    }

    fn apply_transfer_ownership(e: Env, owner: Address) {
        owner.require_auth();
        require_owner(&e, &owner);

        let new_owner = AccessControl::new(&e).apply_transfer_ownership();
        AccessControlEvents::new(&e).apply_transfer_ownership(Role::Owner, new_owner.clone());
        log!(&e, "ownership transferred", owner, new_owner);
    }

    fn revert_transfer_ownership(e: Env, owner: Address) {
        owner.require_auth();
        require_owner(&e, &owner);

        AccessControl::new(&e).revert_transfer_ownership();
        AccessControlEvents::new(&e).revert_transfer_ownership(Role::Owner);
    }

    fn get_future_owner(e: Env) -> Address {
        AccessControl::new(&e).get_future_owner()
    }
}
