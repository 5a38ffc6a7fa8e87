#![cfg(test)]
extern crate std;

use crate::testutils::{create_token, tokens, Setup, INITIAL_SUPPLY};
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Events};
use soroban_sdk::{symbol_short, vec, Address, Env, IntoVal, String, Symbol};

#[test]
fn test_deployment() {
    let setup = Setup::default();
    let e = setup.env;
    let token = setup.token;

    // whole supply is reported as minted to the deployer
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                token.address.clone(),
                (
                    symbol_short!("mint"),
                    setup.owner.clone(),
                    setup.owner.clone()
                )
                    .into_val(&e),
                tokens(INITIAL_SUPPLY).into_val(&e),
            ),
        ]
    );

    assert_eq!(token.owner(), setup.owner);
    assert_eq!(token.total_supply(), tokens(INITIAL_SUPPLY));
    assert_eq!(token.balance_of(&setup.owner), token.total_supply());
    assert_eq!(token.balance_of(&setup.user1), 0);
    assert_eq!(token.name(), String::from_str(&e, "MonoCoin"));
    assert_eq!(token.symbol(), String::from_str(&e, "MONO"));
    assert_eq!(token.decimals(), 18);
    assert!(!token.is_paused());
}

#[test]
fn test_zero_supply() {
    let e = Env::default();
    e.mock_all_auths();

    let owner = Address::generate(&e);
    let token = create_token(&e, &owner, 0);

    assert_eq!(token.total_supply(), 0);
    assert_eq!(token.balance_of(&owner), 0);
    assert_eq!(token.owner(), owner);
}

#[test]
#[should_panic(expected = "Error(Contract, #605)")]
fn deploy_negative_supply() {
    let e = Env::default();
    e.mock_all_auths();

    let owner = Address::generate(&e);
    create_token(&e, &owner, -1);
}

#[test]
#[should_panic(expected = "Error(Contract, #510)")]
fn deploy_supply_overflow() {
    let e = Env::default();
    e.mock_all_auths();

    let owner = Address::generate(&e);
    create_token(&e, &owner, i128::MAX);
}

#[test]
fn test_deployments_are_independent() {
    let setup = Setup::default();
    let e = setup.env;

    // the deployer of each instance owns it from the first ledger it exists
    let other = create_token(&e, &setup.user1, 5);
    assert_eq!(other.owner(), setup.user1);
    assert_eq!(other.balance_of(&setup.user1), tokens(5));
    assert_eq!(other.balance_of(&setup.owner), 0);

    assert_eq!(setup.token.owner(), setup.owner);
    assert_eq!(setup.token.balance_of(&setup.user1), 0);
    assert_eq!(setup.token.total_supply(), tokens(INITIAL_SUPPLY));
}

#[test]
fn test_transfer() {
    let setup = Setup::default();
    let e = setup.env;
    let token = setup.token;

    assert!(token.transfer(&setup.owner, &setup.user1, &100));
    assert_eq!(
        e.auths(),
        std::vec![(
            setup.owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    symbol_short!("transfer"),
                    (&setup.owner, &setup.user1, 100_i128).into_val(&e),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
    assert_eq!(token.balance_of(&setup.user1), 100);
    assert_eq!(
        token.balance_of(&setup.owner),
        tokens(INITIAL_SUPPLY) - 100
    );
}

#[test]
fn test_transfers_update_balances() {
    let setup = Setup::default();
    let token = setup.token;

    let initial_owner_balance = token.balance_of(&setup.owner);
    token.transfer(&setup.owner, &setup.user1, &100);
    token.transfer(&setup.owner, &setup.user2, &100);

    assert_eq!(token.balance_of(&setup.owner), initial_owner_balance - 200);
    assert_eq!(token.balance_of(&setup.user1), 100);
    assert_eq!(token.balance_of(&setup.user2), 100);
    assert_eq!(token.total_supply(), tokens(INITIAL_SUPPLY));
}

#[test]
fn test_transfer_to_self() {
    let setup = Setup::default();
    let token = setup.token;

    token.transfer(&setup.owner, &setup.owner, &tokens(10));
    assert_eq!(token.balance_of(&setup.owner), tokens(INITIAL_SUPPLY));
}

#[test]
#[should_panic(expected = "Error(Contract, #602)")]
fn transfer_insufficient_balance() {
    let setup = Setup::default();

    setup.token.transfer(&setup.user1, &setup.owner, &1);
}

#[test]
#[should_panic(expected = "Error(Contract, #604)")]
fn transfer_negative_amount() {
    let setup = Setup::default();

    setup.token.transfer(&setup.owner, &setup.user1, &-1);
}

#[test]
fn test_failed_transfer_keeps_state() {
    let setup = Setup::default();
    let token = setup.token;

    token.transfer(&setup.owner, &setup.user1, &50);
    assert!(token
        .try_transfer(&setup.user1, &setup.user2, &51)
        .is_err());

    assert_eq!(token.balance_of(&setup.user1), 50);
    assert_eq!(token.balance_of(&setup.user2), 0);
    assert_eq!(token.total_supply(), tokens(INITIAL_SUPPLY));
}

#[test]
fn test_approve_and_transfer_from() {
    let setup = Setup::default();
    let e = setup.env;
    let token = setup.token;

    assert!(token.approve(&setup.owner, &setup.user1, &100));
    assert_eq!(
        e.auths(),
        std::vec![(
            setup.owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    symbol_short!("approve"),
                    (&setup.owner, &setup.user1, 100_i128).into_val(&e),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
    assert_eq!(token.allowance(&setup.owner, &setup.user1), 100);

    assert!(token.transfer_from(&setup.user1, &setup.owner, &setup.user2, &100));
    assert_eq!(
        e.auths(),
        std::vec![(
            setup.user1.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    Symbol::new(&e, "transfer_from"),
                    (&setup.user1, &setup.owner, &setup.user2, 100_i128).into_val(&e),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );

    assert_eq!(token.balance_of(&setup.user2), 100);
    assert_eq!(token.balance_of(&setup.user1), 0);
    assert_eq!(token.allowance(&setup.owner, &setup.user1), 0);
}

#[test]
fn test_partial_transfer_from() {
    let setup = Setup::default();
    let token = setup.token;

    token.approve(&setup.owner, &setup.user1, &100);
    token.transfer_from(&setup.user1, &setup.owner, &setup.user2, &30);

    assert_eq!(token.allowance(&setup.owner, &setup.user1), 70);
    assert_eq!(token.balance_of(&setup.user2), 30);
}

#[test]
fn test_approve_overwrites() {
    let setup = Setup::default();
    let token = setup.token;

    token.approve(&setup.owner, &setup.user1, &100);
    token.approve(&setup.owner, &setup.user1, &40);
    assert_eq!(token.allowance(&setup.owner, &setup.user1), 40);

    token.approve(&setup.owner, &setup.user1, &0);
    assert_eq!(token.allowance(&setup.owner, &setup.user1), 0);

    // allowances are kept per spender
    token.approve(&setup.owner, &setup.user2, &5);
    assert_eq!(token.allowance(&setup.owner, &setup.user1), 0);
    assert_eq!(token.allowance(&setup.owner, &setup.user2), 5);
    assert_eq!(token.allowance(&setup.user2, &setup.owner), 0);
}

#[test]
fn test_approve_without_balance() {
    let setup = Setup::default();
    let token = setup.token;

    token.approve(&setup.user1, &setup.user2, &tokens(1));
    assert_eq!(token.allowance(&setup.user1, &setup.user2), tokens(1));
    assert_eq!(token.balance_of(&setup.user1), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #603)")]
fn transfer_from_insufficient_allowance() {
    let setup = Setup::default();
    let token = setup.token;

    token.approve(&setup.owner, &setup.user1, &99);
    token.transfer_from(&setup.user1, &setup.owner, &setup.user2, &100);
}

#[test]
#[should_panic(expected = "Error(Contract, #602)")]
fn transfer_from_insufficient_balance() {
    let setup = Setup::default();
    let token = setup.token;

    token.approve(&setup.user1, &setup.user2, &50);
    token.transfer_from(&setup.user2, &setup.user1, &setup.owner, &50);
}

#[test]
fn test_failed_transfer_from_keeps_allowance() {
    let setup = Setup::default();
    let token = setup.token;

    token.transfer(&setup.owner, &setup.user1, &10);
    token.approve(&setup.user1, &setup.user2, &50);

    // allowance is enough but the balance is not
    assert!(token
        .try_transfer_from(&setup.user2, &setup.user1, &setup.owner, &20)
        .is_err());

    assert_eq!(token.allowance(&setup.user1, &setup.user2), 50);
    assert_eq!(token.balance_of(&setup.user1), 10);
}

#[test]
fn test_burn() {
    let setup = Setup::default();
    let e = setup.env;
    let token = setup.token;

    token.transfer(&setup.owner, &setup.user1, &tokens(500));
    let initial_balance = token.balance_of(&setup.user1);

    token.burn(&setup.user1, &tokens(100));
    assert_eq!(
        e.auths(),
        std::vec![(
            setup.user1.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    symbol_short!("burn"),
                    (&setup.user1, tokens(100)).into_val(&e),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );

    assert_eq!(token.balance_of(&setup.user1), initial_balance - tokens(100));
    assert_eq!(token.total_supply(), tokens(INITIAL_SUPPLY - 100));
}

#[test]
fn test_burn_from() {
    let setup = Setup::default();
    let e = setup.env;
    let token = setup.token;

    token.transfer(&setup.owner, &setup.user1, &tokens(500));
    token.approve(&setup.user1, &setup.owner, &tokens(100));

    token.burn_from(&setup.owner, &setup.user1, &tokens(100));
    assert_eq!(
        e.auths(),
        std::vec![(
            setup.owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    symbol_short!("burn_from"),
                    (&setup.owner, &setup.user1, tokens(100)).into_val(&e),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );

    assert_eq!(token.balance_of(&setup.user1), tokens(400));
    assert_eq!(token.allowance(&setup.user1, &setup.owner), 0);
    assert_eq!(token.total_supply(), tokens(INITIAL_SUPPLY - 100));
    assert_eq!(token.balance_of(&setup.owner), tokens(500));
}

#[test]
#[should_panic(expected = "Error(Contract, #602)")]
fn burn_more_than_balance() {
    let setup = Setup::default();
    let token = setup.token;

    token.transfer(&setup.owner, &setup.user1, &tokens(500));
    token.burn(&setup.user1, &tokens(600));
}

#[test]
#[should_panic(expected = "Error(Contract, #603)")]
fn burn_from_insufficient_allowance() {
    let setup = Setup::default();
    let token = setup.token;

    token.transfer(&setup.owner, &setup.user1, &tokens(500));
    token.approve(&setup.user1, &setup.owner, &tokens(50));
    token.burn_from(&setup.owner, &setup.user1, &tokens(100));
}

#[test]
#[should_panic(expected = "Error(Contract, #602)")]
fn burn_from_insufficient_balance() {
    let setup = Setup::default();
    let token = setup.token;

    token.transfer(&setup.owner, &setup.user1, &tokens(10));
    token.approve(&setup.user1, &setup.owner, &tokens(50));
    token.burn_from(&setup.owner, &setup.user1, &tokens(20));
}

#[test]
fn test_failed_burn_from_keeps_allowance() {
    let setup = Setup::default();
    let token = setup.token;

    token.transfer(&setup.owner, &setup.user1, &tokens(10));
    token.approve(&setup.user1, &setup.user2, &tokens(50));

    // allowance is enough but the balance is not
    assert!(token
        .try_burn_from(&setup.user2, &setup.user1, &tokens(20))
        .is_err());

    assert_eq!(token.allowance(&setup.user1, &setup.user2), tokens(50));
    assert_eq!(token.balance_of(&setup.user1), tokens(10));
    assert_eq!(token.total_supply(), tokens(INITIAL_SUPPLY));
}

#[test]
#[should_panic(expected = "Error(Contract, #604)")]
fn approve_negative_amount() {
    let setup = Setup::default();

    setup.token.approve(&setup.owner, &setup.user1, &-1);
}

#[test]
#[should_panic(expected = "Error(Contract, #604)")]
fn transfer_from_negative_amount() {
    let setup = Setup::default();
    let token = setup.token;

    token.approve(&setup.owner, &setup.user1, &100);
    token.transfer_from(&setup.user1, &setup.owner, &setup.user2, &-1);
}

#[test]
#[should_panic(expected = "Error(Contract, #604)")]
fn burn_from_negative_amount() {
    let setup = Setup::default();
    let token = setup.token;

    token.approve(&setup.owner, &setup.user1, &100);
    token.burn_from(&setup.user1, &setup.owner, &-1);
}

#[test]
fn test_negative_amounts_keep_state() {
    let setup = Setup::default();
    let token = setup.token;

    token.approve(&setup.owner, &setup.user1, &100);
    assert!(token.try_burn(&setup.owner, &-1).is_err());
    assert!(token.try_approve(&setup.owner, &setup.user1, &-5).is_err());
    assert!(token
        .try_transfer_from(&setup.user1, &setup.owner, &setup.user2, &-1)
        .is_err());

    assert_eq!(token.allowance(&setup.owner, &setup.user1), 100);
    assert_eq!(token.balance_of(&setup.owner), tokens(INITIAL_SUPPLY));
    assert_eq!(token.balance_of(&setup.user2), 0);
    assert_eq!(token.total_supply(), tokens(INITIAL_SUPPLY));
}

#[test]
fn test_failed_burn_keeps_supply() {
    let setup = Setup::default();
    let token = setup.token;

    token.transfer(&setup.owner, &setup.user1, &tokens(5));
    assert!(token.try_burn(&setup.user1, &tokens(6)).is_err());

    assert_eq!(token.balance_of(&setup.user1), tokens(5));
    assert_eq!(token.total_supply(), tokens(INITIAL_SUPPLY));
}

#[test]
fn test_supply_is_conserved() {
    let setup = Setup::default();
    let e = setup.env;
    let token = setup.token;

    let user3 = Address::generate(&e);
    let accounts = [
        setup.owner.clone(),
        setup.user1.clone(),
        setup.user2.clone(),
        user3.clone(),
    ];

    for i in 0..24 {
        let from = &accounts[i % accounts.len()];
        let to = &accounts[(i * 3 + 1) % accounts.len()];
        let amount = token.balance_of(from) / 3;
        if i % 2 == 0 {
            token.transfer(from, to, &amount);
        } else {
            token.approve(from, &user3, &amount);
            token.transfer_from(&user3, from, to, &amount);
        }

        let total: i128 = accounts.iter().map(|a| token.balance_of(a)).sum();
        assert_eq!(total, token.total_supply());
    }
    assert_eq!(token.total_supply(), tokens(INITIAL_SUPPLY));

    let burned = token.balance_of(&setup.user1) / 2;
    token.burn(&setup.user1, &burned);
    let total: i128 = accounts.iter().map(|a| token.balance_of(a)).sum();
    assert_eq!(total, token.total_supply());
    assert_eq!(token.total_supply(), tokens(INITIAL_SUPPLY) - burned);
}

#[test]
fn test_token_events() {
    let setup = Setup::default();
    let e = setup.env;
    let token = setup.token;

    token.transfer(&setup.owner, &setup.user1, &100);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                token.address.clone(),
                (
                    symbol_short!("transfer"),
                    setup.owner.clone(),
                    setup.user1.clone()
                )
                    .into_val(&e),
                100_i128.into_val(&e),
            ),
        ]
    );

    token.approve(&setup.user1, &setup.user2, &60);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                token.address.clone(),
                (
                    symbol_short!("approve"),
                    setup.user1.clone(),
                    setup.user2.clone()
                )
                    .into_val(&e),
                60_i128.into_val(&e),
            ),
        ]
    );

    token.burn_from(&setup.user2, &setup.user1, &60);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                token.address.clone(),
                (symbol_short!("burn"), setup.user1.clone()).into_val(&e),
                60_i128.into_val(&e),
            ),
        ]
    );
}
