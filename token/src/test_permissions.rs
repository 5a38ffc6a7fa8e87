#![cfg(test)]
extern crate std;

use crate::testutils::{tokens, Setup, INITIAL_SUPPLY};
use access_control::constants::ADMIN_ACTIONS_DELAY;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Events};
use soroban_sdk::{symbol_short, vec, Address, IntoVal, Symbol};
use utils::test_utils::jump;

// pause
#[test]
fn test_pause_unpause() {
    let setup = Setup::default();
    let e = setup.env;
    let token = setup.token;

    token.pause(&setup.owner);
    assert_eq!(
        e.auths(),
        std::vec![(
            setup.owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    symbol_short!("pause"),
                    (&setup.owner,).into_val(&e),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
    assert!(token.is_paused());

    // pausing twice is allowed
    token.pause(&setup.owner);
    assert!(token.is_paused());

    token.unpause(&setup.owner);
    assert!(!token.is_paused());
    token.unpause(&setup.owner);
    assert!(!token.is_paused());
}

#[test]
#[should_panic(expected = "Error(Contract, #2102)")]
fn test_pause_third_party_user() {
    let setup = Setup::default();

    setup.token.pause(&setup.user1);
}

#[test]
#[should_panic(expected = "Error(Contract, #2102)")]
fn test_unpause_third_party_user() {
    let setup = Setup::default();

    setup.token.pause(&setup.owner);
    setup.token.unpause(&setup.user1);
}

#[test]
fn test_rejected_pause_keeps_flag() {
    let setup = Setup::default();
    let token = setup.token;

    assert!(token.try_pause(&setup.user1).is_err());
    assert!(!token.is_paused());

    token.pause(&setup.owner);
    assert!(token.try_unpause(&setup.user1).is_err());
    assert!(token.is_paused());
}

#[test]
#[should_panic(expected = "Error(Contract, #606)")]
fn test_transfer_paused() {
    let setup = Setup::default();

    setup.token.pause(&setup.owner);
    setup.token.transfer(&setup.owner, &setup.user1, &100);
}

#[test]
#[should_panic(expected = "Error(Contract, #606)")]
fn test_transfer_from_paused() {
    let setup = Setup::default();
    let token = setup.token;

    token.approve(&setup.owner, &setup.user1, &100);
    token.pause(&setup.owner);
    token.transfer_from(&setup.user1, &setup.owner, &setup.user2, &100);
}

#[test]
fn test_transfer_after_unpause() {
    let setup = Setup::default();
    let token = setup.token;

    token.pause(&setup.owner);
    assert!(token
        .try_transfer(&setup.owner, &setup.user1, &100)
        .is_err());
    assert_eq!(token.balance_of(&setup.user1), 0);

    token.unpause(&setup.owner);
    token.transfer(&setup.owner, &setup.user1, &100);
    assert_eq!(token.balance_of(&setup.user1), 100);
}

#[test]
fn test_paused_allows_approve_and_burn() {
    let setup = Setup::default();
    let token = setup.token;

    token.transfer(&setup.owner, &setup.user1, &tokens(500));
    token.pause(&setup.owner);

    token.approve(&setup.user1, &setup.owner, &tokens(100));
    assert_eq!(token.allowance(&setup.user1, &setup.owner), tokens(100));

    token.burn(&setup.user1, &tokens(50));
    token.burn_from(&setup.owner, &setup.user1, &tokens(100));

    assert_eq!(token.balance_of(&setup.user1), tokens(350));
    assert_eq!(token.allowance(&setup.user1, &setup.owner), 0);
    assert_eq!(token.total_supply(), tokens(INITIAL_SUPPLY - 150));
    assert!(token.is_paused());
}

#[test]
fn test_pause_events() {
    let setup = Setup::default();
    let e = setup.env;
    let token = setup.token;

    token.pause(&setup.owner);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                token.address.clone(),
                (symbol_short!("paused"),).into_val(&e),
                (setup.owner.clone(),).into_val(&e),
            ),
        ]
    );

    token.unpause(&setup.owner);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                token.address.clone(),
                (symbol_short!("unpaused"),).into_val(&e),
                (setup.owner.clone(),).into_val(&e),
            ),
        ]
    );
}

// transfer ownership
#[test]
#[should_panic(expected = "Error(Contract, #2908)")]
fn test_transfer_ownership_too_early() {
    let setup = Setup::default();
    let token = setup.token;
    let owner_original = setup.owner;
    let owner_new = Address::generate(&setup.env);

    token.commit_transfer_ownership(&owner_original, &owner_new);
    // check owner not changed yet by calling protected method
    assert!(token.try_revert_transfer_ownership(&owner_new).is_err());
    jump(&setup.env, ADMIN_ACTIONS_DELAY - 1);
    token.apply_transfer_ownership(&owner_original);
}

#[test]
#[should_panic(expected = "Error(Contract, #2906)")]
fn test_transfer_ownership_twice() {
    let setup = Setup::default();
    let token = setup.token;
    let owner_new = Address::generate(&setup.env);

    token.commit_transfer_ownership(&setup.owner, &owner_new);
    token.commit_transfer_ownership(&setup.owner, &owner_new);
}

#[test]
#[should_panic(expected = "Error(Contract, #2907)")]
fn test_transfer_ownership_not_committed() {
    let setup = Setup::default();
    let token = setup.token;

    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    token.apply_transfer_ownership(&setup.owner);
}

#[test]
#[should_panic(expected = "Error(Contract, #2907)")]
fn test_transfer_ownership_reverted() {
    let setup = Setup::default();
    let token = setup.token;
    let owner_new = Address::generate(&setup.env);

    token.commit_transfer_ownership(&setup.owner, &owner_new);
    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    token.revert_transfer_ownership(&setup.owner);
    token.apply_transfer_ownership(&setup.owner);
}

#[test]
#[should_panic(expected = "Error(Contract, #2907)")]
fn test_revert_transfer_ownership_not_committed() {
    let setup = Setup::default();

    setup.token.revert_transfer_ownership(&setup.owner);
}

#[test]
#[should_panic(expected = "Error(Contract, #2102)")]
fn test_transfer_ownership_third_party_user() {
    let setup = Setup::default();

    setup
        .token
        .commit_transfer_ownership(&setup.user1, &setup.user1);
}

#[test]
fn test_transfer_ownership() {
    let setup = Setup::default();
    let token = setup.token;
    let owner_original = setup.owner;
    let owner_new = Address::generate(&setup.env);

    token.commit_transfer_ownership(&owner_original, &owner_new);
    assert_eq!(token.get_future_owner(), owner_new);
    assert_eq!(token.owner(), owner_original);

    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    token.apply_transfer_ownership(&owner_original);
    assert_eq!(token.owner(), owner_new);
    assert!(token.try_get_future_owner().is_err());

    // pause rights move together with ownership
    assert!(token.try_pause(&owner_original).is_err());
    token.pause(&owner_new);
    assert!(token.is_paused());

    // balances are not touched
    assert_eq!(token.balance_of(&owner_original), tokens(INITIAL_SUPPLY));
    assert_eq!(token.balance_of(&owner_new), 0);

    token.commit_transfer_ownership(&owner_new, &owner_original);
}

#[test]
fn test_transfer_ownership_events() {
    let setup = Setup::default();
    let e = setup.env;
    let token = setup.token;
    let new_owner = Address::generate(&e);

    token.commit_transfer_ownership(&setup.owner, &new_owner);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                token.address.clone(),
                (
                    Symbol::new(&e, "commit_transfer_ownership"),
                    symbol_short!("Owner")
                )
                    .into_val(&e),
                (new_owner.clone(),).into_val(&e),
            ),
        ]
    );

    token.revert_transfer_ownership(&setup.owner);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                token.address.clone(),
                (
                    Symbol::new(&e, "revert_transfer_ownership"),
                    symbol_short!("Owner")
                )
                    .into_val(&e),
                ().into_val(&e),
            ),
        ]
    );

    token.commit_transfer_ownership(&setup.owner, &new_owner);
    jump(&e, ADMIN_ACTIONS_DELAY + 1);
    token.apply_transfer_ownership(&setup.owner);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                token.address.clone(),
                (
                    Symbol::new(&e, "apply_transfer_ownership"),
                    symbol_short!("Owner")
                )
                    .into_val(&e),
                (new_owner.clone(),).into_val(&e),
            ),
        ]
    );
}
