#![cfg(test)]

use crate::contract::MonoCoinArgs;
use crate::{MonoCoin, MonoCoinClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

pub(crate) const INITIAL_SUPPLY: i128 = 1000;

// whole tokens to base units
pub(crate) fn tokens(amount: i128) -> i128 {
    amount * crate::constants::TOKEN_UNIT
}

pub fn create_token<'a>(e: &Env, owner: &Address, initial_supply: i128) -> MonoCoinClient<'a> {
    MonoCoinClient::new(
        e,
        &e.register(
            MonoCoin {},
            MonoCoinArgs::__constructor(owner, &initial_supply),
        ),
    )
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) owner: Address,
    pub(crate) user1: Address,
    pub(crate) user2: Address,
    pub(crate) token: MonoCoinClient<'a>,
}

impl Default for Setup<'_> {
    // Deploy the token with the default supply credited to the owner
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let owner = Address::generate(&env);
        let user1 = Address::generate(&env);
        let user2 = Address::generate(&env);
        let token = create_token(&env, &owner, INITIAL_SUPPLY);
        Setup {
            env,
            owner,
            user1,
            user2,
            token,
        }
    }
}
