use soroban_sdk::{symbol_short, Address, Env};
use soroban_token_sdk::TokenUtils;

#[derive(Clone)]
pub struct TokenEvents(Env);

impl TokenEvents {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> TokenEvents {
        TokenEvents(env.clone())
    }

    // transfer, mint and burn keep the standard token event layout
    pub fn mint(&self, owner: Address, to: Address, amount: i128) {
        TokenUtils::new(self.env()).events().mint(owner, to, amount);
    }

    pub fn transfer(&self, from: Address, to: Address, amount: i128) {
        TokenUtils::new(self.env()).events().transfer(from, to, amount);
    }

    pub fn burn(&self, from: Address, amount: i128) {
        TokenUtils::new(self.env()).events().burn(from, amount);
    }

    pub fn approve(&self, from: Address, spender: Address, amount: i128) {
        self.env()
            .events()
            .publish((symbol_short!("approve"), from, spender), amount)
    }

    pub fn pause(&self, owner: Address) {
        self.env()
            .events()
            .publish((symbol_short!("paused"),), (owner,))
    }

    pub fn unpause(&self, owner: Address) {
        self.env()
            .events()
            .publish((symbol_short!("unpaused"),), (owner,))
    }
}
