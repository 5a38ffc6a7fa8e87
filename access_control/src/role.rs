use soroban_sdk::{Env, Symbol};

#[derive(Clone)]
pub enum Role {
    Owner,
    FutureOwner,
}

impl Role {
    pub(crate) fn is_transfer_delayed(&self) -> bool {
        match self {
            Role::Owner => true,
            Role::FutureOwner => false,
        }
    }
}

pub trait SymbolRepresentation {
    fn as_symbol(&self, e: &Env) -> Symbol;
}

impl SymbolRepresentation for Role {
    fn as_symbol(&self, e: &Env) -> Symbol {
        match self {
            Role::Owner => Symbol::new(e, "Owner"),
            Role::FutureOwner => Symbol::new(e, "FutureOwner"),
        }
    }
}
