use soroban_sdk::contracttype;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,       // token owner - pause/unpause, transfer ownership
    FutureOwner, // pending owner

    TransferOwnershipDeadline,
}
