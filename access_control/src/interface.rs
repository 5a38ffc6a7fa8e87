use soroban_sdk::{Address, Env};

pub trait TransferableContract {
    // Commit ownership transfer
    fn commit_transfer_ownership(e: Env, owner: Address, new_owner: Address);

    // Apply committed transfer ownership
    fn apply_transfer_ownership(e: Env, owner: Address);

    // Revert committed ownership transfer
    fn revert_transfer_ownership(e: Env, owner: Address);

    // Get pending owner of the committed transfer
    fn get_future_owner(e: Env) -> Address;
}
