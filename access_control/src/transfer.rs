use crate::access::{AccessControl, AccessControlTrait};
use crate::constants::ADMIN_ACTIONS_DELAY;
use crate::errors::AccessControlError;
use crate::role::Role;
use crate::storage::DataKey;
use soroban_sdk::{panic_with_error, Address};
use utils::bump::bump_instance;
use utils::math_errors::MathError;
use utils::storage_errors::StorageError;

pub trait TransferOwnershipTrait {
    fn get_transfer_ownership_deadline(&self) -> u64;
    fn put_transfer_ownership_deadline(&self, value: u64);
    fn get_future_owner(&self) -> Address;
    fn commit_transfer_ownership(&self, future_owner: &Address);
    fn apply_transfer_ownership(&self) -> Address;
    fn revert_transfer_ownership(&self);
}

impl TransferOwnershipTrait for AccessControl {
    fn get_transfer_ownership_deadline(&self) -> u64 {
        bump_instance(&self.0);
        self.0
            .storage()
            .instance()
            .get(&DataKey::TransferOwnershipDeadline)
            .unwrap_or(0)
    }

    fn put_transfer_ownership_deadline(&self, value: u64) {
        bump_instance(&self.0);
        self.0
            .storage()
            .instance()
            .set(&DataKey::TransferOwnershipDeadline, &value);
    }

    fn get_future_owner(&self) -> Address {
        if self.get_transfer_ownership_deadline() == 0 {
            panic_with_error!(&self.0, AccessControlError::NoActionActive);
        }

        match self.get_role_safe(&Role::FutureOwner) {
            Some(v) => v,
            None => panic_with_error!(&self.0, AccessControlError::NoActionActive),
        }
    }

    fn commit_transfer_ownership(&self, future_owner: &Address) {
        if self.get_transfer_ownership_deadline() != 0 {
            panic_with_error!(&self.0, AccessControlError::AnotherActionActive);
        }

        let deadline = match self.0.ledger().timestamp().checked_add(ADMIN_ACTIONS_DELAY) {
            Some(v) => v,
            None => panic_with_error!(&self.0, MathError::NumberOverflow),
        };
        self.put_transfer_ownership_deadline(deadline);
        self.set_role_address(&Role::FutureOwner, future_owner);
    }

    fn apply_transfer_ownership(&self) -> Address {
        let deadline = self.get_transfer_ownership_deadline();
        if self.0.ledger().timestamp() < deadline {
            panic_with_error!(&self.0, AccessControlError::ActionNotReadyYet);
        }
        if deadline == 0 {
            panic_with_error!(&self.0, AccessControlError::NoActionActive);
        }

        self.put_transfer_ownership_deadline(0);
        let future_owner = match self.get_role_safe(&Role::FutureOwner) {
            Some(v) => v,
            None => panic_with_error!(&self.0, StorageError::ValueNotInitialized),
        };

        // bypass the delay guard of `set_role_address`, the delay has passed
        bump_instance(&self.0);
        self.0
            .storage()
            .instance()
            .set(&self.get_key(&Role::Owner), &future_owner);

        future_owner
    }

    fn revert_transfer_ownership(&self) {
        if self.get_transfer_ownership_deadline() == 0 {
            panic_with_error!(&self.0, AccessControlError::NoActionActive);
        }

        self.put_transfer_ownership_deadline(0);
    }
}
