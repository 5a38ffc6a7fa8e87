use paste::paste;
use soroban_sdk::{contracttype, Env};
use utils::bump::bump_instance;
use utils::{
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    TotalSupply,
    IsPaused,
}

generate_instance_storage_getter_and_setter_with_default!(
    total_supply,
    DataKey::TotalSupply,
    i128,
    0
);
generate_instance_storage_getter_and_setter_with_default!(
    is_paused,
    DataKey::IsPaused,
    bool,
    false
);
