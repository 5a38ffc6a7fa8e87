#![no_std]

mod allowance;
mod balance;
mod constants;
mod contract;
pub mod errors;
mod events;
pub mod interface;
mod metadata;
mod storage;
mod test;
mod test_permissions;
mod testutils;

pub use crate::contract::{MonoCoin, MonoCoinClient};
