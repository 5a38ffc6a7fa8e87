pub const DAY_IN_LEDGERS: u32 = 17280;
pub const MONTH_IN_LEDGERS: u32 = DAY_IN_LEDGERS * 30;

// Instance TTL: token metadata, owner, supply and pause flag
pub const MAX_INSTANCE_TTL: u32 = MONTH_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = MAX_INSTANCE_TTL - DAY_IN_LEDGERS;

// Persistent TTL: balances and allowances
pub const MAX_PERSISTENT_TTL: u32 = MONTH_IN_LEDGERS * 6;
pub const PERSISTENT_TTL_THRESHOLD: u32 = MAX_PERSISTENT_TTL - MONTH_IN_LEDGERS;
