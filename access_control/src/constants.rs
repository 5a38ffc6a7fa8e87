pub const ADMIN_ACTIONS_DELAY: u64 = 3 * 86400; // ownership may change once per 3 days
