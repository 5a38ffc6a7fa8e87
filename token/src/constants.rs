pub const TOKEN_NAME: &str = "MonoCoin";
pub const TOKEN_SYMBOL: &str = "MONO";
pub const TOKEN_DECIMALS: u32 = 18;

// 10^TOKEN_DECIMALS, one whole token in base units
pub const TOKEN_UNIT: i128 = 1_000_000_000_000_000_000;
