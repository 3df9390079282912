// Random input used when no items are given on the command line
pub const DEFAULT_COUNT: usize = 16;
pub const DEFAULT_SEED: u64 = 2021;
pub const VALUE_MIN: i64 = -100;
pub const VALUE_MAX: i64 = 100;

pub const DEFAULT_KEEP: usize = 3;

// Read when --log is not passed
pub const LOG_ENV: &str = "LOG";
