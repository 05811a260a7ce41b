pub const SEED_CONFIG: &[u8] = b"config";
pub const SEED_VAULT: &[u8] = b"vault";
pub const SEED_LEDGER: &[u8] = b"wager_ledger";
pub const SEED_REQUEST: &[u8] = b"oracle_request";

/// 1031 / 1000 = 3.1% bonus on a verified wager
pub const DEFAULT_REWARD_NUMERATOR: u64 = 1_031;
pub const DEFAULT_REWARD_DENOMINATOR: u64 = 1_000;

/// Seconds an oracle request may stay unanswered before the owner can retry or cancel it
pub const DEFAULT_REQUEST_TIMEOUT: i64 = 3_600;

pub const MAX_SCALE_ID_LEN: usize = 32;
/// Lifetime cap: slots are soft-deleted in place, never compacted or reused
pub const MAX_WAGERS_PER_LEDGER: usize = 128;

/// Reserved scale names that resolve to on-chain fixtures instead of a device feed
pub const FIXTURE_ALWAYS_200_POUNDS: &str = "always200Pounds";
pub const FIXTURE_LOSES_ALL_WEIGHT_IMMEDIATELY: &str = "losesAllWeightImmediately";
