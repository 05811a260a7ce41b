use anchor_lang::prelude::*;

#[error_code]
pub enum WeightWagersError {
    #[msg("Unauthorized: only the contract owner can call this")]
    AccessDenied,

    #[msg("The contract is stopped and is not accepting new wagers")]
    ContractStopped,

    #[msg("No live wager exists at this index")]
    InvalidIndex,

    #[msg("The pool cannot cover the bonus for this payout")]
    InsufficientPoolBalance,

    #[msg("Wager is not active")]
    WagerNotActive,

    #[msg("Wager is not waiting for its baseline reading")]
    WagerNotPending,

    #[msg("Wager has no outstanding oracle request")]
    NoOutstandingRequest,

    #[msg("The oracle request has not timed out yet")]
    RequestStillFresh,

    #[msg("Unauthorized: only the oracle authority can deliver readings")]
    UnauthorizedOracle,

    #[msg("Reading was delivered through the wrong path for this scale")]
    ScaleKindMismatch,

    #[msg("Fixture scales are disabled")]
    FixturesDisabled,

    #[msg("Scale id must not be empty")]
    EmptyScaleId,

    #[msg("Scale id too long (max 32 bytes)")]
    ScaleIdTooLong,

    #[msg("Stake amount must be greater than zero")]
    ZeroStake,

    #[msg("Desired weight change must not be zero")]
    ZeroWeightChange,

    #[msg("Expiration duration must be greater than zero")]
    InvalidDuration,

    #[msg("Reward multiplier must be at least 1 with a non-zero denominator")]
    InvalidMultiplier,

    #[msg("Request timeout must be greater than zero")]
    InvalidRequestTimeout,

    #[msg("Wager ledger is full")]
    LedgerFull,

    #[msg("Initial pool must cover the vault's rent-exempt minimum")]
    PoolUnderfunded,

    #[msg("Oracle request account does not match the expected address")]
    RequestAccountMismatch,

    #[msg("Missing oracle request account for an active wager")]
    MissingRequestAccount,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

#[cfg(test)]
pub(crate) fn error_name(err: anchor_lang::error::Error) -> String {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_name.clone(),
        other => other.to_string(),
    }
}
