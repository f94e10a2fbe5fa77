use anchor_lang::prelude::*;

#[error_code]
pub enum SutraError {
    #[msg("Validation error: metric out of range or invalid account")]
    ValidationError,

    #[msg("Insufficient funds: balance is lower than the requested amount")]
    InsufficientFunds,

    #[msg("Unauthorized: caller is not the ledger administrator")]
    Unauthorized,

    #[msg("Policy violation: sender must maintain alignment")]
    PolicyViolation,

    #[msg("Temporal guard: emission requested too early")]
    TemporalGuard,

    #[msg("Requirements not met: account does not qualify for the requested tier")]
    RequirementsNotMet,

    #[msg("Pool capacity exceeded: amount is larger than the remaining pool capacity")]
    PoolCapacityExceeded,

    #[msg("Supply cap exceeded: circulating supply would exceed total supply")]
    SupplyCapExceeded,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
