// =============================================================================
// SUTRA CONSTANTS
// =============================================================================
//
// Every amount is expressed in base units. One SUTRA token is 10^DECIMALS
// base units.
// =============================================================================

/// Decimal places of the token
pub const DECIMALS: u8 = 9;

/// One whole token in base units
pub const ONE_TOKEN: u64 = 1_000_000_000;

// === Supply ===

/// Hard cap on circulating supply (108 million tokens)
pub const TOTAL_SUPPLY: u64 = 108_000_000 * ONE_TOKEN;

/// Minted to the administrator at genesis (21 million tokens)
pub const INITIAL_SUPPLY: u64 = 21_000_000 * ONE_TOKEN;

// === Pools (share of TOTAL_SUPPLY) ===

pub const PRESERVATION_POOL: u64 = TOTAL_SUPPLY / 100 * 40;
pub const COMMUNITY_DEVELOPMENT: u64 = TOTAL_SUPPLY / 100 * 20;
pub const FOUNDING_CONTRIBUTORS: u64 = TOTAL_SUPPLY / 100 * 15;
pub const OPERATIONS: u64 = TOTAL_SUPPLY / 100 * 15;
pub const EMERGENCY_RESERVE: u64 = TOTAL_SUPPLY / 100 * 10;

// === Emission ===

/// Emission for years 0..=3, halved every HALVING_PERIOD_YEARS after
pub const BASE_EMISSION: u64 = INITIAL_SUPPLY;

/// Number of years between halvings
pub const HALVING_PERIOD_YEARS: u64 = 4;

/// Length of one emission year in seconds (365 days)
pub const YEAR_LENGTH: i64 = 365 * 24 * 60 * 60;

// === Alignment ===

/// Upper bound of every alignment metric
pub const MAX_METRIC: u8 = 100;

/// Score a sender needs for large transfers
pub const MIN_ALIGNMENT_SCORE: u8 = 75;

/// Transfers at or above this amount require a verified sender
pub const LARGE_TRANSFER_THRESHOLD: u64 = 1_000 * ONE_TOKEN;

// === Preservation tiers (min balance, min score) ===

pub const BASIC_ACCESS_MIN_BALANCE: u64 = 108 * ONE_TOKEN;
pub const BASIC_ACCESS_MIN_SCORE: u8 = 75;

pub const ADVANCED_RIGHTS_MIN_BALANCE: u64 = 1_080 * ONE_TOKEN;
pub const ADVANCED_RIGHTS_MIN_SCORE: u8 = 85;

pub const GUARDIAN_STATUS_MIN_BALANCE: u64 = 10_800 * ONE_TOKEN;
pub const GUARDIAN_STATUS_MIN_SCORE: u8 = 95;

// === PDA seeds ===

pub const LEDGER_SEED: &[u8] = b"ledger";
pub const POOL_SEED: &[u8] = b"pool";
pub const HOLDER_SEED: &[u8] = b"holder";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_capacities_sum_to_total_supply() {
        let sum = PRESERVATION_POOL
            + COMMUNITY_DEVELOPMENT
            + FOUNDING_CONTRIBUTORS
            + OPERATIONS
            + EMERGENCY_RESERVE;
        assert_eq!(sum, TOTAL_SUPPLY);
    }

    #[test]
    fn test_preservation_pool_is_forty_percent() {
        assert_eq!(PRESERVATION_POOL, 43_200_000 * ONE_TOKEN);
        assert_eq!(PRESERVATION_POOL, TOTAL_SUPPLY * 40 / 100);
    }

    #[test]
    fn test_one_token_matches_decimals() {
        assert_eq!(ONE_TOKEN, 10u64.pow(DECIMALS as u32));
    }

    #[test]
    fn test_tier_thresholds_increase() {
        assert!(BASIC_ACCESS_MIN_BALANCE < ADVANCED_RIGHTS_MIN_BALANCE);
        assert!(ADVANCED_RIGHTS_MIN_BALANCE < GUARDIAN_STATUS_MIN_BALANCE);
        assert!(BASIC_ACCESS_MIN_SCORE < ADVANCED_RIGHTS_MIN_SCORE);
        assert!(ADVANCED_RIGHTS_MIN_SCORE < GUARDIAN_STATUS_MIN_SCORE);
    }
}
