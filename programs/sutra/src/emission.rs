use crate::constants::{BASE_EMISSION, HALVING_PERIOD_YEARS, YEAR_LENGTH};

// =============================================================================
// EMISSION SCHEDULE
// =============================================================================
//
// Integer halving every HALVING_PERIOD_YEARS:
//
//   emission(y) = BASE_EMISSION >> (y / 4)
//
// Once the shift reaches 64 bits the emission is zero.
// =============================================================================

/// Tokens issued for a given year index
pub fn calculate_emission(year_index: u64) -> u64 {
    let halvings = year_index / HALVING_PERIOD_YEARS;
    u32::try_from(halvings)
        .ok()
        .and_then(|shift| BASE_EMISSION.checked_shr(shift))
        .unwrap_or(0)
}

/// Whole years elapsed since genesis
pub fn year_index(genesis_time: i64, now: i64) -> u64 {
    let elapsed = now.saturating_sub(genesis_time).max(0);
    (elapsed / YEAR_LENGTH) as u64
}
