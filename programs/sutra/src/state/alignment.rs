use anchor_lang::prelude::*;
use crate::constants::{MAX_METRIC, MIN_ALIGNMENT_SCORE};
use crate::errors::SutraError;

// =============================================================================
// ALIGNMENT REGISTRY
// =============================================================================
//
// Eight behavioral metrics, each an integer in 0..=100. The alignment score
// is their truncating integer mean, so it stays in 0..=100 as well.
// =============================================================================

/// Number of metrics in an alignment vector
pub const METRIC_COUNT: u16 = 8;

/// The eight alignment metrics stored per holder
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlignmentMetrics {
    pub understanding: u8,
    pub intention: u8,
    pub communication: u8,
    pub action: u8,
    pub sustainability: u8,
    pub effort: u8,
    pub mindfulness: u8,
    pub focus: u8,
}

impl AlignmentMetrics {
    pub const SIZE: usize = 8;

    /// Same value for every metric
    pub const fn uniform(value: u8) -> Self {
        Self {
            understanding: value,
            intention: value,
            communication: value,
            action: value,
            sustainability: value,
            effort: value,
            mindfulness: value,
            focus: value,
        }
    }

    pub fn as_array(&self) -> [u8; 8] {
        [
            self.understanding,
            self.intention,
            self.communication,
            self.action,
            self.sustainability,
            self.effort,
            self.mindfulness,
            self.focus,
        ]
    }

    /// Every metric must be within 0..=MAX_METRIC
    pub fn validate(&self) -> Result<()> {
        require!(
            self.as_array().iter().all(|m| *m <= MAX_METRIC),
            SutraError::ValidationError
        );
        Ok(())
    }
}

/// Truncating integer mean of the eight metrics
pub fn calculate_total_score(metrics: &AlignmentMetrics) -> u8 {
    let sum: u16 = metrics.as_array().iter().map(|m| *m as u16).sum();
    (sum / METRIC_COUNT) as u8
}

/// Whether a score clears the global alignment minimum
pub fn is_aligned(score: u8) -> bool {
    score >= MIN_ALIGNMENT_SCORE
}
