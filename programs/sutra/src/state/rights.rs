use anchor_lang::prelude::*;
use crate::constants::*;

// =============================================================================
// PRESERVATION RIGHTS
// =============================================================================
//
// Tiers form a total order. Each tier has a (min balance, min score) pair and
// both pairs increase monotonically with the tier, so the highest satisfied
// tier is also the only one that needs to be reported.
//
//   None            0 tokens       score 0
//   BasicAccess     108 tokens     score 75
//   AdvancedRights  1,080 tokens   score 85
//   GuardianStatus  10,800 tokens  score 95
// =============================================================================

#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord,
)]
pub enum PreservationTier {
    #[default]
    None,
    BasicAccess,
    AdvancedRights,
    GuardianStatus,
}

/// Thresholds an account must meet to hold a tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierRequirements {
    pub min_balance: u64,
    pub min_score: u8,
}

impl PreservationTier {
    /// All tiers in ascending order
    pub const ALL: [PreservationTier; 4] = [
        PreservationTier::None,
        PreservationTier::BasicAccess,
        PreservationTier::AdvancedRights,
        PreservationTier::GuardianStatus,
    ];

    pub fn requirements(self) -> TierRequirements {
        let (min_balance, min_score) = match self {
            PreservationTier::None => (0, 0),
            PreservationTier::BasicAccess => (BASIC_ACCESS_MIN_BALANCE, BASIC_ACCESS_MIN_SCORE),
            PreservationTier::AdvancedRights => {
                (ADVANCED_RIGHTS_MIN_BALANCE, ADVANCED_RIGHTS_MIN_SCORE)
            }
            PreservationTier::GuardianStatus => {
                (GUARDIAN_STATUS_MIN_BALANCE, GUARDIAN_STATUS_MIN_SCORE)
            }
        };
        TierRequirements { min_balance, min_score }
    }

    /// Both thresholds of this tier are satisfied
    pub fn is_met_by(self, balance: u64, score: u8) -> bool {
        let req = self.requirements();
        balance >= req.min_balance && score >= req.min_score
    }

    /// Highest tier satisfied by the given balance and score
    pub fn highest_for(balance: u64, score: u8) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|tier| tier.is_met_by(balance, score))
            .unwrap_or(PreservationTier::None)
    }

    pub fn name(self) -> &'static str {
        match self {
            PreservationTier::None => "None",
            PreservationTier::BasicAccess => "BasicAccess",
            PreservationTier::AdvancedRights => "AdvancedRights",
            PreservationTier::GuardianStatus => "GuardianStatus",
        }
    }
}
