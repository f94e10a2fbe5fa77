use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::SutraError;

/// The five earmarked sub-allocations of total supply
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PoolKind {
    #[default]
    Preservation,
    CommunityDevelopment,
    FoundingContributors,
    Operations,
    EmergencyReserve,
}

impl PoolKind {
    pub const ALL: [PoolKind; 5] = [
        PoolKind::Preservation,
        PoolKind::CommunityDevelopment,
        PoolKind::FoundingContributors,
        PoolKind::Operations,
        PoolKind::EmergencyReserve,
    ];

    /// Fixed capacity in base units
    pub fn capacity(self) -> u64 {
        match self {
            PoolKind::Preservation => PRESERVATION_POOL,
            PoolKind::CommunityDevelopment => COMMUNITY_DEVELOPMENT,
            PoolKind::FoundingContributors => FOUNDING_CONTRIBUTORS,
            PoolKind::Operations => OPERATIONS,
            PoolKind::EmergencyReserve => EMERGENCY_RESERVE,
        }
    }

    /// Single-byte PDA seed
    pub fn seed(self) -> [u8; 1] {
        [self as u8]
    }

    pub fn name(self) -> &'static str {
        match self {
            PoolKind::Preservation => "Preservation",
            PoolKind::CommunityDevelopment => "Community Development",
            PoolKind::FoundingContributors => "Founding Contributors",
            PoolKind::Operations => "Operations",
            PoolKind::EmergencyReserve => "Emergency Reserve",
        }
    }
}

/// Allocation counter for one pool.
/// Seeds: [b"pool", [kind]]
#[account]
#[derive(Default, Debug)]
pub struct Pool {
    pub kind: PoolKind,
    /// Fixed at creation from `PoolKind::capacity`
    pub capacity: u64,
    /// Total handed out so far, never above `capacity`
    pub allocated: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl Pool {
    pub const SIZE: usize = 8 + 1 + 8 + 8 + 1;

    pub fn open(&mut self, kind: PoolKind, bump: u8) {
        self.kind = kind;
        self.capacity = kind.capacity();
        self.allocated = 0;
        self.bump = bump;
    }

    pub fn remaining(&self) -> u64 {
        self.capacity.saturating_sub(self.allocated)
    }

    /// Reserve `amount` from the remaining capacity
    pub fn reserve(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.remaining(), SutraError::PoolCapacityExceeded);
        self.allocated += amount;
        Ok(())
    }
}
