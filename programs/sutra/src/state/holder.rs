use anchor_lang::prelude::*;
use crate::errors::SutraError;
use super::alignment::{calculate_total_score, is_aligned, AlignmentMetrics};
use super::rights::PreservationTier;

/// Per-wallet ledger record: balance, alignment and preservation tier.
/// Seeds: [b"holder", wallet]
#[account]
#[derive(Default, Debug)]
pub struct Holder {
    /// The wallet this record belongs to
    pub wallet: Pubkey,
    /// Token balance in base units
    pub balance: u64,

    // === Alignment ===
    /// Last metric vector written by the administrator
    pub metrics: AlignmentMetrics,
    /// Truncating mean of `metrics` (0-100)
    pub score: u8,
    /// When metrics were last written
    pub metrics_updated_at: i64,

    // === Rights ===
    /// Tier from the most recent evaluation or explicit set
    pub tier: PreservationTier,
    /// When the tier was last written
    pub last_evaluated: i64,

    /// Set once by `open`, never cleared
    pub opened: bool,
    /// PDA bump seed
    pub bump: u8,
}

impl Holder {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // wallet
        8 +                      // balance
        AlignmentMetrics::SIZE + // metrics
        1 +                      // score
        8 +                      // metrics_updated_at
        1 +                      // tier
        8 +                      // last_evaluated
        1 +                      // opened
        1;                       // bump

    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// Bind a freshly created record to its wallet. No-op on an open record.
    pub fn open(&mut self, wallet: Pubkey, bump: u8) {
        if !self.is_open() {
            self.opened = true;
            self.wallet = wallet;
            self.balance = 0;
            self.metrics = AlignmentMetrics::default();
            self.score = 0;
            self.metrics_updated_at = 0;
            self.tier = PreservationTier::None;
            self.last_evaluated = 0;
            self.bump = bump;
        }
    }

    /// Wallets that may own a holder record. The default key is the
    /// system program id and never a participant.
    pub fn is_valid_wallet(key: &Pubkey) -> bool {
        *key != Pubkey::default()
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn entity_alignment(&self) -> AlignmentMetrics {
        self.metrics
    }

    pub fn preservation_rights(&self) -> PreservationTier {
        self.tier
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(SutraError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(self.balance >= amount, SutraError::InsufficientFunds);
        self.balance -= amount;
        Ok(())
    }

    /// Overwrite the metric vector and recompute the score
    pub fn update_alignment(&mut self, metrics: AlignmentMetrics, now: i64) -> Result<()> {
        metrics.validate()?;

        self.metrics = metrics;
        self.score = calculate_total_score(&metrics);
        self.metrics_updated_at = now;
        Ok(())
    }

    pub fn verify_alignment(&self) -> bool {
        is_aligned(self.score)
    }

    pub fn meets(&self, tier: PreservationTier) -> bool {
        tier.is_met_by(self.balance, self.score)
    }

    /// Recompute the tier from current balance and score. Tiers fall as
    /// readily as they rise.
    pub fn evaluate_preservation_rights(&mut self, now: i64) -> PreservationTier {
        self.tier = PreservationTier::highest_for(self.balance, self.score);
        self.last_evaluated = now;
        self.tier
    }

    /// Explicitly set a tier the holder already qualifies for
    pub fn update_preservation_level(&mut self, target: PreservationTier, now: i64) -> Result<()> {
        require!(self.meets(target), SutraError::RequirementsNotMet);

        self.tier = target;
        self.last_evaluated = now;
        Ok(())
    }
}
