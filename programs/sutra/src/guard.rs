use anchor_lang::prelude::*;
use crate::constants::LARGE_TRANSFER_THRESHOLD;
use crate::errors::SutraError;
use crate::state::Holder;

/// Transfer policy applied before any balance moves.
///
/// Amounts below `LARGE_TRANSFER_THRESHOLD` pass without looking at the
/// sender's alignment. Larger amounts need a verified sender.
pub fn authorize_transfer(sender: &Holder, amount: u64) -> Result<()> {
    if !requires_alignment(amount) {
        return Ok(());
    }
    require!(sender.verify_alignment(), SutraError::PolicyViolation);
    Ok(())
}

pub fn requires_alignment(amount: u64) -> bool {
    amount >= LARGE_TRANSFER_THRESHOLD
}
