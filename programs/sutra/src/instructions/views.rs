use anchor_lang::prelude::*;
use crate::constants::HOLDER_SEED;
use crate::emission;
use crate::state::{Holder, PreservationTier};

// =============================================================================
// READ-ONLY VIEWS
// =============================================================================
//
// Results are delivered through Anchor return data so clients can simulate
// these instead of decoding accounts themselves. A wallet without a holder
// record reads as balance 0 and score 0.
// =============================================================================

#[derive(Accounts)]
pub struct CalculateEmission {}

pub fn calculate_emission(_ctx: Context<CalculateEmission>, year: u64) -> Result<u64> {
    Ok(emission::calculate_emission(year))
}

#[derive(Accounts)]
pub struct InspectHolder<'info> {
    /// CHECK: Only used to derive the holder address
    pub wallet: UncheckedAccount<'info>,

    /// CHECK: Address is derived from `wallet`; the record may not exist yet
    #[account(
        seeds = [HOLDER_SEED, wallet.key().as_ref()],
        bump,
    )]
    pub holder: UncheckedAccount<'info>,
}

/// Decode a holder record, or `None` if the address was never initialized
pub fn load_holder(info: &AccountInfo) -> Result<Option<Holder>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let holder = Holder::try_deserialize(&mut &data[..])?;
    Ok(Some(holder))
}

pub fn alignment_of(holder: Option<&Holder>) -> bool {
    holder.map_or(false, Holder::verify_alignment)
}

pub fn meets_requirements(holder: Option<&Holder>, tier: PreservationTier) -> bool {
    match holder {
        Some(holder) => holder.meets(tier),
        None => tier.is_met_by(0, 0),
    }
}

pub fn verify_alignment(ctx: Context<InspectHolder>) -> Result<bool> {
    let holder = load_holder(&ctx.accounts.holder)?;
    Ok(alignment_of(holder.as_ref()))
}

pub fn verify_preservation_requirements(
    ctx: Context<InspectHolder>,
    tier: PreservationTier,
) -> Result<bool> {
    let holder = load_holder(&ctx.accounts.holder)?;
    Ok(meets_requirements(holder.as_ref(), tier))
}
