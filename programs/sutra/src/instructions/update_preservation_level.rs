use anchor_lang::prelude::*;
use crate::access;
use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::errors::SutraError;
use crate::state::{Holder, LedgerState, PreservationTier};

#[derive(Accounts)]
pub struct UpdatePreservationLevel<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        constraint = ledger.is_authority(&authority.key()) @ SutraError::Unauthorized,
    )]
    pub ledger: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, holder.wallet.as_ref()],
        bump = holder.bump,
    )]
    pub holder: Account<'info, Holder>,
}

pub fn handler(ctx: Context<UpdatePreservationLevel>, tier: PreservationTier) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();
    let accounts = &mut *ctx.accounts;
    access::update_preservation_level(
        &accounts.ledger,
        &authority,
        &mut accounts.holder,
        tier,
        now,
    )?;
    let holder = &accounts.holder;

    msg!("Set preservation level of {} to {}", holder.wallet, tier.name());

    Ok(())
}
