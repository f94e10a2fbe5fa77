use anchor_lang::prelude::*;
use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::errors::SutraError;
use crate::access;
use crate::state::{Holder, LedgerState};

// =============================================================================
// EMERGENCY RECOVERY
// =============================================================================
//
// Moves the whole balance of a compromised or misaligned holder to a
// destination chosen by the administrator. Skips the transfer guard and all
// alignment checks. The administrator constraint below is the only gate.
// =============================================================================

#[derive(Accounts)]
pub struct EmergencyRecovery<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        constraint = ledger.is_authority(&authority.key()) @ SutraError::Unauthorized,
    )]
    pub ledger: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, source_holder.wallet.as_ref()],
        bump = source_holder.bump,
    )]
    pub source_holder: Account<'info, Holder>,

    /// CHECK: Only used to derive the destination holder address
    #[account(
        constraint = destination.key() != source_holder.wallet @ SutraError::ValidationError,
        constraint = Holder::is_valid_wallet(&destination.key()) @ SutraError::ValidationError,
    )]
    pub destination: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = Holder::SIZE,
        seeds = [HOLDER_SEED, destination.key().as_ref()],
        bump,
    )]
    pub destination_holder: Account<'info, Holder>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<EmergencyRecovery>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let destination = ctx.accounts.destination.key();
    let accounts = &mut *ctx.accounts;
    accounts.destination_holder.open(destination, ctx.bumps.destination_holder);

    let moved = access::emergency_recovery(
        &accounts.ledger,
        &authority,
        &mut accounts.source_holder,
        &mut accounts.destination_holder,
    )?;

    msg!(
        "Emergency recovery moved {} from {} to {}",
        moved,
        accounts.source_holder.wallet,
        destination
    );

    Ok(())
}
