use anchor_lang::prelude::*;
use crate::access;
use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::errors::SutraError;
use crate::state::{AlignmentMetrics, Holder, LedgerState};

// =============================================================================
// UPDATE ALIGNMENT METRICS
// =============================================================================
//
// Administrator-gated. Holders cannot write their own metrics; the score that
// unlocks large transfers and tiers comes only from the administrator.
// =============================================================================

#[derive(Accounts)]
pub struct UpdateAlignmentMetrics<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        constraint = ledger.is_authority(&authority.key()) @ SutraError::Unauthorized,
    )]
    pub ledger: Account<'info, LedgerState>,

    /// CHECK: Only used to derive the holder address
    #[account(
        constraint = Holder::is_valid_wallet(&wallet.key()) @ SutraError::ValidationError,
    )]
    pub wallet: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = Holder::SIZE,
        seeds = [HOLDER_SEED, wallet.key().as_ref()],
        bump,
    )]
    pub holder: Account<'info, Holder>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<UpdateAlignmentMetrics>, metrics: AlignmentMetrics) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();
    let wallet = ctx.accounts.wallet.key();
    let accounts = &mut *ctx.accounts;
    accounts.holder.open(wallet, ctx.bumps.holder);

    access::update_alignment_metrics(
        &accounts.ledger,
        &authority,
        &mut accounts.holder,
        metrics,
        now,
    )?;
    let holder = &accounts.holder;

    msg!(
        "Updated alignment for {} (score: {}, aligned: {})",
        wallet,
        holder.score,
        holder.verify_alignment()
    );

    Ok(())
}
