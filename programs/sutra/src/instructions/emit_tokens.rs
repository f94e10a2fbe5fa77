use anchor_lang::prelude::*;
use crate::access;
use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::errors::SutraError;
use crate::state::{Holder, LedgerState};

#[derive(Accounts)]
pub struct EmitTokens<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        constraint = ledger.is_authority(&authority.key()) @ SutraError::Unauthorized,
    )]
    pub ledger: Account<'info, LedgerState>,

    /// A handed-over authority may not hold a record yet
    #[account(
        init_if_needed,
        payer = authority,
        space = Holder::SIZE,
        seeds = [HOLDER_SEED, authority.key().as_ref()],
        bump,
    )]
    pub authority_holder: Account<'info, Holder>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<EmitTokens>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();
    let accounts = &mut *ctx.accounts;
    accounts.authority_holder.open(authority, ctx.bumps.authority_holder);

    let year = accounts.ledger.current_year_index(now);
    let minted = access::emit_tokens(
        &mut accounts.ledger,
        &authority,
        &mut accounts.authority_holder,
        now,
    )?;

    msg!(
        "Emitted {} for year {} (total emitted: {})",
        minted,
        year,
        accounts.ledger.total_emitted
    );

    Ok(())
}
