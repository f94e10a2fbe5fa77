use anchor_lang::prelude::*;
use crate::constants::{HOLDER_SEED, INITIAL_SUPPLY, LEDGER_SEED};
use crate::state::{Holder, LedgerState};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer, becomes the ledger administrator
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = LedgerState::SIZE,
        seeds = [LEDGER_SEED],
        bump,
    )]
    pub ledger: Account<'info, LedgerState>,

    /// Receives the initial supply
    #[account(
        init,
        payer = authority,
        space = Holder::SIZE,
        seeds = [HOLDER_SEED, authority.key().as_ref()],
        bump,
    )]
    pub authority_holder: Account<'info, Holder>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();

    let holder = &mut ctx.accounts.authority_holder;
    holder.open(authority, ctx.bumps.authority_holder);

    let ledger = &mut ctx.accounts.ledger;
    ledger.genesis(authority, holder, now, ctx.bumps.ledger)?;

    msg!("SUTRA genesis: minted {} to administrator {}", INITIAL_SUPPLY, authority);

    Ok(())
}
