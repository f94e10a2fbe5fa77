use anchor_lang::prelude::*;
use crate::access;
use crate::constants::LEDGER_SEED;
use crate::errors::SutraError;
use crate::state::LedgerState;

#[derive(Accounts)]
pub struct SetAuthority<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        constraint = ledger.is_authority(&authority.key()) @ SutraError::Unauthorized,
    )]
    pub ledger: Account<'info, LedgerState>,
}

pub fn handler(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    access::set_authority(&mut ctx.accounts.ledger, &authority, new_authority)?;

    msg!("Set ledger administrator to {}", new_authority);
    Ok(())
}
