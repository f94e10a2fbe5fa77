use anchor_lang::prelude::*;
use crate::access;
use crate::constants::{LEDGER_SEED, POOL_SEED};
use crate::errors::SutraError;
use crate::state::{LedgerState, Pool, PoolKind};

#[derive(Accounts)]
#[instruction(kind: PoolKind)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        constraint = ledger.is_authority(&authority.key()) @ SutraError::Unauthorized,
    )]
    pub ledger: Account<'info, LedgerState>,

    #[account(
        init,
        payer = authority,
        space = Pool::SIZE,
        seeds = [POOL_SEED, kind.seed().as_ref()],
        bump,
    )]
    pub pool: Account<'info, Pool>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializePool>, kind: PoolKind) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let accounts = &mut *ctx.accounts;
    access::initialize_pool(
        &accounts.ledger,
        &authority,
        &mut accounts.pool,
        kind,
        ctx.bumps.pool,
    )?;
    let pool = &accounts.pool;

    msg!("Opened {} pool with capacity {}", kind.name(), pool.capacity);

    Ok(())
}
