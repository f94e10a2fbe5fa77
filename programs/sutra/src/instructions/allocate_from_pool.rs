use anchor_lang::prelude::*;
use crate::access;
use crate::constants::{HOLDER_SEED, LEDGER_SEED, POOL_SEED};
use crate::errors::SutraError;
use crate::state::{Holder, LedgerState, Pool, PoolKind};

#[derive(Accounts)]
#[instruction(kind: PoolKind)]
pub struct AllocateFromPool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        constraint = ledger.is_authority(&authority.key()) @ SutraError::Unauthorized,
    )]
    pub ledger: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [POOL_SEED, kind.seed().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    /// CHECK: Only used to derive the recipient holder address
    #[account(
        constraint = Holder::is_valid_wallet(&recipient.key()) @ SutraError::ValidationError,
    )]
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = Holder::SIZE,
        seeds = [HOLDER_SEED, recipient.key().as_ref()],
        bump,
    )]
    pub recipient_holder: Account<'info, Holder>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AllocateFromPool>, kind: PoolKind, amount: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let recipient = ctx.accounts.recipient.key();
    let accounts = &mut *ctx.accounts;
    accounts.recipient_holder.open(recipient, ctx.bumps.recipient_holder);

    access::allocate_from_pool(
        &mut accounts.ledger,
        &authority,
        &mut accounts.pool,
        &mut accounts.recipient_holder,
        amount,
    )?;

    msg!(
        "Allocated {} from {} pool to {} (remaining: {})",
        amount,
        kind.name(),
        recipient,
        accounts.pool.remaining()
    );

    Ok(())
}
