use anchor_lang::prelude::*;
use crate::constants::HOLDER_SEED;
use crate::errors::SutraError;
use crate::state::{ledger, Holder};

#[derive(Accounts)]
pub struct TransferTokens<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, sender.key().as_ref()],
        bump = sender_holder.bump,
    )]
    pub sender_holder: Account<'info, Holder>,

    /// CHECK: Only used to derive the recipient holder address
    #[account(
        constraint = recipient.key() != sender.key() @ SutraError::ValidationError,
        constraint = Holder::is_valid_wallet(&recipient.key()) @ SutraError::ValidationError,
    )]
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = sender,
        space = Holder::SIZE,
        seeds = [HOLDER_SEED, recipient.key().as_ref()],
        bump,
    )]
    pub recipient_holder: Account<'info, Holder>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
    let recipient = ctx.accounts.recipient.key();
    let accounts = &mut *ctx.accounts;
    accounts.recipient_holder.open(recipient, ctx.bumps.recipient_holder);

    ledger::transfer(&mut accounts.sender_holder, &mut accounts.recipient_holder, amount)?;

    msg!(
        "Transferred {} from {} to {}",
        amount,
        accounts.sender.key(),
        recipient
    );

    Ok(())
}
