use anchor_lang::prelude::*;
use crate::constants::HOLDER_SEED;
use crate::state::Holder;

#[derive(Accounts)]
pub struct EvaluatePreservationRights<'info> {
    /// Anyone can trigger a re-evaluation and pays the fee for it.
    /// The tier depends only on the holder record.
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, holder.wallet.as_ref()],
        bump = holder.bump,
    )]
    pub holder: Account<'info, Holder>,
}

pub fn handler(ctx: Context<EvaluatePreservationRights>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let holder = &mut ctx.accounts.holder;
    let tier = holder.evaluate_preservation_rights(now);

    msg!(
        "Evaluated {} as {} (balance: {}, score: {})",
        holder.wallet,
        tier.name(),
        holder.balance,
        holder.score
    );

    Ok(())
}
