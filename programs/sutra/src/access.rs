use anchor_lang::prelude::*;
use crate::errors::SutraError;
use crate::state::{
    emergency_sweep, AlignmentMetrics, Holder, LedgerState, Pool, PoolKind, PreservationTier,
};

// =============================================================================
// ADMINISTRATOR OPERATIONS
// =============================================================================
//
// Every privileged instruction handler goes through one of these entry
// points. Each checks the caller against the ledger authority before touching
// any state, then hands off to the unprivileged state method.
// =============================================================================

pub fn require_authority(ledger: &LedgerState, caller: &Pubkey) -> Result<()> {
    require!(ledger.is_authority(caller), SutraError::Unauthorized);
    Ok(())
}

pub fn initialize_pool(
    ledger: &LedgerState,
    caller: &Pubkey,
    pool: &mut Pool,
    kind: PoolKind,
    bump: u8,
) -> Result<()> {
    require_authority(ledger, caller)?;
    pool.open(kind, bump);
    Ok(())
}

pub fn update_alignment_metrics(
    ledger: &LedgerState,
    caller: &Pubkey,
    holder: &mut Holder,
    metrics: AlignmentMetrics,
    now: i64,
) -> Result<()> {
    require_authority(ledger, caller)?;
    holder.update_alignment(metrics, now)
}

pub fn update_preservation_level(
    ledger: &LedgerState,
    caller: &Pubkey,
    holder: &mut Holder,
    tier: PreservationTier,
    now: i64,
) -> Result<()> {
    require_authority(ledger, caller)?;
    holder.update_preservation_level(tier, now)
}

pub fn allocate_from_pool(
    ledger: &mut LedgerState,
    caller: &Pubkey,
    pool: &mut Pool,
    recipient: &mut Holder,
    amount: u64,
) -> Result<()> {
    require_authority(ledger, caller)?;
    ledger.allocate_from_pool(pool, recipient, amount)
}

pub fn emit_tokens(
    ledger: &mut LedgerState,
    caller: &Pubkey,
    authority_holder: &mut Holder,
    now: i64,
) -> Result<u64> {
    require_authority(ledger, caller)?;
    ledger.emit_tokens(authority_holder, now)
}

pub fn emergency_recovery(
    ledger: &LedgerState,
    caller: &Pubkey,
    from: &mut Holder,
    to: &mut Holder,
) -> Result<u64> {
    require_authority(ledger, caller)?;
    emergency_sweep(from, to)
}

pub fn set_authority(
    ledger: &mut LedgerState,
    caller: &Pubkey,
    new_authority: Pubkey,
) -> Result<()> {
    require_authority(ledger, caller)?;
    ledger.set_authority(new_authority)
}
