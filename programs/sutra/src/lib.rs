use anchor_lang::prelude::*;

pub mod access;
pub mod constants;
pub mod emission;
pub mod errors;
pub mod guard;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{AlignmentMetrics, PoolKind, PreservationTier};

declare_id!("BpMCE7EAYyPbsW5PjMHcfZtqTr4BfC9vg5AffwudJmMP");

#[program]
pub mod sutra {
    use super::*;

    // === Genesis ===

    /// Create the ledger and mint the initial supply to the signer
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Open one of the five supply pools
    pub fn initialize_pool(ctx: Context<InitializePool>, kind: PoolKind) -> Result<()> {
        instructions::initialize_pool::handler(ctx, kind)
    }

    // === Ledger ===

    /// Transfer tokens, subject to the large-transfer alignment policy
    pub fn transfer(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
        instructions::transfer::handler(ctx, amount)
    }

    /// Move tokens from a pool's remaining capacity to a recipient
    pub fn allocate_from_pool(
        ctx: Context<AllocateFromPool>,
        kind: PoolKind,
        amount: u64,
    ) -> Result<()> {
        instructions::allocate_from_pool::handler(ctx, kind, amount)
    }

    /// Pay out the current emission year to the administrator
    pub fn emit_tokens(ctx: Context<EmitTokens>) -> Result<()> {
        instructions::emit_tokens::handler(ctx)
    }

    // === Alignment & Rights ===

    /// Overwrite a holder's alignment metrics
    pub fn update_alignment_metrics(
        ctx: Context<UpdateAlignmentMetrics>,
        metrics: AlignmentMetrics,
    ) -> Result<()> {
        instructions::update_alignment::handler(ctx, metrics)
    }

    /// Recompute a holder's tier from current balance and score
    pub fn evaluate_preservation_rights(ctx: Context<EvaluatePreservationRights>) -> Result<()> {
        instructions::evaluate_rights::handler(ctx)
    }

    /// Set a holder's tier explicitly
    pub fn update_preservation_level(
        ctx: Context<UpdatePreservationLevel>,
        tier: PreservationTier,
    ) -> Result<()> {
        instructions::update_preservation_level::handler(ctx, tier)
    }

    // === Administration ===

    /// Move a holder's entire balance, bypassing the transfer guard
    pub fn emergency_recovery(ctx: Context<EmergencyRecovery>) -> Result<()> {
        instructions::emergency_recovery::handler(ctx)
    }

    /// Hand the administrator role to another key
    pub fn set_authority(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::set_authority::handler(ctx, new_authority)
    }

    // === Views ===

    pub fn calculate_emission(ctx: Context<CalculateEmission>, year: u64) -> Result<u64> {
        instructions::views::calculate_emission(ctx, year)
    }

    pub fn verify_alignment(ctx: Context<InspectHolder>) -> Result<bool> {
        instructions::views::verify_alignment(ctx)
    }

    pub fn verify_preservation_requirements(
        ctx: Context<InspectHolder>,
        tier: PreservationTier,
    ) -> Result<bool> {
        instructions::views::verify_preservation_requirements(ctx, tier)
    }
}
