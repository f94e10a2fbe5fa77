// =============================================================================
// SUTRA STATE MODULE
// =============================================================================
//
// Persisted records:
// - LedgerState: administrator, genesis and emission bookkeeping (one)
// - Pool: capacity and allocated counter (one per PoolKind)
// - Holder: balance, alignment metrics, score and tier (one per wallet)
// =============================================================================

pub mod alignment;
pub mod holder;
pub mod ledger;
pub mod pool;
pub mod rights;

pub use alignment::*;
pub use holder::*;
pub use ledger::*;
pub use pool::*;
pub use rights::*;
