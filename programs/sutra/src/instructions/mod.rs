pub mod initialize;
pub mod initialize_pool;
pub mod transfer;
pub mod update_alignment;
pub mod evaluate_rights;
pub mod update_preservation_level;
pub mod allocate_from_pool;
pub mod emit_tokens;
pub mod emergency_recovery;
pub mod set_authority;
pub mod views;

pub use initialize::*;
pub use initialize_pool::*;
pub use transfer::*;
pub use update_alignment::*;
pub use evaluate_rights::*;
pub use update_preservation_level::*;
pub use allocate_from_pool::*;
pub use emit_tokens::*;
pub use emergency_recovery::*;
pub use set_authority::*;
pub use views::*;
