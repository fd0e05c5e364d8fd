//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod assembler;
mod mode_selector;
mod naming;

pub use assembler::{Assembly, InlineAssembler};
pub use mode_selector::ModeSelector;
pub use naming::{NamingCoordinator, FALLBACK_ASSET_PATTERN};
