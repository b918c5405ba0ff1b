//! Pippet Simulation Engine
//!
//! Platform-agnostic core logic for the Pippet virtual pet. This crate
//! provides the attribute model, action and tick rules, condition
//! classification and session orchestration without UI or platform-specific
//! dependencies. The simulation is fully deterministic: the same sequence
//! of actions and ticks always produces the same state.

pub mod actions;
pub mod condition;
pub mod constants;
pub mod session;
pub mod state;
pub mod tick;

// Re-export commonly used types
pub use actions::{ActionEffect, ActionId, ActionOutcome, resolve_action};
pub use condition::{Condition, DirtTier, DistressCause, NeedyCause, UnwellCause, classify};
pub use session::{PetSession, Snapshot};
pub use state::{PetState, Vitals, VitalsDelta};
pub use tick::{TickOutcome, resolve_tick};
