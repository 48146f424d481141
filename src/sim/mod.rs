//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No wall-clock reads, no RNG
//! - No rendering or platform dependencies
//!
//! Rendering and input are collaborators: input hands the sim a bounded
//! scalar direction, rendering reads immutable [`Snapshot`]s.

pub mod presence;
pub mod state;
pub mod tick;

pub use presence::Presence;
pub use state::{Phase, SimState, Snapshot};
pub use tick::{Simulation, tick};
