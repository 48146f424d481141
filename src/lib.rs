//! Stillpoint - a meditative expansion game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (presence dynamics, clarity, win/fail)
//! - `input`: Direction input smoothing
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod sim;
pub mod tuning;

pub use input::DirectionInput;
pub use sim::{Phase, Simulation, Snapshot};
pub use tuning::Tuning;

/// Fixed-step driver constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Cap on a single frame's elapsed time (seconds); a stalled frame
    /// must not trigger runaway catch-up
    pub const MAX_FRAME_DT: f32 = 0.1;
}
