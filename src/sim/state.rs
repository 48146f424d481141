//! Session state and core simulation types
//!
//! One [`SimState`] holds everything a session mutates: the presence, the
//! global clarity scalar, the decaying sustainable threshold, and the phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::presence::Presence;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active play
    Playing,
    /// Survived the full session (terminal)
    Won,
    /// Clarity reached its floor (terminal)
    Failed,
}

impl Phase {
    /// True once the session has ended, either way.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won | Phase::Failed)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Global clarity in [0, 1]; the session fails at its floor
    pub clarity: f32,
    /// Radius ceiling below which no strain accrues; decays over the
    /// session and never rises except on reset
    pub sustainable_threshold: f32,
    /// Simulated seconds, advanced one fixed tick at a time while Playing
    pub game_time: f32,
    /// Wall-clock seconds fed to the driver, frozen once terminal
    pub elapsed_time: f32,
    /// Current phase; transitions are one-way out of Playing
    pub phase: Phase,
    /// The one presence this session owns. All mutation goes through the
    /// per-tick update; collaborators only ever see snapshots.
    presence: Presence,
}

impl SimState {
    /// Create a fresh session in the Playing phase.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            clarity: 1.0,
            sustainable_threshold: tuning.threshold_start,
            game_time: 0.0,
            elapsed_time: 0.0,
            phase: Phase::Playing,
            presence: Presence::new(Vec2::ZERO, tuning),
        }
    }

    /// Read access to the presence.
    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    pub(super) fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }

    /// Immutable view of the state for rendering and input collaborators,
    /// safe to sample at arbitrary (non-tick-aligned) times.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            presence_x: self.presence.pos().x,
            presence_y: self.presence.pos().y,
            radius: self.presence.radius,
            clarity: self.clarity,
            elapsed_time: self.elapsed_time,
            game_time: self.game_time,
            phase: self.phase,
            sustainable_threshold: self.sustainable_threshold,
        }
    }
}

/// Read-only copy of the observable session state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub presence_x: f32,
    pub presence_y: f32,
    pub radius: f32,
    pub clarity: f32,
    pub elapsed_time: f32,
    pub game_time: f32,
    pub phase: Phase,
    pub sustainable_threshold: f32,
}
