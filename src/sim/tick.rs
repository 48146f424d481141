//! Fixed timestep simulation tick
//!
//! Core loop that advances a session deterministically. Replaying the same
//! sequence of `(dt, direction)` calls always yields bit-identical state.

use super::state::{Phase, SimState, Snapshot};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, TICK_DT};
use crate::tuning::Tuning;

/// Advance the session by one fixed timestep.
///
/// The update order is load-bearing: presence integrates first, then the
/// threshold decays, then strain is measured against the decayed threshold,
/// then clarity reacts, and only then are the win and fail conditions
/// checked. The win check runs before the fail check, so a tick that crosses
/// both resolves as a win.
pub fn tick(state: &mut SimState, tuning: &Tuning, direction: f32, dt: f32) {
    if state.phase.is_terminal() {
        return;
    }

    // Input, then presence integration
    state.presence_mut().set_expand_direction(direction);
    state.presence_mut().update(dt);

    // Rising difficulty: the sustainable ceiling only ever comes down
    state.sustainable_threshold =
        (state.sustainable_threshold - tuning.threshold_decay_rate * dt).max(tuning.threshold_floor);

    let overextension = state.presence().overextension(state.sustainable_threshold);

    // Two-branch clarity policy, never blended: strain drains, rest restores
    if overextension > 0.0 {
        state.clarity = (state.clarity - tuning.clarity_decay_rate * overextension * dt).max(0.0);
    } else {
        // The recovery ceiling erodes with session time, so tension never
        // fully resolves even under perfect play. Clarity already above the
        // ceiling is left where it is.
        let target_clarity = (1.0 - (state.game_time / tuning.win_time) * tuning.recovery_decay_fraction)
            .max(tuning.clarity_min_recovery);
        if state.clarity < target_clarity {
            state.clarity = (state.clarity + tuning.clarity_recovery_rate * dt)
                .min(target_clarity)
                .min(1.0);
        }
    }

    state.game_time += dt;

    // Win before fail: exact-boundary ties favor winning
    if state.game_time >= tuning.win_time {
        state.phase = Phase::Won;
        log::info!("session won at game_time {:.2}s", state.game_time);
    } else if state.clarity <= tuning.failure_clarity {
        state.phase = Phase::Failed;
        log::info!(
            "session failed at game_time {:.2}s (clarity {:.3})",
            state.game_time,
            state.clarity
        );
    }
}

/// Fixed-timestep driver around one [`SimState`].
///
/// Collaborators feed it wall-clock time and the current direction input;
/// it drains that time in `TICK_DT` slices so the simulation itself never
/// sees a variable step.
#[derive(Debug, Clone)]
pub struct Simulation {
    state: SimState,
    tuning: Tuning,
    accumulator: f32,
}

impl Simulation {
    /// Create a session with the given balance values.
    pub fn new(tuning: Tuning) -> Self {
        let state = SimState::new(&tuning);
        Self {
            state,
            tuning,
            accumulator: 0.0,
        }
    }

    /// Advance by `dt` wall-clock seconds with the given direction input.
    ///
    /// `dt` is clamped to `[0, MAX_FRAME_DT]` so a stalled frame cannot
    /// trigger runaway catch-up. Leftover sub-tick time stays in the
    /// accumulator for the next call. No-op once terminal.
    pub fn update(&mut self, dt: f32, direction: f32) {
        if self.state.phase.is_terminal() {
            return;
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.state.elapsed_time += dt;
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.tuning, direction, TICK_DT);
            self.accumulator -= TICK_DT;
            substeps += 1;
        }
    }

    /// Immutable view of the current state for rendering and input.
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Replace the session with a fresh one in the Playing phase.
    pub fn reset(&mut self) {
        self.state = SimState::new(&self.tuning);
        self.accumulator = 0.0;
    }

    /// Session completion in [0, 1], monotonic while Playing.
    pub fn progress(&self) -> f32 {
        (self.state.game_time / self.tuning.win_time).min(1.0)
    }

    /// The session state (read-only).
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// The balance values this session runs with.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
