//! Direction input smoothing
//!
//! Turns held expand/retract controls into the bounded scalar the simulation
//! consumes. Raw key state is a square wave; the published direction eases
//! toward it with the same `1 - e^(-k*dt)` form the presence radius uses, so
//! control feels organic and replays stay deterministic.

/// Smoothed direction input in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionInput {
    /// Raw held target, clamped to [-1, 1]
    target: f32,
    /// Published, smoothed direction
    direction: f32,
    /// Smoothing time constant
    responsiveness: f32,
}

/// Default smoothing time constant (settles in roughly a third of a second)
pub const DEFAULT_RESPONSIVENESS: f32 = 10.0;

impl Default for DirectionInput {
    fn default() -> Self {
        Self::new(DEFAULT_RESPONSIVENESS)
    }
}

impl DirectionInput {
    pub fn new(responsiveness: f32) -> Self {
        Self {
            target: 0.0,
            direction: 0.0,
            responsiveness: responsiveness.max(0.0),
        }
    }

    /// Set the raw target directly (analog sources), clamped to [-1, 1].
    pub fn set_target(&mut self, target: f32) {
        self.target = target.clamp(-1.0, 1.0);
    }

    /// Fold digital key state into a raw target: expand and retract held
    /// together cancel out.
    pub fn set_held(&mut self, expand: bool, retract: bool) {
        self.target = (expand as i8 - retract as i8) as f32;
    }

    /// Ease the published direction toward the raw target.
    pub fn update(&mut self, dt: f32) {
        let blend = 1.0 - (-self.responsiveness * dt).exp();
        self.direction += (self.target - self.direction) * blend;
        self.direction = self.direction.clamp(-1.0, 1.0);
    }

    /// The smoothed direction, always in [-1, 1].
    pub fn direction(&self) -> f32 {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_is_clamped() {
        let mut input = DirectionInput::default();
        input.set_target(12.0);
        assert_eq!(input.target, 1.0);
        input.set_target(-0.4);
        assert_eq!(input.target, -0.4);
    }

    #[test]
    fn test_held_keys_cancel() {
        let mut input = DirectionInput::default();
        input.set_held(true, true);
        assert_eq!(input.target, 0.0);
        input.set_held(true, false);
        assert_eq!(input.target, 1.0);
        input.set_held(false, true);
        assert_eq!(input.target, -1.0);
    }

    #[test]
    fn test_direction_converges_without_overshoot() {
        let mut input = DirectionInput::default();
        input.set_held(true, false);
        let mut last = 0.0;
        for _ in 0..60 {
            input.update(1.0 / 60.0);
            assert!(input.direction() >= last && input.direction() <= 1.0);
            last = input.direction();
        }
        // One second of hold is far past the settle time
        assert!(input.direction() > 0.99);
    }

    #[test]
    fn test_release_eases_back_to_zero() {
        let mut input = DirectionInput::default();
        input.set_held(true, false);
        for _ in 0..60 {
            input.update(1.0 / 60.0);
        }
        input.set_held(false, false);
        input.update(1.0 / 60.0);
        // Eases, not snaps
        assert!(input.direction() > 0.0 && input.direction() < 1.0);
        for _ in 0..120 {
            input.update(1.0 / 60.0);
        }
        assert!(input.direction().abs() < 0.01);
    }
}
