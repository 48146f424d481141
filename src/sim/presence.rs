//! The presence: a single continuous circular region of being
//!
//! Its radius is the only player-influenced state variable. Input pushes a
//! target radius around; the actual radius follows with frame-rate-independent
//! exponential smoothing so the motion reads as organic and never overshoots.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// The player-controlled presence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presence {
    /// Center position, fixed for the lifetime of the presence
    pos: Vec2,
    /// Current radius, always within [min_radius, max_radius]
    pub radius: f32,
    /// Radius the smoothing is approaching, same bounds
    pub target_radius: f32,
    /// Control input in [-1, 1]: positive expands, negative retracts
    expand_direction: f32,
    /// Target-radius growth rate at full expand input
    expand_rate: f32,
    /// Target-radius shrink rate at full retract input
    retract_rate: f32,
    /// Lower radius bound
    min_radius: f32,
    /// Upper radius bound
    max_radius: f32,
    /// Exponential smoothing time constant
    smoothness: f32,
}

impl Presence {
    /// Create a presence at `pos` with the tuning's starting radius.
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        let radius = tuning.start_radius.clamp(tuning.min_radius, tuning.max_radius);
        Self {
            pos,
            radius,
            target_radius: radius,
            expand_direction: 0.0,
            expand_rate: tuning.expand_rate,
            retract_rate: tuning.retract_rate,
            min_radius: tuning.min_radius,
            max_radius: tuning.max_radius,
            smoothness: tuning.smoothness,
        }
    }

    /// Center position (immutable after construction).
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Upper radius bound.
    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    /// Set the control direction, clamped to [-1, 1]. Pure state assignment;
    /// nothing moves until the next `update`.
    pub fn set_expand_direction(&mut self, direction: f32) {
        self.expand_direction = direction.clamp(-1.0, 1.0);
    }

    /// Advance the presence by `dt` seconds.
    ///
    /// The target radius integrates the control direction (expanding is
    /// deliberately slower than letting go), then the radius approaches the
    /// target with the exact `1 - e^(-k*dt)` form. The exponential form, not
    /// a linear approximation, is what keeps trajectories identical across
    /// different fixed-tick sizes.
    pub fn update(&mut self, dt: f32) {
        let rate = if self.expand_direction > 0.0 {
            self.expand_rate
        } else {
            self.retract_rate
        };
        self.target_radius += rate * self.expand_direction * dt;
        self.target_radius = self.target_radius.clamp(self.min_radius, self.max_radius);

        let blend = 1.0 - (-self.smoothness * dt).exp();
        self.radius += (self.target_radius - self.radius) * blend;
        self.radius = self.radius.clamp(self.min_radius, self.max_radius);
    }

    /// Normalized strain beyond the sustainable threshold, in [0, 1].
    ///
    /// Zero at or below the threshold, saturating to 1 at `max_radius`.
    /// A threshold at `max_radius` leaves no room to overextend and
    /// returns 0.
    pub fn overextension(&self, threshold: f32) -> f32 {
        if self.radius <= threshold {
            return 0.0;
        }
        let room = self.max_radius - threshold;
        if room <= 0.0 {
            return 0.0;
        }
        ((self.radius - threshold) / room).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presence() -> Presence {
        Presence::new(Vec2::ZERO, &Tuning::default())
    }

    #[test]
    fn test_direction_is_clamped() {
        let mut p = presence();
        p.set_expand_direction(3.0);
        assert_eq!(p.expand_direction, 1.0);
        p.set_expand_direction(-7.5);
        assert_eq!(p.expand_direction, -1.0);
        p.set_expand_direction(0.25);
        assert_eq!(p.expand_direction, 0.25);
    }

    #[test]
    fn test_zero_direction_holds_target() {
        let mut p = presence();
        let target = p.target_radius;
        for _ in 0..600 {
            p.update(1.0 / 60.0);
        }
        assert_eq!(p.target_radius, target);
    }

    #[test]
    fn test_radius_stays_bounded_under_sustained_input() {
        let tuning = Tuning::default();
        let mut p = presence();
        p.set_expand_direction(1.0);
        for _ in 0..60 * 60 {
            p.update(1.0 / 60.0);
            assert!(p.radius >= tuning.min_radius && p.radius <= tuning.max_radius);
        }
        // A minute of full expansion pins the target at the ceiling
        assert_eq!(p.target_radius, tuning.max_radius);
        assert!(p.radius > tuning.max_radius - 1e-3);

        p.set_expand_direction(-1.0);
        for _ in 0..60 * 60 {
            p.update(1.0 / 60.0);
            assert!(p.radius >= tuning.min_radius && p.radius <= tuning.max_radius);
        }
        assert_eq!(p.target_radius, tuning.min_radius);
    }

    #[test]
    fn test_smoothing_never_overshoots() {
        let mut p = presence();
        p.set_expand_direction(1.0);
        let mut last = p.radius;
        for _ in 0..1200 {
            p.update(1.0 / 60.0);
            // Monotone approach from below while expanding
            assert!(p.radius >= last);
            assert!(p.radius <= p.target_radius + 1e-6);
            last = p.radius;
        }
    }

    #[test]
    fn test_retract_outpaces_expand() {
        let dt = 1.0 / 60.0;
        let mut expanding = presence();
        expanding.set_expand_direction(1.0);
        expanding.update(dt);
        let gained = expanding.target_radius - Tuning::default().start_radius;

        let mut retracting = presence();
        retracting.set_expand_direction(-1.0);
        retracting.update(dt);
        let shed = Tuning::default().start_radius - retracting.target_radius;

        assert!(shed > gained);
    }

    #[test]
    fn test_overextension_zero_at_or_below_threshold() {
        let mut p = presence();
        p.radius = 0.5;
        assert_eq!(p.overextension(0.5), 0.0);
        assert_eq!(p.overextension(0.9), 0.0);
    }

    #[test]
    fn test_overextension_saturates_at_max_radius() {
        let tuning = Tuning::default();
        let mut p = presence();
        p.radius = tuning.max_radius;
        assert_eq!(p.overextension(tuning.min_radius), 1.0);
    }

    #[test]
    fn test_overextension_degenerate_threshold() {
        let tuning = Tuning::default();
        let mut p = presence();
        p.radius = tuning.max_radius;
        // Threshold at the ceiling leaves no room to overextend
        assert_eq!(p.overextension(tuning.max_radius), 0.0);
    }

    #[test]
    fn test_overextension_is_normalized() {
        let mut p = presence();
        p.radius = 0.7;
        // Halfway between threshold 0.4 and max 1.0
        let ox = p.overextension(0.4);
        assert!((ox - 0.5).abs() < 1e-6);
    }
}
