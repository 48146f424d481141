//! Data-driven game balance
//!
//! All gameplay numbers live here so a session can be re-balanced from a
//! JSON file without touching simulation code. Structural timing constants
//! (tick rate, substep caps) are in [`crate::consts`] instead.

use serde::{Deserialize, Serialize};

/// Balance values for one session. All radii and the sustainable threshold
/// share one normalized unit scale with `max_radius` at 1.0, so thresholds
/// and radii are directly comparable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Smallest the presence can contract to
    pub min_radius: f32,
    /// Largest the presence can expand to (unit scale top)
    pub max_radius: f32,
    /// Radius at session start / reset
    pub start_radius: f32,
    /// Target-radius growth per second at full expand input
    pub expand_rate: f32,
    /// Target-radius shrink per second at full retract input (> expand_rate,
    /// letting go is always faster than reaching)
    pub retract_rate: f32,
    /// Exponential smoothing time constant for radius approach
    pub smoothness: f32,
    /// Sustainable threshold at session start
    pub threshold_start: f32,
    /// Lowest the sustainable threshold decays to
    pub threshold_floor: f32,
    /// Threshold decay per second (rising difficulty)
    pub threshold_decay_rate: f32,
    /// Clarity loss per second at full overextension
    pub clarity_decay_rate: f32,
    /// Clarity regained per second when not overextended
    pub clarity_recovery_rate: f32,
    /// Floor of the shrinking recovery ceiling
    pub clarity_min_recovery: f32,
    /// How much of the recovery ceiling erodes over a full session
    pub recovery_decay_fraction: f32,
    /// Clarity at or below this ends the session in failure
    pub failure_clarity: f32,
    /// Session length in seconds; surviving this long wins
    pub win_time: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            min_radius: 0.05,
            max_radius: 1.0,
            start_radius: 0.18,
            expand_rate: 0.25,
            retract_rate: 0.45,
            smoothness: 4.0,
            threshold_start: 0.9,
            threshold_floor: 0.3,
            threshold_decay_rate: 0.004,
            clarity_decay_rate: 0.05,
            clarity_recovery_rate: 0.03,
            clarity_min_recovery: 0.4,
            recovery_decay_fraction: 0.5,
            failure_clarity: 0.15,
            win_time: 180.0,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON. Missing fields fall back to the
    /// shipped defaults; the result is sanitized before use.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Self = serde_json::from_str(json)?;
        tuning.sanitize();
        Ok(tuning)
    }

    /// Clamp every value into its documented range. The simulation clamps
    /// its own state each tick; this keeps hand-edited balance files from
    /// starting it outside those ranges in the first place.
    pub fn sanitize(&mut self) {
        self.max_radius = self.max_radius.max(0.01);
        self.min_radius = self.min_radius.clamp(0.0, self.max_radius);
        self.start_radius = self.start_radius.clamp(self.min_radius, self.max_radius);
        self.expand_rate = self.expand_rate.max(0.0);
        // Retract must stay strictly faster than expand
        self.retract_rate = self.retract_rate.max(self.expand_rate);
        self.smoothness = self.smoothness.max(0.0);
        self.threshold_floor = self.threshold_floor.clamp(self.min_radius, self.max_radius);
        self.threshold_start = self
            .threshold_start
            .clamp(self.threshold_floor, self.max_radius);
        self.threshold_decay_rate = self.threshold_decay_rate.max(0.0);
        self.clarity_decay_rate = self.clarity_decay_rate.max(0.0);
        self.clarity_recovery_rate = self.clarity_recovery_rate.max(0.0);
        self.clarity_min_recovery = self.clarity_min_recovery.clamp(0.0, 1.0);
        self.recovery_decay_fraction = self.recovery_decay_fraction.clamp(0.0, 1.0);
        self.failure_clarity = self.failure_clarity.clamp(0.0, 1.0);
        self.win_time = self.win_time.max(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let mut t = Tuning::default();
        let before = t.clone();
        t.sanitize();
        assert_eq!(t, before, "shipped defaults must survive sanitize untouched");
        assert!(t.retract_rate > t.expand_rate);
        assert!(t.threshold_floor > t.min_radius);
    }

    #[test]
    fn test_from_json_partial_override() {
        let t = Tuning::from_json(r#"{ "win_time": 60.0, "failure_clarity": 0.2 }"#).unwrap();
        assert_eq!(t.win_time, 60.0);
        assert_eq!(t.failure_clarity, 0.2);
        // Untouched fields keep defaults
        assert_eq!(t.smoothness, Tuning::default().smoothness);
    }

    #[test]
    fn test_sanitize_clamps_out_of_range() {
        let t = Tuning::from_json(
            r#"{ "retract_rate": 0.1, "expand_rate": 0.5, "start_radius": 5.0, "failure_clarity": 2.0 }"#,
        )
        .unwrap();
        assert!(t.retract_rate >= t.expand_rate);
        assert!(t.start_radius <= t.max_radius);
        assert!(t.failure_clarity <= 1.0);
    }
}
