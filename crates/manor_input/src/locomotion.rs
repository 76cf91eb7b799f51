//! Thumbstick locomotion

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Locomotion tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocomotionConfig {
    /// Stick deflections below this magnitude are ignored
    pub dead_zone: f32,
    /// World units moved per tick at full deflection
    pub move_speed: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            dead_zone: 0.1,
            move_speed: 0.05,
        }
    }
}

/// Smooth head-relative movement from a thumbstick
///
/// The stick vector is rotated by the view yaw so "forward" always means
/// where the player is looking, then scaled by the per-tick speed. Vertical
/// position is never affected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Locomotion {
    config: LocomotionConfig,
}

impl Locomotion {
    /// Create with the given tuning
    pub fn new(config: LocomotionConfig) -> Self {
        Self { config }
    }

    /// Tuning in use
    pub fn config(&self) -> LocomotionConfig {
        self.config
    }

    /// Displacement for one tick of stick input
    ///
    /// Returns `None` inside the dead zone.
    pub fn step(&self, stick: Vec2, view_yaw: f32) -> Option<Vec3> {
        if stick.length() < self.config.dead_zone {
            return None;
        }
        let (sin, cos) = view_yaw.sin_cos();
        let dx = stick.x * cos - stick.y * sin;
        let dz = stick.x * sin + stick.y * cos;
        Some(Vec3::new(dx, 0.0, dz) * self.config.move_speed)
    }

    /// Apply one tick of movement, vetoed by a collision test
    ///
    /// `blocked` is asked about the candidate position; a blocked step
    /// leaves the position unchanged rather than sliding.
    pub fn advance<F>(&self, position: Vec3, stick: Vec2, view_yaw: f32, blocked: F) -> Vec3
    where
        F: Fn(Vec3) -> bool,
    {
        let Some(step) = self.step(stick, view_yaw) else {
            return position;
        };
        let candidate = position + step;
        if blocked(candidate) {
            position
        } else {
            candidate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_zone() {
        let locomotion = Locomotion::default();
        assert_eq!(locomotion.step(Vec2::new(0.05, 0.05), 0.0), None);
        assert!(locomotion.step(Vec2::new(0.5, 0.0), 0.0).is_some());
    }

    #[test]
    fn test_step_scales_with_speed() {
        let locomotion = Locomotion::default();
        let step = locomotion.step(Vec2::new(0.0, 1.0), 0.0).unwrap();
        assert!((step.z - 0.05).abs() < 1e-6);
        assert_eq!(step.y, 0.0);
    }

    #[test]
    fn test_step_rotates_with_yaw() {
        let locomotion = Locomotion::default();
        // Quarter turn: pushing "forward" now moves along +x
        let step = locomotion
            .step(Vec2::new(0.0, 1.0), -std::f32::consts::FRAC_PI_2)
            .unwrap();
        assert!((step.x - 0.05).abs() < 1e-5);
        assert!(step.z.abs() < 1e-5);
    }

    #[test]
    fn test_collision_veto() {
        let locomotion = Locomotion::default();
        let start = Vec3::new(0.0, 1.6, 0.0);

        let moved = locomotion.advance(start, Vec2::new(0.0, 1.0), 0.0, |_| false);
        assert_ne!(moved, start);

        let held = locomotion.advance(start, Vec2::new(0.0, 1.0), 0.0, |_| true);
        assert_eq!(held, start);
    }
}
