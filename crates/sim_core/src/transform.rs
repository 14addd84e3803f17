//! Transform type for the aircraft and other positioned objects.

use glam::{EulerRot, Quat, Vec3};

/// Position plus a yaw/pitch/roll orientation in radians.
///
/// Orientation is composed in yaw → pitch → roll order (YXZ), matching the
/// way the flight model accumulates its control angles: yaw about the world
/// up axis first, then pitch about the resulting lateral axis, then roll
/// about the nose axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Heading about +Y, radians.
    pub yaw: f32,
    /// Nose up/down about the lateral axis, radians.
    pub pitch: f32,
    /// Bank about the nose axis, radians.
    pub roll: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position, level and facing +Z.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// The composed orientation quaternion (YXZ order).
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }

    /// Get the nose direction (+Z rotated by the current orientation).
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }

    /// Get the direction trailing behind the aircraft.
    pub fn backward(&self) -> Vec3 {
        -self.forward()
    }

    /// Get the right wing direction.
    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Get the local up direction.
    pub fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    /// Translate the transform by a delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Altitude above the ground plane.
    pub fn altitude(&self) -> f32 {
        self.position.y
    }

    /// Pitch folded into [0, 180] degrees for display.
    pub fn pitch_degrees(&self) -> f32 {
        let deg = self.pitch.to_degrees().abs() % 360.0;
        if deg > 180.0 {
            360.0 - deg
        } else {
            deg
        }
    }
}

/// Linear interpolation between two angles by `t`, used by the flight model's
/// exponential smoothing of roll and the landed auto-level.
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_transform_faces_positive_z() {
        let t = Transform::default();
        assert!((t.forward() - Vec3::Z).length() < 1e-6);
        assert!((t.up() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn yaw_half_turn_reverses_forward() {
        let mut t = Transform::default();
        t.yaw = std::f32::consts::PI;
        assert!((t.forward() + Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn pitch_up_tilts_forward_vector_up() {
        // Negative pitch is nose-up in the control convention; check the
        // composed rotation, not the sign convention itself.
        let mut t = Transform::default();
        t.pitch = -0.3;
        assert!(t.forward().y > 0.0);
    }

    #[test]
    fn yaw_applies_before_pitch() {
        // With YXZ order a 90° yaw swings the pitch axis with the nose, so a
        // pitched-and-yawed transform still has no lateral tilt.
        let mut t = Transform::default();
        t.yaw = std::f32::consts::FRAC_PI_2;
        t.pitch = -0.4;
        let f = t.forward();
        assert!(f.x > 0.9);
        assert!(f.y > 0.3);
        assert!(f.z.abs() < 1e-5);
    }

    #[test]
    fn pitch_degrees_folds_over_180() {
        let mut t = Transform::default();
        t.pitch = 3.3; // ~189°
        let deg = t.pitch_degrees();
        assert!(deg < 180.0);
        assert!((deg - (360.0 - 3.3f32.to_degrees())).abs() < 1e-3);
    }

    #[test]
    fn lerp_angle_converges() {
        let mut r = 0.5;
        for _ in 0..200 {
            r = lerp_angle(r, 0.0, 0.05);
        }
        assert!(r.abs() < 1e-4);
    }
}
