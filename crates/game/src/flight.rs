//! Flight model: integrates held controls into orientation and velocity.
//!
//! Everything here advances by per-frame constants rather than dt-scaled
//! integration; the loop steps it at a fixed rate. Held steering keys feed
//! per-frame accumulators that bleed off at 10% per frame once released, so
//! turns wind down instead of stopping dead.

use glam::Vec3;
use input::InputState;
use sim_core::{lerp_angle, Transform};

use crate::config::Tunables;

/// Bank angle the wings settle toward while a turn key is held, radians.
const BANK_ANGLE: f32 = 0.5;
/// Smoothing factor pulling roll toward the bank angle while turning.
const BANK_IN_FACTOR: f32 = 0.1;
/// Smoothing factor relaxing roll toward level once both turn keys are up.
const BANK_OUT_FACTOR: f32 = 0.05;
/// Fraction of the accumulated turn rate that survives each frame.
const CONTROL_DECAY: f32 = 0.9;
/// Steering authority while on the ground.
const GROUND_YAW_SCALE: f32 = 0.2;
const GROUND_PITCH_SCALE: f32 = 0.1;
/// Horizontal speed retained per frame while rolling on wheels.
const GROUND_FRICTION: f32 = 0.8;
/// Vertical velocity contribution per radian of nose-down pitch.
const PITCH_SINK_RATE: f32 = -0.5;

/// The aircraft's kinematic state, owned by the world and advanced once per
/// simulation frame.
#[derive(Debug, Clone)]
pub struct FlightModel {
    pub transform: Transform,
    pub velocity: Vec3,
    /// Throttle-derived scalar speed in [0, max_speed].
    pub speed: f32,
    /// Per-frame pitch accumulator (positive = nose down in world terms).
    pub pitch_rate: f32,
    /// Per-frame yaw accumulator (positive = left turn).
    pub yaw_rate: f32,
    /// Current bank angle; mirrored onto the transform while airborne.
    pub roll: f32,
}

impl FlightModel {
    /// Aircraft parked at the start of the main runway, slightly airborne.
    pub fn new() -> Self {
        Self {
            transform: Transform::from_position(Vec3::new(0.0, 5.0, 0.0)),
            velocity: Vec3::ZERO,
            speed: 0.0,
            pitch_rate: 0.0,
            yaw_rate: 0.0,
            roll: 0.0,
        }
    }

    /// Restore the start pose and zero all motion.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fold the held keys into the control accumulators and the throttle.
    /// Ground steering is deliberately sluggish: yaw authority drops to 20%
    /// and pitch to 10% while landed.
    pub fn apply_controls(&mut self, input: &InputState, landed: bool, t: &Tunables) {
        let yaw_scale = if landed { GROUND_YAW_SCALE } else { 1.0 };
        let pitch_scale = if landed { GROUND_PITCH_SCALE } else { 1.0 };

        // Negative pitch rate is nose-up; the climb term in compute_velocity
        // multiplies it by a negative factor.
        if input.pitch_up() {
            self.pitch_rate -= t.rotation_speed * pitch_scale;
        }
        if input.pitch_down() {
            self.pitch_rate += t.rotation_speed * pitch_scale;
        }

        if input.turn_left() {
            self.yaw_rate += t.rotation_speed * yaw_scale;
            self.roll = lerp_angle(self.roll, -BANK_ANGLE, BANK_IN_FACTOR);
        } else if input.turn_right() {
            self.yaw_rate -= t.rotation_speed * yaw_scale;
            self.roll = lerp_angle(self.roll, BANK_ANGLE, BANK_IN_FACTOR);
        } else {
            self.roll = lerp_angle(self.roll, 0.0, BANK_OUT_FACTOR);
        }

        if input.throttle_up() {
            self.speed = (self.speed + t.acceleration).min(t.max_speed);
        }
        if input.throttle_down() {
            self.speed = (self.speed - t.acceleration).max(0.0);
        }
    }

    /// Add the accumulated control rates to the orientation. On the ground
    /// the accumulators are auto-leveled and yaw becomes wheel steering at
    /// half authority.
    pub fn integrate_orientation(&mut self, landed: bool) {
        if landed {
            self.pitch_rate = lerp_angle(self.pitch_rate, 0.0, 0.1);
            self.roll = lerp_angle(self.roll, 0.0, 0.1);
            self.transform.yaw += self.yaw_rate * 0.5;
        } else {
            self.transform.yaw += self.yaw_rate;
            self.transform.pitch += self.pitch_rate;
            self.transform.roll = self.roll;
        }
    }

    /// Recompute velocity from the current orientation and throttle.
    ///
    /// Airborne, the vertical component is perturbed by pitch and by lift
    /// scaled down as the hold fills up; heavier cargo climbs worse, floored
    /// at half effectiveness. Landed, motion is pinned to the ground plane
    /// with wheel friction.
    pub fn compute_velocity(&mut self, landed: bool, cargo_weight: f32, t: &Tunables) {
        let forward = self.transform.forward();
        if landed {
            self.velocity = forward * (self.speed * GROUND_FRICTION);
            self.velocity.y = 0.0;
        } else {
            self.velocity = forward * self.speed;
            let cargo_factor = (1.0 - (cargo_weight / t.max_cargo_weight) * 0.5).max(0.5);
            let current_lift = t.lift * self.speed * cargo_factor;
            self.velocity.y += self.pitch_rate * PITCH_SINK_RATE + current_lift;
        }
    }

    /// Move by the frame's velocity.
    pub fn integrate_position(&mut self) {
        self.transform.translate(self.velocity);
    }

    /// Bleed off the turn-rate accumulators at the end of the frame so a
    /// released key lets the turn wind down over a few frames.
    pub fn decay_controls(&mut self) {
        self.yaw_rate *= CONTROL_DECAY;
        self.pitch_rate *= CONTROL_DECAY;
    }
}

impl Default for FlightModel {
    fn default() -> Self {
        Self::new()
    }
}
