//! Condensation trail behind the aircraft.

use glam::Vec3;
use rand::Rng;
use sim_core::Transform;

/// Emission starts above this scalar speed.
const EMIT_SPEED_THRESHOLD: f32 = 0.5;
/// Peak opacity at spawn.
const SPAWN_OPACITY: f32 = 0.7;
/// Upward drift per frame.
const RISE_RATE: f32 = 0.02;
/// Rearward drift per frame, along the aircraft's current backward axis.
const DRIFT_RATE: f32 = 0.01;

/// One puff of the trail. Purely cosmetic state the presentation layer draws.
#[derive(Debug, Clone)]
pub struct TrailParticle {
    pub position: Vec3,
    pub age: f32,
    pub lifetime: f32,
    /// Scale at spawn; growth multiplies this, never accumulates on it.
    pub initial_scale: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Cosmetic tumble, euler angles.
    pub rotation: Vec3,
    /// Per-frame tumble rates.
    pub spin: Vec3,
}

/// The particle pool plus the emission clock. Oldest particles sit at the
/// front of the vec so the overflow cut removes them first.
#[derive(Debug)]
pub struct TrailEffect {
    pub enabled: bool,
    particles: Vec<TrailParticle>,
    clock: f32,
    last_emit: f32,
    emission_rate: f32,
    lifetime: f32,
    max_particles: usize,
}

impl TrailEffect {
    pub fn new(emission_rate: f32, lifetime: f32, max_particles: usize) -> Self {
        Self {
            enabled: true,
            particles: Vec::new(),
            clock: 0.0,
            last_emit: f32::NEG_INFINITY,
            emission_rate,
            lifetime,
            max_particles,
        }
    }

    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Flip the effect; returns the new state for the notification.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.last_emit = f32::NEG_INFINITY;
    }

    /// Advance the trail one frame: maybe emit, then age, fade, grow, and
    /// drift every live particle. Drift follows the aircraft's current
    /// orientation, not the orientation at spawn.
    pub fn update<R: Rng>(&mut self, dt: f32, speed: f32, aircraft: &Transform, rng: &mut R) {
        self.clock += dt;

        if self.enabled
            && speed > EMIT_SPEED_THRESHOLD
            && self.clock - self.last_emit > self.emission_rate
        {
            self.emit(aircraft, rng);
            self.last_emit = self.clock;
        }

        let lifetime = self.lifetime;
        let backward = aircraft.backward() * DRIFT_RATE;
        self.particles.retain_mut(|p| {
            p.age += dt;
            if p.age > lifetime {
                return false;
            }
            let life_ratio = p.age / lifetime;
            p.opacity = SPAWN_OPACITY * (1.0 - life_ratio);
            p.scale = p.initial_scale * (1.0 + life_ratio * 2.0);
            p.rotation += p.spin;
            p.position.y += RISE_RATE;
            p.position += backward;
            true
        });

        if self.particles.len() > self.max_particles {
            let excess = self.particles.len() - self.max_particles;
            self.particles.drain(..excess);
        }
    }

    fn emit<R: Rng>(&mut self, aircraft: &Transform, rng: &mut R) {
        // Spawn a little behind and around the tail, in local space.
        let offset = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 0.2,
            (rng.gen::<f32>() - 0.5) * 0.2,
            -0.5 - rng.gen::<f32>() * 0.5,
        );
        let position = aircraft.position + aircraft.rotation() * offset;
        let scale = 0.6 + rng.gen::<f32>() * 0.4;
        let spin = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 0.01,
            (rng.gen::<f32>() - 0.5) * 0.01,
            (rng.gen::<f32>() - 0.5) * 0.01,
        );
        self.particles.push(TrailParticle {
            position,
            age: 0.0,
            lifetime: self.lifetime,
            initial_scale: scale,
            scale,
            opacity: SPAWN_OPACITY,
            rotation: Vec3::ZERO,
            spin,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DT: f32 = 1.0 / 60.0;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn step_many(trail: &mut TrailEffect, frames: usize, speed: f32) {
        let mut rng = rng();
        let aircraft = Transform::default();
        for _ in 0..frames {
            trail.update(DT, speed, &aircraft, &mut rng);
        }
    }

    #[test]
    fn no_emission_below_speed_threshold() {
        let mut trail = TrailEffect::new(0.1, 5.0, 200);
        step_many(&mut trail, 120, 0.4);
        assert!(trail.is_empty());
    }

    #[test]
    fn no_emission_while_disabled() {
        let mut trail = TrailEffect::new(0.1, 5.0, 200);
        trail.enabled = false;
        step_many(&mut trail, 120, 2.0);
        assert!(trail.is_empty());
    }

    #[test]
    fn emission_rate_paces_spawns() {
        let mut trail = TrailEffect::new(0.1, 5.0, 200);
        // Two seconds at 60 fps with a 0.1 s gate: about one spawn per 7
        // frames, so roughly 17-20 particles before any expire.
        step_many(&mut trail, 120, 2.0);
        assert!(trail.len() >= 15 && trail.len() <= 21, "got {}", trail.len());
    }

    #[test]
    fn particles_fade_and_grow_then_expire() {
        let mut trail = TrailEffect::new(0.1, 1.0, 200);
        let mut rng = rng();
        let aircraft = Transform::default();
        trail.update(DT, 2.0, &aircraft, &mut rng);
        assert_eq!(trail.len(), 1);

        let mut last_opacity = trail.particles()[0].opacity;
        let mut last_scale = trail.particles()[0].scale;
        for _ in 0..30 {
            trail.update(DT, 0.0, &aircraft, &mut rng);
            let p = &trail.particles()[0];
            assert!(p.opacity < last_opacity);
            assert!(p.scale > last_scale);
            last_opacity = p.opacity;
            last_scale = p.scale;
        }

        // Past its one second lifetime the particle disappears.
        for _ in 0..40 {
            trail.update(DT, 0.0, &aircraft, &mut rng);
        }
        assert!(trail.is_empty());
    }

    #[test]
    fn pool_capped_oldest_first() {
        let mut trail = TrailEffect::new(0.0, 100.0, 10);
        let mut rng = rng();
        let mut aircraft = Transform::default();
        for i in 0..25 {
            // Distinct spawn positions so age order is observable.
            aircraft.position.x = i as f32 * 100.0;
            trail.update(DT, 2.0, &aircraft, &mut rng);
        }
        assert_eq!(trail.len(), 10);
        // Only the most recent spawns survive.
        assert!(trail.particles()[0].position.x > 1000.0);
    }

    #[test]
    fn particles_rise_and_drift_aft() {
        let mut trail = TrailEffect::new(0.1, 5.0, 200);
        let mut rng = rng();
        let aircraft = Transform::default();
        trail.update(DT, 2.0, &aircraft, &mut rng);
        let before = trail.particles()[0].position;
        trail.update(DT, 0.0, &aircraft, &mut rng);
        let after = trail.particles()[0].position;
        assert!((after.y - before.y - RISE_RATE).abs() < 1e-6);
        // Level flight faces +Z, so aft drift is -Z.
        assert!((after.z - before.z + DRIFT_RATE).abs() < 1e-6);
    }
}
