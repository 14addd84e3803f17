//! Simulation tunables. Loaded from config.ron at startup.

use serde::{Deserialize, Serialize};

/// Persistent simulation settings. Loaded from `config.ron` in the current
/// directory; missing or invalid files fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Top speed the throttle can reach.
    #[serde(default = "default_max_speed")]
    pub max_speed: f32,
    /// Speed change per frame while the throttle key is held.
    #[serde(default = "default_acceleration")]
    pub acceleration: f32,
    /// Control angle accumulated per frame while a steering key is held.
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,
    /// Lift coefficient applied per unit of speed.
    #[serde(default = "default_lift")]
    pub lift: f32,
    /// Maximum number of cargo items held at once.
    #[serde(default = "default_cargo_capacity")]
    pub cargo_capacity: usize,
    /// Total cargo weight at which the lift penalty bottoms out.
    #[serde(default = "default_max_cargo_weight")]
    pub max_cargo_weight: f32,
    /// Maximum safe touchdown speed (advisory only while crashes are off).
    #[serde(default = "default_landing_speed")]
    pub landing_speed: f32,
    /// Maximum acceptable touchdown pitch (advisory only).
    #[serde(default = "default_landing_pitch")]
    pub landing_pitch: f32,
    /// Starting balance.
    #[serde(default = "default_starting_money")]
    pub starting_money: u32,
    /// Live trail particle cap.
    #[serde(default = "default_trail_particles_max")]
    pub trail_particles_max: usize,
    /// Minimum seconds between trail particle emissions.
    #[serde(default = "default_trail_emission_rate")]
    pub trail_emission_rate: f32,
    /// Seconds before a trail particle fades out.
    #[serde(default = "default_trail_lifetime")]
    pub trail_lifetime: f32,
    /// Re-enable crash detection (kept as a configuration switch; off by
    /// default, matching current product behavior).
    #[serde(default)]
    pub crash_detection: bool,
}

fn default_max_speed() -> f32 {
    2.0
}
fn default_acceleration() -> f32 {
    0.008
}
fn default_rotation_speed() -> f32 {
    0.001
}
fn default_lift() -> f32 {
    0.01
}
fn default_cargo_capacity() -> usize {
    5
}
fn default_max_cargo_weight() -> f32 {
    10.0
}
fn default_landing_speed() -> f32 {
    0.5
}
fn default_landing_pitch() -> f32 {
    0.1
}
fn default_starting_money() -> u32 {
    1000
}
fn default_trail_particles_max() -> usize {
    200
}
fn default_trail_emission_rate() -> f32 {
    0.1
}
fn default_trail_lifetime() -> f32 {
    5.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_speed: default_max_speed(),
            acceleration: default_acceleration(),
            rotation_speed: default_rotation_speed(),
            lift: default_lift(),
            cargo_capacity: default_cargo_capacity(),
            max_cargo_weight: default_max_cargo_weight(),
            landing_speed: default_landing_speed(),
            landing_pitch: default_landing_pitch(),
            starting_money: default_starting_money(),
            trail_particles_max: default_trail_particles_max(),
            trail_emission_rate: default_trail_emission_rate(),
            trail_lifetime: default_trail_lifetime(),
            crash_detection: false,
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid,
    /// returns the default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("config.ron")
}

/// The mutable copy of the flight/economy tunables the upgrade shop acts on.
/// Seeded from [`GameConfig`] at startup; upgrades mutate it in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tunables {
    pub max_speed: f32,
    pub acceleration: f32,
    pub rotation_speed: f32,
    pub lift: f32,
    pub cargo_capacity: usize,
    pub max_cargo_weight: f32,
    pub landing_speed: f32,
    pub landing_pitch: f32,
}

impl From<&GameConfig> for Tunables {
    fn from(c: &GameConfig) -> Self {
        Self {
            max_speed: c.max_speed,
            acceleration: c.acceleration,
            rotation_speed: c.rotation_speed,
            lift: c.lift,
            cargo_capacity: c.cargo_capacity,
            max_cargo_weight: c.max_cargo_weight,
            landing_speed: c.landing_speed,
            landing_pitch: c.landing_pitch,
        }
    }
}
