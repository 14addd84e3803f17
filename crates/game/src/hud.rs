//! Per-frame HUD snapshot handed to the presentation layer.

use crate::cargo::CargoItem;
use crate::nav::{GlideSlope, IlsAdvisory, NavMode};
use crate::state::{CameraView, WeatherState, WorldState};

/// Altitude below which the landing guide panel appears.
const GUIDE_ALTITUDE: f32 = 20.0;

/// The mission panel's view of a carried contract.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionInfo {
    pub origin: String,
    pub destination: String,
    pub weight: f32,
    pub value: u32,
}

impl From<&CargoItem> for MissionInfo {
    fn from(item: &CargoItem) -> Self {
        Self {
            origin: item.origin.clone(),
            destination: item.destination.clone(),
            weight: item.weight,
            value: item.value,
        }
    }
}

/// Navigation readout for the HUD corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavReadout {
    pub mode: NavMode,
    /// Distance to the active GPS waypoint, meters.
    pub waypoint_distance: Option<f32>,
    pub approach_active: bool,
}

/// Landing checklist shown near the ground or on an ILS approach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingGuide {
    pub on_runway: bool,
    pub gear_down: bool,
    /// Current speed is inside the touchdown limit.
    pub speed_ok: bool,
    /// Attitude is inside the touchdown pitch limit, or on the ILS glide
    /// slope when one is being flown.
    pub angle_ok: bool,
}

/// Everything the overlay draws, copied out of the world once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HudData {
    pub altitude: f32,
    pub speed: f32,
    pub pitch_degrees: f32,
    pub status: &'static str,
    pub gear_down: bool,
    pub cargo_count: usize,
    pub cargo_capacity: usize,
    pub cargo_weight: f32,
    pub max_cargo_weight: f32,
    pub money: u32,
    pub mission: Option<MissionInfo>,
    pub nav: Option<NavReadout>,
    pub weather: WeatherState,
    pub camera: CameraView,
    pub shop_open: bool,
    pub mission_menu_open: bool,
    pub help_open: bool,
}

/// Snapshot the HUD fields from the world.
pub fn snapshot(world: &WorldState) -> HudData {
    HudData {
        altitude: world.flight.transform.altitude(),
        speed: world.flight.speed,
        pitch_degrees: world.flight.transform.pitch_degrees(),
        status: world.phase.status_label(),
        gear_down: world.gear_down,
        cargo_count: world.hold.len(),
        cargo_capacity: world.tunables.cargo_capacity,
        cargo_weight: world.hold.total_weight(),
        max_cargo_weight: world.tunables.max_cargo_weight,
        money: world.money,
        mission: world.hold.current_mission().map(MissionInfo::from),
        nav: world.nav.active.then(|| NavReadout {
            mode: world.nav.mode,
            waypoint_distance: world
                .nav
                .current_waypoint()
                .map(|wp| world.flight.transform.position.distance(wp)),
            approach_active: world.nav.approach_active,
        }),
        weather: world.weather.current,
        camera: world.camera,
        shop_open: world.shop.open,
        mission_menu_open: world.mission_menu_open,
        help_open: world.help_open,
    }
}

/// Build the landing guide when it should be visible: close to the ground,
/// or any altitude while established on the ILS.
pub fn landing_guide(world: &WorldState, ils: Option<&IlsAdvisory>) -> Option<LandingGuide> {
    let near_ground = world.flight.transform.altitude() < GUIDE_ALTITUDE;
    if !near_ground && ils.is_none() {
        return None;
    }

    let on_runway = world
        .surfaces
        .runway_below(world.flight.transform.position);
    let angle_ok = match ils {
        Some(advisory) => advisory.slope == GlideSlope::Ideal,
        None => world.flight.transform.pitch.abs() <= world.tunables.landing_pitch,
    };
    Some(LandingGuide {
        on_runway,
        gear_down: world.gear_down,
        speed_ok: world.flight.speed <= world.tunables.landing_speed,
        angle_ok,
    })
}
