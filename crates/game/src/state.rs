//! Central world state advanced once per simulation frame, plus the small
//! timed subsystems that live alongside it (message log, weather, camera).

use glam::Vec2;
use rand::Rng;
use sim_core::{SurfaceKind, SurfaceMap, SurfaceRegion};

use crate::cargo::{default_locations, CargoHold, CargoLocation};
use crate::config::{GameConfig, Tunables};
use crate::flight::FlightModel;
use crate::landing::LandingPhase;
use crate::nav::NavigationAids;
use crate::shop::UpgradeShop;
use crate::trail::TrailEffect;

/// Seconds after startup before the controls hint appears.
const STARTUP_HINT_DELAY: f32 = 3.0;

// ── Messages ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct GameMessage {
    pub text: String,
    pub color: [f32; 4],
    pub time_remaining: f32,
}

/// On-screen notification log. Messages fade after a few seconds; the ones
/// pushed during the current frame are also collected separately so the frame
/// result can report them once.
#[derive(Debug)]
pub struct GameMessages {
    pub messages: Vec<GameMessage>,
    pub max_visible: usize,
    default_duration: f32,
    fresh: Vec<String>,
}

impl GameMessages {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            max_visible: 8,
            default_duration: 3.0,
            fresh: Vec::new(),
        }
    }

    pub fn push(&mut self, text: impl Into<String>, color: [f32; 4]) {
        let text = text.into();
        self.fresh.push(text.clone());
        self.messages.push(GameMessage {
            text,
            color,
            time_remaining: self.default_duration,
        });
        if self.messages.len() > 50 {
            self.messages.remove(0);
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(text, [1.0, 1.0, 1.0, 1.0]);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(text, [0.3, 1.0, 0.3, 1.0]);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(text, [1.0, 0.9, 0.3, 1.0]);
    }

    pub fn update(&mut self, dt: f32) {
        for msg in &mut self.messages {
            msg.time_remaining -= dt;
        }
        self.messages.retain(|m| m.time_remaining > 0.0);
    }

    /// Drain the messages pushed since the last call.
    pub fn take_fresh(&mut self) -> Vec<String> {
        std::mem::take(&mut self.fresh)
    }
}

impl Default for GameMessages {
    fn default() -> Self {
        Self::new()
    }
}

// ── Weather ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherState {
    #[default]
    Clear,
    Rain,
    Fog,
}

impl WeatherState {
    fn next(self) -> Self {
        match self {
            WeatherState::Clear => WeatherState::Rain,
            WeatherState::Rain => WeatherState::Fog,
            WeatherState::Fog => WeatherState::Clear,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherState::Clear => "Clear",
            WeatherState::Rain => "Rain",
            WeatherState::Fog => "Fog",
        }
    }
}

/// Cosmetic weather that steps clear → rain → fog on a timer. The first
/// change lands a minute in; after that each state holds two to five minutes.
#[derive(Debug)]
pub struct Weather {
    pub current: WeatherState,
    hold_timer: f32,
}

impl Weather {
    pub fn new() -> Self {
        Self {
            current: WeatherState::Clear,
            hold_timer: 60.0,
        }
    }

    /// Tick the hold timer; returns the new state on the frame it changes.
    pub fn update(&mut self, dt: f32) -> Option<WeatherState> {
        self.hold_timer -= dt;
        if self.hold_timer > 0.0 {
            return None;
        }
        self.current = self.current.next();
        self.hold_timer = 120.0 + rand::random::<f32>() * 180.0;
        Some(self.current)
    }
}

impl Default for Weather {
    fn default() -> Self {
        Self::new()
    }
}

// ── Camera ──────────────────────────────────────────────────────────────────

/// View the presentation layer should render from. Purely advisory out here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraView {
    #[default]
    Follow,
    Cockpit,
    Top,
    Free,
}

impl CameraView {
    pub fn next(self) -> Self {
        match self {
            CameraView::Follow => CameraView::Cockpit,
            CameraView::Cockpit => CameraView::Top,
            CameraView::Top => CameraView::Free,
            CameraView::Free => CameraView::Follow,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraView::Follow => "Follow",
            CameraView::Cockpit => "Cockpit",
            CameraView::Top => "Top",
            CameraView::Free => "Free",
        }
    }
}

// ── Crash detection ─────────────────────────────────────────────────────────

/// Whether hard impacts are punished. The arcade tuning ships with this
/// disabled; the hooks stay so a harsher mode can flip it on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrashDetection {
    Enabled {
        /// Descent rate above which ground contact counts as a crash.
        max_impact_speed: f32,
    },
    Disabled,
}

// ── World ───────────────────────────────────────────────────────────────────

/// Everything the simulation owns. The frame loop holds one of these and
/// threads it through input handling and the per-frame update.
pub struct WorldState {
    pub tunables: Tunables,
    pub flight: FlightModel,
    pub phase: LandingPhase,
    pub gear_down: bool,
    pub locations: Vec<CargoLocation>,
    pub hold: CargoHold,
    pub money: u32,
    pub shop: UpgradeShop,
    pub nav: NavigationAids,
    pub trail: TrailEffect,
    pub messages: GameMessages,
    pub weather: Weather,
    pub camera: CameraView,
    pub crash_detection: CrashDetection,
    pub crashed: bool,
    pub mission_menu_open: bool,
    pub help_open: bool,
    pub surfaces: SurfaceMap,
    hint_timer: Option<f32>,
}

impl WorldState {
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = rand::thread_rng();
        Self::with_rng(config, &mut rng)
    }

    /// Like [`WorldState::new`] but with a caller-supplied rng, so tests can
    /// pin the coin flips that stock the cargo pads.
    pub fn with_rng<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let locations = default_locations(rng);
        let surfaces = build_surfaces(&locations);
        let crash_detection = if config.crash_detection {
            CrashDetection::Enabled {
                max_impact_speed: 1.0,
            }
        } else {
            CrashDetection::Disabled
        };
        Self {
            tunables: Tunables::from(config),
            flight: FlightModel::new(),
            phase: LandingPhase::Airborne,
            gear_down: true,
            locations,
            hold: CargoHold::new(),
            money: config.starting_money,
            shop: UpgradeShop::new(),
            nav: NavigationAids::new(),
            trail: TrailEffect::new(
                config.trail_emission_rate,
                config.trail_lifetime,
                config.trail_particles_max,
            ),
            messages: GameMessages::new(),
            weather: Weather::new(),
            camera: CameraView::Follow,
            crash_detection,
            crashed: false,
            mission_menu_open: false,
            help_open: false,
            surfaces,
            hint_timer: Some(STARTUP_HINT_DELAY),
        }
    }

    /// Put the aircraft back at the start of the main runway. Cargo, money
    /// and upgrades survive a reset.
    pub fn reset_aircraft(&mut self) {
        self.flight.reset();
        self.phase = LandingPhase::Airborne;
        self.gear_down = true;
        self.crashed = false;
        self.nav.reset();
        self.trail.clear();
        self.messages.info("Aircraft returned to starting position");
    }

    /// Tick the one-shot startup hint; fires a few seconds into the session.
    pub fn update_hint(&mut self, dt: f32) {
        if let Some(timer) = &mut self.hint_timer {
            *timer -= dt;
            if *timer <= 0.0 {
                self.hint_timer = None;
                self.messages.info("Press H for the controls list");
            }
        }
    }
}

/// Register every flat surface the landing logic can query: the main runway,
/// a short strip beside each cargo pad, and the terrain underneath it all.
/// Runways go in first so point lookups see them above the terrain.
fn build_surfaces(locations: &[CargoLocation]) -> SurfaceMap {
    let mut map = SurfaceMap::new();
    map.add(SurfaceRegion::from_center(
        SurfaceKind::Runway,
        Vec2::new(0.0, 100.0),
        Vec2::new(40.0, 600.0),
    ));
    for loc in locations {
        map.add(SurfaceRegion::from_center(
            SurfaceKind::Runway,
            Vec2::new(loc.position.x, loc.position.z + 60.0),
            Vec2::new(20.0, 100.0),
        ));
    }
    map.add(SurfaceRegion::from_center(
        SurfaceKind::Terrain,
        Vec2::ZERO,
        Vec2::new(6000.0, 6000.0),
    ));
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn world() -> WorldState {
        let mut rng = StdRng::seed_from_u64(3);
        WorldState::with_rng(&GameConfig::default(), &mut rng)
    }

    #[test]
    fn new_world_matches_config() {
        let w = world();
        assert_eq!(w.money, 1000);
        assert_eq!(w.locations.len(), 5);
        assert!(w.hold.is_empty());
        assert_eq!(w.phase, LandingPhase::Airborne);
        assert_eq!(w.crash_detection, CrashDetection::Disabled);
        assert_eq!(w.flight.transform.position, Vec3::new(0.0, 5.0, 0.0));
        // main runway + one strip per pad + terrain
        assert_eq!(w.surfaces.len(), 7);
    }

    #[test]
    fn surfaces_cover_runway_and_pad_strips() {
        let w = world();
        assert!(w.surfaces.runway_below(Vec3::new(0.0, 5.0, 100.0)));
        // Strip beside the Kuzey Limanı pad.
        assert!(w.surfaces.runway_below(Vec3::new(1000.0, 5.0, 1060.0)));
        assert!(!w.surfaces.runway_below(Vec3::new(500.0, 5.0, 500.0)));
        assert_eq!(
            w.surfaces.surface_at(500.0, 500.0),
            Some(SurfaceKind::Terrain)
        );
        assert_eq!(
            w.surfaces.surface_at(0.0, 100.0),
            Some(SurfaceKind::Runway)
        );
    }

    #[test]
    fn reset_preserves_economy() {
        let mut w = world();
        w.money = 2500;
        w.flight.transform.position = Vec3::new(400.0, 90.0, -200.0);
        w.flight.speed = 1.5;
        w.crashed = true;

        w.reset_aircraft();
        assert_eq!(w.flight.transform.position, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(w.flight.speed, 0.0);
        assert!(!w.crashed);
        assert_eq!(w.money, 2500);
        assert_eq!(w.messages.take_fresh().len(), 1);
    }

    #[test]
    fn messages_fade_but_fresh_drains_immediately() {
        let mut messages = GameMessages::new();
        messages.info("hello");
        messages.success("paid");
        assert_eq!(messages.take_fresh(), vec!["hello", "paid"]);
        assert!(messages.take_fresh().is_empty());
        assert_eq!(messages.messages.len(), 2);

        messages.update(2.9);
        assert_eq!(messages.messages.len(), 2);
        messages.update(0.2);
        assert!(messages.messages.is_empty());
    }

    #[test]
    fn weather_first_change_after_a_minute() {
        let mut weather = Weather::new();
        let dt = 1.0 / 60.0;
        let mut changed = None;
        let mut elapsed = 0.0;
        while changed.is_none() {
            elapsed += dt;
            changed = weather.update(dt);
            assert!(elapsed < 61.0, "no change after a minute");
        }
        assert_eq!(changed, Some(WeatherState::Rain));
        assert!(elapsed >= 60.0);
        // Next change is at least two minutes out.
        for _ in 0..(119.0 / dt) as usize {
            assert_eq!(weather.update(dt), None);
        }
    }

    #[test]
    fn camera_cycle_wraps() {
        let mut view = CameraView::Follow;
        for _ in 0..4 {
            view = view.next();
        }
        assert_eq!(view, CameraView::Follow);
    }

    #[test]
    fn startup_hint_fires_once() {
        let mut w = world();
        let dt = 1.0 / 60.0;
        for _ in 0..(4.0 / dt) as usize {
            w.update_hint(dt);
        }
        let fresh = w.messages.take_fresh();
        assert_eq!(fresh.len(), 1);
        assert!(fresh[0].contains('H'));
        for _ in 0..100 {
            w.update_hint(dt);
        }
        assert!(w.messages.take_fresh().is_empty());
    }
}
