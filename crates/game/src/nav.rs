//! Navigation aids: GPS waypoint routing, VORTAC beacon display mode, and an
//! ILS glide slope for the main runway.

use glam::Vec3;

use crate::cargo::{CargoHold, CargoLocation};

/// A waypoint counts as reached within this distance, meters.
pub const WAYPOINT_RADIUS: f32 = 50.0;
/// The ILS corridor extends behind the runway threshold, half-width in meters.
const APPROACH_HALF_WIDTH: f32 = 50.0;
/// The main runway's touchdown point the glide slope descends to.
const TOUCHDOWN_POINT: Vec3 = Vec3::new(0.0, 0.0, 100.0);
/// Standard 3 degree glide slope.
const GLIDE_SLOPE_DEG: f32 = 3.0;
/// Height error band that still reads as on-slope, meters.
const SLOPE_TOLERANCE: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    Gps,
    Vortac,
    Ils,
}

impl NavMode {
    fn next(self) -> Self {
        match self {
            NavMode::Gps => NavMode::Vortac,
            NavMode::Vortac => NavMode::Ils,
            NavMode::Ils => NavMode::Gps,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavMode::Gps => "GPS",
            NavMode::Vortac => "VORTAC",
            NavMode::Ils => "ILS",
        }
    }
}

/// Route events the GPS raises while advancing through waypoints.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    RouteRenewed { destination: String },
    DestinationReached,
}

/// Vertical position relative to the ideal glide path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlideSlope {
    Ideal,
    TooHigh,
    TooLow,
}

/// Glide slope readout produced while established on the ILS corridor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IlsAdvisory {
    pub slope: GlideSlope,
    /// Meters above (positive) or below (negative) the ideal path.
    pub height_error: f32,
    /// Horizontal distance to the touchdown point.
    pub distance: f32,
}

/// The pilot-facing navigation state. Waypoints route toward the first
/// carried contract's destination.
#[derive(Debug, Clone)]
pub struct NavigationAids {
    pub active: bool,
    pub mode: NavMode,
    waypoints: Vec<Vec3>,
    current: usize,
    pub approach_active: bool,
}

impl NavigationAids {
    pub fn new() -> Self {
        Self {
            active: false,
            mode: NavMode::Gps,
            waypoints: Vec::new(),
            current: 0,
            approach_active: false,
        }
    }

    /// Flip the aids on or off. Turning them on seeds a route to the current
    /// contract's destination when one exists. Returns the new active flag.
    pub fn toggle(&mut self, hold: &CargoHold, locations: &[CargoLocation]) -> bool {
        self.active = !self.active;
        if self.active {
            if let Some(item) = hold.current_mission() {
                if let Some(dest) = locations.iter().find(|l| l.name == item.destination) {
                    self.waypoints = vec![dest.position];
                    self.current = 0;
                }
            }
        }
        self.active
    }

    /// Advance gps→vortac→ils→gps. Does nothing while the aids are off.
    /// Returns the new mode when a change happened.
    pub fn cycle_mode(&mut self) -> Option<NavMode> {
        if !self.active {
            return None;
        }
        self.mode = self.mode.next();
        Some(self.mode)
    }

    pub fn current_waypoint(&self) -> Option<Vec3> {
        self.waypoints.get(self.current).copied()
    }

    /// GPS leg tracking. When the aircraft closes within the waypoint radius
    /// the route advances; a drained route reseeds from the current contract
    /// or announces arrival. Returns the distance to the active waypoint and
    /// any route event raised this frame.
    pub fn update_gps(
        &mut self,
        position: Vec3,
        hold: &CargoHold,
        locations: &[CargoLocation],
    ) -> (Option<f32>, Option<NavEvent>) {
        if !self.active || self.mode != NavMode::Gps {
            return (None, None);
        }
        let Some(waypoint) = self.current_waypoint() else {
            return (None, None);
        };

        let distance = position.distance(waypoint);
        if distance >= WAYPOINT_RADIUS {
            return (Some(distance), None);
        }

        self.current += 1;
        if self.current < self.waypoints.len() {
            return (Some(distance), None);
        }

        let renewed = hold.current_mission().and_then(|item| {
            locations
                .iter()
                .find(|l| l.name == item.destination)
                .map(|dest| (item.destination.clone(), dest.position))
        });
        let event = match renewed {
            Some((destination, pos)) => {
                self.waypoints = vec![pos];
                self.current = 0;
                NavEvent::RouteRenewed { destination }
            }
            None => {
                self.waypoints.clear();
                self.current = 0;
                NavEvent::DestinationReached
            }
        };
        (Some(distance), Some(event))
    }

    /// ILS corridor check for the main runway. The corridor lies on the
    /// threshold side of the touchdown point; inside it the advisory compares
    /// altitude against the 3 degree path. Updates `approach_active`.
    pub fn update_ils(&mut self, position: Vec3) -> Option<IlsAdvisory> {
        if !self.active || self.mode != NavMode::Ils {
            self.approach_active = false;
            return None;
        }

        let mut to_runway = TOUCHDOWN_POINT - position;
        to_runway.y = 0.0;
        let on_corridor = to_runway.z < 0.0 && to_runway.x.abs() < APPROACH_HALF_WIDTH;
        self.approach_active = on_corridor;
        if !on_corridor {
            return None;
        }

        let distance = to_runway.length();
        let ideal_height = GLIDE_SLOPE_DEG.to_radians().tan() * distance;
        let height_error = position.y - ideal_height;
        let slope = if height_error.abs() < SLOPE_TOLERANCE {
            GlideSlope::Ideal
        } else if height_error > SLOPE_TOLERANCE {
            GlideSlope::TooHigh
        } else {
            GlideSlope::TooLow
        };
        Some(IlsAdvisory {
            slope,
            height_error,
            distance,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for NavigationAids {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cargo::{default_locations, CargoItem};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn locations() -> Vec<CargoLocation> {
        let mut rng = StdRng::seed_from_u64(1);
        default_locations(&mut rng)
    }

    fn hold_bound_for(destination: &str) -> CargoHold {
        let mut hold = CargoHold::new();
        hold.load(CargoItem {
            origin: "Ana Havalimanı".into(),
            destination: destination.into(),
            weight: 2.0,
            value: 300,
        });
        hold
    }

    #[test]
    fn toggle_seeds_route_to_first_contract() {
        let locations = locations();
        let hold = hold_bound_for("Kuzey Limanı");
        let mut nav = NavigationAids::new();

        assert!(nav.toggle(&hold, &locations));
        assert_eq!(nav.current_waypoint(), Some(Vec3::new(1000.0, 0.5, 1000.0)));

        assert!(!nav.toggle(&hold, &locations));
        // The stale route survives the off toggle; only re-enabling reseeds.
        assert!(nav.current_waypoint().is_some());
    }

    #[test]
    fn toggle_with_empty_hold_has_no_route() {
        let locations = locations();
        let hold = CargoHold::new();
        let mut nav = NavigationAids::new();
        nav.toggle(&hold, &locations);
        assert!(nav.current_waypoint().is_none());
    }

    #[test]
    fn mode_cycles_only_while_active() {
        let mut nav = NavigationAids::new();
        assert_eq!(nav.cycle_mode(), None);
        nav.active = true;
        assert_eq!(nav.cycle_mode(), Some(NavMode::Vortac));
        assert_eq!(nav.cycle_mode(), Some(NavMode::Ils));
        assert_eq!(nav.cycle_mode(), Some(NavMode::Gps));
    }

    #[test]
    fn gps_reseeds_from_remaining_cargo_on_arrival() {
        let locations = locations();
        let hold = hold_bound_for("Güney Köyü");
        let mut nav = NavigationAids::new();
        nav.active = true;
        nav.waypoints = vec![Vec3::new(1000.0, 0.5, 1000.0)];

        // Far away: distance reported, nothing advances.
        let (dist, event) = nav.update_gps(Vec3::ZERO, &hold, &locations);
        assert!(dist.unwrap() > 1000.0);
        assert!(event.is_none());

        // Arriving renews the route toward the contract still carried.
        let (_, event) = nav.update_gps(Vec3::new(1000.0, 10.0, 990.0), &hold, &locations);
        assert_eq!(
            event,
            Some(NavEvent::RouteRenewed {
                destination: "Güney Köyü".into()
            })
        );
        assert_eq!(
            nav.current_waypoint(),
            Some(Vec3::new(-1000.0, 0.5, -1000.0))
        );
    }

    #[test]
    fn gps_clears_route_when_hold_is_empty() {
        let locations = locations();
        let hold = CargoHold::new();
        let mut nav = NavigationAids::new();
        nav.active = true;
        nav.waypoints = vec![Vec3::new(1000.0, 0.5, 1000.0)];

        let (_, event) = nav.update_gps(Vec3::new(1010.0, 5.0, 1000.0), &hold, &locations);
        assert_eq!(event, Some(NavEvent::DestinationReached));
        assert!(nav.current_waypoint().is_none());
    }

    #[test]
    fn ils_reads_the_glide_slope_inside_the_corridor() {
        let mut nav = NavigationAids::new();
        nav.active = true;
        nav.mode = NavMode::Ils;

        // 300 m out on the approach side, exactly on the 3 degree path.
        let distance = 300.0f32;
        let ideal = GLIDE_SLOPE_DEG.to_radians().tan() * distance;
        let pos = Vec3::new(0.0, ideal, 100.0 + distance);

        let advisory = nav.update_ils(pos).unwrap();
        assert!(nav.approach_active);
        assert_eq!(advisory.slope, GlideSlope::Ideal);
        assert!(advisory.height_error.abs() < 1e-3);

        let high = nav.update_ils(pos + Vec3::new(0.0, 20.0, 0.0)).unwrap();
        assert_eq!(high.slope, GlideSlope::TooHigh);
        let low = nav.update_ils(pos - Vec3::new(0.0, ideal, 0.0)).unwrap();
        assert_eq!(low.slope, GlideSlope::TooLow);
    }

    #[test]
    fn ils_ignores_positions_off_the_corridor() {
        let mut nav = NavigationAids::new();
        nav.active = true;
        nav.mode = NavMode::Ils;

        // Wrong side of the touchdown point.
        assert!(nav.update_ils(Vec3::new(0.0, 30.0, 50.0)).is_none());
        assert!(!nav.approach_active);
        // Too far off centerline.
        assert!(nav.update_ils(Vec3::new(80.0, 30.0, 400.0)).is_none());
    }
}
