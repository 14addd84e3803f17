//! Ground contact and the airborne/taxiing/landed state machine.

use sim_core::{lerp_angle, SurfaceMap};

use crate::flight::FlightModel;

/// Minimum altitude; the aircraft is clamped here on ground contact.
pub const GROUND_CLEARANCE: f32 = 1.2;

/// Smoothing applied to the control accumulators while rolling on a runway.
const LEVEL_CONTROL_FACTOR: f32 = 0.2;
/// Smoothing pulling the airframe's actual pitch back to level on a runway.
const LEVEL_ATTITUDE_FACTOR: f32 = 0.15;

/// Where the aircraft sits in the landing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingPhase {
    /// Above ground clearance.
    Airborne,
    /// Ground contact off any runway; flight physics still apply, the hull
    /// just cannot sink below clearance.
    Taxiing,
    /// Ground contact on a runway; steering and friction switch to wheels.
    Landed,
}

impl LandingPhase {
    /// Phase from altitude and runway presence alone.
    pub fn classify(altitude: f32, on_runway: bool) -> Self {
        if altitude < GROUND_CLEARANCE {
            if on_runway {
                LandingPhase::Landed
            } else {
                LandingPhase::Taxiing
            }
        } else {
            LandingPhase::Airborne
        }
    }

    pub fn is_on_ground(self) -> bool {
        self != LandingPhase::Airborne
    }

    /// Wheels only grip on a runway.
    pub fn is_landed(self) -> bool {
        self == LandingPhase::Landed
    }

    /// Status line shown in the HUD.
    pub fn status_label(self) -> &'static str {
        match self {
            LandingPhase::Airborne => "In Air",
            LandingPhase::Taxiing => "Taxiing",
            LandingPhase::Landed => "Landed",
        }
    }
}

/// What a ground-resolution pass observed, for the caller to turn into
/// notifications and cargo checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Touchdown {
    pub phase: LandingPhase,
    /// True on the exact frame the aircraft settled onto a runway.
    pub just_landed: bool,
    /// True on the exact frame the phase changed at all.
    pub changed: bool,
}

/// Resolve ground contact for this frame: clamp the hull above the ground
/// plane, auto-level on runways, and report phase transitions.
///
/// Runs after velocity is computed but before position integration, so the
/// vertical-velocity clamp takes effect on the same frame as touchdown.
pub fn resolve(flight: &mut FlightModel, surfaces: &SurfaceMap, prev: LandingPhase) -> Touchdown {
    let phase = if flight.transform.altitude() < GROUND_CLEARANCE {
        let on_runway = surfaces.runway_below(flight.transform.position);
        flight.transform.position.y = GROUND_CLEARANCE;

        if on_runway {
            flight.pitch_rate = lerp_angle(flight.pitch_rate, 0.0, LEVEL_CONTROL_FACTOR);
            flight.roll = lerp_angle(flight.roll, 0.0, LEVEL_CONTROL_FACTOR);
            flight.transform.pitch =
                lerp_angle(flight.transform.pitch, 0.0, LEVEL_ATTITUDE_FACTOR);
        }

        // The ground never pulls the aircraft down.
        flight.velocity.y = flight.velocity.y.max(0.0);

        if on_runway {
            LandingPhase::Landed
        } else {
            LandingPhase::Taxiing
        }
    } else {
        LandingPhase::Airborne
    };

    Touchdown {
        phase,
        just_landed: phase == LandingPhase::Landed && prev != LandingPhase::Landed,
        changed: phase != prev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};
    use sim_core::{SurfaceKind, SurfaceMap, SurfaceRegion};

    fn runway_world() -> SurfaceMap {
        let mut map = SurfaceMap::new();
        map.add(SurfaceRegion::from_center(
            SurfaceKind::Runway,
            Vec2::new(0.0, 100.0),
            Vec2::new(40.0, 600.0),
        ));
        map
    }

    #[test]
    fn classify_covers_all_three_phases() {
        assert_eq!(LandingPhase::classify(5.0, true), LandingPhase::Airborne);
        assert_eq!(LandingPhase::classify(1.0, true), LandingPhase::Landed);
        assert_eq!(LandingPhase::classify(1.0, false), LandingPhase::Taxiing);
        assert_eq!(
            LandingPhase::classify(GROUND_CLEARANCE, true),
            LandingPhase::Airborne
        );
    }

    #[test]
    fn touchdown_on_runway_clamps_and_reports_edge() {
        let map = runway_world();
        let mut flight = FlightModel::new();
        flight.transform.position = Vec3::new(0.0, 0.4, 100.0);
        flight.velocity = Vec3::new(0.0, -0.3, 0.5);

        let touchdown = resolve(&mut flight, &map, LandingPhase::Airborne);
        assert_eq!(touchdown.phase, LandingPhase::Landed);
        assert!(touchdown.just_landed);
        assert_eq!(flight.transform.position.y, GROUND_CLEARANCE);
        assert_eq!(flight.velocity.y, 0.0);

        // Staying down the next frame is no longer an edge.
        flight.transform.position.y = 0.4;
        let again = resolve(&mut flight, &map, touchdown.phase);
        assert!(!again.just_landed);
        assert!(!again.changed);
    }

    #[test]
    fn ground_contact_off_runway_taxis_without_leveling() {
        let map = runway_world();
        let mut flight = FlightModel::new();
        flight.transform.position = Vec3::new(500.0, 0.5, 500.0);
        flight.transform.pitch = 0.2;
        flight.velocity.y = -1.0;

        let touchdown = resolve(&mut flight, &map, LandingPhase::Landed);
        assert_eq!(touchdown.phase, LandingPhase::Taxiing);
        assert!(!touchdown.just_landed);
        assert!(touchdown.changed);
        // No runway, so no auto-level; clamp still applies.
        assert_eq!(flight.transform.pitch, 0.2);
        assert_eq!(flight.transform.position.y, GROUND_CLEARANCE);
        assert_eq!(flight.velocity.y, 0.0);
    }

    #[test]
    fn climbing_away_returns_to_airborne() {
        let map = runway_world();
        let mut flight = FlightModel::new();
        flight.transform.position = Vec3::new(0.0, 8.0, 100.0);

        let touchdown = resolve(&mut flight, &map, LandingPhase::Landed);
        assert_eq!(touchdown.phase, LandingPhase::Airborne);
        assert!(touchdown.changed);
    }

    #[test]
    fn runway_auto_level_converges() {
        let map = runway_world();
        let mut flight = FlightModel::new();
        flight.transform.pitch = 0.3;
        flight.roll = 0.4;
        let mut phase = LandingPhase::Airborne;
        for _ in 0..100 {
            flight.transform.position.y = 0.5;
            phase = resolve(&mut flight, &map, phase).phase;
        }
        assert!(flight.transform.pitch.abs() < 1e-3);
        assert!(flight.roll.abs() < 1e-3);
    }
}
