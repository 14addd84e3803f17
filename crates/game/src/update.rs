//! The per-frame update. Pure with respect to the outside world: it takes the
//! world and the frame's input, advances everything one step, and returns a
//! snapshot for the presentation layer to draw.

use input::InputState;

use crate::events;
use crate::hud::{self, HudData, LandingGuide};
use crate::nav::NavEvent;
use crate::state::{CrashDetection, WorldState};

/// What one simulation step produced: the HUD snapshot, the landing guide if
/// it should be visible, and the notifications raised during the step.
#[derive(Debug)]
pub struct FrameResult {
    pub hud: HudData,
    pub guide: Option<LandingGuide>,
    pub notifications: Vec<String>,
}

/// Advance the world by one fixed step.
///
/// Physics uses per-frame constants, so `dt` only drives the wall-clock
/// subsystems (message fade, weather, trail aging). The landed/airborne flag
/// feeding the flight model is the previous frame's phase; the resolution
/// pass below decides this frame's.
pub fn frame(world: &mut WorldState, input: &InputState, dt: f32) -> FrameResult {
    events::handle_actions(world, input);

    let was_landed = world.phase.is_landed();
    if !world.crashed {
        world.flight.apply_controls(input, was_landed, &world.tunables);
    }
    world.flight.integrate_orientation(was_landed);
    world
        .flight
        .compute_velocity(was_landed, world.hold.total_weight(), &world.tunables);

    let descent_rate = -world.flight.velocity.y;
    let touchdown = crate::landing::resolve(&mut world.flight, &world.surfaces, world.phase);
    world.phase = touchdown.phase;

    if touchdown.just_landed {
        if let CrashDetection::Enabled { max_impact_speed } = world.crash_detection {
            if descent_rate > max_impact_speed && !world.crashed {
                world.crashed = true;
                world.flight.speed = 0.0;
                world.messages.warning("Hard impact! Press R to reset");
            }
        }
        if !world.crashed {
            world.messages.success("Landing successful!");
            events::run_cargo_interaction(world);
        }
    }

    world.flight.integrate_position();

    let position = world.flight.transform.position;
    let (_, nav_event) = world.nav.update_gps(position, &world.hold, &world.locations);
    match nav_event {
        Some(NavEvent::RouteRenewed { destination }) => {
            world
                .messages
                .info(format!("New route to {destination} activated"));
        }
        Some(NavEvent::DestinationReached) => {
            world
                .messages
                .info("Destination reached, no more waypoints");
        }
        None => {}
    }
    let ils = world.nav.update_ils(position);

    let mut rng = rand::thread_rng();
    world
        .trail
        .update(dt, world.flight.speed, &world.flight.transform, &mut rng);

    world.messages.update(dt);
    if let Some(weather) = world.weather.update(dt) {
        world.messages.info(format!("Weather: {}", weather.label()));
    }
    world.update_hint(dt);

    world.flight.decay_controls();

    FrameResult {
        guide: hud::landing_guide(world, ils.as_ref()),
        hud: hud::snapshot(world),
        notifications: world.messages.take_fresh(),
    }
}
