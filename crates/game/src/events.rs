//! Edge-triggered key actions, applied before the physics step each frame.

use input::InputState;

use crate::cargo::{self, InteractionOutcome};
use crate::shop;
use crate::state::WorldState;

/// Altitude below which the gear lever is locked.
const GEAR_LOCK_ALTITUDE: f32 = 10.0;

/// Apply every edge-triggered action pressed this frame.
pub fn handle_actions(world: &mut WorldState, input: &InputState) {
    if input.gear_pressed() {
        toggle_gear(world);
    }

    if input.interact_pressed() && world.phase.is_landed() {
        run_cargo_interaction(world);
    }

    if input.mission_menu_pressed() {
        world.mission_menu_open = !world.mission_menu_open;
    }

    if input.help_pressed() {
        world.help_open = !world.help_open;
    }

    // Reset is recovery from a crash, not a free teleport home.
    if input.reset_pressed() && world.crashed {
        world.reset_aircraft();
    }

    if input.camera_pressed() {
        world.camera = world.camera.next();
        world
            .messages
            .info(format!("Camera: {}", world.camera.label()));
    }

    if input.nav_toggle_pressed() {
        let active = world.nav.toggle(&world.hold, &world.locations);
        world.messages.info(format!(
            "Navigation aids: {}",
            if active { "ON" } else { "OFF" }
        ));
    }

    if input.nav_mode_pressed() {
        if let Some(mode) = world.nav.cycle_mode() {
            world
                .messages
                .info(format!("Navigation mode: {}", mode.label()));
        }
    }

    if input.shop_pressed() {
        toggle_shop(world);
    }

    if input.trail_pressed() {
        let enabled = world.trail.toggle();
        world.messages.info(if enabled {
            "Contrail enabled"
        } else {
            "Contrail disabled"
        });
    }
}

fn toggle_gear(world: &mut WorldState) {
    if world.flight.transform.altitude() < GEAR_LOCK_ALTITUDE {
        world
            .messages
            .warning("Climb higher before cycling the landing gear");
        return;
    }
    world.gear_down = !world.gear_down;
    world.messages.info(if world.gear_down {
        "Landing gear down"
    } else {
        "Landing gear up"
    });
}

fn toggle_shop(world: &mut WorldState) {
    let on_runway = world
        .surfaces
        .runway_below(world.flight.transform.position);
    let z = world.flight.transform.position.z;
    if shop::shop_accessible(world.phase.is_landed(), on_runway, z) {
        world.shop.open = !world.shop.open;
    } else {
        world
            .messages
            .warning("Land at the main airfield to access the upgrade shop");
    }
}

/// Exchange cargo with the nearest pad and report the result. Runs on Space
/// while landed and automatically on the touchdown frame.
pub fn run_cargo_interaction(world: &mut WorldState) {
    let mut rng = rand::thread_rng();
    let outcome = cargo::attempt_interaction(
        world.flight.transform.position,
        &mut world.locations,
        &mut world.hold,
        &mut world.money,
        world.tunables.cargo_capacity,
        &mut rng,
    );
    match outcome {
        InteractionOutcome::PickedUp(item) => {
            world.messages.success(format!(
                "Picked up {:.1} t of cargo for {}, payout {}₺",
                item.weight, item.destination, item.value
            ));
        }
        InteractionOutcome::Delivered(item) => {
            world
                .messages
                .success(format!("Cargo delivered, earned {}₺", item.value));
        }
        InteractionOutcome::WrongDestination { here, wanted } => {
            world
                .messages
                .info(format!("This is {here}. Your cargo is bound for {wanted}"));
        }
        InteractionOutcome::HoldFull => {
            world.messages.warning("Cargo hold is full");
        }
        InteractionOutcome::NothingToDo | InteractionOutcome::NoLocation => {}
    }
}
