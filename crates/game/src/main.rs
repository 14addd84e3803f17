//! Headless demo flight. Runs the simulation at a fixed 60 Hz step against a
//! scripted key schedule and logs what the HUD and notification channel
//! produce. Useful for eyeballing the systems without a renderer attached.

use anyhow::{anyhow, Result};
use input::{InputState, KeyCode, KeyState};
use log::info;
use sim_core::FrameClock;

use game::{frame, GameConfig, WorldState};

const STEP: f32 = 1.0 / 60.0;
const TOTAL_FRAMES: u64 = 3600;

/// (frame, DOM-style key name, pressed)
const SCRIPT: &[(u64, &str, bool)] = &[
    (10, "w", true),
    (120, "ArrowUp", true),
    (240, "ArrowUp", false),
    (300, "n", true),
    (301, "n", false),
    (330, "b", true),
    (331, "b", false),
    (400, "g", true),
    (401, "g", false),
    (600, "c", true),
    (601, "c", false),
    (900, "t", true),
    (901, "t", false),
    (1800, "w", false),
    (1800, "s", true),
    (2600, "s", false),
    (2600, "ArrowDown", true),
    (2700, "ArrowDown", false),
];

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::load();
    let mut world = WorldState::new(&config);
    let mut input = InputState::new();
    let mut clock = FrameClock::new();

    let script: Vec<(u64, KeyCode, KeyState)> = SCRIPT
        .iter()
        .map(|&(frame, name, pressed)| {
            let key = KeyCode::from_key_name(name)
                .ok_or_else(|| anyhow!("unknown key in script: {name}"))?;
            let state = if pressed {
                KeyState::Pressed
            } else {
                KeyState::Released
            };
            Ok((frame, key, state))
        })
        .collect::<Result<_>>()?;

    info!(
        "starting demo flight: {} frames at {:.0} Hz",
        TOTAL_FRAMES,
        1.0 / STEP
    );

    for n in 0..TOTAL_FRAMES {
        clock.tick();
        input.begin_frame();
        for &(at, key, state) in script.iter().filter(|&&(at, _, _)| at == n) {
            input.process_key(key, state);
        }

        let result = frame(&mut world, &input, STEP);
        for note in &result.notifications {
            info!("[{n:>5}] {note}");
        }
        if n % 300 == 0 {
            info!(
                "[{n:>5}] {} alt {:.0} m, speed {:.2}, cargo {}/{}, money {}₺",
                result.hud.status,
                result.hud.altitude,
                result.hud.speed,
                result.hud.cargo_count,
                result.hud.cargo_capacity,
                result.hud.money
            );
        }
    }

    info!(
        "demo complete: {:.1} s of simulation in {:.2} s wall time",
        TOTAL_FRAMES as f32 * STEP,
        clock.elapsed_seconds()
    );
    Ok(())
}
