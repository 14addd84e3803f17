//! Cargo-flight simulation core: an arcade flight model, a small delivery
//! economy, navigation aids, and the cosmetic systems around them. The
//! presentation layer feeds key events in and draws from the [`FrameResult`]
//! each step; nothing in here touches a window or a GPU.

pub mod cargo;
pub mod config;
pub mod events;
pub mod flight;
pub mod hud;
pub mod landing;
pub mod nav;
pub mod shop;
pub mod state;
pub mod trail;
pub mod update;

pub use config::{GameConfig, Tunables};
pub use hud::{HudData, LandingGuide};
pub use landing::LandingPhase;
pub use state::WorldState;
pub use update::{frame, FrameResult};
