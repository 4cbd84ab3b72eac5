//! Pet control and arbitration layer.
//!
//! Behavior modules share one pet through [`control::PetControl`]: a
//! last-writer-wins enable flag plus a gear override that must be refreshed
//! every cycle or it decays back to the user's configured gear. Live game
//! truth (liveness, equipped gear, cooldowns, stats) arrives through
//! [`status::PetStatus`], locator pings through [`locator::LocatorFeed`].
pub mod components;
pub mod config;
pub mod control;
pub mod errors;
pub mod events;
pub mod locator;
pub mod plugin;
pub mod status;
pub mod systems;
pub mod telemetry;

pub use plugin::PetPlugin;
