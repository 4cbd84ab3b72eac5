//! In-process pet control layer for a tick-based automation host.
pub mod pet;

pub use pet::{
    components::{CooldownId, GearCatalog, GearId, Location, NpcId, NpcInfo, PetGear, PetStat, Stat},
    config::PetConfig,
    control::PetControl,
    errors::GearNotEquippedError,
    events::{
        GearResolutionChangedEvent, LocatorNpcListChangeEvent, LocatorSnapshotEvent,
        PetActivationChangedEvent,
    },
    locator::{LocatorFeed, LocatorSnapshot},
    status::PetStatus,
    systems::{GearResolution, PetActivation},
    PetPlugin,
};
