//! Tick systems arbitrating pet state each host cycle.
use bevy::prelude::*;
#[cfg(feature = "pet_debug")]
use bevy::time::TimerMode;

use super::{
    components::GearId,
    config::PetConfig,
    control::PetControl,
    events::{
        GearResolutionChangedEvent, LocatorNpcListChangeEvent, LocatorSnapshotEvent,
        PetActivationChangedEvent,
    },
    locator::LocatorFeed,
};

/// Whether the pet should actually be operated this tick: the module enable
/// flag combined with the user's own pet setting.
#[derive(Resource, Debug, Default)]
pub struct PetActivation {
    operating: bool,
}

impl PetActivation {
    pub fn is_operating(&self) -> bool {
        self.operating
    }

    /// Stores the freshly computed gate. Returns true when it flipped.
    fn update(&mut self, operating: bool) -> bool {
        let flipped = self.operating != operating;
        self.operating = operating;
        flipped
    }
}

/// The gear resolution the host should act on this tick.
#[derive(Resource, Debug, Default)]
pub struct GearResolution {
    current: Option<GearId>,
}

impl GearResolution {
    /// `None` means "leave the pet on the user's in-game choice".
    pub fn current(&self) -> Option<GearId> {
        self.current
    }

    fn update(&mut self, gear: Option<GearId>) -> bool {
        let changed = self.current != gear;
        self.current = gear;
        changed
    }
}

/// Drains ingestion snapshots into the feed, emitting a change event only
/// when NPC membership actually changed.
pub fn ingest_locator_snapshots(
    mut feed: ResMut<LocatorFeed>,
    mut snapshots: MessageReader<LocatorSnapshotEvent>,
    mut changes: MessageWriter<LocatorNpcListChangeEvent>,
) {
    for event in snapshots.read() {
        if feed.apply(event.snapshot.clone()) {
            info!("Locator NPC list changed: {} visible", feed.npcs().len());
            changes.write(LocatorNpcListChangeEvent {
                npcs: feed.npcs().to_vec(),
            });
        }
    }
}

/// The per-tick read of the override engine. This is what makes expiry lazy:
/// a lapsed lease is observed and cleared here, inside the tick, without any
/// background timer.
pub fn resolve_pet_gear(
    time: Res<Time>,
    config: Res<PetConfig>,
    mut control: ResMut<PetControl>,
    mut resolution: ResMut<GearResolution>,
    mut changes: MessageWriter<GearResolutionChangedEvent>,
) {
    let now = time.elapsed();
    let lapsed = control.override_lapsed(now);
    let effective = control.effective_gear(now, config.user_gear);

    if lapsed {
        info!("Gear override lease lapsed, reverting to user choice");
    }

    if resolution.update(effective) {
        match effective {
            Some(gear) => info!("Pet gear resolved to {}", gear),
            None => info!("Pet gear resolved to user default"),
        }
        changes.write(GearResolutionChangedEvent { gear: effective });
    }
}

/// Combines the last-writer-wins enable flag with the user setting and emits
/// an event when the result flips.
pub fn apply_pet_activation(
    config: Res<PetConfig>,
    control: Res<PetControl>,
    mut activation: ResMut<PetActivation>,
    mut changes: MessageWriter<PetActivationChangedEvent>,
) {
    let operating = control.is_enabled() && config.user_enabled;
    if activation.update(operating) {
        info!(
            "Pet {} (module flag: {}, user setting: {})",
            if operating { "activated" } else { "deactivated" },
            control.is_enabled(),
            config.user_enabled,
        );
        changes.write(PetActivationChangedEvent { operating });
    }
}

#[cfg(feature = "pet_debug")]
#[derive(Resource)]
pub struct DebugStatusTimer {
    timer: Timer,
}

#[cfg(feature = "pet_debug")]
impl Default for DebugStatusTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

#[cfg(feature = "pet_debug")]
pub fn log_pet_state(
    time: Res<Time>,
    mut timer: ResMut<DebugStatusTimer>,
    activation: Res<PetActivation>,
    resolution: Res<GearResolution>,
    feed: Res<LocatorFeed>,
) {
    if timer.timer.tick(time.delta()).just_finished() {
        info!(
            target: "pet_debug",
            "operating: {} | gear: {:?} | locator npcs: {}",
            activation.is_operating(),
            resolution.current(),
            feed.npcs().len(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::components::GearId;

    #[test]
    fn activation_gate_flips_only_on_change() {
        let mut activation = PetActivation::default();
        assert!(!activation.is_operating());

        assert!(activation.update(true));
        assert!(activation.is_operating());

        // Same value again: no flip, no event would be emitted.
        assert!(!activation.update(true));
        assert!(activation.update(false));
    }

    #[test]
    fn gear_resolution_tracks_distinct_values() {
        let mut resolution = GearResolution::default();
        assert_eq!(resolution.current(), None);

        assert!(resolution.update(Some(GearId::new(3))));
        assert!(!resolution.update(Some(GearId::new(3))));
        assert!(resolution.update(None));
        assert_eq!(resolution.current(), None);
    }
}
