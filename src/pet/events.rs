//! Events flowing in and out of the pet control layer.
use bevy::prelude::{Event, Message};

use super::{
    components::{GearId, NpcInfo},
    locator::LocatorSnapshot,
};

/// Written by the host's ingestion collaborator each locator tick.
#[derive(Event, Message, Debug, Clone)]
pub struct LocatorSnapshotEvent {
    pub snapshot: LocatorSnapshot,
}

/// Fired when NPC membership on the locator changes. Carries the new full
/// set, not the delta; stat-only churn never fires this.
#[derive(Event, Message, Debug, Clone)]
pub struct LocatorNpcListChangeEvent {
    pub npcs: Vec<NpcInfo>,
}

/// Fired when the combined gate (module enable flag AND user setting) flips.
#[derive(Event, Message, Debug, Clone)]
pub struct PetActivationChangedEvent {
    pub operating: bool,
}

/// Fired when the per-tick gear resolution lands on a different gear, either
/// because a module changed its request or because an override lease lapsed.
#[derive(Event, Message, Debug, Clone)]
pub struct GearResolutionChangedEvent {
    pub gear: Option<GearId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::components::{GearId, Location, NpcId, NpcInfo};

    #[test]
    fn change_event_carries_the_full_set() {
        let event = LocatorNpcListChangeEvent {
            npcs: vec![
                NpcInfo::new(NpcId::new(1), "Kucurbium", Location::new(0.0, 0.0), 100.0),
                NpcInfo::new(NpcId::new(2), "Devolarium", Location::new(9.0, 3.0), 50.0),
            ],
        };
        assert_eq!(event.npcs.len(), 2);
        assert_eq!(event.npcs[1].id, NpcId::new(2));
    }

    #[test]
    fn resolution_event_distinguishes_default_from_override() {
        let cleared = GearResolutionChangedEvent { gear: None };
        assert!(cleared.gear.is_none());

        let set = GearResolutionChangedEvent {
            gear: Some(GearId::new(3)),
        };
        assert_eq!(set.gear, Some(GearId::new(3)));
    }
}
