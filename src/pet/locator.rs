//! Locator feed: latest NPC snapshot with membership-change detection.
use std::collections::HashSet;

use bevy::prelude::*;

use super::components::{Location, NpcId, NpcInfo};

/// One ingestion tick's worth of locator truth, replaced wholesale.
#[derive(Debug, Clone, Default)]
pub struct LocatorSnapshot {
    pub npcs: Vec<NpcInfo>,
    pub ping: Option<Location>,
}

impl LocatorSnapshot {
    pub fn new(npcs: Vec<NpcInfo>, ping: Option<Location>) -> Self {
        Self { npcs, ping }
    }
}

/// Holds the current locator snapshot for reader modules.
///
/// Each ingestion replaces the snapshot; the previous one is kept only long
/// enough to diff NPC membership. Stat-only churn (same ids, new readings)
/// replaces silently so readers are not flooded with cosmetic updates.
#[derive(Resource, Debug, Default)]
pub struct LocatorFeed {
    snapshot: LocatorSnapshot,
}

impl LocatorFeed {
    /// Replaces the snapshot. Returns true when NPC membership (by id)
    /// differs from the previous snapshot.
    pub fn apply(&mut self, snapshot: LocatorSnapshot) -> bool {
        let changed = !same_membership(&self.snapshot.npcs, &snapshot.npcs);
        self.snapshot = snapshot;
        changed
    }

    /// Current NPC set. Never null: empty when the locator is unavailable.
    pub fn npcs(&self) -> &[NpcInfo] {
        &self.snapshot.npcs
    }

    /// Ping target location, if the locator has one.
    pub fn ping_location(&self) -> Option<Location> {
        self.snapshot.ping
    }
}

fn same_membership(previous: &[NpcInfo], next: &[NpcInfo]) -> bool {
    let previous_ids: HashSet<NpcId> = previous.iter().map(|npc| npc.id).collect();
    let next_ids: HashSet<NpcId> = next.iter().map(|npc| npc.id).collect();
    previous_ids == next_ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::components::{Location, NpcId, NpcInfo};

    fn npc(id: u64, health: f64) -> NpcInfo {
        NpcInfo::new(
            NpcId::new(id),
            format!("Sibelon {}", id),
            Location::new(100.0 * id as f64, 50.0),
            health,
        )
    }

    #[test]
    fn feed_starts_empty_and_never_null() {
        let feed = LocatorFeed::default();
        assert!(feed.npcs().is_empty());
        assert!(feed.ping_location().is_none());
    }

    #[test]
    fn same_members_with_different_readings_replace_silently() {
        let mut feed = LocatorFeed::default();

        assert!(feed.apply(LocatorSnapshot::new(vec![npc(1, 100.0), npc(2, 80.0)], None)));
        assert!(!feed.apply(LocatorSnapshot::new(
            vec![npc(1, 60.0), npc(2, 75.0)],
            Some(Location::new(5.0, 5.0)),
        )));

        // The snapshot itself was still replaced.
        assert_eq!(feed.npcs()[0].health, 60.0);
        assert_eq!(feed.ping_location(), Some(Location::new(5.0, 5.0)));
    }

    #[test]
    fn membership_change_is_detected() {
        let mut feed = LocatorFeed::default();
        feed.apply(LocatorSnapshot::new(vec![npc(1, 100.0), npc(2, 100.0)], None));

        assert!(feed.apply(LocatorSnapshot::new(
            vec![npc(1, 100.0), npc(3, 100.0)],
            None
        )));
        let ids: Vec<_> = feed.npcs().iter().map(|npc| npc.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn emptying_the_feed_counts_as_a_membership_change() {
        let mut feed = LocatorFeed::default();
        feed.apply(LocatorSnapshot::new(vec![npc(1, 100.0)], None));

        assert!(feed.apply(LocatorSnapshot::default()));
        assert!(feed.npcs().is_empty());
        assert!(!feed.apply(LocatorSnapshot::default()));
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let mut feed = LocatorFeed::default();
        feed.apply(LocatorSnapshot::new(vec![npc(1, 100.0), npc(2, 100.0)], None));
        assert!(!feed.apply(LocatorSnapshot::new(
            vec![npc(2, 100.0), npc(1, 100.0)],
            None
        )));
    }
}
