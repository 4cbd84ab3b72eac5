//! Live pet state mirrored from the game by the host each tick.
use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use super::components::{CooldownId, GearId, PetGear, PetStat, Stat};

/// Raw current/total reading for one stat slot.
#[derive(Debug, Clone, Copy, Default)]
struct StatReading {
    current: f64,
    total: f64,
}

/// Mirror of the live pet truth owned by the game.
///
/// The host overwrites these fields from raw game state every tick; behavior
/// modules only read. Nothing here is cached beyond the current tick, so
/// every query reflects "right now" as of the last host write.
#[derive(Resource, Debug, Default)]
pub struct PetStatus {
    active: bool,
    repaired: bool,
    repair_count: u32,
    equipped: HashSet<GearId>,
    in_game_gear: Option<GearId>,
    active_cooldowns: HashSet<CooldownId>,
    stat_readings: HashMap<Stat, StatReading>,
}

impl PetStatus {
    /// True if the pet is alive and on the map.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_repaired(&self) -> bool {
        self.repaired
    }

    /// Number of times the pet has been repaired this session.
    pub fn repair_count(&self) -> u32 {
        self.repair_count
    }

    /// True if the hero currently has this gear equipped and available.
    pub fn has_gear(&self, gear: GearId) -> bool {
        self.equipped.contains(&gear)
    }

    /// The gear the game actually has mounted right now.
    ///
    /// A just-issued gear request may lag here by a cycle; callers must not
    /// assume immediate convergence with the requested override.
    pub fn in_game_gear(&self) -> Option<GearId> {
        self.in_game_gear
    }

    /// True if the given cooldown window is currently running.
    pub fn has_cooldown(&self, cooldown: CooldownId) -> bool {
        self.active_cooldowns.contains(&cooldown)
    }

    /// True if the gear's associated cooldown is running. Gears with no
    /// cooldown mapping report `false` without consulting the live set.
    pub fn gear_cooling_down(&self, gear: &PetGear) -> bool {
        match gear.cooldown {
            Some(cooldown) => self.has_cooldown(cooldown),
            None => false,
        }
    }

    /// Builds a fresh stat value object from the latest raw reading.
    /// Slots the game has not reported yet read as zeroed.
    pub fn stat(&self, stat: Stat) -> PetStat {
        let reading = self.stat_readings.get(&stat).copied().unwrap_or_default();
        PetStat::new(reading.current, reading.total)
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn set_repaired(&mut self, repaired: bool) {
        self.repaired = repaired;
    }

    pub fn set_repair_count(&mut self, count: u32) {
        self.repair_count = count;
    }

    /// Replaces the hero's equipped gear set wholesale.
    pub fn set_equipped(&mut self, gears: impl IntoIterator<Item = GearId>) {
        self.equipped = gears.into_iter().collect();
    }

    pub fn set_in_game_gear(&mut self, gear: Option<GearId>) {
        self.in_game_gear = gear;
    }

    /// Replaces the active cooldown set wholesale.
    pub fn set_active_cooldowns(&mut self, cooldowns: impl IntoIterator<Item = CooldownId>) {
        self.active_cooldowns = cooldowns.into_iter().collect();
    }

    pub fn set_stat_reading(&mut self, stat: Stat, current: f64, total: f64) {
        self.stat_readings
            .insert(stat, StatReading { current, total });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::components::{CooldownId, GearId, PetGear};

    #[test]
    fn equipped_set_drives_gear_availability() {
        let mut status = PetStatus::default();
        assert!(!status.has_gear(GearId::new(2)));

        status.set_equipped([GearId::new(2), GearId::new(3)]);
        assert!(status.has_gear(GearId::new(2)));
        assert!(status.has_gear(GearId::new(3)));
        assert!(!status.has_gear(GearId::new(7)));

        status.set_equipped([GearId::new(3)]);
        assert!(!status.has_gear(GearId::new(2)));
    }

    #[test]
    fn gear_without_cooldown_mapping_is_never_cooling_down() {
        let mut status = PetStatus::default();
        status.set_active_cooldowns([CooldownId::new(1), CooldownId::new(2)]);

        let plain = PetGear::new(GearId::new(3), "Looter");
        assert!(!status.gear_cooling_down(&plain));

        let kamikaze = PetGear::with_cooldown(GearId::new(7), "Kamikaze", CooldownId::new(1));
        assert!(status.gear_cooling_down(&kamikaze));

        status.set_active_cooldowns([]);
        assert!(!status.gear_cooling_down(&kamikaze));
    }

    #[test]
    fn stats_read_fresh_and_default_to_zero() {
        let mut status = PetStatus::default();
        let empty = status.stat(Stat::Fuel);
        assert_eq!(empty.current, 0.0);
        assert_eq!(empty.total, 0.0);

        status.set_stat_reading(Stat::Fuel, 320.0, 1000.0);
        let fuel = status.stat(Stat::Fuel);
        assert_eq!(fuel.current, 320.0);
        assert_eq!(fuel.total, 1000.0);

        status.set_stat_reading(Stat::Fuel, 310.0, 1000.0);
        assert_eq!(status.stat(Stat::Fuel).current, 310.0);
        // Other slots stay independent.
        assert_eq!(status.stat(Stat::Heat).total, 0.0);
    }

    #[test]
    fn liveness_and_repair_counters_mirror_host_writes() {
        let mut status = PetStatus::default();
        assert!(!status.is_active());
        assert!(!status.is_repaired());
        assert_eq!(status.repair_count(), 0);

        status.set_active(true);
        status.set_repaired(true);
        status.set_repair_count(4);

        assert!(status.is_active());
        assert!(status.is_repaired());
        assert_eq!(status.repair_count(), 4);
    }
}
