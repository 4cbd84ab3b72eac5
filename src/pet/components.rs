//! Pet reference data and value objects shared across the control layer.
use std::collections::HashMap;
use std::fmt;

use bevy::prelude::*;

/// Unique identifier for a pet gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GearId(u32);

impl GearId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GearId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gear-{}", self.0)
    }
}

/// Unique identifier for a gear cooldown window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CooldownId(u32);

impl CooldownId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CooldownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cooldown-{}", self.0)
    }
}

/// Immutable reference data describing one gear loadout.
///
/// A gear optionally carries the cooldown that makes it temporarily
/// unavailable after use; most gears have none.
#[derive(Debug, Clone, PartialEq)]
pub struct PetGear {
    pub id: GearId,
    pub name: String,
    pub cooldown: Option<CooldownId>,
}

impl PetGear {
    pub fn new(id: GearId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cooldown: None,
        }
    }

    pub fn with_cooldown(id: GearId, name: impl Into<String>, cooldown: CooldownId) -> Self {
        Self {
            id,
            name: name.into(),
            cooldown: Some(cooldown),
        }
    }
}

/// Registry of known gears, seeded with the stock loadouts.
///
/// The host may register additional gears discovered at runtime.
#[derive(Resource, Debug)]
pub struct GearCatalog {
    entries: HashMap<GearId, PetGear>,
}

impl GearCatalog {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, gear: PetGear) {
        self.entries.insert(gear.id, gear);
    }

    pub fn get(&self, id: GearId) -> Option<&PetGear> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: GearId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for GearCatalog {
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(PetGear::new(GearId::new(1), "Passive"));
        catalog.insert(PetGear::new(GearId::new(2), "Guard"));
        catalog.insert(PetGear::new(GearId::new(3), "Looter"));
        catalog.insert(PetGear::new(GearId::new(4), "Resource Collector"));
        catalog.insert(PetGear::new(GearId::new(5), "Enemy Locator"));
        catalog.insert(PetGear::new(GearId::new(6), "Trader"));
        catalog.insert(PetGear::with_cooldown(
            GearId::new(7),
            "Kamikaze",
            CooldownId::new(1),
        ));
        catalog.insert(PetGear::with_cooldown(
            GearId::new(8),
            "Combo Repair",
            CooldownId::new(2),
        ));
        catalog
    }
}

/// The pet stats readable from the pet window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Hp,
    Shield,
    Fuel,
    Xp,
    Heat,
}

impl Stat {
    pub const ALL: [Stat; 5] = [Stat::Hp, Stat::Shield, Stat::Fuel, Stat::Xp, Stat::Heat];

    pub fn label(self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Shield => "shield",
            Self::Fuel => "fuel",
            Self::Xp => "xp",
            Self::Heat => "heat",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Current/total pair for one pet stat, built fresh on every query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetStat {
    pub current: f64,
    pub total: f64,
}

impl PetStat {
    pub fn new(current: f64, total: f64) -> Self {
        Self { current, total }
    }

    /// Filled fraction in `[0, 1]`; zero when the total is unknown.
    pub fn fraction(self) -> f64 {
        if self.total <= 0.0 {
            0.0
        } else {
            (self.current / self.total).clamp(0.0, 1.0)
        }
    }
}

/// In-game map position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Unique identifier for an NPC reported by the locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NpcId(u64);

impl NpcId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NPC-{}", self.0)
    }
}

/// One NPC entry as reported by the locator sub-feature.
///
/// Identity is the id alone; the remaining fields are live readings that may
/// churn between snapshots without the membership changing.
#[derive(Debug, Clone, PartialEq)]
pub struct NpcInfo {
    pub id: NpcId,
    pub name: String,
    pub location: Location,
    pub health: f64,
}

impl NpcInfo {
    pub fn new(id: NpcId, name: impl Into<String>, location: Location, health: f64) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_catalog_resolves_cooldown_mappings() {
        let catalog = GearCatalog::default();
        assert!(!catalog.is_empty());

        let guard = catalog.get(GearId::new(2)).expect("guard gear");
        assert_eq!(guard.name, "Guard");
        assert!(guard.cooldown.is_none());

        let kamikaze = catalog.get(GearId::new(7)).expect("kamikaze gear");
        assert_eq!(kamikaze.cooldown, Some(CooldownId::new(1)));

        assert!(!catalog.contains(GearId::new(999)));
    }

    #[test]
    fn catalog_insert_registers_host_gear() {
        let mut catalog = GearCatalog::empty();
        assert_eq!(catalog.len(), 0);

        catalog.insert(PetGear::new(GearId::new(42), "Prototype"));
        assert!(catalog.contains(GearId::new(42)));
        assert_eq!(catalog.get(GearId::new(42)).unwrap().name, "Prototype");
    }

    #[test]
    fn stat_fraction_handles_empty_total() {
        assert_eq!(PetStat::new(50.0, 100.0).fraction(), 0.5);
        assert_eq!(PetStat::new(10.0, 0.0).fraction(), 0.0);
        assert_eq!(PetStat::new(150.0, 100.0).fraction(), 1.0);
    }

    #[test]
    fn identifiers_format_for_logging() {
        assert_eq!(GearId::new(3).to_string(), "Gear-3");
        assert_eq!(CooldownId::new(2).to_string(), "Cooldown-2");
        assert_eq!(NpcId::new(17).to_string(), "NPC-17");
        assert_eq!(Stat::Fuel.to_string(), "fuel");
    }
}
