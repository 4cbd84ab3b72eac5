//! Telemetry storage for pet control transitions.
use std::{
    collections::VecDeque,
    fs::{create_dir_all, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use bevy::{log::warn, prelude::*};
use serde::Serialize;

use super::{
    components::GearId,
    events::{GearResolutionChangedEvent, LocatorNpcListChangeEvent, PetActivationChangedEvent},
};

/// Rolling log of control transitions for host-side inspection.
#[derive(Resource, Debug)]
pub struct PetTelemetry {
    capacity: usize,
    records: VecDeque<PetTelemetryRecord>,
}

impl PetTelemetry {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            records: VecDeque::new(),
        }
    }

    pub fn push(&mut self, record: PetTelemetryRecord) {
        while self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn records(&self) -> impl Iterator<Item = &PetTelemetryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Single telemetry entry.
#[derive(Debug, Clone)]
pub struct PetTelemetryRecord {
    pub occurred_at_seconds: f64,
    pub event: PetTelemetryEvent,
}

/// The control transitions worth recording.
#[derive(Debug, Clone)]
pub enum PetTelemetryEvent {
    Activation { operating: bool },
    GearResolution { gear: Option<GearId> },
    LocatorChange { npc_count: usize },
}

/// System that records control transitions for later inspection.
pub fn record_pet_telemetry(
    time: Res<Time>,
    mut telemetry: ResMut<PetTelemetry>,
    mut log: ResMut<PetTelemetryLog>,
    mut activations: MessageReader<PetActivationChangedEvent>,
    mut resolutions: MessageReader<GearResolutionChangedEvent>,
    mut locator_changes: MessageReader<LocatorNpcListChangeEvent>,
) {
    let now = time.elapsed_secs_f64();

    for event in activations.read() {
        let record = PetTelemetryRecord {
            occurred_at_seconds: now,
            event: PetTelemetryEvent::Activation {
                operating: event.operating,
            },
        };
        log.push(&record);
        telemetry.push(record);
    }

    for event in resolutions.read() {
        let record = PetTelemetryRecord {
            occurred_at_seconds: now,
            event: PetTelemetryEvent::GearResolution { gear: event.gear },
        };
        log.push(&record);
        telemetry.push(record);
    }

    for event in locator_changes.read() {
        let record = PetTelemetryRecord {
            occurred_at_seconds: now,
            event: PetTelemetryEvent::LocatorChange {
                npc_count: event.npcs.len(),
            },
        };
        log.push(&record);
        telemetry.push(record);
    }
}

/// Rolling log that writes telemetry to disk for offline inspection.
#[derive(Resource, Debug)]
pub struct PetTelemetryLog {
    output_path: PathBuf,
    pending: Vec<PetTelemetryRecord>,
}

impl PetTelemetryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
            pending: Vec::new(),
        }
    }

    pub fn push(&mut self, record: &PetTelemetryRecord) {
        self.pending.push(record.clone());
    }

    fn ensure_directory(&self) -> std::io::Result<()> {
        if let Some(parent) = self.output_path.parent() {
            create_dir_all(parent)?;
        }
        Ok(())
    }

    fn drain_pending(&mut self) -> Vec<PetTelemetryRecord> {
        std::mem::take(&mut self.pending)
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        self.ensure_directory()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output_path)?;

        for record in self.drain_pending() {
            let serialisable: SerializablePetTelemetryRecord = record.into();
            serde_json::to_writer(&mut file, &serialisable)?;
            file.write_all(b"\n")?;
        }

        file.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.output_path
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Flushes pending telemetry entries, logging a warning if persistence fails.
pub fn flush_pet_telemetry_log(mut log: ResMut<PetTelemetryLog>) {
    if let Err(err) = log.flush() {
        warn!(
            "Failed to persist pet telemetry to {:?}: {}",
            log.path(),
            err
        );
    }
}

#[derive(Serialize)]
struct SerializablePetTelemetryRecord {
    occurred_at_seconds: f64,
    event: SerializablePetTelemetryEvent,
}

impl From<PetTelemetryRecord> for SerializablePetTelemetryRecord {
    fn from(value: PetTelemetryRecord) -> Self {
        Self {
            occurred_at_seconds: value.occurred_at_seconds,
            event: value.event.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
enum SerializablePetTelemetryEvent {
    Activation { operating: bool },
    GearResolution { gear_id: Option<u32> },
    LocatorChange { npc_count: usize },
}

impl From<PetTelemetryEvent> for SerializablePetTelemetryEvent {
    fn from(value: PetTelemetryEvent) -> Self {
        match value {
            PetTelemetryEvent::Activation { operating } => Self::Activation { operating },
            PetTelemetryEvent::GearResolution { gear } => Self::GearResolution {
                gear_id: gear.map(GearId::value),
            },
            PetTelemetryEvent::LocatorChange { npc_count } => Self::LocatorChange { npc_count },
        }
    }
}
