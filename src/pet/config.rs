//! Pet configuration loaded from `config/pet.toml`.
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use bevy::prelude::*;
use serde::Deserialize;

use super::components::GearId;

const CONFIG_PATH: &str = "config/pet.toml";

const MIN_GRACE_SECONDS: f32 = 0.1;

#[derive(Debug, Clone, Deserialize, Default)]
struct RawPetConfig {
    #[serde(default)]
    pet: RawPetSection,
    #[serde(default, rename = "override")]
    gear_override: RawOverrideSection,
    #[serde(default)]
    telemetry: RawTelemetrySection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPetSection {
    enabled: bool,
    gear_id: Option<u32>,
}

impl Default for RawPetSection {
    fn default() -> Self {
        Self {
            enabled: false,
            gear_id: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawOverrideSection {
    grace_seconds: f32,
}

impl Default for RawOverrideSection {
    fn default() -> Self {
        Self { grace_seconds: 5.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawTelemetrySection {
    log_path: String,
    capacity: usize,
}

impl Default for RawTelemetrySection {
    fn default() -> Self {
        Self {
            log_path: "logs/pet_history.jsonl".to_string(),
            capacity: 64,
        }
    }
}

/// Runtime configuration derived from `config/pet.toml`.
///
/// `user_enabled` is the user's own pet switch; it gates real pet usage no
/// matter what any module writes to the enable flag. `user_gear` is the
/// user's preferred gear, the fallback once an override relinquishes or
/// expires (`None` leaves the pet on whatever the game has).
#[derive(Resource, Debug, Clone)]
pub struct PetConfig {
    pub user_enabled: bool,
    pub user_gear: Option<GearId>,
    pub gear_grace_period: Duration,
    pub telemetry_log_path: PathBuf,
    pub telemetry_capacity: usize,
}

impl PetConfig {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawPetConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawPetConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawPetConfig::default().into()
            }
        }
    }
}

impl From<RawPetConfig> for PetConfig {
    fn from(value: RawPetConfig) -> Self {
        let grace_seconds = value.gear_override.grace_seconds.max(MIN_GRACE_SECONDS);

        Self {
            user_enabled: value.pet.enabled,
            user_gear: value.pet.gear_id.map(GearId::new),
            gear_grace_period: Duration::from_secs_f32(grace_seconds),
            telemetry_log_path: PathBuf::from(value.telemetry.log_path),
            telemetry_capacity: value.telemetry.capacity.max(1),
        }
    }
}
