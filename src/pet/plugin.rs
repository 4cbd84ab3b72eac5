//! Pet plugin wiring control resources and tick systems.
use bevy::prelude::*;

use super::{
    components::GearCatalog,
    config::PetConfig,
    control::PetControl,
    events::{
        GearResolutionChangedEvent, LocatorNpcListChangeEvent, LocatorSnapshotEvent,
        PetActivationChangedEvent,
    },
    locator::LocatorFeed,
    status::PetStatus,
    systems::{
        apply_pet_activation, ingest_locator_snapshots, resolve_pet_gear, GearResolution,
        PetActivation,
    },
    telemetry::{flush_pet_telemetry_log, record_pet_telemetry, PetTelemetry, PetTelemetryLog},
};

pub struct PetPlugin;

impl Plugin for PetPlugin {
    fn build(&self, app: &mut App) {
        let config = PetConfig::load_or_default();
        let control = PetControl::new(config.gear_grace_period);
        let telemetry = PetTelemetry::new(config.telemetry_capacity);
        let telemetry_log = PetTelemetryLog::new(config.telemetry_log_path.clone());

        app.insert_resource(control)
            .insert_resource(telemetry)
            .insert_resource(telemetry_log)
            .insert_resource(config)
            .init_resource::<PetStatus>()
            .init_resource::<GearCatalog>()
            .init_resource::<LocatorFeed>()
            .init_resource::<PetActivation>()
            .init_resource::<GearResolution>()
            .add_event::<LocatorSnapshotEvent>()
            .add_event::<LocatorNpcListChangeEvent>()
            .add_event::<PetActivationChangedEvent>()
            .add_event::<GearResolutionChangedEvent>()
            .add_systems(Startup, log_pet_startup)
            .add_systems(
                Update,
                (
                    ingest_locator_snapshots,
                    resolve_pet_gear,
                    apply_pet_activation,
                    record_pet_telemetry,
                    flush_pet_telemetry_log,
                )
                    .chain(),
            );

        #[cfg(feature = "pet_debug")]
        {
            use super::systems::{log_pet_state, DebugStatusTimer};
            app.init_resource::<DebugStatusTimer>()
                .add_systems(Update, log_pet_state);
        }
    }
}

fn log_pet_startup(config: Res<PetConfig>, control: Res<PetControl>) {
    info!(
        "PetPlugin initialised (user pet enabled: {}, gear grace period: {:.1}s)",
        config.user_enabled,
        control.grace_period().as_secs_f32(),
    );
}
