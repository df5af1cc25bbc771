//! Stride - headless third-person locomotion harness
//!
//! Builds a small rapier world, spawns a capsule character and drives the
//! locomotion controller through a scripted input timeline, logging what the
//! character does.
//!
//! Usage: `stride [settings.toml] [--save-defaults]`

mod scenario;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::Serialize;
use stride_core::{CharacterMover, GameTime, LayerMask, TimeConfig};
use stride_game::{
    AnimatorParameters, LocomotionController, LocomotionDeps, LocomotionState, SharedCameraYaw,
    SPEED_PARAMETER,
};
use stride_physics::{PhysicsCharacter, PhysicsGroundProbe, PhysicsWorld};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use scenario::ScriptCursor;
use settings::SimSettings;

/// Final report printed at the end of a run
#[derive(Debug, Serialize)]
struct RunSummary {
    frames: u64,
    simulated_seconds: f64,
    position: Vec3,
    facing_yaw: f32,
    jumps: u64,
    state: LocomotionState,
}

/// Ground plane plus a low platform and a wall, all on `layer`
fn build_world(layer: LayerMask) -> PhysicsWorld {
    let mut world = PhysicsWorld::new();
    world.create_ground(0.0, layer);
    world.create_static_box(Vec3::new(2.0, 0.1, 2.0), Vec3::new(4.0, 0.1, 6.0), layer);
    world.create_static_box(Vec3::new(10.0, 2.0, 0.5), Vec3::new(0.0, 2.0, 14.0), layer);
    world
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    info!("Starting Stride locomotion harness...");

    let mut settings_path = None;
    let mut save_defaults = false;
    for arg in std::env::args().skip(1) {
        if arg == "--save-defaults" {
            save_defaults = true;
        } else {
            settings_path = Some(PathBuf::from(arg));
        }
    }

    let settings = match &settings_path {
        Some(path) => SimSettings::load_from(path),
        None => SimSettings::load(),
    };
    settings
        .simulation
        .validate()
        .context("Invalid simulation settings")?;
    if save_defaults {
        let path = SimSettings::default().save()?;
        info!("Wrote default settings to {}", path.display());
    }

    let world = build_world(settings.locomotion.ground_layers).into_shared();
    let spawn = Vec3::from_array(settings.character.spawn);
    let mut character =
        PhysicsCharacter::spawn(world.clone(), settings.character.capsule(), spawn);
    character.set_facing_yaw(settings.character.facing);

    let probe = PhysicsGroundProbe::new(world.clone()).excluding(character.collider_handle());
    let camera = SharedCameraYaw::new(settings.simulation.camera_yaw);

    let mut controller = LocomotionController::init(
        settings.locomotion.clone(),
        LocomotionDeps {
            camera: camera.clone(),
            probe,
            mover: character,
            animator: AnimatorParameters::new(),
        },
    )
    .context("Failed to start locomotion controller")?;

    let frame_length = settings.simulation.frame_length;
    let mut time = GameTime::new(TimeConfig {
        frame_length,
        ..Default::default()
    });
    time.set_time_scale(settings.simulation.time_scale);
    let mut script = ScriptCursor::new(settings.script());

    while let Some(frame) = script.next_frame(frame_length) {
        if frame.started {
            info!("Step: {}", frame.step.label);
        }

        if frame.step.pause {
            time.pause();
        } else {
            time.resume();
        }
        time.advance_frame();

        camera.rotate(frame.step.camera_turn_rate * time.delta_time);
        let report = controller.tick(time.delta_time, &frame.input);

        if report.jumped {
            info!(position = ?controller.position(), "Jumped");
        }

        let log_every = settings.simulation.log_every;
        if log_every > 0 && time.frame_count % log_every == 0 {
            info!(
                frame = time.frame_count,
                position = ?controller.position(),
                facing = controller.facing_yaw(),
                speed = controller.animator().float(SPEED_PARAMETER).unwrap_or(0.0),
                grounded = report.grounded,
                frozen = report.frozen,
                "Character"
            );
        }
    }

    let summary = RunSummary {
        frames: time.frame_count,
        simulated_seconds: time.total_time,
        position: controller.position(),
        facing_yaw: controller.facing_yaw(),
        jumps: controller.animator().trigger_count(),
        state: *controller.state(),
    };
    info!("Run complete: {}", serde_json::to_string(&summary)?);

    Ok(())
}
