//! Debug/performance tooling for native dev builds.
//!
//! Only compiled with `dev_native` (`#[cfg(feature = "dev_native")] mod debug_tools;` in
//! `main.rs`).

use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, SystemInformationDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy::render::diagnostic::RenderDiagnosticsPlugin;
use iyes_perf_ui::prelude::*;
use skyhop_shared::PlayerState;

use crate::{player::PlayerSim, transform::to_bevy};

/// Horizontal velocity is per tick, so scale it up to something visible.
const VELOCITY_ARROW_SCALE: f32 = 20.0;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        SystemInformationDiagnosticsPlugin::default(),
        RenderDiagnosticsPlugin,
        PerfUiPlugin,
    ));

    app.add_systems(Startup, spawn_perf_ui);
    app.add_systems(Update, (draw_player_motion, log_state_changes));
}

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn(PerfUiAllEntries::default());
}

/// Velocity and boost arrows on the player, or the current shot's destination during the intro.
fn draw_player_motion(sim: Res<PlayerSim>, mut gizmos: Gizmos) {
    let controller = &sim.controller;

    if controller.intro().is_active() {
        let destination = controller.intro().destination(&controller.settings().intro);
        gizmos.sphere(
            Isometry3d::from_translation(to_bevy(&destination)),
            1.0,
            Color::srgb(1.0, 0.8, 0.2),
        );
        return;
    }

    let origin = to_bevy(&sim.position);
    let velocity = to_bevy(&controller.body().horizontal_velocity);
    gizmos.arrow(
        origin,
        origin + velocity * VELOCITY_ARROW_SCALE,
        Color::srgb(0.2, 1.0, 0.4),
    );

    let boost = controller.boost();
    if boost.is_active() {
        gizmos.arrow(origin, origin + to_bevy(&boost.dir) * 2.0, Color::srgb(0.3, 0.7, 1.0));
    }
}

fn log_state_changes(sim: Res<PlayerSim>, mut last: Local<Option<PlayerState>>) {
    let state = sim.controller.state();
    if *last != Some(state) {
        debug!(
            "player state {:?} (cap {:.3}, grounded {})",
            state,
            sim.controller.horizontal_max(),
            sim.grounded
        );
        *last = Some(state);
    }
}
