use bevy::{camera::Exposure, prelude::*};

use crate::{
    player::{PlayerSim, tick_player},
    transform::{look_rotation, to_bevy},
};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
    app.add_systems(Update, sync_camera_rig.after(tick_player));
}

fn add_camera(mut commands: Commands) {
    commands.spawn((
        Exposure { ev100: 13.0 },
        bevy::core_pipeline::tonemapping::Tonemapping::AcesFitted,
        Camera3d::default(),
        Transform::default(),
        DistanceFog {
            color: Color::srgba(0.35, 0.48, 0.66, 1.0),
            directional_light_color: Color::srgba(1.0, 0.95, 0.85, 0.5),
            directional_light_exponent: 30.0,
            falloff: FogFalloff::from_visibility_colors(
                600.0,
                Color::srgb(0.35, 0.5, 0.66),
                Color::srgb(0.8, 0.8, 0.7),
            ),
        },
    ));
}

/// Copy the simulated camera rig (intro or follow camera) onto the render camera.
fn sync_camera_rig(
    sim: Res<PlayerSim>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut cam_tf) = camera_query.single_mut() else {
        return;
    };

    let rig = sim.controller.camera();
    cam_tf.translation = to_bevy(&rig.position);
    cam_tf.rotation = look_rotation(&rig.forward(), &rig.up());
}
