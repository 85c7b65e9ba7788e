use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;
use skyhop_shared::{
    BoostEffect, CharacterMover, ControllerSettings, KinematicMover, PlayerController,
    Vec3 as SimVec3,
};

use crate::{
    input::{PlayerAction, snapshot},
    level::{CollisionWorld, Kcc, PLAYER_START},
    transform::to_bevy,
};

const TRAIL_LENGTH: f32 = 2.5;
const TRAIL_WIDTH: f32 = 0.35;

/// Controller tuning. Insert a custom value before startup to override the defaults.
#[derive(Resource, Clone, Debug, Default)]
pub struct Tuning(pub ControllerSettings);

/// The player simulation plus what its mover needs to resume next frame.
#[derive(Resource)]
pub struct PlayerSim {
    pub controller: PlayerController,
    pub position: SimVec3,
    pub grounded: bool,
}

#[derive(Component)]
pub struct Player;

#[derive(Component)]
pub struct BoostTrail;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Tuning>();
    app.add_systems(Startup, spawn_player);
    app.add_systems(Update, tick_player);
}

fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tuning: Res<Tuning>,
    kcc: Res<Kcc>,
) {
    let settings = match tuning.0.validate() {
        Ok(()) => tuning.0.clone(),
        Err(err) => {
            error!("invalid controller tuning, falling back to defaults: {err}");
            ControllerSettings::default()
        }
    };

    let start = SimVec3::from(PLAYER_START);
    commands.insert_resource(PlayerSim {
        controller: PlayerController::new(settings, start),
        position: start,
        grounded: true,
    });

    let capsule = Capsule3d::new(kcc.0.capsule_radius, kcc.0.capsule_half_height * 2.0);
    commands.spawn((
        Name::new("Player"),
        Player,
        Mesh3d(meshes.add(capsule)),
        MeshMaterial3d(materials.add(Color::srgb_u8(230, 120, 60))),
        Transform::from_translation(to_bevy(&start)),
        children![(
            Name::new("Boost trail"),
            BoostTrail,
            Mesh3d(meshes.add(Cuboid::new(TRAIL_WIDTH, TRAIL_WIDTH, TRAIL_LENGTH))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(0.6, 0.85, 1.0, 0.6),
                emissive: LinearRgba::rgb(1.5, 3.0, 6.0),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            })),
            Transform::default(),
            Visibility::Hidden,
        )],
    ));

    info!("player spawned at {start:?}");
}

pub(crate) fn tick_player(
    time: Res<Time>,
    actions: Res<ActionState<PlayerAction>>,
    world: Res<CollisionWorld>,
    kcc: Res<Kcc>,
    mut sim: ResMut<PlayerSim>,
    mut player: Single<&mut Transform, With<Player>>,
    trail: Single<(&mut Visibility, &mut Transform), (With<BoostTrail>, Without<Player>)>,
) {
    let input = snapshot(&actions);
    let PlayerSim {
        controller,
        position,
        grounded,
    } = &mut *sim;

    let mut mover = KinematicMover::new(&world.0, &kcc.0, *position, *grounded);
    let (mut visibility, mut trail_transform) = trail.into_inner();
    let mut effect = TrailEffect {
        visibility: &mut *visibility,
        transform: &mut *trail_transform,
    };

    controller.tick(&input, time.delta_secs(), &mut mover, &mut effect);

    *position = mover.position();
    *grounded = mover.is_grounded();
    player.translation = to_bevy(position);
}

/// Boost trail driven through the trail entity's visibility and local transform.
struct TrailEffect<'a> {
    visibility: &'a mut Visibility,
    transform: &'a mut Transform,
}

impl BoostEffect for TrailEffect<'_> {
    fn play(&mut self, facing: SimVec3) {
        // A boost with no horizontal motion has no facing; keep the last orientation.
        if let Ok(dir) = Dir3::new(to_bevy(&facing)) {
            self.transform.translation = dir * (TRAIL_LENGTH * 0.5);
            self.transform.look_to(dir, Dir3::Y);
        }
        *self.visibility = Visibility::Inherited;
    }

    fn stop(&mut self) {
        if *self.visibility != Visibility::Hidden {
            *self.visibility = Visibility::Hidden;
        }
    }

    fn is_playing(&self) -> bool {
        *self.visibility != Visibility::Hidden
    }
}
