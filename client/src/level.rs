//! Static level geometry.
//!
//! Every block is spawned twice from the same definition: once as a mesh and once as a
//! collider in the [`CollisionWorld`] the player moves through.

use bevy::prelude::*;
use skyhop_shared::{KccSettings, StaticQueryWorld, StaticWorldDef, Vec3 as SimVec3};

use crate::transform::to_bevy;

/// Collision geometry for the level. Built once at startup, never modified.
#[derive(Resource)]
pub struct CollisionWorld(pub StaticQueryWorld);

/// Kinematic controller tuning for the player capsule.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct Kcc(pub KccSettings);

/// Where the player spawns and respawns, in simulation space.
pub const PLAYER_START: [f32; 3] = [0.0, 1.05, 0.0];

struct Block {
    center: [f32; 3],
    half_extents: [f32; 3],
    color: Color,
}

const fn block(center: [f32; 3], half_extents: [f32; 3], color: Color) -> Block {
    Block {
        center,
        half_extents,
        color,
    }
}

const GROUND: Color = Color::srgb(0.2, 0.3, 0.25);
const STONE: Color = Color::srgb(0.55, 0.55, 0.6);
const SKY_ISLAND: Color = Color::srgb(0.49, 0.56, 1.0);

/// Ground, a staircase of platforms, and a far island the intro flies past.
const BLOCKS: &[Block] = &[
    block([0.0, -0.5, 0.0], [60.0, 0.5, 60.0], GROUND),
    block([0.0, 0.5, 8.0], [2.0, 0.5, 2.0], STONE),
    block([4.0, 2.0, 14.0], [2.0, 0.5, 2.0], STONE),
    block([10.0, 4.0, 18.0], [2.5, 0.5, 2.5], STONE),
    block([18.0, 6.5, 20.0], [2.0, 0.5, 2.0], STONE),
    block([28.0, 9.0, 22.0], [3.0, 0.5, 3.0], STONE),
    block([-12.0, 1.5, 6.0], [0.5, 1.5, 10.0], STONE),
    block([140.0, 60.0, 40.0], [15.0, 3.0, 15.0], SKY_ISLAND),
];

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Kcc>();
    app.insert_resource(CollisionWorld(StaticQueryWorld::build(collider_defs())));
    app.add_systems(Startup, spawn_level);
}

fn collider_defs() -> impl Iterator<Item = StaticWorldDef> {
    BLOCKS.iter().zip(1u32..).map(|(block, id)| {
        StaticWorldDef::cuboid(
            id,
            SimVec3::from(block.center),
            SimVec3::from(block.half_extents),
        )
    })
}

fn spawn_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for block in BLOCKS {
        let size = Vec3::from(block.half_extents) * 2.0;
        commands.spawn((
            Name::new("Level block"),
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: block.color,
                perceptual_roughness: 1.0,
                metallic: 0.0,
                ..default()
            })),
            Transform::from_translation(to_bevy(&SimVec3::from(block.center))),
        ));
    }

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            illuminance: 10_000.0,
            ..default()
        },
        Transform::from_xyz(30.0, 60.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("spawned {} level blocks", BLOCKS.len());
}
