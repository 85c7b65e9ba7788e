/*!
Collision root module.

The controller never talks to a physics engine directly. It drives a [`CharacterMover`],
which owns the body's position and resolves each tick's displacement against the world.
This module also ships the Rapier-backed mover used by the game:

- settings:  kinematic controller tuning (`KccSettings`)
- world:     static collider definitions and the Rapier query world built from them
- kinematic: `KinematicMover`, a `CharacterMover` over Rapier's `KinematicCharacterController`
*/

pub mod kinematic;
pub mod settings;
pub mod world;

pub use kinematic::KinematicMover;
pub use settings::KccSettings;
pub use world::{ColliderShapeDef, StaticQueryWorld, StaticWorldDef};

use crate::utils::Vec3;

/// Collision-aware movement primitive for the player body.
pub trait CharacterMover {
    /// Current body position (world space).
    fn position(&self) -> Vec3;

    /// Place the body at `position` without collision.
    ///
    /// The grounded flag keeps the result of the last move until the next one.
    fn teleport(&mut self, position: Vec3);

    /// Whether the last [`CharacterMover::move_and_collide`] ended on walkable ground.
    fn is_grounded(&self) -> bool;

    /// Move by `displacement`, resolving collisions, and record the grounded result.
    fn move_and_collide(&mut self, displacement: Vec3, dt: f32);
}
