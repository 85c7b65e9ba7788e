pub mod camera;
pub mod collision;
pub mod constants;
pub mod controller;
pub mod effect;
pub mod input;
pub mod intro;
pub mod motion;
pub mod settings;
pub mod state;
pub mod utils;

#[cfg(test)]
mod testing;

pub use camera::CameraRig;
pub use collision::{
    CharacterMover, ColliderShapeDef, KccSettings, KinematicMover, StaticQueryWorld,
    StaticWorldDef,
};
pub use controller::PlayerController;
pub use effect::{BoostEffect, NoEffect};
pub use input::InputSnapshot;
pub use intro::IntroSequence;
pub use motion::{BoostState, PlayerBody};
pub use settings::{CameraSettings, ControllerSettings, IntroSettings, Waypoint};
pub use state::PlayerState;
pub use utils::{Quat, Vec2, Vec3, rotation_from_euler_degrees};
