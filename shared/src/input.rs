use crate::utils::{Vec2, Vec3, planar_to_world};

/// Everything the controller reads from the player's bindings in one tick.
///
/// Buttons carry "currently held" semantics, so a held jump re-triggers on landing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    /// `Move` axis pair, each component in [-1, 1]. Not necessarily normalized.
    pub move_dir: Vec2,
    pub jump: bool,
    pub reset: bool,
    pub boost: bool,
    pub skip_scene: bool,
}

impl InputSnapshot {
    /// Move input on the horizontal plane (`y` maps onto world `z`).
    #[inline]
    pub fn world_dir(&self) -> Vec3 {
        planar_to_world(self.move_dir)
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.move_dir.norm_squared() > 0.0
    }
}
