use crate::utils::Vec3;

/// Visual effect shown while the player is boosting.
///
/// The controller calls [`BoostEffect::play`] once per boost activation and
/// [`BoostEffect::stop`] on every tick spent outside the boost state, so `stop` must be
/// cheap and idempotent.
pub trait BoostEffect {
    /// Start (or restart) the effect, oriented along `facing` (opposite the boost direction).
    fn play(&mut self, facing: Vec3);

    fn stop(&mut self);

    fn is_playing(&self) -> bool;
}

/// Effect sink for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEffect {
    playing: bool,
}

impl BoostEffect for NoEffect {
    fn play(&mut self, _facing: Vec3) {
        self.playing = true;
    }

    fn stop(&mut self) {
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
