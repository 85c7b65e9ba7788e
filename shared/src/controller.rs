//! The player controller aggregate: one `tick` per rendered frame.
//!
//! Order within a gameplay tick:
//! 1. integrate velocities from input and the last grounded result
//! 2. move the body through the [`CharacterMover`]
//! 3. follow camera
//! 4. state machine
//! 5. stop the boost effect outside the boost state
//! 6. respawn when out of bounds or requested
//!
//! While the intro is active only the camera flythrough runs.

use crate::{
    camera::{CameraRig, FollowTarget},
    collision::CharacterMover,
    effect::BoostEffect,
    input::InputSnapshot,
    intro::IntroSequence,
    motion::{BoostState, PlayerBody, integrate},
    settings::ControllerSettings,
    state::{PlayerState, PlayerStateMachine},
    utils::Vec3,
};

#[derive(Clone, Debug)]
pub struct PlayerController {
    settings: ControllerSettings,
    body: PlayerBody,
    boost: BoostState,
    machine: PlayerStateMachine,
    camera: CameraRig,
    intro: IntroSequence,
}

impl PlayerController {
    /// A controller for a player spawned at `start_position`, with the intro about to play.
    pub fn new(settings: ControllerSettings, start_position: Vec3) -> Self {
        let first_shot = settings.intro.waypoints[0];
        let camera = CameraRig::new(first_shot.position, first_shot.angles, &settings.camera);

        Self {
            body: PlayerBody::new(start_position),
            boost: BoostState::default(),
            machine: PlayerStateMachine::new(&settings),
            camera,
            intro: IntroSequence::default(),
            settings,
        }
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn body(&self) -> &PlayerBody {
        &self.body
    }

    pub fn boost(&self) -> &BoostState {
        &self.boost
    }

    pub fn state(&self) -> PlayerState {
        self.machine.state()
    }

    pub fn horizontal_max(&self) -> f32 {
        self.machine.horizontal_max()
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn intro(&self) -> &IntroSequence {
        &self.intro
    }

    pub fn start_position(&self) -> Vec3 {
        self.body.start_position()
    }

    /// Advance the controller by one frame of `dt` seconds.
    pub fn tick(
        &mut self,
        input: &InputSnapshot,
        dt: f32,
        mover: &mut impl CharacterMover,
        effect: &mut impl BoostEffect,
    ) {
        if !dt.is_finite() || dt <= 0.0 {
            log::warn!("skipping player tick with invalid dt {dt}");
            return;
        }

        if self.intro.is_active() {
            self.tick_intro(input);
            return;
        }

        let step = integrate(
            &mut self.body,
            &mut self.boost,
            input,
            dt,
            self.machine.horizontal_max(),
            mover.is_grounded(),
            &self.settings,
        );

        if step.jumped {
            self.machine.enter(PlayerState::Jump);
        }
        if step.boosted {
            log::debug!("boost along {:?}", self.boost.dir);
            effect.play(-self.boost.dir);
            self.machine.enter(PlayerState::Boost);
        }

        mover.move_and_collide(step.displacement, dt);

        let target = FollowTarget {
            position: mover.position(),
            horizontal_velocity: self.body.horizontal_velocity,
            on_ground: self.body.on_ground,
            boosting: self.boost.is_active(),
        };
        self.camera.follow(&target, dt, &self.settings.camera);

        self.machine.update(&self.body, &self.boost, &self.settings);

        if self.machine.state() != PlayerState::Boost {
            effect.stop();
        }

        if mover.position().y < self.settings.respawn_floor_y || input.reset {
            self.respawn(mover);
        }
    }

    /// Put the player back at the spawn point with no vertical or horizontal motion carried
    /// in `velocity`. The state and the horizontal velocity used for steering are kept.
    pub fn respawn(&mut self, mover: &mut impl CharacterMover) {
        let start = self.body.start_position();
        log::info!("respawning player from {:?} to {:?}", mover.position(), start);

        mover.teleport(start);
        self.camera.snap_behind(start, &self.settings.camera);

        self.body.velocity = Vec3::zeros();
        self.body.on_ground = true;
    }

    fn tick_intro(&mut self, input: &InputSnapshot) {
        let start = self.body.start_position();
        if input.skip_scene {
            self.intro.skip(&mut self.camera, start, &self.settings.camera);
        } else {
            self.intro.step(
                &mut self.camera,
                start,
                &self.settings.intro,
                &self.settings.camera,
            );
        }
    }
}
