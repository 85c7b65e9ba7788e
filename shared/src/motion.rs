//! Per-tick velocity integration for the player body.
//!
//! Velocities here are displacements per tick: the integrator's output is handed to
//! [`crate::CharacterMover::move_and_collide`] as-is, without scaling by dt.

use crate::{
    input::InputSnapshot,
    settings::ControllerSettings,
    utils::{Vec3, clamp_magnitude, lerp, normalize_or_zero},
};

/// Kinematic state of the player that the integrator owns.
///
/// The position itself lives in the [`crate::CharacterMover`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerBody {
    pub velocity: Vec3,
    /// Horizontal-plane component used for speed clamping; `y` stays 0.
    pub horizontal_velocity: Vec3,
    pub on_ground: bool,
    start_position: Vec3,
}

impl PlayerBody {
    pub fn new(start_position: Vec3) -> Self {
        Self {
            velocity: Vec3::zeros(),
            horizontal_velocity: Vec3::zeros(),
            on_ground: true,
            start_position,
        }
    }

    /// Spawn point captured at construction.
    #[inline]
    pub fn start_position(&self) -> Vec3 {
        self.start_position
    }

    #[inline]
    pub fn horizontal_speed(&self) -> f32 {
        self.horizontal_velocity.norm()
    }
}

/// Airborne boost impulse, usable once per airborne period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoostState {
    pub used: bool,
    pub dir: Vec3,
    /// Never negative; decays toward zero after activation.
    pub amount: f32,
}

impl Default for BoostState {
    fn default() -> Self {
        Self {
            used: false,
            dir: Vec3::zeros(),
            amount: 0.0,
        }
    }
}

impl BoostState {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.amount > 0.0
    }

    /// Extra displacement contributed by the boost this tick.
    #[inline]
    pub fn displacement(&self) -> Vec3 {
        self.dir * self.amount
    }
}

/// What one integration step produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionStep {
    /// Displacement to hand to the mover.
    pub displacement: Vec3,
    pub jumped: bool,
    pub boosted: bool,
}

/// Advance `body` and `boost` by one tick.
///
/// `grounded_contact` is the mover's result from the previous move; `horizontal_max` is the
/// cap set by the current player state.
pub fn integrate(
    body: &mut PlayerBody,
    boost: &mut BoostState,
    input: &InputSnapshot,
    dt: f32,
    horizontal_max: f32,
    grounded_contact: bool,
    settings: &ControllerSettings,
) -> MotionStep {
    // 1) Accelerate along the input, then cap horizontal speed.
    body.horizontal_velocity += input.world_dir() * dt;
    body.horizontal_velocity = clamp_magnitude(body.horizontal_velocity, horizontal_max);

    // 2) Coast to a stop without input. Per tick, not scaled by dt.
    if !input.is_moving() {
        body.horizontal_velocity = body
            .horizontal_velocity
            .lerp(&Vec3::zeros(), settings.horizontal_decay);
    }

    body.velocity.x = body.horizontal_velocity.x;
    body.velocity.z = body.horizontal_velocity.z;

    // 3) Ground check from the last collision result.
    body.on_ground = grounded_contact;
    if body.on_ground && body.velocity.y < settings.landing_velocity_threshold {
        body.velocity.y = 0.0;
    }

    let mut jumped = false;
    let mut boosted = false;

    if body.on_ground {
        if input.jump {
            body.on_ground = false;
            body.velocity.y = settings.jump_velocity;
            jumped = true;
        }

        boost.used = false;
        boost.amount = 0.0;
    } else {
        body.velocity.y -= settings.gravity * dt;

        if !boost.used {
            if input.boost {
                boost.used = true;
                boost.dir = normalize_or_zero(body.horizontal_velocity);
                boost.amount = settings.boost_impulse;
                boosted = true;
            }
        } else if boost.amount <= settings.boost_epsilon {
            boost.amount = 0.0;
        }
    }

    if boost.amount > 0.0 {
        boost.amount = lerp(boost.amount, 0.0, settings.boost_decay).max(0.0);
    }

    MotionStep {
        displacement: body.velocity + boost.displacement(),
        jumped,
        boosted,
    }
}
