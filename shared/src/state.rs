use crate::{
    motion::{BoostState, PlayerBody},
    settings::ControllerSettings,
};

/// Animation/movement state of the player. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlayerState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    Boost,
}

/// Stores the active [`PlayerState`] and the horizontal speed cap it last set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerStateMachine {
    state: PlayerState,
    horizontal_max: f32,
}

impl PlayerStateMachine {
    pub fn new(settings: &ControllerSettings) -> Self {
        Self {
            state: PlayerState::Idle,
            horizontal_max: settings.horizontal_max_default,
        }
    }

    #[inline]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Cap applied to horizontal velocity on the next integration step.
    #[inline]
    pub fn horizontal_max(&self) -> f32 {
        self.horizontal_max
    }

    /// Force a state from an action (jump or boost start), ahead of the per-tick update.
    pub fn enter(&mut self, state: PlayerState) {
        if self.state != state {
            log::debug!("player state {:?} -> {:?} (action)", self.state, state);
        }
        self.state = state;
    }

    /// Run the active state's logic once, after motion and collision for this tick.
    ///
    /// Each state updates the cap it owns and checks its own exit conditions; Boost leaves
    /// the cap untouched.
    pub fn update(&mut self, body: &PlayerBody, boost: &BoostState, settings: &ControllerSettings) {
        let default_max = settings.horizontal_max_default;
        let previous = self.state;

        match self.state {
            PlayerState::Idle => {
                self.horizontal_max = default_max;

                if body.velocity.norm() > 0.0 {
                    self.state = PlayerState::Run;
                }
                if !body.on_ground {
                    self.state = if body.velocity.y > 0.0 {
                        PlayerState::Jump
                    } else {
                        PlayerState::Fall
                    };
                }
            }
            PlayerState::Run => {
                self.horizontal_max = default_max;

                if body.horizontal_speed() < settings.run_exit_speed {
                    self.state = PlayerState::Idle;
                }
            }
            PlayerState::Jump => {
                self.horizontal_max = default_max * settings.jump_cap_multiplier;

                if body.velocity.y <= 0.0 {
                    self.state = PlayerState::Fall;
                }
            }
            PlayerState::Fall => {
                self.horizontal_max = default_max * settings.fall_cap_multiplier;

                if body.on_ground {
                    self.state = PlayerState::Idle;
                }
            }
            PlayerState::Boost => {
                if boost.amount <= 0.0 {
                    self.state = PlayerState::Idle;
                }
            }
        }

        if self.state != previous {
            log::debug!("player state {:?} -> {:?}", previous, self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Vec3;

    fn machine_in(state: PlayerState) -> (PlayerStateMachine, ControllerSettings) {
        let settings = ControllerSettings::default();
        let mut machine = PlayerStateMachine::new(&settings);
        machine.enter(state);
        (machine, settings)
    }

    #[test]
    fn idle_at_rest_stays_idle_with_default_cap() {
        let (mut machine, settings) = machine_in(PlayerState::Idle);
        let body = PlayerBody::new(Vec3::zeros());

        machine.update(&body, &BoostState::default(), &settings);

        assert_eq!(machine.state(), PlayerState::Idle);
        assert!((machine.horizontal_max() - 0.1).abs() < 1.0e-6);
    }

    #[test]
    fn idle_moving_becomes_run() {
        let (mut machine, settings) = machine_in(PlayerState::Idle);
        let mut body = PlayerBody::new(Vec3::zeros());
        body.velocity = Vec3::new(0.05, 0.0, 0.0);

        machine.update(&body, &BoostState::default(), &settings);
        assert_eq!(machine.state(), PlayerState::Run);
    }

    #[test]
    fn idle_airborne_picks_jump_or_fall() {
        let (mut machine, settings) = machine_in(PlayerState::Idle);
        let mut body = PlayerBody::new(Vec3::zeros());
        body.on_ground = false;
        body.velocity.y = 0.3;
        machine.update(&body, &BoostState::default(), &settings);
        assert_eq!(machine.state(), PlayerState::Jump);

        let (mut machine, settings) = machine_in(PlayerState::Idle);
        body.velocity.y = 0.0;
        machine.update(&body, &BoostState::default(), &settings);
        assert_eq!(machine.state(), PlayerState::Fall);
    }

    #[test]
    fn run_stops_below_exit_speed() {
        let (mut machine, settings) = machine_in(PlayerState::Run);
        let mut body = PlayerBody::new(Vec3::zeros());
        body.horizontal_velocity = Vec3::new(0.02, 0.0, 0.0);
        machine.update(&body, &BoostState::default(), &settings);
        assert_eq!(machine.state(), PlayerState::Run);

        body.horizontal_velocity = Vec3::new(0.005, 0.0, 0.0);
        machine.update(&body, &BoostState::default(), &settings);
        assert_eq!(machine.state(), PlayerState::Idle);
    }

    #[test]
    fn jump_widens_cap_then_falls_at_apex() {
        let (mut machine, settings) = machine_in(PlayerState::Jump);
        let mut body = PlayerBody::new(Vec3::zeros());
        body.on_ground = false;
        body.velocity.y = 0.1;

        machine.update(&body, &BoostState::default(), &settings);
        assert_eq!(machine.state(), PlayerState::Jump);
        assert!((machine.horizontal_max() - 0.225).abs() < 1.0e-6);

        body.velocity.y = 0.0;
        machine.update(&body, &BoostState::default(), &settings);
        assert_eq!(machine.state(), PlayerState::Fall);
    }

    #[test]
    fn fall_lands_into_idle() {
        let (mut machine, settings) = machine_in(PlayerState::Fall);
        let mut body = PlayerBody::new(Vec3::zeros());
        body.on_ground = false;

        machine.update(&body, &BoostState::default(), &settings);
        assert_eq!(machine.state(), PlayerState::Fall);
        assert!((machine.horizontal_max() - 0.2).abs() < 1.0e-6);

        body.on_ground = true;
        machine.update(&body, &BoostState::default(), &settings);
        assert_eq!(machine.state(), PlayerState::Idle);
    }

    #[test]
    fn boost_keeps_cap_and_exits_when_spent() {
        let (mut machine, settings) = machine_in(PlayerState::Fall);
        let mut body = PlayerBody::new(Vec3::zeros());
        body.on_ground = false;
        machine.update(&body, &BoostState::default(), &settings);
        machine.enter(PlayerState::Boost);

        let mut boost = BoostState {
            used: true,
            dir: Vec3::x(),
            amount: 1.0,
        };
        machine.update(&body, &boost, &settings);
        assert_eq!(machine.state(), PlayerState::Boost);
        assert!((machine.horizontal_max() - 0.2).abs() < 1.0e-6);

        boost.amount = 0.0;
        machine.update(&body, &boost, &settings);
        assert_eq!(machine.state(), PlayerState::Idle);
    }
}
