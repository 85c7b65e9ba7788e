use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use skyhop_shared::{InputSnapshot, Vec2 as SimVec2};

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    #[actionlike(DualAxis)]
    Move,
    Jump,
    Reset,
    Boost,
    SkipScene,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<PlayerAction>::default());

    app.register_type::<PlayerAction>();

    app.insert_resource(default_input_map());
    app.insert_resource(ActionState::<PlayerAction>::default());
}

fn default_input_map() -> InputMap<PlayerAction> {
    InputMap::default()
        .with_dual_axis(PlayerAction::Move, VirtualDPad::wasd())
        .with_dual_axis(PlayerAction::Move, VirtualDPad::arrow_keys())
        .with_dual_axis(PlayerAction::Move, GamepadStick::LEFT)
        .with(PlayerAction::Jump, KeyCode::Space)
        .with(PlayerAction::Jump, GamepadButton::South)
        .with(PlayerAction::Reset, KeyCode::KeyR)
        .with(PlayerAction::Reset, GamepadButton::Select)
        .with(PlayerAction::Boost, KeyCode::ShiftLeft)
        .with(PlayerAction::Boost, GamepadButton::West)
        .with(PlayerAction::SkipScene, KeyCode::Enter)
        .with(PlayerAction::SkipScene, GamepadButton::Start)
}

/// Read this frame's held actions into the controller's input.
pub fn snapshot(actions: &ActionState<PlayerAction>) -> InputSnapshot {
    let axis = actions.clamped_axis_pair(&PlayerAction::Move);
    InputSnapshot {
        move_dir: SimVec2::new(axis.x, axis.y),
        jump: actions.pressed(&PlayerAction::Jump),
        reset: actions.pressed(&PlayerAction::Reset),
        boost: actions.pressed(&PlayerAction::Boost),
        skip_scene: actions.pressed(&PlayerAction::SkipScene),
    }
}
