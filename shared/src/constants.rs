//! Tuning constants for the player controller and cameras.
//!
//! Units follow the controller's convention: velocities are displacement per tick
//! (not per second), rates are degrees per second, smoothing factors are per-tick lerp weights.

/// Downward acceleration applied to `velocity.y` while airborne (per second).
pub const GRAVITY: f32 = 0.35;

/// Vertical velocity set when a jump starts.
pub const JUMP_VELOCITY: f32 = 0.8;

/// Horizontal speed cap while idle or running.
pub const HORIZONTAL_MAX_DEFAULT: f32 = 0.1;

/// Cap multiplier while rising from a jump.
pub const JUMP_CAP_MULTIPLIER: f32 = 2.25;

/// Cap multiplier while falling.
pub const FALL_CAP_MULTIPLIER: f32 = 2.0;

/// Per-tick lerp weight pulling horizontal velocity to zero when no move input is held.
///
/// Not scaled by dt, so the slowdown depends on frame rate.
pub const HORIZONTAL_DECAY: f32 = 0.05;

/// Horizontal speed under which a running player counts as stopped.
pub const RUN_EXIT_SPEED: f32 = 0.01;

/// Landing speed below which residual vertical velocity is discarded.
pub const LANDING_VELOCITY_THRESHOLD: f32 = -0.1;

/// Boost impulse magnitude at activation.
pub const BOOST_IMPULSE: f32 = 3.0;

/// Per-tick lerp weight pulling the boost amount to zero.
pub const BOOST_DECAY: f32 = 0.1;

/// Boost amounts at or below this snap to zero.
pub const BOOST_EPSILON: f32 = 0.001;

/// Players below this height are respawned.
pub const RESPAWN_FLOOR_Y: f32 = -100.0;

/// Grounded camera offset from the player (x, y, z).
pub const CAMERA_OFFSET_DEFAULT: [f32; 3] = [0.0, 5.5, -2.0];

/// Airborne camera height above the player.
pub const CAMERA_AIR_OFFSET_Y: f32 = 5.0;

/// Airborne camera distance behind the player.
pub const CAMERA_AIR_OFFSET_Z: f32 = -0.5;

/// Extra airborne camera height while a boost is decaying.
pub const CAMERA_BOOST_OFFSET_BONUS: f32 = 1.0;

pub const CAMERA_PITCH_DEFAULT: f32 = 60.0;
pub const CAMERA_PITCH_MIN: f32 = 60.0;
pub const CAMERA_PITCH_MAX: f32 = 90.0;

/// Pitch change toward `CAMERA_PITCH_MIN` while grounded (degrees per second).
pub const CAMERA_PITCH_DOWN_RATE: f32 = 50.0;

/// Pitch change toward `CAMERA_PITCH_MAX` while airborne (degrees per second).
pub const CAMERA_PITCH_UP_RATE: f32 = 10.0;

/// How far ahead of the player (in ticks of horizontal velocity) the camera aims.
pub const CAMERA_LOOK_AHEAD: f32 = 2.0;

/// Per-tick lerp weight for the follow camera position.
pub const CAMERA_FOLLOW_SMOOTHING: f32 = 0.1;

/// Number of intro flythrough waypoints.
pub const INTRO_WAYPOINT_COUNT: usize = 3;

/// Intro waypoint positions.
pub const INTRO_POINTS: [[f32; 3]; INTRO_WAYPOINT_COUNT] = [
    [-20.0, 7.5, 3.5],
    [-18.0, 105.0, 3.0],
    [185.0, 75.0, 10.0],
];

/// Intro waypoint camera angles (Euler degrees: pitch, yaw, roll).
pub const INTRO_ANGLES: [[f32; 3]; INTRO_WAYPOINT_COUNT] = [
    [14.5, 110.0, 0.0],
    [85.0, 110.0, 0.0],
    [24.0, -62.0, 0.0],
];

/// Sideways travel of each intro shot.
pub const INTRO_LATERAL_DISTANCE: f32 = 70.0;

/// Distance at which an intro shot counts as finished.
pub const INTRO_ARRIVAL_RADIUS: f32 = 1.0;

/// Per-tick lerp weight for the intro camera position.
pub const INTRO_SMOOTHING: f32 = 0.01;
