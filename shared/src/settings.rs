/*!
Runtime tuning for the player controller.

Every field defaults to the matching value in [`crate::constants`]. Callers that load
tuning from game data should run [`ControllerSettings::validate`] before handing the
settings to [`crate::PlayerController`].
*/

use crate::{
    constants::*,
    utils::{Vec3, vec3},
};

/// Movement, boost and respawn tuning.
#[derive(Clone, Debug)]
pub struct ControllerSettings {
    pub gravity: f32,
    pub jump_velocity: f32,
    pub horizontal_max_default: f32,
    pub jump_cap_multiplier: f32,
    pub fall_cap_multiplier: f32,
    pub horizontal_decay: f32,
    pub run_exit_speed: f32,
    pub landing_velocity_threshold: f32,
    pub boost_impulse: f32,
    pub boost_decay: f32,
    pub boost_epsilon: f32,
    pub respawn_floor_y: f32,
    pub camera: CameraSettings,
    pub intro: IntroSettings,
}

/// Follow camera tuning.
#[derive(Clone, Debug)]
pub struct CameraSettings {
    /// Offset used while grounded and after respawns / the intro.
    pub offset_default: Vec3,
    pub air_offset_y: f32,
    pub air_offset_z: f32,
    pub boost_offset_bonus: f32,
    pub pitch_default: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
    /// Degrees per second.
    pub pitch_down_rate: f32,
    /// Degrees per second.
    pub pitch_up_rate: f32,
    pub look_ahead: f32,
    pub smoothing: f32,
}

/// A single intro shot: where the camera starts and which way it looks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    pub position: Vec3,
    /// Euler degrees (pitch, yaw, roll).
    pub angles: Vec3,
}

/// Intro flythrough tuning.
#[derive(Clone, Debug)]
pub struct IntroSettings {
    pub waypoints: [Waypoint; INTRO_WAYPOINT_COUNT],
    pub lateral_distance: f32,
    pub arrival_radius: f32,
    pub smoothing: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            horizontal_max_default: HORIZONTAL_MAX_DEFAULT,
            jump_cap_multiplier: JUMP_CAP_MULTIPLIER,
            fall_cap_multiplier: FALL_CAP_MULTIPLIER,
            horizontal_decay: HORIZONTAL_DECAY,
            run_exit_speed: RUN_EXIT_SPEED,
            landing_velocity_threshold: LANDING_VELOCITY_THRESHOLD,
            boost_impulse: BOOST_IMPULSE,
            boost_decay: BOOST_DECAY,
            boost_epsilon: BOOST_EPSILON,
            respawn_floor_y: RESPAWN_FLOOR_Y,
            camera: CameraSettings::default(),
            intro: IntroSettings::default(),
        }
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            offset_default: vec3(CAMERA_OFFSET_DEFAULT),
            air_offset_y: CAMERA_AIR_OFFSET_Y,
            air_offset_z: CAMERA_AIR_OFFSET_Z,
            boost_offset_bonus: CAMERA_BOOST_OFFSET_BONUS,
            pitch_default: CAMERA_PITCH_DEFAULT,
            pitch_min: CAMERA_PITCH_MIN,
            pitch_max: CAMERA_PITCH_MAX,
            pitch_down_rate: CAMERA_PITCH_DOWN_RATE,
            pitch_up_rate: CAMERA_PITCH_UP_RATE,
            look_ahead: CAMERA_LOOK_AHEAD,
            smoothing: CAMERA_FOLLOW_SMOOTHING,
        }
    }
}

impl Default for IntroSettings {
    fn default() -> Self {
        Self {
            waypoints: std::array::from_fn(|i| Waypoint {
                position: vec3(INTRO_POINTS[i]),
                angles: vec3(INTRO_ANGLES[i]),
            }),
            lateral_distance: INTRO_LATERAL_DISTANCE,
            arrival_radius: INTRO_ARRIVAL_RADIUS,
            smoothing: INTRO_SMOOTHING,
        }
    }
}

impl ControllerSettings {
    /// Check that every tuning value is usable.
    ///
    /// Returns a description of the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let non_negative = [
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("horizontal_max_default", self.horizontal_max_default),
            ("jump_cap_multiplier", self.jump_cap_multiplier),
            ("fall_cap_multiplier", self.fall_cap_multiplier),
            ("run_exit_speed", self.run_exit_speed),
            ("boost_impulse", self.boost_impulse),
            ("boost_epsilon", self.boost_epsilon),
            ("camera.pitch_down_rate", self.camera.pitch_down_rate),
            ("camera.pitch_up_rate", self.camera.pitch_up_rate),
            ("camera.look_ahead", self.camera.look_ahead),
            ("intro.lateral_distance", self.intro.lateral_distance),
            ("intro.arrival_radius", self.intro.arrival_radius),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("`{name}` must be finite and non-negative, got {value}"));
            }
        }

        let weights = [
            ("horizontal_decay", self.horizontal_decay),
            ("boost_decay", self.boost_decay),
            ("camera.smoothing", self.camera.smoothing),
            ("intro.smoothing", self.intro.smoothing),
        ];
        for (name, value) in weights {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("`{name}` must be a lerp weight in [0, 1], got {value}"));
            }
        }

        let camera = &self.camera;
        if !camera.pitch_min.is_finite()
            || !camera.pitch_max.is_finite()
            || camera.pitch_min > camera.pitch_max
        {
            return Err(format!(
                "camera pitch range [{}, {}] is invalid",
                camera.pitch_min, camera.pitch_max
            ));
        }

        if !self.respawn_floor_y.is_finite() {
            return Err("`respawn_floor_y` must be finite".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ControllerSettings::default().validate(), Ok(()));
    }

    #[test]
    fn defaults_mirror_constants() {
        let settings = ControllerSettings::default();
        assert_eq!(settings.camera.offset_default, Vec3::new(0.0, 5.5, -2.0));
        assert_eq!(settings.intro.waypoints[1].position, Vec3::new(-18.0, 105.0, 3.0));
        assert_eq!(settings.intro.waypoints[2].angles, Vec3::new(24.0, -62.0, 0.0));
    }

    #[test]
    fn rejects_negative_gravity() {
        let settings = ControllerSettings {
            gravity: -1.0,
            ..ControllerSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("gravity"));
    }

    #[test]
    fn rejects_out_of_range_weight() {
        let mut settings = ControllerSettings::default();
        settings.camera.smoothing = 1.5;
        assert!(settings.validate().unwrap_err().contains("camera.smoothing"));
    }

    #[test]
    fn rejects_inverted_pitch_range() {
        let mut settings = ControllerSettings::default();
        settings.camera.pitch_min = 95.0;
        assert!(settings.validate().is_err());
    }
}
