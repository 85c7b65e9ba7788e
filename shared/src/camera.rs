use crate::{
    settings::CameraSettings,
    utils::{Quat, Vec3, rotation_from_euler_degrees},
};

/// Camera pose driven by either the follow camera or the intro sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    /// Euler degrees (pitch, yaw, roll). The follow camera only ever sets pitch.
    pub angles: Vec3,
    /// Offset from the player used by the follow camera.
    pub offset: Vec3,
    /// Follow camera pitch, kept within the configured range.
    pub pitch: f32,
}

/// Player data the follow camera reacts to.
#[derive(Clone, Copy, Debug)]
pub struct FollowTarget {
    pub position: Vec3,
    pub horizontal_velocity: Vec3,
    pub on_ground: bool,
    pub boosting: bool,
}

impl CameraRig {
    pub fn new(position: Vec3, angles: Vec3, settings: &CameraSettings) -> Self {
        Self {
            position,
            angles,
            offset: settings.offset_default,
            pitch: settings.pitch_default,
        }
    }

    #[inline]
    pub fn rotation(&self) -> Quat {
        rotation_from_euler_degrees(self.angles)
    }

    /// Viewing direction (+Z rotated by the rig).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::z()
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rotation() * Vec3::y()
    }

    /// Place the camera at its grounded offset from `anchor` (spawn and respawn framing).
    pub fn snap_behind(&mut self, anchor: Vec3, settings: &CameraSettings) {
        self.position = anchor + settings.offset_default;
    }

    /// One follow-camera tick.
    ///
    /// Grounded: pitch eases down and the offset returns to default. Airborne: pitch eases
    /// up, the camera moves closer and higher, and it is never allowed to drop below
    /// `offset.y` above the player. The position then lerps toward a look-ahead target.
    pub fn follow(&mut self, target: &FollowTarget, dt: f32, settings: &CameraSettings) {
        if target.on_ground {
            self.pitch -= settings.pitch_down_rate * dt;
            self.offset = settings.offset_default;
        } else {
            self.pitch += settings.pitch_up_rate * dt;

            self.offset.z = settings.air_offset_z;
            self.offset.y = settings.air_offset_y;
            if target.boosting {
                self.offset.y += settings.boost_offset_bonus;
            }

            // Hard floor, not smoothed.
            if target.position.y > self.position.y - self.offset.y {
                self.position.y = target.position.y + self.offset.y;
            }
        }

        let goal = target.position + target.horizontal_velocity * settings.look_ahead + self.offset;
        self.position = self.position.lerp(&goal, settings.smoothing);

        self.pitch = self.pitch.clamp(settings.pitch_min, settings.pitch_max);
        self.angles = Vec3::new(self.pitch, 0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const EPS: f32 = 1.0e-5;

    fn rig_at(position: Vec3) -> (CameraRig, CameraSettings) {
        let settings = CameraSettings::default();
        (CameraRig::new(position, Vec3::zeros(), &settings), settings)
    }

    fn grounded_at(position: Vec3) -> FollowTarget {
        FollowTarget {
            position,
            horizontal_velocity: Vec3::zeros(),
            on_ground: true,
            boosting: false,
        }
    }

    #[test]
    fn grounded_follow_lerps_toward_default_offset() {
        let (mut rig, settings) = rig_at(Vec3::zeros());

        rig.follow(&grounded_at(Vec3::zeros()), DT, &settings);

        assert!((rig.position - Vec3::new(0.0, 0.55, -0.2)).norm() < EPS);
        assert_eq!(rig.offset, settings.offset_default);
        assert_eq!(rig.angles, Vec3::new(60.0, 0.0, 0.0));
    }

    #[test]
    fn look_ahead_leads_the_player() {
        let (mut rig, settings) = rig_at(Vec3::new(0.0, 5.5, -2.0));
        let target = FollowTarget {
            horizontal_velocity: Vec3::new(0.1, 0.0, 0.0),
            ..grounded_at(Vec3::zeros())
        };

        rig.follow(&target, DT, &settings);

        // Goal is 0.2 to the right; one tick covers a tenth of the gap.
        assert!((rig.position.x - 0.02).abs() < EPS);
    }

    #[test]
    fn airborne_pitch_rises_and_stays_clamped() {
        let (mut rig, settings) = rig_at(Vec3::new(0.0, 5.0, 0.0));
        let target = FollowTarget {
            on_ground: false,
            ..grounded_at(Vec3::zeros())
        };

        rig.follow(&target, 1.0, &settings);
        assert!((rig.pitch - 70.0).abs() < EPS);

        for _ in 0..10 {
            rig.follow(&target, 1.0, &settings);
            assert!(rig.pitch >= settings.pitch_min && rig.pitch <= settings.pitch_max);
        }
        assert!((rig.pitch - 90.0).abs() < EPS);

        rig.follow(&grounded_at(Vec3::zeros()), 10.0, &settings);
        assert!((rig.pitch - 60.0).abs() < EPS);
    }

    #[test]
    fn airborne_camera_is_floor_clamped_above_player() {
        let (mut rig, settings) = rig_at(Vec3::new(0.0, 0.0, -0.5));
        let target = FollowTarget {
            on_ground: false,
            ..grounded_at(Vec3::new(0.0, 10.0, 0.0))
        };

        rig.follow(&target, DT, &settings);

        // Snapped to 15.0 first, goal is also 15.0, so the lerp keeps it there.
        assert!((rig.position.y - 15.0).abs() < EPS);
        assert!((rig.offset.z + 0.5).abs() < EPS);
    }

    #[test]
    fn boosting_raises_airborne_offset() {
        let (mut rig, settings) = rig_at(Vec3::new(0.0, 100.0, 0.0));
        let target = FollowTarget {
            on_ground: false,
            boosting: true,
            ..grounded_at(Vec3::zeros())
        };

        rig.follow(&target, DT, &settings);
        assert!((rig.offset.y - 6.0).abs() < EPS);
    }

    #[test]
    fn snap_behind_uses_default_offset() {
        let (mut rig, settings) = rig_at(Vec3::new(50.0, 50.0, 50.0));
        rig.snap_behind(Vec3::new(1.0, 2.0, 3.0), &settings);
        assert_eq!(rig.position, Vec3::new(1.0, 7.5, 1.0));
    }
}
