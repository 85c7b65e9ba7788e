use crate::{
    camera::CameraRig,
    settings::{CameraSettings, IntroSettings},
    utils::{Vec3, normalize_or_zero, world_up},
};

/// Scripted flythrough that plays before the player gets control.
///
/// Each waypoint is a shot: the camera starts at the waypoint, holds its angles and drifts
/// sideways until it is close to the shot's destination, then cuts to the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroSequence {
    active_perspective: usize,
    is_active: bool,
}

impl Default for IntroSequence {
    fn default() -> Self {
        Self {
            active_perspective: 0,
            is_active: true,
        }
    }
}

impl IntroSequence {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[inline]
    pub fn active_perspective(&self) -> usize {
        self.active_perspective
    }

    /// Where the current shot drifts to.
    ///
    /// The lateral axis is derived by crossing world up with the shot's *angle triple*, not
    /// with its viewing direction. Authored shots depend on this, so it is kept as is.
    pub fn destination(&self, settings: &IntroSettings) -> Vec3 {
        let waypoint = &settings.waypoints[self.active_perspective];
        let right = normalize_or_zero(world_up().cross(&waypoint.angles));
        waypoint.position - right * settings.lateral_distance
    }

    /// Advance the flythrough by one tick. Does nothing once the intro has finished.
    pub fn step(
        &mut self,
        rig: &mut CameraRig,
        start_position: Vec3,
        settings: &IntroSettings,
        camera: &CameraSettings,
    ) {
        if !self.is_active {
            return;
        }

        let destination = self.destination(settings);
        rig.angles = settings.waypoints[self.active_perspective].angles;
        rig.position = rig.position.lerp(&destination, settings.smoothing);

        if (rig.position - destination).norm() > settings.arrival_radius {
            return;
        }

        if self.active_perspective + 1 < settings.waypoints.len() {
            self.active_perspective += 1;
            rig.position = settings.waypoints[self.active_perspective].position;
            log::info!("intro advanced to shot {}", self.active_perspective);
        } else {
            self.finish(rig, start_position, camera);
            log::info!("intro finished");
        }
    }

    /// End the intro right away with the same framing as finishing the last shot.
    pub fn skip(&mut self, rig: &mut CameraRig, start_position: Vec3, camera: &CameraSettings) {
        if !self.is_active {
            return;
        }
        self.finish(rig, start_position, camera);
        log::info!("intro skipped at shot {}", self.active_perspective);
    }

    fn finish(&mut self, rig: &mut CameraRig, start_position: Vec3, camera: &CameraSettings) {
        self.is_active = false;
        rig.snap_behind(start_position, camera);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ControllerSettings;

    const EPS: f32 = 1.0e-4;

    fn setup() -> (IntroSequence, CameraRig, ControllerSettings) {
        let settings = ControllerSettings::default();
        let first = settings.intro.waypoints[0];
        let rig = CameraRig::new(first.position, first.angles, &settings.camera);
        (IntroSequence::default(), rig, settings)
    }

    #[test]
    fn destination_uses_angle_cross_product() {
        let settings = IntroSettings::default();
        let intro = IntroSequence::default();

        // up x (14.5, 110, 0) = (0, 0, -14.5), so right = -Z and the shot drifts toward +Z.
        let expected = Vec3::new(-20.0, 7.5, 73.5);
        assert!((intro.destination(&settings) - expected).norm() < EPS);
    }

    #[test]
    fn step_holds_angles_and_drifts() {
        let (mut intro, mut rig, settings) = setup();
        let start = rig.position;

        intro.step(&mut rig, Vec3::zeros(), &settings.intro, &settings.camera);

        assert_eq!(rig.angles, settings.intro.waypoints[0].angles);
        assert!((rig.position.z - (start.z + 0.7)).abs() < EPS);
        assert_eq!(intro.active_perspective(), 0);
        assert!(intro.is_active());
    }

    #[test]
    fn arriving_cuts_to_next_waypoint() {
        let (mut intro, mut rig, settings) = setup();
        rig.position = intro.destination(&settings.intro) + Vec3::new(0.5, 0.0, 0.0);

        intro.step(&mut rig, Vec3::zeros(), &settings.intro, &settings.camera);

        assert_eq!(intro.active_perspective(), 1);
        assert_eq!(rig.position, settings.intro.waypoints[1].position);
        assert!(intro.is_active());
    }

    #[test]
    fn finishing_last_waypoint_frames_the_player() {
        let (mut intro, mut rig, settings) = setup();
        let start = Vec3::new(2.0, 1.0, -3.0);
        intro.active_perspective = 2;
        rig.position = intro.destination(&settings.intro);

        intro.step(&mut rig, start, &settings.intro, &settings.camera);

        assert!(!intro.is_active());
        assert_eq!(rig.position, start + settings.camera.offset_default);

        // Inactive for good: further steps leave the camera alone.
        intro.step(&mut rig, start, &settings.intro, &settings.camera);
        assert_eq!(rig.position, start + settings.camera.offset_default);
    }

    #[test]
    fn whole_flythrough_terminates() {
        let (mut intro, mut rig, settings) = setup();
        let mut ticks = 0;
        while intro.is_active() {
            intro.step(&mut rig, Vec3::zeros(), &settings.intro, &settings.camera);
            ticks += 1;
            assert!(ticks < 10_000, "intro never finished");
        }
        assert_eq!(intro.active_perspective(), 2);
    }

    #[test]
    fn skip_ends_with_final_framing() {
        let (mut intro, mut rig, settings) = setup();
        let start = Vec3::new(0.0, 1.0, 0.0);

        intro.skip(&mut rig, start, &settings.camera);

        assert!(!intro.is_active());
        assert_eq!(intro.active_perspective(), 0);
        assert_eq!(rig.position, start + settings.camera.offset_default);
    }
}
