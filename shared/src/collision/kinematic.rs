use rapier3d::{
    control::{CharacterAutostep, CharacterLength, KinematicCharacterController},
    prelude::{Capsule, Isometry, QueryFilter},
};

use super::{CharacterMover, KccSettings, StaticQueryWorld};
use crate::utils::Vec3;

/// [`CharacterMover`] that sweeps a Y-aligned capsule through a [`StaticQueryWorld`] using
/// Rapier's `KinematicCharacterController` (slide, autostep, snap-to-ground).
///
/// Movement is expressed as a translation for this tick; the controller returns the
/// corrected translation and whether the capsule ended on walkable ground.
pub struct KinematicMover<'w> {
    world: &'w StaticQueryWorld,
    controller: KinematicCharacterController,
    capsule: Capsule,
    position: Vec3,
    grounded: bool,
}

impl<'w> KinematicMover<'w> {
    /// Resume a body at `position` with the grounded result of its previous move.
    pub fn new(
        world: &'w StaticQueryWorld,
        settings: &KccSettings,
        position: Vec3,
        grounded: bool,
    ) -> Self {
        let controller = KinematicCharacterController {
            offset: CharacterLength::Absolute(settings.offset),
            autostep: Some(CharacterAutostep {
                max_height: CharacterLength::Absolute(settings.autostep_max_height),
                min_width: CharacterLength::Absolute(settings.autostep_min_width),
                include_dynamic_bodies: false,
            }),
            snap_to_ground: Some(CharacterLength::Absolute(settings.snap_to_ground)),
            max_slope_climb_angle: settings.max_slope_climb_deg.to_radians(),
            min_slope_slide_angle: settings.min_slope_slide_deg.to_radians(),
            normal_nudge_factor: settings.normal_nudge_factor,
            ..KinematicCharacterController::default()
        };

        Self {
            world,
            controller,
            capsule: Capsule::new_y(settings.capsule_half_height, settings.capsule_radius),
            position,
            grounded,
        }
    }
}

impl CharacterMover for KinematicMover<'_> {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn teleport(&mut self, position: Vec3) {
        self.position = position;
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_and_collide(&mut self, displacement: Vec3, dt: f32) {
        let query_pipeline = self.world.query_pipeline(QueryFilter::only_fixed());
        let pose = Isometry::translation(self.position.x, self.position.y, self.position.z);

        let corrected = self.controller.move_shape(
            dt,
            &query_pipeline,
            &self.capsule,
            &pose,
            displacement,
            |_| {},
        );

        self.position += corrected.translation;
        self.grounded = corrected.grounded;
    }
}
