//! Scripted stand-ins for the engine-facing traits, used by the controller tests.

use crate::{collision::CharacterMover, effect::BoostEffect, utils::Vec3};

/// Mover over an infinite floor at `floor_y`. Nothing else blocks movement.
#[derive(Debug)]
pub struct FlatFloorMover {
    pub position: Vec3,
    pub grounded: bool,
    pub floor_y: f32,
    pub moves: usize,
}

impl FlatFloorMover {
    pub fn standing_at(position: Vec3) -> Self {
        Self {
            position,
            grounded: position.y <= 0.0,
            floor_y: 0.0,
            moves: 0,
        }
    }

    /// No floor at all; the body falls forever.
    pub fn bottomless(position: Vec3) -> Self {
        Self {
            grounded: false,
            floor_y: f32::NEG_INFINITY,
            ..Self::standing_at(position)
        }
    }
}

impl CharacterMover for FlatFloorMover {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn teleport(&mut self, position: Vec3) {
        self.position = position;
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_and_collide(&mut self, displacement: Vec3, _dt: f32) {
        self.position += displacement;
        self.grounded = self.position.y <= self.floor_y;
        if self.grounded {
            self.position.y = self.floor_y;
        }
        self.moves += 1;
    }
}

/// Effect that only counts calls.
#[derive(Debug, Default)]
pub struct RecordingEffect {
    pub plays: usize,
    pub stops: usize,
    pub last_facing: Option<Vec3>,
    playing: bool,
}

impl BoostEffect for RecordingEffect {
    fn play(&mut self, facing: Vec3) {
        self.plays += 1;
        self.last_facing = Some(facing);
        self.playing = true;
    }

    fn stop(&mut self) {
        self.stops += 1;
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
