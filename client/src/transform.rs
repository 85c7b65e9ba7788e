//! Conversions between simulation space and Bevy space.
//!
//! The simulation is left-handed with +Z forward; Bevy is right-handed with -Z forward.
//! Negating Z maps one onto the other and keeps +X as "right" in both.

use bevy::prelude::*;
use skyhop_shared::Vec3 as SimVec3;

#[inline]
pub fn to_bevy(v: &SimVec3) -> Vec3 {
    Vec3::new(v.x, v.y, -v.z)
}

#[inline]
pub fn to_sim(v: Vec3) -> SimVec3 {
    SimVec3::new(v.x, v.y, -v.z)
}

/// Rotation that looks along the simulation's `forward` with the given `up`.
pub fn look_rotation(forward: &SimVec3, up: &SimVec3) -> Quat {
    Transform::IDENTITY
        .looking_to(to_bevy(forward), to_bevy(up))
        .rotation
}
