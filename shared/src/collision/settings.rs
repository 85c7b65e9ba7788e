/*!
Kinematic character controller (KCC) settings.

These values configure Rapier's `KinematicCharacterController` for the player capsule.

Notes
- Distances are in world units, angles in degrees (converted to radians at runtime).
- Autostep and snap-to-ground are always enabled.
*/

/// Player capsule radius.
pub const PLAYER_CAPSULE_RADIUS: f32 = 0.5;

/// Half-length of the player capsule's cylinder section; total height is 2.0.
pub const PLAYER_CAPSULE_HALF_HEIGHT: f32 = 0.5;

#[derive(Clone, Copy, Debug)]
pub struct KccSettings {
    /// Small gap preserved between the character and its surroundings.
    /// Keep `offset` small but non-zero for numerical stability.
    pub offset: f32,

    /// Maximum climbable slope angle (degrees).
    pub max_slope_climb_deg: f32,

    /// Minimum slope angle (degrees) before automatic sliding starts.
    pub min_slope_slide_deg: f32,

    /// Autostep maximum height.
    pub autostep_max_height: f32,

    /// Autostep minimum width.
    pub autostep_min_width: f32,

    /// Distance within which the character is pulled down onto ground it is walking on.
    pub snap_to_ground: f32,

    /// Increase if the character gets stuck when sliding.
    pub normal_nudge_factor: f32,

    pub capsule_radius: f32,
    pub capsule_half_height: f32,
}

impl Default for KccSettings {
    fn default() -> Self {
        Self {
            offset: 0.01,
            max_slope_climb_deg: 45.0,
            min_slope_slide_deg: 30.0,
            autostep_max_height: 0.3,
            autostep_min_width: 0.2,
            snap_to_ground: 0.2,
            normal_nudge_factor: 1.0e-4,
            capsule_radius: PLAYER_CAPSULE_RADIUS,
            capsule_half_height: PLAYER_CAPSULE_HALF_HEIGHT,
        }
    }
}
