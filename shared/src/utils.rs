use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec2 = na::Vector2<f32>;
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;

/// Vectors shorter than this are treated as zero before normalizing.
pub const NORMALIZE_EPS: f32 = 1.0e-5;

#[inline]
pub fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

/// World up (+Y).
#[inline]
pub fn world_up() -> Vec3 {
    Vec3::y()
}

/// Map a 2D move input onto the horizontal plane: `(x, y)` becomes `(x, 0, y)`.
#[inline]
pub fn planar_to_world(dir: Vec2) -> Vec3 {
    Vec3::new(dir.x, 0.0, dir.y)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Scale `v` down so its length is at most `max_len`; shorter vectors are returned unchanged.
#[inline]
pub fn clamp_magnitude(v: Vec3, max_len: f32) -> Vec3 {
    let max_len = max_len.max(0.0);
    let len_sq = v.norm_squared();
    if len_sq > max_len * max_len {
        v * (max_len / len_sq.sqrt())
    } else {
        v
    }
}

/// Unit vector in the direction of `v`, or zero when `v` is too short to have one.
#[inline]
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    v.try_normalize(NORMALIZE_EPS).unwrap_or_else(Vec3::zeros)
}

/// Rotation from Euler angles in degrees (pitch about X, yaw about Y, roll about Z).
///
/// Roll is applied first, then pitch, then yaw, so a positive pitch tilts +Z toward -Y
/// and a positive yaw turns +Z toward +X.
pub fn rotation_from_euler_degrees(angles: Vec3) -> Quat {
    let yaw = Quat::from_axis_angle(&Vec3::y_axis(), angles.y.to_radians());
    let pitch = Quat::from_axis_angle(&Vec3::x_axis(), angles.x.to_radians());
    let roll = Quat::from_axis_angle(&Vec3::z_axis(), angles.z.to_radians());
    yaw * pitch * roll
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0e-5;

    #[test]
    fn clamp_magnitude_only_shortens() {
        let short = Vec3::new(0.03, 0.0, 0.04);
        assert_eq!(clamp_magnitude(short, 0.1), short);

        let long = Vec3::new(3.0, 0.0, 4.0);
        let clamped = clamp_magnitude(long, 0.1);
        assert!((clamped.norm() - 0.1).abs() < EPS);
        assert!((clamped.x / clamped.z - 0.75).abs() < EPS);
    }

    #[test]
    fn normalize_or_zero_guards_zero_length() {
        let n = normalize_or_zero(Vec3::zeros());
        assert_eq!(n, Vec3::zeros());
        assert!(n.iter().all(|c| c.is_finite()));

        let unit = normalize_or_zero(Vec3::new(0.0, 0.0, 2.0));
        assert!((unit - Vec3::z()).norm() < EPS);
    }

    #[test]
    fn positive_pitch_looks_down() {
        let forward = rotation_from_euler_degrees(Vec3::new(90.0, 0.0, 0.0)) * Vec3::z();
        assert!((forward - Vec3::new(0.0, -1.0, 0.0)).norm() < EPS);
    }

    #[test]
    fn positive_yaw_turns_right() {
        let forward = rotation_from_euler_degrees(Vec3::new(0.0, 90.0, 0.0)) * Vec3::z();
        assert!((forward - Vec3::x()).norm() < EPS);
    }

    #[test]
    fn lerp_moves_fraction_of_the_way() {
        assert!((lerp(3.0, 0.0, 0.1) - 2.7).abs() < EPS);
        assert!((lerp(-2.0, 2.0, 0.5)).abs() < EPS);
    }
}
