//! Arc sampling math
//!
//! angle for i-th shot = i * theta / (n - 1) - half_angle
//! n = shot count, theta = full angle. Rotation идёт вокруг up оси origin'а.

use bevy::prelude::*;

use super::pose::Pose;

/// Upper bound for `shot_count`.
pub const MAX_SHOT_COUNT: u32 = 100;

/// Single oriented sample of an arc.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct FirePoint {
    position: Vec3,
    rotation: Quat,
}

impl FirePoint {
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Direction the point fires along.
    pub fn forward(&self) -> Vec3 {
        self.rotation * super::pose::LOCAL_FORWARD
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.rotation)
    }
}

/// Panics unless `1 <= shot_count <= MAX_SHOT_COUNT`.
pub fn assert_shot_count(shot_count: u32) {
    assert!(
        (1..=MAX_SHOT_COUNT).contains(&shot_count),
        "shot_count must be in 1..={}, got {}",
        MAX_SHOT_COUNT,
        shot_count
    );
}

/// Sample `shot_count` fire points across `[-half_angle, +half_angle]` (degrees).
///
/// A single shot always fires straight along the origin, whatever the angle.
/// For more shots index 0 is the negative edge and the last index the positive edge.
/// All points share the origin position.
pub fn sample_arc(origin: &Pose, half_angle: f32, shot_count: u32) -> Vec<FirePoint> {
    assert_shot_count(shot_count);

    if shot_count == 1 {
        return vec![FirePoint::new(origin.position(), origin.rotation())];
    }

    let full_angle = half_angle * 2.0;
    let angle_between_shots = full_angle / (shot_count - 1) as f32;
    let axis = origin.up().normalize();

    (0..shot_count)
        .map(|i| {
            let current_angle = i as f32 * angle_between_shots;
            let offset = Quat::from_axis_angle(axis, (current_angle - half_angle).to_radians());
            FirePoint::new(origin.position(), offset * origin.rotation())
        })
        .collect()
}
