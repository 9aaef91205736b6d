//! Origin pose + pose provider contract
//!
//! Convention: local +Z = forward (ствол оружия смотрит по +Z), local +Y = up.

use bevy::prelude::*;

/// Local forward axis of a pose.
pub const LOCAL_FORWARD: Vec3 = Vec3::Z;

/// Local up axis of a pose (arc revolves around it).
pub const LOCAL_UP: Vec3 = Vec3::Y;

/// Position + orientation of the arc origin.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Pose {
    position: Vec3,
    rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Build a pose from explicit forward/up directions.
    ///
    /// `up` is re-orthogonalized against `forward`. If the two are parallel an
    /// arbitrary perpendicular up is picked so the result is still a valid rotation.
    pub fn looking(position: Vec3, forward: Vec3, up: Vec3) -> Self {
        let forward = forward.try_normalize().unwrap_or(LOCAL_FORWARD);
        let right = up
            .cross(forward)
            .try_normalize()
            .unwrap_or_else(|| forward.any_orthonormal_vector());
        let up = forward.cross(right);

        Self {
            position,
            rotation: Quat::from_mat3(&Mat3::from_cols(right, up, forward)),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * LOCAL_FORWARD
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * LOCAL_UP
    }
}

impl From<&Transform> for Pose {
    fn from(transform: &Transform) -> Self {
        Self::new(transform.translation, transform.rotation)
    }
}

impl From<Pose> for Transform {
    fn from(pose: Pose) -> Self {
        Transform::from_translation(pose.position).with_rotation(pose.rotation)
    }
}

/// External origin pose provider.
///
/// `take_changed` reports (and clears) the "moved since last query" signal;
/// any `true` invalidates the sampler's cache.
pub trait PoseSource {
    fn pose(&self) -> Pose;

    fn take_changed(&mut self) -> bool;
}

/// Minimal `PoseSource` for hosts without their own change detection.
#[derive(Debug, Clone, Copy)]
pub struct TrackedPose {
    pose: Pose,
    changed: bool,
}

impl TrackedPose {
    /// Starts as changed so the first query always recomputes.
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            changed: true,
        }
    }

    pub fn set_pose(&mut self, pose: Pose) {
        if pose != self.pose {
            self.pose = pose;
            self.changed = true;
        }
    }
}

impl PoseSource for TrackedPose {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn take_changed(&mut self) -> bool {
        std::mem::replace(&mut self.changed, false)
    }
}
