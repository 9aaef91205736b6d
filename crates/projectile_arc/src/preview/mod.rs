//! Preview adapter — read-only arc visualization data + handle write-back
//!
//! Presentation layer (editor gizmos, debug overlay) читает отсюда линии и
//! frame для arc handle. Обратно в ProjectileArc пишется только full angle.

use bevy::prelude::*;

use crate::arc::{FirePoint, Pose, ProjectileArc};

/// Default fire line length (scaled by the caller's handle size).
pub const FIRE_LINE_LENGTH: f32 = 2.0;

/// Default arc handle radius (scaled by the caller's handle size).
pub const HANDLE_RADIUS: f32 = 3.0;

/// One segment per fire point: from its position along its forward.
pub fn fire_lines(points: &[FirePoint], length: f32) -> Vec<(Vec3, Vec3)> {
    points
        .iter()
        .map(|point| {
            let start = point.position();
            (start, start + point.forward() * length)
        })
        .collect()
}

/// Placement of an angular arc handle.
///
/// The handle sweeps `angle` degrees around `normal`, starting at the
/// negative edge of the arc (`rotation * +Z`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcHandleFrame {
    pub position: Vec3,
    pub rotation: Quat,
    pub normal: Vec3,
    pub radius: f32,
    pub angle: f32,
}

impl ArcHandleFrame {
    pub fn for_arc(arc: &ProjectileArc, origin: &Pose, scale: f32) -> Self {
        let normal = origin.up();
        let start_direction =
            Quat::from_axis_angle(normal.normalize(), (-arc.half_angle()).to_radians()) * origin.forward();

        Self {
            position: origin.position(),
            rotation: Pose::looking(origin.position(), start_direction, normal).rotation(),
            normal,
            radius: HANDLE_RADIUS * scale,
            angle: arc.full_angle(),
        }
    }

    /// World position of the handle's end (positive edge of the arc).
    pub fn end_point(&self) -> Vec3 {
        let sweep = Quat::from_axis_angle(self.normal.normalize(), self.angle.to_radians());
        self.position + sweep * (self.rotation * Vec3::Z) * self.radius
    }
}

/// Write a dragged handle angle back as the arc's full angle.
///
/// Non-finite angles are ignored. Returns true if the arc changed.
pub fn apply_handle_angle(arc: &mut ProjectileArc, full_angle: f32) -> bool {
    if !full_angle.is_finite() {
        return false;
    }

    let before = arc.half_angle();
    arc.set_full_angle(full_angle);
    arc.half_angle() != before
}

/// Full angle implied by dragging the arc's positive edge to `point`.
///
/// `None` when `point` projects onto the origin (no direction on the arc plane).
pub fn angle_from_handle(origin: &Pose, point: Vec3) -> Option<f32> {
    let up = origin.up().normalize();
    let offset = point - origin.position();
    let on_plane = (offset - up * offset.dot(up)).try_normalize()?;

    let forward = origin.forward();
    let half = forward.cross(on_plane).dot(up).atan2(forward.dot(on_plane));
    Some(half.to_degrees() * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_lines_follow_points() {
        let origin = Pose::looking(Vec3::ZERO, Vec3::Z, Vec3::Y);
        let mut arc = ProjectileArc::new(90.0, 3);

        let lines = fire_lines(arc.points(&origin), FIRE_LINE_LENGTH);
        assert_eq!(lines.len(), 3);

        assert!(lines[0].1.abs_diff_eq(Vec3::new(-2.0, 0.0, 0.0), 1e-5));
        assert!(lines[1].1.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-5));
        assert!(lines[2].1.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_handle_frame_spans_arc() {
        let origin = Pose::looking(Vec3::new(0.0, 1.0, 0.0), Vec3::Z, Vec3::Y);
        let arc = ProjectileArc::new(30.0, 4);

        let frame = ArcHandleFrame::for_arc(&arc, &origin, 2.0);
        assert_eq!(frame.radius, 6.0);
        assert_eq!(frame.angle, 60.0);

        // Начало handle — отрицательный край дуги
        let start = frame.rotation * Vec3::Z;
        let want = Quat::from_rotation_y((-30_f32).to_radians()) * Vec3::Z;
        assert!(start.abs_diff_eq(want, 1e-5));

        // Конец — положительный край
        let end_dir = (frame.end_point() - frame.position).normalize();
        let want = Quat::from_rotation_y(30_f32.to_radians()) * Vec3::Z;
        assert!(end_dir.abs_diff_eq(want, 1e-5));
    }

    #[test]
    fn test_apply_handle_angle() {
        let mut arc = ProjectileArc::new(30.0, 3);

        assert!(!apply_handle_angle(&mut arc, 60.0));
        assert!(apply_handle_angle(&mut arc, 100.0));
        assert_eq!(arc.half_angle(), 50.0);

        assert!(!apply_handle_angle(&mut arc, f32::NAN));
        assert!(!apply_handle_angle(&mut arc, f32::INFINITY));
        assert_eq!(arc.full_angle(), 100.0);
    }

    #[test]
    fn test_angle_from_handle() {
        let origin = Pose::looking(Vec3::ZERO, Vec3::Z, Vec3::Y);

        // Точка на +X (с высотой — проецируется на плоскость) → half 90°
        let full = angle_from_handle(&origin, Vec3::new(5.0, 3.0, 0.0)).unwrap();
        assert!((full - 180.0).abs() < 1e-3);

        let full = angle_from_handle(&origin, Vec3::new(1.0, 0.0, 1.0)).unwrap();
        assert!((full - 90.0).abs() < 1e-3);

        assert_eq!(angle_from_handle(&origin, Vec3::new(0.0, 4.0, 0.0)), None);
    }
}
