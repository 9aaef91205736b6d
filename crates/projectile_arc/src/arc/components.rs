//! ProjectileArc component — arc config + lazily recomputed fire points
//!
//! Fire points не пересчитываются пока их никто не запросил. Худший случай:
//! объект двигается каждый тик и кто-то каждый тик читает `points`.
//! Несколько чтений за один тик без изменений стоят почти ноль.
//!
//! Not thread-safe: the cache is mutated on read, so only one system may touch a
//! given arc at a time (plugin systems are chained).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::logger::LogLevel;

use super::pose::{Pose, PoseSource};
use super::sampling::{assert_shot_count, sample_arc, FirePoint};

/// Plain arc configuration (host-serializable).
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcConfig {
    /// Angle from forward to either edge, degrees. Sign is irrelevant for the
    /// covered span (half_angle == -half_angle), only for point ordering.
    pub half_angle: f32,

    /// Number of fire points, 1..=MAX_SHOT_COUNT.
    pub shot_count: u32,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            half_angle: 45.0,
            shot_count: 1,
        }
    }
}

impl ArcConfig {
    pub fn new(half_angle: f32, shot_count: u32) -> Self {
        Self {
            half_angle,
            shot_count,
        }
    }

    /// Full arc angle; forward lies in the middle of it.
    pub fn full_angle(&self) -> f32 {
        self.half_angle * 2.0
    }
}

/// Arc sampler: owns its config and the fire point cache.
///
/// Cache is stale on first access, after any setter changed a value, after
/// `mark_dirty`, or when the origin pose differs from the one it was sampled for.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct ProjectileArc {
    config: ArcConfig,

    points: Vec<FirePoint>,

    /// Pose used for `points` (None = never sampled)
    sampled_for: Option<Pose>,

    dirty: bool,

    /// Incremented on every recompute
    recompute_count: u64,
}

impl Default for ProjectileArc {
    fn default() -> Self {
        Self::from_config(ArcConfig::default())
    }
}

impl ProjectileArc {
    pub fn new(half_angle: f32, shot_count: u32) -> Self {
        Self::from_config(ArcConfig::new(half_angle, shot_count))
    }

    /// Panics if `config.shot_count` is out of range.
    pub fn from_config(config: ArcConfig) -> Self {
        assert_shot_count(config.shot_count);

        Self {
            config,
            points: Vec::new(),
            sampled_for: None,
            dirty: true,
            recompute_count: 0,
        }
    }

    pub fn config(&self) -> ArcConfig {
        self.config
    }

    pub fn half_angle(&self) -> f32 {
        self.config.half_angle
    }

    pub fn full_angle(&self) -> f32 {
        self.config.full_angle()
    }

    pub fn shot_count(&self) -> u32 {
        self.config.shot_count
    }

    /// No-op when the value is exactly the current one.
    pub fn set_half_angle(&mut self, half_angle: f32) {
        if half_angle != self.config.half_angle {
            self.config.half_angle = half_angle;
            self.dirty = true;
        }
    }

    pub fn set_full_angle(&mut self, full_angle: f32) {
        self.set_half_angle(full_angle / 2.0);
    }

    /// Panics if `shot_count` is out of range; no-op when unchanged.
    pub fn set_shot_count(&mut self, shot_count: u32) {
        assert_shot_count(shot_count);

        if shot_count != self.config.shot_count {
            self.config.shot_count = shot_count;
            self.dirty = true;
        }
    }

    pub fn set_config(&mut self, config: ArcConfig) {
        self.set_shot_count(config.shot_count);
        self.set_half_angle(config.half_angle);
    }

    /// Force a recompute on the next read (pose provider signal).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Would `points(origin)` recompute?
    pub fn is_stale(&self, origin: &Pose) -> bool {
        self.dirty || self.sampled_for.as_ref() != Some(origin)
    }

    /// Number of recomputes so far.
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    /// Fire points for `origin`, recomputed only if stale.
    pub fn points(&mut self, origin: &Pose) -> &[FirePoint] {
        if self.is_stale(origin) {
            self.recompute(origin);
        }

        &self.points
    }

    /// Same as `points`, but takes the pose (and its changed signal) from a provider.
    pub fn points_from<S: PoseSource>(&mut self, source: &mut S) -> &[FirePoint] {
        if source.take_changed() {
            self.mark_dirty();
        }

        let origin = source.pose();
        self.points(&origin)
    }

    fn recompute(&mut self, origin: &Pose) {
        // Новый Vec целиком, старый никто не видит наполовину обновлённым
        self.points = sample_arc(origin, self.config.half_angle, self.config.shot_count);
        self.sampled_for = Some(*origin);
        self.dirty = false;
        self.recompute_count += 1;

        // Строку собираем только если её кто-то увидит
        if crate::logger::enabled(LogLevel::Debug) {
            crate::logger::log(&format!(
                "ProjectileArc resampled: {} shots, half_angle={}° at {:?}",
                self.config.shot_count,
                self.config.half_angle,
                origin.position()
            ));
        }
    }
}
