//! Activation events
//!
//! # Flow
//! 1. Host → `ArcLifecycle` (start / enable / disable)
//! 2. `ArcActivator` policy → `ActivateArc`
//! 3. `ArcVolley` fires → `ArcVolleyFired`

use bevy::prelude::*;

use super::components::LifecycleStage;

/// Host lifecycle notification for an emitter entity.
///
/// `Start` is also emitted automatically when `ArcActivator` is added.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcLifecycle {
    pub entity: Entity,
    pub stage: LifecycleStage,
}

/// Fire the emitter's volley now.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivateArc {
    pub emitter: Entity,
}

/// Volley spawned (projectiles in fire point order).
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ArcVolleyFired {
    pub emitter: Entity,
    pub projectiles: Vec<Entity>,
}
