//! Projectile Arc
//!
//! Раскладывает fire points (position + rotation) равномерно по дуге вокруг
//! forward направления origin'а и спавнит по объекту на каждую точку.
//!
//! Слои:
//! - `arc` — sampling math + ProjectileArc (config + lazy cache)
//! - `dispatch` — spawn_all поверх внешнего Instantiator (bevy Commands backend)
//! - `activation` — lifecycle policy → ActivateArc → volley
//! - `preview` — данные для gizmo/editor слоя (fire lines, arc handle)
//!
//! Single-threaded by contract: a ProjectileArc mutates its cache on read.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

pub mod activation;
pub mod arc;
pub mod dispatch;
pub mod error;
pub mod logger;
pub mod preview;

// Re-export основных типов
pub use activation::{
    ActivateArc, ArcActivator, ArcLifecycle, ArcVolley, ArcVolleyFired, LifecycleStage, VolleyTemplates,
};
pub use arc::{
    sample_arc, ArcConfig, FirePoint, Pose, PoseSource, ProjectileArc, TrackedPose, MAX_SHOT_COUNT,
};
pub use dispatch::{
    spawn_all, ArcProjectile, CommandsInstantiator, Instantiator, ProjectilePrefab, TemplateSource,
};
pub use error::{ArcError, InstantiateError};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter};

/// Simulation tick rate (FixedUpdate)
pub const TICK_HZ: f64 = 60.0;

/// Projectile arc plugin
///
/// Регистрирует events + системы в FixedUpdate.
///
/// Порядок выполнения:
/// 1. mark_moved_arcs_dirty — Changed<Transform> → cache stale
/// 2. emit_start_lifecycle — Added<ArcActivator> → ArcLifecycle::Enable + Start
/// 3. route_lifecycle_activations — policy → ActivateArc
/// 4. activate_on_activator_removed — removed ArcActivator (on_disable) → ActivateArc
/// 5. fire_activated_volleys — ActivateArc → spawn → ArcVolleyFired
pub struct ProjectileArcPlugin;

impl Plugin for ProjectileArcPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ArcLifecycle>()
            .add_event::<ActivateArc>()
            .add_event::<ArcVolleyFired>()
            .register_type::<ProjectileArc>()
            .register_type::<ArcActivator>()
            .register_type::<ArcVolley>()
            .register_type::<ArcProjectile>()
            .register_type::<ProjectilePrefab>();

        app.add_systems(
            FixedUpdate,
            (
                activation::mark_moved_arcs_dirty,
                activation::emit_start_lifecycle,
                activation::route_lifecycle_activations,
                activation::activate_on_activator_removed,
                activation::fire_activated_volleys,
            )
                .chain(), // Один владелец cache за раз
        );
    }
}

/// Minimal headless App: one `update()` = exactly one FixedUpdate tick.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();

    let tick = Duration::from_secs_f64(1.0 / TICK_HZ);
    app.add_plugins((MinimalPlugins, bevy::transform::TransformPlugin))
        .insert_resource(Time::<Fixed>::from_duration(tick))
        .insert_resource(TimeUpdateStrategy::ManualDuration(tick))
        .add_plugins(ProjectileArcPlugin);

    // Первый update у Time<Real> с нулевым delta — прогреваем, дальше ровно 1 тик на update
    app.update();

    app
}

/// Byte snapshot of every spawned projectile, ordered by (emitter, fire point index).
///
/// Для сравнения прогонов на детерминизм.
pub fn projectile_snapshot(world: &mut World) -> Vec<u8> {
    let mut query = world.query::<(&ArcProjectile, &Transform, &ProjectilePrefab)>();
    let mut projectiles: Vec<_> = query.iter(world).collect();

    projectiles.sort_by_key(|(projectile, _, _)| (projectile.emitter.index(), projectile.index));

    let mut snapshot = Vec::new();
    for (projectile, transform, prefab) in projectiles {
        snapshot.extend_from_slice(&(projectile.index as u32).to_le_bytes());
        for value in transform.translation.to_array() {
            snapshot.extend_from_slice(&value.to_le_bytes());
        }
        for value in transform.rotation.to_array() {
            snapshot.extend_from_slice(&value.to_le_bytes());
        }
        snapshot.extend_from_slice(prefab.path.as_bytes());
    }

    snapshot
}
