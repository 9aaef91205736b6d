//! Activation systems (chained in FixedUpdate by ProjectileArcPlugin).

use std::collections::HashMap;

use bevy::prelude::*;

use crate::arc::{Pose, ProjectileArc};
use crate::dispatch::CommandsInstantiator;
use crate::error::ArcError;

use super::components::{ArcActivator, ArcVolley, LifecycleStage};
use super::events::{ActivateArc, ArcLifecycle, ArcVolleyFired};

/// System: moved emitters → arc cache stale
///
/// Pose comparison в `ProjectileArc::points` ловит и движение родителя,
/// здесь только явный сигнал от Transform.
pub fn mark_moved_arcs_dirty(mut arcs: Query<&mut ProjectileArc, Changed<Transform>>) {
    for mut arc in arcs.iter_mut() {
        arc.mark_dirty();
    }
}

/// System: newly added activator → Enable, затем Start (порядок как у движка)
pub fn emit_start_lifecycle(
    added: Query<Entity, Added<ArcActivator>>,
    mut lifecycle: EventWriter<ArcLifecycle>,
) {
    for entity in added.iter() {
        for stage in [LifecycleStage::Enable, LifecycleStage::Start] {
            lifecycle.write(ArcLifecycle { entity, stage });
        }
    }
}

/// System: removed activator → Disable по последней известной policy
///
/// После удаления компонента policy уже не прочитать, поэтому держим копию.
/// Despawned emitter'ы пропускаем: стрелять уже не из чего.
pub fn activate_on_activator_removed(
    mut removed: RemovedComponents<ArcActivator>,
    changed: Query<(Entity, &ArcActivator), Changed<ArcActivator>>,
    volleys: Query<(), With<ArcVolley>>,
    mut known: Local<HashMap<Entity, ArcActivator>>,
    mut activations: EventWriter<ActivateArc>,
) {
    for entity in removed.read() {
        let Some(activator) = known.remove(&entity) else {
            continue;
        };

        if activator.fires_on(LifecycleStage::Disable) && volleys.contains(entity) {
            activations.write(ActivateArc { emitter: entity });
        }
    }

    for (entity, activator) in changed.iter() {
        known.insert(entity, *activator);
    }
}

/// System: lifecycle events → ActivateArc (filtered by each entity's policy)
pub fn route_lifecycle_activations(
    mut lifecycle: EventReader<ArcLifecycle>,
    activators: Query<&ArcActivator>,
    mut activations: EventWriter<ActivateArc>,
) {
    for event in lifecycle.read() {
        let Ok(activator) = activators.get(event.entity) else {
            continue;
        };

        if activator.fires_on(event.stage) {
            activations.write(ActivateArc {
                emitter: event.entity,
            });
        }
    }
}

/// Local Transform + optional parent link, всё что нужно для world frame
pub type HierarchyQuery<'w, 's> = Query<'w, 's, (&'static Transform, Option<&'static ChildOf>)>;

/// System: ActivateArc → spawn projectiles at every fire point
///
/// Frames emitter'а и parent'а собираются из Transform по цепочке ChildOf,
/// GlobalTransform в FixedUpdate ещё может быть от прошлого кадра.
/// Contract violations (короткий список prefab'ов) паникуют прямо тут.
/// Ошибки (instantiation, пропавший parent) логируются, `ArcVolleyFired` не шлётся.
pub fn fire_activated_volleys(
    mut commands: Commands,
    mut activations: EventReader<ActivateArc>,
    mut emitters: Query<(&mut ProjectileArc, &ArcVolley)>,
    hierarchy: HierarchyQuery,
    mut fired: EventWriter<ArcVolleyFired>,
) {
    for activation in activations.read() {
        let Ok((mut arc, volley)) = emitters.get_mut(activation.emitter) else {
            crate::logger::log_warning(&format!(
                "ActivateArc for {:?} ignored: no ProjectileArc + ArcVolley",
                activation.emitter
            ));
            continue;
        };

        let Some(origin) = world_pose(activation.emitter, &hierarchy) else {
            crate::logger::log_warning(&format!(
                "ActivateArc for {:?} ignored: emitter has no Transform chain",
                activation.emitter
            ));
            continue;
        };

        let result = match resolve_parent_frame(volley.parent, &hierarchy) {
            Ok(parent_frame) => {
                let mut instantiator = CommandsInstantiator::new(&mut commands, activation.emitter)
                    .with_parent_frame(parent_frame);
                volley.fire(&mut arc, &origin, &mut instantiator)
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(projectiles) => {
                crate::logger::log_info(&format!(
                    "🎯 Arc volley: emitter={:?} shots={} half_angle={}°",
                    activation.emitter,
                    projectiles.len(),
                    arc.half_angle()
                ));

                fired.write(ArcVolleyFired {
                    emitter: activation.emitter,
                    projectiles,
                });
            }
            Err(err) => {
                crate::logger::log_error(&format!(
                    "❌ Arc volley failed: emitter={:?}: {}",
                    activation.emitter, err
                ));
            }
        }
    }
}

/// Parent frame для volley: None без parent'а, ошибка если parent не найден.
fn resolve_parent_frame(
    parent: Option<Entity>,
    hierarchy: &HierarchyQuery,
) -> Result<Option<GlobalTransform>, ArcError> {
    let Some(parent) = parent else {
        return Ok(None);
    };

    world_frame(parent, hierarchy)
        .map(Some)
        .ok_or(ArcError::MissingParent { parent })
}

/// World frame entity: Transform, собранный вверх по ChildOf до корня.
///
/// None если у entity (или кого-то из предков) нет Transform.
pub fn world_frame(entity: Entity, hierarchy: &HierarchyQuery) -> Option<GlobalTransform> {
    let (transform, mut link) = hierarchy.get(entity).ok()?;
    let mut frame = GlobalTransform::from(*transform);

    while let Some(child_of) = link {
        let (parent_transform, next) = hierarchy.get(child_of.parent()).ok()?;
        frame = GlobalTransform::from(*parent_transform) * frame;
        link = next;
    }

    Some(frame)
}

/// World pose of an emitter (see `world_frame`).
pub fn world_pose(entity: Entity, hierarchy: &HierarchyQuery) -> Option<Pose> {
    world_frame(entity, hierarchy).map(|frame| Pose::from(&frame.compute_transform()))
}
