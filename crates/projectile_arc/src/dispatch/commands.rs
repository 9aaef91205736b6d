//! ECS instantiation: fire points → spawned projectile entities
//!
//! Visual/physics layer (Godot, renderer, etc.) видит `Added<ProjectilePrefab>`
//! и сам грузит prefab. ECS хранит только pose + путь.

use bevy::prelude::*;

use crate::arc::FirePoint;
use crate::error::InstantiateError;

use super::spawner::Instantiator;

/// Prefab path for a spawned projectile (data-driven).
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct ProjectilePrefab {
    pub path: String,
}

impl ProjectilePrefab {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Marker on every entity spawned from an arc.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct ArcProjectile {
    /// Entity that owns the ProjectileArc
    pub emitter: Entity,

    /// Fire point index inside the volley
    pub index: usize,
}

/// `Instantiator` over bevy `Commands`.
///
/// Fire points are world poses. When a parent is given, the spawned `Transform`
/// is re-expressed relative to `parent_frame` (the parent's `GlobalTransform`).
pub struct CommandsInstantiator<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    emitter: Entity,
    parent_frame: Option<GlobalTransform>,
    spawned: usize,
}

impl<'a, 'w, 's> CommandsInstantiator<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, emitter: Entity) -> Self {
        Self {
            commands,
            emitter,
            parent_frame: None,
            spawned: 0,
        }
    }

    pub fn with_parent_frame(mut self, parent_frame: Option<GlobalTransform>) -> Self {
        self.parent_frame = parent_frame;
        self
    }
}

impl Instantiator for CommandsInstantiator<'_, '_, '_> {
    type Template = ProjectilePrefab;
    type Parent = Entity;
    type Handle = Entity;

    fn instantiate(
        &mut self,
        template: ProjectilePrefab,
        point: &FirePoint,
        parent: Option<Entity>,
    ) -> Result<Entity, InstantiateError> {
        if template.path.is_empty() {
            return Err(InstantiateError::new("empty prefab path"));
        }

        let world = Transform::from(point.pose());
        let transform = match (parent, self.parent_frame) {
            (Some(_), Some(frame)) => GlobalTransform::from(world).reparented_to(&frame),
            _ => world,
        };

        let index = self.spawned;
        let mut entity = self.commands.spawn((
            transform,
            template,
            ArcProjectile {
                emitter: self.emitter,
                index,
            },
        ));

        if let Some(parent) = parent {
            entity.insert(ChildOf(parent));
        }

        self.spawned += 1;
        Ok(entity.id())
    }
}
