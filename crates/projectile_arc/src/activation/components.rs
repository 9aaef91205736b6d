//! Activation components: lifecycle policy + volley configuration

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::arc::{Pose, ProjectileArc};
use crate::dispatch::{spawn_all, Instantiator, ProjectilePrefab, TemplateSource};
use crate::error::ArcError;

/// Host lifecycle stage that may trigger an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum LifecycleStage {
    Start,
    Enable,
    Disable,
}

/// Which lifecycle stages fire the volley.
///
/// Generic policy: knows nothing about arcs, only turns stages into
/// `ActivateArc` events.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct ArcActivator {
    pub on_start: bool,
    pub on_enable: bool,
    pub on_disable: bool,
}

impl Default for ArcActivator {
    fn default() -> Self {
        Self {
            on_start: false,
            on_enable: true,
            on_disable: false,
        }
    }
}

impl ArcActivator {
    /// Fire only on start.
    pub fn on_start() -> Self {
        Self {
            on_start: true,
            on_enable: false,
            on_disable: false,
        }
    }

    /// Fire on nothing; activation only via explicit `ActivateArc`.
    pub fn manual() -> Self {
        Self {
            on_start: false,
            on_enable: false,
            on_disable: false,
        }
    }

    pub fn fires_on(&self, stage: LifecycleStage) -> bool {
        match stage {
            LifecycleStage::Start => self.on_start,
            LifecycleStage::Enable => self.on_enable,
            LifecycleStage::Disable => self.on_disable,
        }
    }
}

/// Templates configured on an emitter.
#[derive(Debug, Clone, PartialEq, Reflect)]
pub enum VolleyTemplates {
    /// Same prefab at every fire point
    Single(ProjectilePrefab),

    /// One prefab per fire point (len >= shot_count)
    PerIndex(Vec<ProjectilePrefab>),
}

/// What an emitter spawns when activated.
///
/// `ActivateArc { emitter }` is the no-argument activation entry point: everything
/// else (templates, parent) comes from this component.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(ProjectileArc)]
pub struct ArcVolley {
    pub templates: VolleyTemplates,

    /// Spawned projectiles become children of this entity (None = world root)
    pub parent: Option<Entity>,
}

impl ArcVolley {
    pub fn single(prefab: ProjectilePrefab) -> Self {
        Self {
            templates: VolleyTemplates::Single(prefab),
            parent: None,
        }
    }

    pub fn per_index(prefabs: Vec<ProjectilePrefab>) -> Self {
        Self {
            templates: VolleyTemplates::PerIndex(prefabs),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: Entity) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn source(&self) -> TemplateSource<'_, ProjectilePrefab> {
        match &self.templates {
            VolleyTemplates::Single(prefab) => TemplateSource::Single(prefab),
            VolleyTemplates::PerIndex(prefabs) => TemplateSource::PerIndex(prefabs),
        }
    }

    /// Spawn one projectile per fire point of `arc`.
    pub fn fire<I>(
        &self,
        arc: &mut ProjectileArc,
        origin: &Pose,
        instantiator: &mut I,
    ) -> Result<Vec<Entity>, ArcError>
    where
        I: Instantiator<Template = ProjectilePrefab, Parent = Entity, Handle = Entity>,
    {
        spawn_all(arc, origin, &self.source(), self.parent, instantiator)
    }
}
