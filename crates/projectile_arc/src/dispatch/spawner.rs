//! spawn_all — one instantiation per fire point

use crate::arc::{FirePoint, Pose, ProjectileArc};
use crate::error::{ArcError, InstantiateError};

use super::templates::TemplateSource;

/// External instantiation service.
///
/// Given a template and a fire point pose, produces a live instance, optionally
/// attached under `parent`.
pub trait Instantiator {
    type Template;
    type Parent: Copy;
    type Handle;

    fn instantiate(
        &mut self,
        template: Self::Template,
        point: &FirePoint,
        parent: Option<Self::Parent>,
    ) -> Result<Self::Handle, InstantiateError>;
}

/// Instantiate `templates.template(i)` at every fire point of `arc`, in index order.
///
/// Panics before any instantiation if `templates` does not cover the shot count.
/// The first instantiation failure is returned as is; nothing is retried.
pub fn spawn_all<I>(
    arc: &mut ProjectileArc,
    origin: &Pose,
    templates: &TemplateSource<'_, I::Template>,
    parent: Option<I::Parent>,
    instantiator: &mut I,
) -> Result<Vec<I::Handle>, ArcError>
where
    I: Instantiator,
    I::Template: Clone,
{
    let points = arc.points(origin);
    templates.assert_covers(points.len());

    let mut handles = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let handle = instantiator
            .instantiate(templates.template(index), point, parent)
            .map_err(|source| ArcError::Instantiation { index, source })?;
        handles.push(handle);
    }

    Ok(handles)
}
