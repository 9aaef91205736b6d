//! Tests for spawn_all and template sources.

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use bevy::prelude::*;

    use crate::arc::{FirePoint, Pose, ProjectileArc};
    use crate::error::{ArcError, InstantiateError};
    use super::super::spawner::*;
    use super::super::templates::*;

    /// Записывает каждый вызов instantiate
    #[derive(Default)]
    struct RecordingInstantiator {
        calls: Vec<(&'static str, FirePoint, Option<u32>)>,
        fail_at: Option<usize>,
    }

    impl Instantiator for RecordingInstantiator {
        type Template = &'static str;
        type Parent = u32;
        type Handle = usize;

        fn instantiate(
            &mut self,
            template: &'static str,
            point: &FirePoint,
            parent: Option<u32>,
        ) -> Result<usize, InstantiateError> {
            if self.fail_at == Some(self.calls.len()) {
                self.calls.push((template, *point, parent));
                return Err(InstantiateError::new("out of pool"));
            }

            self.calls.push((template, *point, parent));
            Ok(self.calls.len() - 1)
        }
    }

    fn origin() -> Pose {
        Pose::looking(Vec3::new(1.0, 0.0, -2.0), Vec3::Z, Vec3::Y)
    }

    #[test]
    fn test_single_template_five_shots() {
        let mut arc = ProjectileArc::new(40.0, 5);
        let mut spawner = RecordingInstantiator::default();

        let handles = spawn_all(
            &mut arc,
            &origin(),
            &TemplateSource::Single(&"bullet"),
            None,
            &mut spawner,
        )
        .unwrap();

        assert_eq!(handles, vec![0, 1, 2, 3, 4]);
        assert_eq!(spawner.calls.len(), 5);

        let points = arc.points(&origin()).to_vec();
        for (i, (template, point, parent)) in spawner.calls.iter().enumerate() {
            assert_eq!(*template, "bullet");
            assert_eq!(*point, points[i]);
            assert_eq!(*parent, None);
        }
    }

    #[test]
    fn test_per_index_templates_in_order() {
        let mut arc = ProjectileArc::new(10.0, 3);
        let mut spawner = RecordingInstantiator::default();
        let templates = ["a", "b", "c", "unused"];

        spawn_all(
            &mut arc,
            &origin(),
            &TemplateSource::PerIndex(&templates[..]),
            Some(7),
            &mut spawner,
        )
        .unwrap();

        let used: Vec<_> = spawner.calls.iter().map(|(t, _, _)| *t).collect();
        assert_eq!(used, vec!["a", "b", "c"]);
        assert!(spawner.calls.iter().all(|(_, _, parent)| *parent == Some(7)));
    }

    #[test]
    fn test_short_template_list_faults_before_spawning() {
        let mut arc = ProjectileArc::new(10.0, 4);
        let mut spawner = RecordingInstantiator::default();
        let templates = ["a", "b"];

        let result = catch_unwind(AssertUnwindSafe(|| {
            spawn_all(
                &mut arc,
                &origin(),
                &TemplateSource::PerIndex(&templates[..]),
                None,
                &mut spawner,
            )
        }));

        assert!(result.is_err());
        assert!(spawner.calls.is_empty());
    }

    #[test]
    fn test_builder_receives_index() {
        let mut arc = ProjectileArc::new(10.0, 3);
        let mut spawner = RecordingInstantiator::default();
        let build = |i: usize| if i % 2 == 0 { "even" } else { "odd" };

        spawn_all(
            &mut arc,
            &origin(),
            &TemplateSource::Builder(&build),
            None,
            &mut spawner,
        )
        .unwrap();

        let used: Vec<_> = spawner.calls.iter().map(|(t, _, _)| *t).collect();
        assert_eq!(used, vec!["even", "odd", "even"]);
    }

    #[test]
    fn test_instantiation_failure_propagates() {
        let mut arc = ProjectileArc::new(10.0, 5);
        let mut spawner = RecordingInstantiator {
            fail_at: Some(2),
            ..Default::default()
        };

        let err = spawn_all(
            &mut arc,
            &origin(),
            &TemplateSource::Single(&"bullet"),
            None,
            &mut spawner,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ArcError::Instantiation {
                index: 2,
                source: InstantiateError::new("out of pool"),
            }
        );
        // Без retry: после ошибки больше вызовов нет
        assert_eq!(spawner.calls.len(), 3);
        assert_eq!(err.to_string(), "fire point 2: instantiation failed: out of pool");
    }

    #[test]
    fn test_spawn_reuses_cached_points() {
        let mut arc = ProjectileArc::new(25.0, 4);
        let mut spawner = RecordingInstantiator::default();

        for _ in 0..3 {
            spawn_all(
                &mut arc,
                &origin(),
                &TemplateSource::Single(&"bullet"),
                None,
                &mut spawner,
            )
            .unwrap();
        }

        assert_eq!(spawner.calls.len(), 12);
        assert_eq!(arc.recompute_count(), 1);
    }

    #[test]
    fn test_template_source_lookup() {
        let single = TemplateSource::Single(&5u8);
        assert_eq!(single.template(0), 5);
        assert_eq!(single.template(99), 5);

        let list = [1u8, 2, 3];
        let per_index = TemplateSource::PerIndex(&list[..]);
        assert_eq!(per_index.template(2), 3);
        per_index.assert_covers(3);
    }
}
