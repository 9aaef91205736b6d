//! Headless projectile arc demo
//!
//! Спавнит emitter с дугой 5 × 60°, стреляет на start и каждые 30 тиков,
//! двигая emitter между залпами.

use bevy::prelude::*;
use projectile_arc::{
    create_headless_app, ActivateArc, ArcActivator, ArcProjectile, ArcVolley, ProjectileArc, ProjectilePrefab,
};

fn main() {
    println!("Starting projectile arc headless demo");

    let mut app = create_headless_app();

    let emitter = app
        .world_mut()
        .spawn((
            Transform::from_xyz(0.0, 1.0, 0.0),
            ProjectileArc::new(30.0, 5),
            ArcVolley::single(ProjectilePrefab::new("res://projectiles/bolt.tscn")),
            ArcActivator::on_start(),
        ))
        .id();

    for tick in 0..120 {
        if tick > 0 && tick % 30 == 0 {
            if let Some(mut transform) = app.world_mut().get_mut::<Transform>(emitter) {
                transform.translation.x += 2.0;
                transform.rotate_y(0.25);
            }
            app.world_mut().send_event(ActivateArc { emitter });
        }

        app.update();
    }

    let world = app.world_mut();
    let projectiles = world.query::<&ArcProjectile>().iter(world).count();
    let recomputes = world
        .get::<ProjectileArc>(emitter)
        .map(|arc| arc.recompute_count())
        .unwrap_or_default();

    println!(
        "Demo complete: {} projectiles spawned, {} arc recomputes",
        projectiles, recomputes
    );
}
