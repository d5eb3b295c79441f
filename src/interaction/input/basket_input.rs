use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::InputSet;
use crate::gameplay::basket::{clamp_target_x, BasketTarget};

pub struct BasketInputPlugin;

impl Plugin for BasketInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, pointer_to_basket_target.in_set(InputSet));
    }
}

/// Intersect a view ray with the gameplay plane (z = 0) and return the world x.
pub fn ray_plane_x(ray: Ray3d) -> Option<f32> {
    let dist = ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(Vec3::Z))?;
    Some(ray.get_point(dist).x)
}

fn pointer_screen_pos(window: &Window, touches: Option<&Touches>) -> Option<Vec2> {
    if let Some(touch) = touches.and_then(|t| t.iter().next()) {
        return Some(touch.position());
    }
    window.cursor_position()
}

/// Mouse (or first touch) steers the basket. No pointer means the target stays put.
pub fn pointer_to_basket_target(
    windows: Query<&Window>,
    touches: Option<Res<Touches>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    cfg: Res<GameConfig>,
    mut target: ResMut<BasketTarget>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(screen) = pointer_screen_pos(window, touches.as_deref()) else {
        return;
    };
    let Some((camera, cam_tf)) = cameras.iter().next() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(cam_tf, screen) else {
        return;
    };
    if let Some(x) = ray_plane_x(ray) {
        target.set_if_neq(BasketTarget(clamp_target_x(x, cfg.basket.x_limit)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_straight_down_the_axis_hits_its_x() {
        let ray = Ray3d::new(Vec3::new(7.5, 2.0, 35.0), Dir3::NEG_Z);
        let x = ray_plane_x(ray).expect("hits plane");
        assert!((x - 7.5).abs() < 1e-5);
    }

    #[test]
    fn ray_parallel_to_plane_misses() {
        let ray = Ray3d::new(Vec3::new(0.0, 0.0, 35.0), Dir3::X);
        assert!(ray_plane_x(ray).is_none());
    }

    #[test]
    fn slanted_ray_projects_onto_plane() {
        let dir = Dir3::new(Vec3::new(1.0, 0.0, -1.0)).expect("non-zero");
        let ray = Ray3d::new(Vec3::new(0.0, 0.0, 10.0), dir);
        let x = ray_plane_x(ray).expect("hits plane");
        assert!((x - 10.0).abs() < 1e-4);
    }
}
