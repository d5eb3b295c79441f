//! egui tuning panel: live gravity and spawn-rate sliders plus a score readout.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContextPass, EguiContexts};

use crate::core::components::Ball;
use crate::core::config::{GameConfig, PanelConfig};
use crate::core::resources::{Score, Tunables};

pub struct TuningPanelPlugin;

impl Plugin for TuningPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiContextPass, tuning_panel);
    }
}

/// Keep slider output inside the configured ranges.
pub fn clamp_to_panel(t: Tunables, panel: &PanelConfig) -> Tunables {
    let (gmin, gmax) = ordered(panel.gravity_min, panel.gravity_max);
    let (rmin, rmax) = ordered(panel.rate_min, panel.rate_max);
    Tunables {
        gravity_y: t.gravity_y.clamp(gmin, gmax),
        spawn_rate: t.spawn_rate.clamp(rmin, rmax),
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn tuning_panel(
    mut contexts: EguiContexts,
    cfg: Res<GameConfig>,
    score: Res<Score>,
    balls: Query<(), With<Ball>>,
    mut tunables: ResMut<Tunables>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let p = &cfg.panel;
    let mut edit = *tunables;
    egui::Window::new("Tuning")
        .default_pos((12.0, 60.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("Score: {}", score.0));
            ui.label(format!("Balls: {}", balls.iter().count()));
            ui.separator();
            ui.add(
                egui::Slider::new(&mut edit.gravity_y, p.gravity_min..=p.gravity_max)
                    .step_by(p.gravity_step as f64)
                    .text("Gravity"),
            );
            ui.add(
                egui::Slider::new(&mut edit.spawn_rate, p.rate_min..=p.rate_max)
                    .step_by(p.rate_step as f64)
                    .text("Balls / sec"),
            );
        });
    tunables.set_if_neq(clamp_to_panel(edit, p));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_clamps_to_configured_ranges() {
        let panel = PanelConfig::default();
        let t = clamp_to_panel(
            Tunables {
                gravity_y: 50.0,
                spawn_rate: 100.0,
            },
            &panel,
        );
        assert_eq!(t.gravity_y, panel.gravity_max);
        assert_eq!(t.spawn_rate, panel.rate_max);
    }
}
