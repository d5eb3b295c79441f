use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::{Ball, Basket, ContactOutcome, Expiring, Ground, Surface};
use crate::core::config::GameConfig;
use crate::core::events::{BallScored, GlassShattered};
use crate::core::resources::Score;
use crate::core::system::system_order::ScoringSet;

pub struct ScoringPlugin;

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_ball_collisions.in_set(ScoringSet));
    }
}

/// Order a started-contact pair as (ball, surface). Pairs that are not a ball
/// against the basket or the ground yield `None`.
fn classify_pair(
    a: Entity,
    b: Entity,
    balls: &Query<(&mut Ball, &Transform)>,
    baskets: &Query<(), With<Basket>>,
    grounds: &Query<(), With<Ground>>,
) -> Option<(Entity, Surface)> {
    let surface_of = |e: Entity| {
        if baskets.contains(e) {
            Some(Surface::Basket)
        } else if grounds.contains(e) {
            Some(Surface::Ground)
        } else {
            None
        }
    };
    if balls.contains(a) {
        surface_of(b).map(|s| (a, s))
    } else if balls.contains(b) {
        surface_of(a).map(|s| (b, s))
    } else {
        None
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handle_ball_collisions(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut collisions: EventReader<CollisionEvent>,
    mut balls: Query<(&mut Ball, &Transform)>,
    baskets: Query<(), With<Basket>>,
    grounds: Query<(), With<Ground>>,
    mut score: ResMut<Score>,
    mut scored: EventWriter<BallScored>,
    mut shattered: EventWriter<GlassShattered>,
) {
    let b = &cfg.balls;
    for ev in collisions.read() {
        let CollisionEvent::Started(e1, e2, _) = ev else {
            continue;
        };
        let Some((ball_entity, surface)) = classify_pair(*e1, *e2, &balls, &baskets, &grounds)
        else {
            continue;
        };
        let Ok((mut ball, tf)) = balls.get_mut(ball_entity) else {
            continue;
        };
        let position = tf.translation;
        let delay = match ball.register_contact(surface, b.glass_ground_penalty) {
            ContactOutcome::Ignored => continue,
            ContactOutcome::Scored(points) => {
                score.0 += points as i32;
                scored.write(BallScored {
                    ball: ball_entity,
                    position,
                    kind: ball.kind,
                    points,
                });
                info!(target: "score", "{:?} ball caught +{points} -> {}", ball.kind, score.0);
                b.score_removal_delay
            }
            ContactOutcome::Shattered { penalty } => {
                score.0 -= penalty as i32;
                shattered.write(GlassShattered {
                    ball: ball_entity,
                    position,
                    penalty,
                });
                info!(target: "score", "glass shattered -{penalty} -> {}", score.0);
                b.glass_removal_delay
            }
            ContactOutcome::Landed => b.ground_removal_delay,
        };
        commands
            .entity(ball_entity)
            .try_insert(Expiring::after(delay));
    }
}
