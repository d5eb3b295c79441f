use bevy::prelude::*;

use crate::core::config::BallConfig;

/// Ball variants. Golden balls are worth more; glass balls cost points when they hit the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BallKind {
    #[default]
    Normal,
    Golden,
    Glass,
}

impl BallKind {
    /// Map a uniform roll in [0, 1) onto a kind using the configured chances.
    pub fn from_roll(roll: f32, cfg: &BallConfig) -> Self {
        if roll < cfg.golden_chance {
            BallKind::Golden
        } else if roll < cfg.golden_chance + cfg.glass_chance {
            BallKind::Glass
        } else {
            BallKind::Normal
        }
    }

    pub fn points(self, cfg: &BallConfig) -> u32 {
        match self {
            BallKind::Normal => cfg.normal_points,
            BallKind::Golden => cfg.golden_points,
            BallKind::Glass => cfg.glass_points,
        }
    }
}

/// What a ball touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Basket,
    Ground,
}

/// Result of a ball contact after the one-shot `handled` gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Ball was already handled; nothing happens.
    Ignored,
    Scored(u32),
    Shattered { penalty: u32 },
    Landed,
}

/// Falling ball. The entity also carries the mesh and the rigid body, so the
/// visual/physics pair lives and dies together.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ball {
    pub kind: BallKind,
    pub points: u32,
    pub handled: bool,
}

impl Ball {
    pub fn new(kind: BallKind, cfg: &BallConfig) -> Self {
        Self {
            kind,
            points: kind.points(cfg),
            handled: false,
        }
    }

    /// Apply a contact. Only the first basket or ground contact counts.
    pub fn register_contact(&mut self, surface: Surface, ground_penalty: u32) -> ContactOutcome {
        if self.handled {
            return ContactOutcome::Ignored;
        }
        self.handled = true;
        match (surface, self.kind) {
            (Surface::Basket, _) => ContactOutcome::Scored(self.points),
            (Surface::Ground, BallKind::Glass) => ContactOutcome::Shattered {
                penalty: ground_penalty,
            },
            (Surface::Ground, _) => ContactOutcome::Landed,
        }
    }
}

/// Kinematic catcher driven by the mouse.
#[derive(Component, Debug, Default)]
pub struct Basket;

/// Visual child of the basket (base or wall box).
#[derive(Component, Debug)]
pub struct BasketPart;

#[derive(Component, Debug, Default)]
pub struct Ground;

/// Despawn the entity when the timer finishes.
#[derive(Component, Debug, Deref, DerefMut)]
pub struct Expiring(pub Timer);

impl Expiring {
    pub fn after(secs: f32) -> Self {
        Self(Timer::from_seconds(secs.max(0.0), TimerMode::Once))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_boundaries_follow_chances() {
        let cfg = BallConfig {
            golden_chance: 0.1,
            glass_chance: 0.2,
            ..Default::default()
        };
        assert_eq!(BallKind::from_roll(0.0, &cfg), BallKind::Golden);
        assert_eq!(BallKind::from_roll(0.099, &cfg), BallKind::Golden);
        assert_eq!(BallKind::from_roll(0.1, &cfg), BallKind::Glass);
        assert_eq!(BallKind::from_roll(0.29, &cfg), BallKind::Glass);
        assert_eq!(BallKind::from_roll(0.31, &cfg), BallKind::Normal);
        assert_eq!(BallKind::from_roll(0.999, &cfg), BallKind::Normal);
    }

    #[test]
    fn only_first_contact_counts() {
        let cfg = BallConfig::default();
        let mut ball = Ball::new(BallKind::Golden, &cfg);
        assert_eq!(
            ball.register_contact(Surface::Basket, 1),
            ContactOutcome::Scored(cfg.golden_points)
        );
        assert_eq!(ball.register_contact(Surface::Basket, 1), ContactOutcome::Ignored);
        assert_eq!(ball.register_contact(Surface::Ground, 1), ContactOutcome::Ignored);
    }

    #[test]
    fn glass_shatters_on_ground_once() {
        let cfg = BallConfig::default();
        let mut ball = Ball::new(BallKind::Glass, &cfg);
        assert_eq!(
            ball.register_contact(Surface::Ground, 1),
            ContactOutcome::Shattered { penalty: 1 }
        );
        assert_eq!(ball.register_contact(Surface::Ground, 1), ContactOutcome::Ignored);
        assert_eq!(ball.register_contact(Surface::Basket, 1), ContactOutcome::Ignored);
    }

    #[test]
    fn normal_ball_lands_without_penalty() {
        let mut ball = Ball::new(BallKind::Normal, &BallConfig::default());
        assert_eq!(ball.register_contact(Surface::Ground, 1), ContactOutcome::Landed);
    }
}
