use bevy::prelude::*;

use crate::core::components::BallKind;

/// A ball landed in the basket for the first time.
#[derive(Event, Debug, Clone, Copy)]
pub struct BallScored {
    pub ball: Entity,
    pub position: Vec3,
    pub kind: BallKind,
    pub points: u32,
}

/// A glass ball hit the ground.
#[derive(Event, Debug, Clone, Copy)]
pub struct GlassShattered {
    pub ball: Entity,
    pub position: Vec3,
    pub penalty: u32,
}
