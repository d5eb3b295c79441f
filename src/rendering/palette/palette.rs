use bevy::prelude::*;

use crate::core::components::BallKind;

pub const NORMAL_BALL: Color = Color::srgb(1.0, 1.0, 1.0); // polished white metal
pub const GOLDEN_BALL: Color = Color::srgb(1.0, 0.843, 0.0);
pub const GLASS_BALL: Color = Color::srgba(0.65, 0.85, 1.0, 0.35);
pub const BASKET: Color = Color::srgb(0.0, 0.533, 1.0);
pub const GROUND: Color = Color::srgb(0.267, 0.267, 0.267);

#[inline]
pub fn color_for_kind(kind: BallKind) -> Color {
    match kind {
        BallKind::Normal => NORMAL_BALL,
        BallKind::Golden => GOLDEN_BALL,
        BallKind::Glass => GLASS_BALL,
    }
}
