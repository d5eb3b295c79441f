//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level, all in `Update` unless noted):
//! 1. InputSet (cursor projection, pause key)
//! 2. PrePhysicsSet (basket velocity, spawning, live tunables)
//! 3. ScoringSet (collision events from the previous physics step)
//! 4. PostPhysicsAdjustSet (clamps, pruning, expiry, effects)
//! 5. Rapier step + writeback (PostUpdate, handled by plugin)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // velocities / spawns applied before physics simulation step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ScoringSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // lightweight corrections after physics
