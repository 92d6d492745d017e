use glam::Vec2;
use hecs::World;

use crate::arena::Rect;
use crate::components::{Bird, Facing, Platform, PlatformSlot, Side};
use crate::config::Config;
use crate::resources::{MatchPhase, Score, ScoreFlash};

/// One bird as a renderer sees it.
#[derive(Debug, Clone, Copy)]
pub struct BirdView {
    pub side: Side,
    pub pos: Vec2,
    pub facing: Facing,
    pub size: Vec2,
}

impl From<&Bird> for BirdView {
    fn from(bird: &Bird) -> Self {
        Self {
            side: bird.side,
            pos: bird.pos,
            facing: bird.facing,
            size: bird.size(),
        }
    }
}

/// Everything a renderer needs to draw one frame. Handed off once per
/// tick; the renderer never touches the world directly.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot {
    /// Left player first.
    pub birds: [BirdView; 2],
    /// Upper platform first.
    pub platforms: [Rect; 2],
    pub score: Score,
    pub phase: MatchPhase,
    /// "X SCORED!" banner flags.
    pub left_scored: bool,
    pub right_scored: bool,
    pub lava_enabled: bool,
    pub background_enabled: bool,
    pub game_time: u32,
}

/// Flatten the world and resources into a `FrameSnapshot`.
///
/// Panics if the world is missing a bird or platform; `Match::new` spawns
/// all four and nothing despawns them.
pub fn capture(
    world: &World,
    config: &Config,
    score: Score,
    flash: &ScoreFlash,
    phase: MatchPhase,
    game_time: u32,
) -> FrameSnapshot {
    let mut left = None;
    let mut right = None;
    for (_entity, bird) in world.query::<&Bird>().iter() {
        match bird.side {
            Side::Left => left = Some(BirdView::from(bird)),
            Side::Right => right = Some(BirdView::from(bird)),
        }
    }

    let mut upper = None;
    let mut lower = None;
    for (_entity, platform) in world.query::<&Platform>().iter() {
        match platform.slot {
            PlatformSlot::Upper => upper = Some(platform.rect),
            PlatformSlot::Lower => lower = Some(platform.rect),
        }
    }

    FrameSnapshot {
        birds: [left.unwrap(), right.unwrap()],
        platforms: [upper.unwrap(), lower.unwrap()],
        score,
        phase,
        left_scored: flash.left,
        right_scored: flash.right,
        lava_enabled: config.lava_enabled,
        background_enabled: config.background_enabled,
        game_time,
    }
}
