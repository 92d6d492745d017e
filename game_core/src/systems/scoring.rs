use hecs::{Entity, World};

use crate::arena::Rect;
use crate::components::{Bird, Dir, Side};
use crate::params::Params;
use crate::resources::{Clock, Events, Score, ScoreFlash};
use crate::systems::collision::{classify_bird_collision, BirdCollision};

/// Both foot hitboxes with their owners and horizontal speeds, collected
/// in one pass over the world.
#[derive(Debug, Clone, Copy)]
pub struct FootContacts {
    left: (Entity, Rect, f32),
    right: (Entity, Rect, f32),
}

/// Snapshot the foot hitboxes ahead of the platform pass: classification
/// sees the positions the birds flew at this tick, not the rest-snapped
/// ones. `None` unless both birds are present.
pub fn capture_foot_contacts(world: &World) -> Option<FootContacts> {
    let mut left = None;
    let mut right = None;
    for (entity, bird) in world.query::<&Bird>().iter() {
        match bird.side {
            Side::Left => left = Some((entity, bird.foot_hitbox(), bird.vel.x)),
            Side::Right => right = Some((entity, bird.foot_hitbox(), bird.vel.x)),
        }
    }
    Some(FootContacts {
        left: left?,
        right: right?,
    })
}

/// Bird-vs-bird pass: classify the captured foot hitboxes, then score,
/// shove, or let the banners lapse. The left bird is always the
/// classifier's `a` operand, so results are deterministic.
pub fn bird_collision_pass(
    world: &mut World,
    contacts: FootContacts,
    score: &mut Score,
    flash: &mut ScoreFlash,
    clock: &Clock,
    events: &mut Events,
) {
    let (left_entity, left_foot, left_vx) = contacts.left;
    let (right_entity, right_foot, right_vx) = contacts.right;

    match classify_bird_collision(&left_foot, &right_foot) {
        BirdCollision::AScores => {
            award(world, right_entity, Side::Left, score, flash, clock, events)
        }
        BirdCollision::BScores => {
            award(world, left_entity, Side::Right, score, flash, clock, events)
        }
        BirdCollision::Partial => {
            events.bird_bumped = true;
            for (entity, vx) in [(left_entity, left_vx), (right_entity, right_vx)] {
                // Shove against the current travel direction; a standing
                // bird counts as moving left and is pushed right.
                let dir = if vx <= 0.0 { Dir::Right } else { Dir::Left };
                if let Ok(mut bird) = world.get::<&mut Bird>(entity) {
                    bird.bounce(dir);
                }
            }
        }
        BirdCollision::None => flash.expire(clock.game_time),
    }
}

/// Move the loser to the far half of the arena, bump the winner's score,
/// raise the banner.
fn award(
    world: &mut World,
    loser: Entity,
    winner: Side,
    score: &mut Score,
    flash: &mut ScoreFlash,
    clock: &Clock,
    events: &mut Events,
) {
    if let Ok(mut bird) = world.get::<&mut Bird>(loser) {
        bird.pos.x = if bird.pos.x >= Params::RESPAWN_MIDLINE {
            Params::LEFT_SPAWN_X
        } else {
            Params::RIGHT_SPAWN_X
        };
        bird.pos.y = Params::LOSER_RESPAWN_Y;
    }
    score.increment(winner);
    flash.raise(winner, clock.game_time);
    events.mark_scored(winner);
}
