use hecs::World;

use crate::arena::Rect;
use crate::components::{Bird, Platform, PlatformSlot};
use crate::params::Params;

/// Outcome of a bird-vs-bird foot hitbox test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdCollision {
    /// `a` landed on `b`'s head.
    AScores,
    /// `b` landed on `a`'s head.
    BScores,
    /// Side-on bump, no score.
    Partial,
    None,
}

/// Classify the overlap of two foot hitboxes. A score needs the overlap to
/// be wider than half of `a`'s box, and a strictly higher head; equal
/// heights fall through to a partial collision.
pub fn classify_bird_collision(a: &Rect, b: &Rect) -> BirdCollision {
    let overlap = match a.intersection(b) {
        Some(overlap) => overlap,
        None => return BirdCollision::None,
    };
    if overlap.width() > a.width() / 2.0 {
        if a.min.y < b.min.y {
            return BirdCollision::AScores;
        }
        if a.min.y > b.min.y {
            return BirdCollision::BScores;
        }
    }
    BirdCollision::Partial
}

/// True when the bird box overlaps the platform by more than
/// `PLATFORM_MIN_OVERLAP` vertically. Filters out glancing edge contact.
pub fn platform_hit(bird: &Rect, platform: &Rect) -> bool {
    match bird.intersection(platform) {
        Some(overlap) => overlap.height() > Params::PLATFORM_MIN_OVERLAP,
        None => false,
    }
}

/// Platform pass: rest-snap on top contact, amplified bounce off the
/// underside, gravity when unsupported. The upper platform is tested
/// first; a bird touches at most one platform per tick.
///
/// Uses the full sprite box, not the foot hitbox: the 20-thick platforms
/// can never overlap the 30-tall foot box deeply enough below their center
/// line, so the underside branch would be dead code with it.
pub fn resolve_platform_collisions(world: &mut World) {
    // Platform rects are read-only here; collect them before taking the
    // bird borrow.
    let mut upper = None;
    let mut lower = None;
    for (_entity, platform) in world.query::<&Platform>().iter() {
        match platform.slot {
            PlatformSlot::Upper => upper = Some(platform.rect),
            PlatformSlot::Lower => lower = Some(platform.rect),
        }
    }

    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        let sprite = bird.sprite_box();
        let hit = [upper, lower]
            .into_iter()
            .flatten()
            .find(|rect| platform_hit(&sprite, rect));

        match hit {
            Some(rect) => {
                if bird.pos.y <= rect.center_y() {
                    // Rest just above the surface. Velocity is left alone:
                    // the next integration sinks the bird back into the
                    // snap, which is what "standing" looks like here.
                    bird.pos.y = rect.min.y - 1.0 - bird.quarter_height();
                } else {
                    bird.vel.y *= Params::UNDERSIDE_BOUNCE;
                }
            }
            None => bird.fall(),
        }
    }
}
