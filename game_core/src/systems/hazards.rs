use hecs::World;

use crate::components::Bird;
use crate::params::Params;
use crate::resources::{Events, Score};

/// Lava pass (lava option only): a bird past the lava line respawns high
/// above its current x with an upward launch, and the opposing player
/// takes the point. No "scored" banner is raised for lava deaths.
pub fn lava_pass(world: &mut World, score: &mut Score, events: &mut Events) {
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        if bird.pos.y > Params::LAVA_LINE {
            bird.pos.y = Params::LAVA_RESPAWN_Y;
            bird.vel.y = Params::LAVA_LAUNCH_VY;
            score.increment(bird.side.opponent());
            events.mark_scored(bird.side.opponent());
            events.splashed = true;
        }
    }
}
