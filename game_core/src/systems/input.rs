use hecs::World;

use crate::components::Bird;
use crate::resources::{InputEvent, InputQueue, MatchFlags};

/// Drain the queue into the simulation. Pause toggles always apply (the
/// first unpause is what starts the match); move inputs flap a bird only
/// while `control_live` (match running and the countdown has reached GO).
pub fn drain_inputs(
    world: &mut World,
    queue: &mut InputQueue,
    flags: &mut MatchFlags,
    control_live: bool,
) {
    for event in queue.drain() {
        match event {
            InputEvent::TogglePause => flags.toggle_pause(),
            InputEvent::Move { side, dir } => {
                if !control_live {
                    continue;
                }
                for (_entity, bird) in world.query_mut::<&mut Bird>() {
                    if bird.side == side {
                        bird.jump(dir);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Dir, Side};

    fn setup() -> (World, hecs::Entity) {
        let mut world = World::new();
        let entity = world.spawn((Bird::new(Side::Left),));
        world.spawn((Bird::new(Side::Right),));
        (world, entity)
    }

    #[test]
    fn test_move_event_flaps_the_right_bird() {
        let (mut world, left) = setup();
        let mut queue = InputQueue::new();
        let mut flags = MatchFlags { started: true, paused: false };
        queue.push(InputEvent::Move {
            side: Side::Left,
            dir: Dir::Right,
        });

        drain_inputs(&mut world, &mut queue, &mut flags, true);

        let bird = *world.get::<&Bird>(left).unwrap();
        assert_eq!(bird.vel.x, 9.0);
        assert_eq!(bird.vel.y, -9.0);
    }

    #[test]
    fn test_moves_dropped_while_control_locked() {
        let (mut world, left) = setup();
        let mut queue = InputQueue::new();
        let mut flags = MatchFlags { started: true, paused: false };
        queue.push(InputEvent::Move {
            side: Side::Left,
            dir: Dir::Left,
        });

        drain_inputs(&mut world, &mut queue, &mut flags, false);

        let bird = *world.get::<&Bird>(left).unwrap();
        assert_eq!(bird.vel.x, 0.0, "countdown gates movement");
        assert!(queue.is_empty(), "dropped, not deferred");
    }

    #[test]
    fn test_pause_toggle_applies_even_when_control_locked() {
        let (mut world, _left) = setup();
        let mut queue = InputQueue::new();
        let mut flags = MatchFlags::new();
        queue.push(InputEvent::TogglePause);

        drain_inputs(&mut world, &mut queue, &mut flags, false);

        assert!(flags.started && !flags.paused);
    }
}
