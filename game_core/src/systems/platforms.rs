use glam::Vec2;
use hecs::World;

use crate::components::{Platform, PlatformSlot};
use crate::params::Params;

/// Advance the scripted platform paths (moving-platforms option only).
/// Before the match starts the platforms park at fixed positions, so the
/// option can be toggled on the instructions screen without surprises.
pub fn drive_platforms(world: &mut World, started: bool) {
    for (_entity, platform) in world.query_mut::<&mut Platform>() {
        match platform.slot {
            PlatformSlot::Upper => drive_upper(platform, started),
            PlatformSlot::Lower => drive_lower(platform, started),
        }
    }
}

/// Upper wall: slide left one unit per tick; at the left edge drop a row
/// and jump 700 units right, wrapping back to the top past y=400.
fn drive_upper(platform: &mut Platform, started: bool) {
    if !started {
        platform.rect.set_x(Params::UPPER_WALL_PARK_X);
        return;
    }
    let rect = &mut platform.rect;
    if rect.min.x > 0.0 {
        rect.translate(Vec2::new(-Params::UPPER_WALL_SLIDE, 0.0));
    } else if rect.min.y > Params::UPPER_WALL_MAX_Y {
        rect.set_y(0.0);
    } else {
        rect.translate(Vec2::new(
            Params::UPPER_WALL_JUMP_BACK,
            Params::UPPER_WALL_ROW_DROP,
        ));
    }
}

/// Bottom wall: oscillate two units per tick, reversing when x leaves
/// `[0, arena_width - width)`.
fn drive_lower(platform: &mut Platform, started: bool) {
    if !started {
        platform.rect.set_x(0.0);
        return;
    }
    let in_range = platform.rect.min.x >= 0.0
        && platform.rect.min.x < Params::ARENA_WIDTH - platform.rect.width();
    if !in_range {
        platform.drift = platform.drift.reversed();
    }
    platform.rect.translate(Vec2::new(
        Params::BOTTOM_WALL_STEP * platform.drift.signum(),
        0.0,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Dir;

    #[test]
    fn test_bottom_wall_reverses_at_right_edge() {
        let mut platform = Platform::lower();
        // Arena width 800, wall width 450: valid range is [0, 350).
        platform.rect.set_x(348.0);

        drive_lower(&mut platform, true);
        assert_eq!(platform.rect.min.x, 350.0);
        assert_eq!(platform.drift, Dir::Right);

        // 350 is outside the range, so the direction flips and the wall
        // moves back by the same step.
        drive_lower(&mut platform, true);
        assert_eq!(platform.rect.min.x, 348.0);
        assert_eq!(platform.drift, Dir::Left);

        drive_lower(&mut platform, true);
        assert_eq!(platform.rect.min.x, 346.0);
    }

    #[test]
    fn test_bottom_wall_reverses_at_left_edge() {
        let mut platform = Platform::lower();
        platform.drift = Dir::Left;
        platform.rect.set_x(0.0);

        // x = 0 is in range, one more step takes it out.
        drive_lower(&mut platform, true);
        assert_eq!(platform.rect.min.x, -2.0);

        drive_lower(&mut platform, true);
        assert_eq!(platform.drift, Dir::Right);
        assert_eq!(platform.rect.min.x, 0.0);
    }

    #[test]
    fn test_upper_wall_slides_left_then_jumps_rows() {
        let mut platform = Platform::upper();
        // Starts at x=0, y=200: not sliding, not past max y, so it jumps.
        drive_upper(&mut platform, true);
        assert_eq!(platform.rect.min.x, 700.0);
        assert_eq!(platform.rect.min.y, 250.0);

        drive_upper(&mut platform, true);
        assert_eq!(platform.rect.min.x, 699.0, "now it slides left");
        assert_eq!(platform.rect.min.y, 250.0);
    }

    #[test]
    fn test_upper_wall_wraps_to_top_past_max_row() {
        let mut platform = Platform::upper();
        platform.rect.set_x(0.0);
        platform.rect.set_y(450.0);

        drive_upper(&mut platform, true);
        assert_eq!(platform.rect.min.y, 0.0);
        assert_eq!(platform.rect.min.x, 0.0);
    }

    #[test]
    fn test_platforms_park_before_start() {
        let mut world = World::new();
        world.spawn((Platform::upper(),));
        world.spawn((Platform::lower(),));

        drive_platforms(&mut world, false);

        for (_e, platform) in world.query::<&Platform>().iter() {
            match platform.slot {
                PlatformSlot::Upper => assert_eq!(platform.rect.min.x, 650.0),
                PlatformSlot::Lower => assert_eq!(platform.rect.min.x, 0.0),
            }
        }
    }
}
