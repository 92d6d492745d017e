use hecs::World;

use crate::components::{Bird, Dir, Facing, Side};

/// Derived facing: the birds always look at each other, with the
/// further-right bird facing left. On an exact tie the left player faces
/// left. Recomputed from positions every tick, never accumulated.
pub fn update_facing(world: &mut World) {
    let mut left_x = None;
    let mut right_x = None;
    for (_entity, bird) in world.query::<&Bird>().iter() {
        match bird.side {
            Side::Left => left_x = Some(bird.pos.x),
            Side::Right => right_x = Some(bird.pos.x),
        }
    }
    let (left_x, right_x) = match (left_x, right_x) {
        (Some(l), Some(r)) => (l, r),
        _ => return,
    };

    let left_player_faces_left = left_x >= right_x;
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        let faces_left = match bird.side {
            Side::Left => left_player_faces_left,
            Side::Right => !left_player_faces_left,
        };
        bird.facing = Facing::folded(if faces_left { Dir::Left } else { Dir::Right });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn facings(world: &World) -> (Facing, Facing) {
        let mut left = None;
        let mut right = None;
        for (_e, bird) in world.query::<&Bird>().iter() {
            match bird.side {
                Side::Left => left = Some(bird.facing),
                Side::Right => right = Some(bird.facing),
            }
        }
        (left.unwrap(), right.unwrap())
    }

    #[test]
    fn test_birds_face_each_other() {
        let mut world = World::new();
        world.spawn((Bird::new(Side::Left),)); // x = 100
        world.spawn((Bird::new(Side::Right),)); // x = 700

        update_facing(&mut world);
        assert_eq!(facings(&world), (Facing::RightFolded, Facing::LeftFolded));
    }

    #[test]
    fn test_facing_flips_when_birds_cross() {
        let mut world = World::new();
        let mut left = Bird::new(Side::Left);
        left.pos = Vec2::new(600.0, 150.0);
        let mut right = Bird::new(Side::Right);
        right.pos = Vec2::new(200.0, 150.0);
        world.spawn((left,));
        world.spawn((right,));

        update_facing(&mut world);
        assert_eq!(facings(&world), (Facing::LeftFolded, Facing::RightFolded));
    }

    #[test]
    fn test_tie_has_left_player_facing_left() {
        let mut world = World::new();
        let mut left = Bird::new(Side::Left);
        left.pos = Vec2::new(400.0, 150.0);
        let mut right = Bird::new(Side::Right);
        right.pos = Vec2::new(400.0, 150.0);
        world.spawn((left,));
        world.spawn((right,));

        update_facing(&mut world);
        assert_eq!(facings(&world), (Facing::LeftFolded, Facing::RightFolded));
    }
}
