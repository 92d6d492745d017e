use hecs::World;

use crate::components::Bird;

/// Integrate drag, velocity and the arena clamp for every bird.
pub fn integrate_birds(world: &mut World) {
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.integrate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use glam::Vec2;

    #[test]
    fn test_both_birds_move() {
        let mut world = World::new();
        let mut left = Bird::new(Side::Left);
        left.vel = Vec2::new(5.0, 0.0);
        let mut right = Bird::new(Side::Right);
        right.vel = Vec2::new(-5.0, 0.0);
        let left = world.spawn((left,));
        let right = world.spawn((right,));

        integrate_birds(&mut world);

        assert!(world.get::<&Bird>(left).unwrap().pos.x > 100.0);
        assert!(world.get::<&Bird>(right).unwrap().pos.x < 700.0);
    }
}
