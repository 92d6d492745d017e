use glam::Vec2;

use crate::components::Facing;

/// Sprite dimensions per facing. The simulation never touches pixel data;
/// it only needs widths and heights for hitboxes and the arena clamp. A
/// renderer with real sprite sheets supplies its own images but must agree
/// with this table.
pub fn sprite_size(facing: Facing) -> Vec2 {
    match facing {
        Facing::RightFolded | Facing::LeftFolded => Vec2::new(80.0, 60.0),
        Facing::RightBack | Facing::LeftBack => Vec2::new(80.0, 60.0),
        Facing::RightForward | Facing::LeftForward => Vec2::new(80.0, 60.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrored_facings_share_dimensions() {
        assert_eq!(
            sprite_size(Facing::RightFolded),
            sprite_size(Facing::LeftFolded)
        );
        assert_eq!(sprite_size(Facing::RightBack), sprite_size(Facing::LeftBack));
        assert_eq!(
            sprite_size(Facing::RightForward),
            sprite_size(Facing::LeftForward)
        );
    }
}
