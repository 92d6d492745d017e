use glam::Vec2;

use crate::arena::{bottom_wall_start, upper_wall_start, Rect};
use crate::params::Params;
use crate::sprites::sprite_size;

/// Player identity. The left player spawns at x=100, the right at x=700.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn spawn_x(self) -> f32 {
        match self {
            Side::Left => Params::LEFT_SPAWN_X,
            Side::Right => Params::RIGHT_SPAWN_X,
        }
    }
}

/// Horizontal direction for jumps and separation bounces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
}

impl Dir {
    pub fn signum(self) -> f32 {
        match self {
            Dir::Left => -1.0,
            Dir::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// Sprite orientation. Only rendering and the dimension table care about
/// the wing state; the simulation itself assigns the folded variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    RightFolded,
    RightBack,
    RightForward,
    LeftFolded,
    LeftBack,
    LeftForward,
}

impl Facing {
    pub fn folded(dir: Dir) -> Facing {
        match dir {
            Dir::Right => Facing::RightFolded,
            Dir::Left => Facing::LeftFolded,
        }
    }

    pub fn is_left(self) -> bool {
        matches!(self, Facing::LeftFolded | Facing::LeftBack | Facing::LeftForward)
    }
}

/// Bird component - a player's avatar.
///
/// Position is the sprite center. Created once at match start and mutated
/// every tick; never despawned, only repositioned on scoring and lava
/// events.
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    pub side: Side,
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
}

impl Bird {
    pub fn new(side: Side) -> Self {
        let facing = match side {
            Side::Left => Facing::RightFolded,
            Side::Right => Facing::LeftFolded,
        };
        Self {
            side,
            pos: Vec2::new(side.spawn_x(), Params::SPAWN_Y),
            vel: Vec2::ZERO,
            facing,
        }
    }

    pub fn size(&self) -> Vec2 {
        sprite_size(self.facing)
    }

    pub fn quarter_width(&self) -> f32 {
        self.size().x / 4.0
    }

    pub fn quarter_height(&self) -> f32 {
        self.size().y / 4.0
    }

    /// Gravity step. Called by the platform pass only while the bird is
    /// unsupported. At the floor the bird is pinned and whatever fall speed
    /// remains turns into a soft upward bounce.
    pub fn fall(&mut self) {
        let floor = Params::FLOOR_Y - self.quarter_width();
        if self.pos.y > floor {
            self.pos.y = floor;
            self.vel.y *= Params::FLOOR_DAMPING;
        } else {
            self.vel.y += Params::GRAVITY;
        }
    }

    /// Drag, then position integration, then the arena clamp. Side walls
    /// and the ceiling reflect the clamped velocity component; the floor
    /// is handled by `fall`.
    pub fn integrate(&mut self) {
        self.vel.x *= Params::DRAG;
        self.pos += self.vel;

        let qw = self.quarter_width();
        if self.pos.x < qw {
            self.pos.x = qw;
            self.vel.x *= Params::WALL_REFLECT;
        }
        if self.pos.x > Params::ARENA_WIDTH - qw {
            self.pos.x = Params::ARENA_WIDTH - qw;
            self.vel.x *= Params::WALL_REFLECT;
        }
        if self.pos.y < qw {
            self.pos.y = qw;
            self.vel.y *= Params::WALL_REFLECT;
        }
    }

    /// Flap: full horizontal speed toward `dir` plus a fixed upward kick.
    pub fn jump(&mut self, dir: Dir) {
        self.vel.x = Params::JUMP_SPEED * dir.signum();
        self.vel.y = -Params::JUMP_SPEED;
    }

    /// Horizontal shove used to separate birds after a side-on bump.
    pub fn bounce(&mut self, dir: Dir) {
        self.vel.x += Params::BOUNCE_KICK * dir.signum();
    }

    /// Full sprite bounding box (centered on `pos`).
    pub fn sprite_box(&self) -> Rect {
        Rect::from_center_size(self.pos, self.size())
    }

    /// Foot hitbox: half sprite width, reduced height, anchored at the
    /// sprite center point. Used for bird-vs-bird contact only; platform
    /// tests use the full sprite box.
    pub fn foot_hitbox(&self) -> Rect {
        let size = self.size();
        Rect::from_top_left(self.pos.x, self.pos.y, size.x / 2.0, size.y - 30.0)
    }
}

/// Which of the two platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformSlot {
    Upper,
    Lower,
}

/// Platform component - a rectangular obstacle birds can rest on.
///
/// `drift` is only meaningful for the lower platform's oscillation script.
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub rect: Rect,
    pub slot: PlatformSlot,
    pub drift: Dir,
}

impl Platform {
    pub fn upper() -> Self {
        Self {
            rect: upper_wall_start(),
            slot: PlatformSlot::Upper,
            drift: Dir::Right,
        }
    }

    pub fn lower() -> Self {
        Self {
            rect: bottom_wall_start(),
            slot: PlatformSlot::Lower,
            drift: Dir::Right,
        }
    }
}
