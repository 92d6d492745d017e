use glam::Vec2;

/// Axis-aligned rectangle in arena coordinates (origin top-left, y grows
/// downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_top_left(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center_y(&self) -> f32 {
        (self.min.y + self.max.y) * 0.5
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Overlap region, or `None` when the rectangles do not intersect.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        Some(Rect {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        })
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
        self.max += delta;
    }

    /// Move the rectangle so its left edge sits at `x`.
    pub fn set_x(&mut self, x: f32) {
        let width = self.width();
        self.min.x = x;
        self.max.x = x + width;
    }

    /// Move the rectangle so its top edge sits at `y`.
    pub fn set_y(&mut self, y: f32) {
        let height = self.height();
        self.min.y = y;
        self.max.y = y + height;
    }
}

/// Upper platform starting rectangle.
pub fn upper_wall_start() -> Rect {
    Rect::from_top_left(0.0, 200.0, 300.0, 20.0)
}

/// Lower platform starting rectangle.
pub fn bottom_wall_start() -> Rect {
    Rect::from_top_left(0.0, 525.0, 450.0, 20.0)
}
