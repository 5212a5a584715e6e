use rand::Rng;

/// Size of the mole sprite in terminal cells
pub const SPRITE: SpriteSize = SpriteSize {
    width: 7,
    height: 3,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSize {
    pub width: u16,
    pub height: u16,
}

/// Region the mole may roam, in cells. Zero until the first frame is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayArea {
    pub width: u16,
    pub height: u16,
}

impl PlayArea {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Exclusive upper bounds for the sprite's top-left corner
    fn max_origin(&self, sprite: SpriteSize) -> (u16, u16) {
        (
            self.width.saturating_sub(sprite.width),
            self.height.saturating_sub(sprite.height),
        )
    }
}

/// Top-left corner of the sprite, relative to the play area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placement {
    pub x: u16,
    pub y: u16,
}

impl Placement {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Pick a uniformly random spot that keeps the sprite inside `area`.
    /// An area too small for the sprite pins it to the origin.
    pub fn random<R: Rng + ?Sized>(area: PlayArea, sprite: SpriteSize, rng: &mut R) -> Self {
        let (max_x, max_y) = area.max_origin(sprite);
        let x = if max_x > 0 { rng.gen_range(0..max_x) } else { 0 };
        let y = if max_y > 0 { rng.gen_range(0..max_y) } else { 0 };
        Self { x, y }
    }

    /// Whether the cell (x, y), relative to the play area, lies on the sprite
    pub fn contains(&self, sprite: SpriteSize, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(sprite.width)
            && u32::from(y) < u32::from(self.y) + u32::from(sprite.height)
    }

    /// Pull the placement back inside a (possibly shrunk) area
    pub fn clamped(&self, area: PlayArea, sprite: SpriteSize) -> Self {
        let (max_x, max_y) = area.max_origin(sprite);
        Self {
            x: self.x.min(max_x.saturating_sub(1)),
            y: self.y.min(max_y.saturating_sub(1)),
        }
    }
}
