//! All game entity types — plain data plus the rectangle geometry they
//! collide with.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned cell rectangle.  `right()` and `bottom()` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// ── Enums ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlienColor {
    Yellow,
    Green,
    Red,
}

/// Edge of the field a bonus target enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Horizontal heading of the alien formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn step(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
    /// Board cleared; frames left before the next wave starts.
    Victory(u32),
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Keys held during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

// ── Projectiles & terrain ─────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Laser {
    pub rect: Rect,
    /// Rows moved per frame (negative = upward).
    pub speed: i32,
}

#[derive(Clone, Debug)]
pub struct Block {
    pub rect: Rect,
}

// ── Player & enemies ──────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
    pub lives: u32,
    /// Whether the laser has recharged.
    pub ready: bool,
    /// Frame of the last shot.
    pub laser_time: u64,
    pub lasers: Vec<Laser>,
}

#[derive(Clone, Debug)]
pub struct Alien {
    pub rect: Rect,
    pub color: AlienColor,
}

/// The bonus target crossing the top row.
#[derive(Clone, Debug)]
pub struct Extra {
    pub rect: Rect,
    pub speed: i32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
///
/// Coordinates are relative to the play field: `(0, 0)` is its top-left
/// cell and `(width - 1, height - 1)` its bottom-right.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub aliens: Vec<Alien>,
    pub alien_direction: Direction,
    pub alien_lasers: Vec<Laser>,
    pub blocks: Vec<Block>,
    pub extra: Option<Extra>,
    /// Frames until the next bonus target appears.
    pub extra_spawn_time: u32,
    /// Frames until a random alien fires.
    pub alien_laser_timer: u32,
    /// Cumulative over waves.
    pub score: u32,
    /// The highest score seen so far (updated live during play).
    pub high_score: u32,
    pub wave: u32,
    pub status: GameStatus,
    pub frame: u64,
    pub width: u16,
    pub height: u16,
}

// ── Collision ─────────────────────────────────────────────────────────────────

/// Anything with a hitbox.
pub trait Sprite {
    fn rect(&self) -> &Rect;
}

impl Sprite for Block {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl Sprite for Alien {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}
