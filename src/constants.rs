//! Fixed tuning values.  Distances are terminal cells, durations are frames
//! of the 30 FPS loop.

use std::ops::RangeInclusive;
use std::time::Duration;

pub const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Terminal ─────────────────────────────────────────────────────────────────

pub const MIN_COLS: u16 = 50;
pub const MIN_ROWS: u16 = 24;

// ── Player ───────────────────────────────────────────────────────────────────

pub const STARTING_LIVES: u32 = 3;
pub const PLAYER_WIDTH: i32 = 3;
pub const PLAYER_HEIGHT: i32 = 2;
pub const PLAYER_SPEED: i32 = 1;
/// 12 frames ≈ 400 ms between shots.
pub const LASER_COOLDOWN: u64 = 12;
pub const PLAYER_LASER_SPEED: i32 = -1;

// ── Aliens ───────────────────────────────────────────────────────────────────

pub const ALIEN_ROWS: usize = 6;
pub const ALIEN_COLS: usize = 8;
pub const ALIEN_WIDTH: i32 = 3;
pub const ALIEN_HEIGHT: i32 = 1;
pub const ALIEN_X_DISTANCE: i32 = 5;
pub const ALIEN_Y_DISTANCE: i32 = 2;
pub const ALIEN_X_OFFSET: i32 = 2;
pub const ALIEN_Y_OFFSET: i32 = 2;
pub const ALIEN_MOVE_INTERVAL: u64 = 6;
pub const ALIEN_DROP: i32 = 1;
pub const ALIEN_LASER_SPEED: i32 = 1;
/// 24 frames ≈ 800 ms between enemy shots.
pub const ALIEN_LASER_INTERVAL: u32 = 24;

// ── Bonus target ─────────────────────────────────────────────────────────────

pub const EXTRA_WIDTH: i32 = 5;
pub const EXTRA_SPEED: i32 = 1;
pub const EXTRA_OFFSCREEN: i32 = 2;
pub const EXTRA_FIRST_SPAWN: RangeInclusive<u32> = 20..=40;
pub const EXTRA_RESPAWN: RangeInclusive<u32> = 200..=400;
pub const EXTRA_VALUE: u32 = 500;

// ── Obstacles ────────────────────────────────────────────────────────────────

pub const OBSTACLE_SHAPE: [&str; 3] = [
    " xxxxx ",
    "xxxxxxx",
    "xx   xx",
];
pub const OBSTACLE_AMOUNT: i32 = 4;
/// Top row of every obstacle, counted up from the bottom of the field.
pub const OBSTACLE_RISE: i32 = 7;

// ── Flow ─────────────────────────────────────────────────────────────────────

/// 90 frames ≈ 3 s of "wave cleared" before the next wave.
pub const VICTORY_DELAY: u32 = 90;
