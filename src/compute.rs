//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG and log output.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::*;
use crate::entities::{
    Alien, AlienColor, Block, Controls, Direction, Extra, GameState, GameStatus, Laser, Player,
    Rect, Side, Sprite,
};

// ── Score table ──────────────────────────────────────────────────────────────

/// Score awarded per alien destroyed.
pub fn score_for(color: AlienColor) -> u32 {
    match color {
        AlienColor::Red => 100,
        AlienColor::Green => 200,
        AlienColor::Yellow => 300,
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Lay out the alien formation: yellow front-most row, two green rows, red
/// for the rest.
pub fn alien_setup(rows: usize, cols: usize) -> Vec<Alien> {
    let mut aliens = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let color = match row {
            0 => AlienColor::Yellow,
            1 | 2 => AlienColor::Green,
            _ => AlienColor::Red,
        };
        for col in 0..cols {
            let x = col as i32 * ALIEN_X_DISTANCE + ALIEN_X_OFFSET;
            let y = row as i32 * ALIEN_Y_DISTANCE + ALIEN_Y_OFFSET;
            aliens.push(Alien {
                rect: Rect::new(x, y, ALIEN_WIDTH, ALIEN_HEIGHT),
                color,
            });
        }
    }
    aliens
}

/// One obstacle: a block for every `x` in `OBSTACLE_SHAPE`.
pub fn create_obstacle(x_start: i32, y_start: i32, offset_x: i32) -> Vec<Block> {
    OBSTACLE_SHAPE
        .iter()
        .enumerate()
        .flat_map(|(row_index, row)| {
            row.chars()
                .enumerate()
                .filter(|&(_, cell)| cell == 'x')
                .map(move |(col_index, _)| Block {
                    rect: Rect::new(
                        x_start + col_index as i32 + offset_x,
                        y_start + row_index as i32,
                        1,
                        1,
                    ),
                })
        })
        .collect()
}

pub fn create_multiple_obstacles(offsets: &[i32], x_start: i32, y_start: i32) -> Vec<Block> {
    offsets
        .iter()
        .flat_map(|&offset_x| create_obstacle(x_start, y_start, offset_x))
        .collect()
}

/// Evenly spaced obstacle offsets across the field.
pub fn obstacle_x_positions(width: u16) -> Vec<i32> {
    let spacing = width as i32 / OBSTACLE_AMOUNT;
    (0..OBSTACLE_AMOUNT).map(|n| n * spacing).collect()
}

/// A bonus target just outside the given edge, heading across the field.
pub fn spawn_extra(side: Side, width: u16) -> Extra {
    let (x, speed) = match side {
        Side::Right => (width as i32 + EXTRA_OFFSCREEN, -EXTRA_SPEED),
        Side::Left => (-EXTRA_WIDTH - EXTRA_OFFSCREEN, EXTRA_SPEED),
    };
    Extra {
        rect: Rect::new(x, 0, EXTRA_WIDTH, 1),
        speed,
    }
}

/// Build the initial game state for a play field of the given size.
pub fn init_state(width: u16, height: u16, high_score: u32, rng: &mut impl Rng) -> GameState {
    let w = width as i32;
    let h = height as i32;
    GameState {
        player: Player {
            rect: Rect::new(
                w / 2 - PLAYER_WIDTH / 2,
                h - PLAYER_HEIGHT,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            lives: STARTING_LIVES,
            ready: true,
            laser_time: 0,
            lasers: Vec::new(),
        },
        aliens: alien_setup(ALIEN_ROWS, ALIEN_COLS),
        alien_direction: Direction::Right,
        alien_lasers: Vec::new(),
        blocks: create_multiple_obstacles(&obstacle_x_positions(width), w / 15, h - OBSTACLE_RISE),
        extra: None,
        extra_spawn_time: rng.gen_range(EXTRA_FIRST_SPAWN),
        alien_laser_timer: ALIEN_LASER_INTERVAL,
        score: 0,
        high_score,
        wave: 1,
        status: GameStatus::Running,
        frame: 0,
        width,
        height,
    }
}

/// Fresh board after a cleared wave.  Score and high score carry over.
pub fn next_wave(state: &GameState, rng: &mut impl Rng) -> GameState {
    let fresh = init_state(state.width, state.height, state.high_score, rng);
    info!("wave {} starting with score {}", state.wave + 1, state.score);
    GameState {
        score: state.score,
        wave: state.wave + 1,
        ..fresh
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let mut next = state.clone();
    shift_player(&mut next.player, -PLAYER_SPEED, state.width as i32);
    next
}

pub fn move_player_right(state: &GameState) -> GameState {
    let mut next = state.clone();
    shift_player(&mut next.player, PLAYER_SPEED, state.width as i32);
    next
}

/// Fire a laser if the cannon has recharged.
pub fn player_shoot(state: &GameState) -> GameState {
    let mut next = state.clone();
    fire_player_laser(&mut next.player, state.frame);
    next
}

pub fn recharge(state: &GameState) -> GameState {
    let mut next = state.clone();
    recharge_player_laser(&mut next.player, state.frame);
    next
}

/// Running ↔ Paused.  Other statuses are left alone.
pub fn toggle_pause(state: &GameState) -> GameState {
    let status = match state.status {
        GameStatus::Running => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Running,
        other => other,
    };
    GameState {
        status,
        ..state.clone()
    }
}

fn shift_player(player: &mut Player, dx: i32, width: i32) {
    let max_x = (width - player.rect.w).max(0);
    player.rect.x = (player.rect.x + dx).clamp(0, max_x);
}

fn fire_player_laser(player: &mut Player, frame: u64) {
    if !player.ready {
        return;
    }
    player.lasers.push(Laser {
        rect: Rect::new(player.rect.center_x(), player.rect.top() - 1, 1, 1),
        speed: PLAYER_LASER_SPEED,
    });
    player.ready = false;
    player.laser_time = frame;
}

fn recharge_player_laser(player: &mut Player, frame: u64) {
    if !player.ready && frame.saturating_sub(player.laser_time) >= LASER_COOLDOWN {
        player.ready = true;
    }
}

// ── Enemy behaviour ─────────────────────────────────────────────────────────

/// A random alien drops a laser.  No-op on an empty board.
pub fn alien_shoot(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    fire_alien_laser(&mut next, rng);
    next
}

fn fire_alien_laser(state: &mut GameState, rng: &mut impl Rng) {
    let laser = state.aliens.choose(rng).map(|alien| Laser {
        rect: Rect::new(alien.rect.center_x(), alien.rect.bottom(), 1, 1),
        speed: ALIEN_LASER_SPEED,
    });
    if let Some(laser) = laser {
        state.alien_lasers.push(laser);
    }
}

/// Move the formation one cell; reverse and drop when it reaches the edge it
/// is heading for.
fn step_formation(state: &mut GameState) {
    let dx = state.alien_direction.step();
    for alien in &mut state.aliens {
        alien.rect.x += dx;
    }

    let width = state.width as i32;
    let at_edge = match state.alien_direction {
        Direction::Right => state.aliens.iter().any(|a| a.rect.right() >= width),
        Direction::Left => state.aliens.iter().any(|a| a.rect.left() <= 0),
    };
    if at_edge {
        state.alien_direction = match state.alien_direction {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        };
        for alien in &mut state.aliens {
            alien.rect.y += ALIEN_DROP;
        }
        debug!("formation reversed to {:?}", state.alien_direction);
    }
}

fn extra_alien_timer(state: &mut GameState, rng: &mut impl Rng) {
    state.extra_spawn_time = state.extra_spawn_time.saturating_sub(1);
    if state.extra_spawn_time == 0 {
        let side = if rng.gen_bool(0.5) { Side::Right } else { Side::Left };
        state.extra = Some(spawn_extra(side, state.width));
        state.extra_spawn_time = rng.gen_range(EXTRA_RESPAWN);
        debug!("bonus target entering from {:?}", side);
    }
}

fn advance_extra(state: &mut GameState) {
    let width = state.width as i32;
    state.extra = state.extra.take().and_then(|mut extra| {
        extra.rect.x += extra.speed;
        let gone = if extra.speed < 0 {
            extra.rect.right() <= 0
        } else {
            extra.rect.left() >= width
        };
        if gone {
            None
        } else {
            Some(extra)
        }
    });
}

fn advance_lasers(lasers: &mut Vec<Laser>, height: i32) {
    for laser in lasers.iter_mut() {
        laser.rect.y += laser.speed;
    }
    lasers.retain(|l| l.rect.top() >= 0 && l.rect.top() < height);
}

// ── Collisions ──────────────────────────────────────────────────────────────

/// Remove and return every sprite in `group` that overlaps `target`.
fn sprite_collide<T: Sprite>(target: &Rect, group: &mut Vec<T>) -> Vec<T> {
    let (hit, kept): (Vec<T>, Vec<T>) = std::mem::take(group)
        .into_iter()
        .partition(|s| s.rect().intersects(target));
    *group = kept;
    hit
}

/// Resolve every laser, alien, block and player overlap for the current
/// positions.
pub fn collision_checks(state: &GameState) -> GameState {
    let mut next = state.clone();
    resolve_collisions(&mut next);
    next
}

/// Cells a laser covered during its last move.  Aliens drop after lasers
/// advance, so checking only the end cell would let the two swap rows.
fn swept(laser: &Laser) -> Rect {
    let r = laser.rect;
    if laser.speed < 0 {
        Rect::new(r.x, r.y, r.w, r.h - laser.speed)
    } else {
        Rect::new(r.x, r.y - laser.speed, r.w, r.h + laser.speed)
    }
}

fn resolve_collisions(state: &mut GameState) {
    // Player lasers: blocks, aliens and the bonus target are all checked
    // against the same position, so a laser can clear several in one frame.
    for laser in std::mem::take(&mut state.player.lasers) {
        let hitbox = swept(&laser);
        let mut spent = !sprite_collide(&hitbox, &mut state.blocks).is_empty();

        let aliens_hit = sprite_collide(&hitbox, &mut state.aliens);
        if !aliens_hit.is_empty() {
            state.score += aliens_hit.iter().map(|a| score_for(a.color)).sum::<u32>();
            spent = true;
        }

        if state
            .extra
            .as_ref()
            .is_some_and(|extra| extra.rect.intersects(&hitbox))
        {
            state.extra = None;
            state.score += EXTRA_VALUE;
            spent = true;
        }

        if !spent {
            state.player.lasers.push(laser);
        }
    }

    // Alien lasers
    for laser in std::mem::take(&mut state.alien_lasers) {
        let mut spent = !sprite_collide(&laser.rect, &mut state.blocks).is_empty();

        if laser.rect.intersects(&state.player.rect) {
            state.player.lives = state.player.lives.saturating_sub(1);
            spent = true;
        }

        if !spent {
            state.alien_lasers.push(laser);
        }
    }

    // Aliens plough through obstacles; touching the player or reaching its
    // row ends the game outright.
    let player = state.player.rect;
    for alien in &state.aliens {
        sprite_collide(&alien.rect, &mut state.blocks);
    }
    if state
        .aliens
        .iter()
        .any(|a| a.rect.intersects(&player) || a.rect.bottom() > player.top())
    {
        state.player.lives = 0;
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &GameState, controls: &Controls, rng: &mut impl Rng) -> GameState {
    match state.status {
        GameStatus::Paused | GameStatus::GameOver => return state.clone(),
        GameStatus::Victory(frames_left) if frames_left <= 1 => return next_wave(state, rng),
        GameStatus::Victory(frames_left) => {
            return GameState {
                status: GameStatus::Victory(frames_left - 1),
                ..state.clone()
            };
        }
        GameStatus::Running => {}
    }

    let mut next = state.clone();
    next.frame += 1;
    let width = next.width as i32;
    let height = next.height as i32;

    // ── 1. Enemy fire timer ──────────────────────────────────────────────────
    next.alien_laser_timer = next.alien_laser_timer.saturating_sub(1);
    if next.alien_laser_timer == 0 {
        fire_alien_laser(&mut next, rng);
        next.alien_laser_timer = ALIEN_LASER_INTERVAL;
    }

    // ── 2. Player ────────────────────────────────────────────────────────────
    if controls.right {
        shift_player(&mut next.player, PLAYER_SPEED, width);
    } else if controls.left {
        shift_player(&mut next.player, -PLAYER_SPEED, width);
    }
    if controls.fire {
        fire_player_laser(&mut next.player, next.frame);
    }
    recharge_player_laser(&mut next.player, next.frame);
    advance_lasers(&mut next.player.lasers, height);

    // ── 3. Projectiles and bonus target ──────────────────────────────────────
    advance_lasers(&mut next.alien_lasers, height);
    advance_extra(&mut next);

    // ── 4. Formation ─────────────────────────────────────────────────────────
    if next.frame % ALIEN_MOVE_INTERVAL == 0 {
        step_formation(&mut next);
    }
    extra_alien_timer(&mut next, rng);

    // ── 5. Collisions ────────────────────────────────────────────────────────
    resolve_collisions(&mut next);

    // ── 6. Score & status ────────────────────────────────────────────────────
    next.high_score = next.high_score.max(next.score);
    if next.player.lives == 0 {
        info!("game over on wave {} with score {}", next.wave, next.score);
        next.status = GameStatus::GameOver;
    } else if next.aliens.is_empty() {
        info!("wave {} cleared with score {}", next.wave, next.score);
        next.status = GameStatus::Victory(VICTORY_DELAY);
    }

    next
}
