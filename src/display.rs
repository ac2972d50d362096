//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! state into terminal commands.
//!
//! Screen layout: HUD on row 0, border on rows 1 and `height + 2`, the play
//! field in between (offset by `FIELD_LEFT`/`FIELD_TOP`), controls hint on
//! the last row.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_invaders::entities::{Alien, AlienColor, GameState, GameStatus, Laser};

const FIELD_LEFT: i32 = 1;
const FIELD_TOP: i32 = 2;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_WAVE: Color = Color::Cyan;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ALIEN_YELLOW: Color = Color::Yellow;
const C_ALIEN_GREEN: Color = Color::Green;
const C_ALIEN_RED: Color = Color::Red;
const C_EXTRA: Color = Color::Magenta;
const C_BLOCK: Color = Color::Rgb { r: 241, g: 79, b: 80 };
const C_LASER_PLAYER: Color = Color::Cyan;
const C_LASER_ALIEN: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

pub const CONTROLS_HINT: &str = "← → / A D Move  SPACE Shoot  ESC Pause  Q Quit";

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, state)?;
    draw_hud(out, state)?;

    for block in &state.blocks {
        put(out, state, block.rect.x, block.rect.y, "█", C_BLOCK)?;
    }
    for alien in &state.aliens {
        draw_alien(out, state, alien)?;
    }
    if let Some(extra) = &state.extra {
        put(out, state, extra.rect.x, extra.rect.y, "<=O=>", C_EXTRA)?;
    }
    for laser in &state.player.lasers {
        draw_laser(out, state, laser, "║", C_LASER_PLAYER)?;
    }
    for laser in &state.alien_lasers {
        draw_laser(out, state, laser, "↓", C_LASER_ALIEN)?;
    }

    draw_player(out, state)?;
    draw_controls_hint(out, state)?;

    match state.status {
        GameStatus::Running => {}
        GameStatus::Paused => draw_paused(out, state)?,
        GameStatus::GameOver => draw_game_over(out, state)?,
        GameStatus::Victory(_) => draw_victory(out, state)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen_height(state).saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn screen_width(state: &GameState) -> u16 {
    state.width + 2
}

fn screen_height(state: &GameState) -> u16 {
    state.height + 4
}

/// Print `text` at a field position, dropping characters outside the field.
fn put<W: Write>(
    out: &mut W,
    state: &GameState,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    if y < 0 || y >= state.height as i32 {
        return Ok(());
    }
    out.queue(style::SetForegroundColor(color))?;
    for (i, ch) in text.chars().enumerate() {
        let col = x + i as i32;
        if col < 0 || col >= state.width as i32 {
            continue;
        }
        out.queue(cursor::MoveTo((col + FIELD_LEFT) as u16, (y + FIELD_TOP) as u16))?;
        out.queue(Print(ch))?;
    }
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let w = screen_width(state) as usize;
    let bottom = screen_height(state).saturating_sub(2);

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(screen_width(state).saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

struct Hud {
    score: String,
    wave: String,
    lives: String,
}

fn hud_text(state: &GameState) -> Hud {
    Hud {
        score: format!("Score:{:>6} Best:{:>6}", state.score, state.high_score),
        wave: format!("Wave {}", state.wave),
        lives: format!("Lives: {}", "♥".repeat(state.player.lives as usize)),
    }
}

/// Columns of the wave and lives labels.  The wave label is centred but
/// pushed right of the score text on narrow screens.
fn hud_columns(screen_width: u16, hud: &Hud) -> (u16, u16) {
    let score_end = 1 + hud.score.chars().count() as u16;
    let centred = (screen_width / 2).saturating_sub(hud.wave.chars().count() as u16 / 2);
    let wave_x = centred.max(score_end + 2);
    let lives_x = screen_width.saturating_sub(hud.lives.chars().count() as u16 + 1);
    (wave_x, lives_x)
}

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let hud = hud_text(state);
    let (wave_x, lives_x) = hud_columns(screen_width(state), &hud);

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&hud.score))?;

    out.queue(cursor::MoveTo(wave_x, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_WAVE))?;
    out.queue(Print(&hud.wave))?;

    out.queue(cursor::MoveTo(lives_x, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&hud.lives))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //   ▲       ← tip
    //  /|\      ← wings + fuselage
    let p = &state.player.rect;
    put(out, state, p.center_x(), p.top(), "▲", C_PLAYER)?;
    put(out, state, p.left(), p.top() + 1, "/|\\", C_PLAYER)?;
    Ok(())
}

fn draw_alien<W: Write>(out: &mut W, state: &GameState, alien: &Alien) -> std::io::Result<()> {
    let (sprite, color) = match alien.color {
        AlienColor::Yellow => ("{◆}", C_ALIEN_YELLOW),
        AlienColor::Green => ("<▼>", C_ALIEN_GREEN),
        AlienColor::Red => ("(◉)", C_ALIEN_RED),
    };
    put(out, state, alien.rect.x, alien.rect.y, sprite, color)
}

fn draw_laser<W: Write>(
    out: &mut W,
    state: &GameState,
    laser: &Laser,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    put(out, state, laser.rect.x, laser.rect.y, glyph, color)
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, screen_height(state).saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(CONTROLS_HINT))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

/// Centre a stack of coloured lines on the screen.
fn draw_banner<W: Write>(
    out: &mut W,
    state: &GameState,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = screen_width(state) / 2;
    let start_row = (screen_height(state) / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}

fn draw_paused<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    draw_banner(
        out,
        state,
        &[
            ("╔══════════════════╗", Color::Cyan),
            ("║      PAUSED      ║", Color::Cyan),
            ("╚══════════════════╝", Color::Cyan),
            ("ESC - Resume  Q - Quit", Color::White),
        ],
    )
}

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    let best_line = format!("High Score: {}", state.high_score);
    draw_banner(
        out,
        state,
        &[
            ("╔══════════════════╗", Color::Red),
            ("║    GAME  OVER    ║", Color::Red),
            ("╚══════════════════╝", Color::Red),
            (score_line.as_str(), Color::Yellow),
            (best_line.as_str(), Color::Yellow),
            ("R - Play Again  Q - Quit", Color::White),
        ],
    )
}

fn draw_victory<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let cleared_line = format!("WAVE {} CLEARED", state.wave);
    let score_line = format!("Score carried over: {}", state.score);
    draw_banner(
        out,
        state,
        &[
            (cleared_line.as_str(), Color::Green),
            (score_line.as_str(), Color::Yellow),
        ],
    )
}
