use std::io;

use crate::game_state::{MatchState, Paddle, Status, GAME_HEIGHT, GAME_WIDTH, PADDLE_HEIGHT};

const BORDER: char = '-';
const PADDLE: char = '|';
const BALL: char = 'O';

/// a character grid at least `GAME_WIDTH` x `GAME_HEIGHT` cells in size.
pub trait RenderSurface {
    fn clear(&mut self) -> io::Result<()>;
    fn write_char(&mut self, row: u16, col: u16, ch: char) -> io::Result<()>;
    fn write_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()>;
    /// flushes everything written since the last `clear` to the screen.
    fn present(&mut self) -> io::Result<()>;
    fn hide_cursor(&mut self) -> io::Result<()>;
}

/// draws one complete frame of the match.
pub fn draw<S: RenderSurface + ?Sized>(state: &MatchState, surface: &mut S) -> io::Result<()> {
    surface.clear()?;
    for col in 0..GAME_WIDTH {
        put(surface, 0, col, BORDER)?;
        put(surface, GAME_HEIGHT - 1, col, BORDER)?;
    }
    draw_paddle(surface, &state.player)?;
    draw_paddle(surface, &state.computer)?;
    put(surface, state.ball.y, state.ball.x, BALL)?;

    let scores = format!(
        "Player: {}  CPU: {}",
        state.player.score, state.computer.score
    );
    surface.write_text(1, (GAME_WIDTH / 2 - 5) as u16, &scores)?;

    let winner = match state.status {
        Status::PlayerWon => Some("PLAYER"),
        Status::ComputerWon => Some("CPU"),
        Status::Playing | Status::Quit => None,
    };
    if let Some(winner) = winner {
        let row = (GAME_HEIGHT / 2) as u16;
        surface.write_text(
            row,
            (GAME_WIDTH / 2 - 10) as u16,
            &format!("GAME OVER - {winner} WINS!"),
        )?;
        surface.write_text(
            row + 1,
            (GAME_WIDTH / 2 - 15) as u16,
            "Press 'q' to quit or 'r' to restart",
        )?;
    }
    surface.present()
}

fn draw_paddle<S: RenderSurface + ?Sized>(surface: &mut S, paddle: &Paddle) -> io::Result<()> {
    for i in 0..PADDLE_HEIGHT {
        put(surface, paddle.y + i, paddle.x, PADDLE)?;
    }
    Ok(())
}

/// cells outside the board are skipped rather than wrapped.
fn put<S: RenderSurface + ?Sized>(surface: &mut S, row: i16, col: i16, ch: char) -> io::Result<()> {
    match (u16::try_from(row), u16::try_from(col)) {
        (Ok(row), Ok(col)) if row < GAME_HEIGHT as u16 && col < GAME_WIDTH as u16 => {
            surface.write_char(row, col, ch)
        }
        _ => Ok(()),
    }
}
