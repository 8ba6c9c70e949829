use std::{error::Error, fmt::Display, io};

pub mod ai;
pub mod game_loop;
pub mod game_state;
pub mod input;
pub mod render;
pub mod simulator;

#[cfg(test)]
mod testing;

pub use game_loop::{ControlMode, GameConfig, GameLoop};
pub use game_state::{Ball, MatchState, Paddle, Side, Status};
pub use input::{InputSource, KeyCode};
pub use render::RenderSurface;

/// failures surfaced by the external collaborators. the game rules themselves never fail.
#[derive(Debug)]
pub enum GameError {
    Render(io::Error),
    Input(io::Error),
}

impl Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Render(err) => write!(f, "failed to render frame: {err}"),
            GameError::Input(err) => write!(f, "failed to read input: {err}"),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::Render(source) | GameError::Input(source) => Some(source),
        }
    }
}
