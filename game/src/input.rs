use std::io;

use log::info;

use crate::{
    game_loop::ControlMode,
    game_state::{MatchState, Side, Status},
};

pub const QUIT_KEY: KeyCode = KeyCode::Char('q');
pub const RESTART_KEY: KeyCode = KeyCode::Char('r');

/// a key press, decoded from whatever the terminal reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Up,
    Down,
    Char(char),
    /// ctrl+c. raw mode swallows the signal, so it arrives as a key and quits like `q`.
    Interrupt,
}

/// non-blocking source of key presses.
pub trait InputSource {
    /// returns immediately with `None` when no key is pending.
    fn poll_key(&mut self) -> io::Result<Option<KeyCode>>;
}

/// applies a single key press to the match. keys without a binding are ignored.
pub fn handle(key: KeyCode, state: &mut MatchState, mode: ControlMode) {
    match key {
        QUIT_KEY | KeyCode::Interrupt => {
            info!("quit requested at {} - {}", state.player.score, state.computer.score);
            state.status = Status::Quit;
        }
        RESTART_KEY => {
            if state.status.is_won() {
                state.reset();
            }
        }
        key => {
            for side in [Side::Left, Side::Right] {
                if side == Side::Right && !mode.keys_move_computer() {
                    continue;
                }
                let paddle = state.paddle_mut(side);
                if key == paddle.keys.up {
                    paddle.move_up();
                } else if key == paddle.keys.down {
                    paddle.move_down();
                }
            }
        }
    }
}
