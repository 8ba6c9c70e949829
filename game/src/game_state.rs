use log::info;

use crate::input::KeyCode;

pub const GAME_HEIGHT: i16 = 24;
pub const GAME_WIDTH: i16 = 80;
pub const PADDLE_HEIGHT: i16 = 4;
pub const DEFAULT_SCORE_LIMIT: u32 = 10;

/// column of the human paddle. the ball bounces off it in the column to its right.
pub const PLAYER_PADDLE_X: i16 = 2;
/// column of the computer paddle. the ball bounces off it in the column to its left.
pub const COMPUTER_PADDLE_X: i16 = GAME_WIDTH - 3;

const _CHECKS: () = {
    assert!(
        PADDLE_HEIGHT + 2 < GAME_HEIGHT,
        "paddles must fit between the top and bottom border rows"
    );
    assert!(
        PLAYER_PADDLE_X + 1 < COMPUTER_PADDLE_X - 1,
        "the paddles' hit columns must not overlap"
    );
    assert!(
        PLAYER_PADDLE_X > 1,
        "the ball must be able to pass behind the left paddle to score"
    );
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    PlayerWon,
    ComputerWon,
    Quit,
}

impl Status {
    /// a won match is paused until restarted, but the process keeps running.
    pub fn is_won(self) -> bool {
        matches!(self, Status::PlayerWon | Status::ComputerWon)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaddleKeys {
    pub up: KeyCode,
    pub down: KeyCode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub x: i16,
    /// row of the paddle's top cell.
    pub y: i16,
    pub score: u32,
    pub keys: PaddleKeys,
}

impl Paddle {
    fn new(side: Side) -> Self {
        let (x, keys) = match side {
            Side::Left => (
                PLAYER_PADDLE_X,
                PaddleKeys {
                    up: KeyCode::Char('w'),
                    down: KeyCode::Char('s'),
                },
            ),
            Side::Right => (
                COMPUTER_PADDLE_X,
                PaddleKeys {
                    up: KeyCode::Up,
                    down: KeyCode::Down,
                },
            ),
        };
        Self {
            side,
            x,
            y: GAME_HEIGHT / 2 - PADDLE_HEIGHT / 2,
            score: 0,
            keys,
        }
    }

    pub fn center(&self) -> i16 {
        self.y + PADDLE_HEIGHT / 2
    }

    pub fn can_move_up(&self) -> bool {
        self.y > 1
    }

    pub fn can_move_down(&self) -> bool {
        self.y + PADDLE_HEIGHT < GAME_HEIGHT - 1
    }

    /// returns whether the paddle moved.
    pub fn move_up(&mut self) -> bool {
        if self.can_move_up() {
            self.y -= 1;
            true
        } else {
            false
        }
    }

    /// returns whether the paddle moved.
    pub fn move_down(&mut self) -> bool {
        if self.can_move_down() {
            self.y += 1;
            true
        } else {
            false
        }
    }

    /// the column directly in front of the paddle's face.
    pub fn hit_column(&self) -> i16 {
        match self.side {
            Side::Left => self.x + 1,
            Side::Right => self.x - 1,
        }
    }

    pub fn covers_row(&self, row: i16) -> bool {
        row >= self.y && row < self.y + PADDLE_HEIGHT
    }

    pub fn deflects(&self, ball: &Ball) -> bool {
        ball.x == self.hit_column() && self.covers_row(ball.y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ball {
    pub x: i16,
    pub y: i16,
    pub dir_x: i16,
    pub dir_y: i16,
}

impl Ball {
    /// a ball in the middle of the board heading down and horizontally towards `dir_x`.
    pub fn serve(dir_x: i16) -> Self {
        Self {
            x: GAME_WIDTH / 2,
            y: GAME_HEIGHT / 2,
            dir_x,
            dir_y: 1,
        }
    }
}

/// everything a single match needs. owned by the game loop and passed explicitly to each step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchState {
    /// the human paddle on the left.
    pub player: Paddle,
    /// the computer paddle on the right.
    pub computer: Paddle,
    pub ball: Ball,
    pub status: Status,
    pub score_limit: u32,
}

impl MatchState {
    pub fn new(score_limit: u32) -> Self {
        Self {
            player: Paddle::new(Side::Left),
            computer: Paddle::new(Side::Right),
            ball: Ball::serve(-1),
            status: Status::Playing,
            score_limit,
        }
    }

    /// re-centers everything and starts a fresh match with the same score limit.
    pub fn reset(&mut self) {
        *self = Self::new(self.score_limit);
        info!("match reset, first to {} wins", self.score_limit);
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.player,
            Side::Right => &mut self.computer,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_LIMIT)
    }
}
