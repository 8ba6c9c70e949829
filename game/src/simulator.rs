use log::{debug, info};
use rand::Rng;

use crate::game_state::{Ball, MatchState, Status, GAME_HEIGHT, GAME_WIDTH};

/// advances the ball one cell along its direction and applies, in order: wall bounce, paddle
/// bounce, scoring and the win check. does nothing unless the match is being played.
pub fn advance_ball<R: Rng + ?Sized>(state: &mut MatchState, rng: &mut R) {
    if state.status != Status::Playing {
        return;
    }
    let ball = &mut state.ball;
    ball.x += ball.dir_x;
    ball.y += ball.dir_y;

    if ball.y <= 1 || ball.y >= GAME_HEIGHT - 2 {
        ball.dir_y = -ball.dir_y;
    }

    if state.player.deflects(ball) || state.computer.deflects(ball) {
        ball.dir_x = -ball.dir_x;
        ball.dir_y = deflect_dir_y(ball.dir_y, rng.gen_range(-1..=1));
        debug!("paddle bounce at ({}, {}), dir_y now {}", ball.x, ball.y, ball.dir_y);
    }

    // a re-serve discards whatever bounce happened this tick.
    if ball.x <= 0 {
        state.computer.score += 1;
        *ball = Ball::serve(1);
        debug!(
            "computer scored: {} - {}",
            state.player.score, state.computer.score
        );
    } else if ball.x >= GAME_WIDTH - 1 {
        state.player.score += 1;
        *ball = Ball::serve(-1);
        debug!(
            "player scored: {} - {}",
            state.player.score, state.computer.score
        );
    }

    if state.player.score >= state.score_limit {
        state.status = Status::PlayerWon;
    } else if state.computer.score >= state.score_limit {
        state.status = Status::ComputerWon;
    }
    if state.status != Status::Playing {
        info!(
            "match over ({:?}) at {} - {}",
            state.status, state.player.score, state.computer.score
        );
    }
}

/// nudges the vertical direction after a paddle bounce, keeping it within one cell per tick and
/// never letting the ball travel purely horizontally.
pub fn deflect_dir_y(dir_y: i16, nudge: i16) -> i16 {
    match (dir_y + nudge).clamp(-1, 1) {
        0 => 1,
        dir_y => dir_y,
    }
}
