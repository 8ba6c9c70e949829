use crate::game_state::MatchState;

/// greedily moves the computer paddle one cell towards the ball's row.
pub fn ai_move(state: &mut MatchState) {
    let target = state.ball.y;
    let paddle = &mut state.computer;
    if target > paddle.center() && paddle.can_move_down() {
        paddle.move_down();
    } else if target < paddle.center() && paddle.can_move_up() {
        paddle.move_up();
    }
}
