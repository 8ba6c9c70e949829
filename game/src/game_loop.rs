use std::{thread::sleep, time::Duration};

use log::{info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    ai::ai_move,
    game_state::{MatchState, Status, DEFAULT_SCORE_LIMIT},
    input::{self, InputSource},
    render::{draw, RenderSurface},
    simulator::advance_ball,
    GameError,
};

/// roughly 20 ticks per second.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_micros(50_000);

/// who drives the right-hand paddle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlMode {
    /// the ai moves the paddle every tick and the arrow keys can push it as well.
    #[default]
    Dual,
    /// the ai alone; arrow keys are ignored.
    Computer,
    /// a second person on the arrow keys; the ai stays idle.
    TwoPlayer,
}

impl ControlMode {
    pub fn ai_moves_computer(self) -> bool {
        matches!(self, ControlMode::Dual | ControlMode::Computer)
    }

    pub fn keys_move_computer(self) -> bool {
        matches!(self, ControlMode::Dual | ControlMode::TwoPlayer)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub score_limit: u32,
    pub mode: ControlMode,
    pub tick_interval: Duration,
    /// seeds the paddle bounce rng. drawn from os entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_limit: DEFAULT_SCORE_LIMIT,
            mode: ControlMode::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            seed: None,
        }
    }
}

/// owns the match and drives it: render, read one key, ai and physics, sleep.
pub struct GameLoop<R> {
    state: MatchState,
    mode: ControlMode,
    tick_interval: Duration,
    rng: R,
}

impl GameLoop<StdRng> {
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> GameLoop<R> {
    pub fn new(config: &GameConfig, rng: R) -> Self {
        Self {
            state: MatchState::new(config.score_limit),
            mode: config.mode,
            tick_interval: config.tick_interval,
            rng,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// runs a single iteration without sleeping and returns the resulting status.
    pub fn tick<S, I>(&mut self, surface: &mut S, input: &mut I) -> Result<Status, GameError>
    where
        S: RenderSurface + ?Sized,
        I: InputSource + ?Sized,
    {
        draw(&self.state, surface).map_err(GameError::Render)?;
        if let Some(key) = input.poll_key().map_err(GameError::Input)? {
            trace!("key {key:?}");
            input::handle(key, &mut self.state, self.mode);
        }
        if self.state.status == Status::Playing {
            if self.mode.ai_moves_computer() {
                ai_move(&mut self.state);
            }
            advance_ball(&mut self.state, &mut self.rng);
        }
        Ok(self.state.status)
    }

    /// ticks until the quit key is pressed and hands back the final state.
    pub fn run<S, I>(mut self, surface: &mut S, input: &mut I) -> Result<MatchState, GameError>
    where
        S: RenderSurface + ?Sized,
        I: InputSource + ?Sized,
    {
        surface.hide_cursor().map_err(GameError::Render)?;
        info!(
            "starting match: first to {}, {:?} mode, {:?} per tick",
            self.state.score_limit, self.mode, self.tick_interval
        );
        while self.tick(surface, input)? != Status::Quit {
            sleep(self.tick_interval);
        }
        Ok(self.state)
    }
}
