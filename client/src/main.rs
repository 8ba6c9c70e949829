use std::error::Error;

use clap::{Parser, ValueEnum};
use game::{ControlMode, GameConfig, GameLoop, Status};
use log::info;
use terminal::{Keyboard, Terminal};

mod terminal;

/// terminal pong against a simple computer opponent.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// points needed to win a match
    #[arg(long, default_value_t = game::game_state::DEFAULT_SCORE_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    score_limit: u32,
    /// who controls the right-hand paddle
    #[arg(long, value_enum, default_value_t = Mode::Dual)]
    mode: Mode,
    /// seed for the paddle bounce randomness
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// the computer plays the right paddle and the arrow keys can nudge it
    Dual,
    /// the computer alone plays the right paddle
    Computer,
    /// a second player uses the arrow keys
    TwoPlayer,
}

impl From<Mode> for ControlMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Dual => ControlMode::Dual,
            Mode::Computer => ControlMode::Computer,
            Mode::TwoPlayer => ControlMode::TwoPlayer,
        }
    }
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        GameConfig {
            score_limit: cli.score_limit,
            mode: cli.mode.into(),
            seed: cli.seed,
            ..GameConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = GameConfig::from(Cli::parse());
    let game_loop = GameLoop::from_config(&config);
    let final_state = {
        let mut terminal = Terminal::new()?;
        game_loop.run(&mut terminal, &mut Keyboard)?
    };
    debug_assert_eq!(final_state.status, Status::Quit);
    info!(
        "quit at player {} - cpu {}",
        final_state.player.score, final_state.computer.score
    );
    println!(
        "player {} - {} cpu",
        final_state.player.score, final_state.computer.score
    );
    Ok(())
}
