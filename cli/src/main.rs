use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use mineboard_core::*;

use crate::command::{Command, HELP};

mod command;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum PresetArg {
    Beginner,
    Intermediate,
    Expert,
}

impl From<PresetArg> for Preset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Beginner => Preset::Beginner,
            PresetArg::Intermediate => Preset::Intermediate,
            PresetArg::Expert => Preset::Expert,
        }
    }
}

/// Play a round of mines in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Named board size, ignored when a custom size is given
    #[arg(long, value_enum, default_value_t = PresetArg::Beginner)]
    preset: PresetArg,

    /// Custom board width, requires --height and --mines
    #[arg(long, requires_all = ["height", "mines"])]
    width: Option<Coord>,

    #[arg(long, requires_all = ["width", "mines"])]
    height: Option<Coord>,

    #[arg(long, requires_all = ["width", "height"])]
    mines: Option<CellCount>,

    /// Let markers cycle through a question mark
    #[arg(long)]
    question_marks: bool,

    /// Seed for the first game's layout
    #[arg(long)]
    seed: Option<u64>,

    /// Show every cell's content (debug view)
    #[arg(long)]
    show_mines: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        match (self.width, self.height, self.mines) {
            (Some(width), Some(height), Some(mines)) => {
                Settings::custom(width, height, mines, self.question_marks)
            }
            _ => Ok(Settings::preset(self.preset.into(), self.question_marks)),
        }
    }
}

struct Session {
    settings: Settings,
    show_mines: bool,
    board: Board,
    started_at: Option<Instant>,
    elapsed_secs: u64,
}

impl Session {
    fn new(settings: Settings, seed: Option<u64>, show_mines: bool) -> Result<Self> {
        let board = Self::new_board(&settings, seed, show_mines)?;
        Ok(Self {
            settings,
            show_mines,
            board,
            started_at: None,
            elapsed_secs: 0,
        })
    }

    fn new_board(settings: &Settings, seed: Option<u64>, show_mines: bool) -> Result<Board> {
        let mut board = match seed {
            Some(seed) => {
                settings.validate()?;
                Board::generate(
                    settings.game_config(),
                    settings.question_marks,
                    RandomMinefieldGenerator::new(seed),
                )?
            }
            None => Board::from_settings(settings)?,
        };
        board.set_show_contents(show_mines);
        Ok(board)
    }

    fn restart(&mut self) -> Result<()> {
        self.board = Self::new_board(&self.settings, None, self.show_mines)?;
        self.started_at = None;
        self.elapsed_secs = 0;
        Ok(())
    }

    /// The timer runs from the first reveal until the game ends.
    fn tick(&mut self) {
        match self.board.state() {
            GameState::NewGame => {}
            GameState::InProgress => {
                let started_at = *self.started_at.get_or_insert_with(Instant::now);
                self.elapsed_secs = started_at.elapsed().as_secs();
            }
            GameState::Win | GameState::Lose | GameState::Stopped => {
                if let Some(started_at) = self.started_at.take() {
                    self.elapsed_secs = started_at.elapsed().as_secs();
                }
            }
        }
    }

    fn apply(&mut self, command: Command) -> Result<Option<Outcome>> {
        let outcome = match command {
            Command::Reveal(coords) => Some(self.board.reveal(coords)?),
            Command::Chord(coords) => Some(self.board.chord_reveal(coords)?),
            Command::Mark(coords) => {
                self.board.toggle_marker(coords)?;
                None
            }
            Command::NewGame => {
                self.restart()?;
                None
            }
            Command::Help | Command::Quit => None,
        };
        self.tick();
        Ok(outcome)
    }

    fn report(&self, outcome: &Outcome) {
        match outcome.state {
            GameState::Win => {
                let rate = f64::from(self.board.difficulty()) / self.elapsed_secs.max(1) as f64;
                println!(
                    "You won in {}s, 3BV {} ({:.2} 3BV/s). Any move to continue.",
                    self.elapsed_secs,
                    self.board.difficulty(),
                    rate
                );
            }
            GameState::Lose => {
                println!(
                    "Boom at {:?} after {}s.",
                    outcome.bombed_mines.as_slice(),
                    self.elapsed_secs
                );
                if !outcome.wrong_flags.is_empty() {
                    println!("Wrong flags: {:?}", outcome.wrong_flags.as_slice());
                }
            }
            GameState::Stopped => println!("Game over, `n` starts a new one."),
            GameState::NewGame | GameState::InProgress => {}
        }
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn log_builder(verbose: &Verbosity<WarnLevel>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(verbose.log_level_filter())
        .target(env_logger::Target::Stderr);
    builder
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log_builder(&args.verbose).init();

    let settings = args.settings().context("invalid board settings")?;
    let mut session = Session::new(settings, args.seed, args.show_mines)?;
    log::info!("Starting with {:?}", settings);

    println!("{HELP}");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\n{}", render::board(&session.board));
        println!("{}", render::status(&session.board, session.elapsed_secs));
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            command => match session.apply(command) {
                Ok(Some(outcome)) => session.report(&outcome),
                Ok(None) => {}
                Err(err) => println!("{err}"),
            },
        }
    }

    Ok(())
}
