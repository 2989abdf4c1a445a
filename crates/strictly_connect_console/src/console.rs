//! Line-oriented game loop and self-play runner.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use std::time::Duration;
use strictly_connect::{Config, GameEngine, GameState, Mark, MovePolicy, Position};
use tracing::{debug, info, instrument};

const HUMAN: Mark = Mark::PlayerA;
const COMPUTER: Mark = Mark::PlayerB;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark here.
    Move(Position),
    /// Throw the game away and start over.
    Restart,
    /// Leave.
    Quit,
}

/// Parses a flattened index, a `row col` pair, `r` or `q`.
///
/// Range checks are left to the engine so its error reaches the user.
pub fn parse_input(line: &str, side: usize) -> Option<Input> {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "q" | "quit" => return Some(Input::Quit),
        "r" | "restart" => return Some(Input::Restart),
        _ => {}
    }

    let numbers: Vec<usize> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    match numbers.as_slice() {
        [index] => Some(Input::Move(Position::from_index(*index, side))),
        [row, col] => Some(Input::Move(Position::new(*row, *col))),
        _ => None,
    }
}

fn outcome_message(state: GameState) -> &'static str {
    match state {
        GameState::Win(mark) if mark == HUMAN => "You (X) win!",
        GameState::Win(_) => "Computer (O) wins!",
        GameState::Draw => "Draw!",
        GameState::Ongoing => "Your turn (X)",
    }
}

/// Human (X) against `policy` (O), reading moves from `input`.
///
/// Returns when the user quits or `input` runs out.
#[instrument(skip(policy, input, output), fields(side = config.side(), win_length = config.win_length()))]
pub fn play<P, R, W>(
    config: Config,
    mut policy: P,
    delay: Duration,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    P: MovePolicy,
    R: BufRead,
    W: Write,
{
    let mut game = GameEngine::from_config(config);
    let side = config.side();
    writeln!(
        output,
        "{}x{} board, {} in a row wins. Enter an index (0-{}), `row col`, r to restart or q to quit.",
        side,
        side,
        config.win_length(),
        config.cell_count() - 1
    )?;

    loop {
        writeln!(output, "\n{}\n{}", game.board(), outcome_message(game.current_state()))?;
        if let Some(line) = game.winning_line() {
            let cells: Vec<String> = line.cells().iter().map(ToString::to_string).collect();
            writeln!(output, "Winning line: {}", cells.join(" "))?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(());
        }

        let position = match parse_input(&line, side) {
            Some(Input::Quit) => return Ok(()),
            Some(Input::Restart) => {
                info!("Restarting game");
                game = game.restart();
                continue;
            }
            Some(Input::Move(position)) => position,
            None => {
                writeln!(output, "Could not read that move: {}", line.trim())?;
                continue;
            }
        };

        match game.apply_move(position, HUMAN) {
            Err(e) => writeln!(output, "Invalid move: {}", e)?,
            Ok(GameState::Ongoing) => {
                writeln!(output, "Computer thinking (O)...")?;
                output.flush()?;
                std::thread::sleep(delay);
                let mov = game.play_policy_move(&mut policy)?;
                debug_assert_eq!(mov.mark, COMPUTER);
                writeln!(output, "Computer played {}", mov.position)?;
            }
            Ok(state) => info!(%state, "Game finished"),
        }
    }
}

/// Results of a batch of self-play games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished game.
    ///
    /// # Errors
    ///
    /// Fails on [`GameState::Ongoing`], which no finished game can be in.
    pub fn record(&mut self, state: GameState) -> Result<()> {
        match state {
            GameState::Win(Mark::PlayerA) => self.x_wins += 1,
            GameState::Win(_) => self.o_wins += 1,
            GameState::Draw => self.draws += 1,
            GameState::Ongoing => bail!("stopped before the game ended"),
        }
        Ok(())
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` games with `policy` moving for both sides.
#[instrument(skip(policy), fields(policy = policy.name()))]
pub fn simulate<P: MovePolicy>(config: Config, mut policy: P, games: u32) -> Result<Tally> {
    let mut tally = Tally::default();
    for game_number in 0..games {
        let mut game = GameEngine::from_config(config);
        while !game.current_state().is_terminal() {
            game.play_policy_move(&mut policy)?;
        }
        tally
            .record(game.current_state())
            .with_context(|| format!("game {}", game_number))?;
    }
    info!(%tally, "Simulation finished");
    Ok(tally)
}
