#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::string::String;

use crate::core::{BoardState, GameEngine, GameStatus, Mark, Move, MoveSearch};

use super::{play_round, AiPlayer, Player};

/// Reasons a line typed at the move prompt is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not exactly two comma separated parts.
    Format,
    /// A part is not an integer.
    NotNumeric,
    /// Out of bounds or already taken.
    IllegalMove,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Format => write!(
                f,
                "Invalid format. Please enter two numbers separated by a comma (e.g., '1,2')."
            ),
            InputError::NotNumeric => write!(f, "Invalid input. Please enter numeric values only."),
            InputError::IllegalMove => {
                write!(f, "Invalid move. Cell may be out of bounds or already taken.")
            }
        }
    }
}

/// Parse `row,col`. Negative numbers parse but can never be a legal cell.
pub fn parse_move(input: &str) -> Result<(usize, usize), InputError> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() != 2 {
        return Err(InputError::Format);
    }
    let row: i64 = parts[0].trim().parse().map_err(|_| InputError::NotNumeric)?;
    let col: i64 = parts[1].trim().parse().map_err(|_| InputError::NotNumeric)?;
    let row = usize::try_from(row).map_err(|_| InputError::IllegalMove)?;
    let col = usize::try_from(col).map_err(|_| InputError::IllegalMove)?;
    Ok((row, col))
}

/// Human player at a text console.
///
/// Generic over its streams so a session can be scripted; [`CliPlayer::stdio`]
/// binds it to the terminal.
pub struct CliPlayer<R, W> {
    mark: Mark,
    input: R,
    output: W,
    hints: Option<MoveSearch>,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    pub fn stdio(mark: Mark) -> Self {
        Self::new(mark, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(mark: Mark, input: R, output: W) -> Self {
        Self {
            mark,
            input,
            output,
            hints: None,
        }
    }

    /// Offer the perfect move as the default answer at every prompt.
    pub fn with_hints(mut self) -> Self {
        self.hints = Some(MoveSearch::new(self.mark));
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Returns `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn show_board(&mut self, board: &BoardState) -> io::Result<()> {
        write!(self.output, "{}", board)
    }

    /// Ask whether to start another round. Anything but `y` ends the session.
    pub fn ask_play_again(&mut self) -> io::Result<bool> {
        write!(self.output, "Play again? (Y/N): ")?;
        let answer = self.read_line()?;
        Ok(matches!(answer, Some(a) if a.eq_ignore_ascii_case("y")))
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn select_move(&mut self, board: &BoardState) -> anyhow::Result<Move> {
        let suggestion = self.hints.and_then(|s| s.best_move(board));
        loop {
            match suggestion {
                Some(s) => write!(
                    self.output,
                    "Enter your move (row, column) [{},{}]: ",
                    s.row, s.col
                )?,
                None => write!(self.output, "Enter your move (row, column) [e.g. 1,1]: ")?,
            }
            let line = self
                .read_line()?
                .ok_or_else(|| anyhow::anyhow!("input closed while waiting for a move"))?;

            let parsed = match (line.is_empty(), suggestion) {
                (true, Some(s)) => Ok((s.row, s.col)),
                _ => parse_move(&line),
            };
            let checked = parsed.and_then(|(r, c)| {
                board.check_move(r, c).map_err(|_| InputError::IllegalMove)
            });
            match checked {
                Ok(mv) => return Ok(mv),
                Err(e) => {
                    log::debug!("rejected input {:?}: {:?}", line, e);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn handle_move(&mut self, mark: Mark, mv: Move, board: &BoardState) -> anyhow::Result<()> {
        if mark == self.mark {
            writeln!(self.output, "You played at: {}", mv)?;
        } else {
            writeln!(self.output, "AI played at: {}", mv)?;
        }
        self.show_board(board)?;
        Ok(())
    }

    fn handle_outcome(&mut self, engine: &GameEngine) -> anyhow::Result<()> {
        match engine.status() {
            GameStatus::Won(m) if m == self.mark => writeln!(self.output, "You win!")?,
            GameStatus::Won(_) => writeln!(self.output, "AI wins!")?,
            GameStatus::Draw => writeln!(self.output, "It's a draw!")?,
            GameStatus::InProgress => {}
        }
        if let Some(line) = engine.winning_line() {
            writeln!(
                self.output,
                "Winning line: {} {} {}",
                line[0], line[1], line[2]
            )?;
        }
        Ok(())
    }
}

/// Round tally for one console session, from the human's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl SessionSummary {
    fn record(&mut self, status: GameStatus, human: Mark) {
        self.rounds += 1;
        match status {
            GameStatus::Won(m) if m == human => self.wins += 1,
            GameStatus::Won(_) => self.losses += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rounds: {}  Wins: {}  Losses: {}  Draws: {}",
            self.rounds, self.wins, self.losses, self.draws
        )
    }
}

/// Console game loop: play rounds against `ai` until the human declines a
/// replay.
pub fn run_session<R: BufRead, W: Write>(
    human: &mut CliPlayer<R, W>,
    ai: &mut AiPlayer,
    human_first: bool,
) -> anyhow::Result<SessionSummary> {
    writeln!(human.output, "Welcome to Tic-Tac-Toe!")?;
    writeln!(
        human.output,
        "You are '{}'. AI is '{}'.",
        human.mark(),
        ai.mark()
    )?;

    let first = if human_first { human.mark() } else { ai.mark() };
    let mut engine = GameEngine::new(first);
    let mut summary = SessionSummary::default();
    loop {
        engine.reset(first);
        human.show_board(engine.board())?;
        let status = play_round(&mut engine, &mut *human, &mut *ai)?;
        summary.record(status, human.mark());
        if !human.ask_play_again()? {
            break;
        }
    }

    writeln!(human.output, "Thanks for playing!")?;
    writeln!(human.output, "{}", summary)?;
    Ok(summary)
}
