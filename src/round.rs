//! The turn state machine driving one round from the first move to a win or draw

use anyhow::{anyhow, ensure, Result};
use log::{debug, info, warn};

use crate::{
    error::{DropError, MoveError},
    grid::{Grid, Move},
    player::Player,
};

/// Which of the two players is meant
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    AwaitingMove(Seat),
    Won(Seat),
    Draw,
}

/// How a finished round ended
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome<'a> {
    Winner(&'a Player),
    Draw,
}

/// Supplies the column choices of the players
pub trait ColumnSource {
    /// Blocks until the player to move picks a zero-based column in `0..WIDTH`
    ///
    /// Malformed input has to be handled here, the round only ever
    /// sees in-range columns.
    fn request_column(&mut self) -> Result<usize>;
}

/// Receives notifications about the progress of a round
pub trait Announcer {
    /// Called once at the start of every turn, before the first column request
    fn report_turn(&mut self, player: &Player) -> Result<()>;
    fn render_grid(&mut self, grid: &Grid) -> Result<()>;
    fn report_column_full(&mut self, column: usize) -> Result<()>;
    fn report_move_result(&mut self, player: &Player, column: usize) -> Result<()>;
    fn report_outcome(&mut self, outcome: Outcome<'_>) -> Result<()>;
}

/// One round of Connect 4 between two players
///
/// # Notes
/// The round owns its grid for its whole lifetime. The first player moves
/// first, and turns alternate strictly after every piece that lands;
/// a drop into a full column does not use up the turn.
#[derive(Clone, Debug)]
pub struct Round {
    players: [Player; 2],
    grid: Grid,
    state: State,
    last_move: Option<Move>,
}

impl Round {
    /// Creates a round on an empty grid, failing if both players hold the same mark
    pub fn new(players: [Player; 2]) -> Result<Self> {
        ensure!(
            players[0].mark() != players[1].mark(),
            "players must hold distinct marks, both hold '{}'",
            players[0].mark()
        );

        Ok(Self {
            players,
            grid: Grid::new(),
            state: State::AwaitingMove(Seat::First),
            last_move: None,
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// The player to move, `None` once the round is over
    pub fn current_player(&self) -> Option<&Player> {
        match self.state {
            State::AwaitingMove(seat) => Some(self.player(seat)),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.state {
            State::Won(seat) => Some(self.player(seat)),
            _ => None,
        }
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn is_over(&self) -> bool {
        !matches!(self.state, State::AwaitingMove(_))
    }

    pub fn outcome(&self) -> Option<Outcome<'_>> {
        match self.state {
            State::AwaitingMove(_) => None,
            State::Won(seat) => Some(Outcome::Winner(self.player(seat))),
            State::Draw => Some(Outcome::Draw),
        }
    }

    /// Drops the current player's piece into `column` and advances the round
    ///
    /// A failed drop leaves the round as it was, with the same player to move.
    pub fn apply_move(&mut self, column: usize) -> Result<Move, MoveError> {
        let seat = match self.state {
            State::AwaitingMove(seat) => seat,
            _ => return Err(MoveError::RoundOver),
        };
        let mark = self.player(seat).mark();

        let last_move = self.grid.drop_piece(column, mark)?;
        debug!(
            "{} ({}) dropped into column {}, landed in row {}",
            self.player(seat).name(),
            mark,
            last_move.column,
            last_move.row
        );
        self.last_move = Some(last_move);

        self.state = if self.grid.four_in_a_row(last_move.column, last_move.row, mark) {
            State::Won(seat)
        } else if self.grid.is_full() {
            State::Draw
        } else {
            State::AwaitingMove(seat.other())
        };

        Ok(last_move)
    }

    /// Plays a single turn, asking the same player again while they pick full columns
    pub fn play_turn<T>(&mut self, io: &mut T) -> Result<Move>
    where
        T: ColumnSource + Announcer,
    {
        let seat = match self.state {
            State::AwaitingMove(seat) => seat,
            _ => return Err(MoveError::RoundOver.into()),
        };

        io.report_turn(self.player(seat))?;
        loop {
            let column = io.request_column()?;

            match self.apply_move(column) {
                Ok(last_move) => {
                    io.report_move_result(self.player(seat), column)?;
                    io.render_grid(&self.grid)?;
                    return Ok(last_move);
                }
                Err(MoveError::Drop(DropError::ColumnFull(column))) => {
                    warn!(
                        "column {} is full, asking {} again",
                        column,
                        self.player(seat).name()
                    );
                    io.report_column_full(column)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Plays turns until the round is won or drawn
    pub fn play<T>(&mut self, io: &mut T) -> Result<Outcome<'_>>
    where
        T: ColumnSource + Announcer,
    {
        info!(
            "starting round: {} ({}) against {} ({})",
            self.players[0].name(),
            self.players[0].mark(),
            self.players[1].name(),
            self.players[1].mark()
        );
        io.render_grid(&self.grid)?;

        while !self.is_over() {
            self.play_turn(io)?;
        }

        let outcome = self
            .outcome()
            .ok_or_else(|| anyhow!("round finished without an outcome"))?;
        match outcome {
            Outcome::Winner(player) => info!("round won by {}", player.name()),
            Outcome::Draw => info!("round drawn on a full grid"),
        }
        io.report_outcome(outcome)?;

        Ok(outcome)
    }
}
