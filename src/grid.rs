use crate::{error::DropError, player::Mark, ALIGNMENT, HEIGHT, WIDTH};

// each set is one line through the anchor, as (column, row) steps,
// with positive being right and down
const DIRECTIONS: [&[(isize, isize)]; 4] = [
    // horizontal
    &[(1, 0), (-1, 0)],
    // vertical, down only since nothing can rest above the newest piece
    &[(0, 1)],
    // left-to-right diagonal ↙ ↗
    &[(-1, 1), (1, -1)],
    // right-to-left diagonal ↘ ↖
    &[(1, 1), (-1, -1)],
];

/// A piece that has just landed in the grid
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub mark: Mark,
}

/// The 7x6 playing grid
///
/// Cells are stored column by column, and within a column row 0 is the top
/// and row `HEIGHT - 1` the bottom. Pieces only enter through [`Grid::drop_piece`]
/// and are never moved or removed, so every column is a stack filled from the bottom.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    cells: [[Option<Mark>; HEIGHT]; WIDTH],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[None; HEIGHT]; WIDTH],
        }
    }

    /// Drops a piece into `column`, landing in the lowest empty row
    ///
    /// A full or out of range column leaves the grid untouched.
    pub fn drop_piece(&mut self, column: usize, mark: Mark) -> Result<Move, DropError> {
        let slots = self
            .cells
            .get_mut(column)
            .ok_or(DropError::InvalidColumn(column))?;

        // empty slots always sit above the occupied ones
        let row = slots
            .iter()
            .rposition(Option::is_none)
            .ok_or(DropError::ColumnFull(column))?;
        slots[row] = Some(mark);

        Ok(Move { column, row, mark })
    }

    /// The mark in a cell, `None` if it is empty or off the grid
    pub fn cell(&self, column: usize, row: usize) -> Option<Mark> {
        self.cells.get(column)?.get(row).copied().flatten()
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        match self.cells.get(column) {
            Some(slots) => slots[0].is_some(),
            None => true,
        }
    }

    /// True once the top row of every column is taken
    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| self.is_column_full(column))
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, column: usize) -> usize {
        self.cells
            .get(column)
            .map_or(0, |slots| slots.iter().filter(|slot| slot.is_some()).count())
    }

    /// Iterates one row of the grid from the leftmost column
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<Mark>> + '_ {
        self.cells
            .iter()
            .map(move |slots| slots.get(row).copied().flatten())
    }

    /// Checks whether the piece at (`column`, `row`) completes a line of `mark`
    ///
    /// Only the lines passing through that cell are walked: any new
    /// alignment must include the cell that was just filled.
    pub fn four_in_a_row(&self, column: usize, row: usize, mark: Mark) -> bool {
        DIRECTIONS.iter().any(|direction_set| {
            self.count_consecutive(column, row, direction_set, mark) >= ALIGNMENT
        })
    }

    fn count_consecutive(
        &self,
        column: usize,
        row: usize,
        direction_set: &[(isize, isize)],
        mark: Mark,
    ) -> usize {
        // the anchor is the first piece of the run
        let mut count = 1;

        for &(d_column, d_row) in direction_set {
            let mut next_column = column as isize + d_column;
            let mut next_row = row as isize + d_row;

            while self.mark_at(next_column, next_row) == Some(mark) {
                count += 1;

                next_column += d_column;
                next_row += d_row;
            }
        }

        count
    }

    fn mark_at(&self, column: isize, row: isize) -> Option<Mark> {
        if column < 0 || row < 0 {
            return None;
        }
        self.cell(column as usize, row as usize)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
