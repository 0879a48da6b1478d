use super::player::Player;

/// One grid position: empty, or holding a piece of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// Why a piece could not be dropped into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropError {
    InvalidColumn,
    ColumnFull,
}

/// The game grid: `height` rows by `width` columns of cells.
///
/// Row 0 is the top, row `height - 1` the bottom. Pieces settle into the
/// lowest empty row of their column, so within any column the occupied
/// cells form a contiguous block ending at the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position. Both indices must be in bounds.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Check if a column is full (or out of range).
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.width || self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returning the row where it landed.
    ///
    /// The piece settles into the lowest empty row of the column.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, DropError> {
        if col >= self.width {
            return Err(DropError::InvalidColumn);
        }

        // Scan from the bottom row upward for the first empty cell.
        for row in (0..self.height).rev() {
            if self.get(row, col) == Cell::Empty {
                self.cells[row * self.width + col] = Cell::Occupied(player);
                return Ok(row);
            }
        }

        Err(DropError::ColumnFull)
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Check if the piece at (row, col) completes a four-in-a-row.
    ///
    /// Counts contiguous same-player cells through the given position along
    /// each of the four axes, extending in both directions, so a line is
    /// found no matter where in it the piece sits.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let player = match self.get(row, col) {
            Cell::Occupied(player) => player,
            Cell::Empty => return false,
        };

        // Horizontal, vertical, and the two diagonals.
        const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        AXES.iter().any(|&(dr, dc)| {
            let run = 1
                + self.count_run(row, col, dr, dc, player)
                + self.count_run(row, col, -dr, -dc, player);
            run >= 4
        })
    }

    /// Count contiguous cells of `player` starting one step from (row, col)
    /// in direction (dr, dc), stopping at the first mismatch or edge.
    fn count_run(&self, row: usize, col: usize, dr: i32, dc: i32, player: Player) -> usize {
        let mut count = 0;
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;

        while self.in_bounds(r, c) && self.get(r as usize, c as usize) == Cell::Occupied(player) {
            count += 1;
            r += dr;
            c += dc;
        }

        count
    }

    fn in_bounds(&self, r: i32, c: i32) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.height && (c as usize) < self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7, 6);
        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 6);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new(7, 6);

        // First piece in column 3 lands at the bottom
        let row = board.drop_piece(3, Player::One).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Occupied(Player::One));

        // Second piece in the same column stacks on top
        let row = board.drop_piece(3, Player::Two).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Occupied(Player::Two));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(7, 6);

        for _ in 0..6 {
            board.drop_piece(0, Player::One).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_piece(0, Player::Two),
            Err(DropError::ColumnFull)
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new(7, 6);
        assert_eq!(
            board.drop_piece(7, Player::One),
            Err(DropError::InvalidColumn)
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(7, 6);
        for col in 0..7 {
            for _ in 0..6 {
                board.drop_piece(col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new(7, 6);
        for col in 0..4 {
            board.drop_piece(col, Player::One).unwrap();
        }
        // A line is found from any of its cells, not just the endpoints
        assert!(board.check_win(5, 2));
        assert!(board.check_win(5, 0));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new(7, 6);
        for _ in 0..4 {
            board.drop_piece(3, Player::Two).unwrap();
        }
        assert!(board.check_win(2, 3));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new(7, 6);
        // Build a / diagonal for One with Two as filler
        board.drop_piece(0, Player::One).unwrap();

        board.drop_piece(1, Player::Two).unwrap();
        board.drop_piece(1, Player::One).unwrap();

        board.drop_piece(2, Player::Two).unwrap();
        board.drop_piece(2, Player::Two).unwrap();
        board.drop_piece(2, Player::One).unwrap();

        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        let row = board.drop_piece(3, Player::One).unwrap();

        assert!(board.check_win(row, 3));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new(7, 6);
        // Mirrored \ diagonal
        board.drop_piece(6, Player::One).unwrap();

        board.drop_piece(5, Player::Two).unwrap();
        board.drop_piece(5, Player::One).unwrap();

        board.drop_piece(4, Player::Two).unwrap();
        board.drop_piece(4, Player::Two).unwrap();
        board.drop_piece(4, Player::One).unwrap();

        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        let row = board.drop_piece(3, Player::One).unwrap();

        assert!(board.check_win(row, 3));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new(7, 6);
        for col in 0..3 {
            board.drop_piece(col, Player::One).unwrap();
        }
        assert!(!board.check_win(5, 1));
    }

    #[test]
    fn test_check_win_on_empty_cell() {
        let board = Board::new(7, 6);
        assert!(!board.check_win(5, 3));
    }

    #[test]
    fn test_custom_dimensions() {
        let mut board = Board::new(4, 4);
        assert_eq!(
            board.drop_piece(4, Player::One),
            Err(DropError::InvalidColumn)
        );
        let row = board.drop_piece(0, Player::One).unwrap();
        assert_eq!(row, 3);
    }
}
