//! Compact text form of a position, e.g. `X../.O./...` for a 3x3 board.
//!
//! Rows run from the top of the board down and are separated by `/` or
//! newlines. `X` is a black stone, `O` a white stone and `.` an empty point.

use std::str::FromStr;

use super::{check_size, Board, BoardError, Color, Point};

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(position: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = position
            .split(|c| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        check_size(size)?;
        let mut board = Board::empty(size);

        for (i, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != size {
                return Err(BoardError::InvalidPosition {
                    msg: format!(
                        "row {} has {} points, expected {}",
                        i + 1,
                        cells.len(),
                        size
                    ),
                });
            }

            let board_row = (size - i) as u8;
            for (j, &c) in cells.iter().enumerate() {
                let color = match c {
                    'X' | 'x' => Color::Black,
                    'O' | 'o' => Color::White,
                    '.' => continue,
                    other => {
                        return Err(BoardError::InvalidPosition {
                            msg: format!("unexpected character '{}'", other),
                        })
                    }
                };
                let point = Point::new(board_row, j as u8 + 1);
                let index = board.index(point);
                board.cells[index] = Some(color);
                board.stone_count += 1;
            }
        }

        let black = board.count(Color::Black);
        let white = board.count(Color::White);
        board.current_player = if black == white {
            Color::Black
        } else {
            Color::White
        };
        board.winner = board.find_winner();

        Ok(board)
    }
}

impl Board {
    fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(color)).count()
    }
}
