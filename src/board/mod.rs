pub mod color;
pub mod error;
pub mod point;

mod display;
mod position_string;


pub use color::Color;
pub use error::BoardError;
pub use point::{CoordinateError, Point};

pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 25;
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Number of stones in a row needed to win. Longer lines also win.
pub const WIN_LENGTH: i32 = 5;

/// The four line directions, as (row, col) steps.
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Represents the state of a gomoku board: the stones on it, whose turn it is,
/// and whether a five-in-a-row has already decided the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
    current_player: Color,
    winner: Option<Color>,
    stone_count: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }
}

impl Board {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        check_size(size)?;
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            current_player: Color::Black,
            winner: None,
            stone_count: 0,
        }
    }

    /// Clears the board and resizes it. Black moves first.
    pub fn reset(&mut self, size: usize) -> Result<(), BoardError> {
        check_size(size)?;
        *self = Self::empty(size);
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn set_current_player(&mut self, color: Color) {
        self.current_player = color;
    }

    pub fn stone_count(&self) -> usize {
        self.stone_count
    }

    pub fn is_full(&self) -> bool {
        self.stone_count == self.cells.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row() >= 1
            && point.col() >= 1
            && (point.row() as usize) <= self.size
            && (point.col() as usize) <= self.size
    }

    pub fn get(&self, point: Point) -> Option<Color> {
        if !self.contains(point) {
            return None;
        }
        self.cells[self.index(point)]
    }

    pub fn is_legal(&self, point: Point) -> bool {
        self.contains(point) && self.get(point).is_none()
    }

    /// Places a stone for `color` and hands the turn to the opponent. A stone
    /// that completes five or more in a row decides the game.
    pub fn play_move(&mut self, point: Point, color: Color) -> Result<(), BoardError> {
        if !self.contains(point) {
            return Err(BoardError::OffBoard { point });
        }
        if self.get(point).is_some() {
            return Err(BoardError::Occupied { point });
        }

        let index = self.index(point);
        self.cells[index] = Some(color);
        self.stone_count += 1;
        self.current_player = color.opposite();

        if self.winner.is_none() && self.completes_line(point, color) {
            self.winner = Some(color);
        }

        Ok(())
    }

    /// Passing places nothing; the opponent moves next.
    pub fn pass(&mut self, color: Color) {
        self.current_player = color.opposite();
    }

    /// The winner if a five-in-a-row has already decided the game.
    pub fn check_game_end(&self) -> Option<Color> {
        self.winner
    }

    /// All empty points, row-major from the bottom row.
    pub fn empty_points(&self) -> Vec<Point> {
        self.points().filter(|&point| self.get(point).is_none()).collect()
    }

    /// Moves available to the side to move. A decided game has none.
    pub fn legal_moves(&self) -> Vec<Point> {
        if self.winner.is_some() {
            return Vec::new();
        }
        self.empty_points()
    }

    /// Every point on the board, row-major from the bottom row.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let size = self.size as u8;
        (1..=size).flat_map(move |row| (1..=size).map(move |col| Point::new(row, col)))
    }

    /// Length of the unbroken run of `color` through `point` along a direction.
    pub fn run_length(&self, point: Point, color: Color, (d_row, d_col): (i32, i32)) -> i32 {
        let mut count = 1;
        for sign in [1, -1].iter() {
            let mut distance = 1;
            while let Some(next) = point.offset(d_row * sign, d_col * sign, distance, self.size) {
                if self.get(next) != Some(color) {
                    break;
                }
                count += 1;
                distance += 1;
            }
        }
        count
    }

    fn completes_line(&self, point: Point, color: Color) -> bool {
        DIRECTIONS
            .iter()
            .any(|&direction| self.run_length(point, color, direction) >= WIN_LENGTH)
    }

    /// Scans the whole board for a five-in-a-row. Used when a position is
    /// built from scratch rather than move by move.
    fn find_winner(&self) -> Option<Color> {
        self.points().find_map(|point| {
            let color = self.get(point)?;
            if self.completes_line(point, color) {
                Some(color)
            } else {
                None
            }
        })
    }

    fn index(&self, point: Point) -> usize {
        (point.row() as usize - 1) * self.size + (point.col() as usize - 1)
    }
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(BoardError::SizeOutOfRange { size });
    }
    Ok(())
}
