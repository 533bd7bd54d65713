//! Board intersections and their text protocol notation.
//!
//! Points are 1-based: row 1 is the bottom row and column 1 is `A`. Column
//! letters skip `I`, so the 9th column is `J`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::MAX_BOARD_SIZE;

const COLUMN_LETTERS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

static COORDINATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-z])([0-9]+)$").expect("coordinate regex is valid"));

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CoordinateError {
    #[error("illegal move: \"{0}\" wrong coordinate")]
    WrongCoordinate(String),
}

/// A board intersection. Ordering is row-major starting from row 1, which is
/// also the order legal moves are enumerated in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Point {
    row: u8,
    col: u8,
}

impl Point {
    /// Row or column 0 is off every board.
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Parses a coordinate such as `c4` for a board of the given size.
    pub fn from_gtp(coordinate: &str, board_size: usize) -> Result<Self, CoordinateError> {
        let lowered = coordinate.to_lowercase();
        let wrong = || CoordinateError::WrongCoordinate(lowered.clone());

        let caps = COORDINATE_REGEX.captures(&lowered).ok_or_else(wrong)?;
        let col_char = caps[1].chars().next().ok_or_else(wrong)?;
        if col_char == 'i' {
            return Err(wrong());
        }

        let mut col = (col_char as u8 - b'a') as usize;
        if col_char < 'i' {
            col += 1;
        }
        let row: usize = caps[2].parse().map_err(|_| wrong())?;

        if row < 1 || row > board_size || col > board_size || board_size > MAX_BOARD_SIZE {
            return Err(wrong());
        }

        Ok(Self::new(row as u8, col as u8))
    }

    pub fn to_gtp(&self) -> String {
        self.to_string()
    }

    /// Steps `distance` intersections along `(d_row, d_col)`, returning `None`
    /// when the result falls off a board of `size`.
    pub(crate) fn offset(
        &self,
        d_row: i32,
        d_col: i32,
        distance: i32,
        size: usize,
    ) -> Option<Self> {
        let row = self.row as i32 + d_row * distance;
        let col = self.col as i32 + d_col * distance;
        if row < 1 || col < 1 || row > size as i32 || col > size as i32 {
            return None;
        }
        Some(Self::new(row as u8, col as u8))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (self.col as usize)
            .checked_sub(1)
            .and_then(|index| COLUMN_LETTERS.chars().nth(index));
        match letter {
            Some(letter) => write!(f, "{}{}", letter, self.row),
            // No GTP name for points outside every board.
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!("A1", Point::new(1, 1).to_string());
        assert_eq!("C4", Point::new(4, 3).to_string());
        assert_eq!("J9", Point::new(9, 9).to_string());
        assert_eq!("Z25", Point::new(25, 25).to_string());
        assert_eq!("(0, 0)", Point::new(0, 0).to_string());
        assert_eq!("(3, 26)", Point::new(3, 26).to_string());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Ok(Point::new(1, 1)), Point::from_gtp("a1", 7));
        assert_eq!(Ok(Point::new(4, 3)), Point::from_gtp("C4", 7));
        assert_eq!(Ok(Point::new(9, 9)), Point::from_gtp("j9", 9));
        assert_eq!(Ok(Point::new(10, 8)), Point::from_gtp("h10", 19));
    }

    #[test]
    fn test_parse_skips_column_i() {
        assert_eq!(
            Err(CoordinateError::WrongCoordinate("i3".to_string())),
            Point::from_gtp("I3", 9)
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(Point::from_gtp("h1", 7).is_err());
        assert!(Point::from_gtp("a8", 7).is_err());
        assert!(Point::from_gtp("a0", 7).is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Point::from_gtp("", 7).is_err());
        assert!(Point::from_gtp("11", 7).is_err());
        assert!(Point::from_gtp("aa", 7).is_err());
        assert!(Point::from_gtp("a-1", 7).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = Point::from_gtp("Z9", 7).unwrap_err();
        assert_eq!("illegal move: \"z9\" wrong coordinate", err.to_string());
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut points = vec![Point::new(2, 1), Point::new(1, 3), Point::new(1, 1)];
        points.sort();
        assert_eq!(
            vec![Point::new(1, 1), Point::new(1, 3), Point::new(2, 1)],
            points
        );
    }

    #[test]
    fn test_offset() {
        let point = Point::new(3, 3);
        assert_eq!(Some(Point::new(4, 4)), point.offset(1, 1, 1, 7));
        assert_eq!(Some(Point::new(1, 5)), point.offset(-1, 1, 2, 7));
        assert_eq!(None, point.offset(-1, 0, 3, 7));
        assert_eq!(None, point.offset(0, 1, 5, 7));
    }
}
