use thiserror::Error;

use super::point::Point;
use super::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum BoardError {
    #[error(
        "Board size {size} is out of range ({min}..={max})",
        min = MIN_BOARD_SIZE,
        max = MAX_BOARD_SIZE
    )]
    SizeOutOfRange { size: usize },
    #[error("Cannot play on {point}, it is off the board")]
    OffBoard { point: Point },
    #[error("Cannot play on {point}, it is already occupied")]
    Occupied { point: Point },
    #[error("Invalid position string: {msg}")]
    InvalidPosition { msg: String },
}
