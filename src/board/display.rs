use std::fmt;

use super::{Board, Point};

impl Board {
    /// Labelled board with the top row first, as shown by `showboard`.
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        let header: Vec<String> = (1..=self.size as u8)
            .map(|col| {
                let label = Point::new(1, col).to_string();
                label[..1].to_string()
            })
            .collect();

        for row in (1..=self.size as u8).rev() {
            out.push_str(&format!("{:>2} ", row));
            let cells: Vec<String> = (1..=self.size as u8)
                .map(|col| self.cell_char(Point::new(row, col)).to_string())
                .collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out.push_str("   ");
        out.push_str(&header.join(" "));
        out
    }

    /// One line per row, top row first, `X`/`O`/`.` with no separators.
    pub fn to_gogui_string(&self) -> String {
        let mut out = String::new();
        for row in (1..=self.size as u8).rev() {
            for col in 1..=self.size as u8 {
                out.push(self.cell_char(Point::new(row, col)));
            }
            out.push('\n');
        }
        out
    }

    /// Inverse of `FromStr`: rows top to bottom joined by `/`.
    pub fn to_position_string(&self) -> String {
        self.to_gogui_string()
            .lines()
            .collect::<Vec<_>>()
            .join("/")
    }

    fn cell_char(&self, point: Point) -> char {
        match self.get(point) {
            Some(color) => color.stone_char(),
            None => '.',
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ascii())
    }
}

#[macro_export]
macro_rules! gomoku_position {
    ($($cell:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: String = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        let size = (cells.len() as f64).sqrt() as usize;
        assert_eq!(
            size * size,
            cells.len(),
            "Invalid number of points. Expected a square board, got {}",
            cells.len()
        );
        // The macro input is drawn top row first, which is exactly the
        // position string layout once split into rows.
        let rows: Vec<String> = cells
            .chars()
            .collect::<Vec<_>>()
            .chunks(size)
            .map(|row| row.iter().collect())
            .collect();
        rows.join("/")
            .parse::<$crate::board::Board>()
            .expect("invalid gomoku position")
    }};
}
