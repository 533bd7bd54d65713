use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The single-letter code used on the text protocol wire (`b` / `w`).
    pub fn letter(&self) -> &'static str {
        match self {
            Color::Black => "b",
            Color::White => "w",
        }
    }

    /// The character a stone of this color is drawn with.
    pub fn stone_char(&self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Black => "black",
            Color::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

// used for parsing cli args and protocol arguments
type ParseError = &'static str;
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err("invalid color; options are: b, w, black, white"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite(), Color::Black);
    }

    #[test]
    fn test_parse_letters() {
        assert_eq!(Color::Black, Color::from_str("b").unwrap());
        assert_eq!(Color::White, Color::from_str("W").unwrap());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Color::Black, Color::from_str("black").unwrap());
        assert_eq!(Color::White, Color::from_str("White").unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Color::from_str("e").is_err());
        assert!(Color::from_str("").is_err());
    }

    #[test]
    fn test_letter_and_display() {
        assert_eq!(Color::Black.letter(), "b");
        assert_eq!(Color::White.letter(), "w");
        assert_eq!(Color::Black.to_string(), "black");
        assert_eq!(Color::White.to_string(), "white");
    }
}
