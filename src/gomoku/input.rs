use crate::gomoku::board::{Cell, CellError, Coordinate};
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Missing {0} coordinate")]
    MissingCoordinate(Coordinate),
    #[error("Coordinate is not a number: {0}")]
    InvalidNumber(#[from] ParseIntError),
    #[error("Unexpected input after the y coordinate")]
    TrailingInput,
    #[error("Invalid placement position: {0}")]
    Cell(#[from] CellError),
}

// Coordinates as they arrive from whatever is driving the game, before any
// range checks
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawMove {
    pub x: i32,
    pub y: i32,
}

impl RawMove {
    pub fn validate(self) -> Result<Cell, CellError> {
        Cell::try_from(self)
    }
}

// Accepts "x y" or "x,y"
impl FromStr for RawMove {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty());
        let x = parts
            .next()
            .ok_or(InputError::MissingCoordinate(Coordinate::X))?
            .parse()?;
        let y = parts
            .next()
            .ok_or(InputError::MissingCoordinate(Coordinate::Y))?
            .parse()?;
        if parts.next().is_some() {
            return Err(InputError::TrailingInput);
        }
        Ok(RawMove { x, y })
    }
}

pub fn parse_cell(s: &str) -> Result<Cell, InputError> {
    let raw: RawMove = s.parse()?;
    Ok(raw.validate()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gomoku::board::BOARD_LINES;

    #[test]
    fn test_parse_raw_move() {
        assert_eq!("3 4".parse::<RawMove>(), Ok(RawMove { x: 3, y: 4 }));
        assert_eq!("3,4".parse::<RawMove>(), Ok(RawMove { x: 3, y: 4 }));
        assert_eq!("  10 ,  -2 ".parse::<RawMove>(), Ok(RawMove { x: 10, y: -2 }));
        assert_eq!(
            "".parse::<RawMove>(),
            Err(InputError::MissingCoordinate(Coordinate::X))
        );
        assert_eq!(
            "7".parse::<RawMove>(),
            Err(InputError::MissingCoordinate(Coordinate::Y))
        );
        assert_eq!("1 2 3".parse::<RawMove>(), Err(InputError::TrailingInput));
        assert!(matches!(
            "a 2".parse::<RawMove>(),
            Err(InputError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("0 11"), Ok(Cell::new(0, 11).unwrap()));
        assert_eq!(
            parse_cell("0 12"),
            Err(InputError::Cell(CellError::OutOfBounds(
                Coordinate::Y,
                12,
                BOARD_LINES
            )))
        );
    }

    #[test]
    fn test_deserialize_raw_move() {
        let raw: RawMove = serde_json::from_str("{\"x\":5,\"y\":-3}").unwrap();
        assert_eq!(raw, RawMove { x: 5, y: -3 });
        assert!(raw.validate().is_err());
    }
}
