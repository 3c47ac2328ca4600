//! Reads a board from whitespace-separated text: the size `N`, then `N²`
//! tiles in row-major order. Line breaks are not significant, so the output
//! of `Board`'s `Display` parses back to an equal board.

use crate::board::Board;
use crate::error::InvalidBoardError;
use std::str::FromStr;

pub fn parse_board(input: &str) -> Result<Board, InvalidBoardError> {
    let mut tokens = input.split_whitespace();

    let size_token = tokens.next().ok_or(InvalidBoardError::Empty)?;
    let size: usize = parse_number(size_token)?;
    if size == 0 {
        return Err(InvalidBoardError::ZeroSize);
    }

    let tiles = tokens.map(parse_number).collect::<Result<Vec<u32>, _>>()?;
    Board::new(size, tiles)
}

fn parse_number<T: FromStr>(token: &str) -> Result<T, InvalidBoardError> {
    token.parse().map_err(|_| InvalidBoardError::InvalidToken {
        token: token.to_string(),
    })
}

impl FromStr for Board {
    type Err = InvalidBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn parses_multiline_grid() {
        let board: Board = "3\n 1 2 3\n 4 5 6\n 7 8 0\n".parse().unwrap();
        assert_eq!(board, Board::goal(3));
    }

    #[test]
    fn display_round_trips() {
        let mut rng = StdRng::seed_from_u64(1);
        for size in 1..=12 {
            let board = Board::random(size, &mut rng);
            assert_eq!(parse_board(&board.to_string()), Ok(board));
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn huge_size_is_an_error_not_a_panic() {
        assert_eq!(
            parse_board("4294967296 1 2 3"),
            Err(InvalidBoardError::TooLarge { size: 1 << 32 })
        );
        assert_eq!(
            parse_board("18446744073709551615 1 2 3"),
            Err(InvalidBoardError::TooLarge { size: usize::MAX })
        );
        assert_eq!(
            parse_board("18446744073709551616 1"),
            Err(InvalidBoardError::InvalidToken {
                token: "18446744073709551616".to_string()
            })
        );
    }

    #[test]
    fn reports_malformed_input() {
        assert_eq!(parse_board("   \n"), Err(InvalidBoardError::Empty));
        assert_eq!(parse_board("0"), Err(InvalidBoardError::ZeroSize));
        assert_eq!(
            parse_board("2 1 x 3 0"),
            Err(InvalidBoardError::InvalidToken {
                token: "x".to_string()
            })
        );
        assert_eq!(
            parse_board("-3 1 2"),
            Err(InvalidBoardError::InvalidToken {
                token: "-3".to_string()
            })
        );
        assert_eq!(
            parse_board("2 1 2 3 0 4"),
            Err(InvalidBoardError::TileCount {
                expected: 4,
                found: 5
            })
        );
        assert_eq!(
            parse_board("2 1 2 3 3"),
            Err(InvalidBoardError::Duplicate { value: 3 })
        );
        assert_eq!(
            parse_board("2 1 2 3 9"),
            Err(InvalidBoardError::OutOfRange { value: 9, max: 3 })
        );
    }
}
