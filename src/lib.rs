//! Optimal solver for the N×N sliding-tile puzzle.
//!
//! A [`Board`] is searched together with its [`twin`](Board::twin) by a
//! pair of lockstep A* frontiers ordered by moves plus Manhattan distance.
//! The first side to reach the goal decides whether the board can be solved
//! at all; when the main side wins, its path is a shortest solution.
//!
//! ```
//! use slider_puzzle_solver::{solve, Board};
//!
//! let board: Board = "3  1 2 3  4 5 6  7 0 8".parse().unwrap();
//! let outcome = solve(&board);
//! assert_eq!(outcome.moves(), Some(1));
//! ```

pub mod board;
pub mod error;
pub mod frontier;
pub mod monitor;
pub mod node;
pub mod parse;
pub mod render;
pub mod solver;
pub mod stats;

pub use board::{Board, Move};
pub use error::InvalidBoardError;
pub use parse::parse_board;
pub use solver::{solve, CycleCheck, Outcome, Solution, Solver, SolverConfig};
pub use stats::{Side, SolverStatistics};
