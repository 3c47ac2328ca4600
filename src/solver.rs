//! Dual-frontier A* over a board and its twin.
//!
//! The main search is rooted at the board being solved, the twin search at
//! [`Board::twin`]. Both advance one expansion at a time in strict
//! alternation. Whichever side pops a goal board first decides the outcome:
//! exactly one of a board and its twin can be solved, so a solved twin means
//! the original has no solution.
//!
//! Manhattan distance is consistent, so the first goal popped on the main
//! side carries the minimum move count. Ties are broken by insertion order;
//! among several optimal paths the one returned is not otherwise special.

use crate::board::{Board, Move};
use crate::frontier::PriorityFrontier;
use crate::monitor::{NoOpMonitor, SearchMonitor};
use crate::node::SearchNode;
use crate::stats::{Side, SolverStatistics};
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Instant;

/// How a side avoids re-expanding boards it has already seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleCheck {
    /// Drop a neighbour only if it equals the parent's board. Longer cycles
    /// are still explored.
    #[default]
    Parent,
    /// Additionally keep a per-side set of expanded boards and never
    /// expand the same board twice.
    Visited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverConfig {
    pub cycle_check: CycleCheck,
}

impl SolverConfig {
    pub fn with_cycle_check(mut self, cycle_check: CycleCheck) -> Self {
        self.cycle_check = cycle_check;
        self
    }
}

/// A minimum-length sequence of boards from the initial board to the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    boards: Vec<Board>,
    steps: Vec<Move>,
}

impl Solution {
    fn from_goal(node: &SearchNode) -> Self {
        Self {
            boards: node.path(),
            steps: node.steps(),
        }
    }

    /// Number of slides; one less than the number of boards.
    pub fn moves(&self) -> usize {
        self.steps.len()
    }

    /// Boards from the initial board to the goal, both included.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Slides in the order they are applied.
    pub fn steps(&self) -> &[Move] {
        &self.steps
    }

    pub fn initial(&self) -> &Board {
        &self.boards[0]
    }

    pub fn goal(&self) -> &Board {
        &self.boards[self.boards.len() - 1]
    }
}

/// Result of a solve. No solution is an answer, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    Unsolvable,
}

impl Outcome {
    pub fn is_solvable(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    pub fn moves(&self) -> Option<usize> {
        self.solution().map(Solution::moves)
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            Outcome::Unsolvable => None,
        }
    }
}

enum Step {
    Goal(Rc<SearchNode>),
    Expanded,
    Exhausted,
}

/// One of the two lockstep searches.
struct SideSearch {
    side: Side,
    frontier: PriorityFrontier<Rc<SearchNode>>,
    expanded: HashSet<Board>,
}

impl SideSearch {
    fn new(side: Side, root: Board, stats: &mut SolverStatistics) -> Self {
        let root = SearchNode::root(root);
        let mut frontier = PriorityFrontier::new();
        let priority = root.priority();
        frontier.insert(Rc::new(root), priority);
        stats.on_inserted();
        stats.set_frontier(side, frontier.len(), frontier.high_water());

        Self {
            side,
            frontier,
            expanded: HashSet::new(),
        }
    }

    fn pop(&mut self, cycle_check: CycleCheck, stats: &mut SolverStatistics) -> Option<Rc<SearchNode>> {
        while let Some(node) = self.frontier.pop_min() {
            if cycle_check == CycleCheck::Visited && !self.expanded.insert(node.board().clone()) {
                stats.on_stale_pop();
                continue;
            }
            return Some(node);
        }
        None
    }

    fn is_cycle(&self, cycle_check: CycleCheck, node: &SearchNode, board: &Board) -> bool {
        if node.parent().is_some_and(|parent| parent.board() == board) {
            return true;
        }
        cycle_check == CycleCheck::Visited && self.expanded.contains(board)
    }

    /// Pops the best node; returns it if it is a goal, otherwise queues its
    /// neighbours.
    fn step<M>(&mut self, cycle_check: CycleCheck, stats: &mut SolverStatistics, monitor: &mut M) -> Step
    where
        M: SearchMonitor + ?Sized,
    {
        let Some(node) = self.pop(cycle_check, stats) else {
            stats.set_frontier(self.side, 0, self.frontier.high_water());
            return Step::Exhausted;
        };

        if node.board().is_goal() {
            stats.set_frontier(self.side, self.frontier.len(), self.frontier.high_water());
            return Step::Goal(node);
        }

        for (movement, board) in node.board().successors() {
            if self.is_cycle(cycle_check, &node, &board) {
                stats.on_cycle_skip();
                continue;
            }
            let child = SearchNode::child(&node, board, movement);
            let priority = child.priority();
            self.frontier.insert(Rc::new(child), priority);
            stats.on_inserted();
        }

        stats.on_expanded(self.side);
        stats.set_frontier(self.side, self.frontier.len(), self.frontier.high_water());
        monitor.on_expand(self.side, &node, stats);
        Step::Expanded
    }
}

/// Solves boards with a fixed [`SolverConfig`].
///
/// Statistics describe the most recent solve only.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
    statistics: SolverStatistics,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            statistics: SolverStatistics::default(),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    pub fn solve(&mut self, initial: &Board) -> Outcome {
        self.solve_with_monitor(initial, &mut NoOpMonitor)
    }

    /// Solves `initial`, reporting progress to `monitor`.
    ///
    /// `initial` must be a valid permutation. Boards built through
    /// [`Board::new`] always are.
    pub fn solve_with_monitor<M>(&mut self, initial: &Board, monitor: &mut M) -> Outcome
    where
        M: SearchMonitor + ?Sized,
    {
        let start = Instant::now();
        self.statistics = SolverStatistics::default();

        let outcome = if initial.is_goal() {
            monitor.on_enter_search(initial, None);
            let root = SearchNode::root(initial.clone());
            monitor.on_goal(Side::Main, &root, &self.statistics);
            Outcome::Solved(Solution::from_goal(&root))
        } else {
            let twin = initial.twin();
            monitor.on_enter_search(initial, Some(&twin));
            self.search(initial, twin, monitor)
        };

        self.statistics.set_total_time(start.elapsed());
        monitor.on_exit_search(&self.statistics);
        outcome
    }

    fn search<M>(&mut self, initial: &Board, twin: Board, monitor: &mut M) -> Outcome
    where
        M: SearchMonitor + ?Sized,
    {
        let cycle_check = self.config.cycle_check;
        let stats = &mut self.statistics;

        let mut main = SideSearch::new(Side::Main, initial.clone(), stats);
        let mut twin = SideSearch::new(Side::Twin, twin, stats);

        loop {
            match main.step(cycle_check, stats, monitor) {
                Step::Goal(node) => {
                    monitor.on_goal(Side::Main, &node, stats);
                    return Outcome::Solved(Solution::from_goal(&node));
                }
                // Every board reachable from the initial one was expanded.
                Step::Exhausted => return Outcome::Unsolvable,
                Step::Expanded => {}
            }

            if let Step::Goal(node) = twin.step(cycle_check, stats, monitor) {
                monitor.on_goal(Side::Twin, &node, stats);
                return Outcome::Unsolvable;
            }
        }
    }
}

/// Solves `initial` with the default configuration.
pub fn solve(initial: &Board) -> Outcome {
    Solver::default().solve(initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::{HashMap, VecDeque};

    fn board(size: usize, tiles: &[u32]) -> Board {
        Board::new(size, tiles.to_vec()).unwrap()
    }

    fn random_walk(size: usize, steps: usize, rng: &mut StdRng) -> Board {
        let mut current = Board::goal(size);
        for _ in 0..steps {
            let neighbours = current.neighbours();
            current = neighbours[rng.gen_range(0..neighbours.len())].clone();
        }
        current
    }

    /// Exact distance to the goal, or `None` if the goal is unreachable.
    fn bfs_distance(start: &Board) -> Option<usize> {
        let mut seen = HashMap::new();
        let mut queue = VecDeque::new();
        seen.insert(start.clone(), 0);
        queue.push_back(start.clone());
        while let Some(current) = queue.pop_front() {
            let depth = seen[&current];
            if current.is_goal() {
                return Some(depth);
            }
            for next in current.neighbours() {
                if !seen.contains_key(&next) {
                    seen.insert(next.clone(), depth + 1);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    fn assert_valid_solution(initial: &Board, solution: &Solution) {
        assert_eq!(solution.initial(), initial);
        assert!(solution.goal().is_goal());
        assert_eq!(solution.boards().len(), solution.moves() + 1);
        for (pair, &movement) in solution.boards().windows(2).zip(solution.steps()) {
            assert_eq!(pair[0].apply(movement).as_ref(), Some(&pair[1]));
        }
    }

    #[test]
    fn goal_board_short_circuits() {
        let goal = board(3, &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let mut solver = Solver::default();
        let outcome = solver.solve(&goal);

        assert!(outcome.is_solvable());
        assert_eq!(outcome.moves(), Some(0));
        assert_eq!(outcome.solution().unwrap().boards(), &[goal]);
        assert_eq!(solver.statistics().expansions(), 0);
    }

    #[test]
    fn single_cell_board_is_solved() {
        let outcome = solve(&Board::goal(1));
        assert_eq!(outcome.moves(), Some(0));
    }

    #[test]
    fn one_move_from_goal() {
        let initial = board(3, &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let outcome = solve(&initial);

        let solution = outcome.solution().unwrap();
        assert_eq!(solution.moves(), 1);
        assert_eq!(solution.steps(), &[Move::Left]);
        assert_valid_solution(&initial, solution);
    }

    #[test]
    fn swapped_tiles_are_unsolvable() {
        let outcome = solve(&board(3, &[1, 2, 3, 4, 5, 6, 8, 7, 0]));
        assert!(!outcome.is_solvable());
        assert_eq!(outcome.moves(), None);
        assert!(outcome.solution().is_none());
    }

    #[test]
    fn four_move_puzzle() {
        let initial = board(3, &[0, 1, 3, 4, 2, 5, 7, 8, 6]);
        let outcome = solve(&initial);
        assert_eq!(outcome.moves(), Some(4));
        assert_valid_solution(&initial, outcome.solution().unwrap());
    }

    #[test]
    fn every_two_by_two_board_matches_parity_and_bfs() {
        let mut tiles = vec![0, 1, 2, 3];
        let mut permutations = Vec::new();
        permute(&mut tiles, 0, &mut permutations);
        assert_eq!(permutations.len(), 24);

        for tiles in permutations {
            let initial = board(2, &tiles);
            let outcome = solve(&initial);
            assert_eq!(outcome.is_solvable(), initial.is_solvable(), "{initial}");
            assert_eq!(outcome.moves(), bfs_distance(&initial), "{initial}");
            if let Some(solution) = outcome.solution() {
                assert_valid_solution(&initial, solution);
            }
        }
    }

    fn permute(tiles: &mut Vec<u32>, start: usize, out: &mut Vec<Vec<u32>>) {
        if start == tiles.len() {
            out.push(tiles.clone());
            return;
        }
        for i in start..tiles.len() {
            tiles.swap(start, i);
            permute(tiles, start + 1, out);
            tiles.swap(start, i);
        }
    }

    #[test]
    fn finds_optimal_move_count_on_random_walks() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..15 {
            let initial = random_walk(3, 14, &mut rng);
            let outcome = solve(&initial);
            assert_eq!(outcome.moves(), bfs_distance(&initial), "{initial}");
            assert_valid_solution(&initial, outcome.solution().unwrap());
        }
    }

    #[test]
    fn twin_of_shallow_board_is_unsolvable() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            let walked = random_walk(3, 10, &mut rng);
            if walked.is_goal() {
                continue;
            }
            assert!(!solve(&walked.twin()).is_solvable(), "{walked}");
        }
    }

    #[test]
    fn visited_check_agrees_with_parent_check() {
        let mut rng = StdRng::seed_from_u64(5);
        let visited = SolverConfig::default().with_cycle_check(CycleCheck::Visited);
        for _ in 0..10 {
            let initial = random_walk(3, 16, &mut rng);
            let parent_only = solve(&initial);
            let mut solver = Solver::new(visited);
            let deduplicated = solver.solve(&initial);
            assert_eq!(parent_only.moves(), deduplicated.moves(), "{initial}");
        }
    }

    #[test]
    fn visited_check_decides_unsolvable_boards() {
        let mut solver = Solver::new(SolverConfig {
            cycle_check: CycleCheck::Visited,
        });
        let outcome = solver.solve(&board(3, &[1, 2, 3, 4, 5, 6, 8, 7, 0]));
        assert_eq!(outcome, Outcome::Unsolvable);
    }

    #[test]
    fn solves_four_by_four_walk() {
        let mut rng = StdRng::seed_from_u64(17);
        let initial = random_walk(4, 20, &mut rng);
        let outcome = solve(&initial);
        let solution = outcome.solution().unwrap();
        assert!(solution.moves() <= 20);
        assert!(solution.moves() >= initial.manhattan());
        assert_eq!(solution.moves() % 2, 20 % 2);
        assert_valid_solution(&initial, solution);
    }

    #[test]
    fn statistics_count_expansions() {
        let mut solver = Solver::default();
        solver.solve(&board(3, &[0, 1, 3, 4, 2, 5, 7, 8, 6]));
        let stats = solver.statistics();
        assert!(stats.expansions_main >= 4);
        assert!(stats.expansions_twin + 1 >= stats.expansions_main);
        assert!(stats.nodes_inserted >= 2);
        assert!(stats.peak_frontier_main >= 1);
    }
}
