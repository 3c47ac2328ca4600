use crate::board::Board;
use crate::node::SearchNode;
use crate::stats::{Side, SolverStatistics};

/// Receives search events from the solver.
pub trait SearchMonitor {
    /// Called once before the first expansion. `twin` is `None` when the
    /// initial board is already solved and no search runs.
    fn on_enter_search(&mut self, initial: &Board, twin: Option<&Board>);

    /// Called after a node has been expanded and its children queued.
    fn on_expand(&mut self, side: Side, node: &SearchNode, stats: &SolverStatistics);

    /// Called when either side pops a goal board.
    fn on_goal(&mut self, side: Side, node: &SearchNode, stats: &SolverStatistics);

    fn on_exit_search(&mut self, stats: &SolverStatistics);

    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
