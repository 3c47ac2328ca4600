use crate::board::Board;
use crate::monitor::search_monitor::SearchMonitor;
use crate::node::SearchNode;
use crate::stats::{Side, SolverStatistics};

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpMonitor;

impl SearchMonitor for NoOpMonitor {
    #[inline(always)]
    fn on_enter_search(&mut self, _initial: &Board, _twin: Option<&Board>) {}

    #[inline(always)]
    fn on_expand(&mut self, _side: Side, _node: &SearchNode, _stats: &SolverStatistics) {}

    #[inline(always)]
    fn on_goal(&mut self, _side: Side, _node: &SearchNode, _stats: &SolverStatistics) {}

    #[inline(always)]
    fn on_exit_search(&mut self, _stats: &SolverStatistics) {}

    #[inline(always)]
    fn name(&self) -> &str {
        "NoOpMonitor"
    }
}
