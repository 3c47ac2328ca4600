use crate::board::Board;
use crate::monitor::search_monitor::SearchMonitor;
use crate::node::SearchNode;
use crate::stats::{Side, SolverStatistics};

/// Forwards every event to its children in insertion order.
#[derive(Default)]
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn SearchMonitor + 'a>>,
}

impl<'a> CompositeMonitor<'a> {
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl SearchMonitor for CompositeMonitor<'_> {
    fn on_enter_search(&mut self, initial: &Board, twin: Option<&Board>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(initial, twin);
        }
    }

    fn on_expand(&mut self, side: Side, node: &SearchNode, stats: &SolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_expand(side, node, stats);
        }
    }

    fn on_goal(&mut self, side: Side, node: &SearchNode, stats: &SolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_goal(side, node, stats);
        }
    }

    fn on_exit_search(&mut self, stats: &SolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(stats);
        }
    }

    fn name(&self) -> &str {
        "CompositeMonitor"
    }
}

impl std::fmt::Debug for CompositeMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.monitors.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Solver, SolverConfig};

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl SearchMonitor for &mut Recorder {
        fn on_enter_search(&mut self, _initial: &Board, twin: Option<&Board>) {
            self.events.push(format!("enter twin={}", twin.is_some()));
        }

        fn on_expand(&mut self, side: Side, _node: &SearchNode, _stats: &SolverStatistics) {
            self.events.push(format!("expand {side}"));
        }

        fn on_goal(&mut self, side: Side, node: &SearchNode, _stats: &SolverStatistics) {
            self.events.push(format!("goal {side} {}", node.moves()));
        }

        fn on_exit_search(&mut self, _stats: &SolverStatistics) {
            self.events.push("exit".to_string());
        }

        fn name(&self) -> &str {
            "Recorder"
        }
    }

    #[test]
    fn forwards_events_to_every_child() {
        let mut first = Recorder::default();
        let mut second = Recorder::default();
        {
            let mut composite = CompositeMonitor::new();
            composite.add_monitor(&mut first);
            composite.add_monitor(&mut second);
            assert_eq!(composite.len(), 2);

            let board = Board::new(3, vec![1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
            Solver::new(SolverConfig::default()).solve_with_monitor(&board, &mut composite);
        }

        assert_eq!(first.events, second.events);
        assert_eq!(
            first.events,
            vec!["enter twin=true", "expand main", "expand twin", "goal main 1", "exit"]
        );
    }
}
