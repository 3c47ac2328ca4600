use crate::board::Board;
use crate::monitor::search_monitor::SearchMonitor;
use crate::node::SearchNode;
use crate::stats::{Side, SolverStatistics};
use std::io::{self, Stderr, Write};
use std::time::{Duration, Instant};

const RULE_WIDTH: usize = 72;

/// Prints a progress line at most once per `log_interval`.
///
/// The clock is only read when the expansion count masked with
/// `clock_check_mask` is zero. Write failures are ignored; losing a
/// progress line must not abort a search.
#[derive(Debug)]
pub struct LogMonitor<W: Write> {
    writer: W,
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
}

impl LogMonitor<Stderr> {
    pub fn stderr(log_interval: Duration) -> Self {
        Self::new(io::stderr(), log_interval, 1023)
    }
}

impl<W: Write> LogMonitor<W> {
    pub fn new(writer: W, log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            writer,
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn print_header(&mut self) {
        let _ = writeln!(
            self.writer,
            "{:<9} | {:<12} | {:<5} | {:<10} | {:<10} | {:<8}",
            "Elapsed", "Expansions", "Side", "Main queue", "Twin queue", "Priority"
        );
        let _ = writeln!(self.writer, "{}", "-".repeat(RULE_WIDTH));
    }

    fn log_line(&mut self, side: Side, node: &SearchNode, stats: &SolverStatistics) {
        let now = Instant::now();
        let elapsed = format!("{:.1}s", now.duration_since(self.start_time).as_secs_f32());
        let _ = writeln!(
            self.writer,
            "{:<9} | {:<12} | {:<5} | {:<10} | {:<10} | {:<8}",
            elapsed,
            stats.expansions(),
            side,
            stats.frontier_main,
            stats.frontier_twin,
            node.priority()
        );
        self.last_log_time = now;
    }
}

impl<W: Write> SearchMonitor for LogMonitor<W> {
    fn on_enter_search(&mut self, initial: &Board, twin: Option<&Board>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;

        let _ = writeln!(
            self.writer,
            "Solving {n}x{n} board (hamming {}, manhattan {})",
            initial.hamming(),
            initial.manhattan(),
            n = initial.size()
        );
        if twin.is_some() {
            self.print_header();
        }
    }

    fn on_expand(&mut self, side: Side, node: &SearchNode, stats: &SolverStatistics) {
        if (stats.expansions() & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(side, node, stats);
        }
    }

    fn on_goal(&mut self, side: Side, node: &SearchNode, stats: &SolverStatistics) {
        let _ = writeln!(
            self.writer,
            "Goal reached by {} search at depth {} after {} expansions",
            side,
            node.moves(),
            stats.expansions()
        );
    }

    fn on_exit_search(&mut self, stats: &SolverStatistics) {
        let _ = writeln!(self.writer, "{}", "-".repeat(RULE_WIDTH));
        let _ = write!(self.writer, "{}", stats);
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}

impl<W: Write> std::fmt::Display for LogMonitor<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {:?}, clock_check_mask: {})",
            self.log_interval, self.clock_check_mask
        )
    }
}
