use std::fmt;
use std::time::Duration;

/// Which of the two lockstep searches an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Search rooted at the board being solved.
    Main,
    /// Search rooted at its twin.
    Twin,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Main => write!(f, "main"),
            Side::Twin => write!(f, "twin"),
        }
    }
}

/// Counters collected while solving one board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverStatistics {
    pub expansions_main: u64,
    pub expansions_twin: u64,
    /// Nodes pushed onto either frontier, roots included.
    pub nodes_inserted: u64,
    /// Neighbours dropped because they undo the last slide or were already expanded.
    pub cycle_skips: u64,
    /// Popped nodes discarded because their board was already expanded.
    pub stale_pops: u64,
    pub frontier_main: usize,
    pub frontier_twin: usize,
    pub peak_frontier_main: usize,
    pub peak_frontier_twin: usize,
    pub time_total: Duration,
}

impl SolverStatistics {
    #[inline]
    pub fn on_expanded(&mut self, side: Side) {
        match side {
            Side::Main => self.expansions_main = self.expansions_main.saturating_add(1),
            Side::Twin => self.expansions_twin = self.expansions_twin.saturating_add(1),
        }
    }

    #[inline]
    pub fn on_inserted(&mut self) {
        self.nodes_inserted = self.nodes_inserted.saturating_add(1);
    }

    #[inline]
    pub fn on_cycle_skip(&mut self) {
        self.cycle_skips = self.cycle_skips.saturating_add(1);
    }

    #[inline]
    pub fn on_stale_pop(&mut self) {
        self.stale_pops = self.stale_pops.saturating_add(1);
    }

    #[inline]
    pub fn set_frontier(&mut self, side: Side, len: usize, high_water: usize) {
        match side {
            Side::Main => {
                self.frontier_main = len;
                self.peak_frontier_main = self.peak_frontier_main.max(high_water);
            }
            Side::Twin => {
                self.frontier_twin = len;
                self.peak_frontier_twin = self.peak_frontier_twin.max(high_water);
            }
        }
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    pub fn expansions(&self) -> u64 {
        self.expansions_main.saturating_add(self.expansions_twin)
    }
}

impl fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Expansions (main):    {}", self.expansions_main)?;
        writeln!(f, "  Expansions (twin):    {}", self.expansions_twin)?;
        writeln!(f, "  Nodes inserted:       {}", self.nodes_inserted)?;
        writeln!(f, "  Cycle skips:          {}", self.cycle_skips)?;
        writeln!(f, "  Stale pops:           {}", self.stale_pops)?;
        writeln!(f, "  Peak frontier (main): {}", self.peak_frontier_main)?;
        writeln!(f, "  Peak frontier (twin): {}", self.peak_frontier_twin)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
