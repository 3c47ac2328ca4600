//! Observers for the solver.
//!
//! The solver reports what it does to a [`SearchMonitor`]; it never logs on
//! its own. Callbacks take `&mut self` and run inline with the search, so
//! keep them cheap.
//!
//! - `search_monitor`: the trait.
//! - `no_op`: default, does nothing.
//! - `log`: periodic progress table on any writer.
//! - `composite`: forwards every event to several monitors.

pub mod composite;
pub mod log;
pub mod no_op;
pub mod search_monitor;

pub use composite::CompositeMonitor;
pub use log::LogMonitor;
pub use no_op::NoOpMonitor;
pub use search_monitor::SearchMonitor;
