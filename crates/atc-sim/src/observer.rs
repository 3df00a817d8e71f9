//! Simulation observer trait for transcript rendering and data collection.

use atc_airport::Airport;
use atc_core::Tick;

use crate::event::SimEvent;

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The `&Airport` argument is read-only
/// state for resolving IDs to names; events reference entities by ID only.
///
/// # Example — departure counter
///
/// ```rust,ignore
/// struct Departures(usize);
///
/// impl SimObserver for Departures {
///     fn on_event(&mut self, _tick: Tick, event: &SimEvent, _airport: &Airport) {
///         if matches!(event, SimEvent::Departed { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any aircraft runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per emitted event, in emission order, after every aircraft
    /// of the tick has been processed.
    fn on_event(&mut self, _tick: Tick, _event: &SimEvent, _airport: &Airport) {}

    /// Called at the end of each tick with the settled airport state.
    fn on_tick_end(&mut self, _tick: Tick, _airport: &Airport) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _airport: &Airport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
