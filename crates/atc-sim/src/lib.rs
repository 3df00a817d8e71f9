//! `atc-sim` — the scheduler of the `atc` airport simulator.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`sim`]      | `Simulator` — the minute-resolution tick loop             |
//! | [`handlers`] | One handler per aircraft state (exhaustive dispatch)      |
//! | [`duration`] | The action-duration table                                 |
//! | [`event`]    | `SimEvent` / `AtcCall` — the structured output stream     |
//! | [`observer`] | `SimObserver` — tick-boundary and per-event callbacks     |
//! | [`error`]    | `SimError`                                                |
//!
//! # Tick model
//!
//! One tick is one simulated minute.  Per tick the scheduler snapshots all
//! non-terminal aircraft into descending-squawk order (emergencies first,
//! registration breaks ties), burns fuel on every airborne aircraft, then
//! dispatches each to the handler for its *current* state — which may already
//! be `Emergency` from the fuel pre-check of the same tick.  Aircraft are
//! processed sequentially against one `&mut Airport`, so a resource released
//! early in a tick is claimable later in the same tick.
//!
//! The run stops when every aircraft is terminal, or at the safety cap of
//! eight simulated days ([`atc_core::TICK_CAP`]) for scenarios that can never
//! finish.

pub mod duration;
pub mod error;
pub mod event;
pub mod handlers;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use duration::action_duration;
pub use error::{SimError, SimResult};
pub use event::{AtcCall, SimEvent, Speaker, Utterance};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulator;
