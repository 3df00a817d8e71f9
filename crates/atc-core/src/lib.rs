//! `atc-core` — foundational types for the `atc` airport simulator.
//!
//! This crate is a dependency of every other `atc-*` crate.  It intentionally
//! has no `atc-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `AircraftId`, `LocationId`, `RunwayId`, `GateId`        |
//! | [`time`]   | `Tick`, `WallTime`, `TICK_CAP`                          |
//! | [`attrs`]  | `Category`, `Size`, `Engine`, `Surface`, fuel burn      |
//! | [`squawk`] | `Squawk` transponder codes, class-block assignment      |
//! | [`error`]  | `AtcError`, `AtcResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod attrs;
pub mod error;
pub mod ids;
pub mod squawk;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use attrs::{Category, Engine, Size, Surface};
pub use error::{AtcError, AtcResult};
pub use ids::{AircraftId, GateId, LocationId, RunwayId};
pub use squawk::Squawk;
pub use time::{Tick, WallTime, TICK_CAP};
