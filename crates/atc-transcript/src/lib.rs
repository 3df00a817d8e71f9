//! `atc-transcript` — human-readable output for the atc simulator.
//!
//! The scheduler in `atc-sim` emits typed [`SimEvent`]s and never formats
//! text; this crate turns the stream into three renditions:
//!
//! | Module      | Output                                                      |
//! |-------------|-------------------------------------------------------------|
//! | `narrative` | one prose line per event (`[Monday 12:05] OCN815 is landing`) |
//! | `phrase`    | radio phraseology for [`AtcCall`] transmissions             |
//! | `summary`   | per-tick CSV counters (`tick_summaries.csv` shape)          |
//!
//! [`TranscriptObserver`] drives the first two into any pair of
//! `std::io::Write` sinks; [`CsvSummaryObserver`] drives the third.
//!
//! # Usage
//!
//! ```rust,ignore
//! use atc_transcript::TranscriptObserver;
//!
//! let mut obs = TranscriptObserver::new(std::io::stdout(), std::io::stderr());
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("transcript error: {e}"));
//! ```
//!
//! [`SimEvent`]: atc_sim::SimEvent
//! [`AtcCall`]: atc_sim::AtcCall

pub mod error;
pub mod narrative;
pub mod observer;
pub mod phrase;
pub mod summary;


pub use error::{TranscriptError, TranscriptResult};
pub use observer::TranscriptObserver;
pub use summary::CsvSummaryObserver;
