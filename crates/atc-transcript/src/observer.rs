//! `TranscriptObserver<N, R>` — bridges `SimObserver` to two text sinks.

use std::io::Write;

use atc_airport::Airport;
use atc_core::Tick;
use atc_sim::{SimEvent, SimObserver, Speaker};

use crate::TranscriptError;
use crate::{narrative, phrase};

/// A [`SimObserver`] that writes the narrative log to one sink and the radio
/// transcript to another.  Pass the same sink twice (e.g. two handles on
/// stdout) to interleave them.
///
/// Write errors are stored internally because `SimObserver` methods have no
/// return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TranscriptObserver<N: Write, R: Write> {
    narrative:  N,
    radio:      R,
    last_error: Option<TranscriptError>,
}

impl<N: Write, R: Write> TranscriptObserver<N, R> {
    pub fn new(narrative: N, radio: R) -> Self {
        Self {
            narrative,
            radio,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TranscriptError> {
        self.last_error.take()
    }

    /// Unwrap the two sinks (e.g. to inspect buffers after the sim).
    pub fn into_sinks(self) -> (N, R) {
        (self.narrative, self.radio)
    }

    fn store_err(&mut self, result: std::io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }
}

impl<N: Write, R: Write> SimObserver for TranscriptObserver<N, R> {
    fn on_event(&mut self, tick: Tick, event: &SimEvent, airport: &Airport) {
        if let SimEvent::Radio { aircraft, ref call } = *event {
            let plane = airport.aircraft(aircraft);
            let who = match call.speaker {
                Speaker::Pilot => plane.registration(),
                Speaker::Tower => airport.iata(),
            };
            let line = phrase::render(call, plane, airport);
            let result = writeln!(self.radio, "[{}][{who}] {line}", tick.wall());
            self.store_err(result);
            return;
        }

        if let Some(line) = narrative::render(event, airport) {
            let result = writeln!(self.narrative, "[{}] {line}", tick.wall());
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _airport: &Airport) {
        let result = self.narrative.flush().and_then(|()| self.radio.flush());
        self.store_err(result);
    }
}
