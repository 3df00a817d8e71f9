//! Per-tick CSV summaries.
//!
//! One row per processed tick: the wall clock, the number of events emitted,
//! and a population count of the airport (airborne / on the ground /
//! terminal).  Useful for plotting traffic over a long run without parsing
//! the prose transcript.

use std::io::Write;

use atc_airport::Airport;
use atc_core::Tick;
use atc_sim::{SimEvent, SimObserver};
use csv::Writer;

use crate::{TranscriptError, TranscriptResult};

/// A [`SimObserver`] that writes one CSV row per tick to any `Write` sink.
///
/// Uses the same stored-error convention as
/// [`TranscriptObserver`][crate::TranscriptObserver]: check
/// [`take_error`][Self::take_error] after the run.
pub struct CsvSummaryObserver<W: Write> {
    writer:      Writer<W>,
    tick_events: u64,
    last_error:  Option<TranscriptError>,
    finished:    bool,
}

impl<W: Write> CsvSummaryObserver<W> {
    /// Wrap `sink` and write the header row.
    pub fn new(sink: W) -> TranscriptResult<Self> {
        let mut writer = Writer::from_writer(sink);
        writer.write_record(["tick", "wall_time", "events", "airborne", "on_ground", "terminal"])?;

        Ok(Self {
            writer,
            tick_events: 0,
            last_error: None,
            finished: false,
        })
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<TranscriptError> {
        self.last_error.take()
    }

    /// Flush and unwrap the inner sink.
    pub fn into_sink(mut self) -> TranscriptResult<W> {
        self.finish()?;
        Ok(self.writer.into_inner().map_err(|e| e.into_error())?)
    }

    fn finish(&mut self) -> TranscriptResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    fn store_err(&mut self, result: TranscriptResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write_row(&mut self, tick: Tick, airport: &Airport) -> TranscriptResult<()> {
        let mut airborne = 0u32;
        let mut on_ground = 0u32;
        let mut terminal = 0u32;
        for id in airport.aircraft_ids() {
            let state = airport.aircraft(id).state();
            if state.is_terminal() {
                terminal += 1;
            } else if state.is_airborne() {
                airborne += 1;
            } else {
                on_ground += 1;
            }
        }

        self.writer.write_record(&[
            tick.0.to_string(),
            tick.wall().to_string(),
            self.tick_events.to_string(),
            airborne.to_string(),
            on_ground.to_string(),
            terminal.to_string(),
        ])?;
        Ok(())
    }
}

impl<W: Write> SimObserver for CsvSummaryObserver<W> {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.tick_events = 0;
    }

    fn on_event(&mut self, _tick: Tick, _event: &SimEvent, _airport: &Airport) {
        self.tick_events += 1;
    }

    fn on_tick_end(&mut self, tick: Tick, airport: &Airport) {
        let result = self.write_row(tick, airport);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _airport: &Airport) {
        let result = self.finish();
        self.store_err(result);
    }
}
