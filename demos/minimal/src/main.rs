//! minimal — smallest runnable scenario for the atc simulator.
//!
//! One regional airport with two runways and three gates, one airliner
//! departing and one private prop arriving.  The narrative log goes to
//! stdout; the radio transcript and per-tick CSV summaries land in
//! `output/minimal/`.

use std::fs::File;
use std::io::{self, Write};
use std::time::Instant;

use anyhow::Result;

use atc_aircraft::{AircraftSpec, AircraftState};
use atc_airport::{Airport, AirportBuilder};
use atc_core::{Category, Engine, Size, Surface, Tick};
use atc_sim::{SimEvent, SimObserver, Simulator};
use atc_transcript::{CsvSummaryObserver, TranscriptObserver};

// ── Observer fan-out ─────────────────────────────────────────────────────────

/// Forwards every callback to two observers, since `Simulator::run` drives
/// exactly one.
struct Tee<A: SimObserver, B: SimObserver>(A, B);

impl<A: SimObserver, B: SimObserver> SimObserver for Tee<A, B> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_event(&mut self, tick: Tick, event: &SimEvent, airport: &Airport) {
        self.0.on_event(tick, event, airport);
        self.1.on_event(tick, event, airport);
    }

    fn on_tick_end(&mut self, tick: Tick, airport: &Airport) {
        self.0.on_tick_end(tick, airport);
        self.1.on_tick_end(tick, airport);
    }

    fn on_sim_end(&mut self, final_tick: Tick, airport: &Airport) {
        self.0.on_sim_end(final_tick, airport);
        self.1.on_sim_end(final_tick, airport);
    }
}

// ── Scenario ─────────────────────────────────────────────────────────────────

fn build_airport() -> Result<Airport> {
    // Taxi chain: apron — Alpha — R25 — Bravo — R07.
    let mut builder = AirportBuilder::new("Saint-Ex Regional", "SXR", "Saint-Ex Tower", 3);
    let alpha = builder.add_taxiway("Alpha");
    let (r25, _) = builder.add_runway("R25", 2_500, Surface::Asphalt);
    let bravo = builder.add_taxiway("Bravo");
    let (r07, _) = builder.add_runway("R07", 1_000, Surface::Grass);
    builder.link(alpha, r25);
    builder.link(r25, bravo);
    builder.link(bravo, r07);

    builder.add_aircraft(AircraftSpec {
        registration:       "PH-KLM".to_owned(),
        callsign:           "Flying Dutchman 21".to_owned(),
        model:              "Boeing 737".to_owned(),
        category:           Category::Airline,
        size:               Size::Medium,
        engine:             Engine::Jet,
        altitude:           0,
        fuel:               30_000,
        fuel_capacity:      60_000,
        passengers:         0,
        passenger_capacity: 120,
        state:              AircraftState::StandingAtGate,
    })?;

    builder.add_aircraft(AircraftSpec {
        registration:       "OO-ATC".to_owned(),
        callsign:           "Charlie Hotel 4".to_owned(),
        model:              "Cessna 172".to_owned(),
        category:           Category::Private,
        size:               Size::Small,
        engine:             Engine::Propeller,
        altitude:           10_000,
        fuel:               5_000,
        fuel_capacity:      20_000,
        passengers:         2,
        passenger_capacity: 3,
        state:              AircraftState::Approaching,
    })?;

    Ok(builder.build()?)
}

// ── main ─────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== minimal — atc simulator ===");
    println!();

    let airport = build_airport()?;
    println!(
        "Airport: {} ({}) — {} runways, {} gates, {} aircraft",
        airport.name(),
        airport.iata(),
        airport.runways_in_order().len(),
        airport.gate_count(),
        airport.aircraft_count()
    );
    println!();

    std::fs::create_dir_all("output/minimal")?;
    let radio = File::create("output/minimal/radio.txt")?;
    let transcript = TranscriptObserver::new(io::stdout().lock(), radio);
    let summaries = CsvSummaryObserver::new(File::create("output/minimal/tick_summaries.csv")?)?;
    let mut obs = Tee(transcript, summaries);

    let mut sim = Simulator::new(airport)?;
    let t0 = Instant::now();
    let last_tick = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    let Tee(mut transcript, mut summaries) = obs;
    if let Some(e) = transcript.take_error() {
        eprintln!("transcript error: {e}");
    }
    if let Some(e) = summaries.take_error() {
        eprintln!("summary error: {e}");
    }

    println!();
    println!(
        "Simulation complete: {} ticks ({}) in {:.3} s",
        last_tick.0,
        last_tick.wall(),
        elapsed.as_secs_f64()
    );
    println!();

    // Final state table.
    let airport = sim.airport();
    println!("{:<12} {:<22} {:<10}", "Reg", "Callsign", "State");
    println!("{}", "-".repeat(46));
    let mut stdout = io::stdout().lock();
    for id in airport.aircraft_ids() {
        let plane = airport.aircraft(id);
        writeln!(
            stdout,
            "{:<12} {:<22} {:?}",
            plane.registration(),
            plane.callsign(),
            plane.state()
        )?;
    }

    Ok(())
}
