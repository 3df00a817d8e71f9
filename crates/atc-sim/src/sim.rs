//! The `Simulator` struct and its tick loop.

use atc_aircraft::AircraftState;
use atc_airport::Airport;
use atc_core::{AircraftId, Tick};

use crate::event::SimEvent;
use crate::handlers::{self, HandlerCtx};
use crate::observer::SimObserver;
use crate::{SimError, SimResult};

/// The main simulation runner: a monotonically increasing tick counter and
/// exclusive ownership of the airport.
///
/// Per tick:
///
/// 1. Snapshot all non-terminal aircraft into dispatch order — descending
///    squawk, so the emergency code 7700 is always serviced first;
///    registration breaks ties deterministically.
/// 2. For each aircraft in that order: burn fuel if airborne (which may
///    force the aircraft into `Emergency` on the spot), then dispatch to the
///    handler for its current state.
/// 3. Deliver the tick's events to the observer and advance the clock.
///
/// The run ends when every aircraft is in a terminal state, or at the
/// [`TICK_CAP`][atc_core::TICK_CAP] safety bound for scenarios that cannot
/// finish (e.g. no runway the fleet fits on ever frees up).
pub struct Simulator {
    clock:   Tick,
    airport: Airport,
}

impl Simulator {
    /// Take ownership of a validated airport.  Rejects graphs that fail the
    /// start-consistency check rather than panicking mid-run.
    pub fn new(airport: Airport) -> SimResult<Simulator> {
        airport.validate().map_err(SimError::InvalidStart)?;
        Ok(Simulator { clock: Tick::ZERO, airport })
    }

    pub fn tick(&self) -> Tick {
        self.clock
    }

    pub fn airport(&self) -> &Airport {
        &self.airport
    }

    /// Consume the simulator, handing the final airport state back for
    /// post-run reporting.
    pub fn into_airport(self) -> Airport {
        self.airport
    }

    /// Every aircraft has reached `LeftAirport` or `Crashed`.
    pub fn finished(&self) -> bool {
        self.airport
            .aircraft_ids()
            .all(|id| self.airport.aircraft(id).state().is_terminal())
    }

    /// Run to completion or to the tick cap.  Returns the final tick.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Tick {
        // Initial-state events precede the first processed tick.
        for id in self.airport.aircraft_ids() {
            let event = SimEvent::InitialState {
                aircraft: id,
                state:    self.airport.aircraft(id).state(),
            };
            observer.on_event(self.clock, &event, &self.airport);
        }
        self.clock = self.clock + 1;

        while !self.finished() && !self.clock.past_cap() {
            self.step(observer);
        }

        observer.on_sim_end(self.clock, &self.airport);
        self.clock
    }

    /// Process exactly one tick and advance the clock.  Useful for tests and
    /// incremental stepping.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_tick_start(self.clock);

        let events = self.process_tick();
        for event in &events {
            observer.on_event(self.clock, event, &self.airport);
        }

        observer.on_tick_end(self.clock, &self.airport);
        self.clock = self.clock + 1;
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self) -> Vec<SimEvent> {
        let mut events = Vec::new();
        let mut ctx = HandlerCtx {
            airport: &mut self.airport,
            events:  &mut events,
        };

        for id in Self::dispatch_order(ctx.airport) {
            Self::physics_precheck(&mut ctx, id);
            handlers::dispatch(&mut ctx, id);
        }

        events
    }

    /// Non-terminal aircraft in dispatch order: descending squawk,
    /// registration ascending on equal codes.
    fn dispatch_order(airport: &Airport) -> Vec<AircraftId> {
        let mut order: Vec<AircraftId> = airport
            .aircraft_ids()
            .filter(|&id| !airport.aircraft(id).state().is_terminal())
            .collect();
        order.sort_by(|&a, &b| {
            let (a, b) = (airport.aircraft(a), airport.aircraft(b));
            b.squawk()
                .cmp(&a.squawk())
                .then_with(|| a.registration().cmp(b.registration()))
        });
        order
    }

    /// Fuel burn for airborne aircraft, ahead of dispatch.  On exhaustion the
    /// aircraft sinks 500 ft and — unless already gliding on the emergency
    /// branch — is forced into `Emergency` right now, so its handler this
    /// very tick is already the emergency one.
    fn physics_precheck(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
        if !ctx.plane(id).state().is_airborne() {
            return;
        }
        let before = ctx.plane(id).altitude();
        if ctx.plane_mut(id).burn_fuel() {
            return;
        }

        let altitude_ft = ctx.plane(id).altitude();
        if ctx.plane(id).state().is_emergency_descent() {
            // Gliding on empty tanks; the sink is the descent.
            if altitude_ft != before {
                ctx.emit(SimEvent::AltitudeChanged { aircraft: id, altitude_ft });
            }
        } else {
            ctx.emit(SimEvent::FuelExhausted { aircraft: id, altitude_ft });
            ctx.transition(id, AircraftState::Emergency);
        }
    }
}
