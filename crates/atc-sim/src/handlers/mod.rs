//! Per-state aircraft handlers.
//!
//! One function per state, grouped by flight phase.  Each handler runs at
//! most once per aircraft per tick, reads the protocol counters to find its
//! phase, and mutates the shared airport through [`HandlerCtx`].  Dispatch is
//! an exhaustive match, so adding a state without a handler is a compile
//! error.

mod arrival;
mod departure;
mod emergency;
mod gate;
mod taxi;

use atc_aircraft::{Aircraft, AircraftState};
use atc_airport::Airport;
use atc_core::{AircraftId, LocationId, RunwayId};

use crate::duration::action_duration;
use crate::event::{AtcCall, SimEvent, Speaker, Utterance};

/// Mutable view handed to every handler: the shared airport plus the tick's
/// event buffer.
pub(crate) struct HandlerCtx<'a> {
    pub airport: &'a mut Airport,
    pub events:  &'a mut Vec<SimEvent>,
}

impl HandlerCtx<'_> {
    pub fn plane(&self, id: AircraftId) -> &Aircraft {
        self.airport.aircraft(id)
    }

    pub fn plane_mut(&mut self, id: AircraftId) -> &mut Aircraft {
        self.airport.aircraft_mut(id)
    }

    pub fn emit(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Change state, emitting the transition.  Protocol counters reset as
    /// part of [`Aircraft::transition_to`].
    pub fn transition(&mut self, id: AircraftId, to: AircraftState) {
        let from = self.plane(id).state();
        self.plane_mut(id).transition_to(to);
        self.emit(SimEvent::StateChanged { aircraft: id, from, to });
    }

    pub fn pilot(&mut self, id: AircraftId, utterance: Utterance) {
        self.emit(SimEvent::Radio {
            aircraft: id,
            call:     AtcCall { speaker: Speaker::Pilot, utterance },
        });
    }

    pub fn tower(&mut self, id: AircraftId, utterance: Utterance) {
        self.emit(SimEvent::Radio {
            aircraft: id,
            call:     AtcCall { speaker: Speaker::Tower, utterance },
        });
    }

    /// Advance the act phase by one tick; true once the state's duration is
    /// reached.  Keeps returning true on later ticks, so a handler blocked on
    /// a resource can retry without losing completion.
    pub fn action_complete(&mut self, id: AircraftId) -> bool {
        let duration = action_duration(self.plane(id));
        self.plane_mut(id).tick_action() >= duration
    }

    /// The runway this aircraft is linked to.
    ///
    /// # Panics
    /// If there is none — the calling handler's state guarantees the link.
    pub fn linked_runway(&self, id: AircraftId) -> RunwayId {
        let plane = self.plane(id);
        plane
            .runway()
            .unwrap_or_else(|| panic!("{} holds no runway link", plane.registration()))
    }

    /// Front of the taxi route.
    ///
    /// # Panics
    /// If the route is empty — the calling handler's state guarantees a leg.
    pub fn route_front(&self, id: AircraftId) -> LocationId {
        let plane = self.plane(id);
        *plane
            .taxi_route()
            .front()
            .unwrap_or_else(|| panic!("{} has an empty taxi route", plane.registration()))
    }

    /// The waypoint the aircraft currently sits on.
    ///
    /// # Panics
    /// If the aircraft is not on the taxi graph.
    pub fn current_location(&self, id: AircraftId) -> LocationId {
        let plane = self.plane(id);
        plane
            .location()
            .unwrap_or_else(|| panic!("{} is not on the taxi graph", plane.registration()))
    }
}

/// Run the handler for the aircraft's current state.
pub(crate) fn dispatch(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    use AircraftState::*;

    match ctx.plane(id).state() {
        // Arrival.
        Approaching => arrival::approach(ctx, id),
        DescendingTo5000 => arrival::descend_to_5000(ctx, id),
        DescendingTo3000 => arrival::descend_to_3000(ctx, id),
        FlyingWaitPattern => arrival::fly_wait_pattern(ctx, id),
        FinalApproach => arrival::final_approach(ctx, id),
        Landing => arrival::land(ctx, id),
        Vacating => taxi::vacate(ctx, id),

        // Ground movement.
        TaxiingToApron => taxi::taxi_to_apron(ctx, id),
        TaxiingToRunway => taxi::taxi_to_runway(ctx, id),
        TaxiingToCrossing => taxi::taxi_to_crossing(ctx, id),
        WaitingAtCrossing => taxi::wait_at_crossing(ctx, id),
        CrossingRunway => taxi::cross_runway(ctx, id),

        // Gate turnaround.
        Unboarding => gate::unboard(ctx, id),
        TechnicalCheckup => gate::technical_checkup(ctx, id),
        Refueling => gate::refuel(ctx, id),
        Boarding => gate::board(ctx, id),
        StandingAtGate => gate::stand_at_gate(ctx, id),

        // Departure.
        PushingBack => departure::pushback(ctx, id),
        HoldingShort => departure::hold_short(ctx, id),
        LiningUp => departure::line_up(ctx, id),
        ReadyForTakeoff => departure::ready_for_takeoff(ctx, id),
        TakingOff => departure::take_off(ctx, id),
        Ascending => departure::ascend(ctx, id),

        // Emergency branch.
        Emergency => emergency::emergency(ctx, id),
        EmergencyFinalApproach => emergency::final_approach(ctx, id),
        EmergencyLanding => emergency::land(ctx, id),
        EmergencyEvacuation => emergency::evacuate(ctx, id),
        EmergencyCheckup => emergency::checkup(ctx, id),
        EmergencyRefueling => emergency::refuel(ctx, id),

        // Terminal states never reach dispatch; the scheduler filters them.
        LeftAirport | Crashed => {}
    }
}
