//! Ground movement: vacating, taxi legs, and runway crossings.
//!
//! Taxi routes alternate taxiway and runway waypoints, so a leg toward a
//! runway waypoint is always `TaxiingToCrossing`; `CrossingRunway` consumes
//! two queue entries per crossing (the runway when rolling onto it, the
//! waypoint beyond when rolling off).

use atc_aircraft::AircraftState;
use atc_core::{AircraftId, RunwayId};

use crate::event::{SimEvent, Utterance};
use crate::handlers::HandlerCtx;

/// The runway sitting on the front taxi-route waypoint.
///
/// # Panics
/// If that waypoint is not a runway — the route alternation invariant broke.
fn crossing_runway(ctx: &HandlerCtx<'_>, id: AircraftId) -> RunwayId {
    let front = ctx.route_front(id);
    ctx.airport.runway_at(front).unwrap_or_else(|| {
        panic!(
            "taxi route of {} fronts non-runway waypoint {}",
            ctx.plane(id).registration(),
            ctx.airport.location(front).name()
        )
    })
}

/// Roll onto the runway: take the crosser slot, move, consume the queue
/// entry.  Shared by the two states that wait for crossing clearance.
fn begin_crossing(ctx: &mut HandlerCtx<'_>, id: AircraftId, runway: RunwayId) {
    ctx.tower(id, Utterance::ClearedToCross { runway });
    ctx.airport.runway_mut(runway).set_crosser(id);
    let front = ctx.route_front(id);
    ctx.plane_mut(id).set_location(Some(front));
    ctx.plane_mut(id).taxi_route_mut().pop_front();
    ctx.transition(id, AircraftState::CrossingRunway);
}

/// Pick the taxi state for the remaining route.  Departures still hold a
/// runway link; arrivals cleared theirs when vacating.
fn next_taxi_state(ctx: &HandlerCtx<'_>, id: AircraftId) -> AircraftState {
    if ctx.plane(id).taxi_route().is_empty() {
        if ctx.plane(id).runway().is_none() {
            AircraftState::TaxiingToApron
        } else {
            AircraftState::TaxiingToRunway
        }
    } else {
        AircraftState::TaxiingToCrossing
    }
}

/// Single-shot: step off the runway threshold, free the runway, and plan the
/// taxi to the apron.
pub fn vacate(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    let runway = ctx.linked_runway(id);
    ctx.pilot(id, Utterance::RunwayVacated { runway });

    let threshold = ctx.airport.runway(runway).location();
    let turnoff = ctx
        .airport
        .location(threshold)
        .prev()
        .unwrap_or_else(|| panic!("runway {} has no turnoff", ctx.airport.runway(runway).name()));

    ctx.plane_mut(id).set_location(Some(turnoff));
    ctx.airport.runway_mut(runway).clear_occupant(id);
    ctx.plane_mut(id).set_runway(None);
    ctx.emit(SimEvent::RunwayVacated { aircraft: id, runway });

    let route = ctx.airport.taxi_route_to_apron(turnoff);
    ctx.plane_mut(id).set_taxi_route(route);
    let next = next_taxi_state(ctx, id);
    ctx.transition(id, next);
}

pub fn taxi_to_crossing(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    match ctx.plane(id).comms() {
        0 => {
            if ctx.plane(id).action_timer() == 0 {
                let holding_point = ctx.route_front(id);
                let via = ctx.current_location(id);
                ctx.tower(id, Utterance::TaxiToHoldingPoint { holding_point, via });
            }
            if ctx.action_complete(id) {
                let holding_point = ctx.route_front(id);
                ctx.pilot(id, Utterance::HoldingShortAt { holding_point });
                ctx.plane_mut(id).advance_comms();
            }
        }
        _ => {
            let runway = crossing_runway(ctx, id);
            if ctx.airport.can_cross(runway) {
                begin_crossing(ctx, id, runway);
            } else {
                ctx.tower(id, Utterance::HoldPosition);
                ctx.transition(id, AircraftState::WaitingAtCrossing);
            }
        }
    }
}

/// Parked at a crossing; re-checks right-of-way every tick.
pub fn wait_at_crossing(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.plane(id).comms() == 0 {
        ctx.pilot(id, Utterance::HoldingPosition);
        ctx.plane_mut(id).advance_comms();
    }

    let runway = crossing_runway(ctx, id);
    if ctx.airport.can_cross(runway) {
        begin_crossing(ctx, id, runway);
    }
}

pub fn cross_runway(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    match ctx.plane(id).comms() {
        0 => {
            let here = ctx.current_location(id);
            let runway = ctx.airport.runway_at(here).unwrap_or_else(|| {
                panic!("{} crosses a non-runway waypoint", ctx.plane(id).registration())
            });
            ctx.pilot(id, Utterance::ReadbackCross { runway });
            ctx.plane_mut(id).advance_comms();
        }
        _ => {
            if ctx.action_complete(id) {
                let here = ctx.current_location(id);
                let runway = ctx.airport.runway_at(here).unwrap_or_else(|| {
                    panic!("{} crosses a non-runway waypoint", ctx.plane(id).registration())
                });
                ctx.airport.runway_mut(runway).clear_crosser(id);

                let beyond = ctx.route_front(id);
                ctx.plane_mut(id).set_location(Some(beyond));
                ctx.plane_mut(id).taxi_route_mut().pop_front();
                ctx.emit(SimEvent::TaxiedTo { aircraft: id, location: beyond });

                let next = next_taxi_state(ctx, id);
                ctx.transition(id, next);
            }
        }
    }
}

pub fn taxi_to_apron(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    match ctx.plane(id).comms() {
        0 => {
            let via = ctx.current_location(id);
            ctx.pilot(id, Utterance::TaxiToApron { via });
            ctx.plane_mut(id).advance_comms();
        }
        1 => {
            // The taxi leg itself, then a gate request retried every tick
            // until the apron has room.
            if ctx.action_complete(id) {
                if let Ok(gate) = ctx.airport.reserve_gate(id) {
                    ctx.tower(id, Utterance::TaxiToGate { gate });
                    ctx.plane_mut(id).advance_comms();
                }
            }
        }
        _ => {
            let plane = ctx.plane(id);
            let gate = plane
                .gate()
                .unwrap_or_else(|| panic!("{} was not assigned a gate", plane.registration()));
            ctx.pilot(id, Utterance::ReadbackTaxiToGate { gate });
            ctx.emit(SimEvent::GateEntered { aircraft: id, gate });
            ctx.plane_mut(id).set_location(None);
            ctx.transition(id, AircraftState::Unboarding);
        }
    }
}

pub fn taxi_to_runway(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    let runway = ctx.linked_runway(id);
    match ctx.plane(id).comms() {
        0 => {
            let via = ctx.current_location(id);
            ctx.tower(id, Utterance::TaxiToRunway { runway, via });
            ctx.plane_mut(id).advance_comms();
        }
        _ => {
            if ctx.plane(id).action_timer() == 0 {
                let via = ctx.current_location(id);
                ctx.pilot(id, Utterance::ReadbackTaxiToRunway { runway, via });
            }
            if ctx.action_complete(id) {
                ctx.pilot(id, Utterance::HoldingShortRunway { runway });
                ctx.transition(id, AircraftState::HoldingShort);
            }
        }
    }
}
