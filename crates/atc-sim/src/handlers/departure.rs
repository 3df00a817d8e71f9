//! Departure: pushback through climb-out.

use atc_aircraft::AircraftState;
use atc_core::AircraftId;

use crate::event::{SimEvent, Utterance};
use crate::handlers::HandlerCtx;

pub fn pushback(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    match ctx.plane(id).comms() {
        0 => {
            let plane = ctx.plane(id);
            let gate = plane
                .gate()
                .unwrap_or_else(|| panic!("{} pushes back without a gate", plane.registration()));
            ctx.pilot(id, Utterance::RequestPushback { gate });
            ctx.plane_mut(id).advance_comms();
        }
        1 => {
            ctx.tower(id, Utterance::PushbackApproved);
            ctx.plane_mut(id).advance_comms();
        }
        2 => {
            if ctx.plane(id).action_timer() == 0 {
                ctx.pilot(id, Utterance::ReadbackPushback);
            }
            if ctx.action_complete(id) {
                let plane = ctx.plane(id);
                let gate = plane.gate().unwrap_or_else(|| {
                    panic!("{} pushes back without a gate", plane.registration())
                });
                ctx.airport.release_gate(id);
                ctx.emit(SimEvent::GateLeft { aircraft: id, gate });

                let apron = ctx
                    .airport
                    .apron_connection()
                    .unwrap_or_else(|| panic!("airport has no apron connection"));
                ctx.plane_mut(id).set_location(Some(apron));
                ctx.plane_mut(id).reset_action();
                ctx.plane_mut(id).advance_comms();
            }
        }
        _ => {
            ctx.pilot(id, Utterance::ReadyToTaxi);
            let next = if ctx.plane(id).taxi_route().is_empty() {
                AircraftState::TaxiingToRunway
            } else {
                AircraftState::TaxiingToCrossing
            };
            ctx.transition(id, next);
        }
    }
}

pub fn hold_short(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    let runway = ctx.linked_runway(id);
    match ctx.plane(id).comms() {
        0 => {
            ctx.pilot(id, Utterance::HoldingShortRunway { runway });
            ctx.plane_mut(id).advance_comms();
        }
        _ => {
            // The surface is contested here, not at the gate: wait until the
            // runway is clear of both traffic and crossers, then take it.
            if ctx.airport.runway(runway).is_vacant() {
                ctx.tower(id, Utterance::LineUpAndWait { runway });
                ctx.airport.runway_mut(runway).set_occupant(id);
                let threshold = ctx.airport.runway(runway).location();
                ctx.plane_mut(id).set_location(Some(threshold));
                ctx.emit(SimEvent::RunwayReserved { aircraft: id, runway });
                ctx.transition(id, AircraftState::LiningUp);
            }
        }
    }
}

pub fn line_up(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.action_complete(id) {
        let runway = ctx.linked_runway(id);
        ctx.pilot(id, Utterance::ReadyForTakeoff { runway });
        ctx.transition(id, AircraftState::ReadyForTakeoff);
    }
}

pub fn ready_for_takeoff(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    let runway = ctx.linked_runway(id);
    match ctx.plane(id).comms() {
        0 => {
            ctx.tower(id, Utterance::ClearedForTakeoff { runway });
            ctx.plane_mut(id).advance_comms();
        }
        _ => {
            ctx.pilot(id, Utterance::ReadbackTakeoff { runway });
            ctx.transition(id, AircraftState::TakingOff);
        }
    }
}

pub fn take_off(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.action_complete(id) {
        let runway = ctx.linked_runway(id);
        ctx.airport.runway_mut(runway).clear_occupant(id);
        ctx.plane_mut(id).set_location(None);
        ctx.plane_mut(id).set_runway(None);
        ctx.emit(SimEvent::RunwayVacated { aircraft: id, runway });
        ctx.transition(id, AircraftState::Ascending);
    }
}

pub fn ascend(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.action_complete(id) {
        ctx.plane_mut(id).ascend(1_000);
        let altitude_ft = ctx.plane(id).altitude();

        if altitude_ft >= 5_000 {
            ctx.emit(SimEvent::Departed { aircraft: id, altitude_ft });
            ctx.transition(id, AircraftState::LeftAirport);
        } else {
            ctx.emit(SimEvent::AltitudeChanged { aircraft: id, altitude_ft });
            ctx.plane_mut(id).reset_action();
        }
    }
}
