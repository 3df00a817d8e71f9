//! The gate turnaround: unboard, checkup, refuel, board, then the IFR
//! clearance exchange that starts the departure.

use atc_aircraft::AircraftState;
use atc_core::AircraftId;

use crate::event::{SimEvent, Utterance};
use crate::handlers::HandlerCtx;

pub fn unboard(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.action_complete(id) {
        let count = ctx.plane_mut(id).passengers_mut().deboard_all();
        ctx.emit(SimEvent::PassengersDeboarded { aircraft: id, count });
        ctx.transition(id, AircraftState::TechnicalCheckup);
    }
}

pub fn technical_checkup(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.action_complete(id) {
        ctx.transition(id, AircraftState::Refueling);
    }
}

pub fn refuel(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.action_complete(id) {
        let added = ctx.plane_mut(id).fuel_mut().refill();
        ctx.emit(SimEvent::Refueled { aircraft: id, added });
        ctx.transition(id, AircraftState::Boarding);
    }
}

pub fn board(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.action_complete(id) {
        let count = ctx.plane_mut(id).passengers_mut().board_full();
        ctx.emit(SimEvent::PassengersBoarded { aircraft: id, count });
        ctx.transition(id, AircraftState::StandingAtGate);
    }
}

/// Departure start: wait for a compatible runway (the taxi route and runway
/// link are set on grant — the runway surface itself is contested later, at
/// the hold-short point), then run the IFR clearance exchange.
pub fn stand_at_gate(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    match ctx.plane(id).comms() {
        0 => {
            let (size, engine) = (ctx.plane(id).size(), ctx.plane(id).engine());
            if let Ok(runway) = ctx.airport.free_compatible_runway(size, engine) {
                let route = ctx.airport.taxi_route_to_runway(runway);
                ctx.plane_mut(id).set_taxi_route(route);
                ctx.plane_mut(id).set_runway(Some(runway));
                ctx.pilot(id, Utterance::RequestIfrClearance);
                ctx.plane_mut(id).advance_comms();
            }
        }
        1 => {
            let squawk = ctx.plane(id).squawk();
            ctx.tower(id, Utterance::IfrClearance { squawk });
            ctx.plane_mut(id).advance_comms();
        }
        _ => {
            let squawk = ctx.plane(id).squawk();
            ctx.pilot(id, Utterance::ReadbackIfrClearance { squawk });
            ctx.transition(id, AircraftState::PushingBack);
        }
    }
}
