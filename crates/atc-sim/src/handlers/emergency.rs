//! The fuel-emergency branch.
//!
//! Entered only by force-transition from the physics pre-check.  The aircraft
//! has empty tanks, so it keeps sinking 500 ft per tick through that same
//! pre-check; these handlers never descend on their own.  Once down, the
//! ground chain (evacuate, checkup, refuel) rejoins the normal flow at
//! `Vacating`.

use atc_aircraft::AircraftState;
use atc_core::AircraftId;

use crate::event::{SimEvent, Utterance};
use crate::handlers::HandlerCtx;

/// Grab `runway` for an emergency landing.
fn reserve_for_landing(ctx: &mut HandlerCtx<'_>, id: AircraftId, runway: atc_core::RunwayId) {
    ctx.airport.runway_mut(runway).set_occupant(id);
    ctx.plane_mut(id).set_runway(Some(runway));
    ctx.emit(SimEvent::RunwayReserved { aircraft: id, runway });
}

pub fn emergency(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    match ctx.plane(id).comms() {
        0 => {
            let passengers = ctx.plane(id).passengers().count();
            ctx.pilot(id, Utterance::Mayday { passengers });

            // Below the corridor with a runway already reserved (lost power
            // on final): continue the landing under emergency rules.
            if ctx.plane(id).altitude() < 3_000 && ctx.plane(id).runway().is_some() {
                ctx.transition(id, AircraftState::EmergencyFinalApproach);
            } else {
                ctx.plane_mut(id).advance_comms();
            }
        }
        1 => {
            let (size, engine) = (ctx.plane(id).size(), ctx.plane(id).engine());
            match ctx.airport.free_compatible_runway(size, engine) {
                Ok(runway) => {
                    ctx.tower(id, Utterance::MaydayClearedToLand { runway });
                    reserve_for_landing(ctx, id, runway);
                    ctx.transition(id, AircraftState::EmergencyFinalApproach);
                }
                Err(_) => {
                    ctx.tower(id, Utterance::MaydayGlide);
                    ctx.plane_mut(id).advance_comms();
                }
            }
        }
        _ => {
            // Gliding.  The ground wins over a late clearance.
            if ctx.plane(id).altitude() == 0 {
                let passengers = ctx.plane(id).passengers().count();
                ctx.emit(SimEvent::Crashed { aircraft: id, passengers });
                ctx.transition(id, AircraftState::Crashed);
                return;
            }

            let (size, engine) = (ctx.plane(id).size(), ctx.plane(id).engine());
            if let Ok(runway) = ctx.airport.free_compatible_runway(size, engine) {
                ctx.tower(id, Utterance::MaydayClearedToLand { runway });
                reserve_for_landing(ctx, id, runway);
                ctx.transition(id, AircraftState::EmergencyFinalApproach);
            }
        }
    }
}

pub fn final_approach(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    // Descent is the 500 ft/tick fuel-starved sink from the physics
    // pre-check; nothing to do here but wait for the ground.
    if ctx.plane(id).comms() == 0 {
        ctx.tower(id, Utterance::EmergencyPersonnelStandby);
        ctx.plane_mut(id).advance_comms();
    }

    if ctx.plane(id).altitude() == 0 {
        ctx.transition(id, AircraftState::EmergencyLanding);
    }
}

pub fn land(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.action_complete(id) {
        let runway = ctx.linked_runway(id);
        let threshold = ctx.airport.runway(runway).location();
        ctx.plane_mut(id).set_location(Some(threshold));
        ctx.transition(id, AircraftState::EmergencyEvacuation);
    }
}

pub fn evacuate(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.action_complete(id) {
        let count = ctx.plane_mut(id).passengers_mut().deboard_all();
        ctx.emit(SimEvent::PassengersDeboarded { aircraft: id, count });
        ctx.transition(id, AircraftState::EmergencyCheckup);
    }
}

pub fn checkup(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.action_complete(id) {
        ctx.transition(id, AircraftState::EmergencyRefueling);
    }
}

pub fn refuel(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.action_complete(id) {
        let added = ctx.plane_mut(id).fuel_mut().refill();
        ctx.emit(SimEvent::Refueled { aircraft: id, added });
        ctx.transition(id, AircraftState::Vacating);
    }
}
