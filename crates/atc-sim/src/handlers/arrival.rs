//! Approach and descent: first contact through touchdown.

use atc_aircraft::AircraftState;
use atc_airport::Airport;
use atc_core::{AircraftId, Engine};

use crate::event::{SimEvent, Utterance};
use crate::handlers::HandlerCtx;

/// The tower's delay estimate for a hold instruction: how long until the
/// current 3000 ft holder is down, by its altitude and descent rate.
fn hold_estimate(airport: &Airport) -> u32 {
    match airport.slot_3000() {
        Some(holder) => {
            let plane = airport.aircraft(holder);
            let rate = match plane.engine() {
                Engine::Jet => 1_000,
                Engine::Propeller => 500,
            };
            plane.altitude() / rate
        }
        None => 3,
    }
}

pub fn approach(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    match ctx.plane(id).comms() {
        0 => {
            ctx.pilot(id, Utterance::AnnounceArrival);
            ctx.plane_mut(id).advance_comms();
        }
        1 => {
            // Wait for the 5000 ft corridor slot; retried silently.
            if ctx.airport.is_slot_5000_vacant() {
                ctx.airport.occupy_slot_5000(id);
                let squawk = ctx.plane(id).squawk();
                ctx.tower(id, Utterance::DescendTo5000 { squawk });
                ctx.plane_mut(id).advance_comms();
            }
        }
        _ => {
            let squawk = ctx.plane(id).squawk();
            ctx.pilot(id, Utterance::ReadbackDescend5000 { squawk });
            ctx.transition(id, AircraftState::DescendingTo5000);
        }
    }
}

pub fn descend_to_5000(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    assert_eq!(
        ctx.airport.slot_5000(),
        Some(id),
        "{} descends to 5000 ft without holding the slot",
        ctx.plane(id).registration()
    );

    if ctx.plane(id).altitude() > 5_000 {
        if ctx.action_complete(id) && ctx.plane_mut(id).descend(1_000) {
            let altitude_ft = ctx.plane(id).altitude();
            ctx.emit(SimEvent::AltitudeChanged { aircraft: id, altitude_ft });
            ctx.plane_mut(id).reset_action();
        }
    }

    if ctx.plane(id).altitude() <= 5_000 {
        match ctx.plane(id).comms() {
            0 => {
                let granted = ctx.airport.is_slot_3000_vacant();
                if granted {
                    ctx.tower(id, Utterance::DescendTo3000);
                } else {
                    let expect_minutes = hold_estimate(ctx.airport);
                    ctx.tower(id, Utterance::HoldPattern { expect_minutes });
                }
                ctx.plane_mut(id).set_permission(granted);
                ctx.plane_mut(id).advance_comms();
            }
            _ => {
                // The slot can be snatched between grant and readback by a
                // higher-priority aircraft, so re-check before promoting.
                if ctx.plane(id).permission() && ctx.airport.is_slot_3000_vacant() {
                    ctx.pilot(id, Utterance::ReadbackDescend3000);
                    ctx.airport.promote_to_3000(id);
                    ctx.transition(id, AircraftState::DescendingTo3000);
                } else {
                    ctx.pilot(id, Utterance::ReadbackHoldPattern);
                    ctx.transition(id, AircraftState::FlyingWaitPattern);
                }
            }
        }
    }
}

pub fn descend_to_3000(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    assert_eq!(
        ctx.airport.slot_3000(),
        Some(id),
        "{} descends to 3000 ft without holding the slot",
        ctx.plane(id).registration()
    );

    if ctx.plane(id).altitude() > 3_000 {
        if ctx.action_complete(id) && ctx.plane_mut(id).descend(1_000) {
            let altitude_ft = ctx.plane(id).altitude();
            ctx.emit(SimEvent::AltitudeChanged { aircraft: id, altitude_ft });
            ctx.plane_mut(id).reset_action();
        }
    }

    if ctx.plane(id).altitude() <= 3_000 {
        match ctx.plane(id).comms() {
            0 => {
                let (size, engine) = (ctx.plane(id).size(), ctx.plane(id).engine());
                match ctx.airport.free_compatible_runway(size, engine) {
                    Ok(runway) => {
                        // Reserve at grant time so no later aircraft can take
                        // it before the readback.
                        ctx.airport.runway_mut(runway).set_occupant(id);
                        ctx.plane_mut(id).set_runway(Some(runway));
                        ctx.emit(SimEvent::RunwayReserved { aircraft: id, runway });
                        ctx.tower(id, Utterance::ClearedIlsApproach { runway });
                        ctx.plane_mut(id).set_permission(true);
                    }
                    Err(_) => {
                        ctx.tower(id, Utterance::HoldPattern { expect_minutes: 3 });
                        ctx.plane_mut(id).set_permission(false);
                    }
                }
                ctx.plane_mut(id).advance_comms();
            }
            _ => {
                if ctx.plane(id).permission() {
                    let runway = ctx.linked_runway(id);
                    ctx.pilot(id, Utterance::ReadbackIlsApproach { runway });
                    ctx.airport.release_slot_3000(id);
                    ctx.transition(id, AircraftState::FinalApproach);
                } else {
                    ctx.pilot(id, Utterance::ReadbackHoldPattern);
                    ctx.transition(id, AircraftState::FlyingWaitPattern);
                }
            }
        }
    }
}

/// Re-entrant holding state.  Retries the blocked resource every tick: the
/// 3000 ft slot when holding at 5000 ft, a compatible runway when at 3000 ft.
pub fn fly_wait_pattern(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    let altitude = ctx.plane(id).altitude();

    if altitude == 5_000 {
        match ctx.plane(id).comms() {
            0 => {
                if ctx.airport.is_slot_3000_vacant() {
                    ctx.tower(id, Utterance::DescendTo3000);
                    ctx.plane_mut(id).set_permission(true);
                    ctx.plane_mut(id).advance_comms();
                }
            }
            _ => {
                if ctx.airport.is_slot_3000_vacant() {
                    ctx.pilot(id, Utterance::ReadbackDescend3000);
                    ctx.airport.promote_to_3000(id);
                    ctx.transition(id, AircraftState::DescendingTo3000);
                } else {
                    // Lost the slot between grant and readback; re-arm.
                    ctx.plane_mut(id).transition_to(AircraftState::FlyingWaitPattern);
                }
            }
        }
    } else if altitude == 3_000 {
        match ctx.plane(id).comms() {
            0 => {
                let (size, engine) = (ctx.plane(id).size(), ctx.plane(id).engine());
                if let Ok(runway) = ctx.airport.free_compatible_runway(size, engine) {
                    ctx.airport.runway_mut(runway).set_occupant(id);
                    ctx.plane_mut(id).set_runway(Some(runway));
                    ctx.emit(SimEvent::RunwayReserved { aircraft: id, runway });
                    ctx.tower(id, Utterance::ClearedIlsApproach { runway });
                    ctx.plane_mut(id).advance_comms();
                }
            }
            _ => {
                let runway = ctx.linked_runway(id);
                ctx.pilot(id, Utterance::ReadbackIlsApproach { runway });
                ctx.airport.release_slot_3000(id);
                ctx.transition(id, AircraftState::FinalApproach);
            }
        }
    }
}

pub fn final_approach(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.action_complete(id) && ctx.plane_mut(id).descend(1_000) {
        let altitude_ft = ctx.plane(id).altitude();
        ctx.emit(SimEvent::AltitudeChanged { aircraft: id, altitude_ft });
        ctx.plane_mut(id).reset_action();
    }

    if ctx.plane(id).altitude() == 0 {
        ctx.transition(id, AircraftState::Landing);
    }
}

pub fn land(ctx: &mut HandlerCtx<'_>, id: AircraftId) {
    if ctx.action_complete(id) {
        let runway = ctx.linked_runway(id);
        let threshold = ctx.airport.runway(runway).location();
        ctx.plane_mut(id).set_location(Some(threshold));
        ctx.transition(id, AircraftState::Vacating);
    }
}
