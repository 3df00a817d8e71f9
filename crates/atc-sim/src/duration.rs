//! The action-duration table.

use atc_aircraft::{Aircraft, AircraftState};
use atc_core::{Engine, Size};

/// Ticks the act phase of the aircraft's current state must run before its
/// physical effect applies.  Pure function of the aircraft's state, airframe
/// class, and (for refueling) tank deficit.
pub fn action_duration(aircraft: &Aircraft) -> u32 {
    use AircraftState::*;

    match aircraft.state() {
        DescendingTo5000 | DescendingTo3000 | FinalApproach | EmergencyFinalApproach
        | Ascending => match aircraft.engine() {
            Engine::Propeller => 2,
            Engine::Jet => 1,
        },
        Landing | EmergencyLanding => 2,
        TaxiingToApron | TaxiingToRunway | TaxiingToCrossing => 5,
        LiningUp | CrossingRunway => 1,
        Unboarding | Boarding | EmergencyEvacuation => match aircraft.size() {
            Size::Small => 5,
            Size::Medium => 10,
            Size::Large => 15,
        },
        TechnicalCheckup | EmergencyCheckup => match aircraft.size() {
            Size::Small => 1,
            Size::Medium => 2,
            Size::Large => 3,
        },
        // One tick per 10 000 units pumped, rounded up.
        Refueling | EmergencyRefueling => aircraft.fuel().missing().div_ceil(10_000),
        PushingBack => match aircraft.size() {
            Size::Small => 1,
            Size::Medium => 2,
            Size::Large => 3,
        },
        TakingOff => match aircraft.engine() {
            Engine::Propeller => 3,
            Engine::Jet => 2,
        },
        _ => 1,
    }
}
