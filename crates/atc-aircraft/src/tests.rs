//! Unit tests for the aircraft entity and its physics.

use atc_core::{Category, Engine, Size, Squawk};

use crate::aircraft::{Aircraft, AircraftSpec, Fuel, Passengers};
use crate::state::{AircraftState, StateFamily};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cessna_spec() -> AircraftSpec {
    AircraftSpec {
        registration:       "N11842".into(),
        callsign:           "Cessna 842".into(),
        model:              "Cessna 430".into(),
        category:           Category::Private,
        size:               Size::Small,
        engine:             Engine::Propeller,
        altitude:           10_000,
        fuel:               10_000,
        fuel_capacity:      10_000,
        passengers:         4,
        passenger_capacity: 4,
        state:              AircraftState::Approaching,
    }
}

fn cessna() -> Aircraft {
    Aircraft::from_spec(cessna_spec(), Squawk::new(0o0001).unwrap())
}

// ── Clamped quantities ────────────────────────────────────────────────────────

#[test]
fn fuel_clamps_at_construction() {
    let f = Fuel::new(50_000, 10_000);
    assert_eq!(f.level(), 10_000);
    assert_eq!(f.missing(), 0);
}

#[test]
fn fuel_burn_and_refill() {
    let mut f = Fuel::new(25, 10_000);
    assert!(f.burn(10));
    assert_eq!(f.level(), 15);
    // Exhaustion clamps to zero even when the rate exceeds the level.
    assert!(!f.burn(20));
    assert_eq!(f.level(), 0);
    assert_eq!(f.refill(), 10_000);
    assert_eq!(f.level(), 10_000);
}

#[test]
fn fuel_exactly_equal_to_rate_is_exhaustion() {
    // level > rate is required to keep flying; level == rate is starvation.
    let mut f = Fuel::new(10, 100);
    assert!(!f.burn(10));
    assert_eq!(f.level(), 0);
}

#[test]
fn passengers_board_and_deboard() {
    let mut p = Passengers::new(2, 180);
    assert_eq!(p.deboard_all(), 2);
    assert_eq!(p.count(), 0);
    assert_eq!(p.board_full(), 180);
    assert_eq!(p.count(), 180);
}

// ── Physics ───────────────────────────────────────────────────────────────────

#[test]
fn descend_saturates_at_ground() {
    let mut a = cessna();
    assert!(a.descend(1_000));
    assert_eq!(a.altitude(), 9_000);
    assert!(a.descend(20_000));
    assert_eq!(a.altitude(), 0);
    // Already on the ground: no-op, reported as such.
    assert!(!a.descend(1));
}

#[test]
fn ascend_adds() {
    let mut a = cessna();
    a.ascend(1_000);
    assert_eq!(a.altitude(), 11_000);
}

#[test]
fn burn_fuel_normal_tick() {
    let mut a = cessna();
    assert!(a.burn_fuel());
    assert_eq!(a.fuel().level(), 10_000 - 10);
    assert_eq!(a.altitude(), 10_000);
    assert_ne!(a.squawk(), Squawk::EMERGENCY);
}

#[test]
fn burn_fuel_exhaustion_sinks_and_squawks_emergency() {
    let mut spec = cessna_spec();
    spec.fuel = 8; // consumption is 10/tick for a small propeller airframe
    let mut a = Aircraft::from_spec(spec, Squawk::new(0o0001).unwrap());

    assert!(!a.burn_fuel());
    assert_eq!(a.fuel().level(), 0);
    assert_eq!(a.altitude(), 9_500);
    assert_eq!(a.squawk(), Squawk::EMERGENCY);
}

// ── FSM bookkeeping ───────────────────────────────────────────────────────────

#[test]
fn transition_resets_protocol() {
    let mut a = cessna();
    a.advance_comms();
    a.tick_action();
    a.set_permission(true);

    a.transition_to(AircraftState::DescendingTo5000);
    assert_eq!(a.comms(), 0);
    assert_eq!(a.action_timer(), 0);
    assert!(!a.permission());
}

#[test]
fn state_families() {
    assert_eq!(AircraftState::Landing.family(), StateFamily::Arrival);
    assert_eq!(AircraftState::Refueling.family(), StateFamily::Ground);
    assert_eq!(AircraftState::TakingOff.family(), StateFamily::Departure);
    assert_eq!(AircraftState::EmergencyCheckup.family(), StateFamily::Emergency);
    assert_eq!(AircraftState::Crashed.family(), StateFamily::Terminal);
}

#[test]
fn airborne_set() {
    use AircraftState::*;
    for s in [
        Approaching,
        DescendingTo5000,
        DescendingTo3000,
        FlyingWaitPattern,
        FinalApproach,
        TakingOff,
        Ascending,
        Emergency,
        EmergencyFinalApproach,
        EmergencyLanding,
    ] {
        assert!(s.is_airborne(), "{s:?} should be airborne");
    }
    for s in [Landing, Vacating, StandingAtGate, LeftAirport, Crashed] {
        assert!(!s.is_airborne(), "{s:?} should not be airborne");
    }
}

#[test]
fn emergency_descent_states_exempt_from_override() {
    use AircraftState::*;
    assert!(Emergency.is_emergency_descent());
    assert!(EmergencyFinalApproach.is_emergency_descent());
    assert!(EmergencyLanding.is_emergency_descent());
    assert!(!EmergencyEvacuation.is_emergency_descent());
    assert!(!FinalApproach.is_emergency_descent());
}

#[test]
fn runway_surface_blockers() {
    use AircraftState::*;
    for s in [
        ReadyForTakeoff,
        LiningUp,
        TakingOff,
        Landing,
        EmergencyLanding,
        EmergencyEvacuation,
        EmergencyCheckup,
        EmergencyRefueling,
    ] {
        assert!(s.occupies_runway_surface(), "{s:?} should block crossings");
    }
    // Merely holding nearby or already vacated does not block a crossing.
    for s in [HoldingShort, Vacating, TaxiingToRunway] {
        assert!(!s.occupies_runway_surface(), "{s:?} should allow crossings");
    }
}
