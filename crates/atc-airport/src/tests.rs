use atc_aircraft::{AircraftSpec, AircraftState};
use atc_core::{AircraftId, Category, Engine, Size, Surface};

use crate::builder::AirportBuilder;
use crate::error::AirportError;

fn spec(registration: &str, category: Category, size: Size, engine: Engine) -> AircraftSpec {
    AircraftSpec {
        registration:       registration.to_owned(),
        callsign:           format!("callsign {registration}"),
        model:              "test model".to_owned(),
        category,
        size,
        engine,
        altitude:           0,
        fuel:               5_000,
        fuel_capacity:      10_000,
        passengers:         0,
        passenger_capacity: 4,
        state:              AircraftState::StandingAtGate,
    }
}

fn approaching(registration: &str) -> AircraftSpec {
    AircraftSpec {
        altitude: 10_000,
        state: AircraftState::Approaching,
        ..spec(registration, Category::Private, Size::Small, Engine::Propeller)
    }
}

/// One apron connection, one chain: Alpha -> R11 -> Bravo -> L11.
fn two_runway_builder() -> AirportBuilder {
    let mut builder = AirportBuilder::new("Test International", "TST", "Test Tower", 4);
    let alpha = builder.add_taxiway("Alpha");
    let (r11, _) = builder.add_runway("R11", 1_000, Surface::Asphalt);
    let bravo = builder.add_taxiway("Bravo");
    let (l11, _) = builder.add_runway("L11", 3_000, Surface::Asphalt);
    builder.link(alpha, r11);
    builder.link(r11, bravo);
    builder.link(bravo, l11);
    builder
}

mod builder {
    use super::*;

    #[test]
    fn squawks_count_up_per_class_block() {
        let mut builder = two_runway_builder();
        let a = builder
            .add_aircraft(spec("N-1", Category::Private, Size::Small, Engine::Propeller))
            .unwrap();
        let b = builder
            .add_aircraft(spec("N-2", Category::Private, Size::Small, Engine::Jet))
            .unwrap();
        let c = builder
            .add_aircraft(spec("N-3", Category::Airline, Size::Medium, Engine::Jet))
            .unwrap();
        let airport = builder.build().unwrap();

        assert_eq!(airport.aircraft(a).squawk().raw(), 0o0001);
        assert_eq!(airport.aircraft(b).squawk().raw(), 0o0002);
        assert_eq!(airport.aircraft(c).squawk().raw(), 0o3000);
    }

    #[test]
    fn military_classes_share_one_block() {
        let mut builder = two_runway_builder();
        let fighter = builder
            .add_aircraft(spec("MIL-1", Category::Military, Size::Small, Engine::Jet))
            .unwrap();
        let transport = builder
            .add_aircraft(spec("MIL-2", Category::Military, Size::Large, Engine::Propeller))
            .unwrap();
        let airport = builder.build().unwrap();

        assert_eq!(airport.aircraft(fighter).squawk().raw(), 0o5000);
        assert_eq!(airport.aircraft(transport).squawk().raw(), 0o5001);
    }

    #[test]
    fn parked_aircraft_are_seated_at_gates() {
        let mut builder = two_runway_builder();
        let a = builder
            .add_aircraft(spec("N-1", Category::Private, Size::Small, Engine::Propeller))
            .unwrap();
        let b = builder
            .add_aircraft(spec("N-2", Category::Private, Size::Small, Engine::Propeller))
            .unwrap();
        let airport = builder.build().unwrap();

        let gate_a = airport.aircraft(a).gate().unwrap();
        let gate_b = airport.aircraft(b).gate().unwrap();
        assert_ne!(gate_a, gate_b);
        assert_eq!(airport.gate(gate_a), Some(a));
        assert_eq!(airport.gate(gate_b), Some(b));
    }

    #[test]
    fn overfull_scenario_is_rejected() {
        let mut builder = AirportBuilder::new("Tiny", "TNY", "Tiny Tower", 1);
        let alpha = builder.add_taxiway("Alpha");
        let (r11, _) = builder.add_runway("R11", 1_000, Surface::Asphalt);
        builder.link(alpha, r11);
        builder
            .add_aircraft(spec("N-1", Category::Private, Size::Small, Engine::Propeller))
            .unwrap();
        let err = builder
            .add_aircraft(spec("N-2", Category::Private, Size::Small, Engine::Propeller))
            .unwrap_err();
        assert!(matches!(err, AirportError::GatesFull(1)));
    }

    #[test]
    fn unsupported_class_is_rejected() {
        let mut builder = two_runway_builder();
        let err = builder
            .add_aircraft(spec("N-1", Category::Airline, Size::Small, Engine::Jet))
            .unwrap_err();
        assert!(matches!(err, AirportError::Core(_)));
    }

    #[test]
    fn approaching_below_corridor_fails_validation() {
        let mut builder = two_runway_builder();
        builder
            .add_aircraft(AircraftSpec {
                altitude: 2_000,
                ..approaching("N-LOW")
            })
            .unwrap();
        assert!(matches!(
            builder.build(),
            Err(AirportError::Inconsistent(_))
        ));
    }

    #[test]
    fn adjacent_taxiways_fail_validation() {
        let mut builder = AirportBuilder::new("Broken", "BRK", "Broken Tower", 1);
        let alpha = builder.add_taxiway("Alpha");
        let bravo = builder.add_taxiway("Bravo");
        builder.link(alpha, bravo);
        assert!(matches!(
            builder.build(),
            Err(AirportError::Inconsistent(_))
        ));
    }

    #[test]
    fn runway_at_the_apron_connection_fails_validation() {
        let mut builder = AirportBuilder::new("Broken", "BRK", "Broken Tower", 1);
        let (r11, _) = builder.add_runway("R11", 1_000, Surface::Asphalt);
        let alpha = builder.add_taxiway("Alpha");
        builder.link(r11, alpha);
        assert!(matches!(
            builder.build(),
            Err(AirportError::Inconsistent(_))
        ));
    }
}

mod graph {
    use super::*;

    #[test]
    fn apron_connection_is_the_chain_head() {
        let airport = two_runway_builder().build().unwrap();
        let connection = airport.apron_connection().unwrap();
        assert_eq!(airport.location(connection).name(), "Alpha");
    }

    #[test]
    fn route_to_runway_excludes_both_endpoints() {
        let airport = two_runway_builder().build().unwrap();
        let l11 = airport.runway_by_name("L11").unwrap();
        let route: Vec<&str> = airport
            .taxi_route_to_runway(l11)
            .iter()
            .map(|&id| airport.location(id).name())
            .collect();
        assert_eq!(route, ["R11", "Bravo"]);
    }

    #[test]
    fn route_to_apron_includes_the_connection() {
        let airport = two_runway_builder().build().unwrap();
        let l11 = airport.runway_by_name("L11").unwrap();
        let start = airport.runway(l11).location();
        let names: Vec<String> = airport
            .taxi_route_to_apron(start)
            .iter()
            .map(|&id| airport.location(id).name().to_owned())
            .collect();
        assert_eq!(names, ["Bravo", "R11", "Alpha"]);
    }

    #[test]
    fn route_to_apron_from_the_connection_is_empty() {
        let airport = two_runway_builder().build().unwrap();
        let connection = airport.apron_connection().unwrap();
        assert!(airport.taxi_route_to_apron(connection).is_empty());
    }

    #[test]
    fn clone_graph_is_independent() {
        let mut builder = two_runway_builder();
        let a = builder
            .add_aircraft(spec("N-1", Category::Private, Size::Small, Engine::Propeller))
            .unwrap();
        let airport = builder.build().unwrap();

        let mut copy = airport.clone_graph();
        let gate = copy.aircraft(a).gate().unwrap();
        copy.aircraft_mut(a).transition_to(AircraftState::PushingBack);
        copy.release_gate(a);

        assert_eq!(airport.gate(gate), Some(a));
        assert_eq!(copy.gate(gate), None);
    }
}

mod runways {
    use super::*;

    fn mixed_surface_airport() -> crate::Airport {
        let mut builder = AirportBuilder::new("Grassfield", "GRS", "Grassfield Tower", 2);
        let alpha = builder.add_taxiway("Alpha");
        let bravo = builder.add_taxiway("Bravo");
        let (g1, _) = builder.add_runway("G1", 500, Surface::Grass);
        let (g2, _) = builder.add_runway("G2", 400, Surface::Grass);
        builder.link(alpha, g1);
        builder.link(g1, bravo);
        builder.link(bravo, g2);
        builder.build().unwrap()
    }

    #[test]
    fn small_propeller_accepts_short_grass() {
        let airport = mixed_surface_airport();
        let runway = airport
            .free_compatible_runway(Size::Small, Engine::Propeller)
            .unwrap();
        assert_eq!(airport.runway(runway).name(), "G1");
    }

    #[test]
    fn no_runway_for_a_jet_on_grass() {
        let airport = mixed_surface_airport();
        assert!(matches!(
            airport.free_compatible_runway(Size::Small, Engine::Jet),
            Err(AirportError::NoCompatibleRunway)
        ));
    }

    #[test]
    fn scan_order_is_name_ascending() {
        let airport = two_runway_builder().build().unwrap();
        // L11 sorts before R11 even though R11 was added first.
        let names: Vec<&str> = airport
            .runways_in_order()
            .iter()
            .map(|&id| airport.runway(id).name())
            .collect();
        assert_eq!(names, ["L11", "R11"]);
    }

    #[test]
    fn query_without_reservation_is_stable() {
        let airport = two_runway_builder().build().unwrap();
        let first = airport
            .free_compatible_runway(Size::Small, Engine::Propeller)
            .unwrap();
        let second = airport
            .free_compatible_runway(Size::Small, Engine::Propeller)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn occupied_runway_is_skipped() {
        let mut airport = two_runway_builder().build().unwrap();
        let l11 = airport.runway_by_name("L11").unwrap();
        airport.runway_mut(l11).set_occupant(AircraftId(0));
        let runway = airport
            .free_compatible_runway(Size::Small, Engine::Propeller)
            .unwrap();
        assert_eq!(airport.runway(runway).name(), "R11");
    }
}

mod crossing {
    use super::*;

    fn airport_with_one_aircraft(state: AircraftState) -> (crate::Airport, AircraftId) {
        let mut builder = two_runway_builder();
        let id = builder
            .add_aircraft(spec("N-1", Category::Private, Size::Small, Engine::Propeller))
            .unwrap();
        let mut airport = builder.build().unwrap();
        airport.aircraft_mut(id).transition_to(state);
        (airport, id)
    }

    #[test]
    fn vacant_runway_may_be_crossed() {
        let airport = two_runway_builder().build().unwrap();
        let r11 = airport.runway_by_name("R11").unwrap();
        assert!(airport.can_cross(r11));
    }

    #[test]
    fn holding_occupant_does_not_block() {
        let (mut airport, id) = airport_with_one_aircraft(AircraftState::HoldingShort);
        let r11 = airport.runway_by_name("R11").unwrap();
        airport.runway_mut(r11).set_occupant(id);
        assert!(airport.can_cross(r11));
    }

    #[test]
    fn landing_occupant_blocks() {
        let (mut airport, id) = airport_with_one_aircraft(AircraftState::Landing);
        let r11 = airport.runway_by_name("R11").unwrap();
        airport.runway_mut(r11).set_occupant(id);
        assert!(!airport.can_cross(r11));
    }

    #[test]
    fn only_one_crosser_at_a_time() {
        let (mut airport, id) = airport_with_one_aircraft(AircraftState::CrossingRunway);
        let r11 = airport.runway_by_name("R11").unwrap();
        airport.runway_mut(r11).set_crosser(id);
        assert!(!airport.can_cross(r11));
    }
}

mod gates {
    use super::*;

    fn arrival_airport() -> (crate::Airport, AircraftId) {
        let mut builder = two_runway_builder();
        let id = builder.add_aircraft(approaching("N-ARR")).unwrap();
        let mut airport = builder.build().unwrap();
        airport
            .aircraft_mut(id)
            .transition_to(AircraftState::TaxiingToApron);
        (airport, id)
    }

    #[test]
    fn reserve_then_release() {
        let (mut airport, id) = arrival_airport();
        let gate = airport.reserve_gate(id).unwrap();
        assert_eq!(airport.gate(gate), Some(id));
        assert_eq!(airport.aircraft(id).gate(), Some(gate));

        airport
            .aircraft_mut(id)
            .transition_to(AircraftState::PushingBack);
        airport.release_gate(id);
        assert_eq!(airport.gate(gate), None);
        assert_eq!(airport.aircraft(id).gate(), None);
    }

    #[test]
    fn full_gates_return_scarcity() {
        let mut builder = AirportBuilder::new("Tiny", "TNY", "Tiny Tower", 1);
        let alpha = builder.add_taxiway("Alpha");
        let (r11, _) = builder.add_runway("R11", 1_000, Surface::Asphalt);
        builder.link(alpha, r11);
        builder
            .add_aircraft(spec("N-PARK", Category::Private, Size::Small, Engine::Propeller))
            .unwrap();
        let arriving = builder.add_aircraft(approaching("N-ARR")).unwrap();
        let mut airport = builder.build().unwrap();
        airport
            .aircraft_mut(arriving)
            .transition_to(AircraftState::TaxiingToApron);

        assert!(matches!(
            airport.reserve_gate(arriving),
            Err(AirportError::GatesFull(1))
        ));
    }

    #[test]
    #[should_panic(expected = "not waiting for a gate")]
    fn reserving_in_the_wrong_state_panics() {
        let (mut airport, id) = arrival_airport();
        airport.aircraft_mut(id).transition_to(AircraftState::Landing);
        let _ = airport.reserve_gate(id);
    }

    #[test]
    #[should_panic(expected = "already has a gate")]
    fn double_reservation_panics() {
        let (mut airport, id) = arrival_airport();
        airport.reserve_gate(id).unwrap();
        let _ = airport.reserve_gate(id);
    }

    #[test]
    #[should_panic(expected = "holds no gate")]
    fn releasing_without_a_gate_panics() {
        let (mut airport, id) = arrival_airport();
        airport
            .aircraft_mut(id)
            .transition_to(AircraftState::PushingBack);
        airport.release_gate(id);
    }
}

mod altitude_slots {
    use super::*;

    fn arrival_airport() -> (crate::Airport, AircraftId, AircraftId) {
        let mut builder = two_runway_builder();
        let a = builder.add_aircraft(approaching("N-A")).unwrap();
        let b = builder.add_aircraft(approaching("N-B")).unwrap();
        let airport = builder.build().unwrap();
        (airport, a, b)
    }

    #[test]
    fn promote_frees_5000_and_takes_3000_together() {
        let (mut airport, a, _) = arrival_airport();
        airport.occupy_slot_5000(a);
        airport.promote_to_3000(a);
        assert!(airport.is_slot_5000_vacant());
        assert_eq!(airport.slot_3000(), Some(a));
    }

    #[test]
    fn slot_5000_frees_for_the_next_arrival() {
        let (mut airport, a, b) = arrival_airport();
        airport.occupy_slot_5000(a);
        airport.promote_to_3000(a);
        airport.occupy_slot_5000(b);
        assert_eq!(airport.slot_5000(), Some(b));
        assert_eq!(airport.slot_3000(), Some(a));
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn slot_5000_is_exclusive() {
        let (mut airport, a, b) = arrival_airport();
        airport.occupy_slot_5000(a);
        airport.occupy_slot_5000(b);
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn promotion_waits_for_a_vacant_3000() {
        let (mut airport, a, b) = arrival_airport();
        airport.occupy_slot_5000(a);
        airport.promote_to_3000(a);
        airport.occupy_slot_5000(b);
        airport.promote_to_3000(b);
    }

    #[test]
    fn release_3000_on_final_approach() {
        let (mut airport, a, _) = arrival_airport();
        airport.occupy_slot_5000(a);
        airport.promote_to_3000(a);
        airport.release_slot_3000(a);
        assert!(airport.is_slot_3000_vacant());
    }
}
