use atc_aircraft::{AircraftSpec, AircraftState};
use atc_airport::{Airport, AirportBuilder};
use atc_core::{AircraftId, Category, Engine, Size, Surface, Tick, TICK_CAP};

use crate::event::{SimEvent, Utterance};
use crate::observer::{NoopObserver, SimObserver};
use crate::sim::Simulator;

/// Records every emitted event with its tick.
#[derive(Default)]
struct Recorder {
    events: Vec<(Tick, SimEvent)>,
}

impl SimObserver for Recorder {
    fn on_event(&mut self, tick: Tick, event: &SimEvent, _airport: &Airport) {
        self.events.push((tick, event.clone()));
    }
}

impl Recorder {
    fn state_changes(&self, aircraft: AircraftId) -> Vec<AircraftState> {
        self.events
            .iter()
            .filter_map(|(_, e)| match e {
                SimEvent::StateChanged { aircraft: a, to, .. } if *a == aircraft => Some(*to),
                _ => None,
            })
            .collect()
    }

    fn tick_of(&self, predicate: impl Fn(&SimEvent) -> bool) -> Option<Tick> {
        self.events.iter().find(|(_, e)| predicate(e)).map(|(t, _)| *t)
    }
}

fn small_prop(registration: &str, state: AircraftState) -> AircraftSpec {
    AircraftSpec {
        registration:       registration.to_owned(),
        callsign:           format!("callsign {registration}"),
        model:              "test model".to_owned(),
        category:           Category::Private,
        size:               Size::Small,
        engine:             Engine::Propeller,
        altitude:           if state == AircraftState::Approaching { 10_000 } else { 0 },
        fuel:               10_000,
        fuel_capacity:      10_000,
        passengers:         4,
        passenger_capacity: 4,
        state,
    }
}

/// One gate, one chain: Alpha -> R01 (1000 ft asphalt).
fn one_runway_builder() -> AirportBuilder {
    let mut builder = AirportBuilder::new("Minimal Field", "MNM", "Minimal Tower", 1);
    let alpha = builder.add_taxiway("Alpha");
    let (r01, _) = builder.add_runway("R01", 1_000, Surface::Asphalt);
    builder.link(alpha, r01);
    builder
}

mod construction {
    use super::*;

    #[test]
    fn rejects_an_inconsistent_start() {
        let mut builder = one_runway_builder();
        builder
            .add_aircraft(AircraftSpec {
                altitude: 1_000,
                ..small_prop("N-LOW", AircraftState::Approaching)
            })
            .unwrap();
        // Bypass the builder's own validation to exercise the simulator's.
        let airport = match builder.build() {
            Err(_) => return, // builder already caught it — equally fine
            Ok(airport) => airport,
        };
        assert!(Simulator::new(airport).is_err());
    }
}

mod departure {
    use super::*;

    #[test]
    fn gate_to_departure_takes_a_fixed_tick_count() {
        let mut builder = one_runway_builder();
        let id = builder
            .add_aircraft(small_prop("N-DEP", AircraftState::StandingAtGate))
            .unwrap();
        let mut sim = Simulator::new(builder.build().unwrap()).unwrap();

        let mut recorder = Recorder::default();
        sim.run(&mut recorder);

        assert_eq!(sim.airport().aircraft(id).state(), AircraftState::LeftAirport);
        // IFR exchange (3) + pushback (4) + taxi (6) + hold/line-up/clearance
        // (5) + takeoff roll (3) + five 2-tick climb segments (10).
        assert_eq!(
            recorder.tick_of(|e| matches!(e, SimEvent::Departed { .. })),
            Some(Tick(31))
        );
    }

    #[test]
    fn gate_is_free_after_pushback() {
        let mut builder = one_runway_builder();
        builder
            .add_aircraft(small_prop("N-DEP", AircraftState::StandingAtGate))
            .unwrap();
        let mut sim = Simulator::new(builder.build().unwrap()).unwrap();
        sim.run(&mut NoopObserver);

        let airport = sim.airport();
        assert!((0..airport.gate_count()).all(|g| airport.gate(atc_core::GateId(g as u16)).is_none()));
    }

    #[test]
    fn runway_is_released_after_takeoff() {
        let mut builder = one_runway_builder();
        builder
            .add_aircraft(small_prop("N-DEP", AircraftState::StandingAtGate))
            .unwrap();
        let mut sim = Simulator::new(builder.build().unwrap()).unwrap();
        sim.run(&mut NoopObserver);

        let airport = sim.airport();
        let r01 = airport.runway_by_name("R01").unwrap();
        assert!(airport.runway(r01).is_vacant());
    }
}

mod arrival {
    use super::*;

    #[test]
    fn approach_to_turnaround_to_departure() {
        let mut builder = one_runway_builder();
        let id = builder
            .add_aircraft(small_prop("N-ARR", AircraftState::Approaching))
            .unwrap();
        let mut sim = Simulator::new(builder.build().unwrap()).unwrap();

        let mut recorder = Recorder::default();
        sim.run(&mut recorder);

        // Full cycle: land, turn around at the gate, depart again.
        assert_eq!(sim.airport().aircraft(id).state(), AircraftState::LeftAirport);

        let states = recorder.state_changes(id);
        let position = |s: AircraftState| {
            states
                .iter()
                .position(|x| *x == s)
                .unwrap_or_else(|| panic!("never reached {s:?}"))
        };
        let landing = position(AircraftState::Landing);
        let unboarding = position(AircraftState::Unboarding);
        let standing = position(AircraftState::StandingAtGate);
        let left = position(AircraftState::LeftAirport);
        assert!(landing < unboarding && unboarding < standing && standing < left);

        assert!(recorder
            .events
            .iter()
            .any(|(_, e)| matches!(e, SimEvent::PassengersDeboarded { count: 4, .. })));
        assert!(recorder
            .events
            .iter()
            .any(|(_, e)| matches!(e, SimEvent::PassengersBoarded { count: 4, .. })));
    }

    #[test]
    fn runs_are_deterministic() {
        let run = || {
            let mut builder = one_runway_builder();
            builder
                .add_aircraft(small_prop("N-ARR", AircraftState::Approaching))
                .unwrap();
            builder
                .add_aircraft(small_prop("N-DEP", AircraftState::StandingAtGate))
                .unwrap();
            let mut sim = Simulator::new(builder.build().unwrap()).unwrap();
            let mut recorder = Recorder::default();
            let last = sim.run(&mut recorder);
            (last, recorder.events)
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn released_slot_is_claimed_within_the_same_tick() {
        let mut builder = one_runway_builder();
        let a = builder
            .add_aircraft(small_prop("N-A", AircraftState::Approaching))
            .unwrap();
        let b = builder
            .add_aircraft(small_prop("N-B", AircraftState::Approaching))
            .unwrap();
        let mut sim = Simulator::new(builder.build().unwrap()).unwrap();

        let mut recorder = Recorder::default();
        sim.run(&mut recorder);

        // B holds the higher squawk, wins the 5000 ft slot, and promotes to
        // 3000 ft; A (processed later in the same tick) must claim the freed
        // 5000 ft slot that same minute.
        let promoted = recorder
            .tick_of(|e| {
                matches!(
                    e,
                    SimEvent::StateChanged { aircraft, to: AircraftState::DescendingTo3000, .. }
                        if *aircraft == b
                )
            })
            .unwrap();
        let granted = recorder
            .tick_of(|e| {
                matches!(
                    e,
                    SimEvent::Radio { aircraft, call }
                        if *aircraft == a
                            && matches!(call.utterance, Utterance::DescendTo5000 { .. })
                )
            })
            .unwrap();
        assert_eq!(promoted, granted);
        assert_eq!(sim.airport().aircraft(a).state(), AircraftState::LeftAirport);
        assert_eq!(sim.airport().aircraft(b).state(), AircraftState::LeftAirport);
    }
}

mod resources {
    use super::*;

    /// Walks the settled airport at every tick boundary: an aircraft's runway
    /// link must pair with that runway's occupant or crosser slot — except in
    /// the departure window, where only the target is fixed and the surface
    /// is contested at the hold-short point — and every occupant must link
    /// back.
    struct LinkChecker;

    impl SimObserver for LinkChecker {
        fn on_tick_end(&mut self, tick: Tick, airport: &Airport) {
            for id in airport.aircraft_ids() {
                let plane = airport.aircraft(id);
                let Some(r) = plane.runway() else { continue };
                let runway = airport.runway(r);
                let holds_surface =
                    runway.occupant() == Some(id) || runway.crosser() == Some(id);
                let taxiing_out = matches!(
                    plane.state(),
                    AircraftState::StandingAtGate
                        | AircraftState::PushingBack
                        | AircraftState::TaxiingToRunway
                        | AircraftState::TaxiingToCrossing
                        | AircraftState::WaitingAtCrossing
                        | AircraftState::CrossingRunway
                        | AircraftState::HoldingShort
                );
                assert!(
                    holds_surface || taxiing_out,
                    "{} links runway {} without holding it at {tick}",
                    plane.registration(),
                    runway.name()
                );
            }

            for &r in airport.runways_in_order() {
                if let Some(id) = airport.runway(r).occupant() {
                    assert_eq!(
                        airport.aircraft(id).runway(),
                        Some(r),
                        "occupant of runway {} does not link back at {tick}",
                        airport.runway(r).name()
                    );
                }
            }
        }
    }

    #[test]
    fn runway_links_always_pair_with_their_holder() {
        // Two-runway layout: the heavy departure must cross R11 on the way
        // out to L11 while the arrival lands on L11 and taxis in across R11,
        // so every link/slot combination comes up during the run.
        let mut builder = AirportBuilder::new("Test International", "TST", "Test Tower", 2);
        let alpha = builder.add_taxiway("Alpha");
        let (r11, _) = builder.add_runway("R11", 1_000, Surface::Asphalt);
        let bravo = builder.add_taxiway("Bravo");
        let (l11, _) = builder.add_runway("L11", 3_000, Surface::Asphalt);
        builder.link(alpha, r11);
        builder.link(r11, bravo);
        builder.link(bravo, l11);

        let dep = builder
            .add_aircraft(AircraftSpec {
                category:           Category::Airline,
                size:               Size::Large,
                engine:             Engine::Jet,
                fuel:               60_000,
                fuel_capacity:      60_000,
                passengers:         0,
                passenger_capacity: 120,
                ..small_prop("N-HEAVY", AircraftState::StandingAtGate)
            })
            .unwrap();
        let arr = builder
            .add_aircraft(small_prop("N-ARR", AircraftState::Approaching))
            .unwrap();
        let mut sim = Simulator::new(builder.build().unwrap()).unwrap();

        sim.run(&mut LinkChecker);

        assert!(sim.finished());
        assert_eq!(sim.airport().aircraft(dep).state(), AircraftState::LeftAirport);
        assert_eq!(sim.airport().aircraft(arr).state(), AircraftState::LeftAirport);
    }
}

mod emergency {
    use super::*;

    fn low_fuel(registration: &str) -> AircraftSpec {
        AircraftSpec {
            fuel: 8,
            ..small_prop(registration, AircraftState::Approaching)
        }
    }

    #[test]
    fn exhaustion_forces_an_emergency_landing() {
        let mut builder = one_runway_builder();
        let id = builder.add_aircraft(low_fuel("N-EMPTY")).unwrap();
        let mut sim = Simulator::new(builder.build().unwrap()).unwrap();

        let mut recorder = Recorder::default();
        sim.run(&mut recorder);

        let states = recorder.state_changes(id);
        assert!(states.contains(&AircraftState::Emergency));
        assert!(states.contains(&AircraftState::EmergencyFinalApproach));
        assert!(states.contains(&AircraftState::EmergencyLanding));
        assert!(!states.contains(&AircraftState::Crashed));
        // Refueled on the runway, then the normal ground flow resumes.
        assert_eq!(sim.airport().aircraft(id).state(), AircraftState::LeftAirport);
    }

    #[test]
    fn exhaustion_with_no_runway_ends_in_a_crash() {
        let mut builder = AirportBuilder::new("Grassfield", "GRS", "Grassfield Tower", 1);
        let alpha = builder.add_taxiway("Alpha");
        let (g1, _) = builder.add_runway("G1", 400, Surface::Grass);
        builder.link(alpha, g1);
        let id = builder.add_aircraft(low_fuel("N-EMPTY")).unwrap();
        let mut sim = Simulator::new(builder.build().unwrap()).unwrap();

        let mut recorder = Recorder::default();
        sim.run(&mut recorder);

        assert_eq!(sim.airport().aircraft(id).state(), AircraftState::Crashed);
        // 10 000 ft at 500 ft per tick of glide.
        assert_eq!(
            recorder.tick_of(|e| matches!(e, SimEvent::Crashed { passengers: 4, .. })),
            Some(Tick(20))
        );
    }

    #[test]
    fn emergency_preempts_normal_traffic() {
        let mut builder = one_runway_builder();
        let empty = builder.add_aircraft(low_fuel("N-EMPTY")).unwrap();
        let ok = builder
            .add_aircraft(small_prop("N-OK", AircraftState::Approaching))
            .unwrap();
        let mut sim = Simulator::new(builder.build().unwrap()).unwrap();

        let mut recorder = Recorder::default();
        sim.step(&mut NoopObserver); // tick 1: tanks run dry, squawk 7700
        sim.step(&mut recorder); //      tick 2: emergency dispatches first

        let first = recorder
            .events
            .iter()
            .map(|(_, e)| e.aircraft())
            .next()
            .unwrap();
        assert_eq!(first, empty);
        assert!(sim.airport().aircraft(empty).squawk().is_emergency());
        assert!(!sim.airport().aircraft(ok).squawk().is_emergency());
    }
}

mod termination {
    use super::*;

    #[test]
    fn hopeless_scenario_stops_at_the_tick_cap() {
        // A jet can never use the short grass strip, so the departure is
        // stuck at its gate forever.
        let mut builder = AirportBuilder::new("Grassfield", "GRS", "Grassfield Tower", 1);
        let alpha = builder.add_taxiway("Alpha");
        let (g1, _) = builder.add_runway("G1", 500, Surface::Grass);
        builder.link(alpha, g1);
        let id = builder
            .add_aircraft(AircraftSpec {
                engine: Engine::Jet,
                category: Category::Private,
                size: Size::Small,
                ..small_prop("N-STUCK", AircraftState::StandingAtGate)
            })
            .unwrap();
        let mut sim = Simulator::new(builder.build().unwrap()).unwrap();

        struct LastTick(Tick);
        impl SimObserver for LastTick {
            fn on_tick_end(&mut self, tick: Tick, _airport: &Airport) {
                self.0 = tick;
            }
        }

        let mut last = LastTick(Tick::ZERO);
        sim.run(&mut last);

        assert_eq!(last.0, Tick(TICK_CAP));
        assert!(!sim.finished());
        assert_eq!(sim.airport().aircraft(id).state(), AircraftState::StandingAtGate);
    }
}

mod duration {
    use super::*;
    use crate::duration::action_duration;
    use atc_aircraft::Aircraft;
    use atc_core::Squawk;

    fn plane(spec: AircraftSpec) -> Aircraft {
        Aircraft::from_spec(spec, Squawk::new(0o0001).unwrap())
    }

    #[test]
    fn refuel_time_scales_with_the_deficit() {
        let mut on_fumes = plane(AircraftSpec {
            fuel: 0,
            fuel_capacity: 25_000,
            ..small_prop("N-1", AircraftState::StandingAtGate)
        });
        on_fumes.transition_to(AircraftState::Refueling);
        assert_eq!(action_duration(&on_fumes), 3); // ceil(25000 / 10000)

        let mut topped_up = plane(AircraftSpec {
            fuel: 25_000,
            fuel_capacity: 25_000,
            ..small_prop("N-2", AircraftState::StandingAtGate)
        });
        topped_up.transition_to(AircraftState::Refueling);
        assert_eq!(action_duration(&topped_up), 0);
    }

    #[test]
    fn takeoff_roll_depends_on_the_engine() {
        let mut prop = plane(small_prop("N-P", AircraftState::StandingAtGate));
        prop.transition_to(AircraftState::TakingOff);
        assert_eq!(action_duration(&prop), 3);

        let mut jet = plane(AircraftSpec {
            engine: Engine::Jet,
            ..small_prop("N-J", AircraftState::StandingAtGate)
        });
        jet.transition_to(AircraftState::TakingOff);
        assert_eq!(action_duration(&jet), 2);
    }

    #[test]
    fn taxi_legs_are_five_ticks_for_every_airframe() {
        let mut big = plane(AircraftSpec {
            size: Size::Large,
            engine: Engine::Jet,
            category: Category::Airline,
            ..small_prop("N-WIDE", AircraftState::StandingAtGate)
        });
        big.transition_to(AircraftState::TaxiingToApron);
        assert_eq!(action_duration(&big), 5);
    }
}
