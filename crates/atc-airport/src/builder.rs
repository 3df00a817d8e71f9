//! Incremental airport construction.

use std::collections::BTreeMap;

use atc_aircraft::{Aircraft, AircraftSpec, AircraftState};
use atc_core::{AircraftId, GateId, LocationId, RunwayId, Squawk, Surface};

use crate::airport::Airport;
use crate::error::{AirportError, AirportResult};
use crate::location::Location;
use crate::runway::Runway;

/// Assembles an [`Airport`] piece by piece, then validates the whole graph in
/// [`build`][AirportBuilder::build].
///
/// Waypoints are added in apron-to-runway order and chained with
/// [`link`][AirportBuilder::link]; squawk codes are assigned here, one
/// sequence counter per class block, in the order aircraft are added.
pub struct AirportBuilder {
    airport: Airport,
    /// Next free sequence number per squawk class block.
    squawk_sequence: BTreeMap<u16, u16>,
}

impl AirportBuilder {
    pub fn new(name: &str, iata: &str, callsign: &str, gate_count: usize) -> AirportBuilder {
        AirportBuilder {
            airport:         Airport::new(
                name.to_owned(),
                iata.to_owned(),
                callsign.to_owned(),
                gate_count,
            ),
            squawk_sequence: BTreeMap::new(),
        }
    }

    /// Add a plain taxiway waypoint.
    pub fn add_taxiway(&mut self, name: &str) -> LocationId {
        self.add_location(name, None)
    }

    fn add_location(&mut self, name: &str, runway: Option<RunwayId>) -> LocationId {
        let id = LocationId(self.airport.locations.len() as u32);
        self.airport.locations.push(Location::new(name.to_owned(), runway));
        self.airport
            .location_by_name
            .insert(name.to_owned(), id);
        id
    }

    /// Add a runway and the waypoint that sits on it.  The waypoint shares
    /// the runway's name.
    pub fn add_runway(
        &mut self,
        name:      &str,
        length_ft: u32,
        surface:   Surface,
    ) -> (LocationId, RunwayId) {
        let runway = RunwayId(self.airport.runways.len() as u32);
        let location = self.add_location(name, Some(runway));
        self.airport
            .runways
            .push(Runway::new(name.to_owned(), location, length_ft, surface));

        // Keep the canonical scan order sorted by name as runways arrive.
        let order = &mut self.airport.runway_order;
        let at = order
            .iter()
            .position(|&id| self.airport.runways[id.index()].name() > name)
            .unwrap_or(order.len());
        order.insert(at, runway);

        (location, runway)
    }

    /// Chain two waypoints: `prev` is one step closer to the apron.
    pub fn link(&mut self, prev: LocationId, next: LocationId) {
        self.airport.locations[prev.index()].set_next(Some(next));
        self.airport.locations[next.index()].set_prev(Some(prev));
    }

    /// Add an aircraft, assigning it the next squawk code in its class block.
    /// Aircraft starting at a gate are seated at the first free one.
    pub fn add_aircraft(&mut self, spec: AircraftSpec) -> AirportResult<AircraftId> {
        let block = Squawk::class_block(spec.category, spec.size, spec.engine)?;
        let sequence = self.squawk_sequence.entry(block).or_insert(0);
        let squawk = Squawk::new(block + *sequence)?;
        *sequence += 1;

        let id = AircraftId(self.airport.aircraft.len() as u32);
        let registration = spec.registration.clone();
        let parked = spec.state == AircraftState::StandingAtGate;
        self.airport.aircraft.push(Aircraft::from_spec(spec, squawk));
        self.airport.aircraft_by_reg.insert(registration, id);

        if parked {
            let slot = self
                .airport
                .gates
                .iter()
                .position(Option::is_none)
                .ok_or(AirportError::GatesFull(self.airport.gates.len()))?;
            self.airport.seat_at_gate(id, GateId(slot as u16));
        }
        Ok(id)
    }

    /// Validate the assembled graph and hand over the airport.
    pub fn build(self) -> AirportResult<Airport> {
        self.airport.validate()?;
        Ok(self.airport)
    }
}
