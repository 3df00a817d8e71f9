//! The `Airport` resource pool and its allocator operations.

use std::collections::{BTreeMap, VecDeque};

use atc_aircraft::{Aircraft, AircraftState};
use atc_core::{AircraftId, Engine, GateId, LocationId, RunwayId, Size};

use crate::error::{AirportError, AirportResult};
use crate::location::Location;
use crate::runway::Runway;

/// Owns every entity of one simulated airport: the location graph, the runway
/// set, the gate array, the two approach-corridor altitude slots, and the
/// aircraft collection.
///
/// Construct through [`AirportBuilder`][crate::AirportBuilder]; the core only
/// ever consumes a validated instance.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airport {
    name:     String,
    iata:     String,
    callsign: String,

    pub(crate) locations:        Vec<Location>,
    pub(crate) location_by_name: BTreeMap<String, LocationId>,

    pub(crate) runways: Vec<Runway>,
    /// Canonical resource-search order: runway IDs sorted by name ascending.
    /// Deterministic tie-break for every first-match scan.
    pub(crate) runway_order: Vec<RunwayId>,

    pub(crate) gates: Vec<Option<AircraftId>>,

    /// The 5000 ft approach-corridor slot: at most one aircraft.
    pub(crate) slot_5000: Option<AircraftId>,
    /// The 3000 ft approach-corridor slot: at most one aircraft.
    pub(crate) slot_3000: Option<AircraftId>,

    pub(crate) aircraft:        Vec<Aircraft>,
    pub(crate) aircraft_by_reg: BTreeMap<String, AircraftId>,
}

impl Airport {
    pub(crate) fn new(name: String, iata: String, callsign: String, gate_count: usize) -> Airport {
        Airport {
            name,
            iata,
            callsign,
            locations: Vec::new(),
            location_by_name: BTreeMap::new(),
            runways: Vec::new(),
            runway_order: Vec::new(),
            gates: vec![None; gate_count],
            slot_5000: None,
            slot_3000: None,
            aircraft: Vec::new(),
            aircraft_by_reg: BTreeMap::new(),
        }
    }

    // ── Identity ──────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iata(&self) -> &str {
        &self.iata
    }

    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    // ── Aircraft collection ───────────────────────────────────────────────

    pub fn aircraft_count(&self) -> usize {
        self.aircraft.len()
    }

    pub fn aircraft(&self, id: AircraftId) -> &Aircraft {
        &self.aircraft[id.index()]
    }

    pub fn aircraft_mut(&mut self, id: AircraftId) -> &mut Aircraft {
        &mut self.aircraft[id.index()]
    }

    pub fn aircraft_ids(&self) -> impl Iterator<Item = AircraftId> + '_ {
        (0..self.aircraft.len() as u32).map(AircraftId)
    }

    pub fn aircraft_by_registration(&self, registration: &str) -> Option<AircraftId> {
        self.aircraft_by_reg.get(registration).copied()
    }

    // ── Location graph ────────────────────────────────────────────────────

    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    pub fn location_by_name(&self, name: &str) -> Option<LocationId> {
        self.location_by_name.get(name).copied()
    }

    /// The unique waypoint with no `prev` link — every taxi chain converges
    /// here, adjacent to the gates.
    pub fn apron_connection(&self) -> Option<LocationId> {
        (0..self.locations.len() as u32)
            .map(LocationId)
            .find(|&id| self.locations[id.index()].prev().is_none())
    }

    // ── Runways ───────────────────────────────────────────────────────────

    pub fn runway(&self, id: RunwayId) -> &Runway {
        &self.runways[id.index()]
    }

    pub fn runway_mut(&mut self, id: RunwayId) -> &mut Runway {
        &mut self.runways[id.index()]
    }

    /// Runway IDs in canonical (name-ascending) scan order.
    pub fn runways_in_order(&self) -> &[RunwayId] {
        &self.runway_order
    }

    pub fn runway_by_name(&self, name: &str) -> Option<RunwayId> {
        self.runway_order
            .iter()
            .copied()
            .find(|&id| self.runways[id.index()].name() == name)
    }

    /// The runway sitting on `location`, if that waypoint is a runway.
    pub fn runway_at(&self, location: LocationId) -> Option<RunwayId> {
        self.locations[location.index()].runway()
    }

    /// First vacant runway (no occupant, no crosser) compatible with the
    /// airframe class, scanning in canonical name order.  Pure query — the
    /// caller reserves the runway separately, so re-running it with no state
    /// change returns the same runway.
    pub fn free_compatible_runway(&self, size: Size, engine: Engine) -> AirportResult<RunwayId> {
        self.runway_order
            .iter()
            .copied()
            .find(|&id| {
                let runway = &self.runways[id.index()];
                runway.is_vacant() && runway.accommodates(size, engine)
            })
            .ok_or(AirportError::NoCompatibleRunway)
    }

    /// Crossing right-of-way: a runway may be crossed while it has no other
    /// crosser and its occupant (if any) is not actively using the surface.
    /// An occupant merely holding nearby does not block the crossing.
    pub fn can_cross(&self, runway: RunwayId) -> bool {
        let runway = &self.runways[runway.index()];
        if runway.crosser().is_some() {
            return false;
        }
        match runway.occupant() {
            None => true,
            Some(occupant) => !self.aircraft[occupant.index()].state().occupies_runway_surface(),
        }
    }

    // ── Gates ─────────────────────────────────────────────────────────────

    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    pub fn gate(&self, gate: GateId) -> Option<AircraftId> {
        self.gates[gate.index()]
    }

    /// Assign the first empty gate slot to `aircraft`.
    ///
    /// A full gate array is ordinary scarcity ([`AirportError::GatesFull`]);
    /// the aircraft keeps re-requesting on later ticks.
    ///
    /// # Panics
    /// If the aircraft is not taxiing to the apron, or already holds a gate —
    /// both are contract violations by the caller.
    pub fn reserve_gate(&mut self, id: AircraftId) -> AirportResult<GateId> {
        let aircraft = &self.aircraft[id.index()];
        assert_eq!(
            aircraft.state(),
            AircraftState::TaxiingToApron,
            "{} is not waiting for a gate",
            aircraft.registration()
        );
        assert!(
            aircraft.gate().is_none(),
            "{} already has a gate assigned",
            aircraft.registration()
        );

        let slot = self
            .gates
            .iter()
            .position(Option::is_none)
            .ok_or(AirportError::GatesFull(self.gates.len()))?;
        let gate = GateId(slot as u16);
        self.gates[slot] = Some(id);
        self.aircraft[id.index()].set_gate(Some(gate));
        Ok(gate)
    }

    /// Release the gate held by `aircraft` after pushback.
    ///
    /// # Panics
    /// If the aircraft is not pushing back, holds no gate, or the gate array
    /// disagrees about the holder.
    pub fn release_gate(&mut self, id: AircraftId) {
        let aircraft = &self.aircraft[id.index()];
        assert_eq!(
            aircraft.state(),
            AircraftState::PushingBack,
            "{} is not ready to leave its gate",
            aircraft.registration()
        );
        let gate = aircraft
            .gate()
            .unwrap_or_else(|| panic!("{} holds no gate", aircraft.registration()));
        assert_eq!(
            self.gates[gate.index()],
            Some(id),
            "gate {} does not hold {}",
            gate.index(),
            aircraft.registration()
        );

        self.gates[gate.index()] = None;
        self.aircraft[id.index()].set_gate(None);
    }

    /// Seat an aircraft at a specific gate during setup.  Used by the builder
    /// for aircraft that start the scenario standing at a gate.
    pub(crate) fn seat_at_gate(&mut self, id: AircraftId, gate: GateId) {
        assert!(self.gates[gate.index()].is_none());
        self.gates[gate.index()] = Some(id);
        self.aircraft[id.index()].set_gate(Some(gate));
    }

    // ── Altitude slots ────────────────────────────────────────────────────

    pub fn slot_5000(&self) -> Option<AircraftId> {
        self.slot_5000
    }

    pub fn slot_3000(&self) -> Option<AircraftId> {
        self.slot_3000
    }

    pub fn is_slot_5000_vacant(&self) -> bool {
        self.slot_5000.is_none()
    }

    pub fn is_slot_3000_vacant(&self) -> bool {
        self.slot_3000.is_none()
    }

    /// Occupy the 5000 ft slot.
    ///
    /// # Panics
    /// If the slot is taken — callers check vacancy first (the request phase
    /// of the approach protocol).
    pub fn occupy_slot_5000(&mut self, id: AircraftId) {
        assert!(self.slot_5000.is_none(), "5000 ft slot already occupied");
        self.slot_5000 = Some(id);
    }

    /// Promote the 5000 ft holder into the 3000 ft slot, releasing 5000 ft
    /// atomically as part of the same transition.
    ///
    /// # Panics
    /// If `id` does not hold the 5000 ft slot or 3000 ft is taken.
    pub fn promote_to_3000(&mut self, id: AircraftId) {
        assert_eq!(self.slot_5000, Some(id), "promotion by a non-holder");
        assert!(self.slot_3000.is_none(), "3000 ft slot already occupied");
        self.slot_5000 = None;
        self.slot_3000 = Some(id);
    }

    /// Release the 3000 ft slot when its holder leaves the corridor for
    /// final approach.
    ///
    /// # Panics
    /// If `id` does not hold the slot.
    pub fn release_slot_3000(&mut self, id: AircraftId) {
        assert_eq!(self.slot_3000, Some(id), "release by a non-holder");
        self.slot_3000 = None;
    }

    // ── Taxi-route construction ───────────────────────────────────────────

    /// Waypoints from the apron connection out to `target` runway, excluding
    /// both endpoints.  Departures start at the apron connection (set there
    /// by pushback) and consume this queue leg by leg.
    pub fn taxi_route_to_runway(&self, target: RunwayId) -> VecDeque<LocationId> {
        let target_location = self.runways[target.index()].location();
        let mut route = VecDeque::new();
        let Some(start) = self.apron_connection() else {
            return route;
        };
        let mut cursor = self.locations[start.index()].next();
        while let Some(id) = cursor {
            if id == target_location {
                break;
            }
            route.push_back(id);
            cursor = self.locations[id.index()].next();
        }
        route
    }

    /// Waypoints from `from` down to the apron, excluding `from` itself but
    /// including the apron connection (the gates lie beyond it).  An empty
    /// route means the aircraft is already at the apron connection.
    pub fn taxi_route_to_apron(&self, from: LocationId) -> VecDeque<LocationId> {
        let mut route = VecDeque::new();
        let mut cursor = self.locations[from.index()].prev();
        while let Some(id) = cursor {
            route.push_back(id);
            cursor = self.locations[id.index()].prev();
        }
        route
    }

    // ── Consistency ───────────────────────────────────────────────────────

    /// The documented start-consistency invariant the core requires of its
    /// input.  Checked by the builder; callers constructing airports by other
    /// means should call it themselves.
    pub fn validate(&self) -> AirportResult<()> {
        let fail = |msg: String| Err(AirportError::Inconsistent(msg));

        // Unique apron connection.
        let connections = self
            .locations
            .iter()
            .filter(|l| l.prev().is_none())
            .count();
        if !self.locations.is_empty() && connections != 1 {
            return fail(format!("expected 1 apron connection, found {connections}"));
        }

        // Reciprocal prev/next links.
        for (i, location) in self.locations.iter().enumerate() {
            let id = LocationId(i as u32);
            if let Some(next) = location.next() {
                if self.locations[next.index()].prev() != Some(id) {
                    return fail(format!("{} -> next link not reciprocal", location.name()));
                }
            }
            if let Some(prev) = location.prev() {
                if self.locations[prev.index()].next() != Some(id) {
                    return fail(format!("{} -> prev link not reciprocal", location.name()));
                }
            }
        }

        // Runway records and their waypoints agree.
        for (i, runway) in self.runways.iter().enumerate() {
            let id = RunwayId(i as u32);
            if runway.length_ft() == 0 {
                return fail(format!("runway {} has zero length", runway.name()));
            }
            if self.locations[runway.location().index()].runway() != Some(id) {
                return fail(format!("runway {} waypoint link broken", runway.name()));
            }
        }

        // The chain alternates taxiway, runway, taxiway, … from the apron
        // connection outward.  The taxi handlers assume every other waypoint
        // is a runway, so a malformed chain must fail here, not mid-run.
        if let Some(start) = self.apron_connection() {
            let mut cursor = Some(start);
            let mut expect_runway = false;
            while let Some(id) = cursor {
                let location = &self.locations[id.index()];
                if location.runway().is_some() != expect_runway {
                    return fail(format!(
                        "{} breaks the taxiway/runway alternation",
                        location.name()
                    ));
                }
                expect_runway = !expect_runway;
                cursor = location.next();
            }
        }

        // Gate array and aircraft gate indices agree both ways.
        for (slot, held) in self.gates.iter().enumerate() {
            if let Some(id) = held {
                if self.aircraft[id.index()].gate() != Some(GateId(slot as u16)) {
                    return fail(format!("gate {slot} holder disagrees with aircraft"));
                }
            }
        }
        for (i, aircraft) in self.aircraft.iter().enumerate() {
            if let Some(gate) = aircraft.gate() {
                if self.gates[gate.index()] != Some(AircraftId(i as u32)) {
                    return fail(format!(
                        "{} claims gate {} it does not hold",
                        aircraft.registration(),
                        gate.index()
                    ));
                }
            }
        }

        // Start states: approaching with altitude, or parked at a gate.
        for aircraft in &self.aircraft {
            match aircraft.state() {
                AircraftState::Approaching => {
                    if aircraft.altitude() < 3_000 {
                        return fail(format!(
                            "{} approaches below 3000 ft",
                            aircraft.registration()
                        ));
                    }
                    if aircraft.runway().is_some() {
                        return fail(format!(
                            "{} starts with a runway reserved",
                            aircraft.registration()
                        ));
                    }
                }
                AircraftState::StandingAtGate => {
                    if aircraft.gate().is_none() {
                        return fail(format!(
                            "{} stands at no gate",
                            aircraft.registration()
                        ));
                    }
                }
                other => {
                    return fail(format!(
                        "{} starts in unsupported state {other:?}",
                        aircraft.registration()
                    ));
                }
            }
        }

        Ok(())
    }

    /// Rebuild the entire relational graph as an independent copy.
    ///
    /// All cross-references are stable IDs into airport-owned arenas, so a
    /// structural clone reproduces every relationship in one pass — no
    /// pointer chasing, no fixup table.
    pub fn clone_graph(&self) -> Airport {
        self.clone()
    }
}
