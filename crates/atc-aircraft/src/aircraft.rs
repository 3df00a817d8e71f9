//! The `Aircraft` entity.
//!
//! # Representation notes
//!
//! - Cross-references (runway, location, gate) are typed IDs into
//!   airport-owned arenas, never owning pointers; the airport owns the
//!   aircraft itself.
//! - `Fuel` and `Passengers` are clamped quantities: a level outside
//!   `0..=capacity` is unrepresentable, so the bounds invariants hold by
//!   construction instead of by runtime contract.
//! - The per-state working counters (`comms`, `action`, `permission`) live in
//!   one `Protocol` block that [`Aircraft::transition_to`] resets atomically,
//!   so stale counters can never leak across a state change.

use std::collections::VecDeque;

use atc_core::attrs::fuel_burn_per_tick;
use atc_core::{Category, Engine, GateId, LocationId, RunwayId, Size, Squawk};

use crate::state::AircraftState;

// ── Clamped quantities ────────────────────────────────────────────────────────

/// Fuel on board, clamped to `0..=capacity` at every operation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fuel {
    level:    u32,
    capacity: u32,
}

impl Fuel {
    pub fn new(level: u32, capacity: u32) -> Fuel {
        Fuel {
            level: level.min(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Units needed to fill the tanks.
    #[inline]
    pub fn missing(&self) -> u32 {
        self.capacity - self.level
    }

    /// Fill to capacity; returns the units added.
    pub fn refill(&mut self) -> u32 {
        let added = self.missing();
        self.level = self.capacity;
        added
    }

    /// Consume `rate` units.  Returns `false` on exhaustion, in which case
    /// the level is clamped to zero.
    pub fn burn(&mut self, rate: u32) -> bool {
        if self.level > rate {
            self.level -= rate;
            true
        } else {
            self.level = 0;
            false
        }
    }
}

/// Passengers on board, clamped to `0..=capacity`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passengers {
    count:    u32,
    capacity: u32,
}

impl Passengers {
    pub fn new(count: u32, capacity: u32) -> Passengers {
        Passengers {
            count: count.min(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Everyone off.  Returns how many left the aircraft.
    pub fn deboard_all(&mut self) -> u32 {
        std::mem::take(&mut self.count)
    }

    /// Board to capacity.  Returns how many came aboard.
    pub fn board_full(&mut self) -> u32 {
        let boarded = self.capacity - self.count;
        self.count = self.capacity;
        boarded
    }
}

// ── Protocol counters ─────────────────────────────────────────────────────────

/// Working counters for the recurring two-phase request/act protocol.
/// Valid only within the current state; reset on every transition.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Protocol {
    /// Phase index within the state's communication exchange.
    comms: u8,
    /// Ticks spent performing the current physical action.
    action: u32,
    /// Outcome of the latest resource request.
    permission: bool,
}

// ── AircraftSpec ─────────────────────────────────────────────────────────────

/// Plain-data description of one aircraft, produced by the scenario loader
/// (out of core scope) or test fixtures, consumed by `AirportBuilder`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AircraftSpec {
    pub registration:       String,
    pub callsign:           String,
    pub model:              String,
    pub category:           Category,
    pub size:               Size,
    pub engine:             Engine,
    pub altitude:           u32,
    pub fuel:               u32,
    pub fuel_capacity:      u32,
    pub passengers:         u32,
    pub passenger_capacity: u32,
    pub state:              AircraftState,
}

// ── Aircraft ─────────────────────────────────────────────────────────────────

/// One aircraft.  Owned by the airport's aircraft arena; holds non-owning IDs
/// for everything it references.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aircraft {
    // Identity — immutable after construction.
    registration: String,
    callsign:     String,
    model:        String,
    category:     Category,
    size:         Size,
    engine:       Engine,

    // Physical state.
    squawk:     Squawk,
    altitude:   u32,
    fuel:       Fuel,
    passengers: Passengers,

    // FSM state and working counters.
    state:    AircraftState,
    protocol: Protocol,

    // Spatial references into airport-owned arenas.
    gate:       Option<GateId>,
    runway:     Option<RunwayId>,
    location:   Option<LocationId>,
    taxi_route: VecDeque<LocationId>,
}

impl Aircraft {
    pub fn from_spec(spec: AircraftSpec, squawk: Squawk) -> Aircraft {
        Aircraft {
            registration: spec.registration,
            callsign: spec.callsign,
            model: spec.model,
            category: spec.category,
            size: spec.size,
            engine: spec.engine,
            squawk,
            altitude: spec.altitude,
            fuel: Fuel::new(spec.fuel, spec.fuel_capacity),
            passengers: Passengers::new(spec.passengers, spec.passenger_capacity),
            state: spec.state,
            protocol: Protocol::default(),
            gate: None,
            runway: None,
            location: None,
            taxi_route: VecDeque::new(),
        }
    }

    // ── Identity ──────────────────────────────────────────────────────────

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    // ── Physical state ────────────────────────────────────────────────────

    pub fn squawk(&self) -> Squawk {
        self.squawk
    }

    pub fn altitude(&self) -> u32 {
        self.altitude
    }

    pub fn fuel(&self) -> &Fuel {
        &self.fuel
    }

    pub fn fuel_mut(&mut self) -> &mut Fuel {
        &mut self.fuel
    }

    pub fn passengers(&self) -> &Passengers {
        &self.passengers
    }

    pub fn passengers_mut(&mut self) -> &mut Passengers {
        &mut self.passengers
    }

    /// Fuel units consumed per airborne tick for this airframe.
    pub fn fuel_consumption(&self) -> u32 {
        fuel_burn_per_tick(self.size, self.engine)
    }

    /// Per-tick physics pre-check while airborne: burn one tick of fuel.
    ///
    /// On exhaustion the tanks clamp to zero, the aircraft sinks 500 ft
    /// immediately, and the transponder is forced to the emergency code.
    /// Returns `false` on exhaustion; the scheduler then force-transitions
    /// the aircraft to `Emergency` unless it is already gliding on the
    /// emergency branch.
    pub fn burn_fuel(&mut self) -> bool {
        if self.fuel.burn(self.fuel_consumption()) {
            true
        } else {
            self.squawk = Squawk::EMERGENCY;
            self.altitude = self.altitude.saturating_sub(500);
            false
        }
    }

    /// Drop by `ft`, saturating at ground level.  Returns `false` only when
    /// already on the ground.
    pub fn descend(&mut self, ft: u32) -> bool {
        if self.altitude == 0 {
            return false;
        }
        self.altitude = self.altitude.saturating_sub(ft);
        true
    }

    /// Climb by `ft`.
    pub fn ascend(&mut self, ft: u32) {
        self.altitude += ft;
    }

    // ── FSM state and protocol counters ───────────────────────────────────

    pub fn state(&self) -> AircraftState {
        self.state
    }

    /// Change state and reset all protocol counters to their defaults.
    ///
    /// This is the only way to change state, so a handler can rely on
    /// `comms == 0`, `action == 0`, `permission == false` on entry.
    pub fn transition_to(&mut self, state: AircraftState) {
        self.state = state;
        self.protocol = Protocol::default();
    }

    pub fn comms(&self) -> u8 {
        self.protocol.comms
    }

    pub fn advance_comms(&mut self) {
        self.protocol.comms += 1;
    }

    pub fn action_timer(&self) -> u32 {
        self.protocol.action
    }

    /// Increment the action timer and return the new value.
    pub fn tick_action(&mut self) -> u32 {
        self.protocol.action += 1;
        self.protocol.action
    }

    pub fn reset_action(&mut self) {
        self.protocol.action = 0;
    }

    pub fn permission(&self) -> bool {
        self.protocol.permission
    }

    pub fn set_permission(&mut self, granted: bool) {
        self.protocol.permission = granted;
    }

    // ── Spatial references ────────────────────────────────────────────────

    pub fn gate(&self) -> Option<GateId> {
        self.gate
    }

    /// Set by the airport's gate allocator only; the gate array slot and this
    /// field must always agree (bidirectional consistency invariant).
    pub fn set_gate(&mut self, gate: Option<GateId>) {
        self.gate = gate;
    }

    pub fn runway(&self) -> Option<RunwayId> {
        self.runway
    }

    pub fn set_runway(&mut self, runway: Option<RunwayId>) {
        self.runway = runway;
    }

    pub fn location(&self) -> Option<LocationId> {
        self.location
    }

    pub fn set_location(&mut self, location: Option<LocationId>) {
        self.location = location;
    }

    pub fn taxi_route(&self) -> &VecDeque<LocationId> {
        &self.taxi_route
    }

    pub fn taxi_route_mut(&mut self) -> &mut VecDeque<LocationId> {
        &mut self.taxi_route
    }

    pub fn set_taxi_route(&mut self, route: VecDeque<LocationId>) {
        self.taxi_route = route;
    }
}
