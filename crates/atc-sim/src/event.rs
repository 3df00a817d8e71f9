//! The structured output stream.
//!
//! The scheduler never formats text.  Every observable effect of a tick —
//! state changes, physical deltas, resource interactions, radio exchanges —
//! is delivered to the observer as a [`SimEvent`] carrying typed payloads;
//! `atc-transcript` turns the stream into human-readable logs.

use atc_aircraft::AircraftState;
use atc_core::{AircraftId, GateId, LocationId, RunwayId, Squawk};

/// One observable effect.  The aircraft field identifies the subject; the
/// observer resolves names through the `&Airport` it receives alongside.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimEvent {
    /// Emitted once per aircraft before the first tick.
    InitialState {
        aircraft: AircraftId,
        state:    AircraftState,
    },
    StateChanged {
        aircraft: AircraftId,
        from:     AircraftState,
        to:       AircraftState,
    },
    AltitudeChanged {
        aircraft:    AircraftId,
        altitude_ft: u32,
    },
    /// The tanks ran dry this tick: squawk forced to 7700, 500 ft lost.
    FuelExhausted {
        aircraft:    AircraftId,
        altitude_ft: u32,
    },
    RunwayReserved {
        aircraft: AircraftId,
        runway:   RunwayId,
    },
    RunwayVacated {
        aircraft: AircraftId,
        runway:   RunwayId,
    },
    /// Completed one taxi leg onto `location`.
    TaxiedTo {
        aircraft: AircraftId,
        location: LocationId,
    },
    GateEntered {
        aircraft: AircraftId,
        gate:     GateId,
    },
    GateLeft {
        aircraft: AircraftId,
        gate:     GateId,
    },
    PassengersDeboarded {
        aircraft: AircraftId,
        count:    u32,
    },
    PassengersBoarded {
        aircraft: AircraftId,
        count:    u32,
    },
    Refueled {
        aircraft: AircraftId,
        added:    u32,
    },
    /// Left the airport's airspace upward.  Terminal.
    Departed {
        aircraft:    AircraftId,
        altitude_ft: u32,
    },
    /// Hit the ground before reaching a runway.  Terminal.
    Crashed {
        aircraft:   AircraftId,
        passengers: u32,
    },
    /// One radio transmission of an ATC exchange.
    Radio {
        aircraft: AircraftId,
        call:     AtcCall,
    },
}

impl SimEvent {
    pub fn aircraft(&self) -> AircraftId {
        match *self {
            SimEvent::InitialState { aircraft, .. }
            | SimEvent::StateChanged { aircraft, .. }
            | SimEvent::AltitudeChanged { aircraft, .. }
            | SimEvent::FuelExhausted { aircraft, .. }
            | SimEvent::RunwayReserved { aircraft, .. }
            | SimEvent::RunwayVacated { aircraft, .. }
            | SimEvent::TaxiedTo { aircraft, .. }
            | SimEvent::GateEntered { aircraft, .. }
            | SimEvent::GateLeft { aircraft, .. }
            | SimEvent::PassengersDeboarded { aircraft, .. }
            | SimEvent::PassengersBoarded { aircraft, .. }
            | SimEvent::Refueled { aircraft, .. }
            | SimEvent::Departed { aircraft, .. }
            | SimEvent::Crashed { aircraft, .. }
            | SimEvent::Radio { aircraft, .. } => aircraft,
        }
    }
}

// ── Radio exchanges ───────────────────────────────────────────────────────────

/// Who keyed the microphone.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Speaker {
    Pilot,
    Tower,
}

/// One transmission: a speaker and a structured utterance.  Phraseology is
/// the renderer's job.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtcCall {
    pub speaker:   Speaker,
    pub utterance: Utterance,
}

/// What was said, as data.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Utterance {
    // Approach.
    AnnounceArrival,
    DescendTo5000 { squawk: Squawk },
    ReadbackDescend5000 { squawk: Squawk },
    DescendTo3000,
    ReadbackDescend3000,
    /// Hold instruction with the tower's delay estimate in minutes.
    HoldPattern { expect_minutes: u32 },
    ReadbackHoldPattern,
    ClearedIlsApproach { runway: RunwayId },
    ReadbackIlsApproach { runway: RunwayId },

    // Ground, arrival side.
    RunwayVacated { runway: RunwayId },
    TaxiToHoldingPoint { holding_point: LocationId, via: LocationId },
    HoldingShortAt { holding_point: LocationId },
    ClearedToCross { runway: RunwayId },
    ReadbackCross { runway: RunwayId },
    HoldPosition,
    HoldingPosition,
    TaxiToApron { via: LocationId },
    TaxiToGate { gate: GateId },
    ReadbackTaxiToGate { gate: GateId },

    // Departure.
    RequestIfrClearance,
    IfrClearance { squawk: Squawk },
    ReadbackIfrClearance { squawk: Squawk },
    RequestPushback { gate: GateId },
    PushbackApproved,
    ReadbackPushback,
    ReadyToTaxi,
    TaxiToRunway { runway: RunwayId, via: LocationId },
    ReadbackTaxiToRunway { runway: RunwayId, via: LocationId },
    HoldingShortRunway { runway: RunwayId },
    LineUpAndWait { runway: RunwayId },
    ReadyForTakeoff { runway: RunwayId },
    ClearedForTakeoff { runway: RunwayId },
    ReadbackTakeoff { runway: RunwayId },

    // Emergency.
    Mayday { passengers: u32 },
    MaydayClearedToLand { runway: RunwayId },
    MaydayGlide,
    EmergencyPersonnelStandby,
}
