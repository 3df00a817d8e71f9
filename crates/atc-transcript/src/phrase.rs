//! Radio phraseology.
//!
//! Turns a structured [`AtcCall`] into the line a pilot or controller would
//! actually say.  Names are resolved through the airport at render time, so
//! the event stream itself stays free of strings.

use atc_aircraft::Aircraft;
use atc_airport::Airport;
use atc_core::{GateId, LocationId, RunwayId};
use atc_sim::{AtcCall, Utterance};

/// Render one transmission.  `aircraft` is the subject of the exchange
/// (callsigns come from it), `airport` resolves runway, waypoint and gate
/// names.
pub fn render(call: &AtcCall, aircraft: &Aircraft, airport: &Airport) -> String {
    let me = aircraft.callsign();
    let twr = airport.callsign();

    match call.utterance {
        // ── Approach ────────────────────────────────────────────────────────
        Utterance::AnnounceArrival => {
            format!("{twr}, {me}, inbound for landing at {}.", airport.name())
        }
        Utterance::DescendTo5000 { squawk } => {
            format!("{me}, radar contact, descend and maintain 5000 ft, squawk {squawk}.")
        }
        Utterance::ReadbackDescend5000 { squawk } => {
            format!("Descending to 5000 ft, squawking {squawk}, {me}.")
        }
        Utterance::DescendTo3000 => {
            format!("{me}, descend and maintain 3000 ft.")
        }
        Utterance::ReadbackDescend3000 => {
            format!("Descending to 3000 ft, {me}.")
        }
        Utterance::HoldPattern { expect_minutes } => {
            format!(
                "{me}, hold as published, expect further clearance in {expect_minutes} minutes."
            )
        }
        Utterance::ReadbackHoldPattern => {
            format!("Holding as published, {me}.")
        }
        Utterance::ClearedIlsApproach { runway } => {
            format!("{me}, cleared ILS approach runway {}.", rwy(airport, runway))
        }
        Utterance::ReadbackIlsApproach { runway } => {
            format!("Cleared ILS approach runway {}, {me}.", rwy(airport, runway))
        }

        // ── Ground, arrival side ────────────────────────────────────────────
        Utterance::RunwayVacated { runway } => {
            format!("{twr}, {me}, runway {} vacated.", rwy(airport, runway))
        }
        Utterance::TaxiToHoldingPoint { holding_point, via } => {
            format!(
                "{me}, taxi to holding point {} via {}.",
                loc(airport, holding_point),
                loc(airport, via)
            )
        }
        Utterance::HoldingShortAt { holding_point } => {
            format!("{twr}, {me}, holding short at {}.", loc(airport, holding_point))
        }
        Utterance::ClearedToCross { runway } => {
            format!("{me}, cleared to cross runway {}.", rwy(airport, runway))
        }
        Utterance::ReadbackCross { runway } => {
            format!("Crossing runway {}, {me}.", rwy(airport, runway))
        }
        Utterance::HoldPosition => {
            format!("{me}, hold position.")
        }
        Utterance::HoldingPosition => {
            format!("Holding position, {me}.")
        }
        Utterance::TaxiToApron { via } => {
            format!("{me}, taxi to apron via {}.", loc(airport, via))
        }
        Utterance::TaxiToGate { gate } => {
            format!("{me}, taxi to gate {}.", gate_no(gate))
        }
        Utterance::ReadbackTaxiToGate { gate } => {
            format!("Taxiing to gate {}, {me}.", gate_no(gate))
        }

        // ── Departure ───────────────────────────────────────────────────────
        Utterance::RequestIfrClearance => {
            format!("{twr}, {me}, requesting IFR clearance.")
        }
        Utterance::IfrClearance { squawk } => {
            format!(
                "{me}, cleared to destination as filed, initial climb 5000 ft, squawk {squawk}."
            )
        }
        Utterance::ReadbackIfrClearance { squawk } => {
            format!("Cleared as filed, initial climb 5000 ft, squawking {squawk}, {me}.")
        }
        Utterance::RequestPushback { gate } => {
            format!("{twr}, {me}, at gate {}, requesting pushback.", gate_no(gate))
        }
        Utterance::PushbackApproved => {
            format!("{me}, pushback approved.")
        }
        Utterance::ReadbackPushback => {
            format!("Pushback approved, {me}.")
        }
        Utterance::ReadyToTaxi => {
            format!("{twr}, {me}, ready to taxi.")
        }
        Utterance::TaxiToRunway { runway, via } => {
            format!(
                "{me}, taxi to runway {} via {}.",
                rwy(airport, runway),
                loc(airport, via)
            )
        }
        Utterance::ReadbackTaxiToRunway { runway, via } => {
            format!(
                "Taxiing to runway {} via {}, {me}.",
                rwy(airport, runway),
                loc(airport, via)
            )
        }
        Utterance::HoldingShortRunway { runway } => {
            format!("{twr}, {me}, holding short runway {}.", rwy(airport, runway))
        }
        Utterance::LineUpAndWait { runway } => {
            format!("{me}, runway {}, line up and wait.", rwy(airport, runway))
        }
        Utterance::ReadyForTakeoff { runway } => {
            format!("{twr}, {me}, runway {}, ready for departure.", rwy(airport, runway))
        }
        Utterance::ClearedForTakeoff { runway } => {
            format!("{me}, runway {}, cleared for takeoff.", rwy(airport, runway))
        }
        Utterance::ReadbackTakeoff { runway } => {
            format!("Runway {}, cleared for takeoff, {me}.", rwy(airport, runway))
        }

        // ── Emergency ───────────────────────────────────────────────────────
        Utterance::Mayday { passengers } => {
            format!(
                "Mayday, mayday, mayday, {twr}, {me}, fuel exhausted, \
                 {passengers} persons on board, request immediate landing."
            )
        }
        Utterance::MaydayClearedToLand { runway } => {
            format!(
                "{me}, roger mayday, squawk 7700, cleared to land runway {}.",
                rwy(airport, runway)
            )
        }
        Utterance::MaydayGlide => {
            format!("{me}, roger mayday, squawk 7700, no runway available, maintain best glide.")
        }
        Utterance::EmergencyPersonnelStandby => {
            format!("{me}, emergency services are standing by.")
        }
    }
}

fn loc(airport: &Airport, id: LocationId) -> &str {
    airport.location(id).name()
}

fn rwy(airport: &Airport, id: RunwayId) -> &str {
    airport.runway(id).name()
}

/// Gates are numbered from 1 in human-facing output.
fn gate_no(gate: GateId) -> usize {
    gate.index() + 1
}
