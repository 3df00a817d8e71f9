//! Prose rendering of the event stream.
//!
//! One complete sentence per event.  Radio traffic is skipped here (it goes
//! to the radio sink via [`crate::phrase`]); a handful of state changes are
//! skipped too when a richer event on the same tick already tells the story
//! (`Crashed`, `Departed`).

use atc_aircraft::AircraftState;
use atc_airport::Airport;
use atc_sim::SimEvent;

/// Render one event as a sentence, or `None` if the event has no narrative
/// line of its own.
pub fn render(event: &SimEvent, airport: &Airport) -> Option<String> {
    let me = airport.aircraft(event.aircraft()).callsign();

    let line = match *event {
        SimEvent::InitialState { state, .. } => format!("{me} is {state}."),

        SimEvent::StateChanged { to, .. } => match to {
            // Covered by the Departed / Crashed events on the same tick.
            AircraftState::LeftAirport | AircraftState::Crashed => return None,
            AircraftState::Vacating => {
                let plane = airport.aircraft(event.aircraft());
                match plane.runway() {
                    Some(id) => {
                        format!("{me} has landed on runway {}.", airport.runway(id).name())
                    }
                    None => format!("{me} has landed."),
                }
            }
            _ => format!("{me} is now {to}."),
        },

        SimEvent::AltitudeChanged { altitude_ft, .. } => {
            format!("{me} is passing {altitude_ft} ft.")
        }
        SimEvent::FuelExhausted { altitude_ft, .. } => {
            format!("{me} has run out of fuel at {altitude_ft} ft.")
        }
        SimEvent::RunwayReserved { runway, .. } => {
            format!("Runway {} is reserved for {me}.", airport.runway(runway).name())
        }
        SimEvent::RunwayVacated { runway, .. } => {
            format!("{me} has vacated runway {}.", airport.runway(runway).name())
        }
        SimEvent::TaxiedTo { location, .. } => {
            format!("{me} has reached {}.", airport.location(location).name())
        }
        SimEvent::GateEntered { gate, .. } => {
            format!("{me} has arrived at gate {}.", gate.index() + 1)
        }
        SimEvent::GateLeft { gate, .. } => {
            format!("{me} has pushed back from gate {}.", gate.index() + 1)
        }
        SimEvent::PassengersDeboarded { count, .. } => {
            format!("{count} passengers left {me}.")
        }
        SimEvent::PassengersBoarded { count, .. } => {
            format!("{count} passengers boarded {me}.")
        }
        SimEvent::Refueled { added, .. } => {
            format!("{me} took on {added} units of fuel.")
        }
        SimEvent::Departed { altitude_ft, .. } => {
            format!("{me} has left the airspace, climbing through {altitude_ft} ft.")
        }
        SimEvent::Crashed { passengers, .. } => {
            format!("{me} has crashed with {passengers} persons on board.")
        }

        SimEvent::Radio { .. } => return None,
    };

    Some(line)
}
