//! The closed set of aircraft states.
//!
//! Dispatch over `AircraftState` must be exhaustive — the scheduler matches
//! on every tag with no wildcard arm, so adding a state without a handler is
//! a compile error, not a silent no-op.

use std::fmt;

/// One tag per aircraft state.  Grouped by [`StateFamily`]; the chain order
/// within each family follows the physical workflow.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AircraftState {
    // ── Arrival ───────────────────────────────────────────────────────────
    Approaching,
    DescendingTo5000,
    DescendingTo3000,
    /// Holding pattern; re-entrant from either descent phase on contention.
    FlyingWaitPattern,
    FinalApproach,
    Landing,
    Vacating,

    // ── Ground ────────────────────────────────────────────────────────────
    TaxiingToApron,
    TaxiingToRunway,
    TaxiingToCrossing,
    WaitingAtCrossing,
    CrossingRunway,
    Unboarding,
    TechnicalCheckup,
    Refueling,
    Boarding,
    StandingAtGate,

    // ── Departure ─────────────────────────────────────────────────────────
    PushingBack,
    HoldingShort,
    LiningUp,
    ReadyForTakeoff,
    TakingOff,
    Ascending,

    // ── Emergency (fuel exhaustion while airborne) ────────────────────────
    Emergency,
    EmergencyFinalApproach,
    EmergencyLanding,
    EmergencyEvacuation,
    EmergencyCheckup,
    EmergencyRefueling,

    // ── Terminal ──────────────────────────────────────────────────────────
    LeftAirport,
    Crashed,
}

/// Coarse grouping of [`AircraftState`] tags.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateFamily {
    Arrival,
    Ground,
    Departure,
    Emergency,
    Terminal,
}

impl AircraftState {
    pub fn family(self) -> StateFamily {
        use AircraftState::*;
        match self {
            Approaching | DescendingTo5000 | DescendingTo3000 | FlyingWaitPattern
            | FinalApproach | Landing | Vacating => StateFamily::Arrival,

            TaxiingToApron | TaxiingToRunway | TaxiingToCrossing | WaitingAtCrossing
            | CrossingRunway | Unboarding | TechnicalCheckup | Refueling | Boarding
            | StandingAtGate => StateFamily::Ground,

            PushingBack | HoldingShort | LiningUp | ReadyForTakeoff | TakingOff
            | Ascending => StateFamily::Departure,

            Emergency | EmergencyFinalApproach | EmergencyLanding | EmergencyEvacuation
            | EmergencyCheckup | EmergencyRefueling => StateFamily::Emergency,

            LeftAirport | Crashed => StateFamily::Terminal,
        }
    }

    /// Airborne states burn fuel every tick before dispatch.
    pub fn is_airborne(self) -> bool {
        use AircraftState::*;
        matches!(
            self,
            Approaching
                | DescendingTo5000
                | DescendingTo3000
                | FlyingWaitPattern
                | FinalApproach
                | TakingOff
                | Ascending
                | Emergency
                | EmergencyFinalApproach
                | EmergencyLanding
        )
    }

    /// Terminal states are never dispatched again; the aircraft stays in the
    /// collection for final reporting.
    pub fn is_terminal(self) -> bool {
        matches!(self, AircraftState::LeftAirport | AircraftState::Crashed)
    }

    /// States already gliding on the emergency branch: fuel exhaustion must
    /// not force-transition these back to `Emergency`.
    pub fn is_emergency_descent(self) -> bool {
        use AircraftState::*;
        matches!(self, Emergency | EmergencyFinalApproach | EmergencyLanding)
    }

    /// An occupant in one of these states is actively using the runway
    /// surface, which forbids perpendicular crossings.
    pub fn occupies_runway_surface(self) -> bool {
        use AircraftState::*;
        matches!(
            self,
            ReadyForTakeoff
                | LiningUp
                | TakingOff
                | Landing
                | EmergencyLanding
                | EmergencyEvacuation
                | EmergencyCheckup
                | EmergencyRefueling
        )
    }
}

impl fmt::Display for AircraftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AircraftState::*;
        let s = match self {
            Approaching            => "approaching",
            DescendingTo5000       => "descending to 5000 ft",
            DescendingTo3000       => "descending to 3000 ft",
            FlyingWaitPattern      => "flying a waiting pattern",
            FinalApproach          => "on final approach",
            Landing                => "landing",
            Vacating               => "vacating the runway",
            TaxiingToApron         => "taxiing to the apron",
            TaxiingToRunway        => "taxiing to the runway",
            TaxiingToCrossing      => "taxiing to a crossing",
            WaitingAtCrossing      => "waiting at a crossing",
            CrossingRunway         => "crossing a runway",
            Unboarding             => "unboarding",
            TechnicalCheckup       => "in technical checkup",
            Refueling              => "refueling",
            Boarding               => "boarding",
            StandingAtGate         => "standing at gate",
            PushingBack            => "pushing back",
            HoldingShort           => "holding short",
            LiningUp               => "lining up",
            ReadyForTakeoff        => "ready for takeoff",
            TakingOff              => "taking off",
            Ascending              => "ascending",
            Emergency              => "declaring an emergency",
            EmergencyFinalApproach => "on emergency final approach",
            EmergencyLanding       => "making an emergency landing",
            EmergencyEvacuation    => "evacuating",
            EmergencyCheckup       => "in emergency checkup",
            EmergencyRefueling     => "emergency refueling",
            LeftAirport            => "departed",
            Crashed                => "crashed",
        };
        f.write_str(s)
    }
}
