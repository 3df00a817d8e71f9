//! Runways: occupancy slots and the compatibility table.

use atc_core::{AircraftId, Engine, LocationId, Size, Surface};

/// One runway.  The occupant slot holds the aircraft landing on, holding on,
/// or taking off from this runway; the crosser slot holds an aircraft taxiing
/// across it at a perpendicular point.  The two slots are independent — the
/// crossing right-of-way rule that relates them lives in
/// [`Airport::can_cross`][crate::Airport::can_cross] because it needs the
/// occupant's state.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Runway {
    name:      String,
    location:  LocationId,
    length_ft: u32,
    surface:   Surface,
    occupant:  Option<AircraftId>,
    crosser:   Option<AircraftId>,
}

impl Runway {
    pub(crate) fn new(name: String, location: LocationId, length_ft: u32, surface: Surface) -> Runway {
        Runway {
            name,
            location,
            length_ft,
            surface,
            occupant: None,
            crosser: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// This runway's waypoint in the location arena.
    pub fn location(&self) -> LocationId {
        self.location
    }

    pub fn length_ft(&self) -> u32 {
        self.length_ft
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn occupant(&self) -> Option<AircraftId> {
        self.occupant
    }

    pub fn crosser(&self) -> Option<AircraftId> {
        self.crosser
    }

    /// No occupant and no crosser.
    pub fn is_vacant(&self) -> bool {
        self.occupant.is_none() && self.crosser.is_none()
    }

    /// Minimum-length-and-surface threshold keyed by airframe class.
    /// First matching runway in canonical scan order wins; there is no
    /// best-fit search.
    pub fn accommodates(&self, size: Size, engine: Engine) -> bool {
        let (min_length, any_surface) = match (size, engine) {
            (Size::Small, Engine::Propeller)  => (500, true),
            (Size::Small, Engine::Jet)        => (1_000, false),
            (Size::Medium, Engine::Propeller) => (1_000, false),
            (Size::Medium, Engine::Jet)       => (2_000, false),
            (Size::Large, Engine::Propeller)  => (1_500, false),
            (Size::Large, Engine::Jet)        => (3_000, false),
        };
        self.length_ft >= min_length && (any_surface || self.surface == Surface::Asphalt)
    }

    /// Take the occupant slot.
    ///
    /// # Panics
    /// If the slot is already taken — double occupancy is a contract
    /// violation, not a recoverable condition.
    pub fn set_occupant(&mut self, aircraft: AircraftId) {
        assert!(
            self.occupant.is_none(),
            "runway {} already has an occupant",
            self.name
        );
        self.occupant = Some(aircraft);
    }

    /// Clear the occupant slot.
    ///
    /// # Panics
    /// If `aircraft` does not hold the slot.
    pub fn clear_occupant(&mut self, aircraft: AircraftId) {
        assert_eq!(
            self.occupant,
            Some(aircraft),
            "runway {} occupant mismatch on release",
            self.name
        );
        self.occupant = None;
    }

    /// Take the crosser slot.
    ///
    /// # Panics
    /// If the slot is already taken.
    pub fn set_crosser(&mut self, aircraft: AircraftId) {
        assert!(
            self.crosser.is_none(),
            "runway {} already has a crosser",
            self.name
        );
        self.crosser = Some(aircraft);
    }

    /// Clear the crosser slot.
    ///
    /// # Panics
    /// If `aircraft` does not hold the slot.
    pub fn clear_crosser(&mut self, aircraft: AircraftId) {
        assert_eq!(
            self.crosser,
            Some(aircraft),
            "runway {} crosser mismatch on release",
            self.name
        );
        self.crosser = None;
    }
}
