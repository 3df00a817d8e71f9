//! Taxi-chain waypoints.
//!
//! Every physical route from the apron to a runway threshold is a linear
//! chain of named waypoints with prev/next links.  All chains converge at the
//! apron connection: the unique location with no `prev` link.  Runways are
//! locations too; such a node carries the `RunwayId` of its runway record.

use atc_core::{LocationId, RunwayId};

/// One waypoint in the airport's location arena.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    name:   String,
    prev:   Option<LocationId>,
    next:   Option<LocationId>,
    runway: Option<RunwayId>,
}

impl Location {
    pub(crate) fn new(name: String, runway: Option<RunwayId>) -> Location {
        Location {
            name,
            prev: None,
            next: None,
            runway,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Link toward the apron.  `None` marks the apron connection.
    pub fn prev(&self) -> Option<LocationId> {
        self.prev
    }

    /// Link away from the apron.  `None` marks the far end of a chain.
    pub fn next(&self) -> Option<LocationId> {
        self.next
    }

    /// The runway occupying this waypoint, if any.
    pub fn runway(&self) -> Option<RunwayId> {
        self.runway
    }

    pub(crate) fn set_prev(&mut self, prev: Option<LocationId>) {
        self.prev = prev;
    }

    pub(crate) fn set_next(&mut self, next: Option<LocationId>) {
        self.next = next;
    }
}
