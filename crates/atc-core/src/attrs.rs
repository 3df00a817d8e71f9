//! Immutable aircraft and runway classification attributes.
//!
//! Category, size, and engine are fixed at aircraft construction and drive
//! three tables: squawk class-block assignment ([`crate::squawk`]), fuel burn
//! per airborne tick ([`fuel_burn_per_tick`]), and runway compatibility
//! (owned by `atc-airport`, keyed by `(Size, Engine)`).

use std::fmt;

/// Operator category.  Display-relevant and part of the squawk class block;
/// has no effect on physics.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Private,
    Airline,
    Military,
    EmergencyService,
}

/// Airframe size class.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Size {
    Small,
    Medium,
    Large,
}

/// Propulsion type.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Engine {
    Propeller,
    Jet,
}

/// Runway surface.  Grass only accommodates small propeller aircraft.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Surface {
    Asphalt,
    Grass,
}

/// Fuel units consumed per airborne tick, keyed by size × engine.
#[inline]
pub fn fuel_burn_per_tick(size: Size, engine: Engine) -> u32 {
    match (size, engine) {
        (Size::Small, Engine::Propeller)  => 10,
        (Size::Small, Engine::Jet)        => 25,
        (Size::Medium, Engine::Propeller) => 50,
        (Size::Medium, Engine::Jet)       => 175,
        (Size::Large, Engine::Propeller)  => 100,
        (Size::Large, Engine::Jet)        => 250,
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Private          => "private",
            Category::Airline          => "airline",
            Category::Military         => "military",
            Category::EmergencyService => "emergency",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Size::Small  => "small",
            Size::Medium => "medium",
            Size::Large  => "large",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Engine::Propeller => "propeller",
            Engine::Jet       => "jet",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Surface::Asphalt => "asphalt",
            Surface::Grass   => "grass",
        };
        f.write_str(s)
    }
}
