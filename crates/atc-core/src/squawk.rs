//! Transponder squawk codes.
//!
//! A squawk is a four-digit octal transponder code.  This simulator also uses
//! it as the scheduling priority key: higher codes dispatch first, and the
//! reserved maximum `7700` (radio failure codes aside, the real-world
//! emergency code) guarantees emergency traffic is serviced before everything
//! else in the same tick.
//!
//! Assignment packs category × size × engine into an octal class block plus a
//! per-airport sequence number, so codes are unique and ordering within a
//! block is stable.

use std::fmt;

use crate::attrs::{Category, Engine, Size};
use crate::error::AtcError;

/// A four-digit octal transponder code.
///
/// Stored as the raw numeric value; [`fmt::Display`] renders it in octal with
/// leading zeros, matching radio phraseology ("squawk zero five zero one").
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Squawk(u16);

impl Squawk {
    /// The emergency code.  Forced onto any aircraft that runs out of fuel.
    pub const EMERGENCY: Squawk = Squawk(0o7700);

    /// Validate a raw code: `0001..=6777` octal, or one of the reserved
    /// emergency-family codes `7500`/`7600`/`7700`.
    pub fn new(raw: u16) -> Result<Squawk, AtcError> {
        match raw {
            0o0001..=0o6777 | 0o7500 | 0o7600 | 0o7700 => Ok(Squawk(raw)),
            _ => Err(AtcError::InvalidSquawk(raw)),
        }
    }

    /// Assign a code from the class block for `(category, size, engine)` plus
    /// a sequence number within that block.
    ///
    /// Combinations outside the supported fleet taxonomy (e.g. an airline
    /// small jet) have no block and are rejected at construction.
    pub fn assign(
        category: Category,
        size:     Size,
        engine:   Engine,
        sequence: u16,
    ) -> Result<Squawk, AtcError> {
        Squawk::new(Squawk::class_block(category, size, engine)? + sequence)
    }

    /// The first code of the class block for `(category, size, engine)`.
    /// Sequence counters are kept per block, not per class: the two military
    /// classes share one block.
    pub fn class_block(category: Category, size: Size, engine: Engine) -> Result<u16, AtcError> {
        let base: u16 = match (category, size, engine) {
            (Category::Private, Size::Small, _)                          => 0o0001,
            (Category::Private, Size::Medium, Engine::Jet)               => 0o1000,
            (Category::Airline, Size::Medium, Engine::Propeller)         => 0o2000,
            (Category::Airline, Size::Medium, Engine::Jet)               => 0o3000,
            (Category::Airline, Size::Large, Engine::Jet)                => 0o4000,
            (Category::Military, Size::Small, Engine::Jet)               => 0o5000,
            (Category::Military, Size::Large, Engine::Propeller)         => 0o5000,
            (Category::EmergencyService, Size::Small, Engine::Propeller) => 0o6000,
            _ => {
                return Err(AtcError::InvalidAircraftClass {
                    category,
                    size,
                    engine,
                })
            }
        };
        Ok(base)
    }

    /// Raw numeric value (octal digits packed as a binary integer).
    #[inline]
    pub fn raw(self) -> u16 {
        self.0
    }

    /// True for the forced emergency code.
    #[inline]
    pub fn is_emergency(self) -> bool {
        self == Squawk::EMERGENCY
    }
}

impl fmt::Display for Squawk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}
