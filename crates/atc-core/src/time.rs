//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter, one tick = one simulated
//! minute.  All schedule arithmetic is exact integer math; the mapping to a
//! human-readable day/hour/minute is [`WallTime`], used only by renderers.

use std::fmt;

/// Hard safety cap: 8 simulated days at one-minute resolution.  A scenario
/// that never resolves (e.g. no runway is ever compatible) stops here instead
/// of looping forever.
pub const TICK_CAP: u64 = 8 * 24 * 60;

/// The simulation starts at noon on a Monday; transcripts render wall time
/// from this offset.
const START_OFFSET_MINUTES: u64 = 12 * 60;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter (one tick = one simulated minute).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// True once the safety cap has been exceeded.
    #[inline]
    pub fn past_cap(self) -> bool {
        self.0 > TICK_CAP
    }

    /// Wall-clock rendering of this tick (Monday-noon origin).
    pub fn wall(self) -> WallTime {
        let total = self.0 + START_OFFSET_MINUTES;
        WallTime {
            day:    (total / 1_440) as u32,
            hour:   ((total % 1_440) / 60) as u32,
            minute: (total % 60) as u32,
        }
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── WallTime ─────────────────────────────────────────────────────────────────

/// Day/hour/minute view of a tick, for human-readable output.
///
/// `day` counts from the simulation origin; `weekday_name` cycles starting at
/// Monday.  Cheap to copy; holds no heap data.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallTime {
    pub day:    u32,
    pub hour:   u32,
    pub minute: u32,
}

impl WallTime {
    pub fn weekday_name(&self) -> &'static str {
        const NAMES: [&str; 7] = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];
        NAMES[(self.day % 7) as usize]
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}",
            self.weekday_name(),
            self.hour,
            self.minute
        )
    }
}
