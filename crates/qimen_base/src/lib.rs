//! Closed enumerations and pure arithmetic for Qimen Dunjia charts.
//!
//! Everything in this crate is time-free and table-driven: the sexagenary
//! cycle, the 24 solar terms, the nine Luoshu palaces, and the symbol rings
//! laid onto them. The time-dependent layers (ephemeris, almanac, chart)
//! build on these types.

pub mod palace;
pub mod solar_term;
pub mod stem_branch;
pub mod symbols;

pub use palace::{ALL_PALACES, OUTER_TRAVERSAL, Palace};
pub use solar_term::{ALL_SOLAR_TERMS, Period, Polarity, SolarTerm};
pub use stem_branch::{ALL_BRANCHES, ALL_STEMS, ALL_XUN_HEADS, Branch, Stem, StemBranch, XunHead};
pub use symbols::{
    DEITY_RING_FORWARD, DEITY_RING_REVERSE, Deity, GATE_RING, Gate, STAR_RING, Star, TOKEN_ORDER,
};
