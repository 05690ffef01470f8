//! The nine palaces of the Luoshu square and their wrap arithmetic.
//!
//! Palace numbers follow the Luoshu (1 = Kan in the north .. 9 = Li in the
//! south, 5 = the center). The eight outer palaces form a clockwise ring;
//! anything assigned to the center is borrowed into Kun's ring slot.
//!
//! All wrap arithmetic on palace numbers lives here, in three deliberately
//! separate helpers: ring walks step through all nine numbers, the center
//! normalization handles the borrow, and the duty-palace wrap additionally
//! skips the center. They look alike but are not interchangeable.

use crate::solar_term::Polarity;

/// A Luoshu palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Palace {
    Kan,
    Kun,
    Zhen,
    Xun,
    Center,
    Qian,
    Dui,
    Gen,
    Li,
}

/// All nine palaces in Luoshu-number order.
pub const ALL_PALACES: [Palace; 9] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Center,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
];

/// The eight outer palaces in clockwise ring order, starting at Kan.
pub const OUTER_TRAVERSAL: [Palace; 8] = [
    Palace::Kan,
    Palace::Gen,
    Palace::Zhen,
    Palace::Xun,
    Palace::Li,
    Palace::Kun,
    Palace::Dui,
    Palace::Qian,
];

impl Palace {
    /// Luoshu number (1-9).
    pub const fn number(self) -> u8 {
        match self {
            Self::Kan => 1,
            Self::Kun => 2,
            Self::Zhen => 3,
            Self::Xun => 4,
            Self::Center => 5,
            Self::Qian => 6,
            Self::Dui => 7,
            Self::Gen => 8,
            Self::Li => 9,
        }
    }

    /// Palace with a Luoshu number; `None` outside 1-9.
    pub const fn from_number(n: u8) -> Option<Palace> {
        match n {
            1 => Some(Self::Kan),
            2 => Some(Self::Kun),
            3 => Some(Self::Zhen),
            4 => Some(Self::Xun),
            5 => Some(Self::Center),
            6 => Some(Self::Qian),
            7 => Some(Self::Dui),
            8 => Some(Self::Gen),
            9 => Some(Self::Li),
            _ => None,
        }
    }

    /// Trigram name ("Center" for palace 5).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kan => "Kan",
            Self::Kun => "Kun",
            Self::Zhen => "Zhen",
            Self::Xun => "Xun",
            Self::Center => "Center",
            Self::Qian => "Qian",
            Self::Dui => "Dui",
            Self::Gen => "Gen",
            Self::Li => "Li",
        }
    }

    /// Chinese glyph.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Kan => "坎",
            Self::Kun => "坤",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Center => "中",
            Self::Qian => "乾",
            Self::Dui => "兑",
            Self::Gen => "艮",
            Self::Li => "离",
        }
    }

    /// Compass direction of the palace.
    pub const fn direction(self) -> &'static str {
        match self {
            Self::Kan => "North",
            Self::Kun => "Southwest",
            Self::Zhen => "East",
            Self::Xun => "Southeast",
            Self::Center => "Center",
            Self::Qian => "Northwest",
            Self::Dui => "West",
            Self::Gen => "Northeast",
            Self::Li => "South",
        }
    }

    /// Ring slot (0-7) in [`OUTER_TRAVERSAL`]; the center borrows Kun's slot.
    pub const fn ring_slot(self) -> usize {
        match self.normalize_center() {
            Self::Kan => 0,
            Self::Gen => 1,
            Self::Zhen => 2,
            Self::Xun => 3,
            Self::Li => 4,
            Self::Kun => 5,
            Self::Dui => 6,
            _ => 7, // Qian; Center is gone after normalization
        }
    }

    /// The palace itself, or Kun if this is the center (borrow rule).
    pub const fn normalize_center(self) -> Palace {
        match self {
            Self::Center => Self::Kun,
            other => other,
        }
    }
}

impl std::fmt::Display for Palace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --- wrap arithmetic -------------------------------------------------------

/// Next palace number in a nine-step walk over all palaces, center included.
///
/// Yang halves walk ascending (1,2,..,9,1), yin halves descending.
pub const fn next_in_walk(current: u8, polarity: Polarity) -> u8 {
    match polarity {
        Polarity::Yang => current % 9 + 1,
        Polarity::Yin => (current + 9 - 2) % 9 + 1,
    }
}

/// Fold an arbitrary signed palace offset back into 1-9.
pub fn wrap_palace_number(n: i64) -> u8 {
    let r = (n - 1).rem_euclid(9) + 1;
    r as u8
}

/// Fold a duty-palace offset into 1-9, then skip the center: the duty gate
/// never sits in palace 5, it borrows Kun (2).
pub fn wrap_duty_palace(n: i64) -> u8 {
    match wrap_palace_number(n) {
        5 => 2,
        p => p,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_luoshu() {
        for (i, p) in ALL_PALACES.iter().enumerate() {
            assert_eq!(p.number() as usize, i + 1);
            assert_eq!(Palace::from_number(i as u8 + 1), Some(*p));
        }
        assert_eq!(Palace::from_number(0), None);
        assert_eq!(Palace::from_number(10), None);
    }

    #[test]
    fn ring_slots_match_traversal() {
        for (slot, p) in OUTER_TRAVERSAL.iter().enumerate() {
            assert_eq!(p.ring_slot(), slot);
        }
        assert_eq!(Palace::Center.ring_slot(), Palace::Kun.ring_slot());
    }

    #[test]
    fn walk_covers_all_nine() {
        for polarity in [Polarity::Yang, Polarity::Yin] {
            for start in 1..=9u8 {
                let mut seen = [false; 9];
                let mut pos = start;
                for _ in 0..9 {
                    seen[(pos - 1) as usize] = true;
                    pos = next_in_walk(pos, polarity);
                }
                assert_eq!(pos, start, "walk returns to start");
                assert!(seen.iter().all(|&s| s), "walk visits every palace");
            }
        }
    }

    #[test]
    fn walk_directions() {
        assert_eq!(next_in_walk(9, Polarity::Yang), 1);
        assert_eq!(next_in_walk(1, Polarity::Yang), 2);
        assert_eq!(next_in_walk(1, Polarity::Yin), 9);
        assert_eq!(next_in_walk(9, Polarity::Yin), 8);
    }

    #[test]
    fn palace_wrap() {
        assert_eq!(wrap_palace_number(10), 1);
        assert_eq!(wrap_palace_number(0), 9);
        assert_eq!(wrap_palace_number(-2), 7);
        assert_eq!(wrap_palace_number(12), 3);
        for n in 1..=9i64 {
            assert_eq!(wrap_palace_number(n) as i64, n);
        }
    }

    #[test]
    fn duty_wrap_skips_center() {
        assert_eq!(wrap_duty_palace(5), 2);
        assert_eq!(wrap_duty_palace(14), 2);
        assert_eq!(wrap_duty_palace(-2), 7);
        assert_eq!(wrap_duty_palace(12), 3);
        assert_eq!(wrap_duty_palace(0), 9);
    }
}
