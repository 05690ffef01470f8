//! Heavenly stems, earthly branches, and the sexagenary (60) cycle.
//!
//! The 10 stems and 12 branches advance together, so only the 60
//! combinations with matching parity are valid pairs. The cycle index is a
//! bijection over those 60 pairs (index 0 = Jia-Zi).

/// The 10 heavenly stems (Jia=0 .. Gui=9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order.
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// 0-based cycle index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Chinese glyph.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Stem at a cycle index (wraps mod 10).
    pub const fn from_index(idx: u8) -> Stem {
        ALL_STEMS[(idx % 10) as usize]
    }
}

/// The 12 earthly branches (Zi=0 .. Hai=11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order.
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// 0-based cycle index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese glyph.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Branch at a cycle index (wraps mod 12).
    pub const fn from_index(idx: u8) -> Branch {
        ALL_BRANCHES[(idx % 12) as usize]
    }
}

/// A valid sexagenary stem-branch pair.
///
/// Validity invariant: `stem.index()` and `branch.index()` have the same
/// parity. All constructors in this crate uphold it; [`StemBranch::new`]
/// checks it for outside callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranch {
    /// Build a pair, rejecting the 60 parity-mismatched combinations.
    pub fn new(stem: Stem, branch: Branch) -> Option<StemBranch> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(StemBranch { stem, branch })
        } else {
            None
        }
    }

    /// Pair at a 60-cycle index (wraps mod 60; index 0 = Jia-Zi).
    pub const fn from_index(idx: u8) -> StemBranch {
        let i = idx % 60;
        StemBranch {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        }
    }

    /// 60-cycle index of the pair (0 = Jia-Zi .. 59 = Gui-Hai).
    ///
    /// `6*stem - 5*branch (mod 60)` is the CRT inverse of
    /// `(idx mod 10, idx mod 12)` for valid-parity pairs.
    pub fn cycle_index(self) -> u8 {
        (6 * self.stem.index() as i32 - 5 * self.branch.index() as i32).rem_euclid(60) as u8
    }

    /// Pinyin name, e.g. "Jia-Zi".
    pub fn name(self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }

    /// Chinese glyphs, e.g. "甲子".
    pub fn chinese(self) -> String {
        format!("{}{}", self.stem.chinese(), self.branch.chinese())
    }
}

impl std::fmt::Display for StemBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem.name(), self.branch.name())
    }
}

/// The six decad heads (Jia days opening each 10-day block of the cycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XunHead {
    JiaZi,
    JiaXu,
    JiaShen,
    JiaWu,
    JiaChen,
    JiaYin,
}

/// All six decad heads in cycle order (indices 0, 10, 20, 30, 40, 50).
pub const ALL_XUN_HEADS: [XunHead; 6] = [
    XunHead::JiaZi,
    XunHead::JiaXu,
    XunHead::JiaShen,
    XunHead::JiaWu,
    XunHead::JiaChen,
    XunHead::JiaYin,
];

impl XunHead {
    /// The head's own stem-branch pair.
    pub const fn stem_branch(self) -> StemBranch {
        StemBranch::from_index(self.decad() * 10)
    }

    /// 0-based decad number within the 60-cycle.
    pub const fn decad(self) -> u8 {
        match self {
            Self::JiaZi => 0,
            Self::JiaXu => 1,
            Self::JiaShen => 2,
            Self::JiaWu => 3,
            Self::JiaChen => 4,
            Self::JiaYin => 5,
        }
    }

    /// The instrument stem hidden under this head (Wu .. Gui).
    pub const fn instrument(self) -> Stem {
        match self {
            Self::JiaZi => Stem::Wu,
            Self::JiaXu => Stem::Ji,
            Self::JiaShen => Stem::Geng,
            Self::JiaWu => Stem::Xin,
            Self::JiaChen => Stem::Ren,
            Self::JiaYin => Stem::Gui,
        }
    }

    /// The decad head governing a pair.
    pub fn of(pair: StemBranch) -> XunHead {
        ALL_XUN_HEADS[(pair.cycle_index() / 10) as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::JiaZi => "Jia-Zi",
            Self::JiaXu => "Jia-Xu",
            Self::JiaShen => "Jia-Shen",
            Self::JiaWu => "Jia-Wu",
            Self::JiaChen => "Jia-Chen",
            Self::JiaYin => "Jia-Yin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn cycle_index_roundtrip() {
        for i in 0..60u8 {
            let pair = StemBranch::from_index(i);
            assert_eq!(pair.cycle_index(), i, "index {i}");
        }
    }

    #[test]
    fn cycle_starts_at_jia_zi() {
        let pair = StemBranch::from_index(0);
        assert_eq!(pair.stem, Stem::Jia);
        assert_eq!(pair.branch, Branch::Zi);
    }

    #[test]
    fn new_rejects_parity_mismatch() {
        assert!(StemBranch::new(Stem::Jia, Branch::Chou).is_none());
        assert!(StemBranch::new(Stem::Yi, Branch::Chou).is_some());
    }

    #[test]
    fn new_accepts_exactly_sixty() {
        let mut count = 0;
        for s in ALL_STEMS {
            for b in ALL_BRANCHES {
                if StemBranch::new(s, b).is_some() {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 60);
    }

    #[test]
    fn xun_head_pairs() {
        assert_eq!(XunHead::JiaZi.stem_branch().cycle_index(), 0);
        assert_eq!(XunHead::JiaXu.stem_branch().cycle_index(), 10);
        assert_eq!(XunHead::JiaYin.stem_branch().cycle_index(), 50);
        for h in ALL_XUN_HEADS {
            assert_eq!(h.stem_branch().stem, Stem::Jia);
        }
    }

    #[test]
    fn xun_head_of_pair() {
        // Geng-Xu (index 46) sits in the Jia-Chen decad
        let pair = StemBranch::from_index(46);
        assert_eq!(pair.stem, Stem::Geng);
        assert_eq!(pair.branch, Branch::Xu);
        assert_eq!(XunHead::of(pair), XunHead::JiaChen);
        // Xin-You (index 57) sits in the Jia-Yin decad
        assert_eq!(XunHead::of(StemBranch::from_index(57)), XunHead::JiaYin);
    }

    #[test]
    fn xun_head_matches_branch_stem_delta() {
        // The head is equivalently determined by (branch - stem) mod 12:
        // 0→Jia-Zi, 10→Jia-Xu, 8→Jia-Shen, 6→Jia-Wu, 4→Jia-Chen, 2→Jia-Yin.
        for i in 0..60u8 {
            let pair = StemBranch::from_index(i);
            let delta =
                (pair.branch.index() as i32 - pair.stem.index() as i32).rem_euclid(12) as u8;
            let expect = match delta {
                0 => XunHead::JiaZi,
                10 => XunHead::JiaXu,
                8 => XunHead::JiaShen,
                6 => XunHead::JiaWu,
                4 => XunHead::JiaChen,
                2 => XunHead::JiaYin,
                _ => panic!("odd delta {delta} for valid pair {pair}"),
            };
            assert_eq!(XunHead::of(pair), expect, "pair {pair}");
        }
    }

    #[test]
    fn instruments_are_the_six_yi() {
        let instruments: Vec<Stem> = ALL_XUN_HEADS.iter().map(|h| h.instrument()).collect();
        assert_eq!(
            instruments,
            [Stem::Wu, Stem::Ji, Stem::Geng, Stem::Xin, Stem::Ren, Stem::Gui]
        );
    }
}
