//! The rotating boards' symbol sets: nine stars, eight gates, eight deities,
//! and the fixed token order laid on the earth plate.
//!
//! Rings are listed in the clockwise order of [`OUTER_TRAVERSAL`]; rotating
//! a ring by `k` moves each symbol `k` slots clockwise, so
//! `out[i] = ring[(i - k) mod n]`.
//!
//! [`OUTER_TRAVERSAL`]: crate::palace::OUTER_TRAVERSAL

use crate::palace::Palace;
use crate::stem_branch::Stem;

/// The nine stars of the sky plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Star {
    Tianpeng,
    Tianrui,
    Tianchong,
    Tianfu,
    Tianqin,
    Tianxin,
    Tianzhu,
    Tianren,
    Tianying,
}

impl Star {
    /// The star's native palace in the resting chart.
    pub const fn native_palace(self) -> Palace {
        match self {
            Self::Tianpeng => Palace::Kan,
            Self::Tianrui => Palace::Kun,
            Self::Tianchong => Palace::Zhen,
            Self::Tianfu => Palace::Xun,
            Self::Tianqin => Palace::Center,
            Self::Tianxin => Palace::Qian,
            Self::Tianzhu => Palace::Dui,
            Self::Tianren => Palace::Gen,
            Self::Tianying => Palace::Li,
        }
    }

    /// Star natively seated in a palace.
    pub const fn native_of(palace: Palace) -> Star {
        match palace {
            Palace::Kan => Self::Tianpeng,
            Palace::Kun => Self::Tianrui,
            Palace::Zhen => Self::Tianchong,
            Palace::Xun => Self::Tianfu,
            Palace::Center => Self::Tianqin,
            Palace::Qian => Self::Tianxin,
            Palace::Dui => Self::Tianzhu,
            Palace::Gen => Self::Tianren,
            Palace::Li => Self::Tianying,
        }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tianpeng => "Tianpeng",
            Self::Tianrui => "Tianrui",
            Self::Tianchong => "Tianchong",
            Self::Tianfu => "Tianfu",
            Self::Tianqin => "Tianqin",
            Self::Tianxin => "Tianxin",
            Self::Tianzhu => "Tianzhu",
            Self::Tianren => "Tianren",
            Self::Tianying => "Tianying",
        }
    }

    /// Chinese name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Tianpeng => "天蓬",
            Self::Tianrui => "天芮",
            Self::Tianchong => "天冲",
            Self::Tianfu => "天辅",
            Self::Tianqin => "天禽",
            Self::Tianxin => "天心",
            Self::Tianzhu => "天柱",
            Self::Tianren => "天任",
            Self::Tianying => "天英",
        }
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The eight outer stars in resting ring order (Tianqin stays centered).
pub const STAR_RING: [Star; 8] = [
    Star::Tianpeng,
    Star::Tianren,
    Star::Tianchong,
    Star::Tianfu,
    Star::Tianying,
    Star::Tianrui,
    Star::Tianzhu,
    Star::Tianxin,
];

/// The eight gates of the human plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gate {
    Rest,
    Life,
    Injury,
    Block,
    Scenery,
    Death,
    Fright,
    Open,
}

/// The eight gates in resting ring order (Rest natively in Kan).
pub const GATE_RING: [Gate; 8] = [
    Gate::Rest,
    Gate::Life,
    Gate::Injury,
    Gate::Block,
    Gate::Scenery,
    Gate::Death,
    Gate::Fright,
    Gate::Open,
];

impl Gate {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rest => "Rest",
            Self::Life => "Life",
            Self::Injury => "Injury",
            Self::Block => "Block",
            Self::Scenery => "Scenery",
            Self::Death => "Death",
            Self::Fright => "Fright",
            Self::Open => "Open",
        }
    }

    /// Chinese glyph.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Rest => "休",
            Self::Life => "生",
            Self::Injury => "伤",
            Self::Block => "杜",
            Self::Scenery => "景",
            Self::Death => "死",
            Self::Fright => "惊",
            Self::Open => "开",
        }
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The eight deities of the deity plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Deity {
    Zhifu,
    Tengshe,
    Taiyin,
    Liuhe,
    Baihu,
    Xuanwu,
    Jiudi,
    Jiutian,
}

/// Deity ring for yang charts, clockwise from Zhifu.
pub const DEITY_RING_FORWARD: [Deity; 8] = [
    Deity::Zhifu,
    Deity::Tengshe,
    Deity::Taiyin,
    Deity::Liuhe,
    Deity::Baihu,
    Deity::Xuanwu,
    Deity::Jiudi,
    Deity::Jiutian,
];

/// Deity ring for yin charts: same sequence walked the other way round.
pub const DEITY_RING_REVERSE: [Deity; 8] = [
    Deity::Zhifu,
    Deity::Jiutian,
    Deity::Jiudi,
    Deity::Xuanwu,
    Deity::Baihu,
    Deity::Liuhe,
    Deity::Taiyin,
    Deity::Tengshe,
];

impl Deity {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zhifu => "Zhifu",
            Self::Tengshe => "Tengshe",
            Self::Taiyin => "Taiyin",
            Self::Liuhe => "Liuhe",
            Self::Baihu => "Baihu",
            Self::Xuanwu => "Xuanwu",
            Self::Jiudi => "Jiudi",
            Self::Jiutian => "Jiutian",
        }
    }

    /// Chinese name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Zhifu => "值符",
            Self::Tengshe => "腾蛇",
            Self::Taiyin => "太阴",
            Self::Liuhe => "六合",
            Self::Baihu => "白虎",
            Self::Xuanwu => "玄武",
            Self::Jiudi => "九地",
            Self::Jiutian => "九天",
        }
    }
}

impl std::fmt::Display for Deity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The nine tokens (six instruments then three nobles) in the order the
/// earth-plate walk lays them down.
pub const TOKEN_ORDER: [Stem; 9] = [
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
    Stem::Ding,
    Stem::Bing,
    Stem::Yi,
];

/// Rotate a ring `steps` slots clockwise (negative = counter-clockwise).
pub fn rotate_ring<T: Copy, const N: usize>(ring: &[T; N], steps: i64) -> [T; N] {
    std::array::from_fn(|i| {
        let src = (i as i64 - steps).rem_euclid(N as i64) as usize;
        ring[src]
    })
}
