//! The 24 solar terms (jieqi) and the yang/yin halves of the year.
//!
//! Each term is the instant the apparent solar longitude reaches a fixed
//! multiple of 15°. The table starts at Start-of-Spring (315°), the head of
//! the solar year, and carries the Gregorian month each term nominally falls
//! in, which seeds the search window for the boundary resolver.

/// One of the 24 solar terms, in annual order from Start-of-Spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarTerm {
    StartOfSpring,
    RainWater,
    AwakeningOfInsects,
    SpringEquinox,
    ClearAndBright,
    GrainRain,
    StartOfSummer,
    GrainFull,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    StartOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostDescent,
    StartOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
    MinorCold,
    MajorCold,
}

/// All 24 terms in annual order.
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::StartOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::SpringEquinox,
    SolarTerm::ClearAndBright,
    SolarTerm::GrainRain,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainFull,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostDescent,
    SolarTerm::StartOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
];

impl SolarTerm {
    /// 0-based annual index (Start-of-Spring = 0 .. Major-Cold = 23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term at an annual index (wraps mod 24).
    pub const fn from_index(idx: u8) -> SolarTerm {
        ALL_SOLAR_TERMS[(idx % 24) as usize]
    }

    /// Apparent solar longitude at the term, in degrees.
    pub const fn target_longitude(self) -> f64 {
        // 315° at Start-of-Spring, +15° per term, wrapping at 360°.
        let deg = (315 + 15 * self.index() as u32) % 360;
        deg as f64
    }

    /// Gregorian month the term nominally falls in (1-12).
    pub const fn nominal_month(self) -> u32 {
        match self {
            Self::StartOfSpring | Self::RainWater => 2,
            Self::AwakeningOfInsects | Self::SpringEquinox => 3,
            Self::ClearAndBright | Self::GrainRain => 4,
            Self::StartOfSummer | Self::GrainFull => 5,
            Self::GrainInEar | Self::SummerSolstice => 6,
            Self::MinorHeat | Self::MajorHeat => 7,
            Self::StartOfAutumn | Self::EndOfHeat => 8,
            Self::WhiteDew | Self::AutumnEquinox => 9,
            Self::ColdDew | Self::FrostDescent => 10,
            Self::StartOfWinter | Self::MinorSnow => 11,
            Self::MajorSnow | Self::WinterSolstice => 12,
            Self::MinorCold | Self::MajorCold => 1,
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::StartOfSpring => "Start of Spring",
            Self::RainWater => "Rain Water",
            Self::AwakeningOfInsects => "Awakening of Insects",
            Self::SpringEquinox => "Spring Equinox",
            Self::ClearAndBright => "Clear and Bright",
            Self::GrainRain => "Grain Rain",
            Self::StartOfSummer => "Start of Summer",
            Self::GrainFull => "Grain Full",
            Self::GrainInEar => "Grain in Ear",
            Self::SummerSolstice => "Summer Solstice",
            Self::MinorHeat => "Minor Heat",
            Self::MajorHeat => "Major Heat",
            Self::StartOfAutumn => "Start of Autumn",
            Self::EndOfHeat => "End of Heat",
            Self::WhiteDew => "White Dew",
            Self::AutumnEquinox => "Autumn Equinox",
            Self::ColdDew => "Cold Dew",
            Self::FrostDescent => "Frost Descent",
            Self::StartOfWinter => "Start of Winter",
            Self::MinorSnow => "Minor Snow",
            Self::MajorSnow => "Major Snow",
            Self::WinterSolstice => "Winter Solstice",
            Self::MinorCold => "Minor Cold",
            Self::MajorCold => "Major Cold",
        }
    }

    /// Chinese name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::StartOfSpring => "立春",
            Self::RainWater => "雨水",
            Self::AwakeningOfInsects => "惊蛰",
            Self::SpringEquinox => "春分",
            Self::ClearAndBright => "清明",
            Self::GrainRain => "谷雨",
            Self::StartOfSummer => "立夏",
            Self::GrainFull => "小满",
            Self::GrainInEar => "芒种",
            Self::SummerSolstice => "夏至",
            Self::MinorHeat => "小暑",
            Self::MajorHeat => "大暑",
            Self::StartOfAutumn => "立秋",
            Self::EndOfHeat => "处暑",
            Self::WhiteDew => "白露",
            Self::AutumnEquinox => "秋分",
            Self::ColdDew => "寒露",
            Self::FrostDescent => "霜降",
            Self::StartOfWinter => "立冬",
            Self::MinorSnow => "小雪",
            Self::MajorSnow => "大雪",
            Self::WinterSolstice => "冬至",
            Self::MinorCold => "小寒",
            Self::MajorCold => "大寒",
        }
    }

    /// Half of the year the term opens: yang from the winter solstice,
    /// yin from the summer solstice.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::WinterSolstice
            | Self::MinorCold
            | Self::MajorCold
            | Self::StartOfSpring
            | Self::RainWater
            | Self::AwakeningOfInsects
            | Self::SpringEquinox
            | Self::ClearAndBright
            | Self::GrainRain
            | Self::StartOfSummer
            | Self::GrainFull
            | Self::GrainInEar => Polarity::Yang,
            _ => Polarity::Yin,
        }
    }

    /// The stand-in term a leap (repeated-segment) adjustment substitutes
    /// for a solstice anchor. Only solstices can be leap anchors.
    pub const fn leap_substitute(self) -> Option<SolarTerm> {
        match self {
            Self::WinterSolstice => Some(Self::MajorSnow),
            Self::SummerSolstice => Some(Self::GrainInEar),
            _ => None,
        }
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Yang (ascending, forward-counting) or yin (descending, reverse-counting)
/// half of the solar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

/// Five-day band within a term's 15-day span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Period {
    Upper,
    Middle,
    Lower,
}

impl Period {
    /// 0-based band index (Upper=0, Middle=1, Lower=2).
    pub const fn index(self) -> u8 {
        match self {
            Self::Upper => 0,
            Self::Middle => 1,
            Self::Lower => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Upper => "Upper",
            Self::Middle => "Middle",
            Self::Lower => "Lower",
        }
    }
}
