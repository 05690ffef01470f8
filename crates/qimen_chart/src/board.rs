//! Board arrangement: earth plate, sky plate with stars, gates, deities.
//!
//! The earth plate is laid by a nine-step numeric walk from the
//! configuration number. Every rotating ring is then driven by where two
//! stems sit on that plate: the hour stem and the hour decad's instrument.
//! Ring rotations always work in the clockwise traversal order, with
//! anything on the center borrowing Kun's slot; the duty-palace offset is
//! the one place that works on raw palace numbers instead, with its own
//! wrap rule.

use qimen_base::palace::{next_in_walk, wrap_duty_palace};
use qimen_base::symbols::rotate_ring;
use qimen_base::{
    ALL_PALACES, DEITY_RING_FORWARD, DEITY_RING_REVERSE, Deity, GATE_RING, Gate, OUTER_TRAVERSAL,
    Palace, Polarity, STAR_RING, Star, Stem, TOKEN_ORDER, XunHead,
};
use qimen_almanac::FourPillars;

use crate::config::Configuration;

/// One palace of the finished board. The center has no gate or deity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardCell {
    pub palace: Palace,
    pub earth: Stem,
    /// The center's earth token lodging in Kun (the center borrows
    /// palace 2), when it differs from Kun's own.
    pub earth_rider: Option<Stem>,
    pub sky: Stem,
    /// The center's sky token riding along in the palace that received
    /// the center-native star, when it differs from that palace's own.
    pub sky_rider: Option<Stem>,
    pub star: Star,
    pub gate: Option<Gate>,
    pub deity: Option<Deity>,
}

/// The fully arranged nine-palace board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Board {
    /// Cells indexed by Luoshu number minus one.
    pub cells: [BoardCell; 9],
    /// Decad head of the hour the board was cast for.
    pub xun: XunHead,
    /// Gate leading the hour (the one over the decad instrument's seat).
    pub duty_gate: Gate,
    /// Palace the duty gate has moved to.
    pub duty_palace: Palace,
}

impl Board {
    pub fn cell(&self, palace: Palace) -> &BoardCell {
        &self.cells[(palace.number() - 1) as usize]
    }
}

/// Lay the earth plate: a nine-step walk over palace numbers starting at
/// the configuration number, ascending for yang and descending for yin,
/// dropping the nine tokens in fixed order.
fn earth_plate(number: u8, polarity: Polarity) -> [Stem; 9] {
    let mut tokens = [TOKEN_ORDER[0]; 9];
    let mut pos = number;
    for token in TOKEN_ORDER {
        tokens[(pos - 1) as usize] = token;
        pos = next_in_walk(pos, polarity);
    }
    tokens
}

/// Palace holding a token on the earth plate. Total for the nine laid
/// tokens; Jia is never laid and must be substituted before the lookup.
fn palace_of_token(tokens: &[Stem; 9], token: Stem) -> Palace {
    for (i, t) in tokens.iter().enumerate() {
        if *t == token {
            return ALL_PALACES[i];
        }
    }
    Palace::Center
}

/// Arrange the full board for a resolved configuration and four pillars.
pub fn arrange_board(config: &Configuration, pillars: &FourPillars) -> Board {
    let xun = pillars.hour_xun();
    let earth = earth_plate(config.number, config.polarity);

    // a Jia hour stands in as its decad's instrument, leaving the plates
    // at rest
    let instrument = xun.instrument();
    let hour_token = if pillars.hour.stem == Stem::Jia {
        instrument
    } else {
        pillars.hour.stem
    };
    let xun_palace = palace_of_token(&earth, instrument);
    let hour_palace = palace_of_token(&earth, hour_token);

    // sky plate and stars turn together by the hour stem's lead over the
    // instrument, measured in ring slots
    let rotation = hour_palace.ring_slot() as i64 - xun_palace.ring_slot() as i64;
    let earth_ring: [Stem; 8] =
        std::array::from_fn(|i| earth[(OUTER_TRAVERSAL[i].number() - 1) as usize]);
    let sky_ring = rotate_ring(&earth_ring, rotation);
    let star_ring = rotate_ring(&STAR_RING, rotation);

    // the duty gate starts over the instrument's seat and advances one
    // palace number per hour elapsed in the decad, with the hour hand
    // running backward in yin charts
    let elapsed =
        pillars.hour.cycle_index() as i64 - xun.stem_branch().cycle_index() as i64;
    let raw_seat = xun_palace.number() as i64;
    let duty_number = wrap_duty_palace(match config.polarity {
        Polarity::Yang => raw_seat + elapsed,
        Polarity::Yin => raw_seat - elapsed,
    });
    let duty_palace = ALL_PALACES[(duty_number - 1) as usize];
    let duty_gate = GATE_RING[xun_palace.ring_slot()];
    let gate_rotation = duty_palace.ring_slot() as i64 - xun_palace.ring_slot() as i64;
    let gate_ring = rotate_ring(&GATE_RING, gate_rotation);

    let deity_base = match config.polarity {
        Polarity::Yang => DEITY_RING_FORWARD,
        Polarity::Yin => DEITY_RING_REVERSE,
    };
    let deity_ring = rotate_ring(&deity_base, hour_palace.ring_slot() as i64);

    let center_earth = earth[(Palace::Center.number() - 1) as usize];
    let mut cells: [BoardCell; 9] = std::array::from_fn(|i| {
        let palace = ALL_PALACES[i];
        BoardCell {
            palace,
            earth: earth[i],
            earth_rider: None,
            sky: center_earth,
            sky_rider: None,
            star: Star::Tianqin,
            gate: None,
            deity: None,
        }
    });
    for (slot, palace) in OUTER_TRAVERSAL.iter().enumerate() {
        let cell = &mut cells[(palace.number() - 1) as usize];
        cell.sky = sky_ring[slot];
        cell.star = star_ring[slot];
        cell.gate = Some(gate_ring[slot]);
        cell.deity = Some(deity_ring[slot]);
    }

    // the palace that received the center-native star co-displays the
    // center's sky token
    for cell in cells.iter_mut() {
        if cell.palace != Palace::Center
            && cell.star.native_palace() == Palace::Kun
            && cell.sky != center_earth
        {
            cell.sky_rider = Some(center_earth);
        }
    }

    // on the earth plate the center always lodges in Kun
    let kun = &mut cells[(Palace::Kun.number() - 1) as usize];
    if kun.earth != center_earth {
        kun.earth_rider = Some(center_earth);
    }

    Board {
        cells,
        xun,
        duty_gate,
        duty_palace,
    }
}
