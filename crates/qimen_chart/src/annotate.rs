//! Secondary board annotations: entombment, instrument clash, gate
//! suppression, and the horse star. All pure table lookups over the
//! finished board; none can fail.

use qimen_base::{Branch, Gate, Palace, Stem};

use crate::board::Board;

/// A sky token sitting in its own tomb palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entombment {
    pub stem: Stem,
    /// The tomb branch associated with the stem.
    pub branch: Branch,
    pub palace: Palace,
}

/// An instrument token sitting in its own punishment palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Clash {
    pub stem: Stem,
    pub palace: Palace,
}

/// A gate standing in a palace whose element overcomes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GateSuppression {
    pub gate: Gate,
    pub palace: Palace,
}

impl GateSuppression {
    /// The elemental conflict behind the suppression.
    pub fn note(&self) -> &'static str {
        // the constructor only admits pairs present in the table
        suppression_note(self.gate, self.palace).unwrap_or("")
    }
}

/// The hour branch's travelling-horse station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HorseStar {
    /// The station branch.
    pub branch: Branch,
    pub palace: Palace,
}

/// All annotations of one board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Annotations {
    pub entombments: Vec<Entombment>,
    pub clashes: Vec<Clash>,
    pub suppressions: Vec<GateSuppression>,
    pub horse: HorseStar,
}

/// Tomb branch and palace of a stem.
pub const fn tomb_of(stem: Stem) -> (Branch, Palace) {
    match stem {
        Stem::Jia => (Branch::Wei, Palace::Kun),
        Stem::Yi => (Branch::Xu, Palace::Qian),
        Stem::Bing => (Branch::Xu, Palace::Qian),
        Stem::Ding => (Branch::Chou, Palace::Gen),
        Stem::Wu => (Branch::Xu, Palace::Qian),
        Stem::Ji => (Branch::Chou, Palace::Gen),
        Stem::Geng => (Branch::Chou, Palace::Gen),
        Stem::Xin => (Branch::Chen, Palace::Xun),
        Stem::Ren => (Branch::Chen, Palace::Xun),
        Stem::Gui => (Branch::Wei, Palace::Kun),
    }
}

/// Punishment palace of the six instrument stems.
pub const fn clash_palace(stem: Stem) -> Option<Palace> {
    match stem {
        Stem::Wu => Some(Palace::Zhen),
        Stem::Ji => Some(Palace::Kun),
        Stem::Geng => Some(Palace::Gen),
        Stem::Xin => Some(Palace::Li),
        Stem::Ren => Some(Palace::Xun),
        Stem::Gui => Some(Palace::Xun),
        _ => None,
    }
}

/// Elemental-conflict note for a suppressed gate/palace pair.
pub const fn suppression_note(gate: Gate, palace: Palace) -> Option<&'static str> {
    match (gate, palace) {
        (Gate::Injury | Gate::Block, Palace::Kun | Palace::Gen) => {
            Some("wood gate in an earth palace")
        }
        (Gate::Fright | Gate::Open, Palace::Zhen | Palace::Xun) => {
            Some("metal gate in a wood palace")
        }
        (Gate::Scenery, Palace::Qian | Palace::Dui) => Some("fire gate in a metal palace"),
        (Gate::Rest, Palace::Li) => Some("water gate in a fire palace"),
        (Gate::Life | Gate::Death, Palace::Kan) => Some("earth gate in a water palace"),
        _ => None,
    }
}

/// Travelling-horse station of an hour branch.
pub const fn horse_station(hour_branch: Branch) -> (Branch, Palace) {
    match hour_branch {
        Branch::Shen | Branch::Zi | Branch::Chen => (Branch::Yin, Palace::Gen),
        Branch::Hai | Branch::Mao | Branch::Wei => (Branch::Si, Palace::Xun),
        Branch::Yin | Branch::Wu | Branch::Xu => (Branch::Shen, Palace::Kun),
        Branch::Si | Branch::You | Branch::Chou => (Branch::Hai, Palace::Qian),
    }
}

/// Compute every annotation for a finished board.
pub fn annotate(board: &Board, hour_branch: Branch) -> Annotations {
    let mut entombments = Vec::new();
    let mut clashes = Vec::new();
    let mut suppressions = Vec::new();

    for cell in &board.cells {
        for stem in [Some(cell.sky), cell.sky_rider].into_iter().flatten() {
            let (branch, tomb) = tomb_of(stem);
            if tomb == cell.palace {
                entombments.push(Entombment {
                    stem,
                    branch,
                    palace: cell.palace,
                });
            }
            if clash_palace(stem) == Some(cell.palace) {
                clashes.push(Clash {
                    stem,
                    palace: cell.palace,
                });
            }
        }
        if let Some(gate) = cell.gate {
            if suppression_note(gate, cell.palace).is_some() {
                suppressions.push(GateSuppression {
                    gate,
                    palace: cell.palace,
                });
            }
        }
    }

    let (branch, palace) = horse_station(hour_branch);
    Annotations {
        entombments,
        clashes,
        suppressions,
        horse: HorseStar { branch, palace },
    }
}
