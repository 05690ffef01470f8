//! The full casting pipeline: timestamp → pillars → configuration →
//! board → annotations.

use chrono::NaiveDateTime;
use qimen_almanac::{Almanac, FourPillars, four_pillars};
use qimen_ephem::{AnalyticSun, SolarEphemeris};

use crate::annotate::{Annotations, annotate};
use crate::board::{Board, arrange_board};
use crate::config::{AnchorMethod, Configuration, resolve_configuration};
use crate::error::ChartError;

/// Timestamp layout accepted on the query boundary.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A fully cast chart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chart {
    pub at: NaiveDateTime,
    pub pillars: FourPillars,
    pub configuration: Configuration,
    pub board: Board,
    pub annotations: Annotations,
}

/// Parse a `YYYY-MM-DD HH:MM:SS` civil timestamp.
pub fn parse_local_timestamp(input: &str) -> Result<NaiveDateTime, ChartError> {
    NaiveDateTime::parse_from_str(input.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        ChartError::MalformedInput {
            input: input.to_owned(),
        }
    })
}

/// Cast a chart with the built-in analytic sun and the intercalation
/// anchor method.
pub fn cast_chart(at: NaiveDateTime) -> Result<Chart, ChartError> {
    cast_chart_with(&AnalyticSun, at, AnchorMethod::Intercalation)
}

/// Cast a chart against an explicit ephemeris backend and anchor method.
pub fn cast_chart_with(
    sun: &dyn SolarEphemeris,
    at: NaiveDateTime,
    method: AnchorMethod,
) -> Result<Chart, ChartError> {
    let almanac = Almanac::new(sun);
    let pillars = four_pillars(&almanac, at)?;
    let configuration = resolve_configuration(&almanac, at, pillars.day, method)?;
    let board = arrange_board(&configuration, &pillars);
    let annotations = annotate(&board, pillars.hour.branch);
    Ok(Chart {
        at,
        pillars,
        configuration,
        board,
        annotations,
    })
}
