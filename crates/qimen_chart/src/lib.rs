//! Qimen Dunjia chart derivation.
//!
//! Turns a civil timestamp into a fully populated nine-palace board: the
//! configuration resolver picks a polarity and number through the solstice
//! leap rule, the board arranger rotates the symbol rings into place, and
//! the annotation pass reads the secondary facts off the finished board.
//!
//! ```no_run
//! use qimen_chart::{cast_chart, parse_local_timestamp};
//!
//! let at = parse_local_timestamp("2024-11-19 20:00:00")?;
//! let chart = cast_chart(at)?;
//! println!("{} {}", chart.configuration.polarity.name(), chart.configuration.number);
//! # Ok::<(), qimen_chart::ChartError>(())
//! ```

pub mod annotate;
pub mod board;
pub mod chart;
pub mod config;
pub mod error;

pub use annotate::{Annotations, Clash, Entombment, GateSuppression, HorseStar, annotate};
pub use board::{Board, BoardCell, arrange_board};
pub use chart::{Chart, cast_chart, cast_chart_with, parse_local_timestamp};
pub use config::{AnchorInfo, AnchorMethod, Configuration, resolve_configuration};
pub use error::ChartError;
