//! Strata resolution for geotechnical borehole logs.
//!
//! Turns raw `STRATA_MAIN` rows into depth-correct, colour-coded segments
//! positioned at their borehole's coordinates. Every stage is a plain
//! function of its inputs; the only mutable state is the [`StrataSession`]
//! owned by the caller (colour overrides, borehole and unit selection).
//!
//! # Usage
//!
//! ```rust
//! use gi_model::{Point, StrataInterval};
//! use gi_strata::resolver::resolve;
//!
//! let points = vec![Point::new("P1", 0.0, 0.0, 100.0)];
//! let intervals = vec![
//!     StrataInterval::new("P1", 0.0, 2.0, "Sand"),
//!     StrataInterval::new("P1", 2.0, 5.0, "Clay"),
//! ];
//! let resolution = resolve(&points, &intervals, &[]);
//! assert_eq!(resolution.segments[1].top_elevation, 98.0);
//! assert_eq!(resolution.segments[1].bottom_elevation, 95.0);
//! ```
//!
//! The full render used by the CLI and the chart apps is
//! [`pipeline::render`]:
//! split sub-layers, resolve, attach descriptions, paint colours, filter by
//! borehole and unit, then flag legend entries.

pub mod colors;
pub mod config;
pub mod enrich;
pub mod legend;
pub mod pipeline;
pub mod resolver;
pub mod selection;
pub mod session;

pub use colors::{assign_color, ColorRegistry, ColorStrategy};
pub use config::StrataConfig;
pub use legend::{build_legend_flags, LegendEntry};
pub use pipeline::{render, StrataInputs, StrataView};
pub use resolver::{resolve, split_sub_layers, Resolution, SkipCounts};
pub use selection::{select_units, select_visible};
pub use session::StrataSession;
