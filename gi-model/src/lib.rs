//! Core types for geotechnical investigation (GI) workbooks.
//!
//! Rows read from the workbook sheets ([`Point`], [`StrataInterval`],
//! [`SoilDescriptor`], [`MoistureSample`] and the lab results in [`lab`]),
//! the renderer-facing [`ResolvedSegment`], the [`Color`] value type and the
//! sheet/column names every reader must agree on.

pub mod color;
pub mod interval;
pub mod lab;
pub mod moisture;
pub mod number;
pub mod point;
pub mod segment;
pub mod sheet;

pub use color::{Color, ColorParseError};
pub use interval::{SoilDescriptor, StrataInterval};
pub use lab::{AtterbergResult, PsdSample, RockResult, SievePassing};
pub use moisture::{MoisturePoint, MoistureSample};
pub use number::format_value;
pub use point::Point;
pub use segment::ResolvedSegment;
pub use sheet::ReaderError;
