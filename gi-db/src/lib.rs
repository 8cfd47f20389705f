//! In-memory SQLite database layer for geotechnical investigation workbooks.
//!
//! A workbook is a set of sheets (`POINT`, `STRATA_MAIN`, `SOIL_DESCRIPTION`,
//! `Moisture Content` and the lab sheets `PSD`, `Atterberg Limits` and
//! `Rock Results`), each supplied as CSV text. The loaders validate the
//! header row of each sheet, parse the cells and insert the rows into an
//! in-memory SQLite database; the typed query methods hand the rows back as
//! [`gi_model`] structs for the strata resolver and the chart apps.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV text comes from `include_str!` in the chart apps, from files in the CLI,
//!   or from an Excel workbook converted by [`SheetSet::from_excel_bytes`]
//! - Every table carries a `row_index` so queries return rows in sheet order
//!
//! # Usage
//!
//! ```rust
//! use gi_db::Workbook;
//!
//! let wb = Workbook::new().unwrap();
//! wb.load_points("PointID,East,North,Elevation\nBH01,100,200,50\n").unwrap();
//! wb.load_strata("PointID,Depth,Bottom,Geology_Unit_1\nBH01,0,1.5,Fill\n").unwrap();
//!
//! let points = wb.query_points().unwrap();
//! let strata = wb.query_strata().unwrap();
//! assert_eq!(points.len(), 1);
//! assert_eq!(strata[0].geology_unit, "Fill");
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;
pub mod sheets;

pub use sheets::SheetSet;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// One loaded workbook held in an in-memory SQLite database.
///
/// Cheaply cloneable (via `Rc`); clones share the same connection.
#[derive(Clone)]
pub struct Workbook {
    conn: Rc<RefCell<Connection>>,
}

impl Workbook {
    /// Create an empty in-memory workbook with the full schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
