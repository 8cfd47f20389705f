//! SQL schema for the workbook database.
//!
//! One table per sheet. `row_index` is the SQLite rowid, so it increases in
//! insertion order and every query can return rows in the order the sheet
//! listed them.

/// Returns the full SQL schema as a single batch string.
///
/// - `points` - borehole locations from `POINT`
/// - `strata` - logged intervals from `STRATA_MAIN`, main and sub-layer
/// - `soil_descriptions` - compiled descriptions from `SOIL_DESCRIPTION`
/// - `moisture` - lab results from `Moisture Content`
/// - `psd_samples`, `psd_passing` - gradings from `PSD`, one `psd_passing`
///   row per reported sieve
/// - `atterberg` - liquid limit and plasticity index from `Atterberg Limits`
/// - `rock` - point load and UCS results from `Rock Results`
///
/// `points.point_id` is deliberately not unique; the resolver keeps the first
/// row for a duplicated PointID.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS points (
        row_index INTEGER PRIMARY KEY,
        point_id TEXT NOT NULL,
        east REAL NOT NULL,
        north REAL NOT NULL,
        elevation REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_points_id ON points(point_id);

    CREATE TABLE IF NOT EXISTS strata (
        row_index INTEGER PRIMARY KEY,
        point_id TEXT NOT NULL,
        depth REAL NOT NULL,
        bottom REAL NOT NULL,
        geology_unit TEXT NOT NULL,
        sub_layer INTEGER NOT NULL DEFAULT 0
    );
    CREATE INDEX IF NOT EXISTS idx_strata_point ON strata(point_id);
    CREATE INDEX IF NOT EXISTS idx_strata_unit ON strata(geology_unit);

    CREATE TABLE IF NOT EXISTS soil_descriptions (
        row_index INTEGER PRIMARY KEY,
        point_id TEXT NOT NULL,
        depth REAL NOT NULL,
        bottom REAL NOT NULL,
        description TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_soil_desc_point ON soil_descriptions(point_id);

    CREATE TABLE IF NOT EXISTS moisture (
        row_index INTEGER PRIMARY KEY,
        id TEXT NOT NULL,
        origin TEXT NOT NULL,
        depth_from REAL NOT NULL,
        depth_to REAL NOT NULL,
        elevation REAL NOT NULL,
        moisture_content REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_moisture_id ON moisture(id);

    CREATE TABLE IF NOT EXISTS psd_samples (
        row_index INTEGER PRIMARY KEY,
        id TEXT NOT NULL,
        depth_from REAL NOT NULL,
        depth_to REAL NOT NULL,
        geology_unit TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_psd_unit ON psd_samples(geology_unit);

    CREATE TABLE IF NOT EXISTS psd_passing (
        sample_row INTEGER NOT NULL REFERENCES psd_samples(row_index),
        size_mm REAL NOT NULL,
        passing REAL NOT NULL,
        PRIMARY KEY (sample_row, size_mm)
    );

    CREATE TABLE IF NOT EXISTS atterberg (
        row_index INTEGER PRIMARY KEY,
        id TEXT NOT NULL,
        depth_from REAL NOT NULL,
        liquid_limit REAL NOT NULL,
        plasticity_index REAL NOT NULL,
        geology_unit TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_atterberg_unit ON atterberg(geology_unit);

    CREATE TABLE IF NOT EXISTS rock (
        row_index INTEGER PRIMARY KEY,
        id TEXT NOT NULL,
        depth_from REAL NOT NULL,
        depth_to REAL NOT NULL,
        elevation REAL NOT NULL,
        is50 REAL,
        ucs REAL,
        geology_unit TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_rock_unit ON rock(geology_unit);
    "#
}
