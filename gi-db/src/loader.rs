//! CSV loading functions for populating the workbook database.
//!
//! Every sheet has a header row. Columns are located by name, so their order
//! in the file does not matter and extra columns are ignored. A missing
//! required column is a [`ReaderError::MissingColumn`]; rows whose numeric
//! cells do not parse are skipped and counted in the log.
//!
//! # CSV Formats
//!
//! - **POINT**: `PointID,East,North,Elevation`
//! - **STRATA_MAIN**: `PointID,Depth,Bottom,Geology_Unit_1[,Sub_Layer]`
//! - **SOIL_DESCRIPTION**: `PointID,Depth,Bottom,Compiled_Description`
//! - **Moisture Content**: `ID,Origin,From (m),To (m),Elevation (m),Moisture Content (%)`
//! - **PSD**: `ID,From (m),To (m),Geology Unit,<sieve mm>...`
//! - **Atterberg Limits**: `ID,From (m),LL,PI,Geology Unit`
//! - **Rock Results**: `ID,From (m),To (m),Elevation (m),Is(50) corrected (MPa),UCS (MPa),Geology Unit`

use crate::Workbook;
use gi_model::sheet::{
    column_indices, optional_column_index, ATTERBERG_COLUMNS, ATTERBERG_SHEET, MOISTURE_COLUMNS,
    MOISTURE_SHEET, POINT_COLUMNS, POINT_SHEET, PSD_COLUMNS, PSD_SHEET, ROCK_COLUMNS, ROCK_SHEET,
    SOIL_DESCRIPTION_COLUMNS, SOIL_DESCRIPTION_SHEET, STRATA_COLUMNS, STRATA_SHEET,
    SUB_LAYER_COLUMN,
};
use rusqlite::params;

fn sheet_reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes())
}

fn text(record: &csv::StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

/// Parse a numeric cell. Blank, non-numeric and non-finite cells are `None`.
fn number(record: &csv::StringRecord, idx: usize) -> Option<f64> {
    text(record, idx)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Spreadsheet booleans arrive as `TRUE`/`FALSE`.
fn flag(record: &csv::StringRecord, idx: Option<usize>) -> bool {
    idx.is_some_and(|i| text(record, i).eq_ignore_ascii_case("TRUE"))
}

impl Workbook {
    /// Load borehole locations from the `POINT` sheet.
    ///
    /// # Example CSV
    /// ```text
    /// PointID,East,North,Elevation
    /// BH01,331200.5,6250100.0,52.3
    /// ```
    pub fn load_points(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = sheet_reader(csv_data);
        let headers = rdr.headers()?.clone();
        let cols = column_indices(POINT_SHEET, &headers, &POINT_COLUMNS)?;

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let point_id = text(&r, cols[0]);
            let (Some(east), Some(north), Some(elevation)) =
                (number(&r, cols[1]), number(&r, cols[2]), number(&r, cols[3]))
            else {
                skipped += 1;
                continue;
            };
            if point_id.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT INTO points (point_id, east, north, elevation)
                 VALUES (?1, ?2, ?3, ?4)",
                params![point_id, east, north, elevation],
            )?;
            count += 1;
        }
        log::info!(
            "[GI] loader: Loaded {} points, skipped {} non-numeric",
            count,
            skipped
        );
        Ok(())
    }

    /// Load logged intervals from the `STRATA_MAIN` sheet.
    ///
    /// `Sub_Layer` is optional; a row is a sub-layer when the cell reads
    /// `TRUE` (any case). Rows with no geology unit are skipped. Rows with
    /// `Depth >= Bottom` are kept here and counted by the resolver instead.
    ///
    /// # Example CSV
    /// ```text
    /// PointID,Depth,Bottom,Geology_Unit_1,Sub_Layer
    /// BH01,0,1.2,Fill,FALSE
    /// BH01,0.4,0.8,Clay Lens,TRUE
    /// ```
    pub fn load_strata(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = sheet_reader(csv_data);
        let headers = rdr.headers()?.clone();
        let cols = column_indices(STRATA_SHEET, &headers, &STRATA_COLUMNS)?;
        let sub_layer_col = optional_column_index(&headers, SUB_LAYER_COLUMN);

        let mut count = 0u32;
        let mut subs = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let point_id = text(&r, cols[0]);
            let geology_unit = text(&r, cols[3]);
            let (Some(depth), Some(bottom)) = (number(&r, cols[1]), number(&r, cols[2])) else {
                skipped += 1;
                continue;
            };
            if point_id.is_empty() || geology_unit.is_empty() {
                skipped += 1;
                continue;
            }
            let sub_layer = flag(&r, sub_layer_col);

            conn.execute(
                "INSERT INTO strata (point_id, depth, bottom, geology_unit, sub_layer)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![point_id, depth, bottom, geology_unit, sub_layer],
            )?;
            count += 1;
            if sub_layer {
                subs += 1;
            }
        }
        log::info!(
            "[GI] loader: Loaded {} strata rows ({} sub-layers), skipped {} incomplete",
            count,
            subs,
            skipped
        );
        Ok(())
    }

    /// Load compiled soil descriptions from the `SOIL_DESCRIPTION` sheet.
    ///
    /// # Example CSV
    /// ```text
    /// PointID,Depth,Bottom,Compiled_Description
    /// BH01,0,1.2,"FILL: gravelly sand, brown"
    /// ```
    pub fn load_soil_descriptions(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = sheet_reader(csv_data);
        let headers = rdr.headers()?.clone();
        let cols = column_indices(SOIL_DESCRIPTION_SHEET, &headers, &SOIL_DESCRIPTION_COLUMNS)?;

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let point_id = text(&r, cols[0]);
            let description = text(&r, cols[3]);
            let (Some(depth), Some(bottom)) = (number(&r, cols[1]), number(&r, cols[2])) else {
                skipped += 1;
                continue;
            };
            if point_id.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT INTO soil_descriptions (point_id, depth, bottom, description)
                 VALUES (?1, ?2, ?3, ?4)",
                params![point_id, depth, bottom, description],
            )?;
            count += 1;
        }
        log::info!(
            "[GI] loader: Loaded {} soil descriptions, skipped {} non-numeric",
            count,
            skipped
        );
        Ok(())
    }

    /// Load lab moisture results from the `Moisture Content` sheet.
    ///
    /// Untested samples (blank moisture content) are skipped.
    ///
    /// # Example CSV
    /// ```text
    /// ID,Origin,From (m),To (m),Elevation (m),Moisture Content (%)
    /// BH01,Alluvium,1.5,1.95,50.6,18.2
    /// ```
    pub fn load_moisture(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = sheet_reader(csv_data);
        let headers = rdr.headers()?.clone();
        let cols = column_indices(MOISTURE_SHEET, &headers, &MOISTURE_COLUMNS)?;

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let id = text(&r, cols[0]);
            let origin = text(&r, cols[1]);
            let (Some(from), Some(to), Some(elevation), Some(moisture_content)) = (
                number(&r, cols[2]),
                number(&r, cols[3]),
                number(&r, cols[4]),
                number(&r, cols[5]),
            ) else {
                skipped += 1;
                continue;
            };
            if id.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT INTO moisture (id, origin, depth_from, depth_to, elevation, moisture_content)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![id, origin, from, to, elevation, moisture_content],
            )?;
            count += 1;
        }
        log::info!(
            "[GI] loader: Loaded {} moisture samples, skipped {} non-numeric",
            count,
            skipped
        );
        Ok(())
    }

    /// Load gradings from the `PSD` sheet.
    ///
    /// Every column other than the four identifying ones whose header is a
    /// positive number is a sieve size in mm; other extra columns are ignored.
    /// Blank sieve cells are simply not stored. Rows without an ID, unit or
    /// any reported sieve are skipped.
    ///
    /// # Example CSV
    /// ```text
    /// ID,From (m),To (m),Geology Unit,19,2.36,0.425,0.075
    /// BH01,1.5,1.95,Alluvium,100,88,52,31
    /// ```
    pub fn load_psd(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = sheet_reader(csv_data);
        let headers = rdr.headers()?.clone();
        let cols = column_indices(PSD_SHEET, &headers, &PSD_COLUMNS)?;

        let mut sieves: Vec<(usize, f64)> = Vec::new();
        for (idx, header) in headers.iter().enumerate() {
            if cols.contains(&idx) {
                continue;
            }
            match header.trim().parse::<f64>() {
                Ok(size) if size.is_finite() && size > 0.0 => sieves.push((idx, size)),
                _ => log::warn!("[GI] loader: PSD column '{}' is not a sieve size, ignored", header),
            }
        }
        sieves.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let id = text(&r, cols[0]);
            let geology_unit = text(&r, cols[3]);
            let (Some(from), Some(to)) = (number(&r, cols[1]), number(&r, cols[2])) else {
                skipped += 1;
                continue;
            };
            let passing: Vec<(f64, f64)> = sieves
                .iter()
                .filter_map(|&(idx, size)| number(&r, idx).map(|p| (size, p)))
                .collect();
            if id.is_empty() || geology_unit.is_empty() || passing.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT INTO psd_samples (id, depth_from, depth_to, geology_unit)
                 VALUES (?1, ?2, ?3, ?4)",
                params![id, from, to, geology_unit],
            )?;
            let sample_row = conn.last_insert_rowid();
            for (size, percent) in passing {
                conn.execute(
                    "INSERT INTO psd_passing (sample_row, size_mm, passing) VALUES (?1, ?2, ?3)",
                    params![sample_row, size, percent],
                )?;
            }
            count += 1;
        }
        log::info!(
            "[GI] loader: Loaded {} PSD samples over {} sieves, skipped {} incomplete",
            count,
            sieves.len(),
            skipped
        );
        Ok(())
    }

    /// Load liquid limit and plasticity index from the `Atterberg Limits` sheet.
    ///
    /// # Example CSV
    /// ```text
    /// ID,From (m),LL,PI,Geology Unit
    /// BH01,1.5,42,21,Alluvium
    /// ```
    pub fn load_atterberg(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = sheet_reader(csv_data);
        let headers = rdr.headers()?.clone();
        let cols = column_indices(ATTERBERG_SHEET, &headers, &ATTERBERG_COLUMNS)?;

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let id = text(&r, cols[0]);
            let geology_unit = text(&r, cols[4]);
            let (Some(from), Some(ll), Some(pi)) = (
                number(&r, cols[1]),
                number(&r, cols[2]),
                number(&r, cols[3]),
            ) else {
                skipped += 1;
                continue;
            };
            if id.is_empty() || geology_unit.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT INTO atterberg (id, depth_from, liquid_limit, plasticity_index, geology_unit)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, from, ll, pi, geology_unit],
            )?;
            count += 1;
        }
        log::info!(
            "[GI] loader: Loaded {} Atterberg results, skipped {} incomplete",
            count,
            skipped
        );
        Ok(())
    }

    /// Load point load and UCS results from the `Rock Results` sheet.
    ///
    /// Either strength may be blank; rows reporting neither are skipped.
    ///
    /// # Example CSV
    /// ```text
    /// ID,From (m),To (m),Elevation (m),Is(50) corrected (MPa),UCS (MPa),Geology Unit
    /// BH02,6.2,6.4,41.8,1.35,,Sandstone
    /// ```
    pub fn load_rock(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = sheet_reader(csv_data);
        let headers = rdr.headers()?.clone();
        let cols = column_indices(ROCK_SHEET, &headers, &ROCK_COLUMNS)?;

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let id = text(&r, cols[0]);
            let geology_unit = text(&r, cols[6]);
            let (Some(from), Some(to), Some(elevation)) = (
                number(&r, cols[1]),
                number(&r, cols[2]),
                number(&r, cols[3]),
            ) else {
                skipped += 1;
                continue;
            };
            let is50 = number(&r, cols[4]);
            let ucs = number(&r, cols[5]);
            if id.is_empty() || geology_unit.is_empty() || (is50.is_none() && ucs.is_none()) {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT INTO rock (id, depth_from, depth_to, elevation, is50, ucs, geology_unit)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![id, from, to, elevation, is50, ucs, geology_unit],
            )?;
            count += 1;
        }
        log::info!(
            "[GI] loader: Loaded {} rock strength results, skipped {} incomplete",
            count,
            skipped
        );
        Ok(())
    }
}
