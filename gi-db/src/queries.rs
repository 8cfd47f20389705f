//! Typed query methods for reading a loaded workbook back out.
//!
//! Row queries return [`gi_model`] structs in sheet order (`row_index`), which
//! the resolver depends on for its first-wins rules and legend order.

use crate::models::{BoreholeInfo, SheetCounts};
use crate::Workbook;
use gi_model::{
    AtterbergResult, MoisturePoint, MoistureSample, Point, PsdSample, RockResult, SievePassing,
    SoilDescriptor, StrataInterval,
};

impl Workbook {
    /// All `POINT` rows, duplicates included, in sheet order.
    pub fn query_points(&self) -> anyhow::Result<Vec<Point>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT point_id, east, north, elevation FROM points ORDER BY row_index",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Point {
                    point_id: row.get(0)?,
                    east: row.get(1)?,
                    north: row.get(2)?,
                    elevation: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[GI] query: query_points returned {} records", rows.len());
        Ok(rows)
    }

    /// All `STRATA_MAIN` rows, main and sub-layer, in sheet order.
    pub fn query_strata(&self) -> anyhow::Result<Vec<StrataInterval>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT point_id, depth, bottom, geology_unit, sub_layer
             FROM strata ORDER BY row_index",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StrataInterval {
                    point_id: row.get(0)?,
                    depth: row.get(1)?,
                    bottom: row.get(2)?,
                    geology_unit: row.get(3)?,
                    sub_layer: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[GI] query: query_strata returned {} records", rows.len());
        Ok(rows)
    }

    pub fn query_soil_descriptions(&self) -> anyhow::Result<Vec<SoilDescriptor>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT point_id, depth, bottom, description
             FROM soil_descriptions ORDER BY row_index",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SoilDescriptor {
                    point_id: row.get(0)?,
                    depth: row.get(1)?,
                    bottom: row.get(2)?,
                    description: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GI] query: query_soil_descriptions returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    pub fn query_moisture_samples(&self) -> anyhow::Result<Vec<MoistureSample>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, origin, depth_from, depth_to, elevation, moisture_content
             FROM moisture ORDER BY row_index",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(MoistureSample {
                    id: row.get(0)?,
                    origin: row.get(1)?,
                    from: row.get(2)?,
                    to: row.get(3)?,
                    elevation: row.get(4)?,
                    moisture_content: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GI] query: query_moisture_samples returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Moisture samples inner-joined to their borehole location.
    ///
    /// Samples whose `ID` has no `POINT` row are dropped. When a PointID is
    /// duplicated, the first `POINT` row is used, matching the strata join.
    pub fn query_moisture_points(&self) -> anyhow::Result<Vec<MoisturePoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT m.id, p.east, p.north, m.elevation, m.depth_from, m.depth_to,
                    m.moisture_content, m.origin
             FROM moisture m
             INNER JOIN points p
                ON p.row_index = (SELECT MIN(row_index) FROM points WHERE point_id = m.id)
             ORDER BY m.row_index",
        )?;
        let rows = stmt
            .query_map([], |row| {
                let point_id: String = row.get(0)?;
                let from: f64 = row.get(4)?;
                let to: f64 = row.get(5)?;
                let moisture_content: f64 = row.get(6)?;
                let geology_unit: String = row.get(7)?;
                let hover_text = MoisturePoint::hover_text_for(
                    &point_id,
                    from,
                    to,
                    moisture_content,
                    &geology_unit,
                );
                Ok(MoisturePoint {
                    point_id,
                    east: row.get(1)?,
                    north: row.get(2)?,
                    sample_elevation: row.get(3)?,
                    from,
                    to,
                    moisture_content,
                    geology_unit,
                    hover_text,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GI] query: query_moisture_points returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// `PSD` samples in sheet order, each with its sieves largest first.
    pub fn query_psd_samples(&self) -> anyhow::Result<Vec<PsdSample>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT row_index, id, depth_from, depth_to, geology_unit
             FROM psd_samples ORDER BY row_index",
        )?;
        let heads = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    PsdSample {
                        id: row.get(1)?,
                        from: row.get(2)?,
                        to: row.get(3)?,
                        geology_unit: row.get(4)?,
                        passing: Vec::new(),
                    },
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut sieve_stmt = conn.prepare(
            "SELECT size_mm, passing FROM psd_passing
             WHERE sample_row = ?1 ORDER BY size_mm DESC",
        )?;
        let mut rows = Vec::with_capacity(heads.len());
        for (sample_row, mut sample) in heads {
            sample.passing = sieve_stmt
                .query_map([sample_row], |row| {
                    Ok(SievePassing {
                        size_mm: row.get(0)?,
                        percent: row.get(1)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(sample);
        }
        log::info!("[GI] query: query_psd_samples returned {} records", rows.len());
        Ok(rows)
    }

    pub fn query_atterberg(&self) -> anyhow::Result<Vec<AtterbergResult>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, depth_from, liquid_limit, plasticity_index, geology_unit
             FROM atterberg ORDER BY row_index",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(AtterbergResult {
                    id: row.get(0)?,
                    from: row.get(1)?,
                    liquid_limit: row.get(2)?,
                    plasticity_index: row.get(3)?,
                    geology_unit: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[GI] query: query_atterberg returned {} records", rows.len());
        Ok(rows)
    }

    pub fn query_rock(&self) -> anyhow::Result<Vec<RockResult>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, depth_from, depth_to, elevation, is50, ucs, geology_unit
             FROM rock ORDER BY row_index",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RockResult {
                    id: row.get(0)?,
                    from: row.get(1)?,
                    to: row.get(2)?,
                    elevation: row.get(3)?,
                    is50: row.get(4)?,
                    ucs: row.get(5)?,
                    geology_unit: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[GI] query: query_rock returned {} records", rows.len());
        Ok(rows)
    }

    /// Distinct PointIDs from `POINT`, sorted.
    pub fn query_point_ids(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT DISTINCT point_id FROM points ORDER BY point_id")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Distinct geology units logged in `STRATA_MAIN`, sorted.
    pub fn query_geology_units(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt =
            conn.prepare("SELECT DISTINCT geology_unit FROM strata ORDER BY geology_unit")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// One row per distinct PointID (first `POINT` row) with its interval count.
    pub fn query_boreholes(&self) -> anyhow::Result<Vec<BoreholeInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT p.point_id, p.east, p.north, p.elevation,
                    (SELECT COUNT(*) FROM strata s WHERE s.point_id = p.point_id)
             FROM points p
             WHERE p.row_index = (SELECT MIN(row_index) FROM points q WHERE q.point_id = p.point_id)
             ORDER BY p.point_id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(BoreholeInfo {
                    point_id: row.get(0)?,
                    east: row.get(1)?,
                    north: row.get(2)?,
                    elevation: row.get(3)?,
                    interval_count: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[GI] query: query_boreholes returned {} records", rows.len());
        Ok(rows)
    }

    pub fn query_sheet_counts(&self) -> anyhow::Result<SheetCounts> {
        let conn = self.conn.borrow();
        let counts = conn.query_row(
            "SELECT
                (SELECT COUNT(*) FROM points),
                (SELECT COUNT(*) FROM strata),
                (SELECT COUNT(*) FROM strata WHERE sub_layer = 1),
                (SELECT COUNT(*) FROM soil_descriptions),
                (SELECT COUNT(*) FROM moisture),
                (SELECT COUNT(*) FROM psd_samples),
                (SELECT COUNT(*) FROM atterberg),
                (SELECT COUNT(*) FROM rock)",
            [],
            |row| {
                Ok(SheetCounts {
                    points: row.get(0)?,
                    strata: row.get(1)?,
                    sub_layers: row.get(2)?,
                    soil_descriptions: row.get(3)?,
                    moisture: row.get(4)?,
                    psd: row.get(5)?,
                    atterberg: row.get(6)?,
                    rock: row.get(7)?,
                })
            },
        )?;
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::SheetCounts;
    use crate::Workbook;

    const POINTS: &str = "\
PointID,East,North,Elevation
BH02,110,205,48
BH01,100,200,50
BH01,999,999,1
";

    const STRATA: &str = "\
PointID,Depth,Bottom,Geology_Unit_1,Sub_Layer
BH02,0,2,Fill,FALSE
BH01,0,1,Fill,FALSE
BH01,1,4,Clay,FALSE
BH01,1.5,2,Peat,TRUE
BH09,0,1,Fill,FALSE
";

    const MOISTURE: &str = "\
ID,Origin,From (m),To (m),Elevation (m),Moisture Content (%)
BH01,Clay,1.5,1.95,48.3,21.5
BH09,Fill,0.5,0.95,60.0,12.0
BH02,Fill,0.5,0.95,47.3,9.8
";

    fn workbook() -> Workbook {
        let wb = Workbook::new().unwrap();
        wb.load_points(POINTS).unwrap();
        wb.load_strata(STRATA).unwrap();
        wb.load_moisture(MOISTURE).unwrap();
        wb
    }

    #[test]
    fn rows_come_back_in_sheet_order() {
        let wb = workbook();
        let ids: Vec<String> = wb
            .query_points()
            .unwrap()
            .into_iter()
            .map(|p| p.point_id)
            .collect();
        assert_eq!(ids, vec!["BH02", "BH01", "BH01"]);

        let units: Vec<String> = wb
            .query_strata()
            .unwrap()
            .into_iter()
            .map(|s| s.geology_unit)
            .collect();
        assert_eq!(units, vec!["Fill", "Fill", "Clay", "Peat", "Fill"]);
    }

    #[test]
    fn moisture_join_drops_unknown_ids_and_uses_first_point() {
        let wb = workbook();
        let points = wb.query_moisture_points().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].point_id, "BH01");
        assert_eq!((points[0].east, points[0].north), (100.0, 200.0));
        assert_eq!(points[0].sample_elevation, 48.3);
        assert_eq!(
            points[0].hover_text,
            "ID: BH01 (1.5 - 1.95m)<br>Moisture Content: 21.5%<br>Geology Unit: Clay"
        );
        assert_eq!(points[1].point_id, "BH02");
    }

    #[test]
    fn moisture_samples_keep_unjoined_rows() {
        let wb = workbook();
        assert_eq!(wb.query_moisture_samples().unwrap().len(), 3);
    }

    #[test]
    fn distinct_ids_and_units_are_sorted() {
        let wb = workbook();
        assert_eq!(wb.query_point_ids().unwrap(), vec!["BH01", "BH02"]);
        assert_eq!(
            wb.query_geology_units().unwrap(),
            vec!["Clay", "Fill", "Peat"]
        );
    }

    #[test]
    fn boreholes_use_first_point_row() {
        let wb = workbook();
        let boreholes = wb.query_boreholes().unwrap();
        assert_eq!(boreholes.len(), 2);
        assert_eq!(boreholes[0].point_id, "BH01");
        assert_eq!(boreholes[0].elevation, 50.0);
        assert_eq!(boreholes[0].interval_count, 3);
        assert_eq!(boreholes[1].interval_count, 1);
    }

    #[test]
    fn sheet_counts() {
        let wb = workbook();
        assert_eq!(
            wb.query_sheet_counts().unwrap(),
            SheetCounts {
                points: 3,
                strata: 5,
                sub_layers: 1,
                soil_descriptions: 0,
                moisture: 3,
                psd: 0,
                atterberg: 0,
                rock: 0,
            }
        );
    }
}
