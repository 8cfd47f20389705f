//! Moisture content against elevation, one series per borehole.

use crate::figure::{Axis, Figure, Trace};
use gi_model::{format_value, MoistureSample};

pub fn moisture_figure(unit: &str, samples: &[&MoistureSample]) -> Figure {
    let mut fig = Figure::new(
        format!("Elevation vs Moisture Content – {}", unit),
        Axis::linear("Moisture Content (%)")
            .with_range(0.0, 100.0)
            .with_dtick(10.0),
        Axis::linear("Elevation (m)"),
    );

    // Boreholes in the order they first appear in the sheet.
    let mut ids: Vec<&str> = Vec::new();
    for s in samples {
        if !ids.contains(&s.id.as_str()) {
            ids.push(&s.id);
        }
    }
    for id in ids {
        let rows: Vec<&&MoistureSample> = samples.iter().filter(|s| s.id == id).collect();
        let mut trace = Trace::markers(
            id,
            rows.iter().map(|s| s.moisture_content).collect(),
            rows.iter().map(|s| s.elevation).collect(),
        );
        trace.marker_size = 6;
        trace.opacity = 0.8;
        trace.hover_text = rows
            .iter()
            .map(|s| {
                format!(
                    "{} ({} - {}m)<br>{}%",
                    s.id,
                    format_value(s.from),
                    format_value(s.to),
                    format_value(s.moisture_content)
                )
            })
            .collect();
        fig.traces.push(trace);
    }
    fig
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, elevation: f64, mc: f64) -> MoistureSample {
        MoistureSample {
            id: id.to_string(),
            origin: "Alluvium".to_string(),
            from: 1.5,
            to: 1.95,
            elevation,
            moisture_content: mc,
        }
    }

    #[test]
    fn one_series_per_borehole_in_sheet_order() {
        let a = sample("BH02", 47.0, 18.0);
        let b = sample("BH01", 50.6, 21.5);
        let c = sample("BH02", 45.0, 24.0);
        let fig = moisture_figure("Alluvium", &[&a, &b, &c]);

        assert_eq!(fig.title, "Elevation vs Moisture Content – Alluvium");
        let names: Vec<&str> = fig.traces.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["BH02", "BH01"]);
        assert_eq!(fig.traces[0].x, vec![18.0, 24.0]);
        assert_eq!(fig.traces[0].y, vec![47.0, 45.0]);
        assert_eq!(fig.traces[1].hover_text[0], "BH01 (1.5 - 1.95m)<br>21.5%");
    }
}
