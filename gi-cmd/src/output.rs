//! Writing command results as JSON or CSV to stdout or a file.

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON document
    #[default]
    Json,
    /// One CSV row per record, with a header
    Csv,
}

/// Open `path` for writing, or stdout when no path is given.
pub fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(std::io::BufWriter::new(std::fs::File::create(p)?)),
        None => Box::new(std::io::stdout().lock()),
    })
}

/// Write `records` as CSV rows.
pub fn write_csv<T: Serialize>(out: impl Write, records: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(mut out: impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        unit: String,
        color: String,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                unit: "Fill".to_string(),
                color: "#2e91e5".to_string(),
            },
            Row {
                unit: "Clay, silty".to_string(),
                color: "#e15f99".to_string(),
            },
        ]
    }

    #[test]
    fn csv_has_header_and_quotes_commas() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &rows()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "unit,color\nFill,#2e91e5\n\"Clay, silty\",#e15f99\n"
        );
    }

    #[test]
    fn json_is_an_array() {
        let mut buf = Vec::new();
        write_json(&mut buf, &rows()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["unit"], "Clay, silty");
    }
}
