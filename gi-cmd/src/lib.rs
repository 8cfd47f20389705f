//! Command implementations for the GI workbook CLI.
//!
//! Every command reads a workbook, either an Excel file or a directory
//! holding one CSV file per sheet, and writes JSON (default) or CSV to
//! stdout or `--output`.

use clap::Subcommand;
use gi_model::Color;
use std::path::PathBuf;

pub mod lab;
pub mod listing;
pub mod output;
pub mod strata;
pub mod workbook;

use gi_lab::strength::UnitFactors;
use lab::{parse_unit_factor, ChartKind};
use output::OutputFormat;
use strata::{parse_color_override, StrataOptions};

#[derive(Subcommand)]
pub enum Command {
    /// Resolve strata into coloured 3D segments
    Strata {
        /// Excel file or directory of <sheet>.csv files
        #[arg(short = 'w', long)]
        workbook: PathBuf,

        /// Treat every STRATA_MAIN row as a main interval
        #[arg(long)]
        no_sub_layers: bool,

        /// Only draw these boreholes (repeatable)
        #[arg(short = 'b', long = "borehole")]
        boreholes: Vec<String>,

        /// Only draw these geology units (repeatable)
        #[arg(short = 'u', long = "unit")]
        units: Vec<String>,

        /// Colour override as UNIT=#rrggbb (repeatable)
        #[arg(short = 'c', long = "color", value_parser = parse_color_override)]
        colors: Vec<(String, Color)>,

        /// JSON render configuration
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// List resolved geology units and their colours
    Units {
        #[arg(short = 'w', long)]
        workbook: PathBuf,

        /// Colour override as UNIT=#rrggbb (repeatable)
        #[arg(short = 'c', long = "color", value_parser = parse_color_override)]
        colors: Vec<(String, Color)>,

        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// List boreholes from the POINT sheet
    Boreholes {
        #[arg(short = 'w', long)]
        workbook: PathBuf,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Moisture content samples positioned at their boreholes
    Moisture {
        #[arg(short = 'w', long)]
        workbook: PathBuf,

        /// Only include samples from these geology units (repeatable)
        #[arg(short = 'u', long = "unit")]
        units: Vec<String>,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Gravel, sand and fines content of each PSD sample
    Psd {
        #[arg(short = 'w', long)]
        workbook: PathBuf,

        #[arg(short = 'u', long = "unit")]
        units: Vec<String>,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Atterberg limits with their plasticity chart zone
    Plasticity {
        #[arg(short = 'w', long)]
        workbook: PathBuf,

        #[arg(short = 'u', long = "unit")]
        units: Vec<String>,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Rock strength results with their strength classes
    Rock {
        #[arg(short = 'w', long)]
        workbook: PathBuf,

        #[arg(short = 'u', long = "unit")]
        units: Vec<String>,

        /// PLI-to-UCS factor as UNIT=FACTOR (repeatable, default 1)
        #[arg(long = "factor", value_parser = parse_unit_factor)]
        factors: Vec<(String, f64)>,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Lab chart figures as JSON
    Figure {
        #[arg(short = 'w', long)]
        workbook: PathBuf,

        #[arg(long, value_enum)]
        chart: ChartKind,

        /// Only chart these geology units (repeatable, default all)
        #[arg(short = 'u', long = "unit")]
        units: Vec<String>,

        /// PLI-to-UCS factor as UNIT=FACTOR (repeatable, default 1)
        #[arg(long = "factor", value_parser = parse_unit_factor)]
        factors: Vec<(String, f64)>,

        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Strata {
            workbook,
            no_sub_layers,
            boreholes,
            units,
            colors,
            config,
            format,
            output,
        } => {
            let options = StrataOptions {
                config,
                no_sub_layers,
                boreholes,
                units,
                colors,
            };
            strata::run_strata(&workbook, &options, format, output.as_deref())
        }
        Command::Units {
            workbook,
            colors,
            config,
            format,
            output,
        } => {
            let options = StrataOptions {
                config,
                colors,
                ..StrataOptions::default()
            };
            strata::run_units(&workbook, &options, format, output.as_deref())
        }
        Command::Boreholes {
            workbook,
            format,
            output,
        } => listing::run_boreholes(&workbook, format, output.as_deref()),
        Command::Moisture {
            workbook,
            units,
            format,
            output,
        } => listing::run_moisture(&workbook, &units, format, output.as_deref()),
        Command::Psd {
            workbook,
            units,
            format,
            output,
        } => lab::run_psd(&workbook, &units, format, output.as_deref()),
        Command::Plasticity {
            workbook,
            units,
            format,
            output,
        } => lab::run_plasticity(&workbook, &units, format, output.as_deref()),
        Command::Rock {
            workbook,
            units,
            factors,
            format,
            output,
        } => {
            let factors: UnitFactors = factors.into_iter().collect();
            lab::run_rock(&workbook, &units, &factors, format, output.as_deref())
        }
        Command::Figure {
            workbook,
            chart,
            units,
            factors,
            output,
        } => {
            let factors: UnitFactors = factors.into_iter().collect();
            lab::run_figure(&workbook, chart.into(), &units, &factors, output.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn parses_strata_flags() {
        let cli = TestCli::try_parse_from([
            "gi-cli",
            "strata",
            "--workbook",
            "site",
            "--no-sub-layers",
            "-b",
            "BH01",
            "--borehole",
            "BH02",
            "--color",
            "Fill=#123456",
            "--format",
            "csv",
        ])
        .unwrap();
        match cli.command {
            Command::Strata {
                workbook,
                no_sub_layers,
                boreholes,
                colors,
                format,
                output,
                ..
            } => {
                assert_eq!(workbook, PathBuf::from("site"));
                assert!(no_sub_layers);
                assert_eq!(boreholes, vec!["BH01", "BH02"]);
                assert_eq!(colors, vec![("Fill".to_string(), Color::rgb(0x12, 0x34, 0x56))]);
                assert_eq!(format, OutputFormat::Csv);
                assert!(output.is_none());
            }
            _ => panic!("expected strata command"),
        }
    }

    #[test]
    fn bad_color_flag_is_a_usage_error() {
        let result = TestCli::try_parse_from([
            "gi-cli", "units", "-w", "site", "--color", "Fill=blue",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_figure_flags() {
        let cli = TestCli::try_parse_from([
            "gi-cli",
            "figure",
            "-w",
            "site.xlsx",
            "--chart",
            "factored",
            "--factor",
            "Sandstone=20",
            "-u",
            "Sandstone",
        ])
        .unwrap();
        match cli.command {
            Command::Figure {
                workbook,
                chart,
                units,
                factors,
                ..
            } => {
                assert_eq!(workbook, PathBuf::from("site.xlsx"));
                assert_eq!(chart, ChartKind::Factored);
                assert_eq!(units, vec!["Sandstone"]);
                assert_eq!(factors, vec![("Sandstone".to_string(), 20.0)]);
            }
            _ => panic!("expected figure command"),
        }
    }

    #[test]
    fn figure_needs_a_known_chart() {
        assert!(TestCli::try_parse_from(["gi-cli", "figure", "-w", "site"]).is_err());
        assert!(
            TestCli::try_parse_from(["gi-cli", "figure", "-w", "site", "--chart", "xrd"]).is_err()
        );
        assert!(TestCli::try_parse_from([
            "gi-cli", "rock", "-w", "site", "--factor", "Sandstone=-2",
        ])
        .is_err());
    }

    #[test]
    fn workbook_is_required() {
        assert!(TestCli::try_parse_from(["gi-cli", "boreholes"]).is_err());
    }
}
