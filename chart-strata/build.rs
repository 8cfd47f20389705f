//! Build script for chart-strata.
//!
//! Copies the workbook sheets this app draws from `../fixtures` to OUT_DIR
//! so they can be embedded via `include_str!` at compile time. Missing
//! sheets fall back to a one-borehole sample so the app always has
//! something to show.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let files = [
        (
            "../fixtures/POINT.csv",
            "POINT.csv",
            "PointID,East,North,Elevation\nBH01,0,0,100\n",
        ),
        (
            "../fixtures/STRATA_MAIN.csv",
            "STRATA_MAIN.csv",
            "PointID,Depth,Bottom,Geology_Unit_1\nBH01,0,2,Sand\nBH01,2,5,Clay\n",
        ),
        (
            "../fixtures/SOIL_DESCRIPTION.csv",
            "SOIL_DESCRIPTION.csv",
            "PointID,Depth,Bottom,Compiled_Description\n",
        ),
    ];

    for (src_path, dest_name, sample) in &files {
        let src = Path::new(src_path);
        let dest = Path::new(&out_dir).join(dest_name);
        if src.exists() {
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
            });
        } else {
            fs::write(&dest, sample).unwrap();
            println!(
                "cargo:warning=Fixture file {} not found, using sample sheet",
                src_path
            );
        }
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
