//! Build script for chart-moisture.
//!
//! Copies the `POINT` and `Moisture Content` sheets to OUT_DIR for
//! `include_str!`, falling back to a one-sample workbook.

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
            "../fixtures/Moisture Content.csv",
            "moisture_content.csv",
            "ID,Origin,From (m),To (m),Elevation (m),Moisture Content (%)\nBH01,Clay,2.0,2.45,98.0,21.0\n",
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
