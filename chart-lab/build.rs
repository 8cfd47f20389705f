//! Build script for chart-lab.
//!
//! Copies the four lab sheets to OUT_DIR for `include_str!`. A missing sheet
//! is replaced by a header-only file, which loads no rows.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let files = [
        (
            "../fixtures/PSD.csv",
            "psd.csv",
            "ID,From (m),To (m),Geology Unit\n",
        ),
        (
            "../fixtures/Atterberg Limits.csv",
            "atterberg_limits.csv",
            "ID,From (m),LL,PI,Geology Unit\n",
        ),
        (
            "../fixtures/Moisture Content.csv",
            "moisture_content.csv",
            "ID,Origin,From (m),To (m),Elevation (m),Moisture Content (%)\n",
        ),
        (
            "../fixtures/Rock Results.csv",
            "rock_results.csv",
            "ID,From (m),To (m),Elevation (m),Is(50) corrected (MPa),UCS (MPa),Geology Unit\n",
        ),
    ];

    for (src_path, dest_name, header) in &files {
        let src = Path::new(src_path);
        let dest = Path::new(&out_dir).join(dest_name);
        if src.exists() {
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
            });
        } else {
            fs::write(&dest, header).unwrap();
            println!(
                "cargo:warning=Fixture file {} not found, using an empty sheet",
                src_path
            );
        }
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
