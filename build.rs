//! Build script for periodic-table
//!
//! Renders the three canonical JSON files at the crate root into Rust modules
//! under `OUT_DIR`, which `src/embedded.rs` includes.

use std::env;
use std::fs;
use std::path::PathBuf;

#[allow(dead_code)]
#[path = "src/dataset.rs"]
mod dataset;

#[allow(dead_code)]
#[path = "src/codegen/render.rs"]
mod render;

use dataset::Dataset;

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/dataset.rs");
    println!("cargo:rerun-if-changed=src/codegen/render.rs");

    for dataset in Dataset::ALL {
        let source = manifest_dir.join(dataset.file_name());
        println!("cargo:rerun-if-changed={}", source.display());

        let text = fs::read_to_string(&source)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", source.display()));
        let value: serde_json::Value = serde_json::from_str(&text)
            .unwrap_or_else(|e| panic!("invalid JSON in {}: {e}", source.display()));
        let module = render::render(dataset, &value)
            .unwrap_or_else(|e| panic!("failed to render {}: {e}", source.display()));

        let dest = out_dir.join(dataset.module_file_name());
        fs::write(&dest, module)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", dest.display()));
    }
}
