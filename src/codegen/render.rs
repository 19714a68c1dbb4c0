//! Rendering of generated dataset modules.
//!
//! This file is shared verbatim with `build.rs`, so it may only depend on
//! `std`, `serde_json` and [`crate::dataset`].

use crate::dataset::Dataset;
use serde_json::Value;
use std::fmt::Write;

/// Serializes `value` into the canonical JSON text embedded in generated modules.
///
/// Object keys keep their source order and numbers are written with the
/// shortest representation that parses back to the same value.
pub fn canonical_json(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Renders the generated module for `dataset` from an already parsed value.
///
/// The module holds the canonical JSON text as a raw string constant and
/// binds the dataset name to a lazily parsed `periodic_table` value.
pub fn render(dataset: Dataset, value: &Value) -> serde_json::Result<String> {
    let text = canonical_json(value)?;
    let hashes = "#".repeat(raw_hash_count(&text));
    let file = dataset.file_name();
    let json_const = dataset.const_name();
    let binding = dataset.binding();
    let ty = dataset.type_name();

    let mut out = String::with_capacity(text.len() + 512);
    let _ = writeln!(out, "// @generated from `{file}`. Do not edit by hand.");
    let _ = writeln!(out);
    let _ = writeln!(out, "/// Canonical JSON text of `{file}`.");
    let _ = writeln!(
        out,
        "pub const {json_const}: &str = r{hashes}\"{text}\"{hashes};"
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "/// `{file}` parsed on first access.");
    let _ = writeln!(
        out,
        "pub static {binding}: ::std::sync::LazyLock<periodic_table::{ty}> ="
    );
    let _ = writeln!(out, "    ::std::sync::LazyLock::new(|| {{");
    let _ = writeln!(out, "        serde_json::from_str({json_const})");
    let _ = writeln!(
        out,
        "            .expect(\"Failed to parse embedded {file}. This is a library bug.\")"
    );
    let _ = writeln!(out, "    }});");
    Ok(out)
}

/// Number of `#` needed so that `text` cannot terminate a raw string literal.
pub fn raw_hash_count(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut longest = 0;
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'"' {
            let run = bytes[i + 1..].iter().take_while(|c| **c == b'#').count();
            longest = longest.max(run);
        }
    }
    longest + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn embedded_text(rendered: &str) -> &str {
        let start = rendered.find("r#").expect("raw literal start");
        let hashes = rendered[start + 1..]
            .chars()
            .take_while(|c| *c == '#')
            .count();
        let open = start + 1 + hashes + 1;
        let close = rendered[open..]
            .find(&format!("\"{};", "#".repeat(hashes)))
            .unwrap();
        &rendered[open..open + close]
    }

    #[test]
    fn hash_count_accounts_for_quote_hash_pairs() {
        assert_eq!(raw_hash_count(r##"{"H":"#FFFFFF"}"##), 2);
        assert_eq!(raw_hash_count(r#"{"a":1}"#), 1);
    }

    #[test]
    fn hash_count_grows_with_embedded_terminators() {
        assert_eq!(raw_hash_count(r####"{"a":"x"##"}"####), 3);
    }

    #[test]
    fn render_declares_const_for_dataset() {
        let rendered = render(Dataset::ElementColors, &json!({"H": "#FFFFFF"})).unwrap();
        assert!(rendered.starts_with("// @generated from `element-colors.json`"));
        assert!(rendered.contains("pub const ELEMENT_COLORS_JSON: &str = r##\""));
        assert!(rendered.contains("\"##;\n"));
    }

    #[test]
    fn render_binds_dataset_name_to_typed_value() {
        let rendered = render(Dataset::ElementBonds, &json!([])).unwrap();
        let declaration = rendered
            .lines()
            .find(|line| !line.trim_start().starts_with("//") && line.contains("static "))
            .expect("binding declaration");
        assert_eq!(
            declaration,
            "pub static ELEMENT_BONDS: ::std::sync::LazyLock<periodic_table::ElementBonds> ="
        );
        assert!(rendered.contains("serde_json::from_str(ELEMENT_BONDS_JSON)"));
        assert!(rendered.ends_with("});\n"));
    }

    #[test]
    fn embedded_text_parses_back_to_same_value() {
        let value = json!({
            "elements": ["H", "O"],
            "energy": {"value": 4.75721615, "units": "eV"},
            "length": {"value": 0.96, "units": "angstrom"},
            "order": 1,
            "note": "quote \" and hash #",
            "missing": null
        });
        let rendered = render(Dataset::ElementBonds, &value).unwrap();
        let parsed: Value = serde_json::from_str(embedded_text(&rendered)).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn canonical_json_keeps_key_order() {
        let value: Value = serde_json::from_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        assert_eq!(canonical_json(&value).unwrap(), r#"{"z":1,"a":2,"m":3}"#);
    }
}
