use std::io::{self, Write};

use periodic_table::codegen::{Artifact, ArtifactCheck, ArtifactStatus};
use periodic_table::units::{EnergyUnit, LengthUnit};
use periodic_table::{BondData, ChemicalElement};

use crate::util::text::{fit, format_optional};

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_element(element: &ChemicalElement<'_>) {
    let props = element.properties();

    let rows = vec![
        ("Name", element.name().unwrap_or("-").to_string()),
        (
            "Atomic Number",
            props
                .atomic_number()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Mass (amu)", format_optional(element.mass(), 4)),
        ("Radius (pm)", format_optional(element.atomic_radius(), 1)),
        (
            "Radius (bohr)",
            format_optional(element.atomic_radius_in(LengthUnit::Bohr), 5),
        ),
        ("vdW Radius (pm)", format_optional(element.van_der_waals_radius(), 1)),
        ("Covalent (pm)", format_optional(props.covalent_radius_pm(), 1)),
        ("Pauling χ", format_optional(props.pauling_negativity(), 2)),
        ("1st IP (eV)", format_optional(element.ionization_potential(), 4)),
        (
            "1st IP (kJ/mol)",
            format_optional(element.ionization_potential_in(EnergyUnit::KjPerMol), 1),
        ),
        ("Color", element.color().to_string()),
    ];

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let title = format!("{} · {}", element.symbol(), element.name().unwrap_or("?"));
    print_kv_table(&mut out, &title, ("Property", "Value"), &rows);
}

pub fn print_bonds(first: &str, second: &str, bonds: &BondData<'_>) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let title = format!("{first}-{second} Bonds");

    match bonds {
        BondData::Measured(records) => {
            let order_w = 5usize;
            let energy_w = 14usize;
            let sep_overhead = 9;
            let length_w = SAFE_TABLE_WIDTH.saturating_sub(order_w + energy_w + sep_overhead);

            let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, fit(&title, SAFE_TABLE_WIDTH - 6));
            let _ = writeln!(
                out,
                "{}┌{o}┬{e}┬{l}┐",
                INDENT,
                o = "─".repeat(order_w + 2),
                e = "─".repeat(energy_w + 2),
                l = "─".repeat(length_w + 2)
            );
            let _ = writeln!(
                out,
                "{}│ {:<order_w$} │ {:>energy_w$} │ {:>length_w$} │",
                INDENT, "Order", "Energy", "Length"
            );
            let _ = writeln!(
                out,
                "{}├{o}┼{e}┼{l}┤",
                INDENT,
                o = "─".repeat(order_w + 2),
                e = "─".repeat(energy_w + 2),
                l = "─".repeat(length_w + 2)
            );
            for record in records {
                let energy = format!("{:.4} {}", record.energy.value, record.energy.units);
                let length = format!("{:.3} {}", record.length.value, record.length.units);
                let _ = writeln!(
                    out,
                    "{}│ {:<order_w$} │ {:>energy_w$} │ {:>length_w$} │",
                    INDENT,
                    record.order,
                    fit(&energy, energy_w),
                    fit(&length, length_w)
                );
            }
            let _ = writeln!(
                out,
                "{}└{o}┴{e}┴{l}┘",
                INDENT,
                o = "─".repeat(order_w + 2),
                e = "─".repeat(energy_w + 2),
                l = "─".repeat(length_w + 2)
            );
        }

        BondData::Estimated(estimate) => {
            let rows = vec![
                ("Source", "covalent radii estimate".to_string()),
                (
                    "Order",
                    estimate
                        .order
                        .map(|o| o.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
                ("Length (Å)", format_optional(estimate.length_angstrom, 3)),
            ];
            print_kv_table(&mut out, &title, ("Field", "Value"), &rows);
        }
    }
}

pub fn print_artifacts(artifacts: &[Artifact]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows: Vec<(&str, String)> = artifacts
        .iter()
        .map(|a| (a.dataset.binding(), format!("{} bytes", a.bytes)))
        .collect();

    print_kv_table(&mut out, "Generated Modules", ("Binding", "Size"), &rows);
}

pub fn print_checks(checks: &[ArtifactCheck]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows: Vec<(&str, String)> = checks
        .iter()
        .map(|c| {
            let status = match c.status {
                ArtifactStatus::UpToDate => "up to date",
                ArtifactStatus::Stale => "stale",
                ArtifactStatus::Missing => "missing",
            };
            (c.dataset.module_file_name(), status.to_string())
        })
        .collect();

    print_kv_table(&mut out, "Module Status", ("Module", "Status"), &rows);
}

fn print_kv_table(
    out: &mut impl Write,
    title: &str,
    headers: (&str, &str),
    rows: &[(&str, String)],
) {
    let key_w = 18usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, fit(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT, headers.0, headers.1
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            fit(key, key_w),
            fit(val, val_w)
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
