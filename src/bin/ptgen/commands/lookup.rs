use anyhow::{Result, anyhow, bail};

use periodic_table::{BondData, ChemicalElement};

use crate::cli::{BondArgs, ElementArgs};
use crate::config::resolve_lookup_data;
use crate::display::{print_bonds, print_element};

pub fn run_element(args: ElementArgs) -> Result<()> {
    let data = resolve_lookup_data(&args.data)?;
    let element = ChemicalElement::new(data.table(), data.colors(), &args.symbol)?;
    print_element(&element);
    Ok(())
}

pub fn run_bond(args: BondArgs) -> Result<()> {
    let data = resolve_lookup_data(&args.data)?;
    let table = data.table();

    let first = table
        .normalize_symbol(&args.first)
        .ok_or_else(|| anyhow!("Unknown element symbol '{}'", args.first))?;
    let second = table
        .normalize_symbol(&args.second)
        .ok_or_else(|| anyhow!("Unknown element symbol '{}'", args.second))?;

    let bonds = if args.exact {
        let records: Vec<_> = data
            .bonds()
            .filter(first, second, args.order)
            .into_iter()
            .filter(|r| r.is_ordered_pair(first, second))
            .collect();
        if records.is_empty() {
            bail!(
                "No bond stored as [{}, {}]{}",
                first,
                second,
                args.order
                    .map(|o| format!(" with order {o}"))
                    .unwrap_or_default()
            );
        }
        BondData::Measured(records)
    } else {
        data.bonds().for_elements(table, first, second, args.order)
    };

    print_bonds(first, second, &bonds);
    Ok(())
}
